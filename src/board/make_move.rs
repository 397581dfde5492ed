use log::trace;

use super::moves::{Move, MoveFlag};
use super::piece::{Piece, Side};
use super::position::{Position, BLACK_LONG, BLACK_SHORT, WHITE_LONG, WHITE_SHORT};
use super::square::{shift, Square, A1, A8, D1, D8, E1, E8, F1, F8, H1, H8, NO_SQUARE};
use super::zobrist::ZOBRIST;

/// Everything needed to take a move back. The move token itself carries the
/// placement changes; the rest restores the scalar state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Undo {
    pub(crate) mv: Move,
    castle_rights: u8,
    en_passant: Square,
    fifty_move: u32,
    hash: u64,
}

/// Rights that survive a move touching `sq`. Rights imply the king and rook
/// still stand on their home squares, so keying on the square alone covers
/// king moves, rook moves and rooks captured at home.
fn castle_rights_mask(sq: Square) -> u8 {
    match sq {
        A1 => !WHITE_LONG,
        E1 => !(WHITE_SHORT | WHITE_LONG),
        H1 => !WHITE_SHORT,
        A8 => !BLACK_LONG,
        E8 => !(BLACK_SHORT | BLACK_LONG),
        H8 => !BLACK_SHORT,
        _ => 0xFF,
    }
}

impl Position {
    pub(crate) fn add_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(piece.is_real(), "adding {piece:?}");
        debug_assert_eq!(self.board[sq], Piece::Empty, "add would overwrite {sq}");
        let idx = piece.index();
        self.board[sq] = piece;
        self.positions[idx][self.counts[idx] as usize] = sq;
        self.counts[idx] += 1;
        self.hash ^= ZOBRIST.piece[sq][idx];
    }

    /// Swap-with-last removal from the position list, O(1) after the scan.
    pub(crate) fn remove_piece(&mut self, sq: Square) {
        let piece = self.board[sq];
        debug_assert!(piece.is_real(), "removing {piece:?} from {sq}");
        let idx = piece.index();
        self.board[sq] = Piece::Empty;
        let count = self.counts[idx] as usize;
        let list = &mut self.positions[idx];
        let slot = list[..count]
            .iter()
            .position(|&entry| entry == sq)
            .expect("removed piece not in its position list");
        list[slot] = list[count - 1];
        self.counts[idx] -= 1;
        self.hash ^= ZOBRIST.piece[sq][idx];
    }

    pub(crate) fn move_piece(&mut self, from: Square, to: Square) {
        debug_assert_eq!(self.board[to], Piece::Empty, "move onto occupied {to}");
        let piece = self.board[from];
        debug_assert!(piece.is_real(), "moving {piece:?} from {from}");
        let idx = piece.index();
        self.board[from] = Piece::Empty;
        self.board[to] = piece;
        let count = self.counts[idx] as usize;
        let list = &mut self.positions[idx];
        let slot = list[..count]
            .iter()
            .position(|&entry| entry == from)
            .expect("moved piece not in its position list");
        list[slot] = to;
        self.hash ^= ZOBRIST.piece[from][idx] ^ ZOBRIST.piece[to][idx];
    }

    fn set_castle_rights(&mut self, rights: u8) {
        self.hash ^= ZOBRIST.castle[self.castle_rights as usize] ^ ZOBRIST.castle[rights as usize];
        self.castle_rights = rights;
    }

    fn set_en_passant(&mut self, sq: Square) {
        self.hash ^= ZOBRIST.en_passant[self.en_passant] ^ ZOBRIST.en_passant[sq];
        self.en_passant = sq;
    }

    fn flip_side(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.hash ^= ZOBRIST.side;
    }

    /// Apply `mv` and report whether the mover's king survived unattacked.
    ///
    /// The state is fully reversible either way: the caller is expected to
    /// call `unmake_move` afterwards whether or not the move was legal.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let side = self.side_to_move;
        let other = side.opposite();
        debug_assert_eq!(mv.moved().side(), side, "move token from the wrong side");
        trace!("make {mv} ({:?})", mv.flag());

        self.history.push(Undo {
            mv,
            castle_rights: self.castle_rights,
            en_passant: self.en_passant,
            fifty_move: self.fifty_move,
            hash: self.hash,
        });
        self.half_move += 1;
        self.move_cache = None;

        let from = mv.from();
        let to = mv.to();

        if mv.is_promotion() {
            if mv.is_capture() {
                self.remove_piece(to);
            }
            self.remove_piece(from);
            self.add_piece(to, mv.promoted());
            self.set_en_passant(NO_SQUARE);
        } else if mv.is_castle() {
            let (rook_from, rook_to) = match (side, mv.flag()) {
                (Side::White, MoveFlag::ShortCastle) => (H1, F1),
                (Side::White, MoveFlag::LongCastle) => (A1, D1),
                (Side::Black, MoveFlag::ShortCastle) => (H8, F8),
                (Side::Black, MoveFlag::LongCastle) => (A8, D8),
                _ => unreachable!(),
            };
            self.move_piece(from, to);
            self.move_piece(rook_from, rook_to);
            self.set_en_passant(NO_SQUARE);
        } else {
            match mv.flag() {
                MoveFlag::DoublePawn => {
                    self.move_piece(from, to);
                    // The target only counts when an enemy pawn stands next
                    // to the pushed pawn and could actually take it.
                    let enemy_pawn = other.pawn();
                    if self.board[shift(to, -1)] == enemy_pawn
                        || self.board[shift(to, 1)] == enemy_pawn
                    {
                        self.set_en_passant(shift(to, -side.pawn_push()));
                    } else {
                        self.set_en_passant(NO_SQUARE);
                    }
                }
                MoveFlag::EnPassant => {
                    self.remove_piece(shift(to, -side.pawn_push()));
                    self.move_piece(from, to);
                    self.set_en_passant(NO_SQUARE);
                }
                MoveFlag::Capture => {
                    self.remove_piece(to);
                    self.move_piece(from, to);
                    self.set_en_passant(NO_SQUARE);
                }
                MoveFlag::Quiet => {
                    self.move_piece(from, to);
                    self.set_en_passant(NO_SQUARE);
                }
                MoveFlag::ShortCastle | MoveFlag::LongCastle => unreachable!(),
            }
        }

        self.set_castle_rights(
            self.castle_rights & castle_rights_mask(from) & castle_rights_mask(to),
        );

        if mv.is_capture() || mv.moved().is_pawn() {
            self.fifty_move = 0;
        } else {
            self.fifty_move += 1;
        }

        self.flip_side();
        !self.square_attacked(self.king_square(side), other)
    }

    /// Take back the most recent move. Calling this with an empty history is
    /// a caller bug.
    pub fn unmake_move(&mut self) {
        let entry = self
            .history
            .pop()
            .expect("unmake_move with empty history");
        let mv = entry.mv;
        trace!("unmake {mv} ({:?})", mv.flag());

        self.move_cache = None;
        self.set_castle_rights(entry.castle_rights);
        self.set_en_passant(entry.en_passant);
        self.fifty_move = entry.fifty_move;
        debug_assert!(self.half_move > 0, "unmaking before the first move");
        self.half_move -= 1;
        self.flip_side();

        let side = self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        if mv.is_promotion() {
            self.remove_piece(to);
            self.add_piece(from, mv.moved());
            if mv.is_capture() {
                self.add_piece(to, mv.captured());
            }
        } else if mv.is_castle() {
            let (rook_from, rook_to) = match (side, mv.flag()) {
                (Side::White, MoveFlag::ShortCastle) => (H1, F1),
                (Side::White, MoveFlag::LongCastle) => (A1, D1),
                (Side::Black, MoveFlag::ShortCastle) => (H8, F8),
                (Side::Black, MoveFlag::LongCastle) => (A8, D8),
                _ => unreachable!(),
            };
            self.move_piece(to, from);
            self.move_piece(rook_to, rook_from);
        } else {
            self.move_piece(to, from);
            if mv.is_capture() {
                let captured_sq = if mv.flag() == MoveFlag::EnPassant {
                    shift(to, -side.pawn_push())
                } else {
                    to
                };
                self.add_piece(captured_sq, mv.captured());
            }
        }

        debug_assert_eq!(self.hash, entry.hash, "hash mismatch after unmake");
    }
}
