use super::moves::{Move, MoveFlag, MoveList};
use super::piece::{Piece, Side};
use super::position::{Position, BLACK_LONG, BLACK_SHORT, WHITE_LONG, WHITE_SHORT};
use super::square::{
    rank_of, shift, B1, B8, C1, C8, D1, D8, DIAGONAL_OFFSETS, E1, E8, F1, F8, G1, G8,
    KING_OFFSETS, KNIGHT_OFFSETS, NO_SQUARE, ORTHOGONAL_OFFSETS, RANK_1, RANK_2, RANK_7, RANK_8,
};

/// Half-moves since the last capture or pawn push after which the position
/// is treated as a forced draw and move generation stops.
pub const FIFTY_MOVE_LIMIT: u32 = 75;

/// Total game plies after which the position is treated as terminal.
pub const MAX_GAME_PLIES: u32 = 1000;

impl Position {
    /// All pseudo-legal moves for the side to move: legality is checked for
    /// everything except leaving one's own king attacked. Returns an empty
    /// list when a draw threshold makes the position terminal.
    ///
    /// Keeps a single cached list keyed by the position hash; any mutation
    /// drops the entry.
    pub fn pseudo_moves(&mut self) -> MoveList {
        if let Some((hash, list)) = &self.move_cache {
            if *hash == self.hash {
                return list.clone();
            }
        }
        let list = self.pseudo_moves_for(self.side_to_move);
        self.move_cache = Some((self.hash, list.clone()));
        list
    }

    /// Uncached generation for an arbitrary side.
    pub fn pseudo_moves_for(&self, side: Side) -> MoveList {
        let mut result = MoveList::new();
        if self.fifty_move > FIFTY_MOVE_LIMIT || self.half_move > MAX_GAME_PLIES {
            return result;
        }

        self.slider_moves(side.queen(), &DIAGONAL_OFFSETS, &mut result);
        self.slider_moves(side.queen(), &ORTHOGONAL_OFFSETS, &mut result);
        self.slider_moves(side.rook(), &ORTHOGONAL_OFFSETS, &mut result);
        self.slider_moves(side.bishop(), &DIAGONAL_OFFSETS, &mut result);
        self.knight_moves(side, &mut result);
        self.pawn_moves(side, &mut result);
        self.king_moves(side, &mut result);
        self.castle_moves(side, &mut result);

        result
    }

    fn slider_moves(&self, piece: Piece, offsets: &[isize], out: &mut MoveList) {
        for &start in self.piece_squares(piece) {
            for &offset in offsets {
                let mut target = shift(start, offset);
                while self.board[target] == Piece::Empty {
                    out.push(Move::quiet(start, target, piece));
                    target = shift(target, offset);
                }
                let occupant = self.board[target];
                if occupant.opposes(piece) && !occupant.is_king() {
                    out.push(Move::capture(start, target, piece, occupant));
                }
            }
        }
    }

    fn knight_moves(&self, side: Side, out: &mut MoveList) {
        let knight = side.knight();
        for &start in self.piece_squares(knight) {
            for &offset in &KNIGHT_OFFSETS {
                let target = shift(start, offset);
                let occupant = self.board[target];
                if occupant == Piece::Empty {
                    out.push(Move::quiet(start, target, knight));
                } else if occupant.opposes(knight) && !occupant.is_king() {
                    out.push(Move::capture(start, target, knight, occupant));
                }
            }
        }
    }

    fn pawn_moves(&self, side: Side, out: &mut MoveList) {
        let pawn = side.pawn();
        let up = side.pawn_push();
        let (start_rank, promo_rank) = match side {
            Side::White => (RANK_2, RANK_8),
            Side::Black => (RANK_7, RANK_1),
        };
        let promotions = [side.queen(), side.rook(), side.bishop(), side.knight()];

        for &start in self.piece_squares(pawn) {
            if rank_of(start) == start_rank
                && self.board[shift(start, up)] == Piece::Empty
                && self.board[shift(start, 2 * up)] == Piece::Empty
            {
                out.push(Move::double_pawn(start, shift(start, 2 * up), pawn));
            }

            let ahead = shift(start, up);
            if self.board[ahead] == Piece::Empty {
                if rank_of(ahead) == promo_rank {
                    for promoted in promotions {
                        out.push(Move::promotion(start, ahead, pawn, promoted));
                    }
                } else {
                    out.push(Move::quiet(start, ahead, pawn));
                }
            }

            for target in [shift(ahead, -1), shift(ahead, 1)] {
                let occupant = self.board[target];
                if occupant.opposes(pawn) && !occupant.is_king() {
                    if rank_of(target) == promo_rank {
                        for promoted in promotions {
                            out.push(Move::promotion_capture(
                                start, target, pawn, promoted, occupant,
                            ));
                        }
                    } else {
                        out.push(Move::capture(start, target, pawn, occupant));
                    }
                }
                if self.en_passant != NO_SQUARE
                    && target == self.en_passant
                    && occupant == Piece::Empty
                {
                    out.push(Move::en_passant(start, target, pawn));
                }
            }
        }
    }

    fn king_moves(&self, side: Side, out: &mut MoveList) {
        let king = side.king();
        for &start in self.piece_squares(king) {
            for &offset in &KING_OFFSETS {
                let target = shift(start, offset);
                let occupant = self.board[target];
                if occupant == Piece::Empty {
                    out.push(Move::quiet(start, target, king));
                } else if occupant.opposes(king) && !occupant.is_king() {
                    out.push(Move::capture(start, target, king, occupant));
                }
            }
        }
    }

    /// The king's origin and transit square must be safe and the path empty;
    /// the landing square is left to the legality filter.
    fn castle_moves(&self, side: Side, out: &mut MoveList) {
        let king = side.king();
        match side {
            Side::White => {
                if self.castle_rights & (WHITE_SHORT | WHITE_LONG) == 0 {
                    return;
                }
                let e1_attacked = self.square_attacked(E1, Side::Black);
                if self.castle_rights & WHITE_SHORT != 0
                    && !e1_attacked
                    && !self.square_attacked(F1, Side::Black)
                    && self.board[F1] == Piece::Empty
                    && self.board[G1] == Piece::Empty
                {
                    out.push(Move::castle(E1, G1, king, MoveFlag::ShortCastle));
                }
                if self.castle_rights & WHITE_LONG != 0
                    && !e1_attacked
                    && !self.square_attacked(D1, Side::Black)
                    && self.board[D1] == Piece::Empty
                    && self.board[C1] == Piece::Empty
                    && self.board[B1] == Piece::Empty
                {
                    out.push(Move::castle(E1, C1, king, MoveFlag::LongCastle));
                }
            }
            Side::Black => {
                if self.castle_rights & (BLACK_SHORT | BLACK_LONG) == 0 {
                    return;
                }
                let e8_attacked = self.square_attacked(E8, Side::White);
                if self.castle_rights & BLACK_SHORT != 0
                    && !e8_attacked
                    && !self.square_attacked(F8, Side::White)
                    && self.board[F8] == Piece::Empty
                    && self.board[G8] == Piece::Empty
                {
                    out.push(Move::castle(E8, G8, king, MoveFlag::ShortCastle));
                }
                if self.castle_rights & BLACK_LONG != 0
                    && !e8_attacked
                    && !self.square_attacked(D8, Side::White)
                    && self.board[D8] == Piece::Empty
                    && self.board[C8] == Piece::Empty
                    && self.board[B8] == Piece::Empty
                {
                    out.push(Move::castle(E8, C8, king, MoveFlag::LongCastle));
                }
            }
        }
    }

    /// Fully legal moves, filtered by make/test/unmake on a working copy.
    pub fn legal_moves(&self) -> MoveList {
        let mut work = self.clone();
        let mut result = MoveList::new();
        for mv in work.pseudo_moves() {
            if work.make_move(mv) {
                result.push(mv);
            }
            work.unmake_move();
        }
        result
    }

    /// Leaf count of the legal move tree at `depth`.
    pub fn perft(&self, depth: u32) -> u64 {
        let mut work = self.clone();
        work.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0;
        for mv in self.pseudo_moves() {
            if self.make_move(mv) {
                nodes += if depth == 1 {
                    1
                } else {
                    self.perft_inner(depth - 1)
                };
            }
            self.unmake_move();
        }
        nodes
    }

    /// Look a legal move up by its coordinate form, e.g. `e2e4` or `e7e8q`.
    pub fn find_move(&self, coord: &str) -> Option<Move> {
        self.legal_moves()
            .iter()
            .copied()
            .find(|mv| mv.to_string() == coord)
    }
}
