use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Build a position from a piece list. Hash and clocks are set as if the
/// position had been parsed from a move-one FEN.
pub fn setup(pieces: &[(Square, Piece)], side: Side, castle_rights: u8) -> Position {
    let mut pos = Position::empty();
    for &(sq, piece) in pieces {
        pos.add_piece(sq, piece);
    }
    pos.side_to_move = side;
    pos.castle_rights = castle_rights;
    pos.half_move = 2 + side.index() as u32;
    pos.hash = pos.compute_hash();
    pos
}

/// Check if a move from `from` to `to` exists in the move list.
pub fn has_move(moves: &[Move], from: Square, to: Square) -> bool {
    moves.iter().any(|m| m.from() == from && m.to() == to)
}

/// All moves starting on `from`.
pub fn from_square(moves: &[Move], from: Square) -> Vec<Move> {
    moves.iter().copied().filter(|m| m.from() == from).collect()
}

/// Count moves carrying a specific flag.
pub fn count_flag(moves: &[Move], flag: MoveFlag) -> usize {
    moves.iter().filter(|m| m.flag() == flag).count()
}

/// Canonical state snapshot for round-trip comparisons. Piece removal swaps
/// with the last list entry, so the lists compare as sorted sets.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot {
    board: Vec<Piece>,
    lists: Vec<Vec<Square>>,
    side: Side,
    castle_rights: u8,
    en_passant: Square,
    fifty_move: u32,
    half_move: u32,
    hash: u64,
    history_len: usize,
}

pub fn snapshot(pos: &Position) -> Snapshot {
    let lists = (0..PIECE_KINDS)
        .map(|idx| {
            let mut list = pos.piece_squares(Piece::from_index(idx)).to_vec();
            list.sort_unstable();
            list
        })
        .collect();
    Snapshot {
        board: pos.board.to_vec(),
        lists,
        side: pos.side_to_move,
        castle_rights: pos.castle_rights,
        en_passant: pos.en_passant,
        fifty_move: pos.fifty_move,
        half_move: pos.half_move,
        hash: pos.hash,
        history_len: pos.history.len(),
    }
}

// ==================== TEST MODULES ====================

mod perft;
