/*
 * SQUARE INDEXING ON THE PADDED 10x12 BOARD
 *
 * Ranks 2..9 and files 1..8 of the grid hold the real 8x8 board, so
 * A1 = 21, H1 = 28, A8 = 91, H8 = 98. The surrounding ring is off-board
 * and lets sliding loops terminate without bounds checks.
 */

pub type Square = usize;

pub const BOARD_SIZE: usize = 120;

/// Placeholder for "no square" (cleared en passant target). Index 0 lies on
/// the off-board ring, so every per-square hash table keeps it at zero.
pub const NO_SQUARE: Square = 0;

pub const A1: Square = 21; pub const B1: Square = 22; pub const C1: Square = 23; pub const D1: Square = 24;
pub const E1: Square = 25; pub const F1: Square = 26; pub const G1: Square = 27; pub const H1: Square = 28;
pub const A2: Square = 31; pub const B2: Square = 32; pub const C2: Square = 33; pub const D2: Square = 34;
pub const E2: Square = 35; pub const F2: Square = 36; pub const G2: Square = 37; pub const H2: Square = 38;
pub const A3: Square = 41; pub const B3: Square = 42; pub const C3: Square = 43; pub const D3: Square = 44;
pub const E3: Square = 45; pub const F3: Square = 46; pub const G3: Square = 47; pub const H3: Square = 48;
pub const A4: Square = 51; pub const B4: Square = 52; pub const C4: Square = 53; pub const D4: Square = 54;
pub const E4: Square = 55; pub const F4: Square = 56; pub const G4: Square = 57; pub const H4: Square = 58;
pub const A5: Square = 61; pub const B5: Square = 62; pub const C5: Square = 63; pub const D5: Square = 64;
pub const E5: Square = 65; pub const F5: Square = 66; pub const G5: Square = 67; pub const H5: Square = 68;
pub const A6: Square = 71; pub const B6: Square = 72; pub const C6: Square = 73; pub const D6: Square = 74;
pub const E6: Square = 75; pub const F6: Square = 76; pub const G6: Square = 77; pub const H6: Square = 78;
pub const A7: Square = 81; pub const B7: Square = 82; pub const C7: Square = 83; pub const D7: Square = 84;
pub const E7: Square = 85; pub const F7: Square = 86; pub const G7: Square = 87; pub const H7: Square = 88;
pub const A8: Square = 91; pub const B8: Square = 92; pub const C8: Square = 93; pub const D8: Square = 94;
pub const E8: Square = 95; pub const F8: Square = 96; pub const G8: Square = 97; pub const H8: Square = 98;

pub const RANK_1: usize = 0;
pub const RANK_2: usize = 1;
pub const RANK_3: usize = 2;
pub const RANK_6: usize = 5;
pub const RANK_7: usize = 6;
pub const RANK_8: usize = 7;

pub const DIAGONAL_OFFSETS: [isize; 4] = [-11, -9, 9, 11];
pub const ORTHOGONAL_OFFSETS: [isize; 4] = [-10, -1, 1, 10];
pub const KNIGHT_OFFSETS: [isize; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];
pub const KING_OFFSETS: [isize; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// True for the 64 playable squares, false on the sentinel ring.
pub const fn valid_square(sq: Square) -> bool {
    let row = sq / 10;
    let col = sq % 10;
    sq < BOARD_SIZE && row >= 2 && row <= 9 && col >= 1 && col <= 8
}

/// Zero-based rank (A1 is rank 0). Only meaningful for valid squares.
pub const fn rank_of(sq: Square) -> usize {
    sq / 10 - 2
}

/// Zero-based file (A-file is 0). Only meaningful for valid squares.
pub const fn file_of(sq: Square) -> usize {
    sq % 10 - 1
}

pub const fn square_at(rank: usize, file: usize) -> Square {
    21 + 10 * rank + file
}

/// Step `offset` cells from `sq`. The caller guarantees the result stays
/// inside the 120-cell grid (the ring absorbs every legal step).
#[inline]
pub fn shift(sq: Square, offset: isize) -> Square {
    (sq as isize + offset) as Square
}

pub fn to_algebraic(sq: Square) -> String {
    if sq == NO_SQUARE {
        return "-".to_string();
    }
    let file_char = (b'a' + file_of(sq) as u8) as char;
    let rank_char = (b'1' + rank_of(sq) as u8) as char;
    format!("{file_char}{rank_char}")
}

pub fn from_algebraic(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(square_at((rank - b'1') as usize, (file - b'a') as usize))
}
