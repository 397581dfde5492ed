use super::piece::{Piece, Side};
use super::position::Position;
use super::square::{shift, Square, DIAGONAL_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_OFFSETS};

impl Position {
    /// Does any piece of `by` attack `target`? Independent of whose turn it
    /// is and of what currently stands on `target`.
    pub fn square_attacked(&self, target: Square, by: Side) -> bool {
        let knight = by.knight();
        let pawn = by.pawn();
        // The adjacent-square check below subsumes general king attacks.
        let king_square = self.king_square(by);

        for &offset in &DIAGONAL_OFFSETS {
            let mut sq = shift(target, offset);
            if sq == king_square {
                return true;
            }
            while self.board[sq] == Piece::Empty {
                sq = shift(sq, offset);
            }
            let piece = self.board[sq];
            if piece.is_real() && piece.side() == by && piece.is_diagonal_slider() {
                return true;
            }
        }

        for &offset in &ORTHOGONAL_OFFSETS {
            let mut sq = shift(target, offset);
            if sq == king_square {
                return true;
            }
            while self.board[sq] == Piece::Empty {
                sq = shift(sq, offset);
            }
            let piece = self.board[sq];
            if piece.is_real() && piece.side() == by && piece.is_orthogonal_slider() {
                return true;
            }
        }

        for &offset in &KNIGHT_OFFSETS {
            if self.board[shift(target, offset)] == knight {
                return true;
            }
        }

        // A white pawn attacks from one rank below the target, a black pawn
        // from one rank above.
        let pawn_offsets: [isize; 2] = match by {
            Side::White => [-9, -11],
            Side::Black => [9, 11],
        };
        for &offset in &pawn_offsets {
            if self.board[shift(target, offset)] == pawn {
                return true;
            }
        }

        false
    }

    /// Is the king of the side to move currently attacked?
    pub fn king_in_check(&self) -> bool {
        let side = self.side_to_move;
        self.square_attacked(self.king_square(side), side.opposite())
    }
}
