use cozy_chess::Board;
use std::cell::OnceCell;

use crate::{MaterialCounts, Variant};

pub struct Position<'a> {
    pub board: &'a Board,
    pub variant: Variant,
    material: OnceCell<MaterialCounts>,
}

impl<'a> Position<'a> {
    #[inline(always)]
    pub fn new(board: &'a Board) -> Self {
        Self::with_variant(board, Variant::Chess)
    }

    #[inline(always)]
    pub fn with_variant(board: &'a Board, variant: Variant) -> Self {
        Self {
            board,
            variant,
            material: OnceCell::new(),
        }
    }

    // Counted once on first use, then reused
    #[inline(always)]
    pub fn material(&self) -> &MaterialCounts {
        self.material
            .get_or_init(|| MaterialCounts::from_board(self.board, self.variant))
    }

    #[inline(always)]
    pub fn material_key(&self) -> u64 {
        self.material().material_key()
    }

    #[inline(always)]
    pub fn game_phase(&self) -> f32 {
        self.material().game_phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::{Color, Piece};

    #[test]
    fn test_position_material_follows_variant() {
        let board = Board::default();
        let chess = Position::new(&board);
        let anti = Position::with_variant(&board, Variant::Antichess);

        assert_eq!(chess.material().count(Color::Black, Piece::Rook), 2);
        assert_ne!(chess.material_key(), anti.material_key());
        assert_eq!(chess.game_phase(), anti.game_phase());
    }
}
