// Material distributions with a generic endgame routine. Each predicate is
// asked from the point of view of `us`.

use cozy_chess::{Color, Piece};
use utils::{MaterialCounts, BISHOP_VALUE_MG, QUEEN_VALUE_MG, ROOK_VALUE_MG};

/// At least a rook's worth of pieces against a lone king.
#[inline(always)]
pub fn is_kxk(material: &MaterialCounts, us: Color) -> bool {
    material.pieces(!us) <= 1 && material.non_pawn_material(us) >= ROOK_VALUE_MG
}

/// A single bishop plus pawns.
#[inline(always)]
pub fn is_kbpsks(material: &MaterialCounts, us: Color) -> bool {
    material.non_pawn_material(us) == BISHOP_VALUE_MG
        && material.count(us, Piece::Bishop) == 1
        && material.count(us, Piece::Pawn) >= 1
}

/// A lone queen against a rook and pawns.
#[inline(always)]
pub fn is_kqkrps(material: &MaterialCounts, us: Color) -> bool {
    material.count(us, Piece::Pawn) == 0
        && material.non_pawn_material(us) == QUEEN_VALUE_MG
        && material.count(us, Piece::Queen) == 1
        && material.count(!us, Piece::Rook) == 1
        && material.count(!us, Piece::Pawn) >= 1
}
