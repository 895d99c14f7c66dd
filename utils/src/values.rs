use cozy_chess::Piece;

pub const PAWN_VALUE_MG: i32 = 188;
pub const KNIGHT_VALUE_MG: i32 = 753;
pub const BISHOP_VALUE_MG: i32 = 826;
pub const ROOK_VALUE_MG: i32 = 1285;
pub const QUEEN_VALUE_MG: i32 = 2513;

/// Total non-pawn material at or above which the position counts as a full middlegame.
pub const MIDGAME_LIMIT: i32 = 15258;
/// Total non-pawn material at or below which the position counts as a pure endgame.
pub const ENDGAME_LIMIT: i32 = 3915;

/// Middlegame value of a piece. Kings carry no material value.
#[inline(always)]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE_MG,
        Piece::Knight => KNIGHT_VALUE_MG,
        Piece::Bishop => BISHOP_VALUE_MG,
        Piece::Rook => ROOK_VALUE_MG,
        Piece::Queen => QUEEN_VALUE_MG,
        Piece::King => 0,
    }
}
