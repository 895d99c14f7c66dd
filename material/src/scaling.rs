use cozy_chess::{Color, Piece};
use endgame::{
    ScaleFn, SCALE_FACTOR_DRAW, SCALE_FACTOR_NORMAL, SCALE_FACTOR_ONEPAWN, SCALE_KBPSK,
    SCALE_KPKP, SCALE_KPSK, SCALE_KQKRPS,
};
use utils::{MaterialCounts, Variant, BISHOP_VALUE_MG, ROOK_VALUE_MG};

use crate::classify::{is_kbpsks, is_kqkrps};

/// Pawnless side with a rook or more, facing at most a minor piece.
const SCALE_FACTOR_VS_MINOR: u8 = 4;
/// Pawnless side with a rook or more, facing more than a minor piece.
const SCALE_FACTOR_VS_MAJOR: u8 = 14;

type Rule = (fn(&MaterialCounts, Color) -> bool, [ScaleFn; 2]);

// First match wins for a side.
const GENERIC_SCALERS: [Rule; 2] = [(is_kbpsks, SCALE_KBPSK), (is_kqkrps, SCALE_KQKRPS)];

#[inline(always)]
fn assign(scaling: &mut [Option<ScaleFn>; 2], routine: ScaleFn) {
    let slot = &mut scaling[routine.strong_side as usize];
    if slot.is_none() {
        *slot = Some(routine);
    }
}

/// Generic scaling routines for sides that have none yet.
pub(crate) fn assign_generic(material: &MaterialCounts, scaling: &mut [Option<ScaleFn>; 2]) {
    for color in Color::ALL {
        if let Some((_, routines)) = GENERIC_SCALERS
            .iter()
            .find(|(matches, _)| matches(material, color))
        {
            assign(scaling, routines[color as usize]);
        }
    }
}

/// Kings and pawns only.
pub(crate) fn assign_pawn_endings(material: &MaterialCounts, scaling: &mut [Option<ScaleFn>; 2]) {
    let npm = material.non_pawn_material(Color::White) + material.non_pawn_material(Color::Black);
    if npm != 0 || !material.has_pawns() {
        return;
    }

    let white_pawns = material.count(Color::White, Piece::Pawn);
    let black_pawns = material.count(Color::Black, Piece::Pawn);

    if black_pawns == 0 {
        debug_assert!(material.variant() != Variant::Chess || white_pawns >= 2);
        assign(scaling, SCALE_KPSK[Color::White as usize]);
    } else if white_pawns == 0 {
        debug_assert!(material.variant() != Variant::Chess || black_pawns >= 2);
        assign(scaling, SCALE_KPSK[Color::Black as usize]);
    } else if white_pawns == 1 && black_pawns == 1 {
        assign(scaling, SCALE_KPKP[Color::White as usize]);
        assign(scaling, SCALE_KPKP[Color::Black as usize]);
    }
}

/// With zero or one pawn a small material edge is hard to convert. Catches
/// trivial draws (KK, KBK, KNK) and scales down cases such as KRKBP and KmmKm.
pub(crate) fn drawish_factors(material: &MaterialCounts) -> [u8; 2] {
    let mut factor = [SCALE_FACTOR_NORMAL; 2];

    for us in Color::ALL {
        let ours = material.non_pawn_material(us);
        let theirs = material.non_pawn_material(!us);
        if ours - theirs > BISHOP_VALUE_MG {
            continue;
        }

        let pawns = material.count(us, Piece::Pawn);
        if pawns == 0 {
            factor[us as usize] = if ours < ROOK_VALUE_MG {
                SCALE_FACTOR_DRAW
            } else if theirs <= BISHOP_VALUE_MG {
                SCALE_FACTOR_VS_MINOR
            } else {
                SCALE_FACTOR_VS_MAJOR
            };
        }
        if pawns == 1 {
            factor[us as usize] = SCALE_FACTOR_ONEPAWN;
        }
    }

    factor
}
