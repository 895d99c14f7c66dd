use cozy_chess::{Color, Piece};
use utils::{MaterialCounts, Variant};

// Slot 0 is the bishop pair, treated as an extra piece type so it can carry
// its own coefficients. The remaining slots follow cozy-chess piece order.
const SLOTS: usize = 7;
const BISHOP_PAIR: usize = 0;
const QUEEN: usize = 5;
const KING: usize = 6;

type Matrix = [[i32; SLOTS]; SLOTS];
type PieceCount = [[i32; SLOTS]; Color::NUM];

// Second-degree polynomial material imbalance by Tord Romstad.
// Row: our piece type. Column: the piece type it is weighed against (ours or theirs).
#[rustfmt::skip]
const QUADRATIC_OURS: Matrix = [
    // pair  pawn knight bishop  rook queen king
    [ 1667,    0,    0,     0,    0,    0,   0], // Bishop pair
    [   40,    2,    0,     0,    0,    0,   0], // Pawn
    [   32,  255,   -3,     0,    0,    0,   0], // Knight
    [    0,  104,    4,     0,    0,    0,   0], // Bishop
    [  -26,   -2,   47,   105, -149,    0,   0], // Rook
    [ -185,   24,  122,   137, -134,    0,   0], // Queen
    [    0,    0,    0,     0,    0,    0,   0], // King
];

#[rustfmt::skip]
const QUADRATIC_THEIRS: Matrix = [
    // pair  pawn knight bishop  rook queen king
    [    0,    0,    0,     0,    0,    0,   0], // Bishop pair
    [   36,    0,    0,     0,    0,    0,   0], // Pawn
    [    9,   63,    0,     0,    0,    0,   0], // Knight
    [   59,   65,   42,     0,    0,    0,   0], // Bishop
    [   46,   39,   24,   -24,    0,    0,   0], // Rook
    [  101,  100,  -37,   141,  268,    0,   0], // Queen
    [    0,    0,    0,     0,    0,    0,   0], // King
];

#[rustfmt::skip]
const QUADRATIC_OURS_ANTI: Matrix = [
    // pair  pawn knight bishop  rook queen king
    [  -62,    0,    0,     0,    0,    0,    0], // Bishop pair
    [ -179,   59,    0,     0,    0,    0,    0], // Pawn
    [  -50,  178,  -47,     0,    0,    0,    0], // Knight
    [    0, -130, -187,     0,    0,    0,    0], // Bishop
    [ -155, -317,   60,  -218, -288,    0,    0], // Rook
    [   89, -259,  -60,  -179,  -32,  -76,    0], // Queen
    [ -217,  -79,   40,   -23,    9,  -63, -197], // King
];

#[rustfmt::skip]
const QUADRATIC_THEIRS_ANTI: Matrix = [
    // pair  pawn knight bishop  rook queen king
    [    0,    0,    0,     0,    0,    0,   0], // Bishop pair
    [  110,    0,    0,     0,    0,    0,   0], // Pawn
    [    9,   60,    0,     0,    0,    0,   0], // Knight
    [  -53, -143,   33,     0,    0,    0,   0], // Bishop
    [   73, -298,    3,    41,    0,    0,   0], // Rook
    [ -141, -370,   56,    45,  -79,    0,   0], // Queen
    [  246,  -40, -194,   178,  -39,   74,   0], // King
];

/// Coefficients and the last scored slot for one rule set.
struct Coefficients {
    ours: &'static Matrix,
    theirs: &'static Matrix,
    last: usize,
}

static CHESS: Coefficients = Coefficients {
    ours: &QUADRATIC_OURS,
    theirs: &QUADRATIC_THEIRS,
    last: QUEEN,
};

// Kings can be captured and multiplied by promotion, so they are scored too.
static ANTICHESS: Coefficients = Coefficients {
    ours: &QUADRATIC_OURS_ANTI,
    theirs: &QUADRATIC_THEIRS_ANTI,
    last: KING,
};

impl Coefficients {
    #[inline(always)]
    fn for_variant(variant: Variant) -> &'static Coefficients {
        match variant {
            Variant::Chess => &CHESS,
            Variant::Antichess => &ANTICHESS,
        }
    }
}

#[inline(always)]
fn piece_count(material: &MaterialCounts) -> PieceCount {
    let mut pc = [[0; SLOTS]; Color::NUM];
    for color in Color::ALL {
        let counts = &mut pc[color as usize];
        counts[BISHOP_PAIR] = material.bishop_pair(color) as i32;
        for piece in Piece::ALL {
            counts[piece as usize + 1] = material.count(color, piece) as i32;
        }
    }
    pc
}

fn side_bonus(pc: &PieceCount, us: Color, coeffs: &Coefficients) -> i32 {
    let ours = &pc[us as usize];
    let theirs = &pc[!us as usize];

    let mut bonus = 0;
    for pt1 in 0..=coeffs.last {
        if ours[pt1] == 0 {
            continue;
        }

        let mut v = 0;
        for pt2 in 0..=pt1 {
            v += coeffs.ours[pt1][pt2] * ours[pt2] + coeffs.theirs[pt1][pt2] * theirs[pt2];
        }

        bonus += ours[pt1] * v;
    }

    bonus
}

/// Material imbalance from White's perspective, in evaluation units.
///
/// The raw polynomial difference is divided by 16, truncating toward zero.
pub fn imbalance(material: &MaterialCounts) -> i16 {
    let coeffs = Coefficients::for_variant(material.variant());
    let pc = piece_count(material);

    let white = side_bonus(&pc, Color::White, coeffs);
    let black = side_bonus(&pc, Color::Black, coeffs);

    ((white - black) / 16) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;

    fn chess(code: &str) -> MaterialCounts {
        MaterialCounts::from_code(code, Color::White, Variant::Chess).unwrap()
    }

    #[test]
    fn test_symmetric_material_is_balanced() {
        let start = MaterialCounts::from_board(&Board::default(), Variant::Chess);
        assert_eq!(imbalance(&start), 0);
        assert_eq!(imbalance(&chess("KRPKRP")), 0);
    }

    #[test]
    fn test_bishop_pair_against_knight() {
        // White: pair 1667 + bishops 2 * (theirs knight 42) = 1751
        // Black: knight (ours knight -3, theirs pair 9) = 6
        // (1751 - 6) / 16 = 109
        assert_eq!(imbalance(&chess("KBBKN")), 109);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // -1745 / 16 is -109.06; flooring would give -110.
        assert_eq!(imbalance(&chess("KBBKN").flipped()), -109);
    }

    #[test]
    fn test_second_bishop_adds_pair_bonus() {
        // With no other material the only difference is the pair coefficient.
        assert_eq!(imbalance(&chess("KBK")), 0);
        assert_eq!(imbalance(&chess("KBBK")), 1667 / 16);
    }

    #[test]
    fn test_flipping_negates() {
        for code in ["KQKRR", "KRNPPKBBPP", "KQRBNPPPPKQRRPPPP", "KNNPKBP"] {
            let material = chess(code);
            assert_eq!(imbalance(&material), -imbalance(&material.flipped()), "{}", code);
        }
    }

    #[test]
    fn test_antichess_scores_kings() {
        // White: pawn 59, king (-79 - 197) = -217. Black: king (-197 - 40) = -237.
        // (-217 + 237) / 16 = 1
        let anti = MaterialCounts::from_code("KPK", Color::White, Variant::Antichess).unwrap();
        assert_eq!(imbalance(&anti), 1);

        // Standard chess: pawn (ours pawn 2) only, 2 / 16 = 0
        assert_eq!(imbalance(&chess("KPK")), 0);
    }

    #[test]
    fn test_antichess_without_kings() {
        // Black: knight -47. White: pawn 59 + theirs-knight weighting on the black side.
        // White pawn v = 59 * 1 + 0 = 59. Black knight v = -47 + 60 * 1 = 13.
        // (59 - 13) / 16 = 2
        let anti = MaterialCounts::new([1, 0, 0, 0, 0, 0], [0, 1, 0, 0, 0, 0], Variant::Antichess);
        assert_eq!(imbalance(&anti), 2);
    }
}
