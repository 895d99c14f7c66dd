use cozy_chess::{Board, Color, Piece};

use crate::values::{piece_value, ENDGAME_LIMIT, MIDGAME_LIMIT};
use crate::Variant;

/// Most pieces of one type a side can hold and still get a distinct key.
pub const MAX_PIECE_COUNT: usize = 16;

type KeyTable = [[[u64; MAX_PIECE_COUNT]; Piece::NUM]; Color::NUM];

static MATERIAL_KEYS: KeyTable = material_keys();

// SplitMix64 stream with a fixed seed, so keys are identical across runs and builds.
const fn material_keys() -> KeyTable {
    let mut keys = [[[0; MAX_PIECE_COUNT]; Piece::NUM]; Color::NUM];
    let mut state: u64 = 0x1070_372A_5C3E_9D11;

    let mut color = 0;
    while color < Color::NUM {
        let mut piece = 0;
        while piece < Piece::NUM {
            let mut n = 0;
            while n < MAX_PIECE_COUNT {
                state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
                let mut z = state;
                z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
                z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
                keys[color][piece][n] = z ^ (z >> 31);
                n += 1;
            }
            piece += 1;
        }
        color += 1;
    }

    keys
}

/// Piece inventory of both sides, independent of where the pieces stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialCounts {
    counts: [[u8; Piece::NUM]; Color::NUM],
    variant: Variant,
}

impl MaterialCounts {
    /// Counts are indexed in cozy-chess piece order: pawn, knight, bishop, rook, queen, king.
    pub fn new(white: [u8; Piece::NUM], black: [u8; Piece::NUM], variant: Variant) -> Self {
        Self {
            counts: [white, black],
            variant,
        }
    }

    pub fn from_board(board: &Board, variant: Variant) -> Self {
        let mut counts = [[0; Piece::NUM]; Color::NUM];
        for color in Color::ALL {
            for piece in Piece::ALL {
                counts[color as usize][piece as usize] =
                    board.colored_pieces(color, piece).len() as u8;
            }
        }
        Self { counts, variant }
    }

    /// Builds the inventory named by an endgame code such as `"KRPKR"`.
    ///
    /// The first king and the letters after it belong to `strong_side`,
    /// the second king and its letters to the opponent.
    pub fn from_code(code: &str, strong_side: Color, variant: Variant) -> Result<Self, String> {
        let mut sides = [[0u8; Piece::NUM]; 2];
        let mut side: Option<usize> = None;

        for ch in code.chars() {
            let piece = piece_from_char(ch)
                .ok_or_else(|| format!("Invalid piece '{}' in code {}", ch, code))?;

            if piece == Piece::King {
                side = match side {
                    None => Some(0),
                    Some(0) => Some(1),
                    Some(_) => return Err(format!("Too many kings in code {}", code)),
                };
            }

            let idx = side.ok_or_else(|| format!("Code {} must start with a king", code))?;
            let count = &mut sides[idx][piece as usize];
            if *count as usize >= MAX_PIECE_COUNT {
                return Err(format!("Too many of '{}' in code {}", ch, code));
            }
            *count += 1;
        }

        if side != Some(1) {
            return Err(format!("Code {} needs a king for each side", code));
        }

        let [strong, weak] = sides;
        Ok(match strong_side {
            Color::White => Self::new(strong, weak, variant),
            Color::Black => Self::new(weak, strong, variant),
        })
    }

    #[inline(always)]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline(always)]
    pub fn count(&self, color: Color, piece: Piece) -> u8 {
        self.counts[color as usize][piece as usize]
    }

    /// All pieces of a side, king and pawns included.
    #[inline(always)]
    pub fn pieces(&self, color: Color) -> u32 {
        self.counts[color as usize].iter().map(|&n| n as u32).sum()
    }

    #[inline(always)]
    pub fn has_pawns(&self) -> bool {
        self.count(Color::White, Piece::Pawn) + self.count(Color::Black, Piece::Pawn) > 0
    }

    #[inline(always)]
    pub fn bishop_pair(&self, color: Color) -> bool {
        self.count(color, Piece::Bishop) > 1
    }

    /// Middlegame value of knights, bishops, rooks and queens.
    #[inline(always)]
    pub fn non_pawn_material(&self, color: Color) -> i32 {
        [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .iter()
            .map(|&piece| piece_value(piece) * self.count(color, piece) as i32)
            .sum()
    }

    /// Signature of the inventory under its variant.
    pub fn material_key(&self) -> u64 {
        let mut key = self.variant.key();
        for color in Color::ALL {
            for piece in Piece::ALL {
                let count = (self.count(color, piece) as usize).min(MAX_PIECE_COUNT);
                for n in 0..count {
                    key ^= MATERIAL_KEYS[color as usize][piece as usize][n];
                }
            }
        }
        key
    }

    /// Returns a value from 0.0 (endgame) to 1.0 (middlegame), by non-pawn material.
    pub fn game_phase(&self) -> f32 {
        let npm = self.non_pawn_material(Color::White) + self.non_pawn_material(Color::Black);
        let npm = npm.clamp(ENDGAME_LIMIT, MIDGAME_LIMIT);

        (npm - ENDGAME_LIMIT) as f32 / (MIDGAME_LIMIT - ENDGAME_LIMIT) as f32
    }

    /// Same inventory with the colors swapped.
    pub fn flipped(&self) -> Self {
        Self {
            counts: [self.counts[1], self.counts[0]],
            variant: self.variant,
        }
    }
}

fn piece_from_char(ch: char) -> Option<Piece> {
    match ch.to_ascii_uppercase() {
        'P' => Some(Piece::Pawn),
        'N' => Some(Piece::Knight),
        'B' => Some(Piece::Bishop),
        'R' => Some(Piece::Rook),
        'Q' => Some(Piece::Queen),
        'K' => Some(Piece::King),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{BISHOP_VALUE_MG, KNIGHT_VALUE_MG, ROOK_VALUE_MG};

    #[test]
    fn test_counts_starting_position() {
        let material = MaterialCounts::from_board(&Board::default(), Variant::Chess);

        for color in Color::ALL {
            assert_eq!(material.count(color, Piece::Pawn), 8);
            assert_eq!(material.count(color, Piece::Knight), 2);
            assert_eq!(material.count(color, Piece::Queen), 1);
            assert_eq!(material.pieces(color), 16);
            assert!(material.bishop_pair(color));
        }
    }

    #[test]
    fn test_key_ignores_placement() {
        let a: Board = "k7/8/8/8/8/8/8/KR6 w - - 0 1".parse().unwrap();
        let b: Board = "8/3k4/8/8/5R2/8/8/7K b - - 0 1".parse().unwrap();

        let a = MaterialCounts::from_board(&a, Variant::Chess);
        let b = MaterialCounts::from_board(&b, Variant::Chess);
        assert_eq!(a.material_key(), b.material_key());
    }

    #[test]
    fn test_key_depends_on_color_and_variant() {
        let krk = MaterialCounts::from_code("KRK", Color::White, Variant::Chess).unwrap();
        let kkr = MaterialCounts::from_code("KRK", Color::Black, Variant::Chess).unwrap();
        let anti = MaterialCounts::from_code("KRK", Color::White, Variant::Antichess).unwrap();

        assert_ne!(krk.material_key(), kkr.material_key());
        assert_ne!(krk.material_key(), anti.material_key());
    }

    #[test]
    fn test_code_matches_board() {
        let board: Board = "8/8/8/4k3/8/8/2N5/1B2K3 w - - 0 1".parse().unwrap();
        let from_board = MaterialCounts::from_board(&board, Variant::Chess);
        let from_code = MaterialCounts::from_code("KBNK", Color::White, Variant::Chess).unwrap();

        assert_eq!(from_board, from_code);
        assert_eq!(from_code.flipped(), MaterialCounts::from_code("KBNK", Color::Black, Variant::Chess).unwrap());
    }

    #[test]
    fn test_invalid_codes() {
        assert!(MaterialCounts::from_code("RK", Color::White, Variant::Chess).is_err());
        assert!(MaterialCounts::from_code("KRX", Color::White, Variant::Chess).is_err());
        assert!(MaterialCounts::from_code("KRR", Color::White, Variant::Chess).is_err());
        assert!(MaterialCounts::from_code("KKK", Color::White, Variant::Chess).is_err());
    }

    #[test]
    fn test_non_pawn_material() {
        let material = MaterialCounts::from_code("KRBPKNP", Color::White, Variant::Chess).unwrap();

        assert_eq!(material.non_pawn_material(Color::White), ROOK_VALUE_MG + BISHOP_VALUE_MG);
        assert_eq!(material.non_pawn_material(Color::Black), KNIGHT_VALUE_MG);
        assert!(material.has_pawns());
    }

    #[test]
    fn test_game_phase_bounds() {
        let start = MaterialCounts::from_board(&Board::default(), Variant::Chess);
        assert!((start.game_phase() - 1.0).abs() < f32::EPSILON);

        let bare = MaterialCounts::from_code("KRK", Color::White, Variant::Chess).unwrap();
        assert_eq!(bare.game_phase(), 0.0);
    }
}
