// Specialized endgame knowledge, as seen by the material table.
//
// A routine is identified by its kind and the side it is written for. The
// material table only decides which routines apply to a material signature;
// running them is up to the evaluator that consumes the table entry.

mod kinds;
mod registry;
mod scale;

pub use kinds::{EvalKind, ScaleKind};
pub use registry::{EndgameRegistry, Endgames};
pub use scale::*;

use cozy_chess::Color;
use std::fmt;

/// A specialized routine bound to the side it favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endgame<K> {
    pub kind: K,
    pub strong_side: Color,
}

impl<K> Endgame<K> {
    pub const fn new(kind: K, strong_side: Color) -> Self {
        Self { kind, strong_side }
    }

    #[inline(always)]
    pub fn weak_side(&self) -> Color {
        !self.strong_side
    }
}

impl<K: fmt::Display> fmt::Display for Endgame<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.strong_side {
            Color::White => "white",
            Color::Black => "black",
        };
        write!(f, "{} ({})", self.kind, side)
    }
}

/// Replaces the generic evaluation.
pub type EvalFn = Endgame<EvalKind>;
/// Pulls the generic evaluation toward a draw.
pub type ScaleFn = Endgame<ScaleKind>;

// These match whole families of signatures, so they are looked up by pattern
// rather than through a registry. Indexed by strong side.
pub const EVALUATE_KXK: [EvalFn; 2] = [
    Endgame::new(EvalKind::Kxk, Color::White),
    Endgame::new(EvalKind::Kxk, Color::Black),
];
pub const SCALE_KBPSK: [ScaleFn; 2] = [
    Endgame::new(ScaleKind::Kbpsk, Color::White),
    Endgame::new(ScaleKind::Kbpsk, Color::Black),
];
pub const SCALE_KQKRPS: [ScaleFn; 2] = [
    Endgame::new(ScaleKind::Kqkrps, Color::White),
    Endgame::new(ScaleKind::Kqkrps, Color::Black),
];
pub const SCALE_KPSK: [ScaleFn; 2] = [
    Endgame::new(ScaleKind::Kpsk, Color::White),
    Endgame::new(ScaleKind::Kpsk, Color::Black),
];
pub const SCALE_KPKP: [ScaleFn; 2] = [
    Endgame::new(ScaleKind::Kpkp, Color::White),
    Endgame::new(ScaleKind::Kpkp, Color::Black),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_routines_are_indexed_by_color() {
        for color in Color::ALL {
            assert_eq!(EVALUATE_KXK[color as usize].strong_side, color);
            assert_eq!(SCALE_KBPSK[color as usize].strong_side, color);
            assert_eq!(SCALE_KQKRPS[color as usize].strong_side, color);
            assert_eq!(SCALE_KPSK[color as usize].strong_side, color);
            assert_eq!(SCALE_KPKP[color as usize].strong_side, color);
        }
        assert_eq!(EVALUATE_KXK[0].weak_side(), Color::Black);
    }

    #[test]
    fn test_display() {
        assert_eq!(EVALUATE_KXK[1].to_string(), "KXK (black)");
        assert_eq!(SCALE_KPKP[0].to_string(), "KPKP (white)");
    }
}
