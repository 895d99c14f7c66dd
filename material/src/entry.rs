use cozy_chess::Color;
use endgame::{EvalFn, ScaleFn, SCALE_FACTOR_NONE, SCALE_FACTOR_NORMAL};

/// Everything known about one material signature.
///
/// When an evaluation function is set it replaces the generic evaluation and
/// the scaling fields are left at their defaults. Otherwise a side's scaling
/// function, when present, takes precedence over its numeric factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub(crate) key: u64,
    pub(crate) evaluation_function: Option<EvalFn>,
    pub(crate) scaling_function: [Option<ScaleFn>; 2],
    pub(crate) factor: [u8; 2],
    /// Imbalance for White minus Black
    pub(crate) value: i16,
    pub(crate) game_phase: f32,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            key: 0,
            evaluation_function: None,
            scaling_function: [None; 2],
            factor: [SCALE_FACTOR_NORMAL; 2],
            value: 0,
            game_phase: 0.0,
        }
    }
}

impl Entry {
    #[inline(always)]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Material imbalance from White's perspective.
    #[inline(always)]
    pub fn imbalance(&self) -> i16 {
        self.value
    }

    #[inline(always)]
    pub fn game_phase(&self) -> f32 {
        self.game_phase
    }

    #[inline(always)]
    pub fn specialized_eval_exists(&self) -> bool {
        self.evaluation_function.is_some()
    }

    #[inline(always)]
    pub fn evaluation_function(&self) -> Option<EvalFn> {
        self.evaluation_function
    }

    #[inline(always)]
    pub fn scaling_function(&self, color: Color) -> Option<ScaleFn> {
        self.scaling_function[color as usize]
    }

    #[inline(always)]
    pub fn factor(&self, color: Color) -> u8 {
        self.factor[color as usize]
    }

    /// Scale factor for `color`. A scaling function is run through `apply`
    /// first; if it returns `SCALE_FACTOR_NONE` the numeric factor is used.
    #[inline(always)]
    pub fn scale_factor<F>(&self, color: Color, apply: F) -> u8
    where
        F: FnOnce(ScaleFn) -> u8,
    {
        match self.scaling_function(color).map(apply) {
            Some(sf) if sf != SCALE_FACTOR_NONE => sf,
            _ => self.factor(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use endgame::{SCALE_FACTOR_DRAW, SCALE_FACTOR_ONEPAWN, SCALE_KPKP};

    #[test]
    fn test_scale_factor_prefers_routine() {
        let entry = Entry {
            scaling_function: [Some(SCALE_KPKP[0]), None],
            factor: [SCALE_FACTOR_ONEPAWN, SCALE_FACTOR_DRAW],
            ..Entry::default()
        };

        assert_eq!(entry.scale_factor(Color::White, |_| 10), 10);
        assert_eq!(
            entry.scale_factor(Color::White, |_| SCALE_FACTOR_NONE),
            SCALE_FACTOR_ONEPAWN
        );
        // No routine for Black, so `apply` is never called
        assert_eq!(
            entry.scale_factor(Color::Black, |_| unreachable!()),
            SCALE_FACTOR_DRAW
        );
    }

    #[test]
    fn test_default_is_unscaled() {
        let entry = Entry::default();

        assert!(!entry.specialized_eval_exists());
        assert_eq!(entry.factor(Color::White), SCALE_FACTOR_NORMAL);
        assert_eq!(entry.factor(Color::Black), SCALE_FACTOR_NORMAL);
    }
}
