use ahash::AHashMap;
use cozy_chess::Color;
use log::{debug, warn};
use utils::{MaterialCounts, Variant};

use crate::{Endgame, EvalFn, EvalKind, ScaleFn, ScaleKind};

const EVALUATORS: &[(&str, EvalKind)] = &[
    ("KPK", EvalKind::Kpk),
    ("KNNK", EvalKind::Knnk),
    ("KBNK", EvalKind::Kbnk),
    ("KRKP", EvalKind::Krkp),
    ("KRKB", EvalKind::Krkb),
    ("KRKN", EvalKind::Krkn),
    ("KQKP", EvalKind::Kqkp),
    ("KQKR", EvalKind::Kqkr),
];

const SCALERS: &[(&str, ScaleKind)] = &[
    ("KNPK", ScaleKind::Knpk),
    ("KNPKB", ScaleKind::Knpkb),
    ("KRPKR", ScaleKind::Krpkr),
    ("KRPKB", ScaleKind::Krpkb),
    ("KBPKB", ScaleKind::Kbpkb),
    ("KBPKN", ScaleKind::Kbpkn),
    ("KBPPKB", ScaleKind::Kbppkb),
    ("KRPPKRP", ScaleKind::Krppkrp),
];

/// Lookup of specialized routines by exact material key.
pub trait EndgameRegistry {
    fn evaluator(&self, key: u64) -> Option<EvalFn>;
    fn scaler(&self, key: u64) -> Option<ScaleFn>;
}

/// Map-backed registry. Built once, read-only afterwards, so one instance
/// can serve every search worker.
pub struct Endgames {
    evaluators: AHashMap<u64, EvalFn>,
    scalers: AHashMap<u64, ScaleFn>,
}

impl Endgames {
    pub fn empty() -> Self {
        Self {
            evaluators: AHashMap::new(),
            scalers: AHashMap::new(),
        }
    }

    /// Registry with the standard chess endgames.
    pub fn new() -> Self {
        let mut endgames = Self::empty();

        for &(code, kind) in EVALUATORS {
            if let Err(e) = endgames.add_eval(code, kind) {
                warn!("Skipping endgame {}: {}", code, e);
            }
        }
        for &(code, kind) in SCALERS {
            if let Err(e) = endgames.add_scale(code, kind) {
                warn!("Skipping endgame {}: {}", code, e);
            }
        }

        debug!(
            "Registered {} evaluation and {} scaling endgames",
            endgames.evaluators.len(),
            endgames.scalers.len()
        );

        endgames
    }

    /// Registers `kind` for `code` with either color as the strong side.
    pub fn add_eval(&mut self, code: &str, kind: EvalKind) -> Result<(), String> {
        for color in Color::ALL {
            self.evaluators
                .insert(code_key(code, color)?, Endgame::new(kind, color));
        }
        Ok(())
    }

    /// Registers `kind` for `code` with either color as the strong side.
    pub fn add_scale(&mut self, code: &str, kind: ScaleKind) -> Result<(), String> {
        for color in Color::ALL {
            self.scalers
                .insert(code_key(code, color)?, Endgame::new(kind, color));
        }
        Ok(())
    }

    /// Number of keys with an evaluation routine (one per color per code).
    pub fn evaluator_count(&self) -> usize {
        self.evaluators.len()
    }

    /// Number of keys with a scaling routine (one per color per code).
    pub fn scaler_count(&self) -> usize {
        self.scalers.len()
    }
}

impl Default for Endgames {
    fn default() -> Self {
        Self::new()
    }
}

impl EndgameRegistry for Endgames {
    #[inline(always)]
    fn evaluator(&self, key: u64) -> Option<EvalFn> {
        self.evaluators.get(&key).copied()
    }

    #[inline(always)]
    fn scaler(&self, key: u64) -> Option<ScaleFn> {
        self.scalers.get(&key).copied()
    }
}

fn code_key(code: &str, strong_side: Color) -> Result<u64, String> {
    Ok(MaterialCounts::from_code(code, strong_side, Variant::Chess)?.material_key())
}
