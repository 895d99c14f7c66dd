use std::fmt;

/// Endgames with a dedicated evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalKind {
    /// Mate with a lone king against enough material
    Kxk,
    Kpk,
    Knnk,
    Kbnk,
    Krkp,
    Krkb,
    Krkn,
    Kqkp,
    Kqkr,
}

impl EvalKind {
    pub const fn code(self) -> &'static str {
        match self {
            EvalKind::Kxk => "KXK",
            EvalKind::Kpk => "KPK",
            EvalKind::Knnk => "KNNK",
            EvalKind::Kbnk => "KBNK",
            EvalKind::Krkp => "KRKP",
            EvalKind::Krkb => "KRKB",
            EvalKind::Krkn => "KRKN",
            EvalKind::Kqkp => "KQKP",
            EvalKind::Kqkr => "KQKR",
        }
    }
}

/// Endgames with a dedicated scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    Knpk,
    Knpkb,
    Krpkr,
    Krpkb,
    Kbpkb,
    Kbpkn,
    Kbppkb,
    Krppkrp,
    /// Bishop and pawns, possibly against more material
    Kbpsk,
    /// Queen against rook and pawns
    Kqkrps,
    /// King and pawns against a bare king
    Kpsk,
    /// One pawn each, nothing else
    Kpkp,
}

impl ScaleKind {
    pub const fn code(self) -> &'static str {
        match self {
            ScaleKind::Knpk => "KNPK",
            ScaleKind::Knpkb => "KNPKB",
            ScaleKind::Krpkr => "KRPKR",
            ScaleKind::Krpkb => "KRPKB",
            ScaleKind::Kbpkb => "KBPKB",
            ScaleKind::Kbpkn => "KBPKN",
            ScaleKind::Kbppkb => "KBPPKB",
            ScaleKind::Krppkrp => "KRPPKRP",
            ScaleKind::Kbpsk => "KBPsK",
            ScaleKind::Kqkrps => "KQKRPs",
            ScaleKind::Kpsk => "KPsK",
            ScaleKind::Kpkp => "KPKP",
        }
    }
}

impl fmt::Display for EvalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
