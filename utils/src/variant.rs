use std::fmt;
use std::str::FromStr;

/// Rule set a position is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Chess,
    /// Captures are compulsory and the king is an ordinary piece.
    Antichess,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Chess, Variant::Antichess];

    /// Discriminator mixed into every material key, so the same inventory
    /// under two rule sets never shares a signature. Never zero.
    #[inline(always)]
    pub const fn key(self) -> u64 {
        match self {
            Variant::Chess => 0x9E37_79B9_7F4A_7C15,
            Variant::Antichess => 0xC2B2_AE3D_27D4_EB4F,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Chess => "chess",
            Variant::Antichess => "antichess",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chess" | "standard" => Ok(Variant::Chess),
            "antichess" | "anti" => Ok(Variant::Antichess),
            _ => Err(format!("Unknown variant: {}", s)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
