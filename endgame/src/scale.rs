// Scale factors are fractions of SCALE_FACTOR_NORMAL applied to the endgame score.
pub const SCALE_FACTOR_DRAW: u8 = 0;
pub const SCALE_FACTOR_ONEPAWN: u8 = 48;
pub const SCALE_FACTOR_NORMAL: u8 = 64;
pub const SCALE_FACTOR_MAX: u8 = 128;
/// Returned by a scaling routine that has nothing to say about the position.
pub const SCALE_FACTOR_NONE: u8 = 255;
