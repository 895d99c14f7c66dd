mod material;
pub mod memory;
mod position;
mod values;
mod variant;

pub use material::{MaterialCounts, MAX_PIECE_COUNT};
pub use position::Position;
pub use values::*;
pub use variant::Variant;
