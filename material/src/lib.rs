mod classify;
mod config;
mod entry;
mod imbalance;
mod scaling;
mod table;

pub use classify::{is_kbpsks, is_kqkrps, is_kxk};
pub use config::MaterialConfig;
pub use entry::Entry;
pub use imbalance::imbalance;
pub use table::MaterialTable;
