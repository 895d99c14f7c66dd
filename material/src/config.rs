#[derive(Debug, Clone, Copy)]
pub struct MaterialConfig {
    /// Number of table entries, rounded up to a power of two.
    pub table_size: usize,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self { table_size: 8192 }
    }
}
