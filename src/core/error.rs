use derive_more::{Display, Error};

/// Rejections raised while constructing a board from level text or a raw
/// grid. Construction either fully succeeds or surfaces one of these; a
/// malformed board is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LevelError {
    #[display("content and ground layers differ in length")]
    LayerSizeMismatch,
    #[display("row break at offset {} in one layer but not the other", offset)]
    RowMisalignment { offset: usize },
    #[display("row {} is {} cells long, expected {}", row, len, expected)]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[display("'{}' is not a recognized item color", symbol)]
    InvalidItemColor { symbol: char },
    #[display("'{}' is not a recognized target color", symbol)]
    InvalidTargetColor { symbol: char },
    #[display("'{}' is not a recognized player direction", symbol)]
    InvalidDirection { symbol: char },
}
