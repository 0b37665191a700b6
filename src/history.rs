use crate::core::Board;

/// Prior board snapshots, most recent last. The driver records a snapshot
/// before each successful move and pops one per undo; the engine itself
/// never touches history, it only guarantees the snapshots stay valid.
#[derive(Default)]
pub struct History {
    stack: Vec<Board>,
}

impl History {
    pub fn new() -> History {
        History { stack: Vec::new() }
    }

    pub fn record(&mut self, board: Board) {
        self.stack.push(board);
    }

    pub fn undo(&mut self) -> Option<Board> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
