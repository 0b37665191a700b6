use crate::core::models::Cell;

/// A board is complete when every cell's ground accepts what sits on it.
/// Only target slots constrain their content, so a board with no targets
/// is trivially complete.
pub fn is_complete(grid: &[Vec<Cell>]) -> bool {
    grid.iter()
        .flatten()
        .all(|cell| cell.ground.completed(cell.content))
}
