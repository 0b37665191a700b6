use crate::core::completion::is_complete;
use crate::core::error::LevelError;
use crate::core::models::{Cell, Content, Direction, Ground, ItemColor, Vec2};
use crate::core::update::step;

/// A rectangular grid of two-layer cells plus the player's cached
/// coordinate.
///
/// Boards are immutable snapshots: every transition builds a fresh board,
/// so old values stay valid indefinitely. The undo stack relies on this.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: Vec<Vec<Cell>>,
    player: Option<Vec2>,
}

impl Board {
    /// Builds a board from two aligned text blocks, one character per cell:
    /// the content layer over the ground layer. Both blocks must break rows
    /// at the same offsets and describe a rectangular grid.
    pub fn from_layers(contents: &str, ground: &str) -> Result<Board, LevelError> {
        if contents.chars().count() != ground.chars().count() {
            return Err(LevelError::LayerSizeMismatch);
        }

        let mut grid = Vec::new();
        let mut row = Vec::new();
        for (offset, (c, g)) in contents.chars().zip(ground.chars()).enumerate() {
            match (c == '\n', g == '\n') {
                (true, true) => {
                    grid.push(row);
                    row = Vec::new();
                }
                (true, false) | (false, true) => {
                    return Err(LevelError::RowMisalignment { offset });
                }
                (false, false) => row.push(Cell {
                    content: content_from_symbol(c)?,
                    ground: ground_from_symbol(g)?,
                }),
            }
        }
        grid.push(row);

        Board::from_grid(grid)
    }

    /// Builds a board from an already-assembled grid, rejecting ragged rows.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Result<Board, LevelError> {
        let expected = grid.first().map_or(0, |row| row.len());
        for (i, row) in grid.iter().enumerate() {
            if row.len() != expected {
                return Err(LevelError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
        }
        Ok(Board::from_working_grid(grid))
    }

    /// Wraps a move engine working buffer without re-validating its shape.
    /// The player is re-located from scratch, which doubles as a
    /// consistency check on the transition that produced the buffer.
    pub(crate) fn from_working_grid(grid: Vec<Vec<Cell>>) -> Board {
        let player = scan_player(&grid);
        Board { grid, player }
    }

    /// Coordinate of the first player cell in row-major order, cached at
    /// construction.
    pub fn locate_player(&self) -> Option<Vec2> {
        self.player
    }

    pub fn has_player(&self) -> bool {
        self.player.is_some()
    }

    /// True when every target slot holds an item of its color.
    pub fn is_complete(&self) -> bool {
        is_complete(&self.grid)
    }

    /// Resolves one directional move request into a new board. Hands back
    /// an unchanged copy when there is no player or the move is rejected.
    pub fn move_player(&self, direction: Direction) -> Board {
        step(self, direction)
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }

    pub fn cell(&self, pos: Vec2) -> Option<Cell> {
        if pos.i < 0 || pos.j < 0 || pos.i >= self.height() || pos.j >= self.width() {
            return None;
        }
        Some(self.grid[pos.i as usize][pos.j as usize])
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.grid
    }
}

fn scan_player(grid: &[Vec<Cell>]) -> Option<Vec2> {
    for (i, row) in grid.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if cell.content.is_player() {
                return Some(Vec2 {
                    i: i as i32,
                    j: j as i32,
                });
            }
        }
    }
    None
}

fn content_from_symbol(symbol: char) -> Result<Content, LevelError> {
    match symbol {
        'W' => Ok(Content::Wall),
        'B' => Ok(Content::Box),
        'H' => Ok(Content::Pit),
        '^' | 'v' | '<' | '>' => Ok(Content::Player(Direction::from_symbol(symbol)?)),
        c if c.is_ascii_lowercase() => Ok(Content::Item(ItemColor::from_item_symbol(c)?)),
        _ => Ok(Content::Blank),
    }
}

fn ground_from_symbol(symbol: char) -> Result<Ground, LevelError> {
    match symbol {
        'I' => Ok(Ground::Slippery),
        c if c.is_ascii_uppercase() => Ok(Ground::Target(ItemColor::from_target_symbol(c)?)),
        _ => Ok(Ground::Blank),
    }
}
