use crate::core::board::Board;
use crate::core::models::{Cell, Content, Direction, Vec2};

/// Resolves a single directional move request into a new board.
///
/// The whole resolution (push, slide cascades, destruction) mutates one
/// working copy of the grid taken up front; the input board is never
/// touched. A rejected move hands back an unchanged copy instead.
pub fn step(board: &Board, direction: Direction) -> Board {
    let Some(start) = board.locate_player() else {
        return board.clone();
    };

    let delta = direction.delta();
    let mut grid = board.rows().to_vec();
    let mut player = start;
    let mut moved = false;
    let mut travelled = 0;

    loop {
        let next = player + delta;
        if !in_bounds(&grid, next) {
            // A well-formed level is fully walled in, so only a malformed
            // level can get here.
            log::debug!("rejecting {direction:?} from {player:?}: out of bounds");
            break;
        }
        travelled += 1;
        debug_assert!(
            travelled <= grid.len() + grid[0].len(),
            "slide travelled further than the grid half-perimeter"
        );

        let ahead = grid[next.i as usize][next.j as usize].content;

        if ahead.can_be_moved_onto() {
            grid[player.i as usize][player.j as usize].content = Content::Blank;
            grid[next.i as usize][next.j as usize].content = Content::Player(direction);
            player = next;
            moved = true;

            // Slippery ground carries the player onward; anything else
            // ends the move here.
            if grid[next.i as usize][next.j as usize].ground.induces_slide() {
                continue;
            }
            break;
        }

        if ahead.can_be_pushed() {
            let far = next + delta;
            if in_bounds(&grid, far) {
                let beyond = grid[far.i as usize][far.j as usize].content;
                if beyond.can_be_moved_onto() {
                    grid[far.i as usize][far.j as usize].content = ahead;
                    grid[next.i as usize][next.j as usize].content = Content::Player(direction);
                    grid[player.i as usize][player.j as usize].content = Content::Blank;
                    moved = true;
                    if grid[far.i as usize][far.j as usize].ground.induces_slide() {
                        slide_item(&mut grid, far, delta);
                    }
                } else if beyond.destroys() {
                    // The pushed content vanishes; the pit stays armed.
                    grid[next.i as usize][next.j as usize].content = Content::Player(direction);
                    grid[player.i as usize][player.j as usize].content = Content::Blank;
                    moved = true;
                }
                // Anything else blocks the push outright.
            }
            break;
        }

        if ahead.destroys() {
            // Falling in removes the player and spends the pit.
            grid[next.i as usize][next.j as usize].content = Content::Blank;
            grid[player.i as usize][player.j as usize].content = Content::Blank;
            moved = true;
            break;
        }

        // A wall (or another immovable) in the way.
        break;
    }

    if !moved {
        return board.clone();
    }
    Board::from_working_grid(grid)
}

/// Carries a just-pushed item across consecutive slippery cells until it
/// leaves the ice, is blocked, or meets a pit ahead (which removes it
/// outright and ends the cascade).
fn slide_item(grid: &mut [Vec<Cell>], from: Vec2, delta: Vec2) {
    let item = grid[from.i as usize][from.j as usize].content;
    let mut current = from;
    while grid[current.i as usize][current.j as usize]
        .ground
        .induces_slide()
    {
        let next = current + delta;
        if !in_bounds(grid, next) {
            log::debug!("slide from {current:?} stopped at the grid edge");
            break;
        }
        let ahead = grid[next.i as usize][next.j as usize].content;
        if ahead.destroys() {
            grid[current.i as usize][current.j as usize].content = Content::Blank;
            break;
        }
        if !ahead.can_be_moved_onto() {
            // A second pushable blocks the cascade too; no chain pushing.
            break;
        }
        grid[next.i as usize][next.j as usize].content = item;
        grid[current.i as usize][current.j as usize].content = Content::Blank;
        current = next;
    }
}

fn in_bounds(grid: &[Vec<Cell>], pos: Vec2) -> bool {
    let h = grid.len() as i32;
    let w = if grid.is_empty() {
        0
    } else {
        grid[0].len() as i32
    };
    pos.i >= 0 && pos.j >= 0 && pos.i < h && pos.j < w
}
