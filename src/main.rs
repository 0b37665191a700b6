// CLI Sokoban variant with ratatui.
// Controls: W/A/S/D or arrow keys to move, U to undo, Q to quit.
// Content tiles: 'W' wall, 'B' box, 'H' pit, '^v<>' player, 'rgby' items.
// Ground tiles: 'RGBY' target slots, 'I' ice, '_' blank.

use std::io;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use sokoice::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use sokoice::core::UserAction;
use sokoice::history::History;
use sokoice::levels::{LevelSpec, builtin_levels, load_levels};
use sokoice::models::GameRenderState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let level = select_level(std::env::args().nth(1))?;

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&level, &mut terminal);
    cleanup_terminal()?;
    result
}

/// Picks the level to play from the first CLI argument: a `.json` level
/// file (plays its first level), a built-in level name, or the first
/// built-in when no argument is given.
fn select_level(arg: Option<String>) -> Result<LevelSpec, Box<dyn std::error::Error>> {
    match arg {
        Some(path) if path.ends_with(".json") => Ok(load_levels(&path)?.remove(0)),
        Some(name) => {
            let levels = builtin_levels();
            let names: Vec<String> = levels.iter().map(|l| l.name.clone()).collect();
            levels.into_iter().find(|l| l.name == name).ok_or_else(|| {
                format!("unknown level '{}', expected one of {:?}", name, names).into()
            })
        }
        None => Ok(builtin_levels().remove(0)),
    }
}

fn run_interactive(
    level: &LevelSpec,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = level.to_board()?;
    let mut history = History::new();
    let mut moves = 0;
    let mut message: Option<String> = None;

    // Initial render
    let first_render = GameRenderState {
        board: board.clone(),
        level_name: level.name.clone(),
        moves,
        won: board.is_complete(),
        lost: !board.has_player(),
        message: None,
    };
    render_game(terminal, &first_render)?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(UserAction::Move(direction)) => {
                let next = board.move_player(direction);
                message = None;
                if next != board {
                    history.record(std::mem::replace(&mut board, next));
                    moves += 1;
                }
            }
            ConsoleInput::Undo => match history.undo() {
                Some(previous) => {
                    board = previous;
                    moves += 1;
                    message = None;
                }
                None => message = Some("nothing to undo".to_string()),
            },
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
        }

        let to_render = GameRenderState {
            board: board.clone(),
            level_name: level.name.clone(),
            moves,
            won: board.is_complete(),
            lost: !board.has_player(),
            message: message.clone(),
        };
        render_game(terminal, &to_render)?;

        if to_render.won || to_render.lost {
            // Hold the final screen until the user reacts.
            loop {
                match handle_input() {
                    Ok(ConsoleInput::Timeout) => {}
                    Ok(_) => break,
                    Err(_) => break,
                }
            }
            break;
        }
    }

    Ok(())
}
