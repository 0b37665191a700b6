use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

use crate::core::{Board, Direction, UserAction};
use crate::models::GameRenderState;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_board_to_string(&state.board);
        let game_paragraph = Paragraph::new(game_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(state.level_name.clone()),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // Instructions
        let instructions = if state.won {
            "You Won! Press any key to quit.".to_string()
        } else if state.lost {
            "You Lost! Press any key to quit.".to_string()
        } else {
            format!(
                "Moves: {} | WASD/arrows to move, U to undo, Q to quit",
                state.moves
            )
        };

        let instructions = if let Some(message) = &state.message {
            format!("{} | {}", instructions, message)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// The content layer alone, one encoding character per cell. Ground never
/// changes during play, so this is the layer tests compare.
pub fn render_content_to_string(board: &Board) -> String {
    let mut result = String::new();
    for row in board.rows() {
        for cell in row {
            result.push(cell.content.symbol());
        }
        result.push('\n');
    }
    result
}

/// Single-block view for the terminal: content characters, with the ground
/// symbol showing through wherever the content is blank.
pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::new();
    for row in board.rows() {
        for cell in row {
            if cell.content.can_be_moved_onto() {
                result.push(cell.ground.symbol());
            } else {
                result.push(cell.content.symbol());
            }
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Undo,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('u') | KeyCode::Char('U') => ConsoleInput::Undo,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
