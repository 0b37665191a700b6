mod board;
mod completion;
mod error;
mod model_helpers;
mod models;
mod update;

pub use board::Board;
pub use completion::is_complete;
pub use error::LevelError;
pub use models::{Cell, Content, Direction, Ground, ItemColor, UserAction, Vec2};
pub use update::step;
