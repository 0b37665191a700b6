use crate::core::Board;

pub struct GameRenderState {
    pub board: Board,
    pub level_name: String,
    pub moves: usize,
    pub won: bool,
    pub lost: bool,
    pub message: Option<String>,
}
