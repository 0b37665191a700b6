use serde::{Deserialize, Serialize};

use crate::core::{Board, LevelError};

/// A level as stored on disk: a name plus the two text layers of the cell
/// encoding, content characters over ground characters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelSpec {
    pub name: String,
    pub contents: String,
    pub ground: String,
}

impl LevelSpec {
    pub fn to_board(&self) -> Result<Board, LevelError> {
        Board::from_layers(
            self.contents.trim_matches('\n'),
            self.ground.trim_matches('\n'),
        )
    }
}

pub fn builtin_levels() -> Vec<LevelSpec> {
    vec![
        LevelSpec {
            name: "intro".to_string(),
            contents: r#"
__WWWWW_
WWW___W_
W_>b__W_
WWW_g_W_
W_WWy_W_
W_W___WW
Wr_bgr_W
W______W
WWWWWWWW
"#
            .to_string(),
            ground: r#"
________
________
_B______
_____G__
_R______
____Y___
___B__R_
____G___
________
"#
            .to_string(),
        },
        LevelSpec {
            name: "pits".to_string(),
            contents: r#"
WWWWWWW
W_>___W
W_H_r_W
WH_HB_W
W_H___W
W_____W
WWWWWWW
"#
            .to_string(),
            ground: r#"
_______
_______
_______
__R____
_______
_______
_______
"#
            .to_string(),
        },
        LevelSpec {
            name: "ice".to_string(),
            contents: r#"
_WWWWWWW
WW_____W
WH___y<W
WW____WW
_WWWWWW_
"#
            .to_string(),
            ground: r#"
________
__YI____
__III___
________
________
"#
            .to_string(),
        },
    ]
}

/// Reads a JSON array of levels from disk.
pub fn load_levels(path: &str) -> Result<Vec<LevelSpec>, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    let levels: Vec<LevelSpec> = serde_json::from_str(&data)?;
    if levels.is_empty() {
        return Err(format!("no levels in {}", path).into());
    }
    Ok(levels)
}
