use std::ops::Add;

use crate::core::error::LevelError;
use crate::core::models::{Content, Direction, Ground, ItemColor, Vec2};

impl Content {
    /// The player or a pushed item may occupy this cell with no resistance.
    pub fn can_be_moved_onto(self) -> bool {
        matches!(self, Content::Blank)
    }

    /// This content can be displaced by an adjacent push.
    pub fn can_be_pushed(self) -> bool {
        matches!(self, Content::Box | Content::Item(_))
    }

    /// Entering a cell with this content annihilates the entering content.
    pub fn destroys(self) -> bool {
        matches!(self, Content::Pit)
    }

    /// Never displaced by pushing or sliding.
    pub fn is_immovable(self) -> bool {
        matches!(self, Content::Wall | Content::Pit)
    }

    pub fn is_player(self) -> bool {
        matches!(self, Content::Player(_))
    }

    /// An item of exactly this color satisfies a target slot of `color`.
    pub fn matches_target_color(self, color: ItemColor) -> bool {
        match self {
            Content::Item(c) => c == color,
            _ => false,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Content::Wall => 'W',
            Content::Box => 'B',
            Content::Player(direction) => direction.symbol(),
            Content::Item(color) => color.item_symbol(),
            Content::Blank => '_',
            Content::Pit => 'H',
        }
    }
}

impl Ground {
    /// Whether this ground accepts the content sitting on it. Only target
    /// slots constrain their content.
    pub fn completed(self, content: Content) -> bool {
        match self {
            Ground::Target(color) => content.matches_target_color(color),
            Ground::Blank | Ground::Slippery => true,
        }
    }

    pub fn induces_slide(self) -> bool {
        matches!(self, Ground::Slippery)
    }

    pub fn symbol(self) -> char {
        match self {
            Ground::Target(color) => color.target_symbol(),
            Ground::Blank => '_',
            Ground::Slippery => 'I',
        }
    }
}

impl Direction {
    /// Unit (row, column) offset of one move in this direction.
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Direction, LevelError> {
        match symbol {
            '^' => Ok(Direction::Up),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            '>' => Ok(Direction::Right),
            _ => Err(LevelError::InvalidDirection { symbol }),
        }
    }
}

impl ItemColor {
    pub fn item_symbol(self) -> char {
        match self {
            ItemColor::Red => 'r',
            ItemColor::Green => 'g',
            ItemColor::Blue => 'b',
            ItemColor::Yellow => 'y',
        }
    }

    pub fn target_symbol(self) -> char {
        match self {
            ItemColor::Red => 'R',
            ItemColor::Green => 'G',
            ItemColor::Blue => 'B',
            ItemColor::Yellow => 'Y',
        }
    }

    pub fn from_item_symbol(symbol: char) -> Result<ItemColor, LevelError> {
        match symbol {
            'r' => Ok(ItemColor::Red),
            'g' => Ok(ItemColor::Green),
            'b' => Ok(ItemColor::Blue),
            'y' => Ok(ItemColor::Yellow),
            _ => Err(LevelError::InvalidItemColor { symbol }),
        }
    }

    pub fn from_target_symbol(symbol: char) -> Result<ItemColor, LevelError> {
        match symbol {
            'R' => Ok(ItemColor::Red),
            'G' => Ok(ItemColor::Green),
            'B' => Ok(ItemColor::Blue),
            'Y' => Ok(ItemColor::Yellow),
            _ => Err(LevelError::InvalidTargetColor { symbol }),
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + other.i,
            j: self.j + other.j,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn capability_predicates_partition_content() {
        assert!(Content::Blank.can_be_moved_onto());
        assert!(!Content::Wall.can_be_moved_onto());

        assert!(Content::Box.can_be_pushed());
        assert!(Content::Item(ItemColor::Red).can_be_pushed());
        assert!(!Content::Player(Direction::Up).can_be_pushed());

        assert!(Content::Pit.destroys());
        assert!(!Content::Blank.destroys());

        assert!(Content::Wall.is_immovable());
        assert!(Content::Pit.is_immovable());
        assert!(!Content::Box.is_immovable());

        assert!(Content::Player(Direction::Down).is_player());
    }

    #[test]
    fn items_match_targets_of_their_own_color_only() {
        assert!(Content::Item(ItemColor::Yellow).matches_target_color(ItemColor::Yellow));
        assert!(!Content::Item(ItemColor::Yellow).matches_target_color(ItemColor::Red));
        assert!(!Content::Box.matches_target_color(ItemColor::Red));
    }

    #[test]
    fn only_slippery_ground_induces_slide() {
        assert!(Ground::Slippery.induces_slide());
        assert!(!Ground::Blank.induces_slide());
        assert!(!Ground::Target(ItemColor::Green).induces_slide());
    }
}
