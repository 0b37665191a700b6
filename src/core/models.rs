#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ItemColor {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Top layer of a cell: whatever sits on the ground.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Content {
    Wall,
    Box,
    Player(Direction),
    Item(ItemColor),
    Blank,
    Pit,
}

/// Bottom layer of a cell. Never changes while a level is played.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Ground {
    Target(ItemColor),
    Blank,
    Slippery,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub content: Content,
    pub ground: Ground,
}

/// Row/column coordinate, rows counted top to bottom.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
}
