//! Sokoban-style puzzle engine with two-layer cells: content (walls,
//! boxes, colored items, the player, pits) over ground (target slots,
//! slippery ice). Every move produces a fresh immutable board snapshot.

pub mod console_interface;
pub mod core;
pub mod history;
pub mod levels;
pub mod models;

#[cfg(test)]
mod test;
