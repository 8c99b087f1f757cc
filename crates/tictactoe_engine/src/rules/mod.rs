//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. They do
//! not check that the board is reachable through legal play.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, winner, winning_line};
