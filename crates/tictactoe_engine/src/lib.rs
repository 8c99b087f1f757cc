//! Tic-tac-toe game state with an undoable move history.
//!
//! The engine owns every board snapshot produced during a game and the
//! step currently being viewed. A presentation layer forwards two events
//! into it, "cell selected" and "jump to step", and reads back a
//! [`GameView`] to render.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameHistory, GameStatus, Mark};
//!
//! let mut game = GameHistory::new();
//! for index in [0, 1, 4, 2, 8] {
//!     game.select_cell(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//!
//! // Time travel back to the empty board.
//! game.jump_to(0)?;
//! assert_eq!(game.status(), GameStatus::InProgress(Mark::X));
//! # Ok::<(), tictactoe_engine::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use history::{GameHistory, HistoryError, MoveOutcome, Rejection};
pub use position::{Direction, Position};
pub use types::{Board, Cell, Mark};
pub use view::{GameStatus, GameView, HistoryStep};
