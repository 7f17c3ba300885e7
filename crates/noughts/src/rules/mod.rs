//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board); the engine composes them
//! after every accepted move.

pub mod draw;
pub mod win;

pub use draw::evaluate;
pub use win::is_winner;
