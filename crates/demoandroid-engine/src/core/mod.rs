//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and the game. Everything the runtime calls on user code goes through
//! [`Game`].

mod error;
mod game;

pub use error::Termination;
pub use game::Game;
