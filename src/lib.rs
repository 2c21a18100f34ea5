//! An Old Maid ("draw the joker") card game engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that manages a full session between a
//! human player and a difficulty-tiered AI: pack construction and shuffling,
//! dealing, alternating draws, automatic pair discarding, and win/loss
//! determination. Rendering and input belong to the embedding presentation
//! layer, which drives the engine through [`Game::player_draw`] and
//! [`Game::ai_draw`] and observes it through the read API and the event
//! feed.
//!
//! # Example
//!
//! ```
//! use oldmaid::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let result = game.player_draw(0).unwrap();
//! println!("drew the {}", result.card);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, Face, JOKER_RANK, JokerColor, PACK_SIZE, Suit};
pub use deck::{build_pack, shuffled};
pub use error::DrawError;
pub use event::GameEvent;
pub use game::{Game, GameState, Side};
pub use hand::{Hand, Pair};
pub use options::{Difficulty, GameOptions};
pub use result::{DrawResult, GameOutcome};
