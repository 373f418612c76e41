//! A Tien Len ("Vietnamese Thirteen") rules engine with optional `no_std` support.
//!
//! The crate deals a standard deck to four players, classifies sets of cards
//! into hand categories, enumerates the legal plays in a hand and picks a
//! play for computer-controlled players. The [`Table`] type owns all cards
//! and exposes the operations a front end needs.
//!
//! # Example
//!
//! ```
//! use tienlen::{Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! let starter = table.find_starting_player().expect("a full deal places the three of clubs");
//! let opening = table.activate_player(starter.id).expect("starter is seated");
//! if let Some(play) = opening {
//!     let ids: Vec<_> = play.cards.iter().map(|c| c.id).collect();
//!     table.play(starter.id, &ids).expect("cpu opening is legal");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod combinations;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod moves;
pub mod options;
pub mod player;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Rank, Suit};
pub use category::{HandCategory, classify};
pub use deck::Deck;
pub use error::{PlayError, TableError};
pub use game::{DiscardRecord, Table};
pub use hand::Hand;
pub use moves::{Move, Tally, legal_moves};
pub use options::TableOptions;
pub use player::{Player, PlayerId};
pub use strategy::{OpeningLead, Strategy};
