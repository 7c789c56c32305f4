//! # Reel Words
//!
//! Reel Words is a single-player word game. A row of letter reels, like those
//! of a slot machine, feeds a rack of playable tiles: one tile per reel, the
//! one currently showing. The player forms words from the rack. A word must
//! be well-formed, must appear in the dictionary, and must be spelled by the
//! tiles on the rack, each tile used at most once. Every tile played earns
//! its score, and its reel spins to expose the next tile.
//!
//! This library holds the game engine. The binary supplies the command line
//! and the front ends.

pub mod dictionary;
pub mod game;
pub mod language;
pub mod loader;
pub mod rack;
pub mod reel;
pub mod tile;
pub mod validator;
pub mod view;
