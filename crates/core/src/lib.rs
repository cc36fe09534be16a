//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod bridge;
pub mod cards;
pub mod catalog;
pub mod config;
pub mod effects;
pub mod events;
pub mod legality;
pub mod maps;
pub mod render;
pub mod rng;
pub mod run;
pub mod selector;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_support;

pub use bridge::*;
pub use cards::*;
pub use catalog::*;
pub use config::*;
pub use effects::*;
pub use events::*;
pub use maps::*;
pub use render::*;
pub use rng::*;
pub use run::*;
pub use selector::*;
pub use session::*;
pub use state::*;
