//! Round rules engine for MOUSESMACK.
//!
//! Owns the hecs world of live targets, the round clock and score,
//! resolves taps, and produces `RoundSnapshot`s for the host.

pub mod audio;
pub mod clock;
pub mod engine;
pub mod resolver;
pub mod score;
pub mod systems;

pub use audio::{AudioDispatcher, AudioSink};
pub use engine::RoundController;
pub use mousesmack_core as core;
pub use resolver::{HitResult, ScreenProjection, TapResolver};

#[cfg(test)]
mod tests;
