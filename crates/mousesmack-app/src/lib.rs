//! Headless MOUSESMACK host.
//!
//! This crate plays the part a game engine would: it runs the round controller
//! on a fixed-rate game loop thread, maps screen taps into world space, logs
//! audio cues and HUD text, and can drive a round with an autoplay bot.

pub mod autoplay;
pub mod display;
pub mod game_loop;
pub mod projection;
pub mod sink;
pub mod state;

pub use mousesmack_core as core;
