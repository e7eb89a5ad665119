//! Core types and definitions for the MOUSESMACK round rules.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, config, state snapshots, events, and constants.
//! It has no dependency on the game loop or any host framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
