//! ECS systems that operate on the round world.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: all state lives in components or the controller.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod spawner;
