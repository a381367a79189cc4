//! Per-frame simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or host dependencies
//!
//! Speed is deliberately per-frame, not per-second: the driver calls
//! [`World::step`] once per display refresh and every delta in the update
//! rules is one frame's worth.

pub mod collision;
pub mod entity;
pub mod world;

pub use collision::{Aabb, colliding};
pub use entity::{Body, Bullet, Invader, Player};
pub use world::{StepCtx, World};
