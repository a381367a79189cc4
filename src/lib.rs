//! Grid Invaders - a classic fixed-shooter on a 2D canvas
//!
//! Core modules:
//! - `sim`: Per-frame simulation (bodies, collisions, world stepping)
//! - `input`: Polled keyboard state fed by host key events
//! - `render`: Raster surface capability and frame drawing

pub mod input;
pub mod render;
pub mod sim;

pub use input::{Key, Keyboard};
pub use sim::{Body, World};

/// Game configuration constants
pub mod consts {
    /// Player ship bounding box (square)
    pub const PLAYER_SIZE: f32 = 15.0;
    /// Horizontal player speed per frame
    pub const PLAYER_SPEED: f32 = 2.0;
    /// Player bullet speed per frame (fired straight up)
    pub const PLAYER_BULLET_SPEED: f32 = 6.0;

    /// Invader bounding box (square)
    pub const INVADER_SIZE: f32 = 15.0;
    /// Initial invader patrol speed per frame
    pub const INVADER_SPEED: f32 = 0.3;
    /// Patrol offset band; crossing either end reverses direction
    pub const PATROL_RANGE: f32 = 40.0;
    /// Chance per frame that an unblocked invader fires
    pub const FIRE_CHANCE: f32 = 0.005;
    /// Invader bullet fall speed per frame
    pub const INVADER_BULLET_SPEED: f32 = 2.0;

    /// Bullet bounding box (square)
    pub const BULLET_SIZE: f32 = 3.0;
    /// Gap between a firing body's edge and the bullet it spawns
    pub const MUZZLE_GAP: f32 = 2.0;

    /// Invader fleet layout
    pub const FLEET_COUNT: usize = 24;
    pub const FLEET_COLS: usize = 8;
    pub const FLEET_ROWS: usize = 3;
    /// Distance between neighboring invader centers
    pub const FLEET_PITCH: f32 = 30.0;
    /// Center of the top-left invader
    pub const FLEET_ORIGIN: f32 = 30.0;
}
