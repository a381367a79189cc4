//! Body variants and their per-frame update rules
//!
//! Three kinds of body live in the world: the player ship, patrolling
//! invaders, and bullets from both sides. Each owns its center and size and
//! advances itself by one frame when the world asks. Bodies never touch the
//! world's collection directly; anything they fire goes through the step
//! context's spawn queue.

use glam::Vec2;
use rand::Rng;

use super::collision::Aabb;
use super::world::StepCtx;
use crate::consts::*;
use crate::input::Key;

/// The player's ship. One per session, spawned centered one ship height
/// above the bottom edge. There is no loss condition: the game keeps
/// running whatever happens to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub center: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn new(extent: Vec2) -> Self {
        Self {
            center: Vec2::new(extent.x / 2.0, extent.y - PLAYER_SIZE),
            size: Vec2::splat(PLAYER_SIZE),
        }
    }

    /// Polls held keys; there is no edge detection, so a held key acts
    /// every frame. Movement stops where it would push an edge off screen,
    /// and left wins when both directions are held.
    pub fn update(&mut self, ctx: &mut StepCtx) {
        let half = self.size.x / 2.0;
        if ctx.keyboard.is_down(Key::Left) && self.center.x - PLAYER_SPEED - half >= 0.0 {
            self.center.x -= PLAYER_SPEED;
        } else if ctx.keyboard.is_down(Key::Right)
            && self.center.x + PLAYER_SPEED + half <= ctx.extent.x
        {
            self.center.x += PLAYER_SPEED;
        }

        // One bullet per frame while fire is held. No cooldown: rate of
        // fire tracks the display refresh rate.
        if ctx.keyboard.is_down(Key::Fire) {
            let muzzle = Vec2::new(
                self.center.x,
                self.center.y - self.size.y / 2.0 - MUZZLE_GAP,
            );
            ctx.spawn(Body::Bullet(Bullet::new(
                muzzle,
                Vec2::new(0.0, -PLAYER_BULLET_SPEED),
            )));
        }
    }
}

/// A patrolling invader. Sweeps horizontally, reversing at the ends of its
/// patrol band, and occasionally drops a bullet when no ally is in the way
/// below.
#[derive(Debug, Clone, PartialEq)]
pub struct Invader {
    pub center: Vec2,
    pub size: Vec2,
    /// Accumulated horizontal displacement; drives direction reversal
    pub patrol: f32,
    /// Signed horizontal speed per frame
    pub speed: f32,
}

impl Invader {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            size: Vec2::splat(INVADER_SIZE),
            patrol: 0.0,
            speed: INVADER_SPEED,
        }
    }

    /// The starting fleet: [`FLEET_COUNT`] invaders on a
    /// [`FLEET_COLS`]×[`FLEET_ROWS`] grid.
    pub fn fleet() -> Vec<Body> {
        (0..FLEET_COUNT)
            .map(|i| {
                let center = Vec2::new(
                    FLEET_ORIGIN + (i % FLEET_COLS) as f32 * FLEET_PITCH,
                    FLEET_ORIGIN + (i % FLEET_ROWS) as f32 * FLEET_PITCH,
                );
                Body::Invader(Invader::new(center))
            })
            .collect()
    }

    /// One frame of patrol movement. Reverses outside the patrol band,
    /// then moves; the offset overshoots the band by up to one frame's
    /// travel before turning back, so the bounce oscillates around the
    /// band rather than clamping to it.
    pub fn advance(&mut self) {
        if self.patrol < 0.0 || self.patrol > PATROL_RANGE {
            self.speed = -self.speed;
        }
        self.center.x += self.speed;
        self.patrol += self.speed;
    }

    /// Roll the per-frame fire chance and maybe drop a bullet.
    ///
    /// `allies_below` is the world's [`invaders_below`] answer for this
    /// invader, taken after it moved this frame.
    ///
    /// [`invaders_below`]: super::World::invaders_below
    pub fn try_fire(&self, allies_below: bool, ctx: &mut StepCtx) {
        if ctx.rng.random::<f32>() < ctx.fire_chance && !allies_below {
            let muzzle = Vec2::new(
                self.center.x,
                self.center.y + self.size.y / 2.0 + MUZZLE_GAP,
            );
            let drift = ctx.rng.random_range(-0.5..0.5);
            ctx.spawn(Body::Bullet(Bullet::new(
                muzzle,
                Vec2::new(drift, INVADER_BULLET_SPEED),
            )));
        }
    }
}

/// A bullet from either side. Velocity is fixed at creation; it flies in a
/// straight line until it hits something. Bullets that leave the screen are
/// never culled; they just keep flying.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub center: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
}

impl Bullet {
    pub fn new(center: Vec2, velocity: Vec2) -> Self {
        Self {
            center,
            size: Vec2::splat(BULLET_SIZE),
            velocity,
        }
    }

    pub fn advance(&mut self) {
        self.center += self.velocity;
    }
}

/// Any body the world can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Player(Player),
    Invader(Invader),
    Bullet(Bullet),
}

impl Body {
    pub fn center(&self) -> Vec2 {
        match self {
            Body::Player(p) => p.center,
            Body::Invader(v) => v.center,
            Body::Bullet(b) => b.center,
        }
    }

    pub fn size(&self) -> Vec2 {
        match self {
            Body::Player(p) => p.size,
            Body::Invader(v) => v.size,
            Body::Bullet(b) => b.size,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.center(), self.size())
    }
}
