//! The live-body container and simulation stepper

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::colliding;
use super::entity::{Body, Invader, Player};
use crate::consts::FIRE_CHANCE;
use crate::input::Keyboard;

/// Mutation window handed to each body during the update pass.
///
/// Bodies never edit the world's collection themselves. Bullets they fire
/// land in the spawn queue and join the collection once the pass is over,
/// so a body spawned this frame is neither pruned nor updated until the
/// next frame.
pub struct StepCtx<'a> {
    /// World extent in pixels
    pub extent: Vec2,
    /// Polled key state for this frame
    pub keyboard: &'a Keyboard,
    pub rng: &'a mut Pcg32,
    /// Per-frame chance that an unblocked invader fires
    pub fire_chance: f32,
    pub spawned: &'a mut Vec<Body>,
}

impl StepCtx<'_> {
    /// Queue a body to join the world after the update pass.
    pub fn spawn(&mut self, body: Body) {
        self.spawned.push(body);
    }
}

/// Owns every live body and advances the game one frame at a time.
///
/// Bodies are stored in insertion order, which is also draw order. The
/// collection is mutated only by [`World::step`] and [`World::add_body`].
pub struct World {
    pub bodies: Vec<Body>,
    /// Per-frame chance that an unblocked invader fires. Tests set this to
    /// 0.0 to silence the fleet.
    pub fire_chance: f32,
    rng: Pcg32,
}

impl World {
    /// A world with no bodies.
    pub fn empty(seed: u64) -> Self {
        Self {
            bodies: Vec::new(),
            fire_chance: FIRE_CHANCE,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// A fresh session: the invader fleet plus one player ship.
    pub fn new(extent: Vec2, seed: u64) -> Self {
        let mut world = Self::empty(seed);
        world.bodies = Invader::fleet();
        world.add_body(Body::Player(Player::new(extent)));
        log::debug!("world populated with {} bodies", world.bodies.len());
        world
    }

    /// Append a body. No dedup, no capacity limit.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Advance the simulation by one frame.
    ///
    /// Collision pruning runs first: a body is dropped iff it overlaps at
    /// least one other body, judged against the single pre-step snapshot,
    /// so removals never cascade within a step. Survivors then update in
    /// collection order, and anything they spawned is appended afterwards.
    pub fn step(&mut self, extent: Vec2, keyboard: &Keyboard) {
        self.prune();

        let mut spawned = Vec::new();
        let live = self.bodies.len();
        for i in 0..live {
            let mut ctx = StepCtx {
                extent,
                keyboard,
                rng: &mut self.rng,
                fire_chance: self.fire_chance,
                spawned: &mut spawned,
            };
            match &mut self.bodies[i] {
                Body::Player(player) => player.update(&mut ctx),
                Body::Invader(invader) => invader.advance(),
                Body::Bullet(bullet) => bullet.advance(),
            }
            // Fire check runs after the move, against allies as they stand
            // mid-pass: earlier bodies have moved this frame, later ones
            // have not.
            if let Body::Invader(invader) = &self.bodies[i] {
                let allies_below = invaders_below(&self.bodies, invader);
                invader.try_fire(allies_below, &mut ctx);
            }
        }
        self.bodies.append(&mut spawned);
    }

    /// Whether any live invader is positioned below `invader` closely
    /// enough that it should hold fire.
    pub fn invaders_below(&self, invader: &Invader) -> bool {
        invaders_below(&self.bodies, invader)
    }

    /// Drop every body that overlaps at least one other body.
    fn prune(&mut self) {
        let keep: Vec<bool> = self
            .bodies
            .iter()
            .map(|body| !self.bodies.iter().any(|other| colliding(body, other)))
            .collect();
        let mut index = 0;
        self.bodies.retain(|_| {
            let kept = keep[index];
            index += 1;
            kept
        });
    }
}

/// The horizontal check is signed, not absolute: a lower ally blocks fire
/// when it sits anywhere to the left or less than one invader width to the
/// right. Lower allies further right than that do not block.
fn invaders_below(bodies: &[Body], invader: &Invader) -> bool {
    bodies.iter().any(|body| match body {
        Body::Invader(other) => {
            other.center.y > invader.center.y
                && other.center.x - invader.center.x < invader.size.x
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::sim::entity::Bullet;

    const EXTENT: Vec2 = Vec2::new(800.0, 600.0);

    fn bullet_at(x: f32, y: f32) -> Body {
        Body::Bullet(Bullet::new(Vec2::new(x, y), Vec2::ZERO))
    }

    fn quiet_world() -> World {
        let mut world = World::empty(7);
        world.fire_chance = 0.0;
        world
    }

    #[test]
    fn test_prune_removes_both_halves_of_a_pair() {
        for reversed in [false, true] {
            let mut bodies = vec![
                bullet_at(10.0, 10.0),
                bullet_at(11.0, 10.0),
                bullet_at(100.0, 100.0),
            ];
            if reversed {
                bodies.reverse();
            }

            let mut world = quiet_world();
            for body in bodies {
                world.add_body(body);
            }
            world.step(EXTENT, &Keyboard::new());

            assert_eq!(world.bodies.len(), 1);
            assert_eq!(world.bodies[0].center(), Vec2::new(100.0, 100.0));
        }
    }

    #[test]
    fn test_prune_judges_against_one_snapshot() {
        // A overlaps B, B overlaps only A, C is clear. A and B both go in
        // one pass; removing B must not re-evaluate anything.
        let mut world = quiet_world();
        world.add_body(bullet_at(50.0, 50.0));
        world.add_body(bullet_at(52.0, 50.0));
        world.add_body(bullet_at(200.0, 50.0));
        world.step(EXTENT, &Keyboard::new());

        assert_eq!(world.bodies.len(), 1);
        assert_eq!(world.bodies[0].center(), Vec2::new(200.0, 50.0));
    }

    #[test]
    fn test_empty_world_steps_without_incident() {
        let mut world = quiet_world();
        world.step(EXTENT, &Keyboard::new());
        assert!(world.bodies.is_empty());
    }

    #[test]
    fn test_spawned_bullet_sits_out_the_step() {
        let mut world = quiet_world();
        world.add_body(Body::Player(Player::new(EXTENT)));

        let mut keyboard = Keyboard::new();
        keyboard.press(Key::Fire);
        world.step(EXTENT, &keyboard);

        assert_eq!(world.bodies.len(), 2);
        let Body::Bullet(bullet) = &world.bodies[1] else {
            panic!("expected the fired bullet last in draw order");
        };
        // Still exactly at the muzzle: appended after the update pass, so
        // it has neither moved nor been pruned this frame.
        assert_eq!(bullet.center, Vec2::new(400.0, 575.5));

        world.step(EXTENT, &Keyboard::new());
        let Body::Bullet(bullet) = &world.bodies[1] else {
            panic!("bullet should survive");
        };
        assert_eq!(bullet.center, Vec2::new(400.0, 569.5));
    }

    #[test]
    fn test_invaders_below_blocks_left_and_near_right() {
        let shooter = Invader::new(Vec2::new(100.0, 30.0));

        // Lower ally far to the left still blocks: the check is signed
        let mut world = quiet_world();
        world.add_body(Body::Invader(Invader::new(Vec2::new(10.0, 60.0))));
        assert!(world.invaders_below(&shooter));

        // Lower ally just inside one width to the right blocks
        let mut world = quiet_world();
        world.add_body(Body::Invader(Invader::new(Vec2::new(114.0, 60.0))));
        assert!(world.invaders_below(&shooter));
    }

    #[test]
    fn test_invaders_below_ignores_far_right_and_non_invaders() {
        let shooter = Invader::new(Vec2::new(100.0, 30.0));

        // One full width to the right: not blocked (strict inequality)
        let mut world = quiet_world();
        world.add_body(Body::Invader(Invader::new(Vec2::new(115.0, 60.0))));
        assert!(!world.invaders_below(&shooter));

        // Same row: not below
        let mut world = quiet_world();
        world.add_body(Body::Invader(Invader::new(Vec2::new(100.0, 30.0))));
        assert!(!world.invaders_below(&shooter));

        // A bullet below is not an invader
        let mut world = quiet_world();
        world.add_body(bullet_at(100.0, 60.0));
        assert!(!world.invaders_below(&shooter));
    }

    #[test]
    fn test_first_step_of_a_fresh_session() {
        let mut world = World::new(EXTENT, 42);
        world.fire_chance = 0.0;

        let starting: Vec<Vec2> = world.bodies.iter().map(|b| b.center()).collect();
        world.step(EXTENT, &Keyboard::new());

        // Nothing overlaps at spawn, no keys are held, and the fleet is
        // silenced: 24 invaders + 1 player all survive untouched.
        assert_eq!(world.bodies.len(), 25);
        for (body, start) in world.bodies.iter().zip(&starting) {
            match body {
                Body::Invader(invader) => {
                    assert_eq!(invader.center.x, start.x + 0.3);
                    assert_eq!(invader.center.y, start.y);
                }
                Body::Player(player) => assert_eq!(player.center, *start),
                Body::Bullet(_) => panic!("nothing should have fired"),
            }
        }
    }

    #[test]
    fn test_add_body_does_not_dedup() {
        let mut world = quiet_world();
        world.add_body(bullet_at(5.0, 5.0));
        world.add_body(bullet_at(5.0, 5.0));
        assert_eq!(world.bodies.len(), 2);
    }
}
