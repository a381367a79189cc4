//! Frame drawing over an abstract raster surface
//!
//! The simulation does not own a canvas. It draws through [`Surface`], two
//! primitives matching what a 2D raster context offers: one frame is one
//! `clear` followed by one filled rectangle per live body, in collection
//! order.

use glam::Vec2;

use crate::sim::World;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Raster drawing capability consumed by the frame loop.
pub trait Surface {
    /// Wipe the full extent.
    fn clear(&mut self, extent: Vec2);
    /// Fill a rectangle given its top-left corner and dimensions.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Draw one frame of the world.
pub fn draw(world: &World, surface: &mut dyn Surface, extent: Vec2) {
    surface.clear(extent);
    for body in &world.bodies {
        let aabb = body.aabb();
        surface.fill_rect(aabb.min.x, aabb.min.y, aabb.width(), aabb.height());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Body, Bullet, Player};

    const EXTENT: Vec2 = Vec2::new(800.0, 600.0);

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Vec2),
        FillRect(f32, f32, f32, f32),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, extent: Vec2) {
            self.ops.push(Op::Clear(extent));
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.ops.push(Op::FillRect(x, y, w, h));
        }
    }

    #[test]
    fn test_draw_clears_then_fills_in_collection_order() {
        let mut world = World::empty(1);
        world.add_body(Body::Player(Player::new(EXTENT)));
        world.add_body(Body::Bullet(Bullet::new(
            Vec2::new(10.0, 20.0),
            Vec2::ZERO,
        )));

        let mut surface = RecordingSurface::default();
        draw(&world, &mut surface, EXTENT);

        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(EXTENT),
                // Player: center (400, 585), 15x15 -> top-left corner form
                Op::FillRect(392.5, 577.5, 15.0, 15.0),
                // Bullet: center (10, 20), 3x3
                Op::FillRect(8.5, 18.5, 3.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_draw_of_an_empty_world_only_clears() {
        let world = World::empty(1);
        let mut surface = RecordingSurface::default();
        draw(&world, &mut surface, EXTENT);
        assert_eq!(surface.ops, vec![Op::Clear(EXTENT)]);
    }
}
