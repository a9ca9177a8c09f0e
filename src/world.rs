use crate::kinematics::launch_velocity;
use log::info;
use macroquad::prelude::Vec2;

/// A point-mass projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileBody {
    pub id: usize, // Index into the launch table, never reused
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A body reaching the ground. `range` is its horizontal coordinate at removal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub id: usize,
    pub range: f32,
}

/// Active bodies plus the constants they move under.
#[derive(Debug, Clone)]
pub struct World {
    pub gravity: Vec2,
    pub ground: f32, // Bodies at or below this y are removed
    pub bodies: Vec<ProjectileBody>,
}

impl World {
    pub fn new(gravity: Vec2, ground: f32) -> Self {
        World {
            gravity,
            ground,
            bodies: Vec::new(),
        }
    }

    /// Creates one body per angle, launched from one unit above the ground at x = 0.
    pub fn launch(gravity: Vec2, ground: f32, angles: &[f32], speed: f32) -> Self {
        let mut world = World::new(gravity, ground);
        world.bodies = angles
            .iter()
            .enumerate()
            .map(|(id, &angle)| ProjectileBody {
                id,
                position: Vec2::new(0.0, ground - 1.0),
                velocity: launch_velocity(angle, speed),
            })
            .collect();
        world
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Semi-implicit Euler: velocity first, then position from the new velocity.
    pub fn integrate(&mut self, dt: f32) {
        for body in self.bodies.iter_mut() {
            body.velocity += self.gravity * dt;
            body.position += body.velocity * dt;
        }
    }

    /// Removes every body at or past the ground and reports each one once,
    /// in collection order.
    pub fn remove_grounded(&mut self) -> Vec<Impact> {
        let ground = self.ground;
        let (landed, active): (Vec<ProjectileBody>, Vec<ProjectileBody>) = self
            .bodies
            .drain(..)
            .partition(|body| body.position.y >= ground);
        self.bodies = active;

        landed
            .into_iter()
            .map(|body| {
                info!("Entity {} has hit the ground at {:.6}.", body.id, body.position.x);
                Impact {
                    id: body.id,
                    range: body.position.x,
                }
            })
            .collect()
    }

    /// Advances one frame: integrate, then drop grounded bodies.
    pub fn step(&mut self, dt: f32) -> Vec<Impact> {
        self.integrate(dt);
        self.remove_grounded()
    }
}
