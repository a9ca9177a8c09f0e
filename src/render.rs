use crate::config::{GROUND_BAR_HEIGHT, PROJECTILE_RADIUS};
use crate::world::World;
use macroquad::prelude::*;

/// One draw call of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Clear(Color),
    Circle { center: Vec2, radius: f32, color: Color },
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
}

// Handles drawing the world using macroquad
pub struct Renderer {
    background: Color,
    projectile_color: Color,
    ground_color: Color,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            background: WHITE,
            projectile_color: LIGHTGRAY,
            ground_color: DARKGRAY,
        }
    }

    /// Builds the draw list for a frame: clear, one circle per active body,
    /// then the ground bar across `width`. Reads the world only.
    pub fn shapes(&self, world: &World, width: f32) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(world.bodies.len() + 2);
        shapes.push(Shape::Clear(self.background));
        shapes.extend(world.bodies.iter().map(|body| Shape::Circle {
            center: body.position,
            radius: PROJECTILE_RADIUS,
            color: self.projectile_color,
        }));
        shapes.push(Shape::Rect {
            x: 0.0,
            y: world.ground,
            w: width,
            h: GROUND_BAR_HEIGHT,
            color: self.ground_color,
        });
        shapes
    }

    /// Plays a draw list back onto the macroquad window.
    pub fn present(shapes: &[Shape]) {
        for shape in shapes {
            match *shape {
                Shape::Clear(color) => clear_background(color),
                Shape::Circle { center, radius, color } => {
                    draw_circle(center.x, center.y, radius, color)
                }
                Shape::Rect { x, y, w, h, color } => draw_rectangle(x, y, w, h, color),
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
