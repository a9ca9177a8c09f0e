use crate::config;
use crate::debug_world;
use crate::frame::{FrameLimiter, FrameSource, WindowFrames};
use crate::render::{Renderer, Shape};
use crate::world::{Impact, World};
use log::info;
use macroquad::prelude::{Vec2, next_frame, screen_width};

/// Output of one windowed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    #[allow(dead_code)] // Impacts are already logged by the world
    pub impacts: Vec<Impact>,
    pub shapes: Vec<Shape>,
}

/// The Simulation struct drives a World frame by frame
pub struct Simulation {
    pub world: World,
    pub frame: u64,
    launched: usize,
}

impl Simulation {
    /// Launches one body per table angle from the launch height.
    pub fn new() -> Self {
        let world = World::launch(
            Vec2::new(0.0, config::GRAVITY),
            config::LAUNCH_HEIGHT,
            &config::LAUNCH_ANGLES,
            config::LAUNCH_SPEED,
        );
        Self::with_world(world)
    }

    pub fn with_world(world: World) -> Self {
        let launched = world.bodies.len();
        info!("Launched {} projectiles.", launched);
        Simulation {
            world,
            frame: 0,
            launched,
        }
    }

    /// Advances the world by one frame of `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Vec<Impact> {
        self.frame += 1;
        let impacts = self.world.step(dt);
        if !impacts.is_empty() {
            debug_world!(
                self.frame,
                "{} landed, {}/{} still active",
                impacts.len(),
                self.world.bodies.len(),
                self.launched
            );
        }
        impacts
    }

    /// One pass of the frame loop: poll for close, step by the source's frame
    /// time, then build the draw list. Returns `None` once close is requested.
    pub fn tick<F: FrameSource>(
        &mut self,
        frames: &mut F,
        renderer: &Renderer,
        width: f32,
    ) -> Option<Frame> {
        if frames.close_requested() {
            return None;
        }
        let dt = frames.frame_time();
        let impacts = self.update(dt);
        let shapes = renderer.shapes(&self.world, width);
        Some(Frame { impacts, shapes })
    }

    /// Runs the windowed loop until the operator closes the window.
    /// An empty world keeps rendering the ground bar.
    pub async fn run(&mut self, renderer: &Renderer) {
        info!("Starting main loop...");

        let mut frames = WindowFrames;
        let mut limiter = FrameLimiter::new(config::FRAME_RATE);
        while let Some(frame) = self.tick(&mut frames, renderer, screen_width()) {
            Renderer::present(&frame.shapes);
            limiter.wait();
            next_frame().await;
        }

        info!("Exiting Physics-1.");
    }

    /// Steps at a fixed `dt` until every body has landed or `max_frames` pass.
    pub fn run_headless(&mut self, dt: f32, max_frames: u64) -> Vec<Impact> {
        info!("Running headless at dt = {:.6}", dt);
        let mut impacts = Vec::with_capacity(self.world.bodies.len());
        let start = self.frame;
        while !self.world.is_empty() && self.frame - start < max_frames {
            impacts.extend(self.update(dt));
        }
        info!(
            "Headless run finished after {} frames, {} bodies still active.",
            self.frame - start,
            self.world.bodies.len()
        );
        impacts
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
