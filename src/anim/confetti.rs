//! Falling confetti for correct answers and the final win.
//!
//! Particles live on a fixed logical canvas; the renderer scales it to
//! whatever area it is given.

use rand::Rng;
use rand::rngs::StdRng;
use ratatui::style::Color;

pub const CANVAS_WIDTH: f64 = 300.0;
pub const CANVAS_HEIGHT: f64 = 120.0;

const PARTICLE_COUNT: usize = 50;
const GRAVITY: f64 = 0.06;
const EDGE_MARGIN: f64 = 10.0;
const RESPAWN_Y: f64 = -10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: Color,
}

#[derive(Debug)]
pub struct Confetti {
    particles: Vec<Particle>,
    running: bool,
    rng: StdRng,
}

impl Confetti {
    pub fn new(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            running: false,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Throws a fresh batch from the top edge.
    pub fn start(&mut self) {
        let particles: Vec<Particle> = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: self.random_x(),
                y: 0.0,
                vx: self.rng.random_range(-1.0..1.0),
                vy: self.rng.random_range(2.0..5.0),
                size: self.rng.random_range(6..=12) as f64,
                color: self.random_color(),
            })
            .collect();
        self.particles = particles;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.particles.clear();
    }

    /// One Euler step; particles that fall off the bottom respawn above the top.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }

        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            p.y += p.vy;
            p.x += p.vx;
            p.vy += GRAVITY;

            if p.y > CANVAS_HEIGHT {
                let x = self.random_x();
                let vy = self.rng.random_range(2.0..5.0);
                let vx = self.rng.random_range(-1.5..1.5);
                let color = self.random_color();

                let p = &mut self.particles[i];
                p.y = RESPAWN_Y;
                p.x = x;
                p.vy = vy;
                p.vx = vx;
                p.color = color;
            }
        }
    }

    fn random_x(&mut self) -> f64 {
        self.rng
            .random_range(EDGE_MARGIN as i32..=(CANVAS_WIDTH - EDGE_MARGIN) as i32) as f64
    }

    fn random_color(&mut self) -> Color {
        Color::Rgb(
            self.rng.random_range(50..=255),
            self.rng.random_range(50..=255),
            self.rng.random_range(50..=255),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn confetti() -> Confetti {
        Confetti::new(StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_start_spawns_batch_at_top() {
        let mut c = confetti();
        c.start();
        assert!(c.is_running());
        assert_eq!(c.particles().len(), PARTICLE_COUNT);
        for p in c.particles() {
            assert_eq!(p.y, 0.0);
            assert!((10.0..=290.0).contains(&p.x));
            assert!((2.0..5.0).contains(&p.vy));
            assert!((6.0..=12.0).contains(&p.size));
        }
    }

    #[test]
    fn test_step_applies_gravity() {
        let mut c = confetti();
        c.start();
        let before = c.particles()[0].clone();
        c.step();
        let after = &c.particles()[0];
        assert!((after.y - (before.y + before.vy)).abs() < 1e-9);
        assert!((after.x - (before.x + before.vx)).abs() < 1e-9);
        assert!((after.vy - (before.vy + GRAVITY)).abs() < 1e-9);
    }

    #[test]
    fn test_particles_respawn_above_canvas() {
        let mut c = confetti();
        c.start();
        for _ in 0..200 {
            c.step();
            assert!(c.particles().iter().all(|p| p.y <= CANVAS_HEIGHT));
        }
    }

    #[test]
    fn test_stop_clears() {
        let mut c = confetti();
        c.start();
        c.stop();
        assert!(!c.is_running());
        assert!(c.particles().is_empty());
        c.step();
        assert!(c.particles().is_empty());
    }
}
