// Simple particle struct to keep track of individual position, velocity, size,
// opacity and color. Size and opacity are fixed for the particle's lifetime.

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    size: f64,
    opacity: f64,
    color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, opacity: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            size,
            opacity,
            color,
        }
    }

    // Uniform position over the surface, small drift in either direction
    pub fn random<R: Rng>(rng: &mut R, config: &FieldConfig, width: f64, height: f64) -> Particle {
        let (size_min, size_max) = config.size_range();
        let (opacity_min, opacity_max) = config.opacity_range();
        let speed = config.speed_spread();
        let palette = config.palette();

        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let size = rng.gen::<f64>() * (size_max - size_min) + size_min;
        let vel_x = (rng.gen::<f64>() - 0.5) * speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * speed;
        let opacity = rng.gen::<f64>() * (opacity_max - opacity_min) + opacity_min;
        let color = if rng.gen::<f64>() > 0.5 { palette[0] } else { palette[1] };

        Particle::new([pos_x, pos_y], [vel_x, vel_y], size, opacity, color)
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn color(&self) -> Color {
        self.color
    }

    // Move by one step, reflect off any edge that was crossed, then clamp
    // into the surface. The clamp runs every frame, so a particle pinned to an
    // edge with outward velocity flips sign each frame until it moves inward.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }

        self.pos[0] = self.pos[0].min(width).max(0.0);
        self.pos[1] = self.pos[1].min(height).max(0.0);
    }
}
