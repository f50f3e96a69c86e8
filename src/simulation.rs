// The particle population and the pairwise proximity pass.
//
// The population is created once and only ever advanced in place. Link
// discovery is a plain O(n²) scan over unordered pairs, which is fine for a
// fixed population of ~100 but would need a spatial grid to scale further.

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;

// A proximity link between particles `from < to`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    pub alpha: f64,
}

// Link opacity decays linearly from `max_alpha` at distance 0 to nothing at
// `cutoff`. Anything at or beyond the cutoff is invisible.
pub fn link_alpha(distance: f64, cutoff: f64, max_alpha: f64) -> f64 {
    if distance >= cutoff {
        0.0
    } else {
        max_alpha * (1.0 - distance / cutoff)
    }
}

pub fn distance(a: &Particle, b: &Particle) -> f64 {
    vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos))
}

pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(rng: &mut R, config: &FieldConfig, width: f64, height: f64) -> ParticleField {
        let count = config.particle_count();
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(rng, config, width, height));
        }
        ParticleField { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> ParticleField {
        ParticleField { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // Every unordered pair within the cutoff, each reported exactly once
    pub fn links(&self, cutoff: f64, max_alpha: f64) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (offset, b) in self.particles[i + 1..].iter().enumerate() {
                let d = distance(a, b);
                if d < cutoff {
                    links.push(Link {
                        from: i,
                        to: i + 1 + offset,
                        distance: d,
                        alpha: link_alpha(d, cutoff, max_alpha),
                    });
                }
            }
        }
        links
    }

    // Advance every particle in population order, handing each one to `f`
    // right after its update
    pub fn advance_each<F: FnMut(&Particle)>(&mut self, width: f64, height: f64, mut f: F) {
        for particle in &mut self.particles {
            particle.advance(width, height);
            f(particle);
        }
    }
}
