// Renderer that draws one frame of the field onto a 2D context: proximity
// links first (from last frame's positions), then each particle right after
// it is advanced.

use crate::config::FieldConfig;
use crate::error::SurfaceError;
use crate::particle::Particle;
use crate::simulation::ParticleField;
use crate::surface::DrawContext;

pub struct FieldRenderer {
    config: FieldConfig,
}

impl FieldRenderer {
    pub fn new(config: FieldConfig) -> Self {
        FieldRenderer { config }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn render<C: DrawContext>(
        &self,
        ctx: &C,
        field: &mut ParticleField,
        width: f64,
        height: f64,
        active: bool,
    ) -> Result<(), SurfaceError> {
        ctx.clear_rect(0.0, 0.0, width, height);

        if active {
            self.render_links(ctx, field);
        }

        let mut result = Ok(());
        field.advance_each(width, height, |particle| {
            if let Err(e) = self.render_particle(ctx, particle, active) {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        });

        ctx.set_global_alpha(1.0);
        result
    }

    fn render_links<C: DrawContext>(&self, ctx: &C, field: &ParticleField) {
        let particles = field.particles();
        let links = field.links(self.config.link_distance(), self.config.link_alpha());
        if links.is_empty() {
            return;
        }

        let color = self.config.link_color();
        ctx.set_line_width(self.config.link_width());
        for link in links {
            let from = particles[link.from].pos;
            let to = particles[link.to].pos;
            ctx.set_stroke_style(&color.to_rgba(link.alpha));
            ctx.begin_path();
            ctx.move_to(from[0], from[1]);
            ctx.line_to(to[0], to[1]);
            ctx.stroke();
        }
    }

    fn render_particle<C: DrawContext>(
        &self,
        ctx: &C,
        particle: &Particle,
        active: bool,
    ) -> Result<(), SurfaceError> {
        let [x, y] = particle.pos;
        let dim = if active { 1.0 } else { self.config.inactive_dim() };
        let color = particle.color().to_hex();

        ctx.set_global_alpha(particle.opacity() * dim);
        ctx.set_fill_style(&color);
        ctx.begin_path();
        ctx.arc(x, y, particle.size())?;
        ctx.fill();

        if active {
            ctx.set_shadow_blur(self.config.glow_blur());
            ctx.set_shadow_color(&color);
            ctx.begin_path();
            let glow = ctx.arc(x, y, particle.size() * self.config.glow_scale());
            if glow.is_ok() {
                ctx.fill();
            }
            // Shadow state sticks to the context, so undo it before anything else draws
            ctx.set_shadow_blur(0.0);
            glow?;
        }
        Ok(())
    }
}
