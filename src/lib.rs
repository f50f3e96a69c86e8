// Ambient particle field drawn behind the hologram page. A fixed population
// drifts across a full-viewport canvas; while the hologram is active, nearby
// particles are joined by fading links and glow.

mod utils;

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod host;
pub mod particle;
pub mod renderer;
pub mod simulation;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod mock;

pub use crate::color::Color;
pub use crate::config::FieldConfig;
pub use crate::error::SurfaceError;
pub use crate::field::{mount, MountedField};
pub use crate::particle::Particle;
pub use crate::simulation::{link_alpha, Link, ParticleField};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::web::WebHost;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlCanvasElement;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    initialize_with_level("info");
}

// "trace" also turns on per-frame console timing
#[wasm_bindgen]
pub fn initialize_with_level(level: &str) {
    utils::set_panic_hook();
    let level = parse_log_level(level);
    if console_log::init_with_level(level).is_err() {
        // Logger already installed, only the cap changes
        log::set_max_level(level.to_level_filter());
    }
    log::debug!("logging at {}", level);
}

// Unknown names fall back to info
pub fn parse_log_level(level: &str) -> log::Level {
    level.trim().parse().unwrap_or(log::Level::Info)
}

// The page-facing handle. Dropping it (or calling `free()` from JS) tears
// the field down; if the canvas has no 2D context it stays inert.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct BackgroundEffects {
    field: Option<MountedField<WebHost, HtmlCanvasElement>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl BackgroundEffects {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, is_active: bool) -> Result<BackgroundEffects, JsValue> {
        BackgroundEffects::with_config(canvas_id, is_active, &FieldConfig::default())
    }

    pub fn with_config(
        canvas_id: &str,
        is_active: bool,
        config: &FieldConfig,
    ) -> Result<BackgroundEffects, JsValue> {
        let host = WebHost::new()?;
        let canvas = host.find_canvas(canvas_id)?;
        let field = mount(Rc::new(host), canvas, is_active, config.clone());
        Ok(BackgroundEffects { field })
    }

    pub fn set_active(&self, is_active: bool) {
        if let Some(field) = &self.field {
            field.set_active(is_active);
        }
    }

    pub fn is_active(&self) -> bool {
        self.field.as_ref().map_or(false, |field| field.is_active())
    }

    pub fn is_running(&self) -> bool {
        self.field.is_some()
    }

    pub fn particle_count(&self) -> u32 {
        self.field
            .as_ref()
            .map_or(0, |field| field.particle_count() as u32)
    }

    pub fn unmount(&mut self) {
        if let Some(field) = self.field.take() {
            field.unmount();
        }
    }
}
