// Tunable constants for the background field. Defaults reproduce the
// look of the landing page: 100 particles, 100px links, 30% dimming when idle.

use crate::color::Color;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    particle_count: usize,
    link_distance: f64,
    link_alpha: f64,
    link_width: f64,
    link_color: Color,
    inactive_dim: f64,
    glow_blur: f64,
    glow_scale: f64,
    size_min: f64,
    size_spread: f64,
    speed_spread: f64,
    opacity_min: f64,
    opacity_spread: f64,
    palette: [Color; 2],
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 100,
            link_distance: 100.0,
            link_alpha: 0.2,
            link_width: 1.0,
            link_color: Color::CYAN,
            inactive_dim: 0.3,
            glow_blur: 10.0,
            glow_scale: 0.5,
            size_min: 1.0,
            size_spread: 2.0,
            speed_spread: 0.5,
            opacity_min: 0.2,
            opacity_spread: 0.5,
            palette: [Color::CYAN, Color::VIOLET],
        }
    }
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }

    pub fn set_particle_count(&mut self, count: u32) {
        self.particle_count = count as usize;
    }

    pub fn set_link_distance(&mut self, distance: f64) {
        self.link_distance = distance.max(0.0);
    }

    pub fn set_link_alpha(&mut self, alpha: f64) {
        self.link_alpha = alpha.max(0.0).min(1.0);
    }

    pub fn set_inactive_dim(&mut self, dim: f64) {
        self.inactive_dim = dim.max(0.0).min(1.0);
    }

    pub fn set_glow_blur(&mut self, blur: f64) {
        self.glow_blur = blur.max(0.0);
    }
}

impl FieldConfig {
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_link_distance(mut self, distance: f64) -> Self {
        self.set_link_distance(distance);
        self
    }

    pub fn with_palette(mut self, palette: [Color; 2]) -> Self {
        self.palette = palette;
        self
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    pub fn link_distance(&self) -> f64 {
        self.link_distance
    }

    pub fn link_alpha(&self) -> f64 {
        self.link_alpha
    }

    pub fn link_width(&self) -> f64 {
        self.link_width
    }

    pub fn link_color(&self) -> Color {
        self.link_color
    }

    pub fn inactive_dim(&self) -> f64 {
        self.inactive_dim
    }

    pub fn glow_blur(&self) -> f64 {
        self.glow_blur
    }

    pub fn glow_scale(&self) -> f64 {
        self.glow_scale
    }

    pub fn size_range(&self) -> (f64, f64) {
        (self.size_min, self.size_min + self.size_spread)
    }

    pub fn speed_spread(&self) -> f64 {
        self.speed_spread
    }

    pub fn opacity_range(&self) -> (f64, f64) {
        (self.opacity_min, self.opacity_min + self.opacity_spread)
    }

    pub fn palette(&self) -> [Color; 2] {
        self.palette
    }
}
