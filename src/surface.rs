// Drawing surface abstractions. The browser implementations live in `web.rs`;
// tests swap in recording versions.

use crate::error::SurfaceError;

// The subset of the 2D canvas context the field draws with. Style setters
// are persistent on the underlying context, so callers must reset anything
// they change.
pub trait DrawContext {
    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
    fn set_global_alpha(&self, alpha: f64);
    fn set_fill_style(&self, style: &str);
    fn set_stroke_style(&self, style: &str);
    fn set_line_width(&self, width: f64);
    fn set_shadow_blur(&self, blur: f64);
    fn set_shadow_color(&self, color: &str);
    fn begin_path(&self);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn stroke(&self);
    fn arc(&self, x: f64, y: f64, radius: f64) -> Result<(), SurfaceError>;
    fn fill(&self);
}

// A resizable pixel surface that can hand out a 2D drawing context.
// Setting the size clears whatever was drawn on it.
pub trait Canvas: 'static {
    type Context: DrawContext + 'static;

    fn context_2d(&self) -> Option<Self::Context>;
    fn size(&self) -> (u32, u32);
    fn set_size(&self, width: u32, height: u32);
}
