// Error types for the particle field.
//
// A missing 2D context is not an error: mounting simply yields nothing.
// These variants cover the lookups and platform calls that can fail
// around it.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    // No global `window` (e.g. running inside a worker).
    NoWindow,
    // The window has no document.
    NoDocument,
    // No element with the given id.
    CanvasNotFound(String),
    // The element with the given id is not a `<canvas>`.
    NotACanvas(String),
    // A browser call threw.
    Js(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NoWindow => write!(f, "no global window"),
            SurfaceError::NoDocument => write!(f, "window has no document"),
            SurfaceError::CanvasNotFound(id) => write!(f, "no element with id '{}'", id),
            SurfaceError::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            SurfaceError::Js(msg) => write!(f, "browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for SurfaceError {}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Js(format!("{:?}", value))
    }
}

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
