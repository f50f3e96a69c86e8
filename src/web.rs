// Browser bindings: the window as a frame scheduler and resize source, and
// the DOM canvas and its 2D context as a drawing surface.

use crate::error::SurfaceError;
use crate::host::{FrameId, Host, ListenerId};
use crate::surface::{Canvas, DrawContext};
use js_sys::Function;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

type FrameSlot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

// One persistent requestAnimationFrame closure per host; each request just
// parks the callback in `next_frame` for it to pick up.
pub struct WebHost {
    window: Window,
    next_frame: FrameSlot,
    on_frame: Closure<dyn FnMut()>,
    pending: Cell<Option<FrameId>>,
    listeners: RefCell<HashMap<ListenerId, Closure<dyn FnMut()>>>,
    next_listener: Cell<ListenerId>,
}

impl WebHost {
    pub fn new() -> Result<WebHost, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let next_frame: FrameSlot = Rc::new(RefCell::new(None));

        let slot = next_frame.clone();
        let on_frame = Closure::wrap(Box::new(move || {
            let _timer = if log::log_enabled!(log::Level::Trace) {
                Some(Timer::new("BackgroundEffects::frame"))
            } else {
                None
            };
            // Take it out first, the callback schedules the next frame
            let callback = slot.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        }) as Box<dyn FnMut()>);

        Ok(WebHost {
            window,
            next_frame,
            on_frame,
            pending: Cell::new(None),
            listeners: RefCell::new(HashMap::new()),
            next_listener: Cell::new(0),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn find_canvas(&self, canvas_id: &str) -> Result<HtmlCanvasElement, SurfaceError> {
        let document = self.window.document().ok_or(SurfaceError::NoDocument)?;
        let element = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SurfaceError::CanvasNotFound(canvas_id.to_owned()))?;
        element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas(canvas_id.to_owned()))
    }
}

impl Host for WebHost {
    fn viewport_size(&self) -> (u32, u32) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        (width as u32, height as u32)
    }

    fn add_resize_listener(&self, handler: Box<dyn FnMut()>) -> Result<ListenerId, SurfaceError> {
        let closure = Closure::wrap(handler);
        self.window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref::<Function>())?;

        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().insert(id, closure);
        Ok(id)
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        if let Some(closure) = self.listeners.borrow_mut().remove(&id) {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref::<Function>())
            {
                log::error!("failed to remove resize listener: {:?}", e);
            }
        }
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameId, SurfaceError> {
        *self.next_frame.borrow_mut() = Some(callback);
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref::<Function>())
        {
            Ok(id) => {
                self.pending.set(Some(id));
                Ok(id)
            }
            Err(e) => {
                self.next_frame.borrow_mut().take();
                Err(e.into())
            }
        }
    }

    fn cancel_frame(&self, id: FrameId) {
        if let Err(e) = self.window.cancel_animation_frame(id) {
            log::error!("failed to cancel animation frame: {:?}", e);
        }
        if self.pending.get() == Some(id) {
            self.pending.set(None);
        }
        self.next_frame.borrow_mut().take();
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        // The closures die with us, so the window must not call them again
        if let Some(id) = self.pending.take() {
            self.cancel_frame(id);
        }
        let ids: Vec<ListenerId> = self.listeners.borrow().keys().copied().collect();
        for id in ids {
            self.remove_resize_listener(id);
        }
    }
}

impl Canvas for HtmlCanvasElement {
    type Context = CanvasRenderingContext2d;

    fn context_2d(&self) -> Option<CanvasRenderingContext2d> {
        self.get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    }

    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn set_size(&self, width: u32, height: u32) {
        self.set_width(width);
        self.set_height(height);
    }
}

#[allow(deprecated)]
impl DrawContext for CanvasRenderingContext2d {
    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn set_global_alpha(&self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn set_fill_style(&self, style: &str) {
        CanvasRenderingContext2d::set_fill_style(self, &JsValue::from_str(style));
    }

    fn set_stroke_style(&self, style: &str) {
        CanvasRenderingContext2d::set_stroke_style(self, &JsValue::from_str(style));
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_shadow_blur(&self, blur: f64) {
        CanvasRenderingContext2d::set_shadow_blur(self, blur);
    }

    fn set_shadow_color(&self, color: &str) {
        CanvasRenderingContext2d::set_shadow_color(self, color);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn arc(&self, x: f64, y: f64, radius: f64) -> Result<(), SurfaceError> {
        CanvasRenderingContext2d::arc(self, x, y, radius, 0.0, PI * 2.0)?;
        Ok(())
    }

    fn fill(&self) {
        CanvasRenderingContext2d::fill(self);
    }
}
