// In-memory stand-ins for the canvas, its 2D context and the window, used by
// the unit tests.

use crate::error::SurfaceError;
use crate::host::{FrameId, Host, ListenerId};
use crate::surface::{Canvas, DrawContext};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    ClearRect(f64, f64, f64, f64),
    GlobalAlpha(f64),
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
    ShadowBlur(f64),
    ShadowColor(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    Arc(f64, f64, f64),
    Fill,
}

#[derive(Clone, Default)]
pub struct RecordingContext {
    ops: Rc<RefCell<Vec<Op>>>,
    fail_arcs: bool,
}

impl RecordingContext {
    pub fn failing_arcs() -> Self {
        RecordingContext {
            fail_arcs: true,
            ..RecordingContext::default()
        }
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.ops.borrow().len()
    }

    pub fn count<F: Fn(&Op) -> bool>(&self, f: F) -> usize {
        self.ops.borrow().iter().filter(|op| f(op)).count()
    }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }

    fn push(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

impl DrawContext for RecordingContext {
    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.push(Op::ClearRect(x, y, width, height));
    }

    fn set_global_alpha(&self, alpha: f64) {
        self.push(Op::GlobalAlpha(alpha));
    }

    fn set_fill_style(&self, style: &str) {
        self.push(Op::FillStyle(style.to_owned()));
    }

    fn set_stroke_style(&self, style: &str) {
        self.push(Op::StrokeStyle(style.to_owned()));
    }

    fn set_line_width(&self, width: f64) {
        self.push(Op::LineWidth(width));
    }

    fn set_shadow_blur(&self, blur: f64) {
        self.push(Op::ShadowBlur(blur));
    }

    fn set_shadow_color(&self, color: &str) {
        self.push(Op::ShadowColor(color.to_owned()));
    }

    fn begin_path(&self) {
        self.push(Op::BeginPath);
    }

    fn move_to(&self, x: f64, y: f64) {
        self.push(Op::MoveTo(x, y));
    }

    fn line_to(&self, x: f64, y: f64) {
        self.push(Op::LineTo(x, y));
    }

    fn stroke(&self) {
        self.push(Op::Stroke);
    }

    fn arc(&self, x: f64, y: f64, radius: f64) -> Result<(), SurfaceError> {
        if self.fail_arcs {
            return Err(SurfaceError::Js("IndexSizeError".to_owned()));
        }
        self.push(Op::Arc(x, y, radius));
        Ok(())
    }

    fn fill(&self) {
        self.push(Op::Fill);
    }
}

#[derive(Clone)]
pub struct MockCanvas {
    size: Rc<Cell<(u32, u32)>>,
    context: Option<RecordingContext>,
}

impl MockCanvas {
    pub fn new(context: RecordingContext) -> Self {
        MockCanvas {
            size: Rc::new(Cell::new((300, 150))),
            context: Some(context),
        }
    }

    pub fn without_context() -> Self {
        MockCanvas {
            size: Rc::new(Cell::new((300, 150))),
            context: None,
        }
    }
}

impl Canvas for MockCanvas {
    type Context = RecordingContext;

    fn context_2d(&self) -> Option<RecordingContext> {
        self.context.clone()
    }

    fn size(&self) -> (u32, u32) {
        self.size.get()
    }

    fn set_size(&self, width: u32, height: u32) {
        self.size.set((width, height));
    }
}

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

pub struct MockHost {
    viewport: Cell<(u32, u32)>,
    frames: RefCell<Vec<(FrameId, Box<dyn FnOnce()>)>>,
    listeners: RefCell<Vec<(ListenerId, Handler)>>,
    next_id: Cell<i32>,
    fail_frames: Cell<bool>,
    ignore_cancels: Cell<bool>,
}

impl MockHost {
    pub fn new(width: u32, height: u32) -> Self {
        MockHost {
            viewport: Cell::new((width, height)),
            frames: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            fail_frames: Cell::new(false),
            ignore_cancels: Cell::new(false),
        }
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn fail_frame_requests(&self, fail: bool) {
        self.fail_frames.set(fail);
    }

    // Simulates a scheduler that fires a callback even after it was cancelled
    pub fn ignore_cancels(&self, ignore: bool) {
        self.ignore_cancels.set(ignore);
    }

    // Runs the oldest pending frame, if any. The callback is taken out first
    // so it can schedule the next frame.
    pub fn run_frame(&self) -> bool {
        let next = {
            let mut frames = self.frames.borrow_mut();
            if frames.is_empty() {
                None
            } else {
                Some(frames.remove(0))
            }
        };
        match next {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn resize_viewport(&self, width: u32, height: u32) {
        self.viewport.set((width, height));
        let handlers: Vec<Handler> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    fn next_id(&self) -> i32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Host for MockHost {
    fn viewport_size(&self) -> (u32, u32) {
        self.viewport.get()
    }

    fn add_resize_listener(&self, handler: Box<dyn FnMut()>) -> Result<ListenerId, SurfaceError> {
        let id = self.next_id() as ListenerId;
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        Ok(id)
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(l, _)| *l != id);
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameId, SurfaceError> {
        if self.fail_frames.get() {
            return Err(SurfaceError::Js("requestAnimationFrame unavailable".to_owned()));
        }
        let id = self.next_id();
        self.frames.borrow_mut().push((id, callback));
        Ok(id)
    }

    fn cancel_frame(&self, id: FrameId) {
        if self.ignore_cancels.get() {
            return;
        }
        self.frames.borrow_mut().retain(|(f, _)| *f != id);
    }
}
