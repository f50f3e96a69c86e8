// Platform services the field needs from its environment: viewport size,
// resize notifications and a frame scheduler. In the browser this is the
// window; tests drive an in-memory version by hand.

use crate::error::SurfaceError;
use std::cell::Cell;
use std::rc::Rc;

pub type FrameId = i32;
pub type ListenerId = u32;

pub trait Host: 'static {
    fn viewport_size(&self) -> (u32, u32);

    fn add_resize_listener(&self, handler: Box<dyn FnMut()>) -> Result<ListenerId, SurfaceError>;
    fn remove_resize_listener(&self, id: ListenerId);

    // Run `callback` once before the next repaint.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<FrameId, SurfaceError>;
    // Drop a pending frame request without running it.
    fn cancel_frame(&self, id: FrameId);
}

// Shared flag checked by every scheduled callback. Once cancelled it stays
// cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
