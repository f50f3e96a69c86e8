// Mounting and lifecycle of the background field.
//
// [`mount`] sizes the canvas to the viewport, creates the population once,
// hooks up the resize handler and starts a self-rescheduling frame loop.
// Everything is released when the returned [`MountedField`] is dropped.
// Scheduled callbacks and the resize handler only hold weak references and
// check a shared cancellation token, so nothing they capture outlives the
// mount.

use crate::config::FieldConfig;
use crate::error::SurfaceError;
use crate::host::{CancellationToken, FrameId, Host, ListenerId};
use crate::particle::Particle;
use crate::renderer::FieldRenderer;
use crate::simulation::ParticleField;
use crate::surface::Canvas;
use rand::Rng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct FieldState<C: Canvas> {
    canvas: C,
    context: C::Context,
    field: ParticleField,
    renderer: FieldRenderer,
    active: bool,
    pending_frame: Option<FrameId>,
}

impl<C: Canvas> FieldState<C> {
    fn render_frame(&mut self) -> Result<(), SurfaceError> {
        let (width, height) = self.canvas.size();
        self.renderer.render(
            &self.context,
            &mut self.field,
            width as f64,
            height as f64,
            self.active,
        )
    }
}

type SharedState<C> = Rc<RefCell<FieldState<C>>>;

pub struct MountedField<H: Host, C: Canvas> {
    host: Rc<H>,
    state: SharedState<C>,
    token: CancellationToken,
    resize_listener: Option<ListenerId>,
}

// Mount the field onto `canvas`. Returns `None` without registering anything
// when the canvas cannot provide a 2D context.
pub fn mount<H: Host, C: Canvas>(
    host: Rc<H>,
    canvas: C,
    active: bool,
    config: FieldConfig,
) -> Option<MountedField<H, C>> {
    mount_with_rng(host, canvas, active, config, &mut rand::thread_rng())
}

pub fn mount_with_rng<H: Host, C: Canvas, R: Rng>(
    host: Rc<H>,
    canvas: C,
    active: bool,
    config: FieldConfig,
    rng: &mut R,
) -> Option<MountedField<H, C>> {
    let context = match canvas.context_2d() {
        Some(context) => context,
        None => {
            log::debug!("2d context unavailable, background field disabled");
            return None;
        }
    };

    let (width, height) = host.viewport_size();
    canvas.set_size(width, height);
    let field = ParticleField::new(rng, &config, width as f64, height as f64);
    log::debug!(
        "mounting background field: {} particles on {}x{}",
        field.len(),
        width,
        height
    );

    let state = Rc::new(RefCell::new(FieldState {
        canvas,
        context,
        field,
        renderer: FieldRenderer::new(config),
        active,
        pending_frame: None,
    }));
    let token = CancellationToken::new();

    let handler = resize_handler(Rc::downgrade(&host), Rc::downgrade(&state), token.clone());
    let resize_listener = match host.add_resize_listener(handler) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("failed to register resize listener: {}", e);
            None
        }
    };

    tick(Rc::downgrade(&host), Rc::downgrade(&state), token.clone());

    Some(MountedField {
        host,
        state,
        token,
        resize_listener,
    })
}

// One frame: draw, then ask the host for the next one. Bails out quietly once
// the mount is gone.
fn tick<H: Host, C: Canvas>(host: Weak<H>, state: Weak<RefCell<FieldState<C>>>, token: CancellationToken) {
    if token.is_cancelled() {
        return;
    }
    let (live_host, live_state) = match (host.upgrade(), state.upgrade()) {
        (Some(h), Some(s)) => (h, s),
        _ => return,
    };
    let mut current = match live_state.try_borrow_mut() {
        Ok(current) => current,
        Err(_) => return,
    };

    current.pending_frame = None;
    if let Err(e) = current.render_frame() {
        log::error!("failed to draw background frame: {}", e);
    }

    let next_token = token.clone();
    let next: Box<dyn FnOnce()> = Box::new(move || tick(host, state, next_token));
    match live_host.request_frame(next) {
        Ok(id) => current.pending_frame = Some(id),
        Err(e) => log::error!("failed to schedule background frame: {}", e),
    };
}

fn resize_handler<H: Host, C: Canvas>(
    host: Weak<H>,
    state: Weak<RefCell<FieldState<C>>>,
    token: CancellationToken,
) -> Box<dyn FnMut()> {
    Box::new(move || {
        if token.is_cancelled() {
            return;
        }
        let (live_host, live_state) = match (host.upgrade(), state.upgrade()) {
            (Some(h), Some(s)) => (h, s),
            _ => return,
        };
        let (width, height) = live_host.viewport_size();
        match live_state.try_borrow() {
            Ok(current) => {
                current.canvas.set_size(width, height);
                log::debug!("background field resized to {}x{}", width, height);
            }
            Err(_) => log::debug!("skipped resize while a frame is drawing"),
        };
    })
}

impl<H: Host, C: Canvas> MountedField<H, C> {
    pub fn set_active(&self, active: bool) {
        self.state.borrow_mut().active = active;
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().field.len()
    }

    pub fn particles(&self) -> Vec<Particle> {
        self.state.borrow().field.particles().to_vec()
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.state.borrow().canvas.size()
    }

    pub fn unmount(self) {}

    fn teardown(&mut self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();

        if let Some(id) = self.resize_listener.take() {
            self.host.remove_resize_listener(id);
        }
        let pending = match self.state.try_borrow_mut() {
            Ok(mut current) => current.pending_frame.take(),
            Err(_) => None,
        };
        if let Some(id) = pending {
            self.host.cancel_frame(id);
        }
        log::debug!("background field unmounted");
    }
}

impl<H: Host, C: Canvas> Drop for MountedField<H, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
