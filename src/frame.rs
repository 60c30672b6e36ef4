use crate::cancel::CancelToken;
use crate::experience::Experience;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Render one frame; returns false on an unrecoverable surface error.
fn render(experience: &RefCell<Experience>) -> bool {
    let exp = experience.borrow();
    match exp.render_frame() {
        Ok(()) => true,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            log::warn!("[frame] surface lost or outdated; reconfiguring");
            exp.renderer().reconfigure();
            true
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
            log::error!("[frame] out of memory; stopping animation");
            false
        }
        Err(e) => {
            log::warn!("[frame] skipped: {:?}", e);
            true
        }
    }
}

fn request_frame(callback: &FrameCallback, cancel: &CancelToken) {
    if let (Some(w), Some(cb)) = (web::window(), callback.borrow().as_ref()) {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => cancel.set_pending(handle),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// A running `requestAnimationFrame` loop.
///
/// The callback owns the experience; it is dropped when the loop ends so the
/// experience and its GPU resources are released.
pub struct AnimationLoop {
    cancel: CancelToken,
    callback: FrameCallback,
}

impl AnimationLoop {
    /// Drive `experience` every display refresh until `cancel` fires.
    pub fn start(experience: Rc<RefCell<Experience>>, cancel: CancelToken) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let cb_tick = callback.clone();
        let cancel_tick = cancel.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !cancel_tick.run_frame(|| render(&experience)) {
                log::info!("[frame] animation stopped");
                // Dropping a closure while it runs is unsound; defer it.
                let cb_drop = cb_tick.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    cb_drop.borrow_mut().take();
                });
                return;
            }
            request_frame(&cb_tick, &cancel_tick);
        }) as Box<dyn FnMut()>));
        request_frame(&callback, &cancel);
        Self { cancel, callback }
    }

    /// Cancel the queued frame and release the callback.
    pub fn stop(&self) {
        if let Some(handle) = self.cancel.cancel() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
        self.callback.borrow_mut().take();
    }
}
