use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for the animation loop.
///
/// Clones observe the same flag; once cancelled it stays cancelled. The
/// token also remembers the handle of the frame request currently queued
/// so that `cancel` can hand it back for `cancelAnimationFrame`.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the loop. Returns the queued frame request, if any.
    #[inline]
    pub fn cancel(&self) -> Option<i32> {
        self.cancelled.set(true);
        self.pending.take()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Record the handle of the next queued frame.
    #[inline]
    pub fn set_pending(&self, handle: i32) {
        self.pending.set(Some(handle));
    }

    /// Run one frame unless cancelled. A `render` that returns false cancels
    /// the token; the return value says whether to schedule another frame.
    pub fn run_frame(&self, render: impl FnOnce() -> bool) -> bool {
        self.pending.set(None);
        if self.is_cancelled() {
            return false;
        }
        if !render() {
            self.cancel();
            return false;
        }
        !self.is_cancelled()
    }
}
