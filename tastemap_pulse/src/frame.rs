// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Host hook for per-frame callbacks, such as `requestAnimationFrame`.
pub trait FrameScheduler {
    /// Token identifying one requested frame.
    type Handle: PartialEq;

    /// Requests a callback on the next frame.
    fn request_frame(&mut self) -> Self::Handle;

    /// Cancels a previously requested frame.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// A self-rescheduling animation loop with at most one pending frame.
///
/// The host calls [`FrameTask::on_frame`] with the handle of every frame it
/// delivers. A frame that is no longer the pending one (it was cancelled, or a
/// newer one replaced it) is reported as stale and must not be drawn.
#[derive(Debug)]
pub struct FrameTask<H> {
    pending: Option<H>,
}

impl<H> Default for FrameTask<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FrameTask<H> {
    /// Creates an idle task.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }
}

impl<H: PartialEq> FrameTask<H> {
    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Requests the first frame. Does nothing if already running.
    ///
    /// Returns `true` if a frame was requested.
    pub fn start<S>(&mut self, scheduler: &mut S) -> bool
    where
        S: FrameScheduler<Handle = H>,
    {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Cancels the pending frame. Does nothing if idle.
    ///
    /// Returns `true` if a frame was cancelled.
    pub fn stop<S>(&mut self, scheduler: &mut S) -> bool
    where
        S: FrameScheduler<Handle = H>,
    {
        match self.pending.take() {
            Some(handle) => {
                scheduler.cancel_frame(handle);
                true
            }
            None => false,
        }
    }

    /// Accepts the delivered frame `fired`.
    ///
    /// Returns `false` for a stale frame. Otherwise the pending frame is
    /// consumed, the next one is requested when `keep_running` is set, and
    /// `true` tells the caller to draw.
    pub fn on_frame<S>(&mut self, scheduler: &mut S, fired: &H, keep_running: bool) -> bool
    where
        S: FrameScheduler<Handle = H>,
    {
        if self.pending.as_ref() != Some(fired) {
            return false;
        }
        self.pending = None;
        if keep_running {
            self.pending = Some(scheduler.request_frame());
        }
        true
    }
}
