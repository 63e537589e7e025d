/// Opaque id of a requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host capability that calls back on the next display refresh.
///
/// The callback itself is implicit: when the frame arrives the host calls
/// [`OrbLineRenderer::on_frame`](crate::OrbLineRenderer::on_frame), which requests the next
/// one. There is no cancellation.
pub trait FrameScheduler {
    fn request_next_frame(&mut self) -> FrameHandle;
}

/// Running flag and the outstanding frame request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopState {
    running: bool,
    pending: Option<FrameHandle>,
}

impl LoopState {
    pub fn is_running(self) -> bool {
        self.running
    }

    pub fn pending(self) -> Option<FrameHandle> {
        self.pending
    }

    /// Request the first frame. Returns `false` (and requests nothing) if already running.
    pub(crate) fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.pending = Some(scheduler.request_next_frame());
        true
    }

    pub(crate) fn reschedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.pending = Some(scheduler.request_next_frame());
    }
}

/// Scheduler driven by hand: headless loops, the CLI and tests.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    requested: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the outstanding request, if any; the caller then delivers that frame.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total requests ever made.
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_next_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/frame_loop.rs"]
mod tests;
