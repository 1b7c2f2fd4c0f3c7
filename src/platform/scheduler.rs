//! Next-frame scheduling

/// Something that will invoke the frame step again before the next refresh
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Headless scheduler: records requests, the caller drives the loop
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCounter {
    pub requested: u64,
}

impl FrameScheduler for FrameCounter {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}
