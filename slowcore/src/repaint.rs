//! Repaint controller for e-ink displays
//!
//! egui redraws everything each frame, and on e-ink every refresh is visible.
//! `RepaintController` only asks egui for another frame when something
//! actually changed; otherwise egui sleeps until the next input event.
//!
//! Apps call [`RepaintController::mark_needs_repaint`] when their state
//! changes outside of an input event.

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse move, key press, scroll).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
}

/// Controls when the egui context should request repaints.
///
/// Drop this into your app struct and call [`begin_frame`] at the top of
/// `update()` and [`end_frame`] at the bottom.
///
/// [`begin_frame`]: RepaintController::begin_frame
/// [`end_frame`]: RepaintController::end_frame
#[derive(Debug, Default)]
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: Option<RepaintReason>,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Returns why the current frame is being painted.
    pub fn reason(&self) -> RepaintReason {
        self.reason.unwrap_or(RepaintReason::Init)
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the **start** of your `update()` method.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });
        self.observe(had_input);
    }

    /// Call at the **end** of your `update()` method.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.finish() {
            ctx.request_repaint();
        }
    }

    fn observe(&mut self, had_input: bool) {
        self.reason = Some(if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            // egui woke us for its own reasons; treat as input.
            RepaintReason::Input
        });
        self.needs_repaint = false;
    }

    /// Advance the frame counter; true if the frame marked itself dirty.
    fn finish(&mut self) -> bool {
        self.frame += 1;
        std::mem::take(&mut self.needs_repaint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_init() {
        let mut rc = RepaintController::new();
        rc.observe(true);
        assert_eq!(rc.reason(), RepaintReason::Init);
        assert!(!rc.finish());
        assert_eq!(rc.frame(), 1);
    }

    #[test]
    fn test_state_change_requests_one_repaint() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        rc.finish();

        rc.observe(false);
        rc.mark_needs_repaint();
        assert!(rc.finish());

        rc.observe(false);
        assert!(!rc.finish());
    }

    #[test]
    fn test_pending_mark_becomes_state_change() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        rc.finish();
        rc.mark_needs_repaint();
        rc.observe(false);
        assert_eq!(rc.reason(), RepaintReason::StateChange);
        rc.observe(true);
        assert_eq!(rc.reason(), RepaintReason::Input);
    }
}
