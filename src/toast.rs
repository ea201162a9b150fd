//! Toast State
//!
//! One toast slot. Showing a message while the toast is already open only
//! replaces the text; the auto-hide timer is armed on the closed -> open
//! transition alone, and each arming gets a new generation so a timer from
//! an earlier opening cannot close a later one.
//!
//! A click outside the toast also closes it, but only once the opening
//! gesture's own click has finished propagating.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    open: bool,
    message: String,
    generation: u64,
    pending_timer: Option<u64>,
    click_away_armed: bool,
}

impl ToastState {
    pub fn show(&mut self, message: &str) {
        self.message = message.to_string();
        if !self.open {
            self.open = true;
            self.generation += 1;
            self.pending_timer = Some(self.generation);
            self.click_away_armed = false;
        }
    }

    /// Generation of a timer that still needs arming, if any
    pub fn take_pending_timer(&mut self) -> Option<u64> {
        self.pending_timer.take()
    }

    /// Auto-hide callback; ignored unless `generation` is the current opening
    pub fn expire(&mut self, generation: u64) {
        if self.open && generation == self.generation {
            self.open = false;
        }
    }

    /// Let outside clicks close the toast; ignored for a stale `generation`
    pub fn arm_click_away(&mut self, generation: u64) {
        if self.open && generation == self.generation {
            self.click_away_armed = true;
        }
    }

    /// A click landed outside the toast
    pub fn click_away(&mut self) {
        if self.open && self.click_away_armed {
            self.dismiss();
        }
    }

    pub fn dismiss(&mut self) {
        self.open = false;
        self.pending_timer = None;
        self.click_away_armed = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
