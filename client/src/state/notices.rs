//! The user-facing notice channel.
//!
//! DESIGN
//! ======
//! One notice is shown at a time and a newer one replaces it; this is a
//! dismiss-to-continue banner, not a toast queue.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use intake::Notice;

/// Latest notice raised by any component.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    current: Option<Notice>,
    raised: u64,
}

impl NoticeState {
    /// Show `notice`, replacing whatever was on screen.
    pub fn push(&mut self, notice: Notice) {
        self.current = Some(notice);
        self.raised += 1;
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Count of notices raised so far, dismissed or not.
    pub fn raised(&self) -> u64 {
        self.raised
    }
}
