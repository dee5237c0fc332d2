//! Operator STATUSTEXT notifications
//!
//! One-way sink for operator-facing diagnostics (arming refusals, tracker
//! link warnings). Messages are queued here and drained by whatever task owns
//! the ground-station link, which serialises them as STATUSTEXT.
//!
//! # Architecture
//!
//! - **Global Static**: queue accessible via the `send_*()` functions
//! - **Heapless Queue**: 16 messages, the oldest is dropped when full
//! - **Single Frame**: texts are truncated to one STATUSTEXT frame (50 bytes)

use core::cell::RefCell;
use critical_section::Mutex;
use heapless::{Deque, String, Vec};
use mavlink::common::MavSeverity;

/// STATUSTEXT payload size (one frame, no chunking)
pub const MAX_TEXT_LEN: usize = 50;

/// Queue capacity
pub const QUEUE_CAPACITY: usize = 16;

/// Queued operator message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    /// MAVLink severity
    pub severity: MavSeverity,
    /// Message text (at most `MAX_TEXT_LEN` bytes)
    pub text: String<MAX_TEXT_LEN>,
}

struct StatusNotifier {
    queue: Deque<StatusMessage, QUEUE_CAPACITY>,
    dropped_count: u32,
}

impl StatusNotifier {
    const fn new() -> Self {
        Self {
            queue: Deque::new(),
            dropped_count: 0,
        }
    }

    fn enqueue(&mut self, severity: MavSeverity, text: &str) {
        let message = StatusMessage {
            severity,
            text: truncate(text),
        };

        if self.queue.is_full() {
            self.queue.pop_front();
            self.dropped_count = self.dropped_count.saturating_add(1);
            crate::log_warn!(
                "STATUSTEXT queue full, dropped {} messages",
                self.dropped_count
            );
        }

        // Space was made above
        let _ = self.queue.push_back(message);
    }
}

/// Copy `text` into a frame-sized buffer, cutting on a char boundary
fn truncate(text: &str) -> String<MAX_TEXT_LEN> {
    let mut end = text.len().min(MAX_TEXT_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    let mut out = String::new();
    // Cannot overflow: end <= MAX_TEXT_LEN
    let _ = out.push_str(&text[..end]);
    out
}

static NOTIFIER: Mutex<RefCell<StatusNotifier>> = Mutex::new(RefCell::new(StatusNotifier::new()));

fn send_statustext(severity: MavSeverity, text: &str) {
    critical_section::with(|cs| {
        NOTIFIER.borrow(cs).borrow_mut().enqueue(severity, text);
    });
}

/// Send a CRITICAL severity message
///
/// Used for arming refusals the operator must act on.
pub fn send_critical(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_CRITICAL, text);
}

/// Send an ERROR severity message
pub fn send_error(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_ERROR, text);
}

/// Send a WARNING severity message
pub fn send_warning(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_WARNING, text);
}

/// Send an INFO severity message
pub fn send_info(text: &str) {
    send_statustext(MavSeverity::MAV_SEVERITY_INFO, text);
}

/// Drain all pending messages, oldest first
pub fn take_pending_messages() -> Vec<StatusMessage, QUEUE_CAPACITY> {
    critical_section::with(|cs| {
        let mut notifier = NOTIFIER.borrow(cs).borrow_mut();
        let mut out = Vec::new();
        while let Some(msg) = notifier.queue.pop_front() {
            // Same capacity as the queue
            let _ = out.push(msg);
        }
        out
    })
}

/// Number of messages dropped because the queue was full
pub fn dropped_count() -> u32 {
    critical_section::with(|cs| NOTIFIER.borrow(cs).borrow().dropped_count)
}

#[cfg(test)]
pub(crate) fn reset() {
    critical_section::with(|cs| {
        let mut notifier = NOTIFIER.borrow(cs).borrow_mut();
        notifier.queue.clear();
        notifier.dropped_count = 0;
    });
}
