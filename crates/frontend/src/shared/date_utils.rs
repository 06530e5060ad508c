//! Utilities for date and time display
//!
//! Slot arithmetic itself lives in `contracts::shared::time_slots`.

use contracts::shared::time_slots::Timestamp;

/// Current wall-clock time of the browser
pub fn now_local() -> Timestamp {
    chrono::Local::now().naive_local()
}
