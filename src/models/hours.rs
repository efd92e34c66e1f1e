use chrono::{FixedOffset, Offset, Timelike, Utc};

pub const OPEN_INDICATOR: &str = "🟢 We're currently OPEN and taking orders!";
pub const CLOSED_INDICATOR: &str = "🔴 We're currently CLOSED. Orders placed now will be handled when we open.";

/// Daily opening window of the kitchen, in local hours `[open_hour, close_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub open_hour: u32,
    pub close_hour: u32,
    pub utc_offset: FixedOffset,
}

impl BusinessHours {
    pub fn new(open_hour: u32, close_hour: u32, utc_offset_hours: i32) -> Self {
        let utc_offset =
            FixedOffset::east_opt(utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix());

        Self {
            open_hour,
            close_hour,
            utc_offset,
        }
    }

    pub fn is_open_at(&self, hour: u32) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }

    pub fn current_hour(&self) -> u32 {
        Utc::now().with_timezone(&self.utc_offset).hour()
    }

    pub fn status_at(&self, hour: u32) -> &'static str {
        if self.is_open_at(hour) {
            OPEN_INDICATOR
        } else {
            CLOSED_INDICATOR
        }
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        // Nairobi, 8 AM to 10 PM
        Self::new(8, 22, 3)
    }
}
