//! `H:MM` rendering and parsing of minutes since midnight

use slotlist_core::MINUTES_PER_DAY;

/// Render a minute of the day as `H:MM`; midnight at the end of the day is `24:00`
pub fn format_minute(minute: u32) -> String {
    format!("{}:{:02}", minute / 60, minute % 60)
}

/// Parse `H:MM` into minutes since midnight
///
/// Accepts `0:00` through `24:00`.
pub fn parse_clock_time(text: &str) -> Option<u32> {
    let (hours, minutes) = text.trim().split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;

    if minutes >= 60 {
        return None;
    }

    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    (total <= MINUTES_PER_DAY).then_some(total)
}
