//! Indonesian-locale date presentation in the Jakarta timezone.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Asia::Jakarta;

const MONTHS_LONG: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// `17 Agustus 2025`, in Jakarta local time.
pub fn format_date(time: DateTime<Utc>) -> String {
    let local = time.with_timezone(&Jakarta);
    format!(
        "{} {} {}",
        local.day(),
        MONTHS_LONG[local.month0() as usize],
        local.year()
    )
}

/// `17 Agu 2025`, in Jakarta local time.
pub fn format_date_short(time: DateTime<Utc>) -> String {
    let local = time.with_timezone(&Jakarta);
    format!(
        "{} {} {}",
        local.day(),
        MONTHS_SHORT[local.month0() as usize],
        local.year()
    )
}

/// Coarse relative age relative to `now`: "Baru saja" under a minute, then
/// minutes, hours, and days. Anything older than thirty days falls back to
/// the short absolute date.
pub fn time_ago(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - time).num_seconds().max(0);
    match seconds {
        0..60 => "Baru saja".to_string(),
        60..3_600 => format!("{} menit lalu", seconds / 60),
        3_600..86_400 => format!("{} jam lalu", seconds / 3_600),
        86_400..2_592_000 => format!("{} hari lalu", seconds / 86_400),
        _ => format_date_short(time),
    }
}

pub fn time_ago_from_now(time: DateTime<Utc>) -> String {
    time_ago(time, Utc::now())
}
