//! Display and wire formatting for dates, times and prices.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Start/end choices for a barber's working hours: 08:00 to 22:00 every half hour
pub fn working_hour_options() -> Vec<String> {
    let mut options = Vec::new();
    for hour in 8..=22 {
        options.push(format!("{:02}:00", hour));
        if hour < 22 {
            options.push(format!("{:02}:30", hour));
        }
    }
    options
}

/// `HH:MM` → `HH:MM:SS` as the backend expects
pub fn to_wire_time(time: &str) -> String {
    format!("{}:00", time)
}

/// `HH:MM:SS` → `HH:MM`; shorter input is returned as-is
pub fn truncate_to_minutes(time: &str) -> String {
    time.split(':').take(2).collect::<Vec<_>>().join(":")
}

pub fn parse_time_of_day(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
}

/// Combine an availability date and time into the order's local date-time,
/// `YYYY-MM-DDTHH:MM:SS`
pub fn compose_order_date(date: &str, time: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = parse_time_of_day(time)?;
    Some(NaiveDateTime::new(date, time).format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("January")
}

/// Order timestamp for cards, e.g. `12 March 2025, 14:30`
pub fn format_order_date(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return "Not specified".to_string();
    };
    let parsed = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"));
    match parsed {
        Ok(dt) => {
            use chrono::{Datelike, Timelike};
            format!(
                "{} {} {}, {:02}:{:02}",
                dt.day(),
                month_name(dt.month()),
                dt.year(),
                dt.hour(),
                dt.minute()
            )
        }
        Err(_) => value.to_string(),
    }
}

/// Date button label in the time picker, e.g. `12 Mar`
pub fn format_availability_date(date: &str) -> String {
    use chrono::Datelike;
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{} {}", d.day(), &month_name(d.month())[..3]),
        Err(_) => date.to_string(),
    }
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

pub fn format_duration(minutes: u32) -> String {
    format!("{} min", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_hour_options_cover_day_in_half_hours() {
        let options = working_hour_options();
        assert_eq!(options.first().map(String::as_str), Some("08:00"));
        assert_eq!(options.last().map(String::as_str), Some("22:00"));
        assert_eq!(options.len(), 29);
        assert!(options.contains(&"13:30".to_string()));
        assert!(!options.contains(&"22:30".to_string()));
    }

    #[test]
    fn test_wire_time_round_trip_helpers() {
        assert_eq!(to_wire_time("08:30"), "08:30:00");
        assert_eq!(truncate_to_minutes("18:00:00"), "18:00");
        assert_eq!(truncate_to_minutes("9"), "9");
    }

    #[test]
    fn test_compose_order_date() {
        assert_eq!(compose_order_date("2025-03-12", "14:30").as_deref(), Some("2025-03-12T14:30:00"));
        assert_eq!(compose_order_date("2025-03-12", "09:00:00").as_deref(), Some("2025-03-12T09:00:00"));
        assert_eq!(compose_order_date("2025-02-30", "14:30"), None);
        assert_eq!(compose_order_date("2025-03-12", "25:00"), None);
        assert_eq!(compose_order_date("", ""), None);
    }

    #[test]
    fn test_format_order_date() {
        assert_eq!(format_order_date(Some("2025-03-12T14:30:00")), "12 March 2025, 14:30");
        assert_eq!(format_order_date(Some("2025-12-01T09:05")), "1 December 2025, 09:05");
        assert_eq!(format_order_date(None), "Not specified");
        assert_eq!(format_order_date(Some("tomorrow")), "tomorrow");
    }

    #[test]
    fn test_format_availability_date() {
        assert_eq!(format_availability_date("2025-03-12"), "12 Mar");
        assert_eq!(format_availability_date("soon"), "soon");
    }
}
