use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

// Formats the sheet is known to display. Anything else fails the row.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p"];

// Events always span one hour from their start.
const EVENT_DURATION_HOURS: i64 = 1;

pub fn compose_event_window(
    date: &str,
    time: &str,
    tz: Tz,
) -> Result<(DateTime<Utc>, DateTime<Utc>), String> {
    let day = parse_date(date)?;
    let clock = parse_time(time)?;
    let start = tz
        .from_local_datetime(&day.and_time(clock))
        .single()
        .ok_or_else(|| format!("Ambiguous or nonexistent local time {} {} in {}", date, time, tz))?
        .with_timezone(&Utc);
    let end = start + Duration::hours(EVENT_DURATION_HOURS);
    Ok((start, end))
}

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(date, format) {
            return Ok(parsed);
        }
    }
    Err(format!("Unrecognized date: {}", date))
}

fn parse_time(time: &str) -> Result<NaiveTime, String> {
    for format in TIME_FORMATS {
        if let Ok(parsed) = NaiveTime::parse_from_str(time, format) {
            return Ok(parsed);
        }
    }
    Err(format!("Unrecognized time: {}", time))
}
