use regex::Regex;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

// Publish time <-> display string util functions.

pub const JUST_NOW: &str = "अहिले";
pub const TIME_UNAVAILABLE: &str = "समय उपलब्ध छैन";

const HOURS_AGO: &str = "घण्टा अगाडि";
const DAYS_AGO: &str = "दिन अगाडि";

const MS_PER_HOUR: i64 = 1000 * 60 * 60;

const WORDS_PER_MINUTE: usize = 200;

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

lazy_static! {
  static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").expect("html tag pattern");
}

/// Combine the backend's separate date and time strings into a local datetime.
pub fn parse_publish_datetime(date: &str, time: &str) -> Option<chrono::NaiveDateTime> {
  let date = match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
    Ok(date) => date,
    Err(err) => {
      log::debug!("Failed to parse publish date {:?}: {:?}", date, err);
      return None;
    },
  };
  let raw = time.trim();
  let time = TIME_FORMATS.iter()
    .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok());
  match time {
    Some(time) => Some(NaiveDateTime::new(date, time)),
    None => {
      log::debug!("Failed to parse publish time {:?}", raw);
      None
    },
  }
}

/// Whole hours elapsed between `publish` and `now`, rounded towards negative infinity.
pub fn hours_since(publish: NaiveDateTime, now: NaiveDateTime) -> i64 {
  (now - publish).num_milliseconds().div_euclid(MS_PER_HOUR)
}

/// Relative publish time in Nepali, e.g. "3 घण्टा अगाडि".
///
/// Future timestamps and anything under an hour old read as "अहिले",
/// a day or more switches to whole days.
pub fn format_time_ago(date: &str, time: &str, now: NaiveDateTime) -> String {
  let publish = match parse_publish_datetime(date, time) {
    Some(publish) => publish,
    None => return TIME_UNAVAILABLE.to_string(),
  };
  let hours = hours_since(publish, now);
  if hours < 1 {
    JUST_NOW.to_string()
  } else if hours < 24 {
    format!("{} {}", hours, HOURS_AGO)
  } else {
    format!("{} {}", hours / 24, DAYS_AGO)
  }
}

/// The local wall clock, which publish times are stored against.
pub fn local_now() -> NaiveDateTime {
  chrono::Local::now().naive_local()
}

/// Number of words in an HTML fragment once the markup is removed.
pub fn word_count(html: &str) -> usize {
  HTML_TAG.replace_all(html, "").split_whitespace().count()
}

/// Estimated reading time in minutes. Non-empty content takes at least a minute.
pub fn read_time(html: &str) -> u32 {
  if html.trim().is_empty() {
    return 0;
  }
  let words = word_count(html);
  let minutes = (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE;
  minutes.max(1) as u32
}

/// Resolve a media path the backend returned relative to its own host.
pub fn absolute_media_url(base: &str, path: &str) -> String {
  if path.starts_with("http://") || path.starts_with("https://") {
    return path.to_string();
  }
  match (base.ends_with('/'), path.starts_with('/')) {
    (true, true) => format!("{}{}", base, &path[1..]),
    (false, false) => format!("{}/{}", base, path),
    _ => format!("{}{}", base, path),
  }
}
