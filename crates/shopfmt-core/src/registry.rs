//! The named date-format registry.
//!
//! [`FormatName`] is the closed set of symbolic format identifiers and
//! [`FormatEntry`] is what each one resolves to: either a strftime template
//! handed to the date engine, or a custom function for the formats that need
//! string surgery or relative-day branching. The registry itself is the
//! [`FormatName::entry`] match: built at compile time, immutable, O(1).
//!
//! Names that are not in the registry are not an error. The dispatcher
//! treats them as raw templates, which lets callers pass one-off strftime
//! patterns through the same entry point.

use std::str::FromStr;

use jiff::{civil, Zoned};

use crate::date::Formatter;
use crate::error::Result;

/// A registered format: template or custom function.
///
/// Custom entries receive the instant already localized into the requested
/// timezone, plus the dispatching [`Formatter`] so that relative-day entries
/// can reach the clock.
pub enum FormatEntry {
    /// A strftime-style template for the date engine
    Template(&'static str),
    /// A formatting function with access to the clock
    Custom(CustomFormat),
}

/// Signature of a custom format entry.
pub type CustomFormat = fn(&Formatter, &Zoned) -> Result<String>;

/// Type-safe enumeration of the registered date formats.
///
/// The string spellings accepted by [`FromStr`] are the symbolic names
/// callers pass to `format_date` (for example `"shortTime"` or
/// `"orderCutoffDateTime"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatName {
    MonthDay,
    LongMonthDay,
    ShortMonthDay,
    ShortDate,
    MailChimpDate,
    ShortDay,
    ShorterDay,
    LongDay,
    Day,
    ShoppingDay,
    ShortShoppingDay,
    LimitDay,
    ShortTime,
    ShortDayTime,
    ClockDateTime,
    ClockDate,
    ClockTime,
    Hour,
    ICalDay,
    ICalTime,
    ICalDate,
    RaygunDate,
    LongDayOfTheWeek,
    ShortDayOfTheWeek,
    TwoLetterDayOfTheWeek,
    ICalWeekday,
    HumanDate,
    HumanWeekday,
    HumanDay,
    HumanShortDay,
    HumanShoppingDay,
    HumanShortShoppingDay,
    HumanTime,
    Year,
    OrderCutoffDateTime,
}

impl FromStr for FormatName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "monthDay" => Ok(Self::MonthDay),
            "longMonthDay" => Ok(Self::LongMonthDay),
            "shortMonthDay" => Ok(Self::ShortMonthDay),
            "shortDate" => Ok(Self::ShortDate),
            "mailChimpDate" => Ok(Self::MailChimpDate),
            "shortDay" => Ok(Self::ShortDay),
            "shorterDay" => Ok(Self::ShorterDay),
            "longDay" => Ok(Self::LongDay),
            "day" => Ok(Self::Day),
            "shoppingDay" => Ok(Self::ShoppingDay),
            "shortShoppingDay" => Ok(Self::ShortShoppingDay),
            "limitDay" => Ok(Self::LimitDay),
            "shortTime" => Ok(Self::ShortTime),
            "shortDayTime" => Ok(Self::ShortDayTime),
            "clockDateTime" => Ok(Self::ClockDateTime),
            "clockDate" => Ok(Self::ClockDate),
            "clockTime" => Ok(Self::ClockTime),
            "hour" => Ok(Self::Hour),
            "iCalDay" => Ok(Self::ICalDay),
            "iCalTime" => Ok(Self::ICalTime),
            "iCalDate" => Ok(Self::ICalDate),
            "raygunDate" => Ok(Self::RaygunDate),
            "longDayOfTheWeek" => Ok(Self::LongDayOfTheWeek),
            "shortDayOfTheWeek" => Ok(Self::ShortDayOfTheWeek),
            "twoLetterDayOfTheWeek" => Ok(Self::TwoLetterDayOfTheWeek),
            "iCalWeekday" => Ok(Self::ICalWeekday),
            "humanDate" => Ok(Self::HumanDate),
            "humanWeekday" => Ok(Self::HumanWeekday),
            "humanDay" => Ok(Self::HumanDay),
            "humanShortDay" => Ok(Self::HumanShortDay),
            "humanShoppingDay" => Ok(Self::HumanShoppingDay),
            "humanShortShoppingDay" => Ok(Self::HumanShortShoppingDay),
            "humanTime" => Ok(Self::HumanTime),
            "year" => Ok(Self::Year),
            "orderCutoffDateTime" => Ok(Self::OrderCutoffDateTime),
            _ => Err(format!("unregistered format name: {s}")),
        }
    }
}

impl FormatName {
    /// Convert to the symbolic string spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MonthDay => "monthDay",
            Self::LongMonthDay => "longMonthDay",
            Self::ShortMonthDay => "shortMonthDay",
            Self::ShortDate => "shortDate",
            Self::MailChimpDate => "mailChimpDate",
            Self::ShortDay => "shortDay",
            Self::ShorterDay => "shorterDay",
            Self::LongDay => "longDay",
            Self::Day => "day",
            Self::ShoppingDay => "shoppingDay",
            Self::ShortShoppingDay => "shortShoppingDay",
            Self::LimitDay => "limitDay",
            Self::ShortTime => "shortTime",
            Self::ShortDayTime => "shortDayTime",
            Self::ClockDateTime => "clockDateTime",
            Self::ClockDate => "clockDate",
            Self::ClockTime => "clockTime",
            Self::Hour => "hour",
            Self::ICalDay => "iCalDay",
            Self::ICalTime => "iCalTime",
            Self::ICalDate => "iCalDate",
            Self::RaygunDate => "raygunDate",
            Self::LongDayOfTheWeek => "longDayOfTheWeek",
            Self::ShortDayOfTheWeek => "shortDayOfTheWeek",
            Self::TwoLetterDayOfTheWeek => "twoLetterDayOfTheWeek",
            Self::ICalWeekday => "iCalWeekday",
            Self::HumanDate => "humanDate",
            Self::HumanWeekday => "humanWeekday",
            Self::HumanDay => "humanDay",
            Self::HumanShortDay => "humanShortDay",
            Self::HumanShoppingDay => "humanShoppingDay",
            Self::HumanShortShoppingDay => "humanShortShoppingDay",
            Self::HumanTime => "humanTime",
            Self::Year => "year",
            Self::OrderCutoffDateTime => "orderCutoffDateTime",
        }
    }

    /// Resolve a format name to its registry entry.
    pub fn entry(self) -> FormatEntry {
        use FormatEntry::{Custom, Template};
        match self {
            Self::MonthDay => Template("%-m/%-d"), // 3/22
            Self::LongMonthDay => Template("%B %-d"), // March 22
            Self::ShortMonthDay => Template("%b %-d"), // Mar 22
            Self::ShortDate => Template("%-m/%d/%Y"), // 3/22/2008
            Self::MailChimpDate => Template("%m/%d/%Y"), // 03/22/2008
            Self::ShortDay => Template("%A, %b %d"), // Saturday, Mar 22
            Self::ShorterDay => Template("%a %b %-d"), // Sat Mar 22
            Self::LongDay => Template("%A, %B %-d, %Y"), // Saturday, March 22, 2008
            Self::Day => Template("%B %-d, %Y"),    // March 22, 2008
            Self::ShoppingDay => Template("%A %-m/%-d"), // Monday 10/14
            Self::ShortShoppingDay => Template("%a %-m/%-d"), // Mon 10/14
            Self::LimitDay => Template("%m-%d-%Y (%a)"), // 06-01-2014 (Sun)
            Self::ShortTime => Custom(Formatter::short_time), // 5pm
            Self::ShortDayTime => Custom(Formatter::short_day_time), // Saturday, Mar 22, 5pm
            Self::ClockDateTime => Template("%Y-%m-%d %H:%M"), // 2008-03-22 17:00
            Self::ClockDate => Template("%Y/%m/%d"), // 2008/03/22
            Self::ClockTime => Template("%H:%M"),   // 17:00
            Self::Hour => Template("%-I"),          // 5
            Self::ICalDay => Template("%Y%m%d"),    // 20080327
            Self::ICalTime => Template("%H%M%S"),   // 133000
            Self::ICalDate => Template("%Y%m%dT%H%M%S"), // 20080327T133000
            Self::RaygunDate => Template("%Y-%m-%dT%H:%M:%S+00:00"), // 2013-10-11T01:09:01+00:00
            Self::LongDayOfTheWeek => Template("%A"), // Tuesday
            Self::ShortDayOfTheWeek => Template("%a"), // Tue
            Self::TwoLetterDayOfTheWeek => Custom(Formatter::two_letter_day_of_the_week), // tu
            Self::ICalWeekday => Custom(Formatter::ical_weekday), // TU
            Self::HumanDate => Custom(Formatter::human_date), // March 22nd
            Self::HumanWeekday => Custom(Formatter::human_weekday), // today / tomorrow / Monday
            Self::HumanDay => Custom(Formatter::human_day), // Monday, March 22nd
            Self::HumanShortDay => Custom(Formatter::human_short_day), // Monday, Mar 22nd
            Self::HumanShoppingDay => Custom(Formatter::human_shopping_day), // today 7/25
            Self::HumanShortShoppingDay => Custom(Formatter::human_short_shopping_day), // Mon 7/25
            Self::HumanTime => Template("%-I:%M %P"), // 5:00 pm
            Self::Year => Template("%Y"),           // 2014
            Self::OrderCutoffDateTime => Custom(Formatter::order_cutoff_date_time), // 5pm tomorrow
        }
    }
}

const WEEKDAYS_ABBREV: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Day-only formats, dispatched over a calendar date with no time-of-day.
///
/// These shadow the main registry when formatting a `YYYY-M-D` day string:
/// the weekday is taken straight from the constructed date (Sunday-first,
/// zero-based) rather than going through a timezone conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFormatName {
    ShortDayOfTheWeek,
    LongDayOfTheWeek,
    ShortShoppingDay,
}

impl FromStr for DayFormatName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "shortDayOfTheWeek" => Ok(Self::ShortDayOfTheWeek),
            "longDayOfTheWeek" => Ok(Self::LongDayOfTheWeek),
            "shortShoppingDay" => Ok(Self::ShortShoppingDay),
            _ => Err(format!("unregistered day format name: {s}")),
        }
    }
}

impl DayFormatName {
    /// Render a calendar date with this day-only format.
    pub fn render(self, date: civil::Date) -> String {
        let weekday = date.weekday().to_sunday_zero_offset() as usize;
        match self {
            Self::ShortDayOfTheWeek => WEEKDAYS_ABBREV[weekday].to_string(),
            Self::LongDayOfTheWeek => WEEKDAYS_FULL[weekday].to_string(),
            // Mon 12/25
            Self::ShortShoppingDay => {
                format!("{} {}/{}", WEEKDAYS_ABBREV[weekday], date.month(), date.day())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip_their_spelling() {
        for name in [
            FormatName::MonthDay,
            FormatName::MailChimpDate,
            FormatName::ICalWeekday,
            FormatName::HumanShortShoppingDay,
            FormatName::OrderCutoffDateTime,
        ] {
            assert_eq!(name.as_str().parse::<FormatName>(), Ok(name));
        }
    }

    #[test]
    fn unregistered_names_are_rejected() {
        assert!("notAFormat".parse::<FormatName>().is_err());
        assert!("".parse::<FormatName>().is_err());
        // Spellings are case-sensitive
        assert!("MonthDay".parse::<FormatName>().is_err());
    }

    #[test]
    fn day_formats_render_from_the_date_alone() {
        let sat = civil::date(2014, 11, 29);
        assert_eq!(DayFormatName::ShortDayOfTheWeek.render(sat), "Sat");
        assert_eq!(DayFormatName::LongDayOfTheWeek.render(sat), "Saturday");
        assert_eq!(DayFormatName::ShortShoppingDay.render(sat), "Sat 11/29");

        let wed = civil::date(2014, 1, 1);
        assert_eq!(DayFormatName::ShortShoppingDay.render(wed), "Wed 1/1");
    }
}
