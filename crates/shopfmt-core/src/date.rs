//! Date dispatch and relative-day classification.
//!
//! [`Formatter`] resolves symbolic format names against the registry and
//! renders instants through the `jiff` strftime engine. It owns the
//! injectable [`Clock`] that feeds the "today"/"tomorrow" classifiers, so a
//! formatter built with a fixed clock is fully deterministic.
//!
//! Calendar-day equality is defined operationally: two instants fall on the
//! same day iff they render identically under the `clockDate` template in
//! the requested timezone. Delegating the comparison to the date engine
//! sidesteps DST arithmetic entirely.

use std::str::FromStr;

use jiff::{civil, fmt::strtime, tz::TimeZone, Timestamp, ToSpan, Zoned};

use crate::clock::{Clock, SystemClock};
use crate::error::{FormatError, Result};
use crate::registry::{DayFormatName, FormatEntry, FormatName};

/// Date formatter with an injectable clock.
///
/// All date-dependent operations live here as methods; the stateless
/// formatters (money, phone, names, ...) are free functions in their own
/// modules.
///
/// # Examples
///
/// ```rust
/// use shopfmt_core::Formatter;
///
/// # fn example() -> shopfmt_core::Result<()> {
/// let formatter = Formatter::new();
/// let instant: jiff::Timestamp = "2014-03-08T12:00:00Z".parse().unwrap();
/// assert_eq!(
///     formatter.format_date(Some(instant), "mailChimpDate", "UTC")?,
///     "03/08/2014",
/// );
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct Formatter {
    clock: Box<dyn Clock>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Creates a formatter backed by the system clock.
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }

    /// Creates a formatter with an explicit clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Render an instant with a named format or a raw strftime template.
    ///
    /// A missing instant renders as the empty string; a missing timezone is
    /// a caller bug and fails with [`FormatError::MissingTimezone`]. Names
    /// that are not in the registry pass through to the date engine as
    /// literal templates.
    pub fn format_date(
        &self,
        instant: Option<Timestamp>,
        format: &str,
        tzid: &str,
    ) -> Result<String> {
        if tzid.is_empty() {
            return Err(FormatError::MissingTimezone);
        }
        let Some(instant) = instant else {
            return Ok(String::new());
        };
        let zoned = instant.to_zoned(lookup_tz(tzid)?);
        match FormatName::from_str(format) {
            Ok(name) => self.render_named(name, &zoned),
            // unregistered names are raw templates for the date engine
            Err(_) => render(&zoned, format),
        }
    }

    /// Render a `YYYY-M-D` day string with a named format.
    ///
    /// Month and day tolerate one or two digits. Anything that does not
    /// match the pattern, and any unrecognized format name, passes through
    /// unchanged; this formatter never fails on dirty input.
    pub fn format_day(&self, day: &str, format: &str) -> String {
        let Some(date) = parse_day(day) else {
            return day.to_string();
        };
        // Day-only entries shadow the main registry
        if let Ok(name) = DayFormatName::from_str(format) {
            return name.render(date);
        }
        match FormatName::from_str(format) {
            Ok(name) => self
                .render_day_named(name, date)
                .unwrap_or_else(|_| day.to_string()),
            Err(_) => day.to_string(),
        }
    }

    /// True iff both instants fall on the same calendar day in `tzid`.
    pub fn same_day(&self, a: Timestamp, b: Timestamp, tzid: &str) -> Result<bool> {
        let tz = lookup_tz(tzid)?;
        self.same_day_zoned(&a.to_zoned(tz.clone()), &b.to_zoned(tz))
    }

    /// True iff the instant falls on the current calendar day in `tzid`.
    pub fn is_today(&self, instant: Timestamp, tzid: &str) -> Result<bool> {
        self.is_today_zoned(&instant.to_zoned(lookup_tz(tzid)?))
    }

    /// True iff the instant falls on the next calendar day in `tzid`.
    pub fn is_tomorrow(&self, instant: Timestamp, tzid: &str) -> Result<bool> {
        self.is_tomorrow_zoned(&instant.to_zoned(lookup_tz(tzid)?))
    }

    /// Dispatch a registered format against a localized instant.
    pub(crate) fn render_named(&self, name: FormatName, zoned: &Zoned) -> Result<String> {
        match name.entry() {
            FormatEntry::Template(template) => render(zoned, template),
            FormatEntry::Custom(custom) => custom(self, zoned),
        }
    }

    fn render_day_named(&self, name: FormatName, date: civil::Date) -> Result<String> {
        match name.entry() {
            FormatEntry::Template(template) => {
                strtime::format(template, date).map_err(FormatError::from)
            }
            // Custom entries expect a localized instant; the date parts are
            // used as-is, so midnight UTC is the identity conversion
            FormatEntry::Custom(custom) => custom(self, &date.to_zoned(TimeZone::UTC)?),
        }
    }

    pub(crate) fn same_day_zoned(&self, a: &Zoned, b: &Zoned) -> Result<bool> {
        let a = self.render_named(FormatName::ClockDate, a)?;
        let b = self.render_named(FormatName::ClockDate, b)?;
        Ok(a == b)
    }

    pub(crate) fn is_today_zoned(&self, zoned: &Zoned) -> Result<bool> {
        let now = self.clock.now().to_zoned(zoned.time_zone().clone());
        self.same_day_zoned(zoned, &now)
    }

    pub(crate) fn is_tomorrow_zoned(&self, zoned: &Zoned) -> Result<bool> {
        let now = self.clock.now().to_zoned(zoned.time_zone().clone());
        // Calendar-day addition, so month rollover and DST gaps stay correct
        let tomorrow = now.checked_add(1.day())?;
        self.same_day_zoned(zoned, &tomorrow)
    }

    // ------------------------------------------------------------------
    // Custom registry entries
    // ------------------------------------------------------------------

    /// 5pm / 7:20pm / noon / midnight
    pub(crate) fn short_time(&self, zoned: &Zoned) -> Result<String> {
        let raw = render(zoned, "%-I:%M%P")?;
        Ok(raw
            .replace("12:00pm", "noon")
            .replace("12:00am", "midnight")
            .replace(":00", ""))
    }

    /// Saturday, Mar 22, 5pm
    pub(crate) fn short_day_time(&self, zoned: &Zoned) -> Result<String> {
        let raw = render(zoned, "%A, %b %d, %-I:%M%P")?;
        Ok(raw.replace("12:00pm", "noon").replace(":00", ""))
    }

    /// mo, tu, we
    pub(crate) fn two_letter_day_of_the_week(&self, zoned: &Zoned) -> Result<String> {
        let abbrev = render(zoned, "%a")?;
        Ok(abbrev.chars().take(2).collect::<String>().to_lowercase())
    }

    /// MO, TU, WE
    pub(crate) fn ical_weekday(&self, zoned: &Zoned) -> Result<String> {
        Ok(self.two_letter_day_of_the_week(zoned)?.to_uppercase())
    }

    /// March 22nd
    pub(crate) fn human_date(&self, zoned: &Zoned) -> Result<String> {
        Ok(format!("{} {}", render(zoned, "%B")?, ordinalize(zoned.day())))
    }

    /// today / tomorrow / Monday
    pub(crate) fn human_weekday(&self, zoned: &Zoned) -> Result<String> {
        if self.is_today_zoned(zoned)? {
            return Ok("today".to_string());
        }
        if self.is_tomorrow_zoned(zoned)? {
            return Ok("tomorrow".to_string());
        }
        render(zoned, "%A")
    }

    /// Monday, March 22nd
    pub(crate) fn human_day(&self, zoned: &Zoned) -> Result<String> {
        Ok(format!(
            "{}, {} {}",
            render(zoned, "%A")?,
            render(zoned, "%B")?,
            ordinalize(zoned.day()),
        ))
    }

    /// Monday, Mar 22nd
    pub(crate) fn human_short_day(&self, zoned: &Zoned) -> Result<String> {
        Ok(format!(
            "{}, {} {}",
            render(zoned, "%A")?,
            render(zoned, "%b")?,
            ordinalize(zoned.day()),
        ))
    }

    /// today 7/25 / tomorrow 7/25 / Monday 7/25
    pub(crate) fn human_shopping_day(&self, zoned: &Zoned) -> Result<String> {
        if self.is_today_zoned(zoned)? {
            return Ok(format!("today {}", self.render_named(FormatName::MonthDay, zoned)?));
        }
        if self.is_tomorrow_zoned(zoned)? {
            return Ok(format!(
                "tomorrow {}",
                self.render_named(FormatName::MonthDay, zoned)?
            ));
        }
        self.render_named(FormatName::ShoppingDay, zoned)
    }

    /// today 7/23 / tomorrow 7/24 / Mon 7/25
    pub(crate) fn human_short_shopping_day(&self, zoned: &Zoned) -> Result<String> {
        if self.is_today_zoned(zoned)? {
            return Ok(format!("today {}", self.render_named(FormatName::MonthDay, zoned)?));
        }
        if self.is_tomorrow_zoned(zoned)? {
            return Ok(format!(
                "tomorrow {}",
                self.render_named(FormatName::MonthDay, zoned)?
            ));
        }
        self.render_named(FormatName::ShortShoppingDay, zoned)
    }

    /// Permutations are [10am, noon, midnight] x [today, tomorrow, Wednesday 3/8].
    ///
    /// A midnight cutoff is attributed to the day that ends, not the day
    /// that starts: the instant used for today/tomorrow classification (and
    /// for the weekday suffix) is pulled back one calendar day, while the
    /// displayed time stays `midnight`.
    pub(crate) fn order_cutoff_date_time(&self, zoned: &Zoned) -> Result<String> {
        let time = self.short_time(zoned)?;
        let effective = if time == "midnight" {
            zoned.checked_sub(1.day())?
        } else {
            zoned.clone()
        };
        if self.is_today_zoned(&effective)? {
            return Ok(time);
        }
        if self.is_tomorrow_zoned(&effective)? {
            return Ok(format!("{time} tomorrow"));
        }
        Ok(format!(
            "{time} {} {}",
            self.human_weekday(&effective)?,
            self.render_named(FormatName::MonthDay, &effective)?,
        ))
    }
}

/// Render a localized instant through the strftime engine.
pub(crate) fn render(zoned: &Zoned, template: &str) -> Result<String> {
    strtime::format(template, zoned).map_err(FormatError::from)
}

/// Resolve a timezone identifier against the IANA database.
pub(crate) fn lookup_tz(tzid: &str) -> Result<TimeZone> {
    TimeZone::get(tzid).map_err(|source| FormatError::timezone(tzid, source))
}

/// 1st, 2nd, 3rd, 4th, ..., 11th, 12th, 13th, ..., 21st, 22nd
fn ordinalize(day: i8) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// Parse a `YYYY-M-D` day string (month and day may omit zero padding).
fn parse_day(day: &str) -> Option<civil::Date> {
    let mut parts = day.split('-');
    let (year, month, dom) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if year.len() != 4 || !(1..=2).contains(&month.len()) || !(1..=2).contains(&dom.len()) {
        return None;
    }
    if ![year, month, dom]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    civil::Date::new(year.parse().ok()?, month.parse().ok()?, dom.parse().ok()?).ok()
}
