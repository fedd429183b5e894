//! Time-range and date-range composition.
//!
//! Each range formatter ships as two named entry points: positional start
//! and end instants, and a [`TimeWindow`] record. Both spellings are part
//! of the public contract, so callers holding a pickup window struct never
//! have to destructure it by hand.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::date::{lookup_tz, Formatter};
use crate::error::{FormatError, Result};
use crate::registry::FormatName;

/// A half-open delivery or pickup window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_at: Timestamp,
    pub end_at: Timestamp,
}

/// Rendering mode for a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFormat {
    /// A registered format name applied to each endpoint
    Named(FormatName),
    /// Sentence form: "between 9am and 7:20pm today"
    Prose,
    /// Pickup chooser rows, joined with "...until "
    PickupChooser,
}

impl Default for RangeFormat {
    fn default() -> Self {
        Self::Named(FormatName::ShortTime)
    }
}

impl RangeFormat {
    /// The per-endpoint format; the sentence modes render endpoints as
    /// short times.
    fn endpoint(self) -> FormatName {
        match self {
            Self::Named(name) => name,
            Self::Prose | Self::PickupChooser => FormatName::ShortTime,
        }
    }
}

/// Options for the range formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeOptions {
    pub format: RangeFormat,
    pub separator: String,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            format: RangeFormat::default(),
            separator: " - ".to_string(),
        }
    }
}

impl RangeOptions {
    /// Options for the prose sentence form.
    pub fn prose() -> Self {
        Self {
            format: RangeFormat::Prose,
            ..Self::default()
        }
    }

    /// Options for pickup chooser rows.
    pub fn pickup_chooser() -> Self {
        Self {
            format: RangeFormat::PickupChooser,
            ..Self::default()
        }
    }

    /// Replace the separator between the rendered endpoints.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Apply a registered format name to each endpoint.
    pub fn named(mut self, name: FormatName) -> Self {
        self.format = RangeFormat::Named(name);
        self
    }
}

impl Formatter {
    /// Render a time range, collapsing to a single time when both
    /// endpoints render identically (a zero-length window shows one
    /// timestamp, not "5pm - 5pm").
    pub fn format_time_range(
        &self,
        start_at: Timestamp,
        end_at: Timestamp,
        tzid: &str,
        options: &RangeOptions,
    ) -> Result<String> {
        if tzid.is_empty() {
            return Err(FormatError::MissingTimezone);
        }
        let tz = lookup_tz(tzid)?;
        let name = options.format.endpoint();
        let start = self.render_named(name, &start_at.to_zoned(tz.clone()))?;
        let end = self.render_named(name, &end_at.to_zoned(tz))?;
        if start == end {
            return Ok(start);
        }
        Ok(format!("{start}{}{end}", options.separator))
    }

    /// [`Formatter::format_time_range`] over a window record.
    pub fn format_time_range_window(
        &self,
        window: &TimeWindow,
        tzid: &str,
        options: &RangeOptions,
    ) -> Result<String> {
        self.format_time_range(window.start_at, window.end_at, tzid, options)
    }

    /// Render a date range.
    ///
    /// - Prose: "between {t1} and {t2} {relativeDay}" when both ends share
    ///   a calendar day, otherwise "between {t1} {relDay1} and {t2}
    ///   {relDay2}".
    /// - Same calendar day, non-prose: "{shortDay}, {timeRange}".
    /// - Pickup chooser: endpoints joined with "...until " regardless of
    ///   the caller's separator.
    /// - Otherwise: "{shortDayTime(start)}{separator}{shortDayTime(end)}".
    pub fn format_date_range(
        &self,
        start_at: Timestamp,
        end_at: Timestamp,
        tzid: &str,
        options: &RangeOptions,
    ) -> Result<String> {
        if tzid.is_empty() {
            return Err(FormatError::MissingTimezone);
        }
        let tz = lookup_tz(tzid)?;
        let start = start_at.to_zoned(tz.clone());
        let end = end_at.to_zoned(tz);
        let same_day = self.same_day_zoned(&start, &end)?;

        if options.format == RangeFormat::Prose {
            if same_day {
                let times = self.format_time_range(
                    start_at,
                    end_at,
                    tzid,
                    &RangeOptions::default().separator(" and "),
                )?;
                return Ok(format!("between {times} {}", self.relative_day(&start)?));
            }
            return Ok(format!(
                "between {} {} and {} {}",
                self.render_named(FormatName::ShortTime, &start)?,
                self.relative_day(&start)?,
                self.render_named(FormatName::ShortTime, &end)?,
                self.relative_day(&end)?,
            ));
        }

        if same_day {
            let times = self.format_time_range(start_at, end_at, tzid, &RangeOptions::default())?;
            return Ok(format!(
                "{}, {times}",
                self.render_named(FormatName::ShortDay, &start)?
            ));
        }

        let separator = match options.format {
            RangeFormat::PickupChooser => "...until ",
            _ => options.separator.as_str(),
        };
        Ok(format!(
            "{}{separator}{}",
            self.render_named(FormatName::ShortDayTime, &start)?,
            self.render_named(FormatName::ShortDayTime, &end)?,
        ))
    }

    /// [`Formatter::format_date_range`] over a window record.
    pub fn format_date_range_window(
        &self,
        window: &TimeWindow,
        tzid: &str,
        options: &RangeOptions,
    ) -> Result<String> {
        self.format_date_range(window.start_at, window.end_at, tzid, options)
    }

    /// 09:00-19:20
    pub fn format_delivery_window(&self, window: &TimeWindow, tzid: &str) -> Result<String> {
        if tzid.is_empty() {
            return Err(FormatError::MissingTimezone);
        }
        let tz = lookup_tz(tzid)?;
        Ok(format!(
            "{}-{}",
            self.render_named(FormatName::ClockTime, &window.start_at.to_zoned(tz.clone()))?,
            self.render_named(FormatName::ClockTime, &window.end_at.to_zoned(tz))?,
        ))
    }

    /// today / tomorrow / "on Saturday, Mar 22"
    fn relative_day(&self, zoned: &jiff::Zoned) -> Result<String> {
        if self.is_today_zoned(zoned)? {
            return Ok("today".to_string());
        }
        if self.is_tomorrow_zoned(zoned)? {
            return Ok("tomorrow".to_string());
        }
        Ok(format!("on {}", self.render_named(FormatName::ShortDay, zoned)?))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;

    use super::*;
    use crate::clock::FixedClock;

    const PACIFIC: &str = "America/Los_Angeles";

    fn pacific(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> Timestamp {
        civil::date(year, month, day)
            .at(hour, minute, 0, 0)
            .in_tz(PACIFIC)
            .unwrap()
            .timestamp()
    }

    fn frozen_at(now: Timestamp) -> Formatter {
        Formatter::with_clock(Box::new(FixedClock(now)))
    }

    #[test]
    fn date_range_on_the_same_day() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter
                .format_date_range(
                    pacific(2012, 3, 11, 9, 0),
                    pacific(2012, 3, 11, 19, 20),
                    PACIFIC,
                    &RangeOptions::default(),
                )
                .unwrap(),
            "Sunday, Mar 11, 9am - 7:20pm"
        );
    }

    #[test]
    fn date_range_across_days() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter
                .format_date_range(
                    pacific(2012, 3, 11, 9, 0),
                    pacific(2012, 3, 13, 9, 0),
                    PACIFIC,
                    &RangeOptions::default(),
                )
                .unwrap(),
            "Sunday, Mar 11, 9am - Tuesday, Mar 13, 9am"
        );
    }

    #[test]
    fn date_range_honors_a_custom_separator_across_days() {
        let formatter = Formatter::new();
        let window = TimeWindow {
            start_at: pacific(2012, 3, 11, 9, 0),
            end_at: pacific(2012, 3, 13, 9, 0),
        };
        assert_eq!(
            formatter
                .format_date_range_window(
                    &window,
                    PACIFIC,
                    &RangeOptions::default().separator(" to "),
                )
                .unwrap(),
            "Sunday, Mar 11, 9am to Tuesday, Mar 13, 9am"
        );
    }

    #[test]
    fn pickup_chooser_forces_its_separator() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter
                .format_date_range(
                    pacific(2012, 3, 11, 9, 0),
                    pacific(2012, 3, 13, 9, 0),
                    PACIFIC,
                    &RangeOptions::pickup_chooser().separator(" to "),
                )
                .unwrap(),
            "Sunday, Mar 11, 9am...until Tuesday, Mar 13, 9am"
        );
    }

    #[test]
    fn prose_range_on_the_same_day() {
        let formatter = frozen_at(pacific(2012, 3, 11, 8, 0));
        assert_eq!(
            formatter
                .format_date_range(
                    pacific(2012, 3, 11, 9, 0),
                    pacific(2012, 3, 11, 19, 20),
                    PACIFIC,
                    &RangeOptions::prose(),
                )
                .unwrap(),
            "between 9am and 7:20pm today"
        );
    }

    #[test]
    fn prose_range_across_days() {
        let formatter = frozen_at(pacific(2012, 3, 11, 8, 0));
        assert_eq!(
            formatter
                .format_date_range(
                    pacific(2012, 3, 11, 9, 0),
                    pacific(2012, 3, 13, 9, 0),
                    PACIFIC,
                    &RangeOptions::prose(),
                )
                .unwrap(),
            "between 9am today and 9am on Tuesday, Mar 13"
        );
    }

    #[test]
    fn time_range_renders_both_endpoints() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter
                .format_time_range(
                    pacific(2012, 3, 11, 9, 0),
                    pacific(2012, 3, 11, 19, 20),
                    PACIFIC,
                    &RangeOptions::default(),
                )
                .unwrap(),
            "9am - 7:20pm"
        );
    }

    #[test]
    fn zero_length_time_range_collapses() {
        let formatter = Formatter::new();
        let at = pacific(2012, 3, 11, 17, 0);
        assert_eq!(
            formatter
                .format_time_range(at, at, PACIFIC, &RangeOptions::default())
                .unwrap(),
            "5pm"
        );
    }

    #[test]
    fn time_range_with_a_named_endpoint_format() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter
                .format_time_range(
                    pacific(2012, 3, 11, 9, 0),
                    pacific(2012, 3, 11, 19, 20),
                    PACIFIC,
                    &RangeOptions::default().named(FormatName::ClockTime),
                )
                .unwrap(),
            "09:00 - 19:20"
        );
    }

    #[test]
    fn range_formatters_require_a_timezone() {
        let formatter = Formatter::new();
        let window = TimeWindow {
            start_at: pacific(2012, 3, 11, 9, 0),
            end_at: pacific(2012, 3, 11, 19, 20),
        };
        assert!(matches!(
            formatter.format_time_range_window(&window, "", &RangeOptions::default()),
            Err(FormatError::MissingTimezone)
        ));
        assert!(matches!(
            formatter.format_date_range_window(&window, "", &RangeOptions::default()),
            Err(FormatError::MissingTimezone)
        ));
        assert!(matches!(
            formatter.format_delivery_window(&window, ""),
            Err(FormatError::MissingTimezone)
        ));
    }

    #[test]
    fn delivery_window_renders_clock_times() {
        let formatter = Formatter::new();
        let window = TimeWindow {
            start_at: pacific(2012, 3, 11, 9, 0),
            end_at: pacific(2012, 3, 11, 19, 20),
        };
        assert_eq!(
            formatter.format_delivery_window(&window, PACIFIC).unwrap(),
            "09:00-19:20"
        );
    }
}
