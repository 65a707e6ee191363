//! Date and time register encoding for the PCF85063A RTC.
//!
//! The PCF85063A stores date and time in 7 consecutive registers starting at
//! [`RegAddr::Seconds`](crate::RegAddr::Seconds):
//! seconds, minutes, hours, days, weekdays, months, years.
//!
//! # Clamping
//!
//! Field values above their legal maximum are not rejected. They are replaced
//! with 0 (weekday with [`Weekday::Sunday`]) before encoding, so a write never
//! fails for range reasons.
//!
//! # chrono
//!
//! The driver's `datetime` and `set_datetime` bridge to chrono's
//! `NaiveDateTime` for the years 2000-2099. Conversion errors are reported
//! via [`DateTimeError`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::bcd::{bcd_to_dec, dec_to_bcd};
use crate::{log_debug, log_warn};
use crate::{Days, Hours, Minutes, Months, Seconds, Weekday, Weekdays, Years};

/// Calendar fields as the PCF85063A keeps them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Seconds (0-59)
    pub seconds: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Hours (0-23)
    pub hours: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Day of week
    pub weekday: Weekday,
    /// Month (1-12)
    pub month: u8,
    /// Two digit year (0-99)
    pub year: u8,
}

/// Replaces a field above `max` with 0.
pub(crate) fn clamp(value: u8, max: u8, field: &'static str) -> u8 {
    if value > max {
        log_warn!("PCF85063A: {} {} out of range, using 0", field, value);
        0
    } else {
        value
    }
}

/// Register image of the 7 date/time registers.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct PCF85063ADateTime {
    seconds: Seconds,
    minutes: Minutes,
    hours: Hours,
    days: Days,
    weekdays: Weekdays,
    months: Months,
    years: Years,
}

impl PCF85063ADateTime {
    pub(crate) fn from_fields(fields: &DateTime) -> Self {
        let mut seconds = Seconds::default();
        seconds.set_seconds(dec_to_bcd(clamp(fields.seconds, 59, "seconds")));
        let mut minutes = Minutes::default();
        minutes.set_minutes(dec_to_bcd(clamp(fields.minutes, 59, "minutes")));
        let mut hours = Hours::default();
        hours.set_hours(dec_to_bcd(clamp(fields.hours, 23, "hours")));
        let mut days = Days::default();
        days.set_days(dec_to_bcd(clamp(fields.day, 31, "day")));
        let mut weekdays = Weekdays::default();
        weekdays.set_weekday(fields.weekday);
        let mut months = Months::default();
        months.set_months(dec_to_bcd(clamp(fields.month, 12, "month")));
        let mut years = Years::default();
        years.set_years(dec_to_bcd(clamp(fields.year, 99, "year")));

        let raw = PCF85063ADateTime {
            seconds,
            minutes,
            hours,
            days,
            weekdays,
            months,
            years,
        };
        log_debug!("PCF85063A: raw={:?}", raw);
        raw
    }

    pub(crate) fn into_fields(self) -> DateTime {
        DateTime {
            seconds: bcd_to_dec(self.seconds.seconds()),
            minutes: bcd_to_dec(self.minutes.minutes()),
            hours: bcd_to_dec(self.hours.hours()),
            day: bcd_to_dec(self.days.days()),
            weekday: self.weekdays.weekday(),
            month: bcd_to_dec(self.months.months()),
            year: bcd_to_dec(self.years.years()),
        }
    }

    /// Oscillator stop flag carried in the seconds register.
    pub(crate) fn oscillator_stop(&self) -> bool {
        self.seconds.oscillator_stop()
    }

    pub(crate) fn from_datetime(datetime: &NaiveDateTime) -> Result<Self, DateTimeError> {
        let year = datetime.year();
        if !(2000..=2099).contains(&year) {
            log_warn!("PCF85063A: year {} is outside 2000-2099", year);
            return Err(DateTimeError::YearOutOfRange);
        }
        let narrow = |v: u32| u8::try_from(v).map_err(|_| DateTimeError::InvalidDateTime);
        let fields = DateTime {
            seconds: narrow(datetime.second())?,
            minutes: narrow(datetime.minute())?,
            hours: narrow(datetime.hour())?,
            day: narrow(datetime.day())?,
            weekday: Weekday::from(narrow(datetime.weekday().num_days_from_sunday())?),
            month: narrow(datetime.month())?,
            year: u8::try_from(year - 2000).map_err(|_| DateTimeError::InvalidDateTime)?,
        };
        Ok(Self::from_fields(&fields))
    }

    pub(crate) fn into_datetime(self) -> Result<NaiveDateTime, DateTimeError> {
        let fields = self.into_fields();
        log_debug!("PCF85063A: fields={:?}", fields);
        NaiveDate::from_ymd_opt(
            2000 + i32::from(fields.year),
            u32::from(fields.month),
            u32::from(fields.day),
        )
        .and_then(|d| {
            d.and_hms_opt(
                u32::from(fields.hours),
                u32::from(fields.minutes),
                u32::from(fields.seconds),
            )
        })
        .ok_or(DateTimeError::InvalidDateTime)
    }
}

impl From<[u8; 7]> for PCF85063ADateTime {
    fn from(data: [u8; 7]) -> Self {
        PCF85063ADateTime {
            seconds: Seconds(data[0]),
            minutes: Minutes(data[1]),
            hours: Hours(data[2]),
            days: Days(data[3]),
            weekdays: Weekdays(data[4]),
            months: Months(data[5]),
            years: Years(data[6]),
        }
    }
}

impl From<&PCF85063ADateTime> for [u8; 7] {
    fn from(dt: &PCF85063ADateTime) -> [u8; 7] {
        [
            dt.seconds.0,
            dt.minutes.0,
            dt.hours.0,
            dt.days.0,
            dt.weekdays.0,
            dt.months.0,
            dt.years.0,
        ]
    }
}

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors from converting between chrono values and the PCF85063A registers.
pub enum DateTimeError {
    /// The registers do not hold a representable date/time
    InvalidDateTime,
    /// The year is outside 2000-2099, the span of the two digit year register
    YearOutOfRange,
}
