//! Alarm register encoding for the PCF85063A RTC.
//!
//! The PCF85063A has a single alarm spread over five registers (seconds,
//! minutes, hours, day of month, weekday). Bit 7 of each register disables
//! matching on that field: the alarm fires when every field whose bit 7 is
//! clear matches the current time.
//!
//! Writing the alarm values and choosing which fields take part are separate
//! steps. [`Alarm`] carries the values and is written with every field except
//! the day disabled. [`AlarmEnable`] then selects the participating fields.
//!
//! # Enabling fields
//!
//! How the enable step treats the stored values depends on
//! [`AlarmEnableMode`]:
//! - [`AlarmEnableMode::Overwrite`] writes each register as only its enable
//!   bit, discarding the stored BCD value. Existing users of the chip's
//!   reference library rely on this exact byte pattern.
//! - [`AlarmEnableMode::PreserveValues`] reads the registers first and
//!   rewrites bit 7 alone.

use core::ops::BitOr;

use bitfield::bitfield;

use crate::bcd::{bcd_to_dec, dec_to_bcd};
use crate::datetime::clamp;
use crate::log_debug;
use crate::{AlarmDays, AlarmHours, AlarmMinutes, AlarmSeconds, AlarmWeekdays, Weekday};

/// Alarm match values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
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
}

bitfield! {
    /// Selects which alarm fields take part in matching.
    ///
    /// One bit per field, seconds in bit 0 through weekday in bit 4. A set
    /// bit enables matching on that field. This is a mask, not a weekday:
    /// see [`Weekday`] for the day ordinal.
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct AlarmEnable(u8);
    impl Debug;
    /// Match on seconds
    pub seconds, set_seconds: 0;
    /// Match on minutes
    pub minutes, set_minutes: 1;
    /// Match on hours
    pub hours, set_hours: 2;
    /// Match on day of month
    pub day, set_day: 3;
    /// Match on weekday
    pub weekday, set_weekday: 4;
}

impl AlarmEnable {
    /// No field matches
    pub const NONE: Self = AlarmEnable(0);
    pub const SECONDS: Self = AlarmEnable(0b0_0001);
    pub const MINUTES: Self = AlarmEnable(0b0_0010);
    pub const HOURS: Self = AlarmEnable(0b0_0100);
    pub const DAY: Self = AlarmEnable(0b0_1000);
    pub const WEEKDAY: Self = AlarmEnable(0b1_0000);
    /// Every field matches
    pub const ALL: Self = AlarmEnable(0b1_1111);
}

impl From<u8> for AlarmEnable {
    /// Keeps the low 5 bits, one per alarm field.
    fn from(v: u8) -> Self {
        AlarmEnable(v & 0b1_1111)
    }
}
impl From<AlarmEnable> for u8 {
    fn from(v: AlarmEnable) -> Self {
        v.0
    }
}

impl BitOr for AlarmEnable {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        AlarmEnable(self.0 | rhs.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmEnable {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "AlarmEnable({=u8:b})", self.0);
    }
}

/// How `enable_alarm` treats the values already in the alarm registers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmEnableMode {
    /// Write only the enable bits, clearing the stored alarm values.
    #[default]
    Overwrite,
    /// Read the alarm registers and change bit 7 only.
    PreserveValues,
}

/// Register image of the 5 alarm registers.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct PCF85063AAlarm {
    seconds: AlarmSeconds,
    minutes: AlarmMinutes,
    hours: AlarmHours,
    days: AlarmDays,
    weekdays: AlarmWeekdays,
}

impl PCF85063AAlarm {
    /// Encodes alarm values. Seconds, minutes, hours and weekday are written
    /// disabled; the day of month is left enabled.
    pub(crate) fn from_alarm(alarm: &Alarm) -> Self {
        let mut seconds = AlarmSeconds::default();
        seconds.set_seconds(dec_to_bcd(clamp(alarm.seconds, 59, "alarm seconds")));
        seconds.set_disabled(true);
        let mut minutes = AlarmMinutes::default();
        minutes.set_minutes(dec_to_bcd(clamp(alarm.minutes, 59, "alarm minutes")));
        minutes.set_disabled(true);
        let mut hours = AlarmHours::default();
        hours.set_hours(dec_to_bcd(clamp(alarm.hours, 23, "alarm hours")));
        hours.set_disabled(true);
        let mut days = AlarmDays::default();
        days.set_days(dec_to_bcd(clamp(alarm.day, 31, "alarm day")));
        let mut weekdays = AlarmWeekdays::default();
        weekdays.set_weekday(alarm.weekday);
        weekdays.set_disabled(true);

        let raw = PCF85063AAlarm {
            seconds,
            minutes,
            hours,
            days,
            weekdays,
        };
        log_debug!("PCF85063A: raw alarm={:?}", raw);
        raw
    }

    /// Registers holding nothing but the enable bits of `enable`.
    pub(crate) fn from_enable(enable: AlarmEnable) -> Self {
        PCF85063AAlarm::from([0; 5]).with_enable(enable)
    }

    /// Keeps the stored values and replaces every enable bit.
    pub(crate) fn with_enable(mut self, enable: AlarmEnable) -> Self {
        self.seconds.set_disabled(!enable.seconds());
        self.minutes.set_disabled(!enable.minutes());
        self.hours.set_disabled(!enable.hours());
        self.days.set_disabled(!enable.day());
        self.weekdays.set_disabled(!enable.weekday());
        self
    }

    pub(crate) fn into_alarm(self) -> (Alarm, AlarmEnable) {
        let alarm = Alarm {
            seconds: bcd_to_dec(self.seconds.seconds()),
            minutes: bcd_to_dec(self.minutes.minutes()),
            hours: bcd_to_dec(self.hours.hours()),
            day: bcd_to_dec(self.days.days()),
            weekday: self.weekdays.weekday(),
        };
        let mut enable = AlarmEnable::default();
        enable.set_seconds(!self.seconds.disabled());
        enable.set_minutes(!self.minutes.disabled());
        enable.set_hours(!self.hours.disabled());
        enable.set_day(!self.days.disabled());
        enable.set_weekday(!self.weekdays.disabled());
        (alarm, enable)
    }
}

impl From<[u8; 5]> for PCF85063AAlarm {
    fn from(data: [u8; 5]) -> Self {
        PCF85063AAlarm {
            seconds: AlarmSeconds(data[0]),
            minutes: AlarmMinutes(data[1]),
            hours: AlarmHours(data[2]),
            days: AlarmDays(data[3]),
            weekdays: AlarmWeekdays(data[4]),
        }
    }
}

impl From<&PCF85063AAlarm> for [u8; 5] {
    fn from(alarm: &PCF85063AAlarm) -> [u8; 5] {
        [
            alarm.seconds.0,
            alarm.minutes.0,
            alarm.hours.0,
            alarm.days.0,
            alarm.weekdays.0,
        ]
    }
}
