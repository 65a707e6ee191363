//! A platform-agnostic driver for the NXP PCF85063A real-time clock.
//!
//! The driver maps the chip's registers onto typed accessors over an
//! `embedded-hal` I2C bus: time and date, the alarm, the countdown timer,
//! the frequency offset, both control registers and the free RAM byte.
//! Every accessor is a single, self-contained bus exchange; the driver caches
//! nothing.
//!
//! # Features
//!
//! - `async`: adds [`asynch::PCF85063A`] built on `embedded-hal-async`
//! - `log`: debug logging through the `log` crate
//! - `defmt`: debug logging and `defmt::Format` for all public types
//!
//! # Example
//!
//! ```rust,ignore
//! use pcf85063a::{DateTime, Weekday, PCF85063A, DEFAULT_ADDRESS};
//!
//! let mut rtc = PCF85063A::new(i2c, DEFAULT_ADDRESS);
//!
//! if rtc.oscillator_stopped()? {
//!     rtc.set_time(&DateTime {
//!         seconds: 0,
//!         minutes: 30,
//!         hours: 14,
//!         day: 20,
//!         weekday: Weekday::Friday,
//!         month: 12,
//!         year: 24,
//!     })?;
//!     rtc.clear_oscillator_stop()?;
//! }
//! let now = rtc.time()?;
//! ```
//!
//! # Out-of-range values
//!
//! Time and alarm fields above their legal maximum are written as 0
//! (weekday as Sunday). This is not an error.

#![no_std]

use chrono::NaiveDateTime;
use embedded_hal::i2c::I2c;

mod alarm;
pub mod bcd;
mod datetime;
mod registers;

#[cfg(feature = "async")]
pub mod asynch;

pub use alarm::{Alarm, AlarmEnable, AlarmEnableMode};
pub use datetime::{DateTime, DateTimeError};
pub use registers::*;

use alarm::PCF85063AAlarm;
use datetime::PCF85063ADateTime;

#[cfg(not(any(feature = "log", feature = "defmt")))]
mod nolog {
    // Arguments are borrowed, never formatted.
    macro_rules! log_debug {
        ($fmt:literal $(, $arg:expr)* $(,)?) => {{
            $( let _ = &$arg; )*
        }};
    }
    macro_rules! log_warn {
        ($fmt:literal $(, $arg:expr)* $(,)?) => {{
            $( let _ = &$arg; )*
        }};
    }
    pub(crate) use log_debug;
    pub(crate) use log_warn;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        pub(crate) use defmt::{debug as log_debug, warn as log_warn};
    } else if #[cfg(feature = "log")] {
        pub(crate) use log::{debug as log_debug, warn as log_warn};
    } else {
        pub(crate) use nolog::{log_debug, log_warn};
    }
}

/// The PCF85063A's fixed 7-bit I2C address.
pub const DEFAULT_ADDRESS: u8 = 0x51;

// Longest register burst written in one transaction (the 7 time registers).
const MAX_BURST: usize = 7;

/// Device configuration applied by `configure`.
///
/// Only the listed bits are changed; the remaining bits of Control 1 and
/// Control 2 keep their current values.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub capacitor_selection: CapacitorSelection,
    pub correction_interrupt_enable: bool,
    pub clock_output_frequency: ClockOutFrequency,
    pub alarm_interrupt_enable: bool,
    pub minute_interrupt_enable: bool,
    pub half_minute_interrupt_enable: bool,
}

impl Default for Config {
    /// The chip's power-on state.
    fn default() -> Self {
        Self {
            capacitor_selection: CapacitorSelection::Pf7,
            correction_interrupt_enable: false,
            clock_output_frequency: ClockOutFrequency::Hz32768,
            alarm_interrupt_enable: false,
            minute_interrupt_enable: false,
            half_minute_interrupt_enable: false,
        }
    }
}

impl Config {
    pub(crate) fn apply(&self, control1: &mut Control1, control2: &mut Control2) {
        control1.set_capacitor_selection(self.capacitor_selection);
        control1.set_correction_interrupt_enable(self.correction_interrupt_enable);
        control2.set_clock_output_frequency(self.clock_output_frequency);
        control2.set_alarm_interrupt_enable(self.alarm_interrupt_enable);
        control2.set_minute_interrupt_enable(self.minute_interrupt_enable);
        control2.set_half_minute_interrupt_enable(self.half_minute_interrupt_enable);
    }
}

/// How `clear_oscillator_stop` reads the seconds register before rewriting it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClearOscillatorStopMode {
    /// Combined write/read of the seconds register.
    #[default]
    ReadModifyWrite,
    /// Pointer write, then a separate bare read, as the chip's reference
    /// library sequences it. Depends on the chip keeping the register
    /// pointer between transactions.
    Legacy,
}

/// Behaviors kept for byte compatibility with existing PCF85063A users.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compatibility {
    pub alarm_enable: AlarmEnableMode,
    pub clear_oscillator_stop: ClearOscillatorStopMode,
}

/// Errors returned by the driver.
#[derive(Debug)]
pub enum PCF85063AError<I2CE> {
    /// The I2C transaction failed
    I2c(I2CE),
    /// A chrono value could not be converted to or from the registers
    DateTime(DateTimeError),
}

impl<I2CE> From<I2CE> for PCF85063AError<I2CE> {
    fn from(e: I2CE) -> Self {
        PCF85063AError::I2c(e)
    }
}

#[cfg(feature = "defmt")]
impl<I2CE> defmt::Format for PCF85063AError<I2CE> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PCF85063AError::I2c(_) => defmt::write!(f, "PCF85063AError::I2c"),
            PCF85063AError::DateTime(e) => defmt::write!(f, "PCF85063AError::DateTime({})", e),
        }
    }
}

/// PCF85063A Real-Time Clock driver.
///
/// Owns the bus handle; pass `&mut bus` to keep using the bus elsewhere.
pub struct PCF85063A<I2C: I2c> {
    i2c: I2C,
    address: u8,
    compatibility: Compatibility,
}

impl<I2C: I2c> PCF85063A<I2C> {
    /// Creates a new driver instance.
    ///
    /// # Arguments
    /// * `i2c` - The I2C bus implementation
    /// * `address` - The I2C address of the device (normally [`DEFAULT_ADDRESS`])
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            compatibility: Compatibility::default(),
        }
    }

    /// Replaces the compatibility flags.
    #[must_use]
    pub fn with_compatibility(mut self, compatibility: Compatibility) -> Self {
        self.compatibility = compatibility;
        self
    }

    /// Returns the compatibility flags in effect.
    pub fn compatibility(&self) -> Compatibility {
        self.compatibility
    }

    /// Gives back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_registers(
        &mut self,
        start: RegAddr,
        data: &[u8],
    ) -> Result<(), PCF85063AError<I2C::Error>> {
        log_debug!("PCF85063A: write {:?} {:?}", start, data);
        let mut buf = [0u8; MAX_BURST + 1];
        buf[0] = start as u8;
        buf[1..=data.len()].copy_from_slice(data);
        self.i2c.write(self.address, &buf[..=data.len()])?;
        Ok(())
    }

    fn read_registers(
        &mut self,
        start: RegAddr,
        data: &mut [u8],
    ) -> Result<(), PCF85063AError<I2C::Error>> {
        self.i2c.write_read(self.address, &[start as u8], data)?;
        log_debug!("PCF85063A: read {:?} {:?}", start, data);
        Ok(())
    }

    /// Applies `config` to Control 1 and Control 2.
    pub fn configure(&mut self, config: &Config) -> Result<(), PCF85063AError<I2C::Error>> {
        let mut control1 = self.control1()?;
        let mut control2 = self.control2()?;
        config.apply(&mut control1, &mut control2);
        log_debug!("PCF85063A: configure {:?} {:?}", control1, control2);
        self.set_control1(control1)?;
        self.set_control2(control2)?;
        Ok(())
    }

    /// Writes the time and date registers.
    ///
    /// Out-of-range fields are written as 0 (weekday as Sunday). The
    /// oscillator stop flag is cleared by this write.
    pub fn set_time(&mut self, time: &DateTime) -> Result<(), PCF85063AError<I2C::Error>> {
        let raw = PCF85063ADateTime::from_fields(time);
        let data: [u8; 7] = (&raw).into();
        self.write_registers(RegAddr::Seconds, &data)
    }

    /// Reads the time and date registers.
    pub fn time(&mut self) -> Result<DateTime, PCF85063AError<I2C::Error>> {
        let mut data = [0; 7];
        self.read_registers(RegAddr::Seconds, &mut data)?;
        Ok(PCF85063ADateTime::from(data).into_fields())
    }

    /// Writes a chrono date and time. Only 2000-2099 is representable.
    pub fn set_datetime(
        &mut self,
        datetime: &NaiveDateTime,
    ) -> Result<(), PCF85063AError<I2C::Error>> {
        let raw = PCF85063ADateTime::from_datetime(datetime).map_err(PCF85063AError::DateTime)?;
        let data: [u8; 7] = (&raw).into();
        self.write_registers(RegAddr::Seconds, &data)
    }

    /// Reads the time and date as chrono's `NaiveDateTime`.
    pub fn datetime(&mut self) -> Result<NaiveDateTime, PCF85063AError<I2C::Error>> {
        let mut data = [0; 7];
        self.read_registers(RegAddr::Seconds, &mut data)?;
        let raw = PCF85063ADateTime::from(data);
        if raw.oscillator_stop() {
            log_warn!("PCF85063A: oscillator stop flag set, time may be invalid");
        }
        raw.into_datetime().map_err(PCF85063AError::DateTime)
    }

    /// Writes the alarm values with every field but the day disabled.
    ///
    /// Use [`enable_alarm`](Self::enable_alarm) to choose the matching fields.
    pub fn set_alarm(&mut self, alarm: &Alarm) -> Result<(), PCF85063AError<I2C::Error>> {
        let raw = PCF85063AAlarm::from_alarm(alarm);
        let data: [u8; 5] = (&raw).into();
        self.write_registers(RegAddr::AlarmSeconds, &data)
    }

    /// Sets the enable bit of all five alarm registers from `enable`.
    ///
    /// With [`AlarmEnableMode::Overwrite`] (the default) the alarm values
    /// are cleared as well; call [`set_alarm`](Self::set_alarm) afterwards or
    /// select [`AlarmEnableMode::PreserveValues`].
    pub fn enable_alarm(&mut self, enable: AlarmEnable) -> Result<(), PCF85063AError<I2C::Error>> {
        let raw = match self.compatibility.alarm_enable {
            AlarmEnableMode::Overwrite => PCF85063AAlarm::from_enable(enable),
            AlarmEnableMode::PreserveValues => {
                let mut data = [0; 5];
                self.read_registers(RegAddr::AlarmSeconds, &mut data)?;
                PCF85063AAlarm::from(data).with_enable(enable)
            }
        };
        let data: [u8; 5] = (&raw).into();
        self.write_registers(RegAddr::AlarmSeconds, &data)
    }

    /// Reads the alarm values and which fields are enabled.
    pub fn alarm(&mut self) -> Result<(Alarm, AlarmEnable), PCF85063AError<I2C::Error>> {
        let mut data = [0; 5];
        self.read_registers(RegAddr::AlarmSeconds, &mut data)?;
        Ok(PCF85063AAlarm::from(data).into_alarm())
    }

    /// Writes the timer value and mode in one transaction.
    pub fn set_timer(
        &mut self,
        value: u8,
        mode: TimerMode,
    ) -> Result<(), PCF85063AError<I2C::Error>> {
        self.write_registers(RegAddr::TimerValue, &[value, mode.into()])
    }

    /// Writes the offset register.
    ///
    /// Only the low 6 bits of `offset` are stored.
    pub fn set_offset(
        &mut self,
        mode: OffsetMode,
        offset: i8,
    ) -> Result<(), PCF85063AError<I2C::Error>> {
        let mut value = Offset::default();
        value.set_mode(mode);
        value.set_offset((offset as u8) & 0x3F);
        self.write_registers(RegAddr::Offset, &[value.into()])
    }

    /// Reads the offset register as its mode and the unsigned low 6 bits.
    pub fn offset(&mut self) -> Result<(OffsetMode, u8), PCF85063AError<I2C::Error>> {
        let mut data = [0];
        self.read_registers(RegAddr::Offset, &mut data)?;
        let value = Offset(data[0]);
        Ok((value.mode(), value.offset()))
    }

    /// Returns the oscillator stop flag. When set, the time is not reliable.
    pub fn oscillator_stopped(&mut self) -> Result<bool, PCF85063AError<I2C::Error>> {
        let mut data = [0];
        self.read_registers(RegAddr::Seconds, &mut data)?;
        Ok(Seconds(data[0]).oscillator_stop())
    }

    /// Clears the oscillator stop flag, keeping the current seconds.
    pub fn clear_oscillator_stop(&mut self) -> Result<(), PCF85063AError<I2C::Error>> {
        let mut data = [0];
        match self.compatibility.clear_oscillator_stop {
            ClearOscillatorStopMode::ReadModifyWrite => {
                self.read_registers(RegAddr::Seconds, &mut data)?;
            }
            ClearOscillatorStopMode::Legacy => {
                self.i2c.write(self.address, &[RegAddr::Seconds as u8])?;
                self.i2c.read(self.address, &mut data)?;
            }
        }
        let mut seconds = Seconds(data[0]);
        seconds.set_oscillator_stop(false);
        self.write_registers(RegAddr::Seconds, &[seconds.into()])
    }

    /// Clears the alarm flag in Control 2.
    pub fn clear_alarm_flag(&mut self) -> Result<(), PCF85063AError<I2C::Error>> {
        let mut control2 = self.control2()?;
        control2.set_alarm_flag(false);
        self.set_control2(control2)
    }

    /// Clears the timer flag in Control 2.
    pub fn clear_timer_flag(&mut self) -> Result<(), PCF85063AError<I2C::Error>> {
        let mut control2 = self.control2()?;
        control2.set_timer_flag(false);
        self.set_control2(control2)
    }
}

// Single register accessors
macro_rules! impl_register_access {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        impl<I2C: I2c> PCF85063A<I2C> {
            $(
                paste::paste! {
                    #[doc = concat!("Reads the ", stringify!($name), " register.")]
                    pub fn $name(&mut self) -> Result<$typ, PCF85063AError<I2C::Error>> {
                        let mut data = [0];
                        self.read_registers($regaddr, &mut data)?;
                        Ok(<$typ>::from(data[0]))
                    }

                    #[doc = concat!("Writes the ", stringify!($name), " register.")]
                    pub fn [<set_ $name>](&mut self, value: $typ) -> Result<(), PCF85063AError<I2C::Error>> {
                        self.write_registers($regaddr, &[value.into()])
                    }
                }
            )+
        }
    }
}

impl_register_access!(
    (control1, RegAddr::Control1, Control1),
    (control2, RegAddr::Control2, Control2),
    (ram, RegAddr::Ram, u8),
    (timer_value, RegAddr::TimerValue, u8),
    (timer_mode, RegAddr::TimerMode, TimerMode)
);
