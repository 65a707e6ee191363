//! Register definitions and bitfield structures for the PCF85063A RTC.
//!
//! This module contains all register addresses, bitfield definitions, and
//! related types for interacting with the PCF85063A Real-Time Clock registers.
//! Every register is a `u8` newtype, so the raw value stays reachable through
//! `.0` or `u8::from` while the named accessors decode the individual bits.

use bitfield::bitfield;

/// Register addresses for the PCF85063A RTC.
#[allow(unused)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegAddr {
    /// Control 1 register
    Control1 = 0x00,
    /// Control 2 register
    Control2 = 0x01,
    /// Offset (frequency correction) register
    Offset = 0x02,
    /// Free RAM byte
    Ram = 0x03,
    /// Seconds register (0-59) with the oscillator stop flag
    Seconds = 0x04,
    /// Minutes register (0-59)
    Minutes = 0x05,
    /// Hours register (0-23)
    Hours = 0x06,
    /// Day of month register (1-31)
    Days = 0x07,
    /// Weekday register (0-6)
    Weekdays = 0x08,
    /// Month register (1-12)
    Months = 0x09,
    /// Year register (0-99)
    Years = 0x0A,
    /// Alarm seconds register
    AlarmSeconds = 0x0B,
    /// Alarm minutes register
    AlarmMinutes = 0x0C,
    /// Alarm hours register
    AlarmHours = 0x0D,
    /// Alarm day of month register
    AlarmDays = 0x0E,
    /// Alarm weekday register
    AlarmWeekdays = 0x0F,
    /// Timer countdown value
    TimerValue = 0x10,
    /// Timer mode register
    TimerMode = 0x11,
}

/// Day of the week as stored in the weekday registers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}
impl From<u8> for Weekday {
    /// Creates a `Weekday` from a raw register value.
    ///
    /// Only the values 0-6 name a day. Anything else is clamped to
    /// `Sunday`, the same substitution the time and alarm writers apply to
    /// out-of-range fields.
    fn from(v: u8) -> Self {
        match v {
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            6 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}
impl From<Weekday> for u8 {
    fn from(v: Weekday) -> Self {
        v as u8
    }
}

/// Hour format selected by the 12_24 bit of Control 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeRepresentation {
    /// 24-hour format (0-23)
    TwentyFourHour = 0,
    /// 12-hour format (1-12 + AM/PM)
    TwelveHour = 1,
}
impl From<u8> for TimeRepresentation {
    /// Creates a `TimeRepresentation` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => TimeRepresentation::TwentyFourHour,
            1 => TimeRepresentation::TwelveHour,
            _ => panic!("Invalid value for TimeRepresentation: {}", v),
        }
    }
}
impl From<TimeRepresentation> for u8 {
    fn from(v: TimeRepresentation) -> Self {
        v as u8
    }
}

/// Internal oscillator load capacitance (CAP_SEL).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CapacitorSelection {
    /// 7 pF
    Pf7 = 0,
    /// 12.5 pF
    Pf12_5 = 1,
}
impl From<u8> for CapacitorSelection {
    /// Creates a `CapacitorSelection` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => CapacitorSelection::Pf7,
            1 => CapacitorSelection::Pf12_5,
            _ => panic!("Invalid value for CapacitorSelection: {}", v),
        }
    }
}
impl From<CapacitorSelection> for u8 {
    fn from(v: CapacitorSelection) -> Self {
        v as u8
    }
}

/// CLKOUT pin frequency (COF bits of Control 2).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockOutFrequency {
    Hz32768 = 0b000,
    Hz16384 = 0b001,
    Hz8192 = 0b010,
    Hz4096 = 0b011,
    Hz2048 = 0b100,
    Hz1024 = 0b101,
    Hz1 = 0b110,
    /// CLKOUT held low
    Disabled = 0b111,
}
impl From<u8> for ClockOutFrequency {
    /// Creates a `ClockOutFrequency` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value does not fit in 3 bits.
    fn from(v: u8) -> Self {
        match v {
            0b000 => ClockOutFrequency::Hz32768,
            0b001 => ClockOutFrequency::Hz16384,
            0b010 => ClockOutFrequency::Hz8192,
            0b011 => ClockOutFrequency::Hz4096,
            0b100 => ClockOutFrequency::Hz2048,
            0b101 => ClockOutFrequency::Hz1024,
            0b110 => ClockOutFrequency::Hz1,
            0b111 => ClockOutFrequency::Disabled,
            _ => panic!("Invalid value for ClockOutFrequency: {}", v),
        }
    }
}
impl From<ClockOutFrequency> for u8 {
    fn from(v: ClockOutFrequency) -> Self {
        v as u8
    }
}

/// Offset correction mode (MODE bit of the offset register).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OffsetMode {
    /// Correction applied once every two hours
    Normal = 0,
    /// Correction applied every four minutes
    Course = 1,
}
impl From<u8> for OffsetMode {
    /// Creates an `OffsetMode` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => OffsetMode::Normal,
            1 => OffsetMode::Course,
            _ => panic!("Invalid value for OffsetMode: {}", v),
        }
    }
}
impl From<OffsetMode> for u8 {
    fn from(v: OffsetMode) -> Self {
        v as u8
    }
}

/// Timer source clock (TCF bits of the timer mode register).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerClockFrequency {
    Hz4096 = 0b00,
    Hz64 = 0b01,
    Hz1 = 0b10,
    /// One tick per minute
    Hz1_60 = 0b11,
}
impl From<u8> for TimerClockFrequency {
    /// Creates a `TimerClockFrequency` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value does not fit in 2 bits.
    fn from(v: u8) -> Self {
        match v {
            0b00 => TimerClockFrequency::Hz4096,
            0b01 => TimerClockFrequency::Hz64,
            0b10 => TimerClockFrequency::Hz1,
            0b11 => TimerClockFrequency::Hz1_60,
            _ => panic!("Invalid value for TimerClockFrequency: {}", v),
        }
    }
}
impl From<TimerClockFrequency> for u8 {
    fn from(v: TimerClockFrequency) -> Self {
        v as u8
    }
}

/// Timer interrupt signalling (TI_TP bit).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerInterruptMode {
    /// Interrupt follows the timer flag
    Flag = 0,
    /// Interrupt is a pulse
    Pulse = 1,
}
impl From<u8> for TimerInterruptMode {
    /// Creates a `TimerInterruptMode` from a raw register value.
    ///
    /// # Panics
    /// Panics if the value is not 0 or 1.
    fn from(v: u8) -> Self {
        match v {
            0 => TimerInterruptMode::Flag,
            1 => TimerInterruptMode::Pulse,
            _ => panic!("Invalid value for TimerInterruptMode: {}", v),
        }
    }
}
impl From<TimerInterruptMode> for u8 {
    fn from(v: TimerInterruptMode) -> Self {
        v as u8
    }
}

// This macro generates the From<u8> and Into<u8> implementations for the
// register type
macro_rules! from_register_u8 {
    ($typ:ty) => {
        impl From<u8> for $typ {
            fn from(v: u8) -> Self {
                paste::paste!([< $typ >](v))
            }
        }
        impl From<$typ> for u8 {
            fn from(v: $typ) -> Self {
                v.0
            }
        }
    };
}

bitfield! {
    /// Control 1 register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control1(u8);
    impl Debug;
    /// External clock test mode
    pub external_test, set_external_test: 7;
    /// RTC clock stopped
    pub stop, set_stop: 5;
    /// Software reset request
    pub software_reset, set_software_reset: 4;
    /// Correction interrupt enable
    pub correction_interrupt_enable, set_correction_interrupt_enable: 2;
    /// 12 or 24 hour mode
    pub from into TimeRepresentation, time_representation, set_time_representation: 1, 1;
    /// Oscillator load capacitance
    pub from into CapacitorSelection, capacitor_selection, set_capacitor_selection: 0, 0;
}
from_register_u8!(Control1);

#[cfg(feature = "defmt")]
impl defmt::Format for Control1 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Control1({}, {}",
            self.time_representation(),
            self.capacitor_selection()
        );
        if self.external_test() {
            defmt::write!(f, ", EXT_TEST");
        }
        if self.stop() {
            defmt::write!(f, ", STOP");
        }
        if self.software_reset() {
            defmt::write!(f, ", SR");
        }
        if self.correction_interrupt_enable() {
            defmt::write!(f, ", CIE");
        }
        defmt::write!(f, ")");
    }
}

bitfield! {
    /// Control 2 register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Control2(u8);
    impl Debug;
    /// Alarm interrupt enable
    pub alarm_interrupt_enable, set_alarm_interrupt_enable: 7;
    /// Alarm triggered flag
    pub alarm_flag, set_alarm_flag: 6;
    /// Minute interrupt enable
    pub minute_interrupt_enable, set_minute_interrupt_enable: 5;
    /// Half minute interrupt enable
    pub half_minute_interrupt_enable, set_half_minute_interrupt_enable: 4;
    /// Timer expired flag
    pub timer_flag, set_timer_flag: 3;
    /// CLKOUT frequency
    pub from into ClockOutFrequency, clock_output_frequency, set_clock_output_frequency: 2, 0;
}
from_register_u8!(Control2);

#[cfg(feature = "defmt")]
impl defmt::Format for Control2 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Control2({}", self.clock_output_frequency());
        if self.alarm_interrupt_enable() {
            defmt::write!(f, ", AIE");
        }
        if self.alarm_flag() {
            defmt::write!(f, ", AF");
        }
        if self.minute_interrupt_enable() {
            defmt::write!(f, ", MI");
        }
        if self.half_minute_interrupt_enable() {
            defmt::write!(f, ", HMI");
        }
        if self.timer_flag() {
            defmt::write!(f, ", TF");
        }
        defmt::write!(f, ")");
    }
}

bitfield! {
    /// Offset register for frequency correction.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Offset(u8);
    impl Debug;
    /// Correction mode
    pub from into OffsetMode, mode, set_mode: 7, 7;
    /// Correction magnitude, low 6 bits of the signed offset
    pub offset, set_offset: 5, 0;
}
from_register_u8!(Offset);

#[cfg(feature = "defmt")]
impl defmt::Format for Offset {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Offset({}, {})", self.mode(), self.offset());
    }
}

bitfield! {
    /// Seconds register with the oscillator stop flag.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Seconds(u8);
    impl Debug;
    /// Oscillator stop flag (OS), set after a power loss
    pub oscillator_stop, set_oscillator_stop: 7;
    /// BCD seconds (00-59)
    pub seconds, set_seconds: 6, 0;
}
from_register_u8!(Seconds);

#[cfg(feature = "defmt")]
impl defmt::Format for Seconds {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Seconds({}s", crate::bcd::bcd_to_dec(self.seconds()));
        if self.oscillator_stop() {
            defmt::write!(f, ", OS");
        }
        defmt::write!(f, ")");
    }
}

bitfield! {
    /// Minutes register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Minutes(u8);
    impl Debug;
    /// BCD minutes (00-59)
    pub minutes, set_minutes: 6, 0;
}
from_register_u8!(Minutes);

bitfield! {
    /// Hours register in 24-hour format.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Hours(u8);
    impl Debug;
    /// BCD hours (00-23)
    pub hours, set_hours: 5, 0;
}
from_register_u8!(Hours);

bitfield! {
    /// Day of month register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Days(u8);
    impl Debug;
    /// BCD day of month (01-31)
    pub days, set_days: 5, 0;
}
from_register_u8!(Days);

bitfield! {
    /// Weekday register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Weekdays(u8);
    impl Debug;
    /// Day of week (0-6, Sunday = 0)
    pub from into Weekday, weekday, set_weekday: 2, 0;
}
from_register_u8!(Weekdays);

bitfield! {
    /// Month register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Months(u8);
    impl Debug;
    /// BCD month (01-12)
    pub months, set_months: 4, 0;
}
from_register_u8!(Months);

bitfield! {
    /// Year register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct Years(u8);
    impl Debug;
    /// BCD two digit year (00-99)
    pub years, set_years: 7, 0;
}
from_register_u8!(Years);

#[cfg(feature = "defmt")]
impl defmt::Format for Minutes {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Minutes({})", crate::bcd::bcd_to_dec(self.minutes()));
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Hours {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Hours({})", crate::bcd::bcd_to_dec(self.hours()));
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Days {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Days({})", crate::bcd::bcd_to_dec(self.days()));
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Months {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Months({})", crate::bcd::bcd_to_dec(self.months()));
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Years {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Years({})", crate::bcd::bcd_to_dec(self.years()));
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Weekdays {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Weekdays({})", self.weekday());
    }
}

// Alarm register types: bit 7 disables matching on the field.

bitfield! {
    /// Alarm seconds register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmSeconds(u8);
    impl Debug;
    /// Field ignored by the alarm when set (AEN_S)
    pub disabled, set_disabled: 7;
    /// BCD seconds (00-59)
    pub seconds, set_seconds: 6, 0;
}
from_register_u8!(AlarmSeconds);

bitfield! {
    /// Alarm minutes register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmMinutes(u8);
    impl Debug;
    /// Field ignored by the alarm when set (AEN_M)
    pub disabled, set_disabled: 7;
    /// BCD minutes (00-59)
    pub minutes, set_minutes: 6, 0;
}
from_register_u8!(AlarmMinutes);

bitfield! {
    /// Alarm hours register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmHours(u8);
    impl Debug;
    /// Field ignored by the alarm when set (AEN_H)
    pub disabled, set_disabled: 7;
    /// BCD hours (00-23)
    pub hours, set_hours: 5, 0;
}
from_register_u8!(AlarmHours);

bitfield! {
    /// Alarm day of month register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmDays(u8);
    impl Debug;
    /// Field ignored by the alarm when set (AEN_D)
    pub disabled, set_disabled: 7;
    /// BCD day of month (01-31)
    pub days, set_days: 5, 0;
}
from_register_u8!(AlarmDays);

bitfield! {
    /// Alarm weekday register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct AlarmWeekdays(u8);
    impl Debug;
    /// Field ignored by the alarm when set (AEN_W)
    pub disabled, set_disabled: 7;
    /// Day of week (0-6, Sunday = 0)
    pub from into Weekday, weekday, set_weekday: 2, 0;
}
from_register_u8!(AlarmWeekdays);

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmSeconds {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "AlarmSeconds({}", crate::bcd::bcd_to_dec(self.seconds()));
        if self.disabled() {
            defmt::write!(f, ", disabled");
        }
        defmt::write!(f, ")");
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmMinutes {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "AlarmMinutes({}", crate::bcd::bcd_to_dec(self.minutes()));
        if self.disabled() {
            defmt::write!(f, ", disabled");
        }
        defmt::write!(f, ")");
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmHours {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "AlarmHours({}", crate::bcd::bcd_to_dec(self.hours()));
        if self.disabled() {
            defmt::write!(f, ", disabled");
        }
        defmt::write!(f, ")");
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmDays {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "AlarmDays({}", crate::bcd::bcd_to_dec(self.days()));
        if self.disabled() {
            defmt::write!(f, ", disabled");
        }
        defmt::write!(f, ")");
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmWeekdays {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "AlarmWeekdays({}", self.weekday());
        if self.disabled() {
            defmt::write!(f, ", disabled");
        }
        defmt::write!(f, ")");
    }
}

bitfield! {
    /// Timer mode register.
    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct TimerMode(u8);
    impl Debug;
    /// Timer source clock
    pub from into TimerClockFrequency, clock_frequency, set_clock_frequency: 4, 3;
    /// Timer enable
    pub timer_enable, set_timer_enable: 2;
    /// Timer interrupt enable
    pub interrupt_enable, set_interrupt_enable: 1;
    /// Timer interrupt mode
    pub from into TimerInterruptMode, interrupt_mode, set_interrupt_mode: 0, 0;
}
from_register_u8!(TimerMode);

#[cfg(feature = "defmt")]
impl defmt::Format for TimerMode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "TimerMode({}, {}",
            self.clock_frequency(),
            self.interrupt_mode()
        );
        if self.timer_enable() {
            defmt::write!(f, ", TE");
        }
        if self.interrupt_enable() {
            defmt::write!(f, ", TIE");
        }
        defmt::write!(f, ")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_conversions() {
        assert_eq!(Weekday::from(0), Weekday::Sunday);
        assert_eq!(Weekday::from(3), Weekday::Wednesday);
        assert_eq!(Weekday::from(6), Weekday::Saturday);
        assert_eq!(u8::from(Weekday::Friday), 5);
    }

    #[test]
    fn test_weekday_out_of_range_is_sunday() {
        assert_eq!(Weekday::from(7), Weekday::Sunday);
        assert_eq!(Weekday::from(9), Weekday::Sunday);
        assert_eq!(Weekday::from(0xFF), Weekday::Sunday);
    }

    #[test]
    #[should_panic(expected = "Invalid value for OffsetMode: 2")]
    fn test_invalid_offset_mode_conversion() {
        let _ = OffsetMode::from(2);
    }

    #[test]
    #[should_panic(expected = "Invalid value for ClockOutFrequency: 8")]
    fn test_invalid_clock_out_frequency_conversion() {
        let _ = ClockOutFrequency::from(8);
    }

    #[test]
    fn test_control1_register_conversions() {
        let control = Control1::from(0b1010_0111);
        assert!(control.external_test());
        assert!(control.stop());
        assert!(!control.software_reset());
        assert!(control.correction_interrupt_enable());
        assert_eq!(control.time_representation(), TimeRepresentation::TwelveHour);
        assert_eq!(control.capacitor_selection(), CapacitorSelection::Pf12_5);
        assert_eq!(u8::from(control), 0b1010_0111);

        let mut control = Control1::default();
        control.set_stop(true);
        control.set_capacitor_selection(CapacitorSelection::Pf12_5);
        assert_eq!(control.0, 0b0010_0001);
    }

    #[test]
    fn test_control2_register_conversions() {
        let control = Control2::from(0b1101_0110);
        assert!(control.alarm_interrupt_enable());
        assert!(control.alarm_flag());
        assert!(!control.minute_interrupt_enable());
        assert!(control.half_minute_interrupt_enable());
        assert!(!control.timer_flag());
        assert_eq!(control.clock_output_frequency(), ClockOutFrequency::Hz1);

        let mut control = Control2::default();
        control.set_timer_flag(true);
        control.set_clock_output_frequency(ClockOutFrequency::Disabled);
        assert_eq!(u8::from(control), 0b0000_1111);
    }

    #[test]
    fn test_offset_register_conversions() {
        let offset = Offset::from(0b1011_0110);
        assert_eq!(offset.mode(), OffsetMode::Course);
        assert_eq!(offset.offset(), 0b11_0110);

        let mut offset = Offset::default();
        offset.set_mode(OffsetMode::Normal);
        offset.set_offset(0x3F);
        assert_eq!(offset.0, 0x3F);
    }

    #[test]
    fn test_seconds_register_conversions() {
        let seconds = Seconds::from(0xD9);
        assert!(seconds.oscillator_stop());
        assert_eq!(seconds.seconds(), 0x59);

        let seconds = Seconds::from(0x30);
        assert!(!seconds.oscillator_stop());
        assert_eq!(seconds.seconds(), 0x30);
        assert_eq!(u8::from(seconds), 0x30);
    }

    #[test]
    fn test_time_register_masks() {
        // Unused high bits never leak into the decoded fields
        assert_eq!(Minutes(0xFF).minutes(), 0x7F);
        assert_eq!(Hours(0xFF).hours(), 0x3F);
        assert_eq!(Days(0xFF).days(), 0x3F);
        assert_eq!(Weekdays(0xFB).weekday(), Weekday::Wednesday);
        assert_eq!(Months(0xFF).months(), 0x1F);
        assert_eq!(Years(0x99).years(), 0x99);
    }

    #[test]
    fn test_alarm_register_conversions() {
        let seconds = AlarmSeconds::from(0xB0);
        assert!(seconds.disabled());
        assert_eq!(seconds.seconds(), 0x30);

        let hours = AlarmHours::from(0x23);
        assert!(!hours.disabled());
        assert_eq!(hours.hours(), 0x23);

        let mut weekday = AlarmWeekdays::default();
        weekday.set_weekday(Weekday::Wednesday);
        weekday.set_disabled(true);
        assert_eq!(weekday.0, 0x83);
    }

    #[test]
    fn test_timer_mode_register_conversions() {
        let mode = TimerMode::from(0b0001_0111);
        assert_eq!(mode.clock_frequency(), TimerClockFrequency::Hz1);
        assert!(mode.timer_enable());
        assert!(mode.interrupt_enable());
        assert_eq!(mode.interrupt_mode(), TimerInterruptMode::Pulse);

        let mut mode = TimerMode::default();
        mode.set_clock_frequency(TimerClockFrequency::Hz1_60);
        mode.set_timer_enable(true);
        assert_eq!(u8::from(mode), 0b0001_1100);
    }

    #[test]
    fn test_reg_addr_values() {
        assert_eq!(RegAddr::Control1 as u8, 0x00);
        assert_eq!(RegAddr::Ram as u8, 0x03);
        assert_eq!(RegAddr::Seconds as u8, 0x04);
        assert_eq!(RegAddr::Years as u8, 0x0A);
        assert_eq!(RegAddr::AlarmSeconds as u8, 0x0B);
        assert_eq!(RegAddr::TimerMode as u8, 0x11);
    }
}
