use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    error::Error,
    fmt::{ClockParser, ClockPrinter},
    period::TimePeriod,
    util::t::{self, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
};

static PARSER: ClockParser = ClockParser::new();
static PRINTER: ClockPrinter = ClockPrinter::new();

/// A representation of civil "wall clock" time.
///
/// Conceptually, a `Time` value corresponds to the hours, minutes and
/// seconds that you might see on a 24-hour clock. Every `Time` is somewhere
/// in the range `00:00:00` ([`Time::MIN`]) to `23:59:59` ([`Time::MAX`]).
///
/// # Construction and normalization
///
/// Every constructor reduces each field modulo its period: hours modulo
/// `24`, minutes modulo `60` and seconds modulo `60`. Fields are reduced
/// independently, so a minute of `75` becomes `15` without touching the
/// hour:
///
/// ```
/// use clockspan::civil::Time;
///
/// let t = Time::new(25, 75, 30)?;
/// assert_eq!(t.to_string(), "01:15:30");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// What *is* rejected is a value that doesn't fit into the `u8` that each
/// field is stored in. See [`Time::new`].
///
/// # Comparisons
///
/// The `Time` type provides both `Eq` and `Ord` trait implementations. Times
/// are compared by hour, then minute, then second:
///
/// ```
/// use clockspan::civil::Time;
///
/// let t1 = Time::constant(7, 30, 1);
/// let t2 = Time::constant(8, 10, 0);
/// assert!(t1 < t2);
/// ```
///
/// # Arithmetic
///
/// Adding or subtracting a [`TimePeriod`] (or a plain number of seconds)
/// always succeeds. Whole days are silently absorbed, since a `Time` has no
/// way of representing them:
///
/// ```
/// use clockspan::{civil::Time, TimePeriod};
///
/// let t = Time::constant(23, 58, 59);
/// assert_eq!(t + TimePeriod::new(3671), Time::constant(1, 0, 10));
/// assert_eq!(t - 86_400, t);
/// ```
///
/// There is no way to subtract one `Time` from another. The distance
/// between two times depends on which direction you travel around the
/// clock, so it's spelled out explicitly with [`Time::until`] and
/// [`Time::since`].
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    /// The minimum representable time value.
    ///
    /// This corresponds to `00:00:00`.
    pub const MIN: Time = Time::midnight();

    /// The maximum representable time value.
    ///
    /// This corresponds to `23:59:59`.
    pub const MAX: Time = Time::constant(23, 59, 59);

    /// Creates a new `Time` value from its component hour, minute and second
    /// values.
    ///
    /// Each value is reduced modulo its period, so an `hour` of `24` is
    /// midnight and a `second` of `61` is `1`.
    ///
    /// # Errors
    ///
    /// This returns an error if any of the given values doesn't fit into a
    /// `u8`. That is, every value must satisfy `0 <= value <= 255`.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::civil::Time;
    ///
    /// let t = Time::new(21, 30, 5)?;
    /// assert_eq!(t.hour(), 21);
    /// assert_eq!(t.minute(), 30);
    /// assert_eq!(t.second(), 5);
    ///
    /// assert_eq!(Time::new(24, 60, 60)?, Time::MIN);
    /// assert!(Time::new(21, 30, 256).is_err());
    /// assert!(Time::new(-1, 30, 0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(hour: i64, minute: i64, second: i64) -> Result<Time, Error> {
        let hour = t::HOUR.try_new(hour)?;
        let minute = t::MINUTE.try_new(minute)?;
        let second = t::SECOND.try_new(second)?;
        Ok(Time { hour, minute, second })
    }

    /// Creates a new `Time` from an hour and minute. The second is `0`.
    ///
    /// # Errors
    ///
    /// This returns an error under the same conditions as [`Time::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::civil::Time;
    ///
    /// assert_eq!(Time::from_hm(12, 30)?.to_string(), "12:30:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_hm(hour: i64, minute: i64) -> Result<Time, Error> {
        Time::new(hour, minute, 0)
    }

    /// Creates a new `Time` from an hour. The minute and second are `0`.
    ///
    /// # Errors
    ///
    /// This returns an error under the same conditions as [`Time::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::civil::Time;
    ///
    /// assert_eq!(Time::from_hour(30)?.to_string(), "06:00:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_hour(hour: i64) -> Result<Time, Error> {
        Time::new(hour, 0, 0)
    }

    /// Creates a new `Time` value in a `const` context.
    ///
    /// Since every `u8` fits the storage width of a field, this never fails.
    /// Fields are reduced modulo their period exactly as in [`Time::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::civil::Time;
    ///
    /// const BEDTIME: Time = Time::constant(21, 30, 5);
    /// assert_eq!(BEDTIME.hour(), 21);
    /// assert_eq!(BEDTIME.minute(), 30);
    /// assert_eq!(BEDTIME.second(), 5);
    ///
    /// assert_eq!(Time::constant(255, 255, 255).to_string(), "15:15:15");
    /// ```
    #[inline]
    pub const fn constant(hour: u8, minute: u8, second: u8) -> Time {
        Time {
            hour: t::HOUR.wrap(hour),
            minute: t::MINUTE.wrap(minute),
            second: t::SECOND.wrap(second),
        }
    }

    /// Returns the first moment of the day, `00:00:00`.
    ///
    /// This is also the `Default` value of a `Time`.
    #[inline]
    pub const fn midnight() -> Time {
        Time { hour: 0, minute: 0, second: 0 }
    }

    /// Returns the hour component of this time, in the range `0..=23`.
    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute component of this time, in the range `0..=59`.
    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second component of this time, in the range `0..=59`.
    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Returns the period of time to get from this time forward to `other`.
    ///
    /// This travels forward around the clock, so the result is always in the
    /// range `0..=86399` seconds. It is zero only when both times are equal.
    ///
    /// This is equivalent to `TimePeriod::between(self, other)`.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::civil::Time;
    ///
    /// let t1 = Time::constant(12, 33, 45);
    /// let t2 = Time::constant(11, 34, 1);
    /// assert_eq!(t1.until(t2).interval(), 82_816);
    /// assert_eq!(t2.until(t1).interval(), 3_584);
    /// ```
    #[inline]
    pub fn until(self, other: Time) -> TimePeriod {
        TimePeriod::between(self, other)
    }

    /// Returns the period of time to get from `other` forward to this time.
    ///
    /// This is equivalent to `other.until(self)`.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::civil::Time;
    ///
    /// let t1 = Time::constant(12, 33, 45);
    /// let t2 = Time::constant(11, 34, 1);
    /// assert_eq!(t2.since(t1).interval(), 82_816);
    /// ```
    #[inline]
    pub fn since(self, other: Time) -> TimePeriod {
        TimePeriod::between(other, self)
    }

    /// Adds a period of time to this time, wrapping around midnight.
    ///
    /// The period is decomposed into whole hours, minutes and seconds, which
    /// are added field by field. Overflowing seconds carry into minutes and
    /// overflowing minutes carry into hours. The final hour is reduced modulo
    /// `24`.
    ///
    /// Adding a negative period is the same as subtracting its magnitude
    /// with [`Time::wrapping_sub`].
    ///
    /// This is also available via the `+` operator.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{civil::Time, TimePeriod};
    ///
    /// let t = Time::constant(12, 12, 12);
    /// assert_eq!(t.wrapping_add(TimePeriod::new(3671)), Time::constant(13, 13, 23));
    /// assert_eq!(t.wrapping_add(TimePeriod::new(-3671)), Time::constant(11, 11, 1));
    /// ```
    #[inline]
    pub fn wrapping_add(self, period: TimePeriod) -> Time {
        let interval = period.interval();
        if interval < 0 {
            self.sub_seconds(interval.unsigned_abs())
        } else {
            self.add_seconds(interval.unsigned_abs())
        }
    }

    /// Subtracts a period of time from this time, wrapping around midnight.
    ///
    /// This mirrors [`Time::wrapping_add`], borrowing from minutes when the
    /// seconds go negative and from hours when the minutes go negative. A
    /// negative hour wraps backwards through midnight.
    ///
    /// Subtracting a negative period is the same as adding its magnitude.
    /// As a result, `t - p + p == t` for every time `t` and period `p`.
    ///
    /// This is also available via the `-` operator.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{civil::Time, TimePeriod};
    ///
    /// let t = Time::constant(0, 0, 5);
    /// assert_eq!(t.wrapping_sub(TimePeriod::new(10)), Time::constant(23, 59, 55));
    /// assert_eq!(t.wrapping_sub(TimePeriod::new(-10)), Time::constant(0, 0, 15));
    /// ```
    #[inline]
    pub fn wrapping_sub(self, period: TimePeriod) -> Time {
        let interval = period.interval();
        if interval < 0 {
            self.add_seconds(interval.unsigned_abs())
        } else {
            self.sub_seconds(interval.unsigned_abs())
        }
    }
}

/// Internal APIs.
impl Time {
    fn add_seconds(self, seconds: u64) -> Time {
        let (hours, minutes, seconds) = decompose(seconds);

        let mut second = self.second + seconds;
        let mut minute = self.minute;
        let mut hour = self.hour;
        if second >= t::SECOND.period {
            minute += 1;
            second -= t::SECOND.period;
        }
        minute += minutes;
        if minute >= t::MINUTE.period {
            hour += 1;
            minute -= t::MINUTE.period;
        }
        hour = (hour + hours) % t::HOUR.period;
        Time { hour, minute, second }
    }

    fn sub_seconds(self, seconds: u64) -> Time {
        let (hours, minutes, seconds) = decompose(seconds);

        // Every component is at most 59, so none of this can overflow an i8.
        let mut second = self.second as i8 - seconds as i8;
        let mut minute = self.minute as i8;
        let mut hour = self.hour as i8;
        if second < 0 {
            minute -= 1;
            second += t::SECOND.period as i8;
        }
        minute -= minutes as i8;
        if minute < 0 {
            hour -= 1;
            minute += t::MINUTE.period as i8;
        }
        hour = (hour - hours as i8).rem_euclid(t::HOUR.period as i8);
        Time { hour: hour as u8, minute: minute as u8, second: second as u8 }
    }
}

/// Splits a non-negative number of seconds into `(hours, minutes, seconds)`
/// where whole days have already been discarded from `hours`.
fn decompose(seconds: u64) -> (u8, u8, u8) {
    const HOUR: u64 = SECONDS_PER_HOUR as u64;
    const MINUTE: u64 = SECONDS_PER_MINUTE as u64;

    let hours = (seconds / HOUR) % u64::from(t::HOUR.period);
    let minutes = (seconds % HOUR) / MINUTE;
    let seconds = seconds % MINUTE;
    (hours as u8, minutes as u8, seconds as u8)
}

impl Default for Time {
    fn default() -> Time {
        Time::midnight()
    }
}

/// Prints a time as `HH:MM:SS`, with every field zero padded.
impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        PRINTER.print_time(self, f)
    }
}

impl core::fmt::Debug for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

/// Parses a time from a string of the form `H:M:S`.
///
/// The string must split into exactly three segments on `:`. Otherwise, a
/// format error is returned. Each segment that is a valid `u8` is reduced
/// modulo its field's period. Each segment that isn't is treated as `0`.
///
/// # Example
///
/// ```
/// use clockspan::civil::Time;
///
/// let t: Time = "23:29:39".parse()?;
/// assert_eq!(t.to_string(), "23:29:39");
///
/// let t: Time = "24:12:12".parse()?;
/// assert_eq!(t, Time::constant(0, 12, 12));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
impl core::str::FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Time, Error> {
        PARSER.parse_time(s)
    }
}

impl<'a> TryFrom<&'a str> for Time {
    type Error = Error;

    fn try_from(s: &'a str) -> Result<Time, Error> {
        PARSER.parse_time(s)
    }
}

/// Adds a period of time. This uses wrapping arithmetic.
impl Add<TimePeriod> for Time {
    type Output = Time;

    #[inline]
    fn add(self, rhs: TimePeriod) -> Time {
        self.wrapping_add(rhs)
    }
}

impl AddAssign<TimePeriod> for Time {
    #[inline]
    fn add_assign(&mut self, rhs: TimePeriod) {
        *self = self.add(rhs);
    }
}

/// Subtracts a period of time. This uses wrapping arithmetic.
impl Sub<TimePeriod> for Time {
    type Output = Time;

    #[inline]
    fn sub(self, rhs: TimePeriod) -> Time {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign<TimePeriod> for Time {
    #[inline]
    fn sub_assign(&mut self, rhs: TimePeriod) {
        *self = self.sub(rhs);
    }
}

/// Adds a number of seconds. This uses wrapping arithmetic.
impl Add<i64> for Time {
    type Output = Time;

    #[inline]
    fn add(self, seconds: i64) -> Time {
        self.wrapping_add(TimePeriod::new(seconds))
    }
}

impl AddAssign<i64> for Time {
    #[inline]
    fn add_assign(&mut self, seconds: i64) {
        *self = self.add(seconds);
    }
}

/// Subtracts a number of seconds. This uses wrapping arithmetic.
impl Sub<i64> for Time {
    type Output = Time;

    #[inline]
    fn sub(self, seconds: i64) -> Time {
        self.wrapping_sub(TimePeriod::new(seconds))
    }
}

impl SubAssign<i64> for Time {
    #[inline]
    fn sub_assign(&mut self, seconds: i64) {
        *self = self.sub(seconds);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Time {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Time {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Time, D::Error> {
        use serde::de;

        struct TimeVisitor;

        impl<'de> de::Visitor<'de> for TimeVisitor {
            type Value = Time;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a time of day string of the form H:M:S")
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Time, E> {
                PARSER.parse_time(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        Time::constant(
            quickcheck::Arbitrary::arbitrary(g),
            quickcheck::Arbitrary::arbitrary(g),
            quickcheck::Arbitrary::arbitrary(g),
        )
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Time>> {
        let fields = (self.hour, self.minute, self.second);
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&fields)
                .map(|(hour, minute, second)| Time::constant(hour, minute, second)),
        )
    }
}
