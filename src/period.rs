use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::{
    civil::Time,
    error::{period::Error as E, Error},
    fmt::ClockPrinter,
    util::t::{self, SECONDS_PER_CIVIL_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
};

static PRINTER: ClockPrinter = ClockPrinter::new();

/// A signed duration of time measured in whole seconds.
///
/// Unlike a [`Time`], a `TimePeriod` is not bounded to a single day and is
/// never normalized. A period of 30 hours is exactly `108,000` seconds, and
/// subtracting a longer period from a shorter one produces a negative
/// period.
///
/// # Construction
///
/// A period can be created from a raw number of seconds with
/// [`TimePeriod::new`], from hours, minutes and seconds with
/// [`TimePeriod::from_hms`], or as the forward distance between two times
/// with [`TimePeriod::between`]:
///
/// ```
/// use clockspan::{civil::Time, TimePeriod};
///
/// assert_eq!(TimePeriod::new(3671), TimePeriod::from_hms(1, 1, 11)?);
/// assert_eq!(TimePeriod::from_hm(1, 2)?.interval(), 3720);
///
/// let first = Time::constant(12, 33, 45);
/// let second = Time::constant(11, 34, 1);
/// assert_eq!(TimePeriod::between(first, second).interval(), 82_816);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Comparisons and arithmetic
///
/// Periods are compared by their number of seconds, and adding or
/// subtracting two periods adds or subtracts their number of seconds:
///
/// ```
/// use clockspan::TimePeriod;
///
/// let p1 = TimePeriod::from_hms(13, 13, 59)?;
/// let p2 = TimePeriod::from_hms(13, 13, 13)?;
/// assert_eq!(p1 + p2, TimePeriod::from_hms(26, 27, 12)?);
/// assert_eq!(p1 - p2, TimePeriod::from_hms(0, 0, 46)?);
/// assert!(p2 - p1 < TimePeriod::ZERO);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// The `+` and `-` operators panic when the result overflows an `i64`. Use
/// [`TimePeriod::checked_add`] or [`TimePeriod::checked_sub`] to handle
/// overflow explicitly.
///
/// # Display
///
/// A period is printed as `H:M:S` *without* zero padding, unlike a `Time`.
/// Negative periods are printed with a leading `-`:
///
/// ```
/// use clockspan::TimePeriod;
///
/// assert_eq!(TimePeriod::new(3671).to_string(), "1:1:11");
/// assert_eq!(TimePeriod::new(-3671).to_string(), "-1:1:11");
/// assert_eq!(TimePeriod::new(108_000).to_string(), "30:0:0");
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct TimePeriod {
    interval: i64,
}

impl TimePeriod {
    /// A period of zero seconds.
    pub const ZERO: TimePeriod = TimePeriod::new(0);

    /// The smallest possible period, `i64::MIN` seconds.
    pub const MIN: TimePeriod = TimePeriod::new(i64::MIN);

    /// The largest possible period, `i64::MAX` seconds.
    pub const MAX: TimePeriod = TimePeriod::new(i64::MAX);

    /// Creates a new period from a number of seconds.
    ///
    /// The value is stored as is. It may be negative and it may be longer
    /// than a day.
    ///
    /// To create a period from a wider integer type, use the `TryFrom`
    /// implementations for `i128` or `u64`, which return an error when the
    /// value doesn't fit in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::TimePeriod;
    ///
    /// assert_eq!(TimePeriod::new(-5).interval(), -5);
    /// assert_eq!(TimePeriod::new(1_000_000).interval(), 1_000_000);
    /// ```
    #[inline]
    pub const fn new(seconds: i64) -> TimePeriod {
        TimePeriod { interval: seconds }
    }

    /// Creates a new period from hours, minutes and seconds.
    ///
    /// The resulting number of seconds is
    /// `hours * 3600 + minutes * 60 + seconds`. No component is bounded or
    /// normalized, so `from_hms(0, 90, 0)` and `from_hms(1, 30, 0)` are the
    /// same period, and components may be negative.
    ///
    /// # Errors
    ///
    /// This returns an error when the total number of seconds overflows an
    /// `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::TimePeriod;
    ///
    /// assert_eq!(TimePeriod::from_hms(1, 1, 11)?.interval(), 3671);
    /// assert_eq!(TimePeriod::from_hms(30, 0, 0)?.interval(), 108_000);
    /// assert!(TimePeriod::from_hms(i64::MAX / 60, 0, 0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_hms(
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Result<TimePeriod, Error> {
        hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|h| {
                minutes.checked_mul(SECONDS_PER_MINUTE)?.checked_add(h)
            })
            .and_then(|hm| hm.checked_add(seconds))
            .map(TimePeriod::new)
            .ok_or_else(|| {
                Error::from(E::OverflowHms { hours, minutes, seconds })
            })
    }

    /// Creates a new period from hours and minutes. The seconds are `0`.
    ///
    /// # Errors
    ///
    /// This returns an error under the same conditions as
    /// [`TimePeriod::from_hms`].
    #[inline]
    pub fn from_hm(hours: i64, minutes: i64) -> Result<TimePeriod, Error> {
        TimePeriod::from_hms(hours, minutes, 0)
    }

    /// Returns the period needed to move from `first` forward to `second`.
    ///
    /// Both times are treated as points on a 24-hour clock, so when
    /// `second` is earlier in the day than `first`, the period wraps through
    /// midnight. The result is always in the range `0..=86399` seconds, and
    /// is zero only when the two times are equal.
    ///
    /// This is directional: `between(a, b)` and `between(b, a)` add up to a
    /// full day unless `a == b`.
    ///
    /// The distance is found one field at a time. First the seconds of
    /// `first` are advanced until they match the seconds of `second`. Those
    /// seconds are applied to `first`, possibly carrying into its minutes.
    /// Then the minutes are advanced until they match, and finally the hours.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{civil::Time, TimePeriod};
    ///
    /// let first = Time::constant(12, 33, 45);
    /// let second = Time::constant(11, 34, 1);
    /// assert_eq!(TimePeriod::between(first, second).to_string(), "23:0:16");
    /// assert_eq!(TimePeriod::between(second, first).to_string(), "0:59:44");
    /// assert_eq!(TimePeriod::between(first, first), TimePeriod::ZERO);
    /// ```
    pub fn between(first: Time, second: Time) -> TimePeriod {
        let seconds = steps_until(first.second(), second.second(), t::SECOND);
        let working = first + i64::from(seconds);
        let minutes = steps_until(working.minute(), second.minute(), t::MINUTE);
        let working = working + i64::from(minutes) * SECONDS_PER_MINUTE;
        let hours = steps_until(working.hour(), second.hour(), t::HOUR);
        trace!(
            "period from {first} to {second} is {hours} hour steps, \
             {minutes} minute steps and {seconds} second steps",
        );

        let interval = i64::from(seconds)
            + i64::from(minutes) * SECONDS_PER_MINUTE
            + i64::from(hours) * SECONDS_PER_HOUR;
        debug_assert!((0..SECONDS_PER_CIVIL_DAY).contains(&interval));
        TimePeriod::new(interval)
    }

    /// Returns the number of seconds in this period.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::TimePeriod;
    ///
    /// assert_eq!(TimePeriod::from_hm(1, 2)?.interval(), 3720);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub const fn interval(self) -> i64 {
        self.interval
    }

    /// Returns true if this period is zero seconds long.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.interval == 0
    }

    /// Returns true if this period is strictly less than zero seconds long.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.interval < 0
    }

    /// Adds two periods, returning `None` on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::TimePeriod;
    ///
    /// let p = TimePeriod::new(10);
    /// assert_eq!(p.checked_add(TimePeriod::new(-15)), Some(TimePeriod::new(-5)));
    /// assert_eq!(TimePeriod::MAX.checked_add(p), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, rhs: TimePeriod) -> Option<TimePeriod> {
        match self.interval.checked_add(rhs.interval) {
            Some(interval) => Some(TimePeriod::new(interval)),
            None => None,
        }
    }

    /// Subtracts `rhs` from this period, returning `None` on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::TimePeriod;
    ///
    /// let p = TimePeriod::new(10);
    /// assert_eq!(p.checked_sub(TimePeriod::new(15)), Some(TimePeriod::new(-5)));
    /// assert_eq!(TimePeriod::MIN.checked_sub(p), None);
    /// ```
    #[inline]
    pub const fn checked_sub(self, rhs: TimePeriod) -> Option<TimePeriod> {
        match self.interval.checked_sub(rhs.interval) {
            Some(interval) => Some(TimePeriod::new(interval)),
            None => None,
        }
    }

    /// Negates this period, returning `None` when it is
    /// [`TimePeriod::MIN`].
    #[inline]
    pub const fn checked_neg(self) -> Option<TimePeriod> {
        match self.interval.checked_neg() {
            Some(interval) => Some(TimePeriod::new(interval)),
            None => None,
        }
    }
}

/// Counts the single steps needed to move a field value forward until it
/// matches `target`, wrapping at the field's period.
fn steps_until(from: u8, target: u8, field: t::ClockField) -> u8 {
    let mut steps = 0;
    let mut current = from;
    while current % field.period != target {
        current += 1;
        steps += 1;
    }
    steps
}

/// Prints a period as `H:M:S`, without any zero padding.
impl core::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        PRINTER.print_period(self, f)
    }
}

impl core::fmt::Debug for TimePeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("TimePeriod").field(&self.interval).finish()
    }
}

impl From<TimePeriod> for i64 {
    fn from(period: TimePeriod) -> i64 {
        period.interval()
    }
}

impl From<i64> for TimePeriod {
    fn from(seconds: i64) -> TimePeriod {
        TimePeriod::new(seconds)
    }
}

/// Creates a period from a number of seconds that might not fit in an
/// `i64`.
impl TryFrom<i128> for TimePeriod {
    type Error = Error;

    fn try_from(seconds: i128) -> Result<TimePeriod, Error> {
        let Ok(interval) = i64::try_from(seconds) else {
            return Err(Error::range("seconds", seconds, i64::MIN, i64::MAX));
        };
        Ok(TimePeriod::new(interval))
    }
}

/// Creates a period from a number of seconds that might not fit in an
/// `i64`.
impl TryFrom<u64> for TimePeriod {
    type Error = Error;

    fn try_from(seconds: u64) -> Result<TimePeriod, Error> {
        TimePeriod::try_from(i128::from(seconds))
    }
}

/// Adds two periods.
///
/// # Panics
///
/// This panics when the result overflows an `i64`. See
/// [`TimePeriod::checked_add`] for a non-panicking variant.
impl Add for TimePeriod {
    type Output = TimePeriod;

    #[inline]
    fn add(self, rhs: TimePeriod) -> TimePeriod {
        self.checked_add(rhs).expect("overflow when adding time periods")
    }
}

impl AddAssign for TimePeriod {
    #[inline]
    fn add_assign(&mut self, rhs: TimePeriod) {
        *self = self.add(rhs);
    }
}

/// Subtracts two periods.
///
/// # Panics
///
/// This panics when the result overflows an `i64`. See
/// [`TimePeriod::checked_sub`] for a non-panicking variant.
impl Sub for TimePeriod {
    type Output = TimePeriod;

    #[inline]
    fn sub(self, rhs: TimePeriod) -> TimePeriod {
        self.checked_sub(rhs)
            .expect("overflow when subtracting time periods")
    }
}

impl SubAssign for TimePeriod {
    #[inline]
    fn sub_assign(&mut self, rhs: TimePeriod) {
        *self = self.sub(rhs);
    }
}

/// Negates a period.
///
/// # Panics
///
/// This panics when the period is [`TimePeriod::MIN`].
impl Neg for TimePeriod {
    type Output = TimePeriod;

    #[inline]
    fn neg(self) -> TimePeriod {
        self.checked_neg().expect("overflow when negating time period")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimePeriod {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.interval)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimePeriod {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimePeriod, D::Error> {
        use serde::de;

        struct TimePeriodVisitor;

        impl<'de> de::Visitor<'de> for TimePeriodVisitor {
            type Value = TimePeriod;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an integer number of seconds")
            }

            #[inline]
            fn visit_i64<E: de::Error>(
                self,
                value: i64,
            ) -> Result<TimePeriod, E> {
                Ok(TimePeriod::new(value))
            }

            #[inline]
            fn visit_u64<E: de::Error>(
                self,
                value: u64,
            ) -> Result<TimePeriod, E> {
                TimePeriod::try_from(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_i128<E: de::Error>(
                self,
                value: i128,
            ) -> Result<TimePeriod, E> {
                TimePeriod::try_from(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_i64(TimePeriodVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimePeriod {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimePeriod {
        TimePeriod::new(quickcheck::Arbitrary::arbitrary(g))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = TimePeriod>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&self.interval).map(TimePeriod::new),
        )
    }
}
