pub(crate) mod fmt;
pub(crate) mod period;

/// An error that can occur in this crate.
///
/// Errors only ever come from constructing a value. Once a
/// [`Time`](crate::civil::Time) or [`TimePeriod`](crate::TimePeriod) exists,
/// comparing it or doing arithmetic with it cannot fail. There are two
/// categories of errors:
///
/// * An integer given to a constructor doesn't fit the integer width used
/// to store it. See [`Error::is_invalid_argument`].
/// * A string given to the `Time` parser doesn't have exactly three
/// colon-delimited segments. See [`Error::is_format`].
///
/// Note that values *within* the storage width but outside of a field's
/// period (like an hour of `30`) are never errors. They wrap around.
///
/// # Design
///
/// This is a single opaque error type for every operation in the crate.
/// Introspection is limited to the `is_*` predicates and the `Display`
/// message.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Returns true when this error originated from an integer that doesn't
    /// fit the width of the field it was given for.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{civil::Time, TimePeriod};
    ///
    /// assert!(Time::new(256, 0, 0).unwrap_err().is_invalid_argument());
    /// assert!(Time::new(0, -1, 0).unwrap_err().is_invalid_argument());
    /// assert!(TimePeriod::from_hms(i64::MAX, 0, 0)
    ///     .unwrap_err()
    ///     .is_invalid_argument());
    /// assert!(TimePeriod::try_from(u64::MAX).unwrap_err().is_invalid_argument());
    /// ```
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::Range(_) | ErrorKind::Period(_))
    }

    /// Returns true when this error originated from a string that doesn't
    /// have the shape `H:M:S`.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::civil::Time;
    ///
    /// assert!("12:00".parse::<Time>().unwrap_err().is_format());
    /// assert!("1:2:3:4".parse::<Time>().unwrap_err().is_format());
    /// // Garbage segments are not a format error. They become zero.
    /// assert!("a:b:c".parse::<Time>().is_ok());
    /// ```
    pub fn is_format(&self) -> bool {
        matches!(self.kind, ErrorKind::Fmt(_))
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "hour")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.kind, f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Clone, Debug)]
enum ErrorKind {
    Fmt(self::fmt::Error),
    Period(self::period::Error),
    Range(RangeError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Fmt(ref err) => err.fmt(f),
            Period(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

/// An error that occurs when an input value doesn't fit its integer width.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Clone, Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn range_message() {
        let err = Error::range("minute", 300, 0, 255);
        insta::assert_snapshot!(
            err,
            @"parameter 'minute' with value 300 is not in the required range of 0..=255"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_format());
    }

    #[test]
    fn format_message() {
        let err = Error::from(super::fmt::Error::WrongSegmentCount { found: 2 });
        insta::assert_snapshot!(
            err,
            @"wrong input format, expected exactly 3 colon-delimited segments (hh:mm:ss) but found 2"
        );
        assert!(err.is_format());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn period_message() {
        let err = Error::from(super::period::Error::OverflowHms {
            hours: i64::MAX,
            minutes: 0,
            seconds: 1,
        });
        insta::assert_snapshot!(
            err,
            @"time period of 9223372036854775807 hours, 0 minutes and 1 seconds overflows a 64-bit number of seconds"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn debug_alternate_shows_kind() {
        let err = Error::range("hour", -1, 0, 255);
        let debug = alloc::format!("{err:#?}");
        assert!(debug.contains("Range"), "{debug}");
        assert_eq!(alloc::format!("{err:?}"), err.to_string());
    }
}
