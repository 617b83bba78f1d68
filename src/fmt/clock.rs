use core::fmt::Write;

use crate::{
    civil::Time,
    error::{fmt::Error as E, Error},
    period::TimePeriod,
    util::t::{self, ClockField, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
};

/// A parser for the `H:M:S` format of a `Time`.
#[derive(Clone, Debug)]
pub(crate) struct ClockParser {
    separator: char,
}

impl ClockParser {
    pub(crate) const fn new() -> ClockParser {
        ClockParser { separator: ':' }
    }

    /// Parses a `Time` from exactly three separator-delimited segments.
    ///
    /// Each segment is trimmed of surrounding whitespace and parsed as a
    /// `u8`. A segment that doesn't parse becomes `0`. A segment that does
    /// parse is reduced modulo the period of its field.
    pub(crate) fn parse_time(&self, input: &str) -> Result<Time, Error> {
        let mut segments = input.split(self.separator);
        let (Some(hour), Some(minute), Some(second), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            let found = input.split(self.separator).count();
            return Err(Error::from(E::WrongSegmentCount { found }));
        };
        let hour = self.parse_field(t::HOUR, hour);
        let minute = self.parse_field(t::MINUTE, minute);
        let second = self.parse_field(t::SECOND, second);
        Ok(Time::constant(hour, minute, second))
    }

    fn parse_field(&self, field: ClockField, segment: &str) -> u8 {
        match segment.trim().parse::<u8>() {
            Ok(raw) => field.wrap(raw),
            Err(_err) => {
                trace!(
                    "{what} segment {segment:?} is not a valid u8 \
                     ({_err}), using 0 instead",
                    what = field.what,
                );
                0
            }
        }
    }
}

/// A printer for `Time` and `TimePeriod` values.
#[derive(Clone, Debug)]
pub(crate) struct ClockPrinter {
    separator: char,
}

impl ClockPrinter {
    pub(crate) const fn new() -> ClockPrinter {
        ClockPrinter { separator: ':' }
    }

    /// Prints a time with every field zero padded to two digits.
    pub(crate) fn print_time<W: Write>(
        &self,
        time: &Time,
        mut wtr: W,
    ) -> core::fmt::Result {
        write!(
            wtr,
            "{:02}{sep}{:02}{sep}{:02}",
            time.hour(),
            time.minute(),
            time.second(),
            sep = self.separator,
        )
    }

    /// Prints a period as `H:M:S` without any padding.
    ///
    /// Negative periods are printed as the magnitude with a leading `-`.
    pub(crate) fn print_period<W: Write>(
        &self,
        period: &TimePeriod,
        mut wtr: W,
    ) -> core::fmt::Result {
        let interval = period.interval();
        if interval < 0 {
            wtr.write_char('-')?;
        }
        let magnitude = interval.unsigned_abs();
        let hours = magnitude / SECONDS_PER_HOUR as u64;
        let rem = magnitude % SECONDS_PER_HOUR as u64;
        let minutes = rem / SECONDS_PER_MINUTE as u64;
        let seconds = rem % SECONDS_PER_MINUTE as u64;
        write!(
            wtr,
            "{hours}{sep}{minutes}{sep}{seconds}",
            sep = self.separator,
        )
    }
}
