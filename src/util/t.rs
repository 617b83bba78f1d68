/*!
Constants and field definitions shared by `Time` and `TimePeriod`.

Every field of a `Time` is stored in a `u8`. The storage width is what
constructors validate. The field's period is what values are reduced by
afterwards. Keeping the two apart is what lets an hour of `30` wrap to `6`
while an hour of `300` is rejected.
*/

use crate::error::Error;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_CIVIL_DAY: i64 = 24 * SECONDS_PER_HOUR;

pub(crate) const HOUR: ClockField = ClockField { what: "hour", period: 24 };
pub(crate) const MINUTE: ClockField = ClockField { what: "minute", period: 60 };
pub(crate) const SECOND: ClockField = ClockField { what: "second", period: 60 };

/// One wrap-around field of a clock.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ClockField {
    /// A human readable name used in error messages.
    pub(crate) what: &'static str,
    /// The number of distinct values this field takes before it wraps.
    pub(crate) period: u8,
}

impl ClockField {
    /// Checks that `given` fits in the storage width of this field and
    /// reduces it modulo the field's period.
    pub(crate) fn try_new(self, given: i64) -> Result<u8, Error> {
        let Ok(raw) = u8::try_from(given) else {
            return Err(Error::range(self.what, given, u8::MIN, u8::MAX));
        };
        Ok(self.wrap(raw))
    }

    /// Reduces an already width-checked value modulo the field's period.
    pub(crate) const fn wrap(self, raw: u8) -> u8 {
        raw % self.period
    }
}
