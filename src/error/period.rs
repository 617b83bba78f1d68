use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    OverflowHms { hours: i64, minutes: i64, seconds: i64 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Period(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            OverflowHms { hours, minutes, seconds } => write!(
                f,
                "time period of {hours} hours, {minutes} minutes and \
                 {seconds} seconds overflows a 64-bit number of seconds",
            ),
        }
    }
}
