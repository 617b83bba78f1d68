use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    WrongSegmentCount { found: usize },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            WrongSegmentCount { found } => write!(
                f,
                "wrong input format, expected exactly 3 colon-delimited \
                 segments (hh:mm:ss) but found {found}",
            ),
        }
    }
}
