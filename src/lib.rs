/*!
Clockspan provides two small value types for doing arithmetic on a 24-hour
wall clock: [`Time`](civil::Time), a time of day with second precision, and
[`TimePeriod`], a signed number of seconds.

# Example

This shows how to build times, move them around the clock and measure the
distance between them:

```
use clockspan::{civil::Time, TimePeriod};

let start = Time::new(23, 58, 59)?;
let later = start + TimePeriod::new(3671);
// Arithmetic on a `Time` wraps around midnight.
assert_eq!(later.to_string(), "01:00:10");

// The period between two times is always measured forward.
let period = TimePeriod::between(later, start);
assert_eq!(period.interval(), 86_400 - 3671);
assert_eq!(period.to_string(), "22:58:49");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Parsing

A `Time` can be parsed from a string of the form `H:M:S`. Parsing is
deliberately lenient: a segment that isn't a number between `0` and `255` is
treated as `0`, and values beyond a field's period wrap around. Only the
number of segments is enforced:

```
use clockspan::civil::Time;

assert_eq!("24:12:12".parse::<Time>()?, Time::new(0, 12, 12)?);
assert_eq!("7:xx:5".parse::<Time>()?, Time::new(7, 0, 5)?);
assert!("12:30".parse::<Time>().unwrap_err().is_format());

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
[`Error`].
* **logging** - Emits `trace` level messages through the [`log`] crate.
This is useful for debugging how a period between two times was computed
or why a segment of a string was parsed as zero.
* **serde** - Provides `Serialize` and `Deserialize` implementations for
[`Time`](civil::Time) and [`TimePeriod`].

[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(test)]
extern crate alloc;

pub use crate::{error::Error, period::TimePeriod};

#[macro_use]
mod logging;

pub mod civil;
mod error;
mod fmt;
mod period;
mod util;
