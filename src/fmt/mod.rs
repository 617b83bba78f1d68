/*!
Parsing and printing of the `hh:mm:ss` clock format.

There is exactly one textual format in this crate. It is used for both
[`Time`](crate::civil::Time) and [`TimePeriod`](crate::TimePeriod), with two
differences:

* A `Time` is always printed with every field zero padded to two digits,
e.g., `09:05:00`. A `TimePeriod` is printed without any padding, e.g.,
`9:5:0`, and its hour component is unbounded.
* Only a `Time` can be parsed. Parsing is lenient about the contents of each
segment, but strict about there being exactly three of them.

The padding difference is observable behavior that callers depend on, so
both printers are covered by regression tests.
*/

pub(crate) use self::clock::{ClockParser, ClockPrinter};

mod clock;
