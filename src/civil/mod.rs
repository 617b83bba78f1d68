/*!
Wall clock time of day.

The only type in this module is [`Time`], a time of day with second
precision on a 24-hour clock. It is "civil" in the sense that it has no
association with a date or a time zone: every day is exactly `86,400`
seconds long and every operation wraps around midnight.

To measure the distance between two `Time` values, see
[`TimePeriod::between`](crate::TimePeriod::between) or [`Time::until`].
*/

pub use self::time::Time;

mod time;
