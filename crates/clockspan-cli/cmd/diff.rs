use lexopt::Arg;

use clockspan::{civil::Time, TimePeriod};

use crate::args;

const USAGE: &'static str = r#"
Print the period of time from FIRST forward to SECOND.

The period always moves forward around the clock, so it wraps through
midnight when SECOND is earlier in the day than FIRST. The period is printed
as H:M:S without padding.

USAGE:
    clockspan diff [--seconds] <first> <second>

OPTIONS:
    -s, --seconds   Print the period as a number of seconds instead.

EXAMPLES:
    $ clockspan diff 12:33:45 11:34:01
    23:0:16
"#;

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<String> {
    let mut seconds = false;
    let [first, second] = args::positionals::<2>(USAGE, p, |arg| {
        Ok(match *arg {
            Arg::Short('s') | Arg::Long("seconds") => {
                seconds = true;
                true
            }
            _ => false,
        })
    })?;
    let first = args::parse_time(&first)?;
    let second = args::parse_time(&second)?;
    Ok(render(first, second, seconds))
}

fn render(first: Time, second: Time, seconds: bool) -> String {
    let period = TimePeriod::between(first, second);
    log::debug!("period from {first} to {second}: {period:?}");
    if seconds {
        format!("{}\n", period.interval())
    } else {
        format!("{period}\n")
    }
}
