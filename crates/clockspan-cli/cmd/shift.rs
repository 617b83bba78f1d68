use anyhow::Context;

use clockspan::{civil::Time, TimePeriod};

use crate::args;

const USAGE: &'static str = r#"
Move a time by a number of seconds.

A positive number of seconds moves the time forward and a negative number
moves it backward. The result wraps around midnight in both directions.
Since negative numbers look like flags, put them after `--`.

USAGE:
    clockspan shift <time> <seconds>

EXAMPLES:
    $ clockspan shift 23:58:59 3671
    01:00:10
    $ clockspan shift 12:12:12 -- -3671
    11:11:01
"#;

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<String> {
    let [time, seconds] = args::positionals::<2>(USAGE, p, |_| Ok(false))?;
    let time = args::parse_time(&time)?;
    let seconds: i64 = seconds
        .parse()
        .with_context(|| format!("invalid number of seconds {seconds:?}"))?;
    Ok(render(time, TimePeriod::new(seconds)))
}

fn render(time: Time, period: TimePeriod) -> String {
    format!("{}\n", time + period)
}
