use std::fmt::Write;

use clockspan::civil::Time;

use crate::args;

const USAGE: &'static str = r#"
Compare two times and print the results.

Both times are printed in normalized HH:MM:SS form, followed by whether the
first is equal to, earlier than or later than the second.

USAGE:
    clockspan compare <first> <second>

EXAMPLES:
    $ clockspan compare 24:12:12 0:12:12
    first: 00:12:12
    second: 00:12:12
    first == second: true
    first < second: false
    first > second: false
"#;

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<String> {
    let [first, second] = args::positionals::<2>(USAGE, p, |_| Ok(false))?;
    let first = args::parse_time(&first)?;
    let second = args::parse_time(&second)?;
    render(first, second)
}

fn render(first: Time, second: Time) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "first: {first}")?;
    writeln!(out, "second: {second}")?;
    writeln!(out, "first == second: {}", first == second)?;
    writeln!(out, "first < second: {}", first < second)?;
    writeln!(out, "first > second: {}", first > second)?;
    Ok(out)
}
