use crate::args;

mod compare;
mod diff;
mod shift;

const USAGE: &'static str = "\
A tool for doing arithmetic on a 24-hour clock.

Times are written as H:M:S. Each field wraps around its period, so 24:00:00
is midnight. A field that isn't a number between 0 and 255 is read as 0.

USAGE:
    clockspan <command> ...

COMMANDS:
    compare   Compare two times
    diff      Print the period from one time forward to another
    shift     Move a time forward or backward by a number of seconds
";

/// Runs the sub-command named by the next argument and returns what it
/// wants printed to stdout.
pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<String> {
    let cmd = args::next_as_command(USAGE, p)?;
    match &*cmd {
        "compare" => compare::run(p),
        "diff" => diff::run(p),
        "shift" => shift::run(p),
        unk => anyhow::bail!("unrecognized command '{}'", unk),
    }
}

#[cfg(test)]
fn run_with(args: &[&str]) -> anyhow::Result<String> {
    let mut p = lexopt::Parser::from_args(args.iter().copied());
    run(&mut p)
}
