use lexopt::{Arg, Parser, ValueExt};

/// Parses the next argument as a sub-command name.
///
/// If there is no next argument, the usage is returned as an error. If the
/// next argument is `-h` or `--help`, then the usage is printed and the
/// process exits successfully.
pub fn next_as_command(usage: &str, p: &mut Parser) -> anyhow::Result<String> {
    let usage = usage.trim();
    let arg = match p.next()? {
        Some(arg) => arg,
        None => anyhow::bail!("{}", usage),
    };
    let cmd = match arg {
        Arg::Value(cmd) => cmd.string()?,
        Arg::Short('h') | Arg::Long("help") => {
            println!("{}", usage);
            std::process::exit(0);
        }
        arg => return Err(arg.unexpected().into()),
    };
    Ok(cmd)
}

/// Collects exactly `N` positional arguments.
///
/// Flags are handed to `flag`, which returns `Ok(true)` when it recognized
/// the flag. `-h` and `--help` print the usage and exit.
pub fn positionals<const N: usize>(
    usage: &str,
    p: &mut Parser,
    mut flag: impl FnMut(&Arg<'_>) -> anyhow::Result<bool>,
) -> anyhow::Result<[String; N]> {
    let usage = usage.trim();
    let mut values = vec![];
    while let Some(arg) = p.next()? {
        match arg {
            Arg::Short('h') | Arg::Long("help") => {
                println!("{}", usage);
                std::process::exit(0);
            }
            Arg::Value(value) => values.push(value.string()?),
            ref other => {
                if !flag(other)? {
                    return Err(arg.unexpected().into());
                }
            }
        }
    }
    <[String; N]>::try_from(values).map_err(|values| {
        anyhow::anyhow!(
            "expected {N} positional arguments but got {}\n\n{usage}",
            values.len(),
        )
    })
}

/// Parses a time of day from a command line argument.
pub fn parse_time(arg: &str) -> anyhow::Result<clockspan::civil::Time> {
    use anyhow::Context;

    arg.parse().with_context(|| format!("invalid time {arg:?}"))
}
