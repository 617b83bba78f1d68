use std::io::Write;

mod args;
mod cmd;
mod logger;

fn main() -> anyhow::Result<()> {
    if let Err(err) = logger::Logger::init() {
        anyhow::bail!("failed to initialize logger: {err}");
    }

    let mut p = lexopt::Parser::from_env();
    let output = match cmd::run(&mut p) {
        Ok(output) => output,
        Err(err) => {
            if std::env::var("RUST_BACKTRACE").map_or(false, |v| v == "1") {
                writeln!(&mut std::io::stderr(), "{err:?}").unwrap();
            } else {
                writeln!(&mut std::io::stderr(), "{err:#}").unwrap();
            }
            std::process::exit(1);
        }
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    Ok(())
}
