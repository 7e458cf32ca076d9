use clap::Parser;
use most_active_cookie::cli::Cli;
use most_active_cookie::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.run()?;
    Ok(())
}
