use clap::Parser;

use pubstyle::cli::{init_logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let stdout = std::io::stdout();
    cli.run(&mut stdout.lock())
}
