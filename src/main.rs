use anyhow::Result;
use clap::Parser;
use hello_todo::cli::Cli;
use hello_todo::{logging, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    let stdout = std::io::stdout();
    run(&config.source(), &mut stdout.lock())
}
