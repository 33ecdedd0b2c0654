use clap::Parser;

use inventrent_cli::{CliArgs, app};

fn main() -> anyhow::Result<()> {
    app::run(CliArgs::parse())
}
