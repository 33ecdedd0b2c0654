//! Process wiring: configuration, logging, login, load, session, save.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use colored::Colorize;

use inventrent_auth::CredentialCheck;
use inventrent_infra::{AppConfig, SheetStore};
use inventrent_observability::LogOptions;

use crate::args::CliArgs;
use crate::console::Console;
use crate::login::login;
use crate::session::Session;

/// How a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Input ended at the login prompt; the data file was not touched.
    NotLoggedIn,
    /// The session ended and the inventory was written back.
    Saved { items: usize },
}

/// Entry point used by the `inventrent` binary.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(path) = args.data_file {
        config.data_file = path;
    }

    inventrent_observability::init(&LogOptions {
        default_level: config.log_level.clone(),
        json: args.log_json,
    });
    tracing::debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_with(&config, &config.credentials(), &mut console)?;
    Ok(())
}

/// Login, load the data file, run the menu, and save on the way out.
///
/// The inventory is written exactly once, after the session ends (by Exit or
/// end of input).
pub fn run_with<C, R, W>(
    config: &AppConfig,
    check: &C,
    console: &mut Console<R, W>,
) -> anyhow::Result<RunOutcome>
where
    C: CredentialCheck + ?Sized,
    R: BufRead,
    W: Write,
{
    let Some(operator) = login(console, check).context("login prompt failed")? else {
        tracing::info!("input closed before login");
        return Ok(RunOutcome::NotLoggedIn);
    };
    tracing::info!(operator = %operator.username, "session started");

    let store = SheetStore::new(&config.data_file);
    let report = store
        .load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;
    for rejected in &report.rejected {
        console.say(rejected.to_string().red())?;
    }

    let mut session = Session::new(report.inventory, console);
    session.run().context("menu session failed")?;
    let inventory = session.into_inventory();

    store
        .save(&inventory)
        .with_context(|| format!("failed to save {}", store.path().display()))?;

    Ok(RunOutcome::Saved {
        items: inventory.len(),
    })
}
