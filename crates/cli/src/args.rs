use std::path::PathBuf;

use clap::Parser;

/// InvenTrent - inventory tracking from the terminal
#[derive(Parser, Debug)]
#[command(name = "inventrent")]
#[command(about = "Single-operator inventory tracker backed by a spreadsheet file")]
#[command(version)]
pub struct CliArgs {
    /// Spreadsheet file to load at start and save on exit
    /// (overrides INVENTRENT_DATA_FILE)
    #[arg(short, long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = CliArgs::parse_from(["inventrent", "--data-file", "stock.csv", "--log-json"]);
        assert_eq!(args.data_file, Some(PathBuf::from("stock.csv")));
        assert!(args.log_json);
    }

    #[test]
    fn defaults_are_empty() {
        let args = CliArgs::parse_from(["inventrent"]);
        assert_eq!(args.data_file, None);
        assert!(!args.log_json);
    }
}
