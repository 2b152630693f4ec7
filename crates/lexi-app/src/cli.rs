use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexi_config::{Config, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "lexi")]
#[command(version)]
#[command(about = "Look up English words, with a short local search history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON config profile (defaults to $LEXI_CONFIG when set)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Key-value file holding the search history
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    /// Dictionary endpoint, the word is appended as the last path segment
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log output format: pretty or json
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Keep history in memory for this session only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Look up a word and exit
    Lookup {
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
    },
    /// Look up a random word and exit
    Random,
    /// Print the search history
    History {
        /// Forget every remembered word instead
        #[arg(long)]
        clear: bool,
    },
    /// Interactive prompt (the default)
    Repl,
}

impl Cli {
    /// Flags win over profile and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.history_file {
            config.history.path = path.clone();
        }

        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }

        if let Some(format) = self.log_format {
            config.log.format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::try_parse_from(["lexi"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.ephemeral);
    }

    #[test]
    fn test_lookup_collects_words() {
        let cli = Cli::try_parse_from(["lexi", "lookup", "ice", "cream"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Lookup {
                word: vec!["ice".to_string(), "cream".to_string()]
            })
        );
    }

    #[test]
    fn test_lookup_requires_a_word() {
        assert!(Cli::try_parse_from(["lexi", "lookup"]).is_err());
    }

    #[test]
    fn test_global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "lexi",
            "history",
            "--clear",
            "--history-file",
            "/tmp/h.json",
            "--api-url",
            "http://localhost:1/en",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::History { clear: true }));

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.history.path, PathBuf::from("/tmp/h.json"));
        assert_eq!(config.api.base_url, "http://localhost:1/en");
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
