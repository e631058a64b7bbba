//! Command line argument parsing for the oboscan CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::config::CheckerConfig;
use crate::spelling::dictionary::DictionarySource;

/// oboscan - spell-checking and xref mapping for OBO ontologies
#[derive(Parser, Debug, Clone)]
#[command(name = "oboscan")]
#[command(about = "Spell-checking and cross-reference mapping for OBO ontologies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OboscanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OboscanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report likely misspelled words in term names, definitions, comments and synonyms
    Spellcheck(SpellcheckArgs),

    /// Find xref mappings between two ontologies
    #[command(name = "xrefmaps")]
    XrefMaps(XrefMapsArgs),
}

/// Arguments for spell-checking an ontology
#[derive(Parser, Debug, Clone)]
pub struct SpellcheckArgs {
    /// Ontology to check (OBO format)
    #[arg(value_name = "OBOFILE")]
    pub obo_file: PathBuf,

    /// Report destination (default: standard output; `-` also means standard output)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Additional known words: a file, `-` for standard input, or `|command`
    /// to use the output of a shell command (repeatable)
    #[arg(short = 'd', long = "dictionary", alias = "exclude", value_name = "SOURCE")]
    pub dictionaries: Vec<DictionarySource>,

    /// Checker configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Word-frequency file ("word frequency" per line) added to the baseline
    #[arg(long, value_name = "FREQ_FILE")]
    pub baseline: Option<PathBuf>,

    /// Do not report unknown words shorter than this
    #[arg(long, value_name = "N")]
    pub min_word_length: Option<usize>,

    /// Check obsolete terms too
    #[arg(long)]
    pub include_obsolete: bool,

    /// Check terms in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Do not seed the dictionary with the built-in English word list
    #[arg(long)]
    pub no_builtin: bool,
}

impl SpellcheckArgs {
    /// Build the checker configuration: the configuration file (or the
    /// defaults) overridden by command-line flags.
    pub fn checker_config(&self) -> Result<CheckerConfig> {
        let mut config = match &self.config {
            Some(path) => CheckerConfig::from_file(path)?,
            None => CheckerConfig::default(),
        };

        if let Some(min_word_length) = self.min_word_length {
            config.min_word_length = min_word_length;
        }
        if self.include_obsolete {
            config.include_obsolete = true;
        }
        if self.parallel {
            config.parallel = true;
        }
        if self.no_builtin {
            config.builtin_dictionary = false;
        }
        Ok(config)
    }
}

/// Arguments for xref mapping
#[derive(Parser, Debug, Clone)]
pub struct XrefMapsArgs {
    /// Source ontology (OBO format)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Foreign ontology (OBO format)
    #[arg(value_name = "FOREIGN")]
    pub foreign: PathBuf,

    /// Output file (default: standard output)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write a header row before the mappings
    #[arg(long)]
    pub header: bool,

    /// Only output mappings with a reciprocal xref
    #[arg(long)]
    pub reciprocal_only: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report for spellcheck, CSV for xrefmaps
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_spellcheck_command() {
        let args = OboscanArgs::try_parse_from([
            "oboscan",
            "spellcheck",
            "fbbt.obo",
            "report.txt",
            "--dictionary",
            "words.txt",
            "-d",
            "|aspell dump master",
            "--min-word-length",
            "3",
            "--include-obsolete",
        ])
        .unwrap();

        if let Command::Spellcheck(check_args) = args.command {
            assert_eq!(check_args.obo_file, PathBuf::from("fbbt.obo"));
            assert_eq!(check_args.output, Some(PathBuf::from("report.txt")));
            assert_eq!(
                check_args.dictionaries,
                vec![
                    DictionarySource::File(PathBuf::from("words.txt")),
                    DictionarySource::Command("aspell dump master".to_string()),
                ]
            );
            assert_eq!(check_args.min_word_length, Some(3));
            assert!(check_args.include_obsolete);
        } else {
            panic!("Expected Spellcheck command");
        }
    }

    #[test]
    fn test_exclude_alias() {
        let args = OboscanArgs::try_parse_from([
            "oboscan",
            "spellcheck",
            "--exclude",
            "extra.txt",
            "fbbt.obo",
        ])
        .unwrap();

        if let Command::Spellcheck(check_args) = args.command {
            assert_eq!(check_args.dictionaries.len(), 1);
            assert_eq!(check_args.output, None);
        } else {
            panic!("Expected Spellcheck command");
        }
    }

    #[test]
    fn test_checker_config_overrides() {
        let args = OboscanArgs::try_parse_from([
            "oboscan",
            "spellcheck",
            "fbbt.obo",
            "--min-word-length",
            "3",
            "--parallel",
            "--no-builtin",
        ])
        .unwrap();

        if let Command::Spellcheck(check_args) = args.command {
            let config = check_args.checker_config().unwrap();
            assert_eq!(config.min_word_length, 3);
            assert!(config.parallel);
            assert!(!config.builtin_dictionary);
            assert!(!config.include_obsolete);
        } else {
            panic!("Expected Spellcheck command");
        }
    }

    #[test]
    fn test_xrefmaps_command() {
        let args = OboscanArgs::try_parse_from([
            "oboscan",
            "xrefmaps",
            "fbbt.obo",
            "uberon.obo",
            "--header",
            "-o",
            "maps.csv",
        ])
        .unwrap();

        if let Command::XrefMaps(xref_args) = args.command {
            assert_eq!(xref_args.source, PathBuf::from("fbbt.obo"));
            assert_eq!(xref_args.foreign, PathBuf::from("uberon.obo"));
            assert_eq!(xref_args.output, Some(PathBuf::from("maps.csv")));
            assert!(xref_args.header);
            assert!(!xref_args.reciprocal_only);
        } else {
            panic!("Expected XrefMaps command");
        }
    }

    #[test]
    fn test_xrefmaps_requires_two_ontologies() {
        assert!(OboscanArgs::try_parse_from(["oboscan", "xrefmaps", "fbbt.obo"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = OboscanArgs::try_parse_from(["oboscan", "xrefmaps", "a.obo", "b.obo"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            OboscanArgs::try_parse_from(["oboscan", "-vv", "xrefmaps", "a.obo", "b.obo"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            OboscanArgs::try_parse_from(["oboscan", "--quiet", "xrefmaps", "a.obo", "b.obo"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            OboscanArgs::try_parse_from(["oboscan", "--format", "json", "xrefmaps", "a.obo", "b.obo"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
