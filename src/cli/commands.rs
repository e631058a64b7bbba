//! Command implementations for the oboscan CLI.

use std::io::Write;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::ontology::Ontology;
use crate::spelling::checker::OntoChecker;
use crate::spelling::dictionary::SpellingDictionary;
use crate::xref::resolver::XrefResolver;

/// Execute a CLI command.
pub fn execute_command(args: OboscanArgs) -> Result<()> {
    match &args.command {
        Command::Spellcheck(check_args) => spellcheck(check_args, &args),
        Command::XrefMaps(xref_args) => xref_maps(xref_args, &args),
    }
}

/// Spell-check an ontology and write the report.
fn spellcheck(args: &SpellcheckArgs, cli_args: &OboscanArgs) -> Result<()> {
    let config = args.checker_config()?;
    debug!("Checker configuration: {config:?}");

    let ontology = Ontology::load(&args.obo_file)?;

    // Every dictionary is loaded before any term is checked
    let mut checker = OntoChecker::from_config(&config);
    if let Some(baseline) = &args.baseline {
        let dictionary = SpellingDictionary::load_frequency_file(baseline)?;
        info!(
            "Loaded {} baseline words from {}",
            dictionary.word_count(),
            baseline.display()
        );
        checker.add_dictionary(&dictionary);
    }
    for source in &args.dictionaries {
        checker.add_custom_dictionary(source)?;
    }
    info!("Dictionary holds {} words", checker.dictionary().word_count());

    let start = Instant::now();
    let reports = checker.check_ontology(&ontology);
    info!(
        "{} terms with unknown words ({} words) in {}ms",
        reports.len(),
        reports.iter().map(|r| r.report.word_count()).sum::<usize>(),
        start.elapsed().as_millis()
    );

    let mut out = open_output(args.output.as_deref())?;
    output_spellcheck(&mut out, &reports, cli_args)?;
    out.flush()?;
    Ok(())
}

/// Map the terms of a source ontology to a foreign ontology.
fn xref_maps(args: &XrefMapsArgs, cli_args: &OboscanArgs) -> Result<()> {
    let source = Ontology::load(&args.source)?;
    let foreign = Ontology::load(&args.foreign)?;

    let mut matches = XrefResolver::new(&source, &foreign).resolve();
    if args.reciprocal_only {
        matches.retain(|m| m.is_reciprocal());
    }

    let mut out = open_output(args.output.as_deref())?;
    output_xrefs(&mut out, &matches, args.header, cli_args)?;
    out.flush()?;
    Ok(())
}
