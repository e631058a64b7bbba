//! Output formatting for CLI commands.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OboscanArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::report::{CheckReport, TermReport};
use crate::xref::resolver::XrefMatch;

/// Column names written by `xrefmaps --header`.
pub const XREF_HEADER: [&str; 6] = [
    "source_id",
    "source_name",
    "foreign_id",
    "foreign_name",
    "reciprocal_id",
    "reciprocal_name",
];

/// Spell-check findings of one term, as written in JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermReportOutput {
    pub id: String,
    pub name: Option<String>,
    pub fields: CheckReport,
}

impl From<&TermReport<'_>> for TermReportOutput {
    fn from(report: &TermReport<'_>) -> Self {
        TermReportOutput {
            id: report.term.id.clone(),
            name: report.term.name.clone(),
            fields: report.report.clone(),
        }
    }
}

/// Open the destination of a report: a file, or standard output when the
/// path is absent or `-`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) if path != Path::new("-") => {
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Output spell-check reports in the specified format.
pub fn output_spellcheck<W: Write>(
    out: &mut W,
    reports: &[TermReport<'_>],
    args: &OboscanArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_spellcheck_human(out, reports),
        OutputFormat::Json => write_json(out, reports, args.pretty),
    }
}

/// Output xref mappings in the specified format.
pub fn output_xrefs<W: Write>(
    out: &mut W,
    matches: &[XrefMatch],
    header: bool,
    args: &OboscanArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_xref_csv(out, matches, header),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(matches)?
            } else {
                serde_json::to_string(matches)?
            };
            writeln!(out, "{json}")?;
            Ok(())
        }
    }
}

/// Write the human-readable spell-check report.
///
/// ```text
/// Term: mitocondrial membrane (X:1)
/// In name: mitocondrial
///
/// ```
pub fn write_spellcheck_human<W: Write>(out: &mut W, reports: &[TermReport<'_>]) -> Result<()> {
    for entry in reports {
        writeln!(
            out,
            "Term: {} ({})",
            entry.term.name_or_empty(),
            entry.term.id
        )?;
        for (field, words) in entry.report.iter() {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            writeln!(out, "In {}: {}", field, words.join(" "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, reports: &[TermReport<'_>], pretty: bool) -> Result<()> {
    let entries: Vec<TermReportOutput> = reports.iter().map(TermReportOutput::from).collect();
    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

/// Write xref mappings as CSV rows, quoting only values that need it.
pub fn write_xref_csv<W: Write>(out: &mut W, matches: &[XrefMatch], header: bool) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    if header {
        writer.write_record(XREF_HEADER)?;
    }
    for m in matches {
        writer.write_record(m.to_record())?;
    }
    writer.flush()?;
    Ok(())
}
