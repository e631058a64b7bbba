//! A minimal reader for the OBO flat-file format.
//!
//! Only what the analyses need is extracted: `[Term]` stanzas and their
//! `id`, `name`, `def`, `comment`, `is_obsolete`, `synonym` and `xref` tags.
//! The header frame, other stanza types and all other tags are skipped.
//!
//! ```text
//! format-version: 1.2
//!
//! [Term]
//! id: FBbt:00005106
//! name: neuron
//! def: "Cell that transmits nerve impulses." [FBC:auto]
//! synonym: "nerve cell" EXACT []
//! xref: CL:0000540
//! ```
//!
//! # Examples
//!
//! ```
//! use oboscan::ontology::obo::OboReader;
//!
//! let text = "[Term]\nid: X:1\nname: alpha ! trailing comment\nxref: Y:2\n";
//! let terms = OboReader::new().parse(text).unwrap();
//!
//! assert_eq!(terms[0].name.as_deref(), Some("alpha"));
//! assert_eq!(terms[0].xrefs[0].id, "Y:2");
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{OboscanError, Result};
use crate::ontology::term::{Synonym, SynonymScope, Term, Xref};

static STANZA_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([A-Za-z]+)\]$").expect("valid stanza regex"));

static TAG_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_-]+):\s*(.*)$").expect("valid tag regex"));

/// Which frame of the file the reader is currently in.
enum Frame {
    Header,
    Term { term: Option<Term>, line: usize },
    Skipped,
}

/// Reader turning OBO text into [`Term`] records, in file order.
#[derive(Debug, Clone, Default)]
pub struct OboReader;

impl OboReader {
    pub fn new() -> Self {
        OboReader
    }

    /// Read and parse the OBO file at `path`.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Term>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| OboscanError::load(format!("{}: {}", path.display(), e)))?;
        self.parse(&text).map_err(|e| match e {
            OboscanError::Load(msg) => OboscanError::load(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse OBO text held in memory.
    pub fn parse(&self, text: &str) -> Result<Vec<Term>> {
        let mut terms = Vec::new();
        let mut frame = Frame::Header;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }

            if let Some(caps) = STANZA_HEADER.captures(line) {
                Self::finish(frame, &mut terms)?;
                frame = if &caps[1] == "Term" {
                    Frame::Term {
                        term: None,
                        line: line_no,
                    }
                } else {
                    Frame::Skipped
                };
                continue;
            }

            let caps = TAG_VALUE.captures(line).ok_or_else(|| {
                OboscanError::load(format!("line {line_no}: expected 'tag: value', got '{line}'"))
            })?;

            if let Frame::Term { term, .. } = &mut frame {
                Self::apply_tag(term, &caps[1], &caps[2])
                    .map_err(|msg| OboscanError::load(format!("line {line_no}: {msg}")))?;
            }
        }

        Self::finish(frame, &mut terms)?;
        Ok(terms)
    }

    fn finish(frame: Frame, terms: &mut Vec<Term>) -> Result<()> {
        if let Frame::Term { term, line } = frame {
            match term {
                Some(term) => terms.push(term),
                None => {
                    return Err(OboscanError::load(format!(
                        "line {line}: [Term] stanza without an id"
                    )));
                }
            }
        }
        Ok(())
    }

    fn apply_tag(term: &mut Option<Term>, tag: &str, value: &str) -> std::result::Result<(), String> {
        if tag == "id" {
            let id = unescape(strip_trailing(value));
            if id.is_empty() {
                return Err("empty id".to_string());
            }
            if term.is_some() {
                return Err(format!("second id '{id}' in the same stanza"));
            }
            *term = Some(Term::new(id));
            return Ok(());
        }

        let term = term
            .as_mut()
            .ok_or_else(|| format!("'{tag}' tag before the stanza id"))?;

        match tag {
            "name" => term.name = Some(unescape(strip_trailing(value))),
            "comment" => term.comment = Some(unescape(strip_trailing(value))),
            "def" => {
                let (text, _) = parse_quoted(value)?;
                term.definition = Some(text);
            }
            "is_obsolete" => term.obsolete = strip_trailing(value) == "true",
            "synonym" => {
                let (text, rest) = parse_quoted(value)?;
                let scope = strip_trailing(rest)
                    .split_whitespace()
                    .next()
                    .and_then(|token| token.parse::<SynonymScope>().ok())
                    .unwrap_or_default();
                term.synonyms.push(Synonym::new(text).with_scope(scope));
            }
            "xref" => {
                let value = strip_trailing(value);
                let (id, rest) = match value.split_once(char::is_whitespace) {
                    Some((id, rest)) => (id, rest.trim_start()),
                    None => (value, ""),
                };
                let description = if rest.starts_with('"') {
                    Some(parse_quoted(rest)?.0)
                } else {
                    None
                };
                term.xrefs.push(Xref {
                    id: unescape(id),
                    description,
                });
            }
            _ => {}
        }
        Ok(())
    }
}

/// Cut a value at its trailing `! comment` and `{qualifier}` block, ignoring
/// those characters inside quoted strings or when escaped.
fn strip_trailing(value: &str) -> &str {
    let mut in_quotes = false;
    let mut escaped = false;
    let mut qualifier_start = None;

    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            '!' if !in_quotes => return trim_qualifiers(&value[..i], qualifier_start),
            '{' if !in_quotes && qualifier_start.is_none() => qualifier_start = Some(i),
            _ => {}
        }
    }
    trim_qualifiers(value, qualifier_start)
}

fn trim_qualifiers(value: &str, qualifier_start: Option<usize>) -> &str {
    let value = value.trim_end();
    match qualifier_start {
        Some(start) if start < value.len() && value.ends_with('}') => value[..start].trim_end(),
        _ => value,
    }
}

/// Parse a leading double-quoted string, returning its unescaped content and
/// the remainder of the value.
fn parse_quoted(value: &str) -> std::result::Result<(String, &str), String> {
    let value = value.trim_start();
    let body = value
        .strip_prefix('"')
        .ok_or_else(|| format!("expected a quoted string, got '{value}'"))?;

    let mut text = String::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((text, &body[i + 1..])),
            '\\' => match chars.next() {
                Some((_, escaped)) => text.push(unescape_char(escaped)),
                None => break,
            },
            c => text.push(c),
        }
    }
    Err("unterminated quoted string".to_string())
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(unescape_char(escaped));
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn unescape_char(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'W' => ' ',
        other => other,
    }
}
