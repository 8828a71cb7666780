use std::path::Path;

use crate::core::dict::{DictEntry, SqDict};
use crate::parsing::sq::{contig_name, ParseError};

/// Load a sequence dictionary (.dict) file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MissingName` if an `@SQ` line has no parseable `SN:` field.
pub fn parse_dict_file(path: &Path) -> Result<SqDict, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_dict_text(&content)
}

/// Load a sequence dictionary from text.
///
/// Only lines beginning with the literal prefix `@SQ` are read; everything
/// else (the `@HD` line, comments) is ignored. Each `@SQ` line is stored
/// verbatim, terminator included, keyed by its contig name, in input order.
///
/// # Errors
///
/// Returns `ParseError::MissingName` if an `@SQ` line has no parseable `SN:`
/// field. No partial dictionary is produced.
pub fn parse_dict_text(text: &str) -> Result<SqDict, ParseError> {
    let mut entries = Vec::new();

    // split_inclusive keeps the line terminators attached
    for line in text.split_inclusive('\n') {
        if !line.starts_with("@SQ") {
            continue;
        }

        let name = contig_name(line)?;
        entries.push(DictEntry {
            name: name.to_string(),
            line: line.to_string(),
        });
    }

    Ok(SqDict::new(entries))
}
