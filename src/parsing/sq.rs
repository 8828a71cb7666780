use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no SN: field in @SQ line: {line:?}")]
    MissingName { line: String },
}

/// Extract the contig name (`SN:` field) from a raw `@SQ` line.
///
/// The line is tokenized on tabs; the value of the `SN:` field runs until the
/// next tab or the line terminator. An empty `SN:` value does not count as a
/// match, and if several `SN:` fields are present the last one wins.
///
/// # Errors
///
/// Returns `ParseError::MissingName` if no field carries a non-empty `SN:`
/// value.
pub fn contig_name(line: &str) -> Result<&str, ParseError> {
    let mut name: Option<&str> = None;

    for field in line.split('\t').skip(1) {
        if let Some(value) = field.strip_prefix("SN:") {
            let value = value.trim_end_matches(['\n', '\r']);
            if !value.is_empty() {
                name = Some(value);
            }
        }
    }

    name.ok_or_else(|| ParseError::MissingName {
        line: line.trim_end().to_string(),
    })
}
