//! YAML resource parsing.

use crate::error::ParseError;
use crate::models::resource::Resource;
use std::io::Read;

/// Parse a single YAML document into a `Resource`.
///
/// Kind and name must be present; everything downstream relies on them.
pub fn parse<R: Read>(reader: R) -> Result<Resource, ParseError> {
    let res: Resource = serde_yaml::from_reader(reader)?;
    if res.kind.trim().is_empty() {
        return Err(ParseError::MissingField("kind"));
    }
    if res.name().trim().is_empty() {
        return Err(ParseError::MissingField("metadata.name"));
    }
    Ok(res)
}

/// Convenience wrapper over `parse` for in-memory documents.
pub fn parse_str(s: &str) -> Result<Resource, ParseError> {
    parse(s.as_bytes())
}
