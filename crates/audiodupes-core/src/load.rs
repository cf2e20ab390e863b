use std::io::Read;

use crate::error::{ReportError, Result};
use crate::models::AssetRecord;

/// Read the whole input and parse it as a JSON array of asset records.
///
/// Anything other than a top-level array of objects is an
/// [`ReportError::InvalidInput`] or [`ReportError::NotARecord`]; nothing is
/// returned for partial input.
pub fn load_assets<R: Read>(mut reader: R) -> Result<Vec<AssetRecord>> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_assets(&raw)
}

pub fn parse_assets(raw: &str) -> Result<Vec<AssetRecord>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(ReportError::InvalidInput)?;

    // Derived struct deserializers also accept sequences, so check shape first.
    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_object() {
            return Err(ReportError::NotARecord(index));
        }
        records.push(serde_json::from_value(value).map_err(ReportError::InvalidInput)?);
    }
    tracing::debug!(records = records.len(), bytes = raw.len(), "loaded asset records");
    Ok(records)
}
