use serde::de::DeserializeOwned;
use serde_json::Value;

/// A JSON array parsed one element at a time.
#[derive(Debug)]
pub struct Records<T> {
    pub items: Vec<T>,
    /// Elements that did not deserialize as `T`, with their error.
    pub skipped: Vec<(usize, serde_json::Error)>,
}

/// Parses a JSON array of records, keeping every element that deserializes
/// and setting the others aside. Fails only when `raw` is not a JSON array.
pub fn parse_records<T: DeserializeOwned>(raw: &[u8]) -> Result<Records<T>, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_slice(raw)?;
    let mut items = Vec::with_capacity(values.len());
    let mut skipped = Vec::new();
    for (idx, value) in values.into_iter().enumerate() {
        match serde_json::from_value(value) {
            Ok(item) => items.push(item),
            Err(e) => skipped.push((idx, e)),
        }
    }
    Ok(Records { items, skipped })
}
