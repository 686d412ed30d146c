use crate::Record;

/// Indices of cached rows whose `serves` contains `query`, ignoring case.
///
/// A blank query keeps every row. Only the cached page is consulted.
pub fn filter_serves(rows: &[Record], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, record)| {
            needle.is_empty()
                || record
                    .serves
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
        })
        .map(|(index, _)| index)
        .collect()
}
