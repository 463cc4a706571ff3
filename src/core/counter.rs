use crate::domain::model::JobRecord;

/// Case-insensitive count of whitespace-separated tokens equal to `word`
/// across every field value of every record. Substrings inside larger
/// tokens do not count.
pub fn count_occurrences(records: &[JobRecord], word: &str) -> usize {
    let needle = word.to_lowercase();
    records
        .iter()
        .flat_map(|job| job.fields.values())
        .flat_map(|value| value.split_whitespace())
        .filter(|token| token.to_lowercase() == needle)
        .count()
}
