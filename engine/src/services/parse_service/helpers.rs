// Helper functions for the parse service handlers.
use shared::models::ParsedAmount;

/// Count records that are empty after trimming. The parser maps these to
/// the fallback like any other empty input; the count is the only shape
/// signal the batch surfaces, since the parse result itself does not
/// distinguish a fallback from a legitimate zero.
pub fn blank_count(records: &[String]) -> usize {
    records.iter().filter(|record| record.trim().is_empty()).count()
}

/// A run of fallback results standing in for a chunk whose task died.
/// Keeps the batch best-effort and the output aligned with the input.
pub fn fallback_chunk(len: usize) -> Vec<ParsedAmount> {
    vec![ParsedAmount::fallback(); len]
}
