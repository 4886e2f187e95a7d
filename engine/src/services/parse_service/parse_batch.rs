// Handler for batch parsing: chunked fan-out over blocking tasks,
// reassembled in input order.
use super::helpers;
use crate::config::settings::EngineSettings;
use crate::data::currency_parser::parse_currency;
use chrono::Utc;
use shared::models::{BatchSummary, ParsedAmount};

pub async fn handle_parse_batch(
    records: Vec<String>,
    settings: &EngineSettings,
) -> (Vec<ParsedAmount>, BatchSummary) {
    let total = records.len();
    let blank = helpers::blank_count(&records);

    let chunk_size = settings.chunk_size.max(1);
    let max_parallel = settings.max_parallel_chunks.max(1);

    let chunks: Vec<Vec<String>> = records
        .chunks(chunk_size)
        .map(|chunk| chunk.to_vec())
        .collect();

    let mut results: Vec<ParsedAmount> = Vec::with_capacity(total);

    // Waves of at most max_parallel chunks. parse_currency is CPU-bound and
    // pure, so each chunk goes to the blocking pool; awaiting handles in
    // spawn order keeps results aligned with the input.
    for wave in chunks.chunks(max_parallel) {
        let handles: Vec<_> = wave
            .iter()
            .map(|chunk| {
                let chunk = chunk.clone();
                tokio::task::spawn_blocking(move || {
                    chunk
                        .iter()
                        .map(|record| parse_currency(record))
                        .collect::<Vec<ParsedAmount>>()
                })
            })
            .collect();

        for (handle, chunk) in handles.into_iter().zip(wave) {
            match handle.await {
                Ok(parsed) => results.extend(parsed),
                Err(err) => {
                    // Record content never panics the parser; a dead task
                    // means the runtime cancelled it. The batch stays
                    // best-effort either way.
                    tracing::error!(error = %err, "Chunk task failed, substituting fallbacks");
                    results.extend(helpers::fallback_chunk(chunk.len()));
                }
            }
        }
    }

    let summary = BatchSummary {
        total,
        blank,
        completed_at: Utc::now(),
    };
    (results, summary)
}
