// Module hub for the parse service: the ParseService struct, its impl, and
// the handler/helper submodules.
use crate::config::settings::EngineSettings;
use shared::models::{BatchSummary, ParsedAmount};

pub mod helpers;
pub mod parse_batch;

/// Order-preserving, best-effort batch front end over
/// [`parse_currency`](crate::data::currency_parser::parse_currency).
///
/// The parser itself is pure and synchronous; this service adds chunked
/// fan-out and a batch summary. Malformed records produce the fallback
/// amount and never interrupt the batch.
pub struct ParseService {
    settings: EngineSettings,
}

impl ParseService {
    pub fn new(settings: EngineSettings) -> Self {
        ParseService { settings }
    }

    pub async fn parse_records(&self, records: Vec<String>) -> (Vec<ParsedAmount>, BatchSummary) {
        tracing::info!(
            records = records.len(),
            chunk_size = self.settings.chunk_size,
            max_parallel_chunks = self.settings.max_parallel_chunks,
            "Parsing record batch"
        );
        let (results, summary) = parse_batch::handle_parse_batch(records, &self.settings).await;
        tracing::info!(total = summary.total, blank = summary.blank, "Batch complete");
        (results, summary)
    }
}
