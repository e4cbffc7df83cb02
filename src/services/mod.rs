pub mod answer_collector;
pub mod form_exporter;

pub use answer_collector::{AnswerCollector, CollectSummary};
pub use form_exporter::FormExporter;
