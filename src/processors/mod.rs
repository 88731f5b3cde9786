pub mod gps_batch_processor;

pub use gps_batch_processor::{BatchSummary, GpsBatchProcessor, GpsOutcome};
