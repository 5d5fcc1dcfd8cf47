use super::record::{Record, RecordStatus};

pub trait Logger: Send + Sync {
    fn add(&self, record: Record);
}

/// Forwards every record to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn add(&self, record: Record) {
        let params = serde_json::to_string(&record.params).unwrap_or_default();
        match record.status {
            RecordStatus::Success => tracing::info!(
                record_id = %record.id,
                action = record.action.as_str(),
                params = %params,
                "{}",
                record.title
            ),
            RecordStatus::Error => tracing::error!(
                record_id = %record.id,
                action = record.action.as_str(),
                params = %params,
                "{}",
                record.title
            ),
        }
    }
}

/// Keeps records in memory, newest last.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: std::sync::Mutex<Vec<Record>>,
}

#[cfg(test)]
impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
impl Logger for MemoryLogger {
    fn add(&self, record: Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::RecordAction;

    #[test]
    fn test_memory_logger_keeps_order() {
        let logger = MemoryLogger::new();
        assert!(logger.is_empty());

        logger.add(Record::new(RecordAction::PickupPointValidate, RecordStatus::Error, "first"));
        logger.add(Record::new(RecordAction::PickupPointValidate, RecordStatus::Success, "second"));

        let titles: Vec<String> = logger.records().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_tracing_logger_accepts_records() {
        TracingLogger.add(Record::new(
            RecordAction::PickupPointValidate,
            RecordStatus::Error,
            "title",
        ));
    }
}
