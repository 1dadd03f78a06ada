//! Ordered log of completed conversions.

use conversion_types::ConversionRecord;

/// Records in completion order. Append-only.
#[derive(Debug, Default)]
pub struct OutputLog {
    records: Vec<ConversionRecord>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
