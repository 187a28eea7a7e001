use serde::Serialize;

/// Outcome of one conversion run: how many certificates were incorporated
/// and which records were skipped, with a reason each. Built per invocation
/// and returned to the caller; nothing accumulates across runs.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    incorporated: usize,
    skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    /// 1-based position of the record in the input sequence.
    pub index: usize,
    pub reason: String,
}

impl RunReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_incorporated(&mut self) {
        self.incorporated += 1;
    }

    pub fn record_skip(&mut self, index: usize, reason: impl Into<String>) {
        self.skipped.push(SkippedRecord {
            index,
            reason: reason.into(),
        });
    }

    #[must_use]
    pub fn incorporated(&self) -> usize {
        self.incorporated
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}
