//! Core configuration

/// Consolidation configuration
#[derive(Debug, Clone)]
pub struct ConsolidationConfig {
    /// Days until a freshly created invoice is due
    pub invoice_due_days: i64,
}

impl ConsolidationConfig {
    /// Override the invoice due window
    pub fn with_due_days(mut self, days: i64) -> Self {
        self.invoice_due_days = days;
        self
    }
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self { invoice_due_days: 7 }
    }
}
