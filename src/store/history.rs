use crate::model::record::PriceRecord;

/// Retention bound for the price history. Once full, every append
/// evicts the single oldest record.
pub const MAX_HISTORY_LEN: usize = 500;

/// Ordered, bounded tick history. Records keep arrival order; nothing
/// is reordered, deduplicated or keyed by timestamp.
#[derive(Debug, Default)]
pub struct PriceHistory {
    records: Vec<PriceRecord>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(MAX_HISTORY_LEN),
        }
    }

    /// Append one record, evicting from the front when the bound would
    /// be exceeded. The appended record becomes the latest.
    pub fn append(&mut self, record: PriceRecord) {
        self.records.push(record);
        if self.records.len() > MAX_HISTORY_LEN {
            self.records.remove(0);
        }
    }

    /// Drop every record; the latest becomes absent again.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Most recently appended record. Appends only ever land at the
    /// tail and evictions only take the head, so this is always the
    /// newest tick.
    pub fn latest(&self) -> Option<&PriceRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
