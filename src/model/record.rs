use crate::model::signal::Signal;

/// One streamed price tick. Only `bid` and `timestamp` are guaranteed
/// by wire validation; every other field is carried as delivered and
/// may be absent on any given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub bid: f64,
    pub ask: Option<f64>,
    pub will_go_up: Option<i64>,
    pub earnings: Option<f64>,
    pub operations: Option<u64>,
    pub accuracy: Option<f64>,
    pub timestamp: String,
}

impl PriceRecord {
    /// Arithmetic mean of bid and ask, absent while the tick carries
    /// no ask.
    pub fn mid(&self) -> Option<f64> {
        self.ask.map(|ask| (self.bid + ask) / 2.0)
    }

    /// Recommendation derived from the model indicator: 1 predicts a
    /// rise, anything else (including absent) a fall.
    pub fn signal(&self) -> Signal {
        if self.will_go_up == Some(1) {
            Signal::Buy
        } else {
            Signal::Sell
        }
    }
}
