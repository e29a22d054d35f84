/// Binary trading recommendation carried by each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
}

impl Signal {
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Signal::Buy => "↑",
            Signal::Sell => "↓",
        }
    }
}
