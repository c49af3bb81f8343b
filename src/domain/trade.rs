use {
    chrono::{DateTime, Local},
    strum_macros::{Display, EnumIter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TradeDirection {
    #[strum(to_string = "Покупка")]
    Buy,
    #[strum(to_string = "Продажа")]
    Sell,
}

/// One row of the simulated live trades list. Purely cosmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveTradeEntry {
    pub id: String,
    /// Asset units traded.
    pub amount: f64,
    /// Fiat per asset unit.
    pub rate: f64,
    pub direction: TradeDirection,
    pub timestamp: DateTime<Local>,
}

impl LiveTradeEntry {
    pub fn new(amount: f64, rate: f64, direction: TradeDirection, timestamp: DateTime<Local>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            rate,
            direction,
            timestamp,
        }
    }
}
