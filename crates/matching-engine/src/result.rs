//! Result of a single matching call

use rust_decimal::Decimal;

use crate::events::{BookEvent, OrderFill, Trade};

/// Everything one matching call produced, in emission order.
///
/// The event list is atomic with respect to the book: it is built while the
/// book guard is held, so a consumer never observes a partial matching
/// operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    /// Trades and fills exactly as emitted
    pub events: Vec<BookEvent>,
}

impl MatchOutcome {
    pub(crate) fn push(&mut self, event: BookEvent) {
        self.events.push(event);
    }

    /// The trades, in emission order
    pub fn trades(&self) -> Vec<&Trade> {
        self.events
            .iter()
            .filter_map(|event| match event {
                BookEvent::Trade(trade) => Some(trade),
                BookEvent::Fill(_) => None,
            })
            .collect()
    }

    /// The fills, in emission order
    pub fn fills(&self) -> Vec<&OrderFill> {
        self.events
            .iter()
            .filter_map(|event| match event {
                BookEvent::Fill(fill) => Some(fill),
                BookEvent::Trade(_) => None,
            })
            .collect()
    }

    /// Check if any trades were generated
    pub fn has_trades(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, BookEvent::Trade(_)))
    }

    /// Total quantity executed across all trades
    pub fn executed_quantity(&self) -> Decimal {
        self.trades().iter().map(|trade| trade.quantity).sum()
    }
}
