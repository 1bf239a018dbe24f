//! Core matching algorithm
//!
//! A single matching attempt consumes the incoming order against the
//! opposite side of the book while prices cross, emitting one trade and two
//! fills per crossing, then rests any residual on the order's own side.

use std::collections::BinaryHeap;

use common::{unix_now, FillStatus, Side};
use rust_decimal::Decimal;
use tracing::debug;

use crate::book::{BookSides, RestingEntry};
use crate::events::{BookEvent, OrderFill, Trade};
use crate::order::Order;
use crate::result::MatchOutcome;

impl BookSides {
    /// Consume `order` against the opposite side until it is exhausted or the
    /// best opposite price no longer crosses, then rest any residual.
    ///
    /// Emission order per crossing: the trade, the resting order's fill, the
    /// incoming order's fill. An order that never crossed gets a single `New`
    /// fill and rests untouched. A zero-quantity order is inert.
    pub(crate) fn match_order(&mut self, pair: &str, mut order: Order) -> MatchOutcome {
        let original_quantity = order.quantity;
        let mut outcome = MatchOutcome::default();

        if original_quantity.is_zero() {
            debug!(pair, order_id = %order.id, "ignoring zero-quantity order");
            return outcome;
        }

        match order.side {
            Side::Buy => consume(&mut self.asks, pair, &mut order, &mut outcome),
            Side::Sell => consume(&mut self.bids, pair, &mut order, &mut outcome),
        }

        if order.quantity == original_quantity {
            // Nothing crossed: announce the order as new, then rest it.
            outcome.push(BookEvent::Fill(OrderFill {
                order_id: order.id.clone(),
                pair: pair.to_string(),
                side: order.side,
                origin_quantity: original_quantity,
                executed_quantity: Decimal::ZERO,
                remaining_quantity: original_quantity,
                price: order.price,
                fill_price: Decimal::ZERO,
                status: FillStatus::New,
                timestamp: unix_now(),
            }));
            self.rest(order);
        } else if !order.is_filled() {
            self.rest(order);
        }

        outcome
    }
}

/// Whether the best opposite price still allows a trade.
fn crosses(incoming: &Order, resting: &Order) -> bool {
    match incoming.side {
        Side::Buy => resting.price <= incoming.price,
        Side::Sell => resting.price >= incoming.price,
    }
}

/// Walk the opposite queue in priority order, trading at the resting price.
fn consume<E: RestingEntry>(
    opposite: &mut BinaryHeap<E>,
    pair: &str,
    order: &mut Order,
    outcome: &mut MatchOutcome,
) {
    while !order.is_filled() {
        match opposite.peek() {
            Some(top) if crosses(order, top.order()) => {}
            _ => break,
        }

        let mut resting = match opposite.pop() {
            Some(entry) => entry.into_order(),
            None => break,
        };

        let executed = order.quantity.min(resting.quantity);
        if executed.is_zero() {
            // A zero-quantity resting order cannot trade; discard it.
            continue;
        }

        let execution_price = resting.price;
        let (buy_order_id, sell_order_id) = match order.side {
            Side::Buy => (order.id.clone(), resting.id.clone()),
            Side::Sell => (resting.id.clone(), order.id.clone()),
        };

        order.fill(executed);
        resting.fill(executed);

        debug!(
            pair,
            price = %execution_price,
            quantity = %executed,
            buy_order_id = %buy_order_id,
            sell_order_id = %sell_order_id,
            "trade executed"
        );

        outcome.push(BookEvent::Trade(Trade {
            pair: pair.to_string(),
            buy_order_id,
            sell_order_id,
            price: execution_price,
            quantity: executed,
        }));
        outcome.push(BookEvent::Fill(fill_after_trade(
            pair,
            &resting,
            executed,
            execution_price,
        )));
        outcome.push(BookEvent::Fill(fill_after_trade(
            pair,
            order,
            executed,
            execution_price,
        )));

        if !resting.is_filled() {
            opposite.push(E::from_order(resting));
        }
    }
}

/// Fill event for one party of a trade, built from its post-trade state.
fn fill_after_trade(
    pair: &str,
    order: &Order,
    executed: Decimal,
    execution_price: Decimal,
) -> OrderFill {
    let status = if order.is_filled() {
        FillStatus::Filled
    } else {
        FillStatus::PartiallyFilled
    };

    OrderFill {
        order_id: order.id.clone(),
        pair: pair.to_string(),
        side: order.side,
        origin_quantity: order.quantity + executed,
        executed_quantity: executed,
        remaining_quantity: order.quantity,
        price: execution_price,
        fill_price: execution_price,
        status,
        timestamp: unix_now(),
    }
}
