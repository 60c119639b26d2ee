//! # Analytics Aggregator
//!
//! Daily summary figures for the admin dashboard, computed as a single pass
//! over the orders created on one local calendar day.
//!
//! [`aggregate`] is pure. It does not care about the order of its input: money
//! is summed as `Decimal`, ties between items go to the smallest item id, and
//! an item's display name comes from its earliest order line. Sums saturate at
//! `Decimal::MAX` rather than overflow.

use crate::clients::OrderClient;
use crate::model::{MenuItemId, Order, OrderId};
use crate::order_actor::{OrderError, OrderStatus};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Accumulated sales of one menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStats {
    pub item_id: MenuItemId,
    pub name: String,
    pub quantity: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub day: NaiveDate,
    /// Sum of `totalPrice` over `Completed` orders only.
    pub total_revenue: Decimal,
    /// Every order of the day, whatever its status.
    pub total_orders: usize,
    pub top_selling: Option<ItemStats>,
    pub most_profitable: Option<ItemStats>,
}

/// First valid instant of `day` in `tz`.
///
/// Midnight normally. When midnight does not exist locally (a DST gap), the
/// first valid whole hour of the day is used instead.
fn local_midnight<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    (0..24)
        .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|instant| instant.with_timezone(&Utc))
        .unwrap_or_else(|| day.and_time(NaiveTime::default()).and_utc())
}

/// The half-open window `[start, end)` covering `day` in `tz`.
pub fn day_bounds<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_midnight(day, tz);
    let end = match day.succ_opt() {
        Some(next) => local_midnight(next, tz),
        None => DateTime::<Utc>::MAX_UTC,
    };
    (start, end)
}

struct Accumulator {
    name: String,
    name_source: (DateTime<Utc>, OrderId),
    quantity: u64,
    revenue: Decimal,
}

/// Reduces `orders` to the summary for `day`. Orders outside the day are ignored.
pub fn aggregate<Tz: TimeZone>(orders: &[Order], day: NaiveDate, tz: &Tz) -> DailySummary {
    let (start, end) = day_bounds(day, tz);

    let mut total_revenue = Decimal::ZERO;
    let mut total_orders = 0;
    let mut items: BTreeMap<MenuItemId, Accumulator> = BTreeMap::new();

    for order in orders
        .iter()
        .filter(|o| o.created_at >= start && o.created_at < end)
    {
        total_orders += 1;
        if order.status == OrderStatus::Completed {
            total_revenue = total_revenue.saturating_add(order.total_price);
        }

        let source = (order.created_at, order.id.clone());
        for line in &order.items {
            let acc = items
                .entry(line.item_id.clone())
                .or_insert_with(|| Accumulator {
                    name: line.name.clone(),
                    name_source: source.clone(),
                    quantity: 0,
                    revenue: Decimal::ZERO,
                });
            if source < acc.name_source {
                acc.name = line.name.clone();
                acc.name_source = source.clone();
            }
            acc.quantity = acc.quantity.saturating_add(u64::from(line.quantity));
            let subtotal = line.subtotal().unwrap_or(Decimal::MAX);
            acc.revenue = acc.revenue.saturating_add(subtotal);
        }
    }

    let stats: Vec<ItemStats> = items
        .into_iter()
        .map(|(item_id, acc)| ItemStats {
            item_id,
            name: acc.name,
            quantity: acc.quantity,
            revenue: acc.revenue,
        })
        .collect();

    DailySummary {
        day,
        total_revenue,
        total_orders,
        top_selling: leader(&stats, |s| s.quantity),
        most_profitable: leader(&stats, |s| s.revenue),
    }
}

/// Highest `key`; on a tie the first entry wins, and `stats` is in id order.
fn leader<K: PartialOrd>(stats: &[ItemStats], key: impl Fn(&ItemStats) -> K) -> Option<ItemStats> {
    let mut best: Option<&ItemStats> = None;
    for candidate in stats {
        match best {
            Some(current) if key(candidate) <= key(current) => {}
            _ => best = Some(candidate),
        }
    }
    best.cloned()
}

/// Fetches the orders created on `day` and aggregates them.
#[instrument(skip(orders, tz))]
pub async fn summarize_day<Tz: TimeZone>(
    orders: &OrderClient,
    day: NaiveDate,
    tz: &Tz,
) -> Result<DailySummary, OrderError> {
    let (start, end) = day_bounds(day, tz);
    let todays = orders.orders_created_between(start, end).await?;
    let summary = aggregate(&todays, day, tz);
    debug!(
        orders = summary.total_orders,
        revenue = %summary.total_revenue,
        "Daily summary computed"
    );
    Ok(summary)
}
