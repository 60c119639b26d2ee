//! # Stock Ledger
//!
//! [`Stock`] is the only holder of a menu item's available quantity. Its fields
//! are private and every mutation recomputes `in_stock` in the same call, so
//! `in_stock == (count > 0)` holds for every value a reader can observe.

use serde::Serialize;

/// Available quantity of a menu item and its derived availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    count: u32,
    in_stock: bool,
}

/// A debit that the current count cannot cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub requested: u32,
    pub available: u32,
}

impl Stock {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            in_stock: count > 0,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Conditional decrement: applies only when `count >= quantity`.
    ///
    /// Returns the remaining count. On a shortfall the ledger is unchanged.
    pub fn try_debit(&mut self, quantity: u32) -> Result<u32, Shortfall> {
        if self.count < quantity {
            return Err(Shortfall {
                requested: quantity,
                available: self.count,
            });
        }
        self.set(self.count - quantity);
        Ok(self.count)
    }

    /// Returns units to the ledger, saturating at `u32::MAX`.
    pub fn credit(&mut self, quantity: u32) -> u32 {
        self.set(self.count.saturating_add(quantity));
        self.count
    }

    /// Overwrites the count (admin edit).
    pub fn set(&mut self, count: u32) {
        self.count = count;
        self.in_stock = count > 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_availability() {
        assert!(Stock::new(3).in_stock());
        assert!(!Stock::new(0).in_stock());
    }

    #[test]
    fn test_debit_to_zero_clears_in_stock() {
        let mut stock = Stock::new(5);
        assert_eq!(stock.try_debit(5), Ok(0));
        assert_eq!(stock.count(), 0);
        assert!(!stock.in_stock());
    }

    #[test]
    fn test_shortfall_leaves_ledger_untouched() {
        let mut stock = Stock::new(2);
        assert_eq!(
            stock.try_debit(3),
            Err(Shortfall {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(stock, Stock::new(2));
    }

    #[test]
    fn test_credit_restores_availability() {
        let mut stock = Stock::new(0);
        assert_eq!(stock.credit(4), 4);
        assert!(stock.in_stock());
        assert_eq!(Stock::new(u32::MAX).credit(1), u32::MAX);
    }

    #[test]
    fn test_invariant_holds_after_every_write() {
        let mut stock = Stock::new(1);
        let writes: [&dyn Fn(&mut Stock); 5] = [
            &|s| {
                let _ = s.try_debit(1);
            },
            &|s| {
                let _ = s.try_debit(1);
            },
            &|s| {
                s.credit(2);
            },
            &|s| s.set(0),
            &|s| s.set(9),
        ];
        for write in writes {
            write(&mut stock);
            assert_eq!(stock.in_stock(), stock.count() > 0);
        }
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let json = serde_json::to_value(Stock::new(0)).unwrap();
        assert_eq!(json, serde_json::json!({ "count": 0, "inStock": false }));
    }
}
