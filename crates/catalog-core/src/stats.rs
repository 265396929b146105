//! # Stock Statistics
//!
//! Stock classification and the four counters shown above the product table.
//!
//! ```text
//! quantity:   0        1 ..= 5        6 ..
//!             │          │              │
//!             ▼          ▼              ▼
//!        OutOfStock     Low          InStock
//! ```
//!
//! `available` is counted on its own: it is a user flag, not a stock level.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::LOW_STOCK_THRESHOLD;

/// Stock classification of a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Quantity is zero.
    OutOfStock,
    /// Quantity is between 1 and [`LOW_STOCK_THRESHOLD`].
    Low,
    /// Anything above the threshold.
    InStock,
}

impl StockLevel {
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockLevel::OutOfStock,
            q if q <= LOW_STOCK_THRESHOLD => StockLevel::Low,
            _ => StockLevel::InStock,
        }
    }
}

/// Aggregate counters over a product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Number of records.
    pub total: usize,
    /// Records flagged `available`, whatever their quantity.
    pub available: usize,
    /// Records with quantity in `1..=LOW_STOCK_THRESHOLD`.
    pub low_stock: usize,
    /// Records with quantity zero.
    pub out_of_stock: usize,
}

impl CatalogStats {
    /// Computes the counters in a single pass.
    pub fn from_products<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .fold(CatalogStats::default(), |mut stats, product| {
                stats.total += 1;
                if product.available {
                    stats.available += 1;
                }
                match product.stock_level() {
                    StockLevel::OutOfStock => stats.out_of_stock += 1,
                    StockLevel::Low => stats.low_stock += 1,
                    StockLevel::InStock => {}
                }
                stats
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
