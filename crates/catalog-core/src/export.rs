//! # Export Document
//!
//! Read-only projection of the catalog, offered to the user as a download.
//!
//! ```json
//! {
//!   "products": [ ... ],
//!   "exportDate": "2026-10-18T09:30:00.000Z",
//!   "totalCount": 3
//! }
//! ```
//!
//! The timestamp is passed in by the caller so this stays a pure function.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

use crate::types::Product;

/// Snapshot of the product list at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub products: Vec<Product>,

    /// When the export was taken (ISO-8601, millisecond precision, UTC).
    #[serde(serialize_with = "iso_millis")]
    #[ts(as = "String")]
    pub export_date: DateTime<Utc>,

    pub total_count: usize,
}

fn iso_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl ExportDocument {
    pub fn new(products: &[Product], export_date: DateTime<Utc>) -> Self {
        ExportDocument {
            products: products.to_vec(),
            export_date,
            total_count: products.len(),
        }
    }

    /// Download file name, dated by the export day: `products-YYYY-MM-DD.json`.
    pub fn file_name(&self) -> String {
        format!("products-{}.json", self.export_date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductDraft;
    use chrono::TimeZone;

    #[test]
    fn test_export_shape() {
        let products = vec![
            ProductDraft::new("A", 1.0, 1).into_product("1".into(), "€"),
            ProductDraft::new("B", 2.0, 0).into_product("2".into(), "€"),
        ];
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();

        let doc = ExportDocument::new(&products, now);
        assert_eq!(doc.total_count, 2);
        assert_eq!(doc.file_name(), "products-2026-10-18.json");

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["exportDate"], "2026-10-18T09:30:00.000Z");
        assert_eq!(json["totalCount"], 2);
        assert_eq!(json["products"][1]["name"], "B");
    }
}
