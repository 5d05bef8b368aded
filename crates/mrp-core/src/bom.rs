//! BOM（物料清單）邊

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// 一條 BOM 邊：母件消耗 `qty_per` 份子件。
///
/// BOM 假設為無環圖；輸入若含環，由 resolver 的遞迴深度防護處理
/// （SPEC_FULL §4.1「遞迴防護」）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomEdge {
    pub parent_id: String,
    pub child_id: String,
    pub qty_per: Decimal,
}

impl BomEdge {
    pub fn new(parent_id: impl AsRef<str>, child_id: impl AsRef<str>, qty_per: Decimal) -> Self {
        Self {
            parent_id: Item::canonical_id(parent_id.as_ref()),
            child_id: Item::canonical_id(child_id.as_ref()),
            qty_per,
        }
    }
}
