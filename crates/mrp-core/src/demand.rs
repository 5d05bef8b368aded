//! 需求模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 需求預設優先序（數字越小優先序越高；缺省值為最低優先）
pub const DEFAULT_DEMAND_PRIORITY: i64 = 999;

/// 一筆頂層需求（銷售訂單 / 預測等）。
///
/// BOM 展開所產生的相依需求不會建立 `DemandRow`；它們是 resolver 遞迴呼叫的
/// 參數（`is_direct = false`），不會出現在需求驅動器排序的列表中
/// （SPEC_FULL §4.1、§4.2）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandRow {
    pub schedule_no: String,
    pub item_id: String,
    pub demand_qty: Decimal,
    pub due_date: NaiveDate,
    pub demand_priority: i64,
}

impl DemandRow {
    pub fn new(
        schedule_no: impl Into<String>,
        item_id: impl AsRef<str>,
        demand_qty: Decimal,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            schedule_no: schedule_no.into(),
            item_id: crate::item::Item::canonical_id(item_id.as_ref()),
            demand_qty,
            due_date,
            demand_priority: DEFAULT_DEMAND_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.demand_priority = priority;
        self
    }
}
