//! 供應商主檔

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 一筆「物料—供應商」關係。
///
/// 容量、交期、批量等欄位在輸入缺省時套用 SPEC_FULL §7.3 所列預設值；
/// 由呼叫端在建構時以 `Default`／builder 方法套用，而非在求解時才做數值強制轉型。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRow {
    pub item_id: String,
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
    /// 該供應商承擔每筆需求的比例，預設 1.0
    pub share_percent: Decimal,
    /// 交期天數，預設 7
    pub leadtime_days: i64,
    /// 每日容量，預設 999,999（視同無限）
    pub supplier_capacity_per_day: Decimal,
    /// 最小訂購量；≤0 表示不適用批量規則
    pub supplier_lot_size: Decimal,
    /// 批量遞增量；0 表示不遞增（訂購量只能等於批量本身）
    pub supplier_lot_increment: Decimal,
}

impl SupplierRow {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            supplier_id: None,
            supplier_name: None,
            share_percent: Decimal::ONE,
            leadtime_days: 7,
            supplier_capacity_per_day: Decimal::from(999_999),
            supplier_lot_size: Decimal::ZERO,
            supplier_lot_increment: Decimal::ZERO,
        }
    }

    pub fn with_supplier_id(mut self, id: impl Into<String>) -> Self {
        self.supplier_id = Some(id.into());
        self
    }

    pub fn with_supplier_name(mut self, name: impl Into<String>) -> Self {
        self.supplier_name = Some(name.into());
        self
    }

    pub fn with_share_percent(mut self, share: Decimal) -> Self {
        self.share_percent = share;
        self
    }

    pub fn with_leadtime_days(mut self, days: i64) -> Self {
        self.leadtime_days = days;
        self
    }

    pub fn with_capacity_per_day(mut self, qty: Decimal) -> Self {
        self.supplier_capacity_per_day = qty;
        self
    }

    pub fn with_lot_size(mut self, lot_size: Decimal, lot_increment: Decimal) -> Self {
        self.supplier_lot_size = lot_size;
        self.supplier_lot_increment = lot_increment;
        self
    }

    /// 計畫訂單與容量帳本上顯示用的供應商名稱：優先使用 `supplier_name`，
    /// 其次 `supplier_id`，皆缺則回傳 "Unknown"。
    pub fn display_name(&self) -> String {
        self.supplier_name
            .clone()
            .or_else(|| self.supplier_id.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// `SupplierCap` 帳本的鍵：供應商識別（名稱或代碼）與物料代碼的組合。
    pub fn capacity_key(&self) -> String {
        self.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name_over_id() {
        let s = SupplierRow::new("X")
            .with_supplier_id("SUP-1")
            .with_supplier_name("Acme");
        assert_eq!(s.display_name(), "Acme");
    }

    #[test]
    fn display_name_falls_back_to_unknown() {
        let s = SupplierRow::new("X");
        assert_eq!(s.display_name(), "Unknown");
    }

    #[test]
    fn defaults_match_spec() {
        let s = SupplierRow::new("X");
        assert_eq!(s.share_percent, Decimal::ONE);
        assert_eq!(s.leadtime_days, 7);
        assert_eq!(s.supplier_capacity_per_day, Decimal::from(999_999));
    }
}
