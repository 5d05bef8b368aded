//! 計劃訂單與 MRP 帳冊輸出模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 計劃訂單類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlannedOrderType {
    Purchase,
    Production,
}

impl PlannedOrderType {
    /// 輸出 id 所使用的前綴："PO" 給生產訂單，"PUR" 給採購訂單。
    pub fn id_prefix(&self) -> &'static str {
        match self {
            PlannedOrderType::Production => "PO",
            PlannedOrderType::Purchase => "PUR",
        }
    }
}

/// 求解器產出的一筆計劃訂單。
///
/// `id` 依 SPEC_FULL §6 格式化為 `"PO-<item>-<index>"` 或
/// `"PUR-<item>-<index>"`，`index` 為訂單產生當下 `planned_orders` 的長度。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedOrder {
    pub id: String,
    pub item_id: String,
    pub qty: Decimal,
    pub order_type: PlannedOrderType,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    /// 生產訂單固定為 "Internal"；採購訂單為供應商顯示名稱。
    pub supplier: String,
    pub lt_days: i64,
    /// 受限產能排程時命中的資源代碼（僅生產訂單可能有值）。
    pub resource_id: Option<String>,
}

impl PlannedOrder {
    pub fn production(
        next_index: usize,
        item_id: impl Into<String>,
        qty: Decimal,
        start: NaiveDate,
        finish: NaiveDate,
        lt_days: i64,
        resource_id: Option<String>,
    ) -> Self {
        let item_id = item_id.into();
        Self {
            id: format!("PO-{}-{}", item_id, next_index),
            item_id,
            qty,
            order_type: PlannedOrderType::Production,
            start,
            finish,
            supplier: "Internal".to_string(),
            lt_days,
            resource_id,
        }
    }

    pub fn purchase(
        next_index: usize,
        item_id: impl Into<String>,
        qty: Decimal,
        start: NaiveDate,
        finish: NaiveDate,
        lt_days: i64,
        supplier: impl Into<String>,
    ) -> Self {
        let item_id = item_id.into();
        Self {
            id: format!("PUR-{}-{}", item_id, next_index),
            item_id,
            qty,
            order_type: PlannedOrderType::Purchase,
            start,
            finish,
            supplier: supplier.into(),
            lt_days,
            resource_id: None,
        }
    }

    pub fn is_purchase(&self) -> bool {
        self.order_type == PlannedOrderType::Purchase
    }

    pub fn is_production(&self) -> bool {
        self.order_type == PlannedOrderType::Production
    }
}

/// 單一物料、單一日期的 MRP 帳冊欄位（SPEC_FULL §3）。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MrpBucket {
    pub starting_stock: Decimal,
    pub inflow_supplier: Decimal,
    pub inflow_wip: Decimal,
    pub inflow_onhand: Decimal,
    pub inflow_fresh: Decimal,
    pub outflow_dep: Decimal,
    pub outflow_direct: Decimal,
    pub ending_stock: Decimal,
    pub shortage: Decimal,
}

impl MrpBucket {
    /// 將所有欄位四捨五入至 4 位小數（SPEC_FULL §4.3、§9）。
    pub fn round_dp4(&mut self) {
        self.starting_stock = self.starting_stock.round_dp(4);
        self.inflow_supplier = self.inflow_supplier.round_dp(4);
        self.inflow_wip = self.inflow_wip.round_dp(4);
        self.inflow_onhand = self.inflow_onhand.round_dp(4);
        self.inflow_fresh = self.inflow_fresh.round_dp(4);
        self.outflow_dep = self.outflow_dep.round_dp(4);
        self.outflow_direct = self.outflow_direct.round_dp(4);
        self.ending_stock = self.ending_stock.round_dp(4);
        self.shortage = self.shortage.round_dp(4);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_id_uses_po_prefix_and_index() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let order = PlannedOrder::production(3, "P", Decimal::from(5), d, d, 0, None);
        assert_eq!(order.id, "PO-P-3");
        assert!(order.is_production());
    }

    #[test]
    fn purchase_id_uses_pur_prefix_and_index() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 29).unwrap();
        let finish = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let order = PlannedOrder::purchase(0, "X", Decimal::from(70), start, finish, 3, "Acme");
        assert_eq!(order.id, "PUR-X-0");
        assert!(order.is_purchase());
        assert_eq!(order.supplier, "Acme");
    }

    #[test]
    fn round_dp4_rounds_every_field() {
        let mut bucket = MrpBucket {
            starting_stock: Decimal::new(123456, 4), // 12.3456
            ..Default::default()
        };
        bucket.ending_stock = Decimal::new(1, 5); // 0.00001
        bucket.round_dp4();
        assert_eq!(bucket.starting_stock, Decimal::new(123456, 4));
        assert!(bucket.ending_stock.is_zero());
    }
}
