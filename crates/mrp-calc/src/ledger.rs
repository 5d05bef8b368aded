//! 求解期間被解析器變更的三個暫態帳本

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// 物料現有庫存／在製／供應商庫存合計（SPEC_FULL §3 `TransientStock`）。
///
/// 求解開始時以 `onhand + wip + supplier_stock` 播種；解析過程中因庫存消耗而遞減，
/// 因批量規則超量採購而遞增。
#[derive(Debug, Clone, Default)]
pub struct TransientStock {
    balances: HashMap<String, Decimal>,
}

impl TransientStock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&mut self, item_id: impl Into<String>, qty: Decimal) {
        self.balances.insert(item_id.into(), qty.max(Decimal::ZERO));
    }

    pub fn available(&self, item_id: &str) -> Decimal {
        self.balances.get(item_id).copied().unwrap_or(Decimal::ZERO)
    }

    /// 消耗至多 `requested`，回傳實際消耗量（`min(requested, available)`）。
    pub fn consume(&mut self, item_id: &str, requested: Decimal) -> Decimal {
        let avail = self.available(item_id);
        let consumed = requested.min(avail).max(Decimal::ZERO);
        if consumed > Decimal::ZERO {
            self.balances.insert(item_id.to_string(), avail - consumed);
        }
        consumed
    }

    /// 批量採購超量回補庫存（解析過程中唯一能使庫存增加的路徑）。
    pub fn credit(&mut self, item_id: impl Into<String>, qty: Decimal) {
        if qty <= Decimal::ZERO {
            return;
        }
        let item_id = item_id.into();
        let current = self.available(&item_id);
        self.balances.insert(item_id, current + qty);
    }
}

/// 資源每日可用工時帳本（SPEC_FULL §3 `ResourceCap`）。
#[derive(Debug, Clone, Default)]
pub struct ResourceCapacityLedger {
    hours: HashMap<(String, NaiveDate), Decimal>,
}

impl ResourceCapacityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_day(&mut self, resource_id: impl Into<String>, date: NaiveDate, daily_hours: Decimal) {
        self.hours.insert((resource_id.into(), date), daily_hours.max(Decimal::ZERO));
    }

    pub fn available(&self, resource_id: &str, date: NaiveDate) -> Decimal {
        self.hours.get(&(resource_id.to_string(), date)).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn commit(&mut self, resource_id: &str, date: NaiveDate, hours: Decimal) {
        let avail = self.available(resource_id, date);
        self.hours.insert((resource_id.to_string(), date), (avail - hours).max(Decimal::ZERO));
    }
}

/// 供應商×物料每日可用容量帳本（SPEC_FULL §3 `SupplierCap`）。
#[derive(Debug, Clone, Default)]
pub struct SupplierCapacityLedger {
    units: HashMap<(String, String, NaiveDate), Decimal>,
}

impl SupplierCapacityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_day(
        &mut self,
        supplier_key: impl Into<String>,
        item_id: impl Into<String>,
        date: NaiveDate,
        daily_capacity: Decimal,
    ) {
        self.units
            .insert((supplier_key.into(), item_id.into(), date), daily_capacity.max(Decimal::ZERO));
    }

    pub fn available(&self, supplier_key: &str, item_id: &str, date: NaiveDate) -> Decimal {
        self.units
            .get(&(supplier_key.to_string(), item_id.to_string(), date))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn commit(&mut self, supplier_key: &str, item_id: &str, date: NaiveDate, qty: Decimal) {
        let avail = self.available(supplier_key, item_id, date);
        self.units.insert(
            (supplier_key.to_string(), item_id.to_string(), date),
            (avail - qty).max(Decimal::ZERO),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn transient_stock_consume_is_bounded_by_available() {
        let mut stock = TransientStock::new();
        stock.seed("X", Decimal::from(10));
        assert_eq!(stock.consume("X", Decimal::from(15)), Decimal::from(10));
        assert_eq!(stock.available("X"), Decimal::ZERO);
    }

    #[test]
    fn transient_stock_credit_increases_available() {
        let mut stock = TransientStock::new();
        stock.seed("X", Decimal::from(5));
        stock.credit("X", Decimal::from(3));
        assert_eq!(stock.available("X"), Decimal::from(8));
    }

    #[test]
    fn resource_capacity_commit_never_goes_negative() {
        let mut ledger = ResourceCapacityLedger::new();
        ledger.init_day("R", date(2026, 1, 1), Decimal::from(8));
        ledger.commit("R", date(2026, 1, 1), Decimal::from(20));
        assert_eq!(ledger.available("R", date(2026, 1, 1)), Decimal::ZERO);
    }

    #[test]
    fn supplier_capacity_is_keyed_by_supplier_item_and_date() {
        let mut ledger = SupplierCapacityLedger::new();
        ledger.init_day("Acme", "X", date(2026, 1, 1), Decimal::from(1000));
        ledger.commit("Acme", "X", date(2026, 1, 1), Decimal::from(70));
        assert_eq!(ledger.available("Acme", "X", date(2026, 1, 1)), Decimal::from(930));
        assert_eq!(ledger.available("Other", "X", date(2026, 1, 1)), Decimal::ZERO);
    }
}
