//! 期初供應（庫存／在製／供應商庫存）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 一筆物料的期初供應快照：現成品庫存、在製品、供應商端庫存，
/// 以及重工品數量（加總計入現成品庫存）。
///
/// `initial_onhand + initial_wip + initial_supplier_stock` 構成求解起始時的
/// `TransientStock`（SPEC_FULL §3）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyRow {
    pub item_id: String,
    pub fg_on_hand: Decimal,
    pub wip: Decimal,
    pub supplier_stock: Decimal,
    pub rework: Vec<Decimal>,
}

impl SupplyRow {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            fg_on_hand: Decimal::ZERO,
            wip: Decimal::ZERO,
            supplier_stock: Decimal::ZERO,
            rework: Vec::new(),
        }
    }

    pub fn with_fg_on_hand(mut self, qty: Decimal) -> Self {
        self.fg_on_hand = qty;
        self
    }

    pub fn with_wip(mut self, qty: Decimal) -> Self {
        self.wip = qty;
        self
    }

    pub fn with_supplier_stock(mut self, qty: Decimal) -> Self {
        self.supplier_stock = qty;
        self
    }

    pub fn with_rework(mut self, qty: Decimal) -> Self {
        self.rework.push(qty);
        self
    }

    pub fn initial_onhand(&self) -> Decimal {
        self.fg_on_hand + self.rework.iter().sum::<Decimal>()
    }

    pub fn initial_wip(&self) -> Decimal {
        self.wip
    }

    pub fn initial_supplier_stock(&self) -> Decimal {
        self.supplier_stock
    }

    /// 三者之和，作為求解起始時的 `TransientStock` 值。
    pub fn initial_transient_stock(&self) -> Decimal {
        self.initial_onhand() + self.initial_wip() + self.initial_supplier_stock()
    }
}
