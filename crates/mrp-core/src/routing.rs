//! 途程（Routing）與資源主檔

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料的標準途程時間，作為自製提前期的替代來源。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingRow {
    pub item_id: String,
    /// 單件加工時間，單位：秒
    pub cycle_time_seconds: Decimal,
}

/// 物料與其生產所需資源的對應，以及單位耗用量。
///
/// `capacity_consumed_per` ≥ 1 視為「秒／件」（除以 3600 轉為小時）；
/// 否則視為「小時／件」。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRoutingRow {
    pub item_id: String,
    pub resource_id: String,
    pub capacity_consumed_per: Decimal,
}

impl ResourceRoutingRow {
    /// 計算生產 `qty` 件所需工時（小時）。
    pub fn needed_hours(&self, qty: Decimal) -> Decimal {
        if self.capacity_consumed_per >= Decimal::ONE {
            (qty * self.capacity_consumed_per) / Decimal::from(3600)
        } else {
            qty * self.capacity_consumed_per
        }
    }
}

/// 資源主檔：每日可用工時 = `daily_capacity` × `no_of_machines`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMaster {
    pub resource_id: String,
    pub daily_capacity: Decimal,
    pub no_of_machines: Decimal,
}

impl ResourceMaster {
    pub fn new(resource_id: impl Into<String>, daily_capacity: Decimal) -> Self {
        Self {
            resource_id: resource_id.into(),
            daily_capacity,
            no_of_machines: Decimal::ONE,
        }
    }

    pub fn with_no_of_machines(mut self, no_of_machines: Decimal) -> Self {
        self.no_of_machines = no_of_machines;
        self
    }

    pub fn daily_hours(&self) -> Decimal {
        self.daily_capacity * self.no_of_machines
    }
}
