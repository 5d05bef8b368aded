//! 逐筆需求的決策軌跡

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 不可行原因（SPEC_FULL §7.2）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfeasibilityReason {
    MissingMasterData,
    RcaLeadTimeViolation,
    CapacityBottleneck,
    SupplierCapacityShortage,
    /// 防護性遞迴深度上限，補充原規格未涵蓋的情況（SPEC_FULL §4.1、§9）。
    RecursionLimitExceeded,
}

impl InfeasibilityReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfeasibilityReason::MissingMasterData => "Missing Master Data",
            InfeasibilityReason::RcaLeadTimeViolation => "RCA Lead Time Violation",
            InfeasibilityReason::CapacityBottleneck => "Capacity Bottleneck",
            InfeasibilityReason::SupplierCapacityShortage => "Supplier Capacity Shortage",
            InfeasibilityReason::RecursionLimitExceeded => "Recursion Limit Exceeded",
        }
    }
}

/// resolver 在處理單筆需求／BOM 展開呼叫時記錄的單一步驟。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    /// "Stock" | "Production" | "Purchase" | "Infeasible"
    pub action: String,
    pub item_id: String,
    pub qty: Option<Decimal>,
    pub resource_id: Option<String>,
    pub supplier: Option<String>,
    pub date: Option<NaiveDate>,
    pub reason: Option<InfeasibilityReason>,
    /// `RcaLeadTimeViolation` 時，記錄本應開始生產／下單卻早於模擬起始日的日期。
    pub needed_start: Option<NaiveDate>,
}

impl TraceStep {
    pub fn stock(item_id: impl Into<String>, qty: Decimal) -> Self {
        Self {
            action: "Stock".to_string(),
            item_id: item_id.into(),
            qty: Some(qty),
            resource_id: None,
            supplier: None,
            date: None,
            reason: None,
            needed_start: None,
        }
    }

    pub fn production(
        item_id: impl Into<String>,
        qty: Decimal,
        date: NaiveDate,
        resource_id: Option<String>,
    ) -> Self {
        Self {
            action: "Production".to_string(),
            item_id: item_id.into(),
            qty: Some(qty),
            resource_id,
            supplier: None,
            date: Some(date),
            reason: None,
            needed_start: None,
        }
    }

    pub fn purchase(
        item_id: impl Into<String>,
        qty: Decimal,
        date: NaiveDate,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            action: "Purchase".to_string(),
            item_id: item_id.into(),
            qty: Some(qty),
            resource_id: None,
            supplier: Some(supplier.into()),
            date: Some(date),
            reason: None,
            needed_start: None,
        }
    }

    pub fn infeasible(item_id: impl Into<String>, reason: InfeasibilityReason) -> Self {
        Self {
            action: "Infeasible".to_string(),
            item_id: item_id.into(),
            qty: None,
            resource_id: None,
            supplier: None,
            date: None,
            reason: Some(reason),
            needed_start: None,
        }
    }

    pub fn with_needed_start(mut self, date: NaiveDate) -> Self {
        self.needed_start = Some(date);
        self
    }

    pub fn with_resource(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }
}

/// 一筆頂層需求的完整決策軌跡。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandTrace {
    pub order_id: String,
    pub item_id: String,
    pub qty: Decimal,
    pub due: NaiveDate,
    pub steps: Vec<TraceStep>,
    pub logs: Vec<String>,
}
