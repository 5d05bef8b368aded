//! # MRP Core
//!
//! 核心資料模型與類型定義

pub mod bom;
pub mod config;
pub mod demand;
pub mod item;
pub mod plan;
pub mod routing;
pub mod supplier;
pub mod supply;
pub mod tables;
pub mod trace;

// Re-export 主要類型
pub use bom::BomEdge;
pub use config::SolverConfig;
pub use demand::DemandRow;
pub use item::{Item, MakeOrBuy};
pub use plan::{MrpBucket, PlannedOrder, PlannedOrderType};
pub use routing::{ResourceMaster, ResourceRoutingRow, RoutingRow};
pub use supplier::SupplierRow;
pub use supply::SupplyRow;
pub use tables::InputTables;
pub use trace::{DemandTrace, InfeasibilityReason, TraceStep};

/// MRP 求解器錯誤類型
///
/// 僅涵蓋真正致命的情況；逐筆需求的不可行性記錄在 `TraceStep` 中，
/// 不會以 `Err` 的形式出現（見 SPEC_FULL §4.4、§7）。
#[derive(Debug, thiserror::Error)]
pub enum MrpError {
    #[error("日期運算溢位: {0}")]
    DateArithmetic(String),

    #[error("遞迴深度超出上限: {0}")]
    RecursionLimitExceeded(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MrpError>;
