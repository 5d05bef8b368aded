//! # MRP
//!
//! 物料需求計劃（MRP）求解器：對外單一入口 [`run_solver`]。

pub use mrp_calc::{MrpCalculator, SolverResult, SolverSummary};
pub use mrp_core::{
    BomEdge, DemandRow, DemandTrace, InfeasibilityReason, InputTables, Item, MakeOrBuy, MrpBucket,
    MrpError, PlannedOrder, PlannedOrderType, Result, ResourceMaster, ResourceRoutingRow,
    RoutingRow, SolverConfig, SupplierRow, SupplyRow, TraceStep,
};
pub use mrp_optimizer::{CapacityPlanner, ConstraintReport};

use chrono::NaiveDate;

/// 單一入口：依 `tables` 與四個純量參數執行一次完整求解（SPEC_FULL §6）。
pub fn run_solver(
    tables: InputTables,
    horizon: u32,
    start_date: NaiveDate,
    is_constrained: bool,
    build_ahead: bool,
) -> Result<SolverResult> {
    let config = SolverConfig::new(horizon, start_date)
        .with_is_constrained(is_constrained)
        .with_build_ahead(build_ahead);
    MrpCalculator::solve(&tables, &config)
}
