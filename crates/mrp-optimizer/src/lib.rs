//! # MRP Optimizer
//!
//! 求解結果的事後分析層：產能利用率與不可行性彙總報表。
//!
//! 本 crate 嚴格位於解析器的下游，只讀取 `mrp-calc::SolverResult`，
//! 從不回頭影響已完成的排程決策（SPEC_FULL §2e）。

pub mod capacity;
pub mod constraint;

pub use capacity::CapacityPlanner;
pub use constraint::ConstraintReport;
