//! 需求驅動器：排序需求、逐筆呼叫解析器、執行結轉（SPEC_FULL §4.2）

use mrp_core::{DemandTrace, InputTables, PlannedOrder, Result, SolverConfig};

use crate::bucketing::HorizonCalculator;
use crate::resolver::{resolve, IndexedTables, SolveState};
use crate::rollup::RollupCalculator;

/// `run_solver` 的完整輸出（SPEC_FULL §6 Result shape）。
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub planned_orders: Vec<PlannedOrder>,
    pub mrp: std::collections::HashMap<String, std::collections::BTreeMap<chrono::NaiveDate, mrp_core::MrpBucket>>,
    pub trace: Vec<DemandTrace>,
    pub system_logs: Vec<String>,
    pub summary: SolverSummary,
    pub run_id: uuid::Uuid,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SolverSummary {
    pub total_planned_orders: usize,
}

/// MRP 求解器：本 crate 的主要對外入口。
pub struct MrpCalculator;

impl MrpCalculator {
    /// 對 `tables` 執行一次完整求解（SPEC_FULL §4.1–§4.3）。
    pub fn solve(tables: &InputTables, config: &SolverConfig) -> Result<SolverResult> {
        let run_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("mrp_solve", run_id = %run_id);
        let _enter = span.enter();

        let mrp_dates = HorizonCalculator::mrp_dates(config);
        let capacity_dates = HorizonCalculator::capacity_dates(config);
        let horizon_start = *mrp_dates.first().expect("mrp_dates 永遠至少含起始日");
        let horizon_end = *mrp_dates.last().expect("mrp_dates 永遠至少含起始日");

        let indexed = IndexedTables::build(tables);
        let mut state = SolveState::new(horizon_start, horizon_end);

        state.log_info(format!(
            "開始求解：需求 {} 筆，物料 {} 筆，is_constrained={}，build_ahead={}",
            tables.demand.len(),
            tables.items.len(),
            config.is_constrained,
            config.build_ahead
        ));

        // 播種三個帳本的初始容量
        for resource in &tables.resource_master {
            let daily_hours = resource.daily_hours();
            for &date in &capacity_dates {
                state.resource_cap.init_day(resource.resource_id.clone(), date, daily_hours);
            }
        }
        for supplier in &tables.supplier_master {
            for &date in &capacity_dates {
                state.supplier_cap.init_day(
                    supplier.display_name(),
                    supplier.item_id.clone(),
                    date,
                    supplier.supplier_capacity_per_day,
                );
            }
        }

        // 播種 TransientStock 與 t=0 的三個初始流入
        for supply in &tables.supplies {
            state.stock.seed(supply.item_id.clone(), supply.initial_transient_stock());
            if let Some(bucket) = state.bucket_mut(&supply.item_id, horizon_start) {
                bucket.inflow_onhand += supply.initial_onhand();
                bucket.inflow_wip += supply.initial_wip();
                bucket.inflow_supplier += supply.initial_supplier_stock();
            }
        }

        state.log_info(format!(
            "帳本初始化完成：{} 個資源產能帳本，{} 個供應商產能帳本",
            tables.resource_master.len(),
            tables.supplier_master.len()
        ));

        // 依 (priority, due_date) 排序需求
        let mut demand = tables.demand.iter().collect::<Vec<_>>();
        demand.sort_by(|a, b| {
            a.demand_priority
                .cmp(&b.demand_priority)
                .then(a.due_date.cmp(&b.due_date))
        });

        state.log_info(format!("需求驅動器開始：依優先序逐筆解析 {} 筆需求", demand.len()));

        let mut trace = Vec::with_capacity(demand.len());
        for row in demand {
            state.log_debug(format!(
                "解析需求 {}：物料={} 數量={} 到期={}",
                row.schedule_no, row.item_id, row.demand_qty, row.due_date
            ));

            let mut steps = Vec::new();
            let mut logs = Vec::new();
            let unmet = resolve(
                &mut state,
                &indexed,
                config,
                &row.item_id,
                row.demand_qty,
                row.due_date,
                &mut steps,
                &mut logs,
                true,
                0,
            )?;

            if unmet > rust_decimal::Decimal::ZERO {
                state.log_warn(format!("需求 {} 未能完全滿足，尚欠 {unmet}", row.schedule_no));
            }

            trace.push(DemandTrace {
                order_id: row.schedule_no.clone(),
                item_id: row.item_id.clone(),
                qty: row.demand_qty,
                due: row.due_date,
                steps,
                logs,
            });
        }

        state.log_info("需求驅動器結束，開始庫存結轉");

        RollupCalculator::run(&mut state.mrp);

        state.log_info("庫存結轉完成");

        for order in state.planned_orders.iter_mut() {
            order.qty = order.qty.round_dp(4);
        }

        let summary = SolverSummary {
            total_planned_orders: state.planned_orders.len(),
        };

        state.log_info(format!("求解完成：共產生 {} 筆計劃訂單", summary.total_planned_orders));

        let SolveState {
            mrp,
            planned_orders,
            system_logs,
            ..
        } = state;

        Ok(SolverResult {
            planned_orders,
            mrp,
            trace,
            system_logs,
            summary,
            run_id,
        })
    }
}
