//! 遞迴解析引擎（SPEC_FULL §4.1）

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use mrp_core::{
    BomEdge, InfeasibilityReason, InputTables, Item, MrpError, PlannedOrder, Result,
    ResourceMaster, ResourceRoutingRow, RoutingRow, SolverConfig, SupplierRow, TraceStep,
};
use rust_decimal::Decimal;

use crate::lead_time::LeadTimeCalculator;
use crate::ledger::{ResourceCapacityLedger, SupplierCapacityLedger, TransientStock};
use crate::lot_sizing::LotSizingCalculator;

/// 從 `InputTables` 預建的索引，避免每次解析都線性掃描整張表。
pub struct IndexedTables<'a> {
    pub items: HashMap<String, &'a Item>,
    pub bom: HashMap<String, Vec<&'a BomEdge>>,
    pub routing: HashMap<String, &'a RoutingRow>,
    pub resource_routing: HashMap<String, &'a ResourceRoutingRow>,
    pub resource_master: HashMap<String, &'a ResourceMaster>,
    /// 每個物料的供應商，已依 `share_percent` 由大到小排序（穩定排序，同分維持輸入順序）。
    pub suppliers: HashMap<String, Vec<&'a SupplierRow>>,
}

impl<'a> IndexedTables<'a> {
    pub fn build(tables: &'a InputTables) -> Self {
        let mut items = HashMap::new();
        for item in &tables.items {
            items.insert(item.item_id.clone(), item);
        }

        let mut bom: HashMap<String, Vec<&BomEdge>> = HashMap::new();
        for edge in &tables.bom {
            bom.entry(edge.parent_id.clone()).or_default().push(edge);
        }

        let mut routing = HashMap::new();
        for row in &tables.routing {
            routing.insert(row.item_id.clone(), row);
        }

        let mut resource_routing = HashMap::new();
        for row in &tables.resource_routing {
            resource_routing.insert(row.item_id.clone(), row);
        }

        let mut resource_master = HashMap::new();
        for row in &tables.resource_master {
            resource_master.insert(row.resource_id.clone(), row);
        }

        let mut suppliers: HashMap<String, Vec<&SupplierRow>> = HashMap::new();
        for row in &tables.supplier_master {
            suppliers.entry(row.item_id.clone()).or_default().push(row);
        }
        for rows in suppliers.values_mut() {
            rows.sort_by(|a, b| b.share_percent.cmp(&a.share_percent));
        }

        Self {
            items,
            bom,
            routing,
            resource_routing,
            resource_master,
            suppliers,
        }
    }
}

/// 單次 `solve` 呼叫所擁有的全部可變狀態：三個帳本、MRP 帳冊、計劃訂單清單。
pub struct SolveState {
    pub mrp: HashMap<String, std::collections::BTreeMap<NaiveDate, mrp_core::MrpBucket>>,
    pub stock: TransientStock,
    pub resource_cap: ResourceCapacityLedger,
    pub supplier_cap: SupplierCapacityLedger,
    pub planned_orders: Vec<PlannedOrder>,
    pub system_logs: Vec<String>,
    horizon_start: NaiveDate,
    horizon_end: NaiveDate,
}

impl SolveState {
    pub fn new(horizon_start: NaiveDate, horizon_end: NaiveDate) -> Self {
        Self {
            mrp: HashMap::new(),
            stock: TransientStock::new(),
            resource_cap: ResourceCapacityLedger::new(),
            supplier_cap: SupplierCapacityLedger::new(),
            planned_orders: Vec::new(),
            system_logs: Vec::new(),
            horizon_start,
            horizon_end,
        }
    }

    fn in_horizon(&self, date: NaiveDate) -> bool {
        date >= self.horizon_start && date <= self.horizon_end
    }

    /// 回傳該物料、該日期的帳冊欄位；若日期超出 MRP 視界則回傳 `None`
    /// （越界的到期日仍驅動 BOM 展開，但不會寫入帳冊，見 SPEC_FULL §4.1）。
    pub fn bucket_mut(&mut self, item_id: &str, date: NaiveDate) -> Option<&mut mrp_core::MrpBucket> {
        if !self.in_horizon(date) {
            return None;
        }
        Some(
            self.mrp
                .entry(item_id.to_string())
                .or_default()
                .entry(date)
                .or_default(),
        )
    }

    /// SPEC_FULL §2a 的「單一內部記錄輔助函式」：同一呼叫點同時寫入 `tracing`
    /// 與 `system_logs`，避免兩個輸出彼此漂移。
    pub fn log_info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.system_logs.push(Self::stamp(message));
    }

    pub fn log_debug(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("{message}");
        self.system_logs.push(Self::stamp(message));
    }

    pub fn log_warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.system_logs.push(Self::stamp(message));
    }

    fn stamp(message: String) -> String {
        format!("[{}] {message}", chrono::Utc::now().to_rfc3339())
    }
}

/// 解析單筆（可能是相依）需求：見 SPEC_FULL §4.1 的有序演算法。回傳未滿足數量。
#[allow(clippy::too_many_arguments)]
pub fn resolve(
    state: &mut SolveState,
    tables: &IndexedTables,
    config: &SolverConfig,
    item_id: &str,
    qty: Decimal,
    due_date: NaiveDate,
    steps: &mut Vec<TraceStep>,
    logs: &mut Vec<String>,
    is_direct: bool,
    depth: usize,
) -> Result<Decimal> {
    if depth > SolverConfig::MAX_RECURSION_DEPTH {
        steps.push(TraceStep::infeasible(item_id, InfeasibilityReason::RecursionLimitExceeded));
        if let Some(bucket) = state.bucket_mut(item_id, due_date) {
            bucket.shortage += qty;
        }
        logs.push(format!("{item_id}: recursion limit exceeded at depth {depth}"));
        return Ok(qty);
    }

    let mut unmet = qty;

    // 1. 記錄流出
    if let Some(bucket) = state.bucket_mut(item_id, due_date) {
        if is_direct {
            bucket.outflow_direct += qty;
        } else {
            bucket.outflow_dep += qty;
        }
    }

    // 2. 主檔查找
    let item = match tables.items.get(item_id) {
        Some(item) => *item,
        None => {
            steps.push(TraceStep::infeasible(item_id, InfeasibilityReason::MissingMasterData));
            if let Some(bucket) = state.bucket_mut(item_id, due_date) {
                bucket.shortage += unmet;
            }
            return Ok(unmet);
        }
    };

    // 3. 庫存消耗
    let consumed = state.stock.consume(item_id, unmet);
    if consumed > Decimal::ZERO {
        steps.push(TraceStep::stock(item_id, consumed));
        unmet -= consumed;
    }
    if unmet <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    // 4. 自製／外購分流
    if item.make_or_buy.is_make() {
        resolve_make(state, tables, config, item, unmet, due_date, steps, logs, depth)
    } else {
        resolve_buy(state, tables, config, item, unmet, due_date, steps, logs)
    }
}

#[allow(clippy::too_many_arguments)]
fn resolve_make(
    state: &mut SolveState,
    tables: &IndexedTables,
    config: &SolverConfig,
    item: &Item,
    unmet: Decimal,
    due_date: NaiveDate,
    steps: &mut Vec<TraceStep>,
    logs: &mut Vec<String>,
    depth: usize,
) -> Result<Decimal> {
    let mut unmet = unmet;
    let item_id = item.item_id.as_str();

    // a. 提前期
    let routing = tables.routing.get(item_id).copied();
    let cycle_seconds = LeadTimeCalculator::resolve_cycle_seconds(routing, item);
    let lt_days = LeadTimeCalculator::make_lead_time_days(unmet, cycle_seconds);

    // b. 所需開始日
    let req_start = due_date
        .checked_sub_signed(Duration::days(lt_days))
        .ok_or_else(|| MrpError::DateArithmetic(format!("{item_id}: due_date 減去 lt_days 溢位")))?;

    if req_start < config.start_date {
        steps.push(
            TraceStep::infeasible(item_id, InfeasibilityReason::RcaLeadTimeViolation)
                .with_needed_start(req_start),
        );
        logs.push(format!("{item_id}: 所需開始日 {req_start} 早於模擬起始日 {}", config.start_date));
    }

    // c. BOM 展開（無論後續產能結果如何，一律執行）
    if let Some(edges) = tables.bom.get(item_id) {
        for edge in edges {
            let child_qty = unmet * edge.qty_per;
            state.log_debug(format!(
                "BOM 展開 depth={depth}：{item_id} -> {} x{} = {child_qty}",
                edge.child_id, edge.qty_per
            ));
            resolve(
                state,
                tables,
                config,
                &edge.child_id,
                child_qty,
                req_start,
                steps,
                logs,
                false,
                depth + 1,
            )?;
        }
    }

    // d/e. 受限產能排程或無限產能
    let resource_routing = tables.resource_routing.get(item_id).copied();
    if let (Some(routing_row), true) = (resource_routing, config.is_constrained) {
        let needed_hours = routing_row.needed_hours(unmet);
        let lookback = config.resource_lookback_days();

        let mut committed_at = None;
        for lb in 0..=lookback {
            let d = match req_start.checked_sub_signed(Duration::days(lb)) {
                Some(d) => d,
                None => break,
            };
            if d < config.start_date {
                break;
            }
            if state.resource_cap.available(&routing_row.resource_id, d) >= needed_hours {
                committed_at = Some(d);
                break;
            }
        }

        if let Some(d) = committed_at {
            state.resource_cap.commit(&routing_row.resource_id, d, needed_hours);
            let lt = (due_date - d).num_days();
            let next_index = state.planned_orders.len();
            state.planned_orders.push(PlannedOrder::production(
                next_index,
                item_id,
                unmet,
                d,
                due_date,
                lt,
                Some(routing_row.resource_id.clone()),
            ));
            if let Some(bucket) = state.bucket_mut(item_id, due_date) {
                bucket.inflow_fresh += unmet;
            }
            steps.push(TraceStep::production(item_id, unmet, d, Some(routing_row.resource_id.clone())));
            unmet = Decimal::ZERO;
        } else {
            steps.push(
                TraceStep::infeasible(item_id, InfeasibilityReason::CapacityBottleneck)
                    .with_resource(routing_row.resource_id.clone()),
            );
            if let Some(bucket) = state.bucket_mut(item_id, due_date) {
                bucket.shortage += unmet;
            }
            logs.push(format!("{item_id}: 資源 {} 回溯視窗內產能不足", routing_row.resource_id));
        }
    } else {
        let lt = (due_date - req_start).num_days();
        let next_index = state.planned_orders.len();
        state.planned_orders.push(PlannedOrder::production(
            next_index, item_id, unmet, req_start, due_date, lt, None,
        ));
        if let Some(bucket) = state.bucket_mut(item_id, due_date) {
            bucket.inflow_fresh += unmet;
        }
        steps.push(TraceStep::production(item_id, unmet, req_start, None));
        unmet = Decimal::ZERO;
    }

    Ok(unmet)
}

fn resolve_buy(
    state: &mut SolveState,
    tables: &IndexedTables,
    config: &SolverConfig,
    item: &Item,
    unmet: Decimal,
    due_date: NaiveDate,
    steps: &mut Vec<TraceStep>,
    logs: &mut Vec<String>,
) -> Result<Decimal> {
    let mut unmet = unmet;
    let item_id = item.item_id.as_str();

    let suppliers = match tables.suppliers.get(item_id) {
        Some(rows) if !rows.is_empty() => rows.clone(),
        _ => {
            let lt_days = LeadTimeCalculator::buy_lead_time_days(item);
            let start = due_date
                .checked_sub_signed(Duration::days(lt_days))
                .ok_or_else(|| MrpError::DateArithmetic(format!("{item_id}: due_date 減去 leadtime_buy 溢位")))?;
            let next_index = state.planned_orders.len();
            state.planned_orders.push(PlannedOrder::purchase(
                next_index, item_id, unmet, start, due_date, lt_days, "Unknown",
            ));
            if let Some(bucket) = state.bucket_mut(item_id, due_date) {
                bucket.inflow_fresh += unmet;
            }
            steps.push(TraceStep::purchase(item_id, unmet, due_date, "Unknown"));
            return Ok(Decimal::ZERO);
        }
    };

    let original_unmet = unmet;
    for supplier in suppliers {
        if unmet <= Decimal::ZERO {
            break;
        }

        // 1. 投機性庫存再檢查：消耗先前批量超量回補的庫存
        let consumed = state.stock.consume(item_id, unmet);
        if consumed > Decimal::ZERO {
            steps.push(TraceStep::stock(item_id, consumed));
            unmet -= consumed;
        }
        if unmet <= Decimal::ZERO {
            break;
        }

        let target_for_supplier = original_unmet * supplier.share_percent;
        let mut sup_allocated = Decimal::ZERO;
        let supplier_key = supplier.display_name();
        let lookback = config.supplier_lookback_days();

        for lb in 0..lookback {
            let base_req = (target_for_supplier - sup_allocated).min(unmet);
            if base_req <= Decimal::ZERO {
                break;
            }

            let d = match due_date.checked_sub_signed(Duration::days(lb)) {
                Some(d) => d,
                None => break,
            };

            let order_qty =
                LotSizingCalculator::apply(base_req, supplier.supplier_lot_size, supplier.supplier_lot_increment);
            let cap_avail = state.supplier_cap.available(&supplier_key, item_id, d);
            let final_qty = order_qty.min(cap_avail);

            if final_qty > Decimal::ZERO {
                state.supplier_cap.commit(&supplier_key, item_id, d, final_qty);
                let satisfied_now = final_qty.min(unmet);
                let surplus = final_qty - satisfied_now;
                if surplus > Decimal::ZERO {
                    state.stock.credit(item_id, surplus);
                    logs.push(format!("{item_id}: 批量超量 {surplus} 回補至庫存"));
                }

                let start = d
                    .checked_sub_signed(Duration::days(supplier.leadtime_days))
                    .ok_or_else(|| MrpError::DateArithmetic(format!("{item_id}: 供應商交期減法溢位")))?;
                let lt_days = (d - start).num_days();
                let next_index = state.planned_orders.len();
                state.planned_orders.push(PlannedOrder::purchase(
                    next_index,
                    item_id,
                    final_qty,
                    start,
                    d,
                    lt_days,
                    supplier_key.clone(),
                ));
                if let Some(bucket) = state.bucket_mut(item_id, d) {
                    bucket.inflow_fresh += final_qty;
                }
                steps.push(TraceStep::purchase(item_id, final_qty, d, supplier_key.clone()));

                unmet -= satisfied_now;
                sup_allocated += satisfied_now;
            }

            if sup_allocated >= target_for_supplier || unmet <= Decimal::ZERO {
                break;
            }
        }
    }

    if unmet > Decimal::ZERO {
        steps.push(TraceStep::infeasible(item_id, InfeasibilityReason::SupplierCapacityShortage));
        if let Some(bucket) = state.bucket_mut(item_id, due_date) {
            bucket.shortage += unmet;
        }
        logs.push(format!("{item_id}: 供應商容量耗盡，尚欠 {unmet}"));
    }

    Ok(unmet)
}
