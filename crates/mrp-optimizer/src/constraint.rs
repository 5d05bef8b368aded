//! 不可行性彙總報表（SPEC_FULL §2e、§7.2）

use std::collections::HashMap;

use mrp_core::{DemandTrace, InfeasibilityReason};
use rust_decimal::Decimal;

/// 依不可行原因彙總出現次數；「受影響需求量」取該需求行的原始 `qty`
/// （逐步驟的不可行紀錄本身不攜帶數量，實際短缺量記錄在 MRP 帳冊的
/// `shortage` 欄位，這裡只統計「這筆需求在解析途中至少遇到一次不可行」）。
#[derive(Debug, Clone, Default)]
pub struct ConstraintReport {
    pub reason_counts: HashMap<&'static str, usize>,
    pub affected_demand_qty_by_item: HashMap<String, Decimal>,
}

impl ConstraintReport {
    /// 從求解結果的 `trace` 編譯彙總報表；不影響、也不重新解析任何需求。
    pub fn compile(trace: &[DemandTrace]) -> Self {
        let mut reason_counts: HashMap<&'static str, usize> = HashMap::new();
        let mut affected_demand_qty_by_item: HashMap<String, Decimal> = HashMap::new();

        for demand_trace in trace {
            let mut trace_had_infeasibility = false;
            for step in &demand_trace.steps {
                if let Some(reason) = step.reason {
                    *reason_counts.entry(reason.as_str()).or_insert(0) += 1;
                    trace_had_infeasibility = true;
                }
            }
            if trace_had_infeasibility {
                *affected_demand_qty_by_item
                    .entry(demand_trace.item_id.clone())
                    .or_insert(Decimal::ZERO) += demand_trace.qty;
            }
        }

        Self {
            reason_counts,
            affected_demand_qty_by_item,
        }
    }

    pub fn is_fully_feasible(&self) -> bool {
        self.reason_counts.is_empty()
    }

    pub fn count_for(&self, reason: InfeasibilityReason) -> usize {
        self.reason_counts.get(reason.as_str()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mrp_core::TraceStep;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn fully_feasible_trace_reports_no_reasons() {
        let trace = vec![DemandTrace {
            order_id: "SO-1".to_string(),
            item_id: "X".to_string(),
            qty: Decimal::from(5),
            due: date(),
            steps: vec![TraceStep::stock("X", Decimal::from(5))],
            logs: vec![],
        }];

        let report = ConstraintReport::compile(&trace);
        assert!(report.is_fully_feasible());
    }

    #[test]
    fn counts_infeasibility_reasons_and_accumulates_shortage() {
        let trace = vec![DemandTrace {
            order_id: "SO-1".to_string(),
            item_id: "X".to_string(),
            qty: Decimal::from(5),
            due: date(),
            steps: vec![
                TraceStep::infeasible("X", InfeasibilityReason::CapacityBottleneck),
                TraceStep::infeasible("X", InfeasibilityReason::SupplierCapacityShortage),
            ],
            logs: vec![],
        }];

        let report = ConstraintReport::compile(&trace);
        assert_eq!(report.count_for(InfeasibilityReason::CapacityBottleneck), 1);
        assert_eq!(report.count_for(InfeasibilityReason::SupplierCapacityShortage), 1);
        assert!(!report.is_fully_feasible());
    }
}
