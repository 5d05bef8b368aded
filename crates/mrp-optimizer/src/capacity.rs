//! 產能利用率報表（SPEC_FULL §2e）
//!
//! 這是純粹的事後分析層：讀取 `SolverResult::planned_orders`，不會回頭影響
//! 解析器已做的排程決策。

use std::collections::HashMap;

use chrono::NaiveDate;
use mrp_core::{PlannedOrder, ResourceMaster, ResourceRoutingRow};
use rust_decimal::Decimal;

/// 由計劃訂單重建各資源、各日期的已提交工時，供容量利用率報表使用。
pub struct CapacityPlanner;

impl CapacityPlanner {
    /// 依 (resource_id, date) 彙總生產訂單消耗的工時，並與資源主檔的每日可用工時比對。
    pub fn utilization_report(
        planned_orders: &[PlannedOrder],
        resource_routing: &[ResourceRoutingRow],
        resource_master: &[ResourceMaster],
    ) -> Vec<(String, NaiveDate, Decimal, Decimal)> {
        let routing_by_item: HashMap<&str, &ResourceRoutingRow> =
            resource_routing.iter().map(|r| (r.item_id.as_str(), r)).collect();
        let daily_hours_by_resource: HashMap<&str, Decimal> =
            resource_master.iter().map(|r| (r.resource_id.as_str(), r.daily_hours())).collect();

        let mut committed: HashMap<(String, NaiveDate), Decimal> = HashMap::new();
        for order in planned_orders.iter().filter(|o| o.is_production()) {
            let Some(routing) = routing_by_item.get(order.item_id.as_str()) else {
                continue;
            };
            let resource_id = order
                .resource_id
                .clone()
                .unwrap_or_else(|| routing.resource_id.clone());
            let hours = routing.needed_hours(order.qty);
            *committed.entry((resource_id, order.start)).or_insert(Decimal::ZERO) += hours;
        }

        let mut report: Vec<(String, NaiveDate, Decimal, Decimal)> = committed
            .into_iter()
            .map(|((resource_id, date), hours)| {
                let daily_hours = daily_hours_by_resource
                    .get(resource_id.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                (resource_id, date, hours, daily_hours)
            })
            .collect();

        report.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
        report
    }
}
