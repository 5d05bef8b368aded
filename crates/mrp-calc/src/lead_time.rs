//! 提前期計算

use mrp_core::{Item, RoutingRow};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 提前期計算器：純函式，不持有狀態。
///
/// 規格刻意不做工作日曆／排班建模（SPEC_FULL §1 Non-goals），因此所有提前期
/// 一律以日曆天數計算，不扣除週末或假日。
pub struct LeadTimeCalculator;

impl LeadTimeCalculator {
    /// 決定自製單件加工時間（秒）：優先採用該物料的途程資料，
    /// 若途程缺席或其值為 0，則退回物料主檔的 `leadtime_make_seconds`
    /// 或 `leadtime_make`（天）任一有值者；兩者皆無則視為 0。
    pub fn resolve_cycle_seconds(routing: Option<&RoutingRow>, item: &Item) -> Decimal {
        if let Some(r) = routing {
            if r.cycle_time_seconds > Decimal::ZERO {
                return r.cycle_time_seconds;
            }
        }
        if let Some(seconds) = item.leadtime_make_seconds {
            return seconds;
        }
        if let Some(days) = item.leadtime_make {
            return days * Decimal::from(86_400);
        }
        Decimal::ZERO
    }

    /// `lt_days = max(0, floor(qty * cycle_seconds / 86400))`（SPEC_FULL §4.1.a）。
    pub fn make_lead_time_days(qty: Decimal, cycle_seconds: Decimal) -> i64 {
        if qty <= Decimal::ZERO || cycle_seconds <= Decimal::ZERO {
            return 0;
        }
        let total_seconds = qty * cycle_seconds;
        let days = (total_seconds / Decimal::from(86_400)).floor();
        days.to_i64().unwrap_or(0).max(0)
    }

    /// 外購提前期（天），取自物料主檔 `leadtime_buy`（預設 7）。
    pub fn buy_lead_time_days(item: &Item) -> i64 {
        item.leadtime_buy.to_i64().unwrap_or(7).max(0)
    }
}
