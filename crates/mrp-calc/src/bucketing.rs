//! 視界日期範圍計算

use chrono::NaiveDate;
use mrp_core::SolverConfig;

/// 依 `SolverConfig` 展開 MRP／產能帳本所涵蓋的日期範圍。
pub struct HorizonCalculator;

impl HorizonCalculator {
    /// MRP 帳冊日期：`[start_date, start_date + horizon]`（含端點，SPEC_FULL §6）。
    pub fn mrp_dates(config: &SolverConfig) -> Vec<NaiveDate> {
        Self::daily_range(config.start_date, config.mrp_horizon_days())
    }

    /// 產能帳本日期：在 MRP 視界外再延伸 60 天，供回溯搜尋使用（SPEC_FULL §3）。
    pub fn capacity_dates(config: &SolverConfig) -> Vec<NaiveDate> {
        Self::daily_range(config.start_date, config.capacity_horizon_days())
    }

    fn daily_range(start_date: NaiveDate, horizon_days: u32) -> Vec<NaiveDate> {
        let mut dates = Vec::with_capacity(horizon_days as usize + 1);
        let mut current = start_date;
        for _ in 0..=horizon_days {
            dates.push(current);
            current = current.succ_opt().expect("date overflow while building horizon");
        }
        dates
    }
}
