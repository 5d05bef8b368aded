//! 求解器整體配置

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 求解器的四個純量參數，對應 SPEC_FULL §6 `run_solver` 的入口簽名。
///
/// 建構採用與原規格相同的 builder 風格（`with_*`），方便在場景測試中
/// 逐項覆寫預設值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    pub horizon: u32,
    pub start_date: NaiveDate,
    pub is_constrained: bool,
    pub build_ahead: bool,
}

impl SolverConfig {
    /// 受限產能排程的往前回溯天數上限（build_ahead 啟用時）。
    pub const RESOURCE_LOOKBACK_DAYS_BUILD_AHEAD: i64 = 15;
    /// 未啟用 build_ahead 時，產能排程不做回溯。
    pub const RESOURCE_LOOKBACK_DAYS_DEFAULT: i64 = 0;
    /// 採購端 build_ahead 啟用時的回溯天數上限。
    pub const SUPPLIER_LOOKBACK_DAYS_BUILD_AHEAD: i64 = 15;
    /// 未啟用 build_ahead 時，採購端僅檢查到期日當天。
    pub const SUPPLIER_LOOKBACK_DAYS_DEFAULT: i64 = 1;
    /// 產能帳本相對於 MRP 視界額外延伸的天數，讓回溯得以跨越視界尾端。
    pub const CAPACITY_HORIZON_PAD_DAYS: i64 = 60;
    /// 無供應商主檔時的外購提前期預設值（天）。
    pub const DEFAULT_BUY_LEADTIME_DAYS: i64 = 7;
    /// 無供應商主檔容量資料時視為的每日容量（近似無限）。
    pub const DEFAULT_SUPPLIER_CAPACITY: i64 = 999_999;
    /// 需求未指定優先序時的預設值（數字越大優先序越低）。
    pub const DEFAULT_DEMAND_PRIORITY: i64 = 999;
    /// 防護性遞迴深度上限，解決 SPEC_FULL §9 中「BOM 是否可能成環」的未決問題。
    pub const MAX_RECURSION_DEPTH: usize = 64;

    pub fn new(horizon: u32, start_date: NaiveDate) -> Self {
        Self {
            horizon,
            start_date,
            is_constrained: false,
            build_ahead: false,
        }
    }

    pub fn with_is_constrained(mut self, is_constrained: bool) -> Self {
        self.is_constrained = is_constrained;
        self
    }

    pub fn with_build_ahead(mut self, build_ahead: bool) -> Self {
        self.build_ahead = build_ahead;
        self
    }

    /// 受限產能排程的回溯天數上限：`build_ahead` 啟用時為 15 天，否則不回溯。
    pub fn resource_lookback_days(&self) -> i64 {
        if self.build_ahead {
            Self::RESOURCE_LOOKBACK_DAYS_BUILD_AHEAD
        } else {
            Self::RESOURCE_LOOKBACK_DAYS_DEFAULT
        }
    }

    /// 採購端的回溯天數上限：`build_ahead` 啟用時為 15 天，否則僅檢查到期日當天。
    pub fn supplier_lookback_days(&self) -> i64 {
        if self.build_ahead {
            Self::SUPPLIER_LOOKBACK_DAYS_BUILD_AHEAD
        } else {
            Self::SUPPLIER_LOOKBACK_DAYS_DEFAULT
        }
    }

    /// MRP 帳冊涵蓋的日期區間：`[start_date, start_date + horizon]`（含端點）。
    pub fn mrp_horizon_days(&self) -> u32 {
        self.horizon
    }

    /// 產能帳本涵蓋的日期區間：在 MRP 視界外再延伸 60 天，供回溯使用。
    pub fn capacity_horizon_days(&self) -> u32 {
        self.horizon + Self::CAPACITY_HORIZON_PAD_DAYS as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn lookback_days_depend_on_build_ahead() {
        let constrained = SolverConfig::new(30, date(2026, 1, 1)).with_build_ahead(true);
        assert_eq!(constrained.resource_lookback_days(), 15);
        assert_eq!(constrained.supplier_lookback_days(), 15);

        let no_build_ahead = SolverConfig::new(30, date(2026, 1, 1));
        assert_eq!(no_build_ahead.resource_lookback_days(), 0);
        assert_eq!(no_build_ahead.supplier_lookback_days(), 1);
    }

    #[test]
    fn capacity_horizon_pads_sixty_days_past_mrp_horizon() {
        let config = SolverConfig::new(30, date(2026, 1, 1));
        assert_eq!(config.mrp_horizon_days(), 30);
        assert_eq!(config.capacity_horizon_days(), 90);
    }
}
