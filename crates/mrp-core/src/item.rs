//! 物料主檔模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 自製／外購政策
///
/// `Both` 的行為等同於 `Make`（見 SPEC_FULL §3）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MakeOrBuy {
    Make,
    Buy,
    Both,
}

impl MakeOrBuy {
    /// 由原始字串解析；比對時忽略大小寫，含有 "make" 或 "both" 子字串即視為自製。
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("both") {
            MakeOrBuy::Both
        } else if lower.contains("make") {
            MakeOrBuy::Make
        } else {
            MakeOrBuy::Buy
        }
    }

    /// 解析結果是否應走自製分支。
    pub fn is_make(&self) -> bool {
        matches!(self, MakeOrBuy::Make | MakeOrBuy::Both)
    }
}

/// 物料主檔一列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// 已正規化（大寫、去除首尾空白）的物料代碼
    pub item_id: String,

    pub make_or_buy: MakeOrBuy,

    /// 自製提前期，單位：秒／件
    pub leadtime_make_seconds: Option<Decimal>,

    /// 自製提前期，單位：天（與 `leadtime_make_seconds` 擇一提供即可）
    pub leadtime_make: Option<Decimal>,

    /// 外購提前期，單位：天，預設 7 天
    pub leadtime_buy: Decimal,
}

impl Item {
    pub fn new(item_id: impl AsRef<str>, make_or_buy_raw: impl AsRef<str>) -> Self {
        Self {
            item_id: Self::canonical_id(item_id.as_ref()),
            make_or_buy: MakeOrBuy::parse(make_or_buy_raw.as_ref()),
            leadtime_make_seconds: None,
            leadtime_make: None,
            leadtime_buy: Decimal::from(7),
        }
    }

    /// 將輸入物料代碼正規化：去除首尾空白並轉為大寫。
    pub fn canonical_id(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    pub fn with_leadtime_make_seconds(mut self, seconds: Decimal) -> Self {
        self.leadtime_make_seconds = Some(seconds);
        self
    }

    pub fn with_leadtime_make(mut self, days: Decimal) -> Self {
        self.leadtime_make = Some(days);
        self
    }

    pub fn with_leadtime_buy(mut self, days: Decimal) -> Self {
        self.leadtime_buy = days;
        self
    }
}
