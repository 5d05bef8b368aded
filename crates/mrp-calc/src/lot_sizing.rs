//! 供應商批量規則

use rust_decimal::Decimal;

/// 套用供應商批量規則（SPEC_FULL §4.1 Buy branch step b.5）。
pub struct LotSizingCalculator;

impl LotSizingCalculator {
    /// 依 `lot_size`／`lot_increment` 調整 `base_req`：
    /// - `lot_size <= 0`：不適用批量規則，原樣回傳。
    /// - `base_req <= lot_size`：至少訂購一個批量。
    /// - `lot_increment > 0`：批量之上以 `lot_increment` 為步階無條件進位。
    /// - 否則：批量規則不完整，原樣回傳。
    pub fn apply(base_req: Decimal, lot_size: Decimal, lot_increment: Decimal) -> Decimal {
        if lot_size <= Decimal::ZERO {
            return base_req;
        }
        if base_req <= lot_size {
            return lot_size;
        }
        if lot_increment > Decimal::ZERO {
            let remainder = base_req - lot_size;
            let batches = (remainder / lot_increment).ceil();
            return lot_size + batches * lot_increment;
        }
        base_req
    }
}
