//! 庫存結轉（Inventory Roll）

use std::collections::BTreeMap;

use chrono::NaiveDate;
use mrp_core::MrpBucket;
use rayon::prelude::*;
use rust_decimal::Decimal;

/// 依 SPEC_FULL §4.3 對每一物料的日期序列做結轉。
///
/// 物料彼此獨立（每個物料的 running stock 只依賴自身先前日期），因此可以
/// 用資料並行（`par_iter_mut`）逐物料展開；物料內部的日期順序仍是必要的。
pub struct RollupCalculator;

impl RollupCalculator {
    pub fn run(mrp: &mut std::collections::HashMap<String, BTreeMap<NaiveDate, MrpBucket>>) {
        mrp.par_iter_mut().for_each(|(_item_id, buckets)| {
            Self::roll_item(buckets);
        });
    }

    fn roll_item(buckets: &mut BTreeMap<NaiveDate, MrpBucket>) {
        let mut running_stock = Decimal::ZERO;

        for bucket in buckets.values_mut() {
            bucket.starting_stock = running_stock;

            let inflows = bucket.inflow_fresh + bucket.inflow_onhand;
            let outflows = bucket.outflow_dep + bucket.outflow_direct;
            let net = bucket.starting_stock + inflows - outflows;

            bucket.ending_stock = net.max(Decimal::ZERO);
            if net < Decimal::ZERO && bucket.shortage == Decimal::ZERO {
                bucket.shortage = -net;
            }

            running_stock = bucket.ending_stock;
            bucket.round_dp4();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rolls_stock_forward_day_over_day() {
        let mut day1 = MrpBucket::default();
        day1.inflow_onhand = Decimal::from(10);
        day1.outflow_direct = Decimal::from(4);

        let mut day2 = MrpBucket::default();
        day2.outflow_direct = Decimal::from(3);

        let mut buckets = BTreeMap::new();
        buckets.insert(date(2026, 1, 1), day1);
        buckets.insert(date(2026, 1, 2), day2);

        let mut mrp = HashMap::new();
        mrp.insert("X".to_string(), buckets);

        RollupCalculator::run(&mut mrp);

        let item = &mrp["X"];
        assert_eq!(item[&date(2026, 1, 1)].ending_stock, Decimal::from(6));
        assert_eq!(item[&date(2026, 1, 2)].starting_stock, Decimal::from(6));
        assert_eq!(item[&date(2026, 1, 2)].ending_stock, Decimal::from(3));
    }

    #[test]
    fn backfills_shortage_when_net_negative_and_none_recorded() {
        let mut day1 = MrpBucket::default();
        day1.outflow_direct = Decimal::from(5);

        let mut buckets = BTreeMap::new();
        buckets.insert(date(2026, 1, 1), day1);

        let mut mrp = HashMap::new();
        mrp.insert("X".to_string(), buckets);

        RollupCalculator::run(&mut mrp);

        let bucket = &mrp["X"][&date(2026, 1, 1)];
        assert_eq!(bucket.ending_stock, Decimal::ZERO);
        assert_eq!(bucket.shortage, Decimal::from(5));
    }

    #[test]
    fn does_not_overwrite_shortage_already_recorded_by_resolver() {
        let mut day1 = MrpBucket::default();
        day1.outflow_direct = Decimal::from(5);
        day1.shortage = Decimal::from(2); // resolver already recorded a (different) shortage

        let mut buckets = BTreeMap::new();
        buckets.insert(date(2026, 1, 1), day1);

        let mut mrp = HashMap::new();
        mrp.insert("X".to_string(), buckets);

        RollupCalculator::run(&mut mrp);

        assert_eq!(mrp["X"][&date(2026, 1, 1)].shortage, Decimal::from(2));
    }

    #[test]
    fn inflow_wip_and_inflow_supplier_are_excluded_from_rollup() {
        let mut day1 = MrpBucket::default();
        day1.inflow_wip = Decimal::from(100);
        day1.inflow_supplier = Decimal::from(100);

        let mut buckets = BTreeMap::new();
        buckets.insert(date(2026, 1, 1), day1);

        let mut mrp = HashMap::new();
        mrp.insert("X".to_string(), buckets);

        RollupCalculator::run(&mut mrp);

        assert_eq!(mrp["X"][&date(2026, 1, 1)].ending_stock, Decimal::ZERO);
    }
}
