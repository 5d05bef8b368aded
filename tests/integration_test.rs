//! 端到端場景測試，對應 SPEC_FULL §8 的六個手刻場景。

use chrono::NaiveDate;
use mrp::{
    BomEdge, DemandRow, InputTables, Item, PlannedOrderType, ResourceMaster, ResourceRoutingRow,
    RoutingRow, SupplierRow, SupplyRow,
};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 場景 A：單一需求，庫存充足，不產生任何計劃訂單。
#[test]
fn scenario_a_single_demand_sufficient_stock() {
    let tables = InputTables::new()
        .with_item(Item::new("X", "buy").with_leadtime_buy(Decimal::from(5)))
        .with_supply(SupplyRow::new("X").with_fg_on_hand(Decimal::from(10)))
        .with_demand(DemandRow::new("SO-1", "X", Decimal::from(7), date(2026, 1, 10)));

    let result = mrp::run_solver(tables, 30, date(2026, 1, 1), false, false).unwrap();

    assert!(result.planned_orders.is_empty());

    let buckets = &result.mrp["X"];
    assert_eq!(buckets[&date(2026, 1, 1)].inflow_onhand, Decimal::from(10));
    let due_bucket = &buckets[&date(2026, 1, 10)];
    assert_eq!(due_bucket.outflow_direct, Decimal::from(7));
    assert_eq!(due_bucket.ending_stock, Decimal::from(3));
}

/// 場景 B：外購並套用批量規則，訂購量四捨五入至批量遞增邊界。
#[test]
fn scenario_b_buy_with_lot_sizing() {
    let tables = InputTables::new()
        .with_item(Item::new("X", "buy"))
        .with_supplier(
            SupplierRow::new("X")
                .with_share_percent(Decimal::ONE)
                .with_lot_size(Decimal::from(50), Decimal::from(20))
                .with_capacity_per_day(Decimal::from(1000))
                .with_leadtime_days(3),
        )
        .with_demand(DemandRow::new("SO-1", "X", Decimal::from(55), date(2026, 2, 1)));

    let result = mrp::run_solver(tables, 60, date(2026, 1, 1), false, false).unwrap();

    assert_eq!(result.planned_orders.len(), 1);
    let order = &result.planned_orders[0];
    assert_eq!(order.id, "PUR-X-0");
    assert_eq!(order.qty, Decimal::from(70));
    assert_eq!(order.start, date(2026, 1, 29));
    assert_eq!(order.finish, date(2026, 2, 1));
    assert_eq!(order.order_type, PlannedOrderType::Purchase);
}

/// 場景 C：自製成品透過 BOM 展開外購子件，並在受限產能下成功排程。
#[test]
fn scenario_c_make_with_bom_and_capacity() {
    let tables = InputTables::new()
        .with_item(Item::new("P", "make"))
        .with_item(Item::new("C", "buy").with_leadtime_buy(Decimal::from(2)))
        .with_bom_edge(BomEdge::new("P", "C", Decimal::from(2)))
        .with_routing(RoutingRow {
            item_id: "P".to_string(),
            cycle_time_seconds: Decimal::from(3600),
        })
        .with_resource_routing(ResourceRoutingRow {
            item_id: "P".to_string(),
            resource_id: "R".to_string(),
            capacity_consumed_per: Decimal::from(3600),
        })
        .with_resource_master(ResourceMaster::new("R", Decimal::from(8)))
        .with_demand(DemandRow::new("SO-1", "P", Decimal::from(5), date(2026, 3, 10)));

    let result = mrp::run_solver(tables, 30, date(2026, 3, 1), true, true).unwrap();

    let production: Vec<_> = result.planned_orders.iter().filter(|o| o.is_production()).collect();
    assert_eq!(production.len(), 1);
    assert_eq!(production[0].id, "PO-P-0");
    assert_eq!(production[0].qty, Decimal::from(5));
    assert_eq!(production[0].start, date(2026, 3, 10));
    assert_eq!(production[0].finish, date(2026, 3, 10));

    let purchase: Vec<_> = result.planned_orders.iter().filter(|o| o.is_purchase()).collect();
    assert_eq!(purchase.len(), 1);
    assert_eq!(purchase[0].item_id, "C");
    assert_eq!(purchase[0].qty, Decimal::from(10));
    assert_eq!(purchase[0].start, date(2026, 3, 8));
    assert_eq!(purchase[0].finish, date(2026, 3, 10));
}

/// 場景 D：產能瓶頸，回溯視窗內仍無法滿足，記錄為不可行。
#[test]
fn scenario_d_capacity_bottleneck_forces_lookback_then_infeasible() {
    let tables = InputTables::new()
        .with_item(Item::new("P", "make"))
        .with_routing(RoutingRow {
            item_id: "P".to_string(),
            cycle_time_seconds: Decimal::from(3600),
        })
        .with_resource_routing(ResourceRoutingRow {
            item_id: "P".to_string(),
            resource_id: "R".to_string(),
            capacity_consumed_per: Decimal::from(3600),
        })
        .with_resource_master(ResourceMaster::new("R", Decimal::from(3)))
        .with_demand(DemandRow::new("SO-1", "P", Decimal::from(5), date(2026, 3, 10)));

    let result = mrp::run_solver(tables, 30, date(2026, 3, 1), true, true).unwrap();

    assert!(result.planned_orders.iter().all(|o| o.item_id != "P"));

    let trace = &result.trace[0];
    assert!(trace
        .steps
        .iter()
        .any(|s| s.reason == Some(mrp::InfeasibilityReason::CapacityBottleneck)));

    let shortage = result.mrp["P"][&date(2026, 3, 10)].shortage;
    assert_eq!(shortage, Decimal::from(5));
}

/// 場景 E：優先序較高（數字較小）的需求先消耗庫存。
#[test]
fn scenario_e_priority_ordering_consumes_stock_first() {
    let tables = InputTables::new()
        .with_item(Item::new("X", "buy"))
        .with_supply(SupplyRow::new("X").with_fg_on_hand(Decimal::from(10)))
        .with_demand(DemandRow::new("SO-2", "X", Decimal::from(5), date(2026, 1, 10)).with_priority(2))
        .with_demand(DemandRow::new("SO-1", "X", Decimal::from(8), date(2026, 1, 10)).with_priority(1));

    let result = mrp::run_solver(tables, 30, date(2026, 1, 1), false, false).unwrap();

    assert_eq!(result.trace[0].order_id, "SO-1");
    assert_eq!(result.trace[1].order_id, "SO-2");

    let d1_consumed = result.trace[0]
        .steps
        .iter()
        .filter(|s| s.action == "Stock")
        .filter_map(|s| s.qty)
        .sum::<Decimal>();
    assert_eq!(d1_consumed, Decimal::from(8));
}

/// 場景 F：需求依供應商分攤比例拆分成多筆採購訂單。
#[test]
fn scenario_f_share_split_across_suppliers() {
    let tables = InputTables::new()
        .with_item(Item::new("X", "buy"))
        .with_supplier(
            SupplierRow::new("X")
                .with_supplier_name("Sup-A")
                .with_share_percent(Decimal::new(7, 1))
                .with_capacity_per_day(Decimal::from(1000)),
        )
        .with_supplier(
            SupplierRow::new("X")
                .with_supplier_name("Sup-B")
                .with_share_percent(Decimal::new(3, 1))
                .with_capacity_per_day(Decimal::from(1000)),
        )
        .with_demand(DemandRow::new("SO-1", "X", Decimal::from(100), date(2026, 2, 1)));

    let result = mrp::run_solver(tables, 60, date(2026, 1, 1), false, false).unwrap();

    assert_eq!(result.planned_orders.len(), 2);
    assert_eq!(result.planned_orders[0].supplier, "Sup-A");
    assert_eq!(result.planned_orders[0].qty, Decimal::from(70));
    assert_eq!(result.planned_orders[1].supplier, "Sup-B");
    assert_eq!(result.planned_orders[1].qty, Decimal::from(30));
}

#[test]
fn idempotence_across_two_full_solves() {
    let build_tables = || {
        InputTables::new()
            .with_item(Item::new("X", "buy"))
            .with_supplier(SupplierRow::new("X").with_capacity_per_day(Decimal::from(1000)))
            .with_demand(DemandRow::new("SO-1", "X", Decimal::from(42), date(2026, 1, 15)))
    };

    let first = mrp::run_solver(build_tables(), 30, date(2026, 1, 1), false, false).unwrap();
    let second = mrp::run_solver(build_tables(), 30, date(2026, 1, 1), false, false).unwrap();

    assert_eq!(first.planned_orders.len(), second.planned_orders.len());
    for (a, b) in first.planned_orders.iter().zip(second.planned_orders.iter()) {
        assert_eq!(a.qty, b.qty);
        assert_eq!(a.start, b.start);
        assert_eq!(a.finish, b.finish);
    }
}
