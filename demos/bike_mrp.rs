//! # 腳踏車 MRP 計算完整範例
//!
//! 展示完整的 MRP 求解流程：
//! - 成品：腳踏車（自製，需經途程排程）
//! - 零件：車架（自製，受資源產能限制）、輪子（外購，雙供應商分攤）
//! - 兩筆銷售訂單需求，依優先序搶占庫存與產能

use chrono::NaiveDate;
use mrp::{
    BomEdge, DemandRow, InputTables, Item, ResourceMaster, ResourceRoutingRow, RoutingRow,
    SupplierRow, SupplyRow,
};
use rust_decimal::Decimal;

fn main() -> mrp::Result<()> {
    println!("===== 腳踏車 MRP 計算範例 =====\n");

    let start_date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    println!("步驟 1: 建立物料主檔");
    println!("   BIKE-001 自製提前期 2 天, FRAME-001 自製提前期 5 天, WHEEL-001 外購");
    let tables = InputTables::new()
        .with_item(Item::new("BIKE-001", "make").with_leadtime_make(Decimal::from(2)))
        .with_item(Item::new("FRAME-001", "make").with_leadtime_make(Decimal::from(5)))
        .with_item(Item::new("WHEEL-001", "buy"));

    println!("\n步驟 2: 建立 BOM（腳踏車 = 1 車架 + 2 輪子）");
    let tables = tables
        .with_bom_edge(BomEdge::new("BIKE-001", "FRAME-001", Decimal::from(1)))
        .with_bom_edge(BomEdge::new("BIKE-001", "WHEEL-001", Decimal::from(2)));

    println!("\n步驟 3: 建立途程與資源主檔（車架生產受焊接站產能限制）");
    let tables = tables
        .with_routing(RoutingRow {
            item_id: "FRAME-001".to_string(),
            cycle_time_seconds: Decimal::from(1800),
        })
        .with_resource_routing(ResourceRoutingRow {
            item_id: "FRAME-001".to_string(),
            resource_id: "WELD-STATION".to_string(),
            capacity_consumed_per: Decimal::from(1800),
        })
        .with_resource_master(ResourceMaster::new("WELD-STATION", Decimal::from(16)));

    println!("\n步驟 4: 建立輪子供應商（兩家分攤，各 50%）");
    let tables = tables
        .with_supplier(
            SupplierRow::new("WHEEL-001")
                .with_supplier_name("Acme Wheels")
                .with_share_percent(Decimal::new(5, 1))
                .with_leadtime_days(4)
                .with_lot_size(Decimal::from(200), Decimal::from(50)),
        )
        .with_supplier(
            SupplierRow::new("WHEEL-001")
                .with_supplier_name("Rolling Co")
                .with_share_percent(Decimal::new(5, 1))
                .with_leadtime_days(6),
        );

    println!("\n步驟 5: 現有庫存與在製品");
    let tables = tables
        .with_supply(SupplyRow::new("BIKE-001").with_fg_on_hand(Decimal::from(10)))
        .with_supply(SupplyRow::new("FRAME-001").with_fg_on_hand(Decimal::from(30)))
        .with_supply(SupplyRow::new("WHEEL-001").with_fg_on_hand(Decimal::from(100)));

    println!("\n步驟 6: 建立兩筆銷售訂單需求");
    let tables = tables
        .with_demand(
            DemandRow::new(
                "SO-2026-001",
                "BIKE-001",
                Decimal::from(150),
                NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
            )
            .with_priority(8),
        )
        .with_demand(
            DemandRow::new(
                "SO-2026-002",
                "BIKE-001",
                Decimal::from(100),
                NaiveDate::from_ymd_opt(2026, 2, 22).unwrap(),
            )
            .with_priority(5),
        );

    println!("\n步驟 7: 執行 MRP 求解（受限產能、允許提前生產）");
    let result = mrp::run_solver(tables, 90, start_date, true, true)?;
    println!("   run_id: {}", result.run_id);
    println!("   計劃訂單總數: {}", result.planned_orders.len());

    println!("\n步驟 8: 計劃訂單明細");
    println!("----------------------------------------");
    for order in &result.planned_orders {
        println!(
            "  [{:?}] {} | 數量: {} | {} -> {} | {}",
            order.order_type, order.item_id, order.qty, order.start, order.finish, order.supplier
        );
    }

    println!("\n步驟 9: 不可行性彙總");
    let constraint_report = mrp::ConstraintReport::compile(&result.trace);
    if constraint_report.is_fully_feasible() {
        println!("   全數可行，無排程衝突");
    } else {
        for (reason, count) in &constraint_report.reason_counts {
            println!("   {}: {} 次", reason, count);
        }
    }

    println!("\n步驟 10: 焊接站產能利用率");
    let utilization = mrp::CapacityPlanner::utilization_report(
        &result.planned_orders,
        &[ResourceRoutingRow {
            item_id: "FRAME-001".to_string(),
            resource_id: "WELD-STATION".to_string(),
            capacity_consumed_per: Decimal::from(1800),
        }],
        &[ResourceMaster::new("WELD-STATION", Decimal::from(16))],
    );
    for (resource_id, date, committed, daily) in &utilization {
        println!("   {} @ {}: {} / {} 小時", resource_id, date, committed, daily);
    }

    println!("\nMRP 計算完成！");
    Ok(())
}
