//! 簡單 MRP 計算示例：單一外購物料，庫存不足時觸發一筆採購計劃訂單。

use chrono::NaiveDate;
use mrp::{DemandRow, InputTables, Item, SupplyRow};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單 MRP 計算示例 ===\n");

    let due_date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let start_date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let tables = InputTables::new()
        .with_item(Item::new("WIDGET-1", "buy").with_leadtime_buy(Decimal::from(3)))
        .with_supply(SupplyRow::new("WIDGET-1").with_fg_on_hand(Decimal::from(20)))
        .with_demand(DemandRow::new("SO-1001", "WIDGET-1", Decimal::from(55), due_date));

    println!("需求清單:");
    for demand in &tables.demand {
        println!(
            "  - 物料: {}, 數量: {}, 需求日期: {}",
            demand.item_id, demand.demand_qty, demand.due_date
        );
    }

    let result = mrp::run_solver(tables, 45, start_date, false, false)?;

    println!("\nrun_id: {}", result.run_id);
    println!("計劃訂單:");
    for order in &result.planned_orders {
        println!(
            "  {} {} qty={} {} -> {} via {}",
            order.id, order.item_id, order.qty, order.start, order.finish, order.supplier
        );
    }

    Ok(())
}
