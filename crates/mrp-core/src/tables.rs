//! 正規化後的輸入表集合

use crate::bom::BomEdge;
use crate::demand::DemandRow;
use crate::item::Item;
use crate::routing::{ResourceMaster, ResourceRoutingRow, RoutingRow};
use crate::supplier::SupplierRow;
use crate::supply::SupplyRow;

/// `run_solver` 的輸入：七張已正規化的關聯（SPEC_FULL §2、§6）。
///
/// 欄位正規化（大小寫、欄名比對、型別強制轉型）屬於檔案匯入層的責任，
/// 不在本 crate 範圍內；呼叫端建構 `InputTables` 時即已交付型別正確的資料。
#[derive(Debug, Clone, Default)]
pub struct InputTables {
    pub items: Vec<Item>,
    pub demand: Vec<DemandRow>,
    pub bom: Vec<BomEdge>,
    pub routing: Vec<RoutingRow>,
    pub resource_routing: Vec<ResourceRoutingRow>,
    pub resource_master: Vec<ResourceMaster>,
    pub supplies: Vec<SupplyRow>,
    pub supplier_master: Vec<SupplierRow>,
}

impl InputTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_demand(mut self, demand: DemandRow) -> Self {
        self.demand.push(demand);
        self
    }

    pub fn with_bom_edge(mut self, edge: BomEdge) -> Self {
        self.bom.push(edge);
        self
    }

    pub fn with_routing(mut self, routing: RoutingRow) -> Self {
        self.routing.push(routing);
        self
    }

    pub fn with_resource_routing(mut self, resource_routing: ResourceRoutingRow) -> Self {
        self.resource_routing.push(resource_routing);
        self
    }

    pub fn with_resource_master(mut self, resource_master: ResourceMaster) -> Self {
        self.resource_master.push(resource_master);
        self
    }

    pub fn with_supply(mut self, supply: SupplyRow) -> Self {
        self.supplies.push(supply);
        self
    }

    pub fn with_supplier(mut self, supplier: SupplierRow) -> Self {
        self.supplier_master.push(supplier);
        self
    }
}
