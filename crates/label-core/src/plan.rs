//! 生產計劃與成本結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 生產計劃（排版計算結果）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 實際軌數
    pub effective_tracks: u32,

    /// 幅寬（mm）
    pub web_width_mm: Decimal,

    /// 單軌每米標籤數
    pub labels_per_meter: Decimal,

    /// 總走料長度（m）
    pub linear_length_m: Decimal,

    /// 預估良率（%），由良率估算器填入
    pub yield_pct: Decimal,
}

impl ProductionPlan {
    /// 創建新的生產計劃（良率待估算）
    pub fn new(
        effective_tracks: u32,
        web_width_mm: Decimal,
        labels_per_meter: Decimal,
        linear_length_m: Decimal,
    ) -> Self {
        Self {
            effective_tracks,
            web_width_mm,
            labels_per_meter,
            linear_length_m,
            yield_pct: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置良率
    pub fn with_yield(mut self, yield_pct: Decimal) -> Self {
        self.yield_pct = yield_pct;
        self
    }
}

/// 印刷機成本明細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PressCostDetail {
    /// 生產時間（小時）
    pub production_hours: Decimal,

    /// 準備時間（小時，含換刀、換料）
    pub setup_hours: Decimal,

    /// 總時間（小時）
    pub total_hours: Decimal,

    pub setup_cost: Decimal,
    pub production_cost: Decimal,
    pub energy_cost: Decimal,
    pub operator_cost: Decimal,

    /// 管理費用金額
    pub overhead_cost: Decimal,
}

impl PressCostDetail {
    /// 含管理費用的印刷機成本
    pub fn total(&self) -> Decimal {
        self.setup_cost + self.production_cost + self.energy_cost + self.operator_cost + self.overhead_cost
    }
}

/// 成本明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 材料成本
    pub material_cost: Decimal,

    /// 刀模成本
    pub die_cost: Decimal,

    /// 印刷機成本
    pub press_cost: Decimal,

    /// 總成本
    pub total_cost: Decimal,

    /// 每張成本
    pub cost_per_unit: Decimal,

    /// 每平方米成本（以理論面積計）
    pub cost_per_sqm: Decimal,

    /// 理論面積（m²）
    pub theoretical_area_sqm: Decimal,

    /// 含耗損的實際用料面積（m²）
    pub actual_material_area_sqm: Decimal,

    /// 總數量
    pub total_quantity: u64,

    /// 印刷機成本明細
    pub press_detail: PressCostDetail,
}

/// 報價
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// 利潤率（%）
    pub margin_pct: Decimal,

    /// 售價
    pub selling_price: Decimal,

    /// 每張售價
    pub price_per_unit: Decimal,
}

impl PriceQuote {
    /// 利潤金額
    pub fn margin_amount(&self, costs: &CostBreakdown) -> Decimal {
        self.selling_price - costs.total_cost
    }
}
