//! # Label Optimizer
//!
//! 配置優化模組：窮舉印刷機 × 刀模 × 軌數 × 間距，以報價計算器評分

pub mod objective;
pub mod search;

// Re-export 主要類型
pub use objective::Objective;
pub use search::ConfigurationOptimizer;

use label_core::{
    CostBreakdown, DieSpec, EngineConfig, LabelJob, MaterialSpec, PressSpec, ProductionPlan,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 優化請求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// 標籤寬度（mm）
    pub label_width_mm: Decimal,

    /// 標籤高度（mm）
    pub label_height_mm: Decimal,

    /// 總數量
    pub total_quantity: u64,

    /// 材料（固定）
    pub material: MaterialSpec,

    /// 候選印刷機
    pub presses: Vec<PressSpec>,

    /// 候選刀模
    pub dies: Vec<DieSpec>,

    /// 優化目標
    pub objective: Objective,

    /// 最大軌數偏好
    pub max_tracks_preference: u32,

    /// 間距候選值（mm）
    pub interspace_candidates_mm: Vec<Decimal>,
}

impl OptimizationRequest {
    /// 創建新的優化請求，軌數偏好與間距候選值取自配置
    pub fn new(
        label_width_mm: Decimal,
        label_height_mm: Decimal,
        total_quantity: u64,
        material: MaterialSpec,
        config: &EngineConfig,
    ) -> Self {
        Self {
            label_width_mm,
            label_height_mm,
            total_quantity,
            material,
            presses: Vec::new(),
            dies: Vec::new(),
            objective: Objective::default(),
            max_tracks_preference: config.default_max_tracks_preference,
            interspace_candidates_mm: config.interspace_candidates_mm.clone(),
        }
    }

    /// 建構器模式：設置候選印刷機
    pub fn with_presses(mut self, presses: Vec<PressSpec>) -> Self {
        self.presses = presses;
        self
    }

    /// 建構器模式：設置候選刀模
    pub fn with_dies(mut self, dies: Vec<DieSpec>) -> Self {
        self.dies = dies;
        self
    }

    /// 建構器模式：設置優化目標
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// 建構器模式：設置最大軌數偏好
    pub fn with_max_tracks_preference(mut self, tracks: u32) -> Self {
        self.max_tracks_preference = tracks;
        self
    }

    /// 建構器模式：設置間距候選值
    pub fn with_interspace_candidates(mut self, candidates: Vec<Decimal>) -> Self {
        self.interspace_candidates_mm = candidates;
        self
    }

    /// 以指定軌數與間距建立工單
    pub fn job(&self, tracks: u32, interspace_mm: Decimal) -> LabelJob {
        LabelJob::new(
            self.label_width_mm,
            self.label_height_mm,
            interspace_mm,
            self.total_quantity,
        )
        .with_tracks(tracks)
    }
}

/// 單一可行配置的評估結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedConfiguration {
    /// 列舉順序（印刷機 → 刀模 → 軌數 → 間距）
    pub index: usize,

    pub press_code: String,
    pub press_name: String,
    pub die_code: String,
    pub die_name: String,

    /// 測試的軌數
    pub tracks: u32,

    /// 間距（mm）
    pub interspace_mm: Decimal,

    /// 生產計劃（含實際軌數與良率）
    pub plan: ProductionPlan,

    /// 成本明細
    pub costs: CostBreakdown,

    /// 總時間（小時，含準備）
    pub total_time_hours: Decimal,

    /// 目標分數
    pub score: Decimal,
}

impl OptimizedConfiguration {
    /// 人類可讀的配置摘要
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OptimizedConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "建議配置:")?;
        writeln!(f, "• 機台: {} ({})", self.press_name, self.press_code)?;
        writeln!(f, "• 刀模: {} ({})", self.die_name, self.die_code)?;
        writeln!(f, "• 軌數: {}", self.plan.effective_tracks)?;
        writeln!(f, "• 間距: {:.1}mm", self.interspace_mm)?;
        writeln!(f, "• 預估良率: {:.1}%", self.plan.yield_pct)?;
        writeln!(f, "• 總成本: €{:.2}", self.costs.total_cost)?;
        writeln!(f, "• 生產時間: {:.2} 小時", self.total_time_hours)?;
        writeln!(f)?;
        writeln!(f, "成本明細:")?;
        writeln!(f, "• 材料: €{:.2}", self.costs.material_cost)?;
        writeln!(f, "• 刀模: €{:.2}", self.costs.die_cost)?;
        write!(f, "• 機台: €{:.2}", self.costs.press_cost)
    }
}

/// 優化結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// 最佳配置
    pub best: OptimizedConfiguration,

    /// 評估的組合數
    pub combinations_evaluated: usize,

    /// 可行的組合數
    pub feasible_count: usize,
}
