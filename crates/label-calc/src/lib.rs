//! # Label Calculation Engine
//!
//! 核心報價計算引擎：排版 → 良率 → 成本 → 定價

pub mod calculator;
pub mod costing;
pub mod layout;
pub mod pricing;
pub mod yield_estimator;

// Re-export 主要類型
pub use calculator::QuotationCalculator;
pub use costing::CostCalculator;
pub use layout::LayoutCalculator;
pub use pricing::PricingCalculator;
pub use yield_estimator::YieldEstimator;

use label_core::{CostBreakdown, PriceQuote, ProductionPlan};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 報價計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// 生產計劃
    pub plan: ProductionPlan,

    /// 成本明細
    pub costs: CostBreakdown,

    /// 報價
    pub price: PriceQuote,

    /// 單張標籤面積（m²）
    pub label_area_sqm: Decimal,

    /// 標籤與間距的幾何利用率（%）
    pub geometric_utilization_pct: Decimal,

    /// 警告信息
    pub warnings: Vec<QuoteWarning>,
}

impl Quotation {
    /// 添加警告
    pub fn add_warning(&mut self, warning: QuoteWarning) {
        self.warnings.push(warning);
    }

    /// 是否有指定類型的警告
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}

/// 報價警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteWarning {
    pub kind: WarningKind,
    pub message: String,
    pub severity: WarningSeverity,
}

impl QuoteWarning {
    pub fn new(kind: WarningKind, message: String, severity: WarningSeverity) -> Self {
        Self {
            kind,
            message,
            severity,
        }
    }

    pub fn info(kind: WarningKind, message: String) -> Self {
        Self::new(kind, message, WarningSeverity::Info)
    }

    pub fn warning(kind: WarningKind, message: String) -> Self {
        Self::new(kind, message, WarningSeverity::Warning)
    }
}

/// 警告類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// 軌數因機台、刀模或材料限制而減少
    TracksClamped,
    /// 良率低於最低可接受值
    BelowMinimumYield,
    /// 走料長度低於材料最小訂購長度
    BelowMinimumOrderLength,
    /// 走料長度超過單卷長度
    ExceedsRollLength,
    /// 幅寬低於印刷機最小幅寬
    BelowPressMinimumWebWidth,
    /// 售價達核准門檻
    ApprovalRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Info,
    Warning,
}

/// 報表用除法：除數為 0 時回傳 0
pub(crate) fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}
