//! # Label Core
//!
//! 核心資料模型與類型定義：卷料、刀模、印刷機、報價請求與計算結果

pub mod config;
pub mod die;
pub mod material;
pub mod plan;
pub mod press;
pub mod request;
pub mod usage;

// Re-export 主要類型
pub use config::{DifficultyMultipliers, EngineConfig, MinYieldPolicy, YieldPolicy};
pub use die::{DieSpec, StrippingDifficulty};
pub use material::MaterialSpec;
pub use plan::{CostBreakdown, PressCostDetail, PriceQuote, ProductionPlan};
pub use press::PressSpec;
pub use request::{LabelJob, ProductionRequest, MAX_LABEL_DIMENSION_MM};
pub use usage::DieUsage;

use rust_decimal::Decimal;

/// 報價引擎錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LabelError {
    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error(
        "無法排版: {tracks} 軌需要幅寬 {web_width_mm}mm，\
         材料最大幅寬 {material_max_width_mm}mm，印刷機最大幅寬 {press_max_web_width_mm}mm"
    )]
    InfeasibleLayout {
        tracks: u32,
        web_width_mm: Decimal,
        material_max_width_mm: Decimal,
        press_max_web_width_mm: Decimal,
    },

    #[error(
        "找不到可行配置: {presses} 台印刷機 × {dies} 把刀模，最多 {max_tracks_preference} 軌，\
         間距候選 {interspace_candidates:?}"
    )]
    NoFeasibleConfiguration {
        presses: usize,
        dies: usize,
        max_tracks_preference: u32,
        interspace_candidates: Vec<Decimal>,
    },

    #[error("配置錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// 檢查數值必須大於零
pub(crate) fn ensure_positive(field: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(LabelError::InvalidInput(format!(
            "{} 必須大於 0（目前為 {}）",
            field, value
        )));
    }
    Ok(())
}

/// 檢查數值不可為負
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(LabelError::InvalidInput(format!(
            "{} 不可為負數（目前為 {}）",
            field, value
        )));
    }
    Ok(())
}
