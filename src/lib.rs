//! # Label Quotation
//!
//! 標籤卷料生產報價引擎
//!
//! - [`model`]：規格、配置與結果資料模型
//! - [`calc`]：排版、良率、成本、定價與單筆報價
//! - [`optimizer`]：印刷機 × 刀模 × 軌數 × 間距的配置搜尋
//! - [`logging`]：`tracing` 訂閱者初始化

pub mod logging;

pub use label_calc as calc;
pub use label_core as model;
pub use label_optimizer as optimizer;

pub use rust_decimal::Decimal;

/// 常用類型
pub mod prelude {
    pub use label_calc::{QuotationCalculator, Quotation, QuoteWarning, WarningKind};
    pub use label_core::{
        DieSpec, DieUsage, EngineConfig, LabelError, LabelJob, MaterialSpec, PressSpec,
        ProductionRequest, StrippingDifficulty,
    };
    pub use label_optimizer::{ConfigurationOptimizer, Objective, OptimizationRequest};
    pub use rust_decimal::Decimal;
}
