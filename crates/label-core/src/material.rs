//! 卷料（紙張/薄膜）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ensure_non_negative, ensure_positive, LabelError, Result};

/// 卷料規格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// 材料代碼
    pub code: String,

    /// 材料名稱
    pub name: String,

    /// 最大幅寬（mm）
    pub max_width_mm: Decimal,

    /// 單卷最大長度（m）
    pub max_length_m: Option<Decimal>,

    /// 每平方米成本
    pub cost_per_sqm: Decimal,

    /// 預期耗損率（%），未設定時使用良率策略的預設值
    pub waste_factor_pct: Option<Decimal>,

    /// 最小訂購長度（m）
    pub minimum_order_length_m: Option<Decimal>,
}

impl MaterialSpec {
    /// 創建新的卷料規格
    pub fn new(code: String, max_width_mm: Decimal, cost_per_sqm: Decimal) -> Self {
        Self {
            name: code.clone(),
            code,
            max_width_mm,
            max_length_m: None,
            cost_per_sqm,
            waste_factor_pct: None,
            minimum_order_length_m: None,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 建構器模式：設置單卷最大長度
    pub fn with_max_length(mut self, length_m: Decimal) -> Self {
        self.max_length_m = Some(length_m);
        self
    }

    /// 建構器模式：設置耗損率
    pub fn with_waste_factor(mut self, pct: Decimal) -> Self {
        self.waste_factor_pct = Some(pct);
        self
    }

    /// 建構器模式：設置最小訂購長度
    pub fn with_minimum_order_length(mut self, length_m: Decimal) -> Self {
        self.minimum_order_length_m = Some(length_m);
        self
    }

    /// 驗證規格欄位
    pub fn validate(&self) -> Result<()> {
        ensure_positive("材料最大幅寬", self.max_width_mm)?;
        ensure_positive("材料每平方米成本", self.cost_per_sqm)?;

        if let Some(waste) = self.waste_factor_pct {
            if waste < Decimal::ZERO || waste > Decimal::from(100) {
                return Err(LabelError::InvalidInput(format!(
                    "材料 {} 耗損率必須介於 0 到 100 之間（目前為 {}）",
                    self.code, waste
                )));
            }
        }

        if let Some(length) = self.max_length_m {
            ensure_positive("材料單卷最大長度", length)?;
        }

        if let Some(length) = self.minimum_order_length_m {
            ensure_non_negative("材料最小訂購長度", length)?;
        }

        Ok(())
    }
}
