//! 刀模模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ensure_non_negative, ensure_positive, LabelError, Result};

/// 排廢難度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrippingDifficulty {
    Easy,
    Medium,
    Difficult,
    VeryDifficult,
    /// 未設定或無法識別的難度
    #[default]
    #[serde(other)]
    Unspecified,
}

/// 刀模規格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieSpec {
    /// 刀模代碼
    pub code: String,

    /// 刀模名稱
    pub name: String,

    /// 最大軌數（None 表示不限）
    pub max_tracks: Option<u32>,

    /// 圓刀一圈的重複長度（mm），平刀為 None
    pub repeat_length_mm: Option<Decimal>,

    /// 每次使用成本
    pub cost_per_use: Decimal,

    /// 每次使用折舊（預先攤提）
    pub depreciation_per_use: Option<Decimal>,

    /// 排廢難度
    pub stripping_difficulty: StrippingDifficulty,
}

impl DieSpec {
    /// 創建新的刀模規格
    pub fn new(code: String, cost_per_use: Decimal) -> Self {
        Self {
            name: code.clone(),
            code,
            max_tracks: None,
            repeat_length_mm: None,
            cost_per_use,
            depreciation_per_use: None,
            stripping_difficulty: StrippingDifficulty::Unspecified,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 建構器模式：設置最大軌數
    pub fn with_max_tracks(mut self, tracks: u32) -> Self {
        self.max_tracks = Some(tracks);
        self
    }

    /// 建構器模式：設置圓刀重複長度
    pub fn with_repeat_length(mut self, length_mm: Decimal) -> Self {
        self.repeat_length_mm = Some(length_mm);
        self
    }

    /// 建構器模式：設置每次折舊
    pub fn with_depreciation_per_use(mut self, amount: Decimal) -> Self {
        self.depreciation_per_use = Some(amount);
        self
    }

    /// 建構器模式：由刀模造價與預期使用次數攤提折舊
    ///
    /// 預期使用次數為 0 時折舊為 0
    pub fn with_amortized_tooling(mut self, tool_cost: Decimal, expected_uses: u64) -> Self {
        let per_use = if expected_uses > 0 {
            tool_cost / Decimal::from(expected_uses)
        } else {
            Decimal::ZERO
        };
        self.depreciation_per_use = Some(per_use);
        self
    }

    /// 建構器模式：設置排廢難度
    pub fn with_stripping_difficulty(mut self, difficulty: StrippingDifficulty) -> Self {
        self.stripping_difficulty = difficulty;
        self
    }

    /// 每次使用的基本成本（使用成本 + 折舊）
    pub fn base_cost_per_use(&self) -> Decimal {
        self.cost_per_use + self.depreciation_per_use.unwrap_or(Decimal::ZERO)
    }

    /// 驗證規格欄位
    pub fn validate(&self) -> Result<()> {
        if self.max_tracks == Some(0) {
            return Err(LabelError::InvalidInput(format!(
                "刀模 {} 最大軌數必須至少為 1",
                self.code
            )));
        }

        if let Some(repeat) = self.repeat_length_mm {
            ensure_positive("刀模重複長度", repeat)?;
        }

        ensure_non_negative("刀模使用成本", self.cost_per_use)?;
        if let Some(depreciation) = self.depreciation_per_use {
            ensure_non_negative("刀模折舊", depreciation)?;
        }

        Ok(())
    }
}
