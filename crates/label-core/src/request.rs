//! 報價請求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ensure_non_negative, ensure_positive, DieSpec, EngineConfig, LabelError, MaterialSpec,
    PressSpec, Result,
};

/// 標籤寬度、高度、間距的上限（mm）
pub const MAX_LABEL_DIMENSION_MM: i64 = 10_000;

/// 標籤工單幾何與數量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelJob {
    /// 標籤寬度（mm）
    pub label_width_mm: Decimal,

    /// 標籤高度（mm）
    pub label_height_mm: Decimal,

    /// 標籤間距（mm）
    pub interspace_mm: Decimal,

    /// 要求軌數
    pub tracks_requested: u32,

    /// 總數量（張）
    pub total_quantity: u64,
}

impl LabelJob {
    /// 創建新的標籤工單（單軌）
    pub fn new(
        label_width_mm: Decimal,
        label_height_mm: Decimal,
        interspace_mm: Decimal,
        total_quantity: u64,
    ) -> Self {
        Self {
            label_width_mm,
            label_height_mm,
            interspace_mm,
            tracks_requested: 1,
            total_quantity,
        }
    }

    /// 以配置的預設間距創建標籤工單（單軌）
    pub fn from_config(
        label_width_mm: Decimal,
        label_height_mm: Decimal,
        total_quantity: u64,
        config: &EngineConfig,
    ) -> Self {
        Self::new(
            label_width_mm,
            label_height_mm,
            config.default_interspace_mm,
            total_quantity,
        )
    }

    /// 建構器模式：設置要求軌數
    pub fn with_tracks(mut self, tracks: u32) -> Self {
        self.tracks_requested = tracks;
        self
    }

    /// 建構器模式：設置間距
    pub fn with_interspace(mut self, interspace_mm: Decimal) -> Self {
        self.interspace_mm = interspace_mm;
        self
    }

    /// 單張標籤面積（m²）
    pub fn label_area_sqm(&self) -> Decimal {
        self.label_width_mm * self.label_height_mm / Decimal::from(1_000_000)
    }

    /// 全部標籤的理論面積（m²，不含耗損）
    pub fn total_area_sqm(&self) -> Decimal {
        self.label_area_sqm() * Decimal::from(self.total_quantity)
    }

    /// 驗證工單欄位
    pub fn validate(&self) -> Result<()> {
        ensure_positive("標籤寬度", self.label_width_mm)?;
        ensure_positive("標籤高度", self.label_height_mm)?;
        ensure_non_negative("標籤間距", self.interspace_mm)?;

        let limit = Decimal::from(MAX_LABEL_DIMENSION_MM);
        for (field, value) in [
            ("標籤寬度", self.label_width_mm),
            ("標籤高度", self.label_height_mm),
            ("標籤間距", self.interspace_mm),
        ] {
            if value > limit {
                return Err(LabelError::InvalidInput(format!(
                    "{} 不可超過 {}mm（目前為 {}）",
                    field, limit, value
                )));
            }
        }

        if self.tracks_requested == 0 {
            return Err(LabelError::InvalidInput("軌數必須至少為 1".to_string()));
        }

        if self.total_quantity == 0 {
            return Err(LabelError::InvalidInput("總數量必須至少為 1".to_string()));
        }

        Ok(())
    }
}

/// 單筆報價請求：工單 + 選定的材料、刀模、印刷機
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRequest {
    pub job: LabelJob,
    pub material: MaterialSpec,
    pub die: DieSpec,
    pub press: PressSpec,
}

impl ProductionRequest {
    /// 創建新的報價請求
    pub fn new(job: LabelJob, material: MaterialSpec, die: DieSpec, press: PressSpec) -> Self {
        Self {
            job,
            material,
            die,
            press,
        }
    }

    /// 驗證工單與所有目錄規格
    pub fn validate(&self) -> Result<()> {
        self.job.validate()?;
        self.material.validate()?;
        self.die.validate()?;
        self.press.validate()?;
        Ok(())
    }
}
