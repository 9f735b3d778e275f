//! 報價引擎配置模型

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LabelError, Result, StrippingDifficulty};

/// 報價引擎配置
///
/// 所有計算入口都明確接收此配置，引擎內部沒有全域預設值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 每側邊距（mm）
    pub edge_margin_mm: Decimal,

    /// 預設利潤率（%）
    pub default_margin_pct: Decimal,

    /// 預設標籤間距（mm）
    pub default_interspace_mm: Decimal,

    /// 最低可接受良率（%）
    pub min_yield_pct: Decimal,

    /// 低於最低良率時的處理方式
    pub min_yield_policy: MinYieldPolicy,

    /// 良率為 0 時的耗損倍數
    pub zero_yield_waste_multiplier: Decimal,

    /// 良率估算參數
    pub yield_policy: YieldPolicy,

    /// 刀模排廢難度成本倍數
    pub die_difficulty_multipliers: DifficultyMultipliers,

    /// 優化器測試的間距候選值（mm）
    pub interspace_candidates_mm: Vec<Decimal>,

    /// 優化器預設最大軌數偏好
    pub default_max_tracks_preference: u32,

    /// 報價有效天數
    pub quotation_validity_days: u32,

    /// 大額訂單是否需要核准
    pub require_approval: bool,

    /// 核准門檻金額
    pub approval_threshold: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            edge_margin_mm: Decimal::from(5),
            default_margin_pct: Decimal::from(30),
            default_interspace_mm: Decimal::new(32, 1),
            min_yield_pct: Decimal::from(80),
            min_yield_policy: MinYieldPolicy::Warn,
            zero_yield_waste_multiplier: Decimal::new(12, 1),
            yield_policy: YieldPolicy::default(),
            die_difficulty_multipliers: DifficultyMultipliers::default(),
            interspace_candidates_mm: vec![
                Decimal::from(2),
                Decimal::new(32, 1),
                Decimal::from(4),
                Decimal::from(5),
            ],
            default_max_tracks_preference: 4,
            quotation_validity_days: 30,
            require_approval: true,
            approval_threshold: Decimal::from(10_000),
        }
    }
}

impl EngineConfig {
    /// 從 JSON 字串載入配置（缺少的欄位使用預設值）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LabelError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置邊距
    pub fn with_edge_margin(mut self, margin_mm: Decimal) -> Self {
        self.edge_margin_mm = margin_mm;
        self
    }

    /// 建構器模式：設置預設利潤率
    pub fn with_default_margin(mut self, pct: Decimal) -> Self {
        self.default_margin_pct = pct;
        self
    }

    /// 建構器模式：設置預設間距
    pub fn with_default_interspace(mut self, interspace_mm: Decimal) -> Self {
        self.default_interspace_mm = interspace_mm;
        self
    }

    /// 建構器模式：設置最低良率與處理方式
    pub fn with_min_yield(mut self, pct: Decimal, policy: MinYieldPolicy) -> Self {
        self.min_yield_pct = pct;
        self.min_yield_policy = policy;
        self
    }

    /// 建構器模式：設置良率為 0 時的耗損倍數
    pub fn with_zero_yield_waste_multiplier(mut self, multiplier: Decimal) -> Self {
        self.zero_yield_waste_multiplier = multiplier;
        self
    }

    /// 建構器模式：設置間距候選值
    pub fn with_interspace_candidates(mut self, candidates: Vec<Decimal>) -> Self {
        self.interspace_candidates_mm = candidates;
        self
    }

    /// 建構器模式：設置核准門檻
    pub fn with_approval_threshold(mut self, require: bool, threshold: Decimal) -> Self {
        self.require_approval = require;
        self.approval_threshold = threshold;
        self
    }

    /// 檢查金額是否需要核准
    pub fn requires_approval(&self, amount: Decimal) -> bool {
        self.require_approval && amount >= self.approval_threshold
    }

    /// 計算報價有效期限
    pub fn valid_until(&self, issue_date: NaiveDate) -> NaiveDate {
        issue_date + Duration::days(i64::from(self.quotation_validity_days))
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.edge_margin_mm < Decimal::ZERO {
            return Err(LabelError::Config("邊距不可為負數".to_string()));
        }

        if self.default_interspace_mm < Decimal::ZERO {
            return Err(LabelError::Config("預設間距不可為負數".to_string()));
        }

        if self.zero_yield_waste_multiplier < Decimal::ONE {
            return Err(LabelError::Config(format!(
                "良率為 0 時的耗損倍數必須至少為 1（目前為 {}）",
                self.zero_yield_waste_multiplier
            )));
        }

        if self.interspace_candidates_mm.iter().any(|i| *i < Decimal::ZERO) {
            return Err(LabelError::Config("間距候選值不可為負數".to_string()));
        }

        if self.default_max_tracks_preference == 0 {
            return Err(LabelError::Config("最大軌數偏好必須至少為 1".to_string()));
        }

        if self.min_yield_pct < Decimal::ZERO || self.min_yield_pct > Decimal::from(100) {
            return Err(LabelError::Config(format!(
                "最低良率必須介於 0 到 100 之間（目前為 {}）",
                self.min_yield_pct
            )));
        }

        ensure_config_non_negative("核准門檻金額", self.approval_threshold)?;
        self.yield_policy.validate()?;
        self.die_difficulty_multipliers.validate()?;

        Ok(())
    }
}

/// 配置數值不可為負
fn ensure_config_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(LabelError::Config(format!(
            "{} 不可為負數（目前為 {}）",
            field, value
        )));
    }
    Ok(())
}

/// 低於最低良率時的處理方式
///
/// 引擎只回報良率；是否拒絕報價由呼叫端決定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinYieldPolicy {
    /// 不檢查
    Ignore,
    /// 附加警告
    Warn,
}

/// 良率估算參數
///
/// 啟發式評分常數，非物理量測
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldPolicy {
    /// 基礎良率（%）
    pub base_yield_pct: Decimal,

    /// 材料未設定耗損率時使用的預設值（%）
    pub default_waste_factor_pct: Decimal,

    /// 幅寬使用率低門檻與扣分
    pub low_width_efficiency: Decimal,
    pub low_width_penalty: Decimal,

    /// 幅寬使用率中門檻與扣分
    pub medium_width_efficiency: Decimal,
    pub medium_width_penalty: Decimal,

    /// 排廢難度扣分
    pub easy_penalty: Decimal,
    pub medium_penalty: Decimal,
    pub difficult_penalty: Decimal,
    pub very_difficult_penalty: Decimal,
    pub unspecified_penalty: Decimal,

    /// 極短單長度門檻（m）與扣分
    pub very_short_run_m: Decimal,
    pub very_short_run_penalty: Decimal,

    /// 短單長度門檻（m）與扣分
    pub short_run_m: Decimal,
    pub short_run_penalty: Decimal,

    /// 單軌扣分
    pub single_track_penalty: Decimal,

    /// 多軌加分門檻與加分
    pub multi_track_threshold: u32,
    pub multi_track_bonus: Decimal,
}

impl Default for YieldPolicy {
    fn default() -> Self {
        Self {
            base_yield_pct: Decimal::from(95),
            default_waste_factor_pct: Decimal::from(5),
            low_width_efficiency: Decimal::new(6, 1),
            low_width_penalty: Decimal::from(10),
            medium_width_efficiency: Decimal::new(8, 1),
            medium_width_penalty: Decimal::from(5),
            easy_penalty: Decimal::ZERO,
            medium_penalty: Decimal::from(2),
            difficult_penalty: Decimal::from(5),
            very_difficult_penalty: Decimal::from(10),
            unspecified_penalty: Decimal::from(2),
            very_short_run_m: Decimal::from(100),
            very_short_run_penalty: Decimal::from(5),
            short_run_m: Decimal::from(500),
            short_run_penalty: Decimal::from(2),
            single_track_penalty: Decimal::from(3),
            multi_track_threshold: 4,
            multi_track_bonus: Decimal::from(2),
        }
    }
}

impl YieldPolicy {
    /// 驗證良率參數
    ///
    /// 扣分與加分不可為負；幅寬門檻介於 (0, 1] 且低門檻不高於中門檻；極短單門檻不高於短單門檻
    pub fn validate(&self) -> Result<()> {
        ensure_config_non_negative("基礎良率", self.base_yield_pct)?;

        if self.default_waste_factor_pct < Decimal::ZERO
            || self.default_waste_factor_pct > Decimal::from(100)
        {
            return Err(LabelError::Config(format!(
                "預設耗損率必須介於 0 到 100 之間（目前為 {}）",
                self.default_waste_factor_pct
            )));
        }

        for (field, value) in [
            ("幅寬使用率低門檻", self.low_width_efficiency),
            ("幅寬使用率中門檻", self.medium_width_efficiency),
        ] {
            if value <= Decimal::ZERO || value > Decimal::ONE {
                return Err(LabelError::Config(format!(
                    "{}必須介於 0 到 1 之間（目前為 {}）",
                    field, value
                )));
            }
        }
        if self.low_width_efficiency > self.medium_width_efficiency {
            return Err(LabelError::Config(format!(
                "幅寬使用率低門檻 {} 不可高於中門檻 {}",
                self.low_width_efficiency, self.medium_width_efficiency
            )));
        }

        ensure_config_non_negative("極短單長度門檻", self.very_short_run_m)?;
        if self.very_short_run_m > self.short_run_m {
            return Err(LabelError::Config(format!(
                "極短單長度門檻 {}m 不可高於短單門檻 {}m",
                self.very_short_run_m, self.short_run_m
            )));
        }

        for (field, value) in [
            ("幅寬使用率低扣分", self.low_width_penalty),
            ("幅寬使用率中扣分", self.medium_width_penalty),
            ("簡單排廢扣分", self.easy_penalty),
            ("中等排廢扣分", self.medium_penalty),
            ("困難排廢扣分", self.difficult_penalty),
            ("極難排廢扣分", self.very_difficult_penalty),
            ("未指定排廢扣分", self.unspecified_penalty),
            ("極短單扣分", self.very_short_run_penalty),
            ("短單扣分", self.short_run_penalty),
            ("單軌扣分", self.single_track_penalty),
            ("多軌加分", self.multi_track_bonus),
        ] {
            ensure_config_non_negative(field, value)?;
        }

        Ok(())
    }

    /// 依排廢難度取得扣分
    pub fn difficulty_penalty(&self, difficulty: StrippingDifficulty) -> Decimal {
        match difficulty {
            StrippingDifficulty::Easy => self.easy_penalty,
            StrippingDifficulty::Medium => self.medium_penalty,
            StrippingDifficulty::Difficult => self.difficult_penalty,
            StrippingDifficulty::VeryDifficult => self.very_difficult_penalty,
            StrippingDifficulty::Unspecified => self.unspecified_penalty,
        }
    }
}

/// 刀模排廢難度成本倍數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyMultipliers {
    pub easy: Decimal,
    pub medium: Decimal,
    pub difficult: Decimal,
    pub very_difficult: Decimal,
    pub unspecified: Decimal,
}

impl Default for DifficultyMultipliers {
    fn default() -> Self {
        Self {
            easy: Decimal::ONE,
            medium: Decimal::new(11, 1),
            difficult: Decimal::new(13, 1),
            very_difficult: Decimal::new(15, 1),
            unspecified: Decimal::new(11, 1),
        }
    }
}

impl DifficultyMultipliers {
    /// 驗證倍數不可為負
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("簡單排廢倍數", self.easy),
            ("中等排廢倍數", self.medium),
            ("困難排廢倍數", self.difficult),
            ("極難排廢倍數", self.very_difficult),
            ("未指定排廢倍數", self.unspecified),
        ] {
            ensure_config_non_negative(field, value)?;
        }
        Ok(())
    }

    /// 依排廢難度取得倍數
    pub fn for_difficulty(&self, difficulty: StrippingDifficulty) -> Decimal {
        match difficulty {
            StrippingDifficulty::Easy => self.easy,
            StrippingDifficulty::Medium => self.medium,
            StrippingDifficulty::Difficult => self.difficult,
            StrippingDifficulty::VeryDifficult => self.very_difficult,
            StrippingDifficulty::Unspecified => self.unspecified,
        }
    }
}
