//! 印刷/模切機模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ensure_non_negative, ensure_positive, LabelError, Result};

/// 印刷機規格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressSpec {
    /// 機台代碼
    pub code: String,

    /// 機台名稱
    pub name: String,

    /// 最高速度（m/min）
    pub max_speed_mpm: Decimal,

    /// 效率係數 (0, 1]
    pub efficiency_factor: Decimal,

    /// 最大幅寬（mm）
    pub max_web_width_mm: Decimal,

    /// 最小幅寬（mm）
    pub min_web_width_mm: Option<Decimal>,

    /// 最大軌數（None 表示不限）
    pub max_tracks: Option<u32>,

    /// 開機準備時間（分鐘）
    pub setup_time_min: Decimal,

    /// 換刀時間（分鐘）
    pub die_change_time_min: Option<Decimal>,

    /// 換料時間（分鐘）
    pub material_change_time_min: Option<Decimal>,

    /// 準備階段每小時成本
    pub setup_cost_per_hour: Decimal,

    /// 生產階段每小時成本
    pub production_cost_per_hour: Decimal,

    /// 每小時能源成本
    pub energy_cost_per_hour: Decimal,

    /// 每小時人工成本
    pub operator_cost_per_hour: Decimal,

    /// 管理費用比例（%）
    pub overhead_pct: Decimal,

    /// 每月維護成本
    pub maintenance_cost_per_month: Option<Decimal>,

    /// 每月折舊成本
    pub depreciation_cost_per_month: Option<Decimal>,
}

impl PressSpec {
    /// 創建新的印刷機規格
    ///
    /// 預設效率 0.85、準備時間 30 分鐘，其他費率為 0
    pub fn new(code: String, max_speed_mpm: Decimal, max_web_width_mm: Decimal) -> Self {
        Self {
            name: code.clone(),
            code,
            max_speed_mpm,
            efficiency_factor: Decimal::new(85, 2),
            max_web_width_mm,
            min_web_width_mm: None,
            max_tracks: None,
            setup_time_min: Decimal::from(30),
            die_change_time_min: None,
            material_change_time_min: None,
            setup_cost_per_hour: Decimal::ZERO,
            production_cost_per_hour: Decimal::ZERO,
            energy_cost_per_hour: Decimal::ZERO,
            operator_cost_per_hour: Decimal::ZERO,
            overhead_pct: Decimal::ZERO,
            maintenance_cost_per_month: None,
            depreciation_cost_per_month: None,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 建構器模式：設置效率係數
    pub fn with_efficiency(mut self, factor: Decimal) -> Self {
        self.efficiency_factor = factor;
        self
    }

    /// 建構器模式：設置最小幅寬
    pub fn with_min_web_width(mut self, width_mm: Decimal) -> Self {
        self.min_web_width_mm = Some(width_mm);
        self
    }

    /// 建構器模式：設置最大軌數
    pub fn with_max_tracks(mut self, tracks: u32) -> Self {
        self.max_tracks = Some(tracks);
        self
    }

    /// 建構器模式：設置準備、換刀、換料時間（分鐘）
    pub fn with_setup_times(
        mut self,
        setup_min: Decimal,
        die_change_min: Option<Decimal>,
        material_change_min: Option<Decimal>,
    ) -> Self {
        self.setup_time_min = setup_min;
        self.die_change_time_min = die_change_min;
        self.material_change_time_min = material_change_min;
        self
    }

    /// 建構器模式：設置每小時費率
    pub fn with_hourly_rates(
        mut self,
        setup: Decimal,
        production: Decimal,
        energy: Decimal,
        operator: Decimal,
    ) -> Self {
        self.setup_cost_per_hour = setup;
        self.production_cost_per_hour = production;
        self.energy_cost_per_hour = energy;
        self.operator_cost_per_hour = operator;
        self
    }

    /// 建構器模式：設置管理費用比例
    pub fn with_overhead(mut self, pct: Decimal) -> Self {
        self.overhead_pct = pct;
        self
    }

    /// 建構器模式：設置每月固定成本（維護、折舊）
    pub fn with_monthly_costs(mut self, maintenance: Decimal, depreciation: Decimal) -> Self {
        self.maintenance_cost_per_month = Some(maintenance);
        self.depreciation_cost_per_month = Some(depreciation);
        self
    }

    /// 有效速度（m/min）= 最高速度 × 效率
    pub fn effective_speed_mpm(&self) -> Decimal {
        self.max_speed_mpm * self.efficiency_factor
    }

    /// 總準備時間（分鐘）= 開機 + 換刀 + 換料
    pub fn total_setup_time_min(&self) -> Decimal {
        self.setup_time_min
            + self.die_change_time_min.unwrap_or(Decimal::ZERO)
            + self.material_change_time_min.unwrap_or(Decimal::ZERO)
    }

    /// 含固定成本與管理費用的每小時總成本
    ///
    /// 每月固定成本以 30 天 × 24 小時攤提
    pub fn total_hourly_cost(&self) -> Decimal {
        let monthly_fixed = self.maintenance_cost_per_month.unwrap_or(Decimal::ZERO)
            + self.depreciation_cost_per_month.unwrap_or(Decimal::ZERO);
        let hourly_fixed = monthly_fixed / Decimal::from(30 * 24);

        let base = self.production_cost_per_hour
            + self.energy_cost_per_hour
            + self.operator_cost_per_hour
            + hourly_fixed;

        base * (Decimal::ONE + self.overhead_pct / Decimal::from(100))
    }

    /// 驗證規格欄位
    pub fn validate(&self) -> Result<()> {
        ensure_positive("印刷機最高速度", self.max_speed_mpm)?;
        ensure_positive("印刷機最大幅寬", self.max_web_width_mm)?;

        if self.efficiency_factor <= Decimal::ZERO || self.efficiency_factor > Decimal::ONE {
            return Err(LabelError::InvalidInput(format!(
                "印刷機 {} 效率係數必須介於 0 到 1 之間（目前為 {}）",
                self.code, self.efficiency_factor
            )));
        }

        if self.max_tracks == Some(0) {
            return Err(LabelError::InvalidInput(format!(
                "印刷機 {} 最大軌數必須至少為 1",
                self.code
            )));
        }

        ensure_non_negative("準備時間", self.setup_time_min)?;
        if let Some(minutes) = self.die_change_time_min {
            ensure_non_negative("換刀時間", minutes)?;
        }
        if let Some(minutes) = self.material_change_time_min {
            ensure_non_negative("換料時間", minutes)?;
        }

        ensure_non_negative("準備每小時成本", self.setup_cost_per_hour)?;
        ensure_non_negative("生產每小時成本", self.production_cost_per_hour)?;
        ensure_non_negative("能源每小時成本", self.energy_cost_per_hour)?;
        ensure_non_negative("人工每小時成本", self.operator_cost_per_hour)?;
        ensure_non_negative("管理費用比例", self.overhead_pct)?;

        Ok(())
    }
}
