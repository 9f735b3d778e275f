//! 成本計算：材料、刀模、印刷機

use label_core::{
    CostBreakdown, DieSpec, EngineConfig, LabelJob, MaterialSpec, PressCostDetail, PressSpec,
    ProductionPlan,
};
use rust_decimal::Decimal;

use crate::ratio_or_zero;

/// 成本計算器
///
/// 除數為 0 的報表指標一律回傳 0，不視為錯誤
pub struct CostCalculator;

impl CostCalculator {
    /// 計算成本明細
    pub fn compute(
        job: &LabelJob,
        plan: &ProductionPlan,
        material: &MaterialSpec,
        die: &DieSpec,
        press: &PressSpec,
        config: &EngineConfig,
    ) -> CostBreakdown {
        let theoretical_area_sqm = job.total_area_sqm();

        // 材料成本（含耗損）
        let waste_multiplier = Self::waste_multiplier(plan.yield_pct, config);
        let actual_material_area_sqm = theoretical_area_sqm * waste_multiplier;
        let material_cost = actual_material_area_sqm * material.cost_per_sqm;

        // 刀模成本
        let die_cost = Self::die_cost(die, config);

        // 印刷機成本
        let press_detail = Self::press_cost(plan.linear_length_m, press);
        let press_cost = press_detail.total();

        let total_cost = material_cost + die_cost + press_cost;

        tracing::debug!(
            "成本：材料 {}，刀模 {}，印刷機 {}，合計 {}",
            material_cost,
            die_cost,
            press_cost,
            total_cost
        );

        CostBreakdown {
            material_cost,
            die_cost,
            press_cost,
            total_cost,
            cost_per_unit: ratio_or_zero(total_cost, Decimal::from(job.total_quantity)),
            cost_per_sqm: ratio_or_zero(total_cost, theoretical_area_sqm),
            theoretical_area_sqm,
            actual_material_area_sqm,
            total_quantity: job.total_quantity,
            press_detail,
        }
    }

    /// 耗損倍數 = 100 / 良率；良率為 0 時使用配置的固定倍數
    pub fn waste_multiplier(yield_pct: Decimal, config: &EngineConfig) -> Decimal {
        if yield_pct > Decimal::ZERO {
            Decimal::from(100) / yield_pct
        } else {
            config.zero_yield_waste_multiplier
        }
    }

    /// 刀模成本 =（使用成本 + 折舊）× 排廢難度倍數
    pub fn die_cost(die: &DieSpec, config: &EngineConfig) -> Decimal {
        die.base_cost_per_use()
            * config
                .die_difficulty_multipliers
                .for_difficulty(die.stripping_difficulty)
    }

    /// 印刷機成本明細
    ///
    /// 準備時間含換刀與換料；能源與人工以總時間計，準備與生產各按其時段計
    pub fn press_cost(linear_length_m: Decimal, press: &PressSpec) -> PressCostDetail {
        let production_hours =
            ratio_or_zero(linear_length_m, press.effective_speed_mpm() * Decimal::from(60));
        let setup_hours = press.total_setup_time_min() / Decimal::from(60);
        let total_hours = production_hours + setup_hours;

        let setup_cost = setup_hours * press.setup_cost_per_hour;
        let production_cost = production_hours * press.production_cost_per_hour;
        let energy_cost = total_hours * press.energy_cost_per_hour;
        let operator_cost = total_hours * press.operator_cost_per_hour;

        let base = setup_cost + production_cost + energy_cost + operator_cost;
        let overhead_cost = base * press.overhead_pct / Decimal::from(100);

        PressCostDetail {
            production_hours,
            setup_hours,
            total_hours,
            setup_cost,
            production_cost,
            energy_cost,
            operator_cost,
            overhead_cost,
        }
    }
}
