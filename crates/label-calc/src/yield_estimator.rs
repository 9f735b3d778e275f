//! 良率估算

use label_core::{DieSpec, MaterialSpec, ProductionPlan, YieldPolicy};
use rust_decimal::Decimal;

/// 良率估算器
///
/// 啟發式評分：由基礎良率依材料耗損、幅寬使用率、排廢難度、單量長短、軌數加減分，
/// 結果限制在 [0, 100]
pub struct YieldEstimator;

impl YieldEstimator {
    /// 估算良率（%）
    pub fn estimate(
        plan: &ProductionPlan,
        material: &MaterialSpec,
        die: &DieSpec,
        policy: &YieldPolicy,
    ) -> Decimal {
        let mut yield_pct = policy.base_yield_pct;

        // 材料耗損
        yield_pct -= material
            .waste_factor_pct
            .unwrap_or(policy.default_waste_factor_pct);

        // 幅寬使用率
        yield_pct -= Self::width_penalty(plan.web_width_mm, material.max_width_mm, policy);

        // 排廢難度
        yield_pct -= policy.difficulty_penalty(die.stripping_difficulty);

        // 短單
        yield_pct -= Self::run_length_penalty(plan.linear_length_m, policy);

        // 軌數
        if plan.effective_tracks == 1 {
            yield_pct -= policy.single_track_penalty;
        } else if plan.effective_tracks >= policy.multi_track_threshold {
            yield_pct += policy.multi_track_bonus;
        }

        yield_pct.clamp(Decimal::ZERO, Decimal::from(100))
    }

    /// 幅寬使用率扣分
    fn width_penalty(web_width_mm: Decimal, max_width_mm: Decimal, policy: &YieldPolicy) -> Decimal {
        if max_width_mm <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let efficiency = web_width_mm / max_width_mm;
        if efficiency < policy.low_width_efficiency {
            policy.low_width_penalty
        } else if efficiency < policy.medium_width_efficiency {
            policy.medium_width_penalty
        } else {
            Decimal::ZERO
        }
    }

    /// 單量長短扣分
    fn run_length_penalty(linear_length_m: Decimal, policy: &YieldPolicy) -> Decimal {
        if linear_length_m < policy.very_short_run_m {
            policy.very_short_run_penalty
        } else if linear_length_m < policy.short_run_m {
            policy.short_run_penalty
        } else {
            Decimal::ZERO
        }
    }
}
