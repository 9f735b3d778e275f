//! 報價主計算器

use label_core::{
    CostBreakdown, DieSpec, EngineConfig, LabelJob, MaterialSpec, MinYieldPolicy, PressSpec,
    ProductionPlan, ProductionRequest,
};
use rust_decimal::Decimal;

use crate::{
    CostCalculator, LayoutCalculator, PricingCalculator, Quotation, QuoteWarning, WarningKind,
    YieldEstimator,
};

/// 報價計算器
pub struct QuotationCalculator {
    /// 引擎配置
    config: EngineConfig,
}

impl QuotationCalculator {
    /// 創建新的報價計算器
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// 主報價計算入口
    ///
    /// 驗證失敗或無法排版時直接回傳錯誤，不回傳部分結果。
    /// `margin_pct` 為 None 時使用配置的預設利潤率。
    pub fn calculate(
        &self,
        request: &ProductionRequest,
        margin_pct: Option<Decimal>,
    ) -> label_core::Result<Quotation> {
        tracing::info!(
            "開始報價計算：{}×{}mm，{} 張，材料 {}，刀模 {}，機台 {}",
            request.job.label_width_mm,
            request.job.label_height_mm,
            request.job.total_quantity,
            request.material.code,
            request.die.code,
            request.press.code
        );

        let start_time = std::time::Instant::now();

        // Step 1: 輸入驗證
        tracing::debug!("Step 1: 輸入驗證");
        request.validate()?;

        // Step 2-4: 排版、良率、成本
        let (plan, costs) =
            self.plan_and_cost(&request.job, &request.material, &request.die, &request.press)?;

        // Step 5: 定價
        tracing::debug!("Step 5: 定價");
        let margin_pct = margin_pct.unwrap_or(self.config.default_margin_pct);
        let price = PricingCalculator::price(&costs, margin_pct);

        let mut quotation = Quotation {
            label_area_sqm: request.job.label_area_sqm(),
            geometric_utilization_pct: LayoutCalculator::geometric_utilization_pct(&request.job),
            plan,
            costs,
            price,
            warnings: Vec::new(),
        };

        // Step 6: 政策檢查（僅回報）
        for warning in self.check_policies(request, &quotation) {
            tracing::debug!("報價警告: {}", warning.message);
            quotation.add_warning(warning);
        }

        tracing::info!(
            "報價計算完成，耗時 {:?}：{} 軌，幅寬 {}mm，長度 {}m，良率 {}%，售價 {}",
            start_time.elapsed(),
            quotation.plan.effective_tracks,
            quotation.plan.web_width_mm,
            quotation.plan.linear_length_m.round_dp(2),
            quotation.plan.yield_pct,
            quotation.price.selling_price.round_dp(2)
        );

        Ok(quotation)
    }

    /// 排版 → 良率 → 成本（不做輸入驗證）
    ///
    /// 供已完成驗證的呼叫端重複評估不同配置使用
    pub fn plan_and_cost(
        &self,
        job: &LabelJob,
        material: &MaterialSpec,
        die: &DieSpec,
        press: &PressSpec,
    ) -> label_core::Result<(ProductionPlan, CostBreakdown)> {
        tracing::debug!("Step 2: 排版計算");
        let plan =
            LayoutCalculator::compute(job, material, die, press, self.config.edge_margin_mm)?;

        tracing::debug!("Step 3: 良率估算");
        let yield_pct = YieldEstimator::estimate(&plan, material, die, &self.config.yield_policy);
        let plan = plan.with_yield(yield_pct);

        tracing::debug!("Step 4: 成本計算");
        let costs = CostCalculator::compute(job, &plan, material, die, press, &self.config);

        Ok((plan, costs))
    }

    /// 產生政策警告；是否拒絕報價由呼叫端決定
    fn check_policies(&self, request: &ProductionRequest, quotation: &Quotation) -> Vec<QuoteWarning> {
        let mut warnings = Vec::new();
        let plan = &quotation.plan;

        if plan.effective_tracks < request.job.tracks_requested {
            warnings.push(QuoteWarning::info(
                WarningKind::TracksClamped,
                format!(
                    "要求 {} 軌，受機台/刀模/材料限制調整為 {} 軌",
                    request.job.tracks_requested, plan.effective_tracks
                ),
            ));
        }

        if self.config.min_yield_policy == MinYieldPolicy::Warn
            && plan.yield_pct < self.config.min_yield_pct
        {
            warnings.push(QuoteWarning::warning(
                WarningKind::BelowMinimumYield,
                format!(
                    "材料良率 {}% 低於最低可接受良率 {}%",
                    plan.yield_pct, self.config.min_yield_pct
                ),
            ));
        }

        if let Some(minimum) = request.material.minimum_order_length_m {
            if plan.linear_length_m < minimum {
                warnings.push(QuoteWarning::warning(
                    WarningKind::BelowMinimumOrderLength,
                    format!(
                        "走料長度 {}m 低於材料 {} 最小訂購長度 {}m",
                        plan.linear_length_m.round_dp(2),
                        request.material.code,
                        minimum
                    ),
                ));
            }
        }

        if let Some(roll_length) = request.material.max_length_m {
            if plan.linear_length_m > roll_length {
                let rolls = (plan.linear_length_m / roll_length).ceil();
                warnings.push(QuoteWarning::info(
                    WarningKind::ExceedsRollLength,
                    format!(
                        "走料長度 {}m 超過單卷長度 {}m，需要 {} 卷",
                        plan.linear_length_m.round_dp(2),
                        roll_length,
                        rolls
                    ),
                ));
            }
        }

        if let Some(min_width) = request.press.min_web_width_mm {
            if plan.web_width_mm < min_width {
                warnings.push(QuoteWarning::warning(
                    WarningKind::BelowPressMinimumWebWidth,
                    format!(
                        "幅寬 {}mm 低於機台 {} 最小幅寬 {}mm",
                        plan.web_width_mm, request.press.code, min_width
                    ),
                ));
            }
        }

        if self.config.requires_approval(quotation.price.selling_price) {
            warnings.push(QuoteWarning::info(
                WarningKind::ApprovalRequired,
                format!(
                    "售價 {} 達核准門檻 {}",
                    quotation.price.selling_price.round_dp(2),
                    self.config.approval_threshold
                ),
            ));
        }

        warnings
    }

    /// 獲取配置引用
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
