//! 排版計算：軌數、幅寬、走料長度

use label_core::{DieSpec, LabelError, LabelJob, MaterialSpec, PressSpec, ProductionPlan};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 排版計算器
pub struct LayoutCalculator;

impl LayoutCalculator {
    /// 計算生產排版
    ///
    /// 軌數依序受印刷機、刀模、材料幅寬限制；最終幅寬仍超過材料或印刷機上限時回傳
    /// `InfeasibleLayout`。回傳的計劃良率為 0，由 [`crate::YieldEstimator`] 填入。
    pub fn compute(
        job: &LabelJob,
        material: &MaterialSpec,
        die: &DieSpec,
        press: &PressSpec,
        edge_margin_mm: Decimal,
    ) -> label_core::Result<ProductionPlan> {
        // Step 1: 機台與刀模軌數限制
        let mut tracks = job.tracks_requested;
        if let Some(max) = press.max_tracks {
            tracks = tracks.min(max);
        }
        if let Some(max) = die.max_tracks {
            tracks = tracks.min(max);
        }
        tracks = tracks.max(1);

        let mut web_width =
            Self::web_width(job.label_width_mm, job.interspace_mm, tracks, edge_margin_mm);

        // Step 2: 材料幅寬不足時，以材料可容納的最大軌數重算
        if web_width > material.max_width_mm {
            let by_material = Self::max_tracks_for_width(
                material.max_width_mm,
                job.label_width_mm,
                job.interspace_mm,
                edge_margin_mm,
            );
            tracks = tracks.min(by_material).max(1);
            web_width =
                Self::web_width(job.label_width_mm, job.interspace_mm, tracks, edge_margin_mm);

            tracing::debug!(
                "材料 {} 幅寬不足，軌數調整為 {}（幅寬 {}mm）",
                material.code,
                tracks,
                web_width
            );
        }

        // Step 3: 最終幅寬檢查
        if web_width > material.max_width_mm || web_width > press.max_web_width_mm {
            return Err(LabelError::InfeasibleLayout {
                tracks,
                web_width_mm: web_width,
                material_max_width_mm: material.max_width_mm,
                press_max_web_width_mm: press.max_web_width_mm,
            });
        }

        // Step 4: 走料長度
        let labels_per_meter = Self::labels_per_meter(job, die);
        let total_labels_per_meter = labels_per_meter * Decimal::from(tracks);
        if total_labels_per_meter <= Decimal::ZERO {
            return Err(LabelError::InvalidInput(
                "標籤高度加間距必須大於 0".to_string(),
            ));
        }

        let linear_length_m = Decimal::from(job.total_quantity) / total_labels_per_meter;

        Ok(ProductionPlan::new(
            tracks,
            web_width,
            labels_per_meter,
            linear_length_m,
        ))
    }

    /// 幅寬 = 標籤寬 × 軌數 + 間距 × (軌數 - 1) + 2 × 邊距
    pub fn web_width(
        label_width_mm: Decimal,
        interspace_mm: Decimal,
        tracks: u32,
        edge_margin_mm: Decimal,
    ) -> Decimal {
        let tracks = Decimal::from(tracks);
        label_width_mm * tracks
            + interspace_mm * (tracks - Decimal::ONE)
            + Decimal::TWO * edge_margin_mm
    }

    /// 指定幅寬可容納的最大軌數（可能為 0）
    pub fn max_tracks_for_width(
        max_width_mm: Decimal,
        label_width_mm: Decimal,
        interspace_mm: Decimal,
        edge_margin_mm: Decimal,
    ) -> u32 {
        let pitch = label_width_mm + interspace_mm;
        if pitch <= Decimal::ZERO {
            return 0;
        }

        let raw = ((max_width_mm - Decimal::TWO * edge_margin_mm + interspace_mm) / pitch).floor();
        if raw <= Decimal::ZERO {
            0
        } else {
            raw.to_u32().unwrap_or(u32::MAX)
        }
    }

    /// 單軌每米標籤數
    ///
    /// 圓刀以每圈可容納的標籤數換算；其餘以標籤高度加間距換算
    pub fn labels_per_meter(job: &LabelJob, die: &DieSpec) -> Decimal {
        let pitch = job.label_height_mm + job.interspace_mm;
        if pitch <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        match die.repeat_length_mm {
            Some(repeat) if repeat > Decimal::ZERO => {
                let labels_per_repeat = (repeat / pitch).floor().max(Decimal::ONE);
                labels_per_repeat / (repeat / Decimal::from(1000))
            }
            _ => Decimal::from(1000) / pitch,
        }
    }

    /// 標籤與間距的幾何利用率（%）= 標籤面積 / ((寬 + 間距) × (高 + 間距))
    pub fn geometric_utilization_pct(job: &LabelJob) -> Decimal {
        let cell = (job.label_width_mm + job.interspace_mm) * (job.label_height_mm + job.interspace_mm);
        crate::ratio_or_zero(job.label_width_mm * job.label_height_mm, cell) * Decimal::from(100)
    }
}
