//! 配置窮舉搜尋

use label_calc::QuotationCalculator;
use label_core::{EngineConfig, LabelError, LabelJob};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::{OptimizationRequest, OptimizationResult, OptimizedConfiguration};

/// 待評估的組合
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    /// 列舉順序
    pub index: usize,
    pub press_index: usize,
    pub die_index: usize,
    pub tracks: u32,
    pub interspace_mm: Decimal,
}

/// 配置優化器
///
/// 每個組合獨立評估，可平行計算；最佳配置以（分數、列舉順序）決定
pub struct ConfigurationOptimizer {
    calculator: QuotationCalculator,
}

impl ConfigurationOptimizer {
    /// 創建新的配置優化器
    pub fn new(config: EngineConfig) -> Self {
        Self {
            calculator: QuotationCalculator::new(config),
        }
    }

    /// 搜尋最佳配置
    pub fn optimize(&self, request: &OptimizationRequest) -> label_core::Result<OptimizationResult> {
        tracing::info!(
            "開始配置優化：{} 台印刷機，{} 把刀模，最多 {} 軌，{} 個間距候選，目標 {:?}",
            request.presses.len(),
            request.dies.len(),
            request.max_tracks_preference,
            request.interspace_candidates_mm.len(),
            request.objective
        );

        let start_time = std::time::Instant::now();

        Self::validate(request)?;

        let combinations = Self::combinations(request);
        let feasible_count = std::sync::atomic::AtomicUsize::new(0);

        let best = combinations
            .par_iter()
            .filter_map(|combination| self.evaluate(request, combination))
            .inspect(|_| {
                feasible_count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            })
            .reduce_with(|a, b| request.objective.pick(a, b));

        let Some(best) = best else {
            tracing::info!("找不到可行配置（評估 {} 個組合）", combinations.len());
            return Err(Self::no_feasible(request));
        };

        let result = OptimizationResult {
            best,
            combinations_evaluated: combinations.len(),
            feasible_count: feasible_count.into_inner(),
        };

        tracing::info!(
            "配置優化完成，耗時 {:?}：{}/{} 個組合可行，最佳為 {} + {}，{} 軌，間距 {}mm，分數 {}",
            start_time.elapsed(),
            result.feasible_count,
            result.combinations_evaluated,
            result.best.press_code,
            result.best.die_code,
            result.best.plan.effective_tracks,
            result.best.interspace_mm,
            result.best.score.round_dp(4)
        );

        Ok(result)
    }

    /// 評估所有組合，依列舉順序回傳可行配置
    ///
    /// 供需要排名清單或限時逐筆消費的呼叫端使用
    pub fn evaluate_all(
        &self,
        request: &OptimizationRequest,
    ) -> label_core::Result<Vec<OptimizedConfiguration>> {
        Self::validate(request)?;

        let mut feasible: Vec<OptimizedConfiguration> = Self::combinations(request)
            .par_iter()
            .filter_map(|combination| self.evaluate(request, combination))
            .collect();
        feasible.sort_by_key(|candidate| candidate.index);

        Ok(feasible)
    }

    /// 列舉所有組合：印刷機 → 刀模 → 軌數 → 間距
    ///
    /// 軌數範圍為 1..=min(偏好, 印刷機上限, 刀模上限)
    pub fn combinations(request: &OptimizationRequest) -> Vec<Combination> {
        let mut combinations = Vec::new();

        for (press_index, press) in request.presses.iter().enumerate() {
            for (die_index, die) in request.dies.iter().enumerate() {
                let track_limit = request
                    .max_tracks_preference
                    .min(press.max_tracks.unwrap_or(u32::MAX))
                    .min(die.max_tracks.unwrap_or(u32::MAX));

                for tracks in 1..=track_limit {
                    for &interspace_mm in &request.interspace_candidates_mm {
                        combinations.push(Combination {
                            index: combinations.len(),
                            press_index,
                            die_index,
                            tracks,
                            interspace_mm,
                        });
                    }
                }
            }
        }

        combinations
    }

    /// 評估單一組合；無法排版或索引超出候選清單時回傳 None
    pub(crate) fn evaluate(
        &self,
        request: &OptimizationRequest,
        combination: &Combination,
    ) -> Option<OptimizedConfiguration> {
        let press = request.presses.get(combination.press_index)?;
        let die = request.dies.get(combination.die_index)?;
        let job = request.job(combination.tracks, combination.interspace_mm);

        let (plan, costs) = match self.calculator.plan_and_cost(&job, &request.material, die, press) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(
                    "組合 #{} 不可行（{} + {}，{} 軌，間距 {}mm）: {}",
                    combination.index,
                    press.code,
                    die.code,
                    combination.tracks,
                    combination.interspace_mm,
                    e
                );
                return None;
            }
        };

        let total_time_hours = costs.press_detail.total_hours;
        let mut candidate = OptimizedConfiguration {
            index: combination.index,
            press_code: press.code.clone(),
            press_name: press.name.clone(),
            die_code: die.code.clone(),
            die_name: die.name.clone(),
            tracks: combination.tracks,
            interspace_mm: combination.interspace_mm,
            plan,
            costs,
            total_time_hours,
            score: Decimal::ZERO,
        };
        candidate.score = request.objective.score(&candidate);

        Some(candidate)
    }

    /// 一次性驗證請求與所有候選規格
    fn validate(request: &OptimizationRequest) -> label_core::Result<()> {
        let probe = LabelJob::new(
            request.label_width_mm,
            request.label_height_mm,
            Decimal::ZERO,
            request.total_quantity,
        );
        probe.validate()?;
        request.material.validate()?;

        for press in &request.presses {
            press.validate()?;
        }
        for die in &request.dies {
            die.validate()?;
        }

        if request.max_tracks_preference == 0 {
            return Err(LabelError::InvalidInput("最大軌數偏好必須至少為 1".to_string()));
        }

        // 每個間距候選值都須構成合法工單
        for &interspace_mm in &request.interspace_candidates_mm {
            request.job(1, interspace_mm).validate()?;
        }

        Ok(())
    }

    fn no_feasible(request: &OptimizationRequest) -> LabelError {
        LabelError::NoFeasibleConfiguration {
            presses: request.presses.len(),
            dies: request.dies.len(),
            max_tracks_preference: request.max_tracks_preference,
            interspace_candidates: request.interspace_candidates_mm.clone(),
        }
    }
}
