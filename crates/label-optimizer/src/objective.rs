//! 優化目標與評分

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::OptimizedConfiguration;

/// 多軌配置在品質目標下的加分
pub const MULTI_TRACK_QUALITY_BONUS: i64 = 5;

/// 優化目標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// 最低總成本
    #[default]
    Cost,
    /// 最短總時間
    Time,
    /// 最高良率
    Yield,
    /// 最高品質（良率 + 多軌加分）
    Quality,
}

impl Objective {
    /// 計算配置分數
    ///
    /// 成本目標取最小值，其餘取最大值（時間以負值表示）
    pub fn score(&self, candidate: &OptimizedConfiguration) -> Decimal {
        match self {
            Objective::Cost => candidate.costs.total_cost,
            Objective::Time => -candidate.total_time_hours,
            Objective::Yield => candidate.plan.yield_pct,
            Objective::Quality => {
                let mut score = candidate.plan.yield_pct;
                if candidate.plan.effective_tracks > 1 {
                    score += Decimal::from(MULTI_TRACK_QUALITY_BONUS);
                }
                score
            }
        }
    }

    /// 是否取最小值
    pub fn minimizes(&self) -> bool {
        matches!(self, Objective::Cost)
    }

    /// 比較兩個分數：`Greater` 表示 `a` 較佳
    pub fn compare_scores(&self, a: Decimal, b: Decimal) -> Ordering {
        if self.minimizes() {
            b.cmp(&a)
        } else {
            a.cmp(&b)
        }
    }

    /// 從兩個配置中選出較佳者；分數相同時保留較早列舉的配置
    ///
    /// 以（分數、列舉順序）構成全序，平行歸約時結果與評估順序無關
    pub fn pick(
        &self,
        a: OptimizedConfiguration,
        b: OptimizedConfiguration,
    ) -> OptimizedConfiguration {
        match self.compare_scores(a.score, b.score) {
            Ordering::Greater => a,
            Ordering::Less => b,
            Ordering::Equal => {
                if a.index <= b.index {
                    a
                } else {
                    b
                }
            }
        }
    }
}
