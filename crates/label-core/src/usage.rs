//! 刀模使用紀錄
//!
//! 使用次數屬於呼叫端狀態：報價確認投產後由呼叫端記錄，引擎本身從不修改

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 刀模使用紀錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieUsage {
    /// 刀模代碼
    pub die_code: String,

    /// 使用次數
    pub usage_count: u64,

    /// 最後使用日期
    pub last_used: Option<NaiveDate>,
}

impl DieUsage {
    /// 創建新的使用紀錄
    pub fn new(die_code: String) -> Self {
        Self {
            die_code,
            usage_count: 0,
            last_used: None,
        }
    }

    /// 記錄一次使用，回傳更新後的紀錄
    pub fn record_use(&self, date: NaiveDate) -> Self {
        Self {
            die_code: self.die_code.clone(),
            usage_count: self.usage_count + 1,
            last_used: Some(date),
        }
    }

    /// 距離上次使用的天數
    pub fn days_since_last_use(&self, today: NaiveDate) -> Option<i64> {
        self.last_used.map(|last| (today - last).num_days())
    }
}
