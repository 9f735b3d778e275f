//! 定價計算

use label_core::{CostBreakdown, PriceQuote};
use rust_decimal::Decimal;

use crate::ratio_or_zero;

/// 定價計算器
pub struct PricingCalculator;

impl PricingCalculator {
    /// 售價 = 總成本 × (1 + 利潤率 / 100)；數量為 0 時每張售價為 0
    pub fn price(costs: &CostBreakdown, margin_pct: Decimal) -> PriceQuote {
        let selling_price = costs.total_cost * (Decimal::ONE + margin_pct / Decimal::from(100));

        PriceQuote {
            margin_pct,
            selling_price,
            price_per_unit: ratio_or_zero(selling_price, Decimal::from(costs.total_quantity)),
        }
    }
}
