//! 排版、良率、成本、定價的性質測試

use label_calc::{CostCalculator, LayoutCalculator, PricingCalculator, QuotationCalculator, YieldEstimator};
use label_core::{DieSpec, EngineConfig, LabelJob, MaterialSpec, PressSpec, StrippingDifficulty, YieldPolicy};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// 0.1mm 精度的長度
fn tenths(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|v| Decimal::new(v, 1))
}

fn difficulty() -> impl Strategy<Value = StrippingDifficulty> {
    prop_oneof![
        Just(StrippingDifficulty::Easy),
        Just(StrippingDifficulty::Medium),
        Just(StrippingDifficulty::Difficult),
        Just(StrippingDifficulty::VeryDifficult),
        Just(StrippingDifficulty::Unspecified),
    ]
}

fn job() -> impl Strategy<Value = LabelJob> {
    (tenths(10..2_000), tenths(10..2_000), tenths(0..100), 1u32..16, 1u64..2_000_000).prop_map(
        |(width, height, interspace, tracks, quantity)| {
            LabelJob::new(width, height, interspace, quantity).with_tracks(tracks)
        },
    )
}

fn material() -> impl Strategy<Value = MaterialSpec> {
    (tenths(100..6_000), 1i64..500, proptest::option::of(0i64..=100)).prop_map(
        |(max_width, cost_cents, waste)| {
            let material = MaterialSpec::new("M".to_string(), max_width, Decimal::new(cost_cents, 2));
            match waste {
                Some(w) => material.with_waste_factor(Decimal::from(w)),
                None => material,
            }
        },
    )
}

fn die() -> impl Strategy<Value = DieSpec> {
    (
        proptest::option::of(1u32..12),
        proptest::option::of(tenths(50..6_000)),
        0i64..10_000,
        difficulty(),
    )
        .prop_map(|(max_tracks, repeat, cost_cents, difficulty)| {
            let mut die = DieSpec::new("D".to_string(), Decimal::new(cost_cents, 2))
                .with_stripping_difficulty(difficulty);
            die.max_tracks = max_tracks;
            die.repeat_length_mm = repeat;
            die
        })
}

fn press() -> impl Strategy<Value = PressSpec> {
    (
        10i64..300,
        1i64..=100,
        tenths(100..6_000),
        proptest::option::of(1u32..12),
        0i64..120,
        0i64..200,
        0i64..50,
    )
        .prop_map(|(speed, efficiency, width, max_tracks, setup, rate, overhead)| {
            let mut press = PressSpec::new("P".to_string(), Decimal::from(speed), width)
                .with_efficiency(Decimal::new(efficiency, 2))
                .with_setup_times(Decimal::from(setup), None, None)
                .with_hourly_rates(
                    Decimal::from(rate),
                    Decimal::from(rate),
                    Decimal::from(rate / 10),
                    Decimal::from(rate / 4),
                )
                .with_overhead(Decimal::from(overhead));
            press.max_tracks = max_tracks;
            press
        })
}

proptest! {
    #[test]
    fn web_width_is_monotonic_in_tracks(
        width in tenths(1..5_000),
        interspace in tenths(0..200),
        tracks in 1u32..40,
    ) {
        let edge = Decimal::from(5);
        let narrow = LayoutCalculator::web_width(width, interspace, tracks, edge);
        let wide = LayoutCalculator::web_width(width, interspace, tracks + 1, edge);
        prop_assert!(wide >= narrow);
    }

    #[test]
    fn effective_tracks_respect_every_limit(
        job in job(),
        material in material(),
        die in die(),
        press in press(),
    ) {
        let edge = Decimal::from(5);
        if let Ok(plan) = LayoutCalculator::compute(&job, &material, &die, &press, edge) {
            let by_material = LayoutCalculator::max_tracks_for_width(
                material.max_width_mm,
                job.label_width_mm,
                job.interspace_mm,
                edge,
            );

            prop_assert!(plan.effective_tracks >= 1);
            prop_assert!(plan.effective_tracks <= job.tracks_requested);
            prop_assert!(plan.effective_tracks <= press.max_tracks.unwrap_or(u32::MAX));
            prop_assert!(plan.effective_tracks <= die.max_tracks.unwrap_or(u32::MAX));
            prop_assert!(plan.effective_tracks <= by_material);
            prop_assert!(plan.web_width_mm <= material.max_width_mm);
            prop_assert!(plan.web_width_mm <= press.max_web_width_mm);
            prop_assert!(plan.linear_length_m > Decimal::ZERO);
        }
    }

    #[test]
    fn yield_stays_within_bounds(
        job in job(),
        material in material(),
        die in die(),
        press in press(),
    ) {
        if let Ok(plan) = LayoutCalculator::compute(&job, &material, &die, &press, Decimal::from(5)) {
            let yield_pct = YieldEstimator::estimate(&plan, &material, &die, &YieldPolicy::default());
            prop_assert!(yield_pct >= Decimal::ZERO);
            prop_assert!(yield_pct <= Decimal::from(100));
        }
    }

    #[test]
    fn costs_are_non_negative(
        job in job(),
        material in material(),
        die in die(),
        press in press(),
    ) {
        let config = EngineConfig::default();
        let calculator = QuotationCalculator::new(config.clone());
        if let Ok((plan, costs)) = calculator.plan_and_cost(&job, &material, &die, &press) {
            prop_assert!(costs.material_cost >= Decimal::ZERO);
            prop_assert!(costs.die_cost >= Decimal::ZERO);
            prop_assert!(costs.press_cost >= Decimal::ZERO);
            prop_assert!(costs.total_cost >= Decimal::ZERO);
            prop_assert!(costs.cost_per_unit >= Decimal::ZERO);
            prop_assert!(costs.actual_material_area_sqm >= costs.theoretical_area_sqm);

            // 直接呼叫成本計算器得到相同結果
            let direct = CostCalculator::compute(&job, &plan, &material, &die, &press, &config);
            prop_assert_eq!(direct, costs);
        }
    }

    #[test]
    fn zero_margin_price_equals_cost(
        job in job(),
        material in material(),
        die in die(),
        press in press(),
    ) {
        let calculator = QuotationCalculator::new(EngineConfig::default());
        if let Ok((_, costs)) = calculator.plan_and_cost(&job, &material, &die, &press) {
            let quote = PricingCalculator::price(&costs, Decimal::ZERO);
            prop_assert_eq!(quote.selling_price, costs.total_cost);
            prop_assert_eq!(
                quote.price_per_unit,
                costs.total_cost / Decimal::from(costs.total_quantity)
            );
        }
    }
}
