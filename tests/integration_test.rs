//! 集成測試

use chrono::NaiveDate;
use label_quotation::prelude::*;
use rstest::rstest;

fn vellum(max_width: i64) -> MaterialSpec {
    MaterialSpec::new("VELLUM-80".to_string(), Decimal::from(max_width), Decimal::TWO)
        .with_name("Vellum 80g".to_string())
        .with_waste_factor(Decimal::from(2))
}

fn rotary_die() -> DieSpec {
    DieSpec::new("LR-5030".to_string(), Decimal::from(20))
        .with_repeat_length(Decimal::from(32))
        .with_stripping_difficulty(StrippingDifficulty::Easy)
}

fn vega() -> PressSpec {
    // 有效速度 100 × 0.8 = 80 m/min
    PressSpec::new("VEGA-330".to_string(), Decimal::from(100), Decimal::from(400))
        .with_efficiency(Decimal::new(8, 1))
        .with_setup_times(Decimal::from(30), None, None)
        .with_hourly_rates(
            Decimal::from(50),
            Decimal::from(40),
            Decimal::from(5),
            Decimal::from(25),
        )
        .with_overhead(Decimal::from(10))
}

fn request(quantity: u64) -> ProductionRequest {
    let job = LabelJob::new(
        Decimal::from(50),
        Decimal::from(30),
        Decimal::new(32, 1),
        quantity,
    );
    ProductionRequest::new(job, vellum(400), rotary_die(), vega())
}

#[test]
fn test_single_track_layout_scenario() {
    let calculator = QuotationCalculator::new(EngineConfig::default());
    let quotation = calculator.calculate(&request(10_000), None).unwrap();

    assert_eq!(quotation.plan.effective_tracks, 1);
    assert_eq!(quotation.plan.web_width_mm, Decimal::from(60));
    assert_eq!(quotation.plan.labels_per_meter, Decimal::new(3125, 2));
    assert_eq!(quotation.plan.linear_length_m, Decimal::from(320));
}

#[test]
fn test_narrow_material_is_infeasible() {
    let mut request = request(10_000);
    request.material = vellum(55);

    let result = QuotationCalculator::new(EngineConfig::default()).calculate(&request, None);

    match result {
        Err(LabelError::InfeasibleLayout {
            tracks,
            web_width_mm,
            material_max_width_mm,
            ..
        }) => {
            assert_eq!(tracks, 1);
            assert_eq!(web_width_mm, Decimal::from(60));
            assert_eq!(material_max_width_mm, Decimal::from(55));
        }
        other => panic!("expected InfeasibleLayout, got {:?}", other),
    }
}

#[test]
fn test_yield_scenario() {
    // 95 - 5 - 10 - 0 - 2 - 3 = 75
    let mut request = request(10_000);
    request.material = request.material.clone().with_waste_factor(Decimal::from(5));

    let quotation = QuotationCalculator::new(EngineConfig::default())
        .calculate(&request, None)
        .unwrap();

    assert_eq!(quotation.plan.yield_pct, Decimal::from(75));
    assert!(quotation.has_warning(WarningKind::BelowMinimumYield));
}

#[test]
fn test_full_quotation_pipeline() {
    // 150,000 張 → 4800m，生產 1h + 準備 0.5h
    // 良率 95 - 2 - 10 - 0 - 0 - 3 = 80 → 耗損倍數 1.25
    let quotation = QuotationCalculator::new(EngineConfig::default())
        .calculate(&request(150_000), None)
        .unwrap();

    assert_eq!(quotation.plan.linear_length_m, Decimal::from(4_800));
    assert_eq!(quotation.plan.yield_pct, Decimal::from(80));

    let costs = &quotation.costs;
    assert_eq!(costs.theoretical_area_sqm, Decimal::from(225));
    assert_eq!(costs.actual_material_area_sqm, Decimal::new(28125, 2));
    assert_eq!(costs.material_cost, Decimal::new(5625, 1));
    assert_eq!(costs.die_cost, Decimal::from(20));

    // 準備 25 + 生產 40 + 能源 7.5 + 人工 37.5 = 110，管理費用 10%
    assert_eq!(costs.press_detail.total_hours, Decimal::new(15, 1));
    assert_eq!(costs.press_detail.overhead_cost, Decimal::from(11));
    assert_eq!(costs.press_cost, Decimal::from(121));

    assert_eq!(costs.total_cost, Decimal::new(7035, 1));
    assert_eq!(costs.cost_per_unit, Decimal::new(469, 5));

    assert_eq!(quotation.price.margin_pct, Decimal::from(30));
    assert_eq!(quotation.price.selling_price, Decimal::new(91455, 2));
    assert_eq!(quotation.price.price_per_unit, Decimal::new(6097, 6));
    assert_eq!(quotation.price.margin_amount(costs), Decimal::new(21105, 2));

    // 良率剛好 80%，不低於門檻
    assert!(quotation.warnings.is_empty());
}

#[rstest]
#[case(0, 10)]
#[case(30, 13)]
#[case(50, 15)]
fn test_margin_applies_to_total_cost(#[case] margin: i64, #[case] multiplier_tenths: i64) {
    let quotation = QuotationCalculator::new(EngineConfig::default())
        .calculate(&request(150_000), Some(Decimal::from(margin)))
        .unwrap();

    assert_eq!(
        quotation.price.selling_price,
        quotation.costs.total_cost * Decimal::new(multiplier_tenths, 1)
    );
}

#[test]
fn test_config_from_json_drives_pipeline() {
    let config = EngineConfig::from_json_str(
        r#"{
            "edge_margin_mm": "10",
            "default_margin_pct": "20",
            "min_yield_policy": "ignore",
            "approval_threshold": "500"
        }"#,
    )
    .unwrap();

    let mut request = request(10_000);
    request.material = request.material.clone().with_waste_factor(Decimal::from(5));

    let quotation = QuotationCalculator::new(config).calculate(&request, None).unwrap();

    // 50 + 2 × 10
    assert_eq!(quotation.plan.web_width_mm, Decimal::from(70));
    assert_eq!(quotation.price.margin_pct, Decimal::from(20));
    assert!(!quotation.has_warning(WarningKind::BelowMinimumYield));
    assert_eq!(
        quotation.has_warning(WarningKind::ApprovalRequired),
        quotation.price.selling_price >= Decimal::from(500)
    );
}

#[test]
fn test_default_interspace_from_config() {
    let config = EngineConfig::from_json_str(r#"{ "default_interspace_mm": "2" }"#).unwrap();
    let job = LabelJob::from_config(Decimal::from(50), Decimal::from(30), 10_000, &config);
    let request = ProductionRequest::new(job, vellum(400), rotary_die(), vega());

    let quotation = QuotationCalculator::new(config).calculate(&request, None).unwrap();

    // 32mm 圓刀，間距 2mm：floor(32 / 32) = 1 張/圈
    assert_eq!(request.job.interspace_mm, Decimal::from(2));
    assert_eq!(quotation.plan.labels_per_meter, Decimal::new(3125, 2));
    // 50 × 30 / (52 × 32) ≈ 90.1%
    assert!(quotation.geometric_utilization_pct > Decimal::from(90));
}

#[test]
fn test_quotation_serializes_to_json() {
    let quotation = QuotationCalculator::new(EngineConfig::default())
        .calculate(&request(10_000), None)
        .unwrap();

    let json = serde_json::to_value(&quotation).unwrap();
    assert_eq!(json["plan"]["effective_tracks"], 1);
    assert!(json["costs"]["press_detail"].is_object());
    assert_eq!(json["warnings"][0]["kind"], "below_minimum_yield");
}

#[test]
fn test_optimizer_end_to_end() {
    label_quotation::logging::init_test();

    let config = EngineConfig::default();
    let presses = vec![
        vega(),
        PressSpec::new("DIGI-250".to_string(), Decimal::from(40), Decimal::from(250))
            .with_max_tracks(2)
            .with_hourly_rates(
                Decimal::from(30),
                Decimal::from(30),
                Decimal::from(3),
                Decimal::from(20),
            ),
    ];
    let dies = vec![
        rotary_die().with_max_tracks(4),
        DieSpec::new("FLAT-5030".to_string(), Decimal::from(35))
            .with_stripping_difficulty(StrippingDifficulty::Difficult),
    ];

    let request = OptimizationRequest::new(
        Decimal::from(50),
        Decimal::from(30),
        150_000,
        vellum(400),
        &config,
    )
    .with_presses(presses)
    .with_dies(dies)
    .with_objective(Objective::Cost);

    let optimizer = ConfigurationOptimizer::new(config.clone());
    let result = optimizer.optimize(&request).unwrap();

    // 每組 4 軌 × 4 間距；DIGI 限 2 軌
    assert_eq!(result.combinations_evaluated, 16 + 16 + 8 + 8);
    assert_eq!(result.feasible_count, result.combinations_evaluated);

    let all = optimizer.evaluate_all(&request).unwrap();
    assert!(all
        .iter()
        .all(|c| c.costs.total_cost >= result.best.costs.total_cost));

    // 最佳配置以單筆報價重算得到相同成本
    let best = &result.best;
    let press = request
        .presses
        .iter()
        .find(|p| p.code == best.press_code)
        .unwrap()
        .clone();
    let die = request
        .dies
        .iter()
        .find(|d| d.code == best.die_code)
        .unwrap()
        .clone();
    let job = request.job(best.tracks, best.interspace_mm);
    let quotation = QuotationCalculator::new(config)
        .calculate(&ProductionRequest::new(job, vellum(400), die, press), None)
        .unwrap();
    assert_eq!(quotation.costs, best.costs);

    assert!(best.summary().contains(&best.press_code));
}

#[test]
fn test_optimizer_reports_no_feasible_configuration() {
    let config = EngineConfig::default();
    let request = OptimizationRequest::new(
        Decimal::from(50),
        Decimal::from(30),
        10_000,
        vellum(40),
        &config,
    )
    .with_presses(vec![vega()])
    .with_dies(vec![rotary_die()]);

    let result = ConfigurationOptimizer::new(config).optimize(&request);
    assert!(matches!(
        result,
        Err(LabelError::NoFeasibleConfiguration { presses: 1, dies: 1, .. })
    ));
}

#[test]
fn test_die_usage_recorded_by_caller() {
    let calculator = QuotationCalculator::new(EngineConfig::default());
    let request = request(10_000);
    let usage = DieUsage::new(request.die.code.clone());

    // 報價不修改刀模使用紀錄
    let first = calculator.calculate(&request, None).unwrap();
    let second = calculator.calculate(&request, None).unwrap();
    assert_eq!(first, second);
    assert_eq!(usage.usage_count, 0);

    // 確認投產後由呼叫端記錄
    let produced_on = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
    let usage = usage.record_use(produced_on);
    assert_eq!(usage.usage_count, 1);
    assert_eq!(
        usage.days_since_last_use(NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()),
        Some(7)
    );
}

#[test]
fn test_quotation_validity() {
    let config = EngineConfig::default();
    let issued = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();

    assert_eq!(
        config.valid_until(issued),
        NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()
    );
}
