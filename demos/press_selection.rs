//! # 配置優化範例
//!
//! 從兩台印刷機、兩把刀模中，依不同目標挑選最佳生產配置

use label_quotation::prelude::*;

fn presses() -> Vec<PressSpec> {
    vec![
        PressSpec::new("VEGA-330".to_string(), Decimal::from(120), Decimal::from(330))
            .with_name("Vega 330 柔印機".to_string())
            .with_hourly_rates(
                Decimal::from(65),
                Decimal::from(55),
                Decimal::from(8),
                Decimal::from(32),
            )
            .with_overhead(Decimal::from(15)),
        PressSpec::new("DIGI-250".to_string(), Decimal::from(40), Decimal::from(250))
            .with_name("數位印刷機".to_string())
            .with_max_tracks(3)
            .with_setup_times(Decimal::from(10), None, None)
            .with_hourly_rates(
                Decimal::from(40),
                Decimal::from(70),
                Decimal::from(6),
                Decimal::from(28),
            )
            .with_overhead(Decimal::from(15)),
    ]
}

fn dies() -> Vec<DieSpec> {
    vec![
        DieSpec::new("RD-5030-4".to_string(), Decimal::from(18))
            .with_name("旋轉刀模 4 軌".to_string())
            .with_max_tracks(4)
            .with_repeat_length(Decimal::new(3175, 1))
            .with_stripping_difficulty(StrippingDifficulty::Medium),
        DieSpec::new("FD-5030".to_string(), Decimal::from(30))
            .with_name("平板刀模".to_string())
            .with_stripping_difficulty(StrippingDifficulty::Easy),
    ]
}

fn main() -> anyhow::Result<()> {
    label_quotation::logging::init();

    println!("🏭 ===== 生產配置優化範例 =====");
    println!();

    let config = EngineConfig::default();
    let material = MaterialSpec::new("VELLUM-80".to_string(), Decimal::from(330), Decimal::new(75, 2))
        .with_waste_factor(Decimal::from(4));

    let optimizer = ConfigurationOptimizer::new(config.clone());

    for objective in [
        Objective::Cost,
        Objective::Time,
        Objective::Yield,
        Objective::Quality,
    ] {
        let request = OptimizationRequest::new(
            Decimal::from(50),
            Decimal::from(30),
            80_000,
            material.clone(),
            &config,
        )
        .with_presses(presses())
        .with_dies(dies())
        .with_objective(objective);

        println!("🎯 目標: {:?}", objective);
        match optimizer.optimize(&request) {
            Ok(result) => {
                println!(
                    "   評估 {} 個組合，{} 個可行",
                    result.combinations_evaluated, result.feasible_count
                );
                println!("{}", result.best);
            }
            Err(LabelError::NoFeasibleConfiguration { .. }) => {
                println!("   ⚠ 找不到可行配置");
            }
            Err(e) => return Err(e.into()),
        }
        println!();
    }

    println!("✅ 優化完成！");
    Ok(())
}
