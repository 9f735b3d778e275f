//! # 單筆報價範例
//!
//! 50×30mm 標籤，VEGA 輪轉機 + 旋轉刀模，15 萬張

use chrono::Local;
use label_quotation::prelude::*;

fn main() -> anyhow::Result<()> {
    label_quotation::logging::init();

    println!("🏷️  ===== 標籤報價範例 =====");
    println!();

    // ========== 1. 載入引擎配置 ==========
    println!("⚙️  步驟 1: 載入引擎配置");
    let config = EngineConfig::from_json_str(
        r#"{
            "default_margin_pct": "28",
            "min_yield_pct": "82"
        }"#,
    )?;
    println!(
        "   ✓ 利潤率 {}%，邊距 {}mm，最低良率 {}%",
        config.default_margin_pct, config.edge_margin_mm, config.min_yield_pct
    );
    println!();

    // ========== 2. 建立規格 ==========
    println!("📦 步驟 2: 建立材料、刀模、印刷機規格");
    let material = MaterialSpec::new("PP-WHITE-60".to_string(), Decimal::from(330), Decimal::new(92, 2))
        .with_name("PP 白色 60µ".to_string())
        .with_waste_factor(Decimal::from(3))
        .with_max_length(Decimal::from(2_000));

    let die = DieSpec::new("RD-5030-4".to_string(), Decimal::from(18))
        .with_name("旋轉刀模 50×30 4 軌".to_string())
        .with_max_tracks(4)
        .with_repeat_length(Decimal::new(3175, 1))
        .with_amortized_tooling(Decimal::from(1_200), 400)
        .with_stripping_difficulty(StrippingDifficulty::Medium);

    let press = PressSpec::new("VEGA-330".to_string(), Decimal::from(120), Decimal::from(330))
        .with_name("Vega 330 柔印機".to_string())
        .with_setup_times(
            Decimal::from(30),
            Some(Decimal::from(15)),
            Some(Decimal::from(10)),
        )
        .with_hourly_rates(
            Decimal::from(65),
            Decimal::from(55),
            Decimal::from(8),
            Decimal::from(32),
        )
        .with_overhead(Decimal::from(15));

    println!("   ✓ 材料 {}: 幅寬 {}mm", material.code, material.max_width_mm);
    if let Some(max_tracks) = die.max_tracks {
        println!("   ✓ 刀模 {}: 最多 {} 軌，每次使用 €{:.2}", die.code, max_tracks, die.base_cost_per_use());
    }
    println!("   ✓ 印刷機 {}: 有效速度 {} m/min", press.code, press.effective_speed_mpm());
    println!();

    // ========== 3. 計算報價 ==========
    println!("🚀 步驟 3: 計算報價");
    let job = LabelJob::from_config(Decimal::from(50), Decimal::from(30), 150_000, &config)
        .with_tracks(6);
    let request = ProductionRequest::new(job, material, die, press);

    let calculator = QuotationCalculator::new(config.clone());
    let quotation = calculator.calculate(&request, None)?;
    println!();

    // ========== 4. 結果 ==========
    println!("📋 步驟 4: 報價結果");
    println!("----------------------------------------");
    println!("軌數: {}（要求 {}）", quotation.plan.effective_tracks, request.job.tracks_requested);
    println!("幅寬: {}mm", quotation.plan.web_width_mm);
    println!("走料長度: {:.1}m", quotation.plan.linear_length_m);
    println!("良率: {}%", quotation.plan.yield_pct);
    println!("幾何利用率: {:.1}%", quotation.geometric_utilization_pct);
    println!();
    println!("材料成本: €{:.2}", quotation.costs.material_cost);
    println!("刀模成本: €{:.2}", quotation.costs.die_cost);
    println!(
        "印刷機成本: €{:.2}（{:.2} 小時）",
        quotation.costs.press_cost, quotation.costs.press_detail.total_hours
    );
    println!("總成本: €{:.2}", quotation.costs.total_cost);
    println!();
    println!(
        "售價: €{:.2}（利潤率 {}%，單價 €{:.5}）",
        quotation.price.selling_price, quotation.price.margin_pct, quotation.price.price_per_unit
    );
    println!("有效期限: {}", config.valid_until(Local::now().date_naive()));
    println!();

    if !quotation.warnings.is_empty() {
        println!("⚠️  警告訊息:");
        for warning in &quotation.warnings {
            println!("  - [{:?}] {}", warning.severity, warning.message);
        }
        println!();
    }

    // ========== 5. 確認投產後記錄刀模使用 ==========
    let usage = DieUsage::new(request.die.code.clone()).record_use(Local::now().date_naive());
    println!("🔧 刀模 {} 使用次數: {}", usage.die_code, usage.usage_count);
    println!();

    println!("✅ 報價完成！");
    Ok(())
}
