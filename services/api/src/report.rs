use crate::infra::{build_service, ConfiguredAdvisor};
use clap::Args;
use purchase_check::config::AppConfig;
use purchase_check::error::AppError;
use purchase_check::telemetry;
use purchase_check::workflows::affordability::{SimulationReport, SimulationRequest};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Path to a JSON household profile
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Skip the advisory generator even when an API key is configured
    #[arg(long)]
    pub(crate) offline: bool,
    /// Print the raw JSON report instead of the summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_writer(&config.telemetry, std::io::stderr)?;
    let request = load_request(&args.profile)?;

    let advisor = if args.offline {
        ConfiguredAdvisor::offline()
    } else {
        ConfiguredAdvisor::from_config(&config.advisor)
    };
    let service = build_service(advisor, &config.advisor);

    let report = service.simulate(request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

fn load_request(path: &Path) -> Result<SimulationRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn render_report(report: &SimulationReport) {
    let metrics = &report.calculation;
    let guidance = &report.ai_guidance;

    println!("Purchase affordability check");
    println!(
        "Assessment: {} ({})",
        guidance.assessment_title,
        metrics.risk_level.as_str()
    );

    println!("\nMonthly cash flow");
    println!("- Fixed expenses: {:.2}", metrics.fixed_expenses);
    println!(
        "- Disposable income before purchase: {:.2}",
        metrics.baseline_disposable_income
    );
    println!("- Monthly payment: {:.2}", metrics.monthly_payment);
    println!(
        "- Disposable income after purchase: {:.2}",
        metrics.new_disposable_income
    );

    println!("\nSavings");
    println!("- After purchase: {:.2}", metrics.savings_after_purchase);
    println!("- Emergency buffer: {:.2}", metrics.emergency_buffer);
    println!("- Recovery months: {:.2}", metrics.recovery_months);

    if guidance.guidance.is_empty() {
        println!("\nGuidance: unavailable");
    } else {
        println!("\nGuidance\n{}", guidance.guidance);
    }

    if !guidance.key_insights.is_empty() {
        println!("\nKey insights");
        for insight in &guidance.key_insights {
            println!("- {}: {}", insight.title, insight.detail);
        }
    }

    if !guidance.safer_alternatives.is_empty() {
        println!("\nSafer alternatives");
        for alternative in &guidance.safer_alternatives {
            println!("- {}", alternative);
        }
    }
}
