use clap::Parser;
use paint_calc::core::JobProvider;
use paint_calc::utils::{logger, validation::Validate};
use paint_calc::{CliConfig, EstimateReport, Estimator, LocalStorage, PaintError, ReportWriter};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting paint-calc CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Estimate failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), PaintError> {
    // 驗證配置
    config.validate()?;

    let job = config.paint_job()?;
    let estimator = Estimator::new(job.policy);
    let estimate = estimator.estimate(&job)?;
    let report = EstimateReport::new(None, estimator.strategy_name(), job, estimate);

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }

    if let Some(output_path) = config.output_path() {
        let storage = LocalStorage::new(output_path.to_string());
        let writer = ReportWriter::new(storage.clone());
        for filename in writer.write(&report, config.output_formats())? {
            tracing::info!("📁 Report saved to: {}", storage.full_path(&filename).display());
        }
    }

    Ok(())
}
