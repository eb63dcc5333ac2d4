use anyhow::Context;
use clap::Parser;
use paint_calc::core::render::{format_area, format_liters};
use paint_calc::core::JobProvider;
use paint_calc::utils::{logger, validation::Validate};
use paint_calc::{
    EstimateReport, Estimator, LocalStorage, PackingPolicy, PaintError, PaintJob, ReportWriter,
    TomlConfig,
};

#[derive(Parser)]
#[command(name = "toml-estimate")]
#[command(about = "Paint estimate from a TOML project file")]
struct Args {
    /// Path to TOML project file
    #[arg(short, long, default_value = "paint-project.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the packing policy from the project file
    #[arg(long, value_enum)]
    policy: Option<PackingPolicy>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Dry run - show the parsed job without estimating
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based paint estimate");
    tracing::info!("📁 Loading project from: {}", args.config);

    if let Err(e) = run(&args) {
        // PaintError 依嚴重程度決定結束代碼，其他錯誤一律 1
        match e.downcast_ref::<PaintError>() {
            Some(paint_error) => {
                tracing::error!(
                    "❌ Estimate failed: {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    paint_error.category(),
                    paint_error.severity()
                );
                eprintln!("❌ {}", paint_error.user_friendly_message());
                eprintln!("💡 Suggestion: {}", paint_error.recovery_suggestion());
                std::process::exit(paint_error.exit_code());
            }
            None => {
                tracing::error!("❌ Estimate failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load project file '{}'", args.config))?;

    // 應用命令列覆蓋設定
    if let Some(policy) = args.policy {
        config.paint.policy = Some(policy);
        tracing::info!("🔧 Packing policy overridden to: {}", policy);
    }

    config.validate()?;
    tracing::info!("✅ Project loaded and validated successfully");

    let job = config.paint_job()?;

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No estimate will be computed");
        display_job_summary(&config, &job);
        return Ok(());
    }

    let estimator = Estimator::new(job.policy);
    let estimate = estimator.estimate(&job)?;
    let report = EstimateReport::new(
        Some(config.project_name().to_string()),
        estimator.strategy_name(),
        job,
        estimate,
    );

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }

    if let Some(output_path) = config.output_path() {
        let storage = LocalStorage::new(output_path.to_string());
        let writer = ReportWriter::new(storage.clone());
        let written = writer
            .write(&report, config.output_formats())
            .with_context(|| format!("Failed to write report to '{}'", output_path))?;
        for filename in written {
            println!("📁 Report saved to: {}", storage.full_path(&filename).display());
        }
    }

    Ok(())
}

fn display_job_summary(config: &TomlConfig, job: &PaintJob) {
    println!("📋 Project Summary:");
    println!("  Project: {}", config.project_name());
    if let Some(description) = &config.project.description {
        println!("  Description: {}", description);
    }

    println!("  Walls: {}", job.walls.len());
    for (i, wall) in job.walls.iter().enumerate() {
        let note = if wall.is_measured() { "" } else { " (skipped)" };
        println!("    {}. {} m -> {}{}", i + 1, wall, format_area(wall.area()), note);
    }

    println!(
        "  Doors: {}  Windows: {}  Openings: {}",
        job.openings.doors,
        job.openings.windows,
        format_area(job.opening_sizes.area_of(&job.openings))
    );
    println!(
        "  Coverage: {} m² per {} of {}  Coats: {}  Margin: {:.0}%",
        job.coverage_per_can,
        job.labels.large,
        format_liters(job.containers.large),
        job.coats,
        job.margin * 100.0
    );
    println!("  Policy: {}", job.policy);

    match config.output_path() {
        Some(path) => println!(
            "  Output: {} ({})",
            path,
            config.output_formats().join(", ")
        ),
        None => println!("  Output: terminal only"),
    }
}
