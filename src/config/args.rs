use crate::core::report::SUPPORTED_FORMATS;
use crate::domain::model::{
    ContainerLabels, ContainerSizes, Openings, OpeningSizes, PackingPolicy, PaintJob, Wall,
};
use crate::domain::ports::JobProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "paint-calc")]
#[command(about = "Estimate how much paint a set of walls needs and which containers to buy")]
pub struct CliConfig {
    /// Wall as <width>x<height> in meters (repeatable)
    #[arg(long = "wall", required = true)]
    pub walls: Vec<Wall>,

    #[arg(long, default_value = "0")]
    pub doors: u32,

    #[arg(long, default_value = "0")]
    pub windows: u32,

    /// Area covered by one large container (m²)
    #[arg(long, default_value = "300")]
    pub coverage: f64,

    #[arg(long, default_value = "2")]
    pub coats: u32,

    /// Safety margin applied to the second recommendation
    #[arg(long, default_value = "0.1")]
    pub margin: f64,

    #[arg(long, value_enum, default_value_t = PackingPolicy::Combination)]
    pub policy: PackingPolicy,

    #[arg(long, default_value = "18")]
    pub large_size: f64,

    #[arg(long, default_value = "3.6")]
    pub small_size: f64,

    /// Directory to write report files into
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub format: Vec<String>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl JobProvider for CliConfig {
    fn paint_job(&self) -> Result<PaintJob> {
        Ok(PaintJob {
            walls: self.walls.clone(),
            openings: Openings {
                doors: self.doors,
                windows: self.windows,
            },
            opening_sizes: OpeningSizes::default(),
            coverage_per_can: self.coverage,
            coats: self.coats,
            margin: self.margin,
            containers: ContainerSizes {
                large: self.large_size,
                small: self.small_size,
            },
            labels: ContainerLabels::default(),
            policy: self.policy,
        })
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_formats(&self) -> &[String] {
        &self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        validation::validate_output_formats("format", &self.format, SUPPORTED_FORMATS)?;
        validation::validate_positive_number("coverage", self.coverage)?;
        self.paint_job()?.validate()
    }
}
