pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    estimator::Estimator,
    packing::{combine_containers, large_containers_only, LargeOnly, TwoSizeCombination},
    report::{EstimateReport, ReportWriter},
};
pub use domain::model::{
    ContainerCombination, ContainerSizes, Estimate, PackingPolicy, PaintJob, Recommendation, Wall,
};
pub use utils::error::{PaintError, Result};
