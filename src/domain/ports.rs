use crate::domain::model::{ContainerSizes, PaintJob, Recommendation};
use crate::utils::error::Result;

/// Turns a liters requirement into a container recommendation.
pub trait PackingStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn pack(&self, liters: f64, sizes: &ContainerSizes) -> Result<Recommendation>;
}

/// Anything that can describe a paint job (CLI flags, project files, ...).
pub trait JobProvider {
    fn paint_job(&self) -> Result<PaintJob>;
    fn output_path(&self) -> Option<&str>;
    fn output_formats(&self) -> &[String];
}

pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
