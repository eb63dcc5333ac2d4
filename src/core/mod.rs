pub mod estimator;
pub mod packing;
pub mod render;
pub mod report;

pub use crate::domain::model::{
    ContainerCombination, ContainerSizes, Estimate, PaintJob, Recommendation, Wall,
};
pub use crate::domain::ports::{JobProvider, PackingStrategy, Storage};
pub use crate::utils::error::Result;
