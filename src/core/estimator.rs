use crate::domain::model::{Estimate, PaintJob};
use crate::domain::ports::PackingStrategy;
use crate::utils::error::{PaintError, Result};
use crate::utils::validation::{self, Validate};

impl Validate for PaintJob {
    fn validate(&self) -> Result<()> {
        if self.walls.is_empty() {
            return Err(PaintError::MissingConfig {
                field: "walls".to_string(),
            });
        }
        for (i, wall) in self.walls.iter().enumerate() {
            validation::validate_non_negative(&format!("walls[{}].width", i), wall.width)?;
            validation::validate_non_negative(&format!("walls[{}].height", i), wall.height)?;
            if !wall.area().is_finite() {
                return Err(PaintError::InvalidWall {
                    input: wall.to_string(),
                    reason: "area is too large to compute".to_string(),
                });
            }
        }
        validation::validate_non_negative("openings.door_area", self.opening_sizes.door_area)?;
        validation::validate_non_negative("openings.window_area", self.opening_sizes.window_area)?;
        validation::validate_min_count("paint.coats", self.coats, 1)?;
        validation::validate_range("paint.margin", self.margin, 0.0, 1.0)?;
        validation::validate_non_empty_string("containers.large_label", &self.labels.large)?;
        validation::validate_non_empty_string("containers.small_label", &self.labels.small)?;
        self.containers.validate()
    }
}

pub struct Estimator<P: PackingStrategy> {
    strategy: P,
}

impl<P: PackingStrategy> Estimator<P> {
    pub fn new(strategy: P) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn estimate(&self, job: &PaintJob) -> Result<Estimate> {
        job.validate()?;

        let wall_area = job
            .walls
            .iter()
            .filter(|wall| {
                let measured = wall.is_measured();
                if !measured {
                    tracing::debug!("Skipping wall {} without both dimensions", wall);
                }
                measured
            })
            .map(|wall| wall.area())
            .sum::<f64>();

        if !wall_area.is_finite() {
            return Err(PaintError::InvalidWall {
                input: format!("{} walls", job.walls.len()),
                reason: "total area is too large to compute".to_string(),
            });
        }
        if wall_area <= 0.0 {
            return Err(PaintError::NoWallArea);
        }

        let openings_area = job.opening_sizes.area_of(&job.openings);
        let paintable_area = wall_area - openings_area;
        if paintable_area <= 0.0 {
            return Err(PaintError::OpeningsExceedWalls {
                wall_area,
                openings_area,
            });
        }

        if job.coverage_per_can <= 0.0 || !job.coverage_per_can.is_finite() {
            return Err(PaintError::InvalidCoverage {
                coverage: job.coverage_per_can,
            });
        }

        // 每罐的覆蓋面積換算成每公升
        let coverage_per_liter = job.coverage_per_can / job.containers.large;
        let liters = paintable_area * job.coats as f64 / coverage_per_liter;
        let liters_with_margin = liters * (1.0 + job.margin);

        tracing::debug!(
            wall_area,
            openings_area,
            paintable_area,
            liters,
            liters_with_margin,
            strategy = self.strategy.name(),
            "Computed paint requirement"
        );

        let recommendation = self.strategy.pack(liters, &job.containers)?;
        let recommendation_with_margin = self.strategy.pack(liters_with_margin, &job.containers)?;

        Ok(Estimate {
            wall_area,
            openings_area,
            paintable_area,
            liters,
            liters_with_margin,
            recommendation,
            recommendation_with_margin,
        })
    }
}
