use crate::core::render::{describe_recommendation, format_area, format_liters};
use crate::domain::model::{Estimate, PaintJob};
use crate::domain::ports::Storage;
use crate::utils::error::{PaintError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SUPPORTED_FORMATS: &[&str] = &["json", "csv"];
pub const JSON_FILENAME: &str = "estimate.json";
pub const CSV_FILENAME: &str = "walls.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    pub project: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub policy: String,
    pub job: PaintJob,
    pub estimate: Estimate,
    pub summary: ReportSummary,
}

/// Human-readable lines, as shown on the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub paintable_area: String,
    pub liters: String,
    pub purchase: String,
    pub purchase_with_margin: String,
}

#[derive(Debug, Serialize)]
struct WallRow {
    index: usize,
    width: f64,
    height: f64,
    area: f64,
    counted: bool,
}

impl EstimateReport {
    pub fn new(project: Option<String>, policy: &str, job: PaintJob, estimate: Estimate) -> Self {
        let summary = ReportSummary {
            paintable_area: format_area(estimate.paintable_area),
            liters: format_liters(estimate.liters),
            purchase: describe_recommendation(&estimate.recommendation, &job.containers, &job.labels),
            purchase_with_margin: describe_recommendation(
                &estimate.recommendation_with_margin,
                &job.containers,
                &job.labels,
            ),
        };

        Self {
            project,
            generated_at: Utc::now(),
            policy: policy.to_string(),
            job,
            estimate,
            summary,
        }
    }

    /// Terminal summary, one fact per line.
    pub fn render_text(&self) -> String {
        let margin_percent = self.job.margin * 100.0;
        let mut lines = Vec::new();
        if let Some(project) = &self.project {
            lines.push(format!("Project: {}", project));
        }
        lines.push(format!("Paintable area: {}", self.summary.paintable_area));
        lines.push(format!("Paint needed: {}", self.summary.liters));
        lines.push(format!("Buy: {}", self.summary.purchase));
        lines.push(format!(
            "Buy with {:.0}% margin ({}): {}",
            margin_percent,
            format_liters(self.estimate.liters_with_margin),
            self.summary.purchase_with_margin
        ));
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn walls_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for (index, wall) in self.job.walls.iter().enumerate() {
            writer.serialize(WallRow {
                index: index + 1,
                width: wall.width,
                height: wall.height,
                area: wall.area(),
                counted: wall.is_measured(),
            })?;
        }
        writer
            .into_inner()
            .map_err(|e| PaintError::Io(e.into_error()))
    }
}

pub struct ReportWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 依照格式寫出報告，回傳寫入的檔名
    pub fn write(&self, report: &EstimateReport, formats: &[String]) -> Result<Vec<String>> {
        crate::utils::validation::validate_output_formats("output.formats", formats, SUPPORTED_FORMATS)?;

        let mut written = Vec::new();
        for format in formats {
            let (filename, data) = match format.as_str() {
                "json" => (JSON_FILENAME, report.to_json()?.into_bytes()),
                "csv" => (CSV_FILENAME, report.walls_csv()?),
                _ => continue,
            };

            tracing::debug!("Writing {} ({} bytes) to storage", filename, data.len());
            self.storage.write_file(filename, &data)?;
            written.push(filename.to_string());
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimator::Estimator;
    use crate::core::packing::TwoSizeCombination;
    use crate::domain::model::Wall;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn sample_report() -> EstimateReport {
        let job = PaintJob::new(vec![Wall::new(4.0, 2.5), Wall::new(0.0, 2.5)]);
        let estimator = Estimator::new(TwoSizeCombination);
        let estimate = estimator.estimate(&job).unwrap();
        EstimateReport::new(Some("Bedroom".to_string()), estimator.strategy_name(), job, estimate)
    }

    #[test]
    fn test_summary_lines() {
        let report = sample_report();
        assert_eq!(report.summary.paintable_area, "10.00 m²");
        assert_eq!(report.summary.purchase, "1 gallon(s) of 3.6L");
        assert_eq!(report.policy, "combination");
    }

    #[test]
    fn test_render_text() {
        let text = sample_report().render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Project: Bedroom");
        assert_eq!(lines[2], "Paint needed: 1.20 L");
        assert_eq!(lines[3], "Buy: 1 gallon(s) of 3.6L");
        assert_eq!(lines[4], "Buy with 10% margin (1.32 L): 1 gallon(s) of 3.6L");
    }

    #[test]
    fn test_write_json_and_csv() {
        let storage = MockStorage::default();
        let writer = ReportWriter::new(storage.clone());
        let report = sample_report();

        let written = writer
            .write(&report, &["json".to_string(), "csv".to_string()])
            .unwrap();
        assert_eq!(written, vec![JSON_FILENAME, CSV_FILENAME]);

        let json: serde_json::Value =
            serde_json::from_slice(&storage.get_file(JSON_FILENAME).unwrap()).unwrap();
        assert_eq!(json["project"], "Bedroom");
        assert_eq!(json["estimate"]["recommendation"]["kind"], "containers");

        let csv = String::from_utf8(storage.get_file(CSV_FILENAME).unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("index,width,height,area,counted"));
        assert_eq!(lines.next(), Some("1,4.0,2.5,10.0,true"));
        assert_eq!(lines.next(), Some("2,0.0,2.5,0.0,false"));
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let writer = ReportWriter::new(MockStorage::default());
        let err = writer.write(&sample_report(), &["xlsx".to_string()]).unwrap_err();
        assert!(matches!(err, PaintError::InvalidConfigValue { .. }));
    }
}
