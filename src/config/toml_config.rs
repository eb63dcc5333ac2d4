use crate::core::report::SUPPORTED_FORMATS;
use crate::domain::model::{
    ContainerLabels, ContainerSizes, Openings, OpeningSizes, PackingPolicy, PaintJob, Wall,
    DEFAULT_COATS, DEFAULT_COVERAGE_PER_CAN, DEFAULT_MARGIN,
};
use crate::domain::ports::JobProvider;
use crate::utils::error::{PaintError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectConfig,
    pub walls: Option<Vec<Wall>>,
    #[serde(default)]
    pub openings: OpeningsConfig,
    #[serde(default)]
    pub paint: PaintConfig,
    pub containers: Option<ContainersConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningsConfig {
    #[serde(default)]
    pub doors: u32,
    #[serde(default)]
    pub windows: u32,
    pub door_area: Option<f64>,
    pub window_area: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaintConfig {
    pub coverage_per_can: Option<f64>,
    pub coats: Option<u32>,
    pub margin: Option<f64>,
    pub policy: Option<PackingPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainersConfig {
    pub large: Option<f64>,
    pub small: Option<f64>,
    pub large_label: Option<String>,
    pub small_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_formats() -> Vec<String> {
    vec!["json".to_string()]
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PaintError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PaintError::ConfigParse {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn project_name(&self) -> &str {
        &self.project.name
    }

    pub fn policy(&self) -> PackingPolicy {
        self.paint.policy.unwrap_or_default()
    }

    pub fn container_sizes(&self) -> ContainerSizes {
        let defaults = ContainerSizes::default();
        match &self.containers {
            Some(c) => ContainerSizes {
                large: c.large.unwrap_or(defaults.large),
                small: c.small.unwrap_or(defaults.small),
            },
            None => defaults,
        }
    }

    pub fn container_labels(&self) -> ContainerLabels {
        let defaults = ContainerLabels::default();
        match &self.containers {
            Some(c) => ContainerLabels {
                large: c.large_label.clone().unwrap_or(defaults.large),
                small: c.small_label.clone().unwrap_or(defaults.small),
            },
            None => defaults,
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("project.name", &self.project.name)?;

        if let Some(output) = &self.output {
            validation::validate_path("output.path", &output.path)?;
            validation::validate_output_formats("output.formats", &output.formats, SUPPORTED_FORMATS)?;
        }

        if let Some(coverage) = self.paint.coverage_per_can {
            validation::validate_positive_number("paint.coverage_per_can", coverage)?;
        }

        self.paint_job()?.validate()
    }
}

impl JobProvider for TomlConfig {
    fn paint_job(&self) -> Result<PaintJob> {
        let walls = validation::validate_required_field("walls", &self.walls)?;
        let default_openings = OpeningSizes::default();

        Ok(PaintJob {
            walls: walls.clone(),
            openings: Openings {
                doors: self.openings.doors,
                windows: self.openings.windows,
            },
            opening_sizes: OpeningSizes {
                door_area: self.openings.door_area.unwrap_or(default_openings.door_area),
                window_area: self.openings.window_area.unwrap_or(default_openings.window_area),
            },
            coverage_per_can: self.paint.coverage_per_can.unwrap_or(DEFAULT_COVERAGE_PER_CAN),
            coats: self.paint.coats.unwrap_or(DEFAULT_COATS),
            margin: self.paint.margin.unwrap_or(DEFAULT_MARGIN),
            containers: self.container_sizes(),
            labels: self.container_labels(),
            policy: self.policy(),
        })
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.path.as_str())
    }

    fn output_formats(&self) -> &[String] {
        self.output.as_ref().map(|o| o.formats.as_slice()).unwrap_or(&[])
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
