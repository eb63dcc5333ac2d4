use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaintError {
    #[error("Liters needed cannot be negative: {liters}")]
    NegativeQuantity { liters: f64 },

    #[error("Liters needed must be a finite number, got {liters}")]
    NonFiniteQuantity { liters: f64 },

    #[error("Liters needed ({liters}) is too large to count in containers")]
    QuantityTooLarge { liters: f64 },

    #[error("No wall has both a width and a height greater than zero")]
    NoWallArea,

    #[error("Doors and windows ({openings_area:.2} m²) cover the whole wall area ({wall_area:.2} m²)")]
    OpeningsExceedWalls { wall_area: f64, openings_area: f64 },

    #[error("Paint coverage must be greater than zero, got {coverage}")]
    InvalidCoverage { coverage: f64 },

    #[error("Invalid wall '{input}': {reason}")]
    InvalidWall { input: String, reason: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PaintError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PaintError::NegativeQuantity { .. }
            | PaintError::NonFiniteQuantity { .. }
            | PaintError::QuantityTooLarge { .. }
            | PaintError::NoWallArea
            | PaintError::OpeningsExceedWalls { .. }
            | PaintError::InvalidCoverage { .. }
            | PaintError::InvalidWall { .. } => ErrorCategory::Input,
            PaintError::InvalidConfigValue { .. }
            | PaintError::MissingConfig { .. }
            | PaintError::ConfigParse { .. } => ErrorCategory::Configuration,
            PaintError::Io(_) | PaintError::Serialization(_) | PaintError::Csv(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 上游計算錯誤，不是使用者輸入
            PaintError::NegativeQuantity { .. }
            | PaintError::NonFiniteQuantity { .. }
            | PaintError::QuantityTooLarge { .. } => ErrorSeverity::Critical,
            PaintError::Io(_) | PaintError::Serialization(_) | PaintError::Csv(_) => {
                ErrorSeverity::Critical
            }
            PaintError::InvalidConfigValue { .. }
            | PaintError::MissingConfig { .. }
            | PaintError::ConfigParse { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// 對應 CLI 的結束代碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PaintError::NegativeQuantity { .. }
            | PaintError::NonFiniteQuantity { .. }
            | PaintError::QuantityTooLarge { .. } => {
                "Check the area, coats and coverage values feeding the calculation"
            }
            PaintError::NoWallArea => "Fill in the width and height of at least one wall",
            PaintError::OpeningsExceedWalls { .. } => {
                "Reduce the number of doors and windows or add more walls"
            }
            PaintError::InvalidCoverage { .. } => {
                "Use the coverage printed on the paint can (m² per can), e.g. 300"
            }
            PaintError::InvalidWall { .. } => "Walls are written as <width>x<height>, e.g. 4.5x2.7",
            PaintError::InvalidConfigValue { .. } | PaintError::MissingConfig { .. } => {
                "Review the configuration values and try again"
            }
            PaintError::ConfigParse { .. } => "Make sure the project file is valid TOML",
            PaintError::Io(_) => "Check that the output directory exists and is writable",
            PaintError::Serialization(_) | PaintError::Csv(_) => {
                "Retry; if the problem persists, report it with --verbose output"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Cannot estimate paint: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaintError>;
