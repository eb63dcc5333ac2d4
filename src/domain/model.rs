use crate::utils::error::PaintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LARGE_CONTAINER_LITERS: f64 = 18.0;
pub const SMALL_CONTAINER_LITERS: f64 = 3.6;

/// 0.80m x 2.10m
pub const DOOR_AREA_M2: f64 = 1.68;
/// 2.00m x 1.20m
pub const WINDOW_AREA_M2: f64 = 2.4;

pub const DEFAULT_COVERAGE_PER_CAN: f64 = 300.0;
pub const DEFAULT_COATS: u32 = 2;
pub const DEFAULT_MARGIN: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSizes {
    pub large: f64,
    pub small: f64,
}

impl Default for ContainerSizes {
    fn default() -> Self {
        Self {
            large: LARGE_CONTAINER_LITERS,
            small: SMALL_CONTAINER_LITERS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerCombination {
    pub large: u64,
    pub small: u64,
}

impl ContainerCombination {
    pub fn total_liters(&self, sizes: &ContainerSizes) -> f64 {
        self.large as f64 * sizes.large + self.small as f64 * sizes.small
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    NoneNeeded,
    Containers(ContainerCombination),
}

impl Recommendation {
    pub fn counts(&self) -> (u64, u64) {
        match self {
            Recommendation::NoneNeeded => (0, 0),
            Recommendation::Containers(c) => (c.large, c.small),
        }
    }

    pub fn is_none_needed(&self) -> bool {
        matches!(self, Recommendation::NoneNeeded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub width: f64,
    pub height: f64,
}

impl Wall {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// 只有長寬都大於零的牆才計入面積
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl FromStr for Wall {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| PaintError::InvalidWall {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.trim().split(['x', 'X', '×']);
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected <width>x<height>"));
        };

        let width: f64 = width
            .trim()
            .parse()
            .map_err(|_| invalid("width is not a number"))?;
        let height: f64 = height
            .trim()
            .parse()
            .map_err(|_| invalid("height is not a number"))?;

        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(invalid("dimensions must be finite and not negative"));
        }

        Ok(Wall::new(width, height))
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Openings {
    #[serde(default)]
    pub doors: u32,
    #[serde(default)]
    pub windows: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpeningSizes {
    pub door_area: f64,
    pub window_area: f64,
}

impl Default for OpeningSizes {
    fn default() -> Self {
        Self {
            door_area: DOOR_AREA_M2,
            window_area: WINDOW_AREA_M2,
        }
    }
}

impl OpeningSizes {
    pub fn area_of(&self, openings: &Openings) -> f64 {
        openings.doors as f64 * self.door_area + openings.windows as f64 * self.window_area
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PackingPolicy {
    #[default]
    Combination,
    LargeOnly,
}

impl PackingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackingPolicy::Combination => "combination",
            PackingPolicy::LargeOnly => "large-only",
        }
    }
}

impl fmt::Display for PackingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerLabels {
    pub large: String,
    pub small: String,
}

impl Default for ContainerLabels {
    fn default() -> Self {
        Self {
            large: "can".to_string(),
            small: "gallon".to_string(),
        }
    }
}

/// 一次估算所需的全部輸入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintJob {
    pub walls: Vec<Wall>,
    pub openings: Openings,
    pub opening_sizes: OpeningSizes,
    /// m² covered by one large container
    pub coverage_per_can: f64,
    pub coats: u32,
    pub margin: f64,
    pub containers: ContainerSizes,
    pub labels: ContainerLabels,
    pub policy: PackingPolicy,
}

impl PaintJob {
    pub fn new(walls: Vec<Wall>) -> Self {
        Self {
            walls,
            openings: Openings::default(),
            opening_sizes: OpeningSizes::default(),
            coverage_per_can: DEFAULT_COVERAGE_PER_CAN,
            coats: DEFAULT_COATS,
            margin: DEFAULT_MARGIN,
            containers: ContainerSizes::default(),
            labels: ContainerLabels::default(),
            policy: PackingPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub wall_area: f64,
    pub openings_area: f64,
    pub paintable_area: f64,
    pub liters: f64,
    pub liters_with_margin: f64,
    pub recommendation: Recommendation,
    pub recommendation_with_margin: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wall() {
        let wall: Wall = "4.5x2.7".parse().unwrap();
        assert_eq!(wall, Wall::new(4.5, 2.7));

        let wall: Wall = " 3 X 2.5 ".parse().unwrap();
        assert_eq!(wall, Wall::new(3.0, 2.5));

        let wall: Wall = "2×2".parse().unwrap();
        assert_eq!(wall.area(), 4.0);
    }

    #[test]
    fn test_parse_wall_rejects_garbage() {
        assert!("4.5".parse::<Wall>().is_err());
        assert!("4x2x1".parse::<Wall>().is_err());
        assert!("ax2".parse::<Wall>().is_err());
        assert!("-1x2".parse::<Wall>().is_err());
    }

    #[test]
    fn test_unmeasured_wall() {
        assert!(!Wall::new(0.0, 2.7).is_measured());
        assert!(Wall::new(1.0, 2.7).is_measured());
    }

    #[test]
    fn test_opening_area() {
        let openings = Openings {
            doors: 2,
            windows: 1,
        };
        let area = OpeningSizes::default().area_of(&openings);
        assert!((area - 5.76).abs() < 1e-9);
    }

    #[test]
    fn test_recommendation_serializes_with_kind_tag() {
        let json = serde_json::to_value(Recommendation::Containers(ContainerCombination {
            large: 1,
            small: 2,
        }))
        .unwrap();
        assert_eq!(json["kind"], "containers");
        assert_eq!(json["large"], 1);
        assert_eq!(json["small"], 2);

        let json = serde_json::to_value(Recommendation::NoneNeeded).unwrap();
        assert_eq!(json["kind"], "none_needed");
    }
}
