use crate::domain::model::{ContainerLabels, ContainerSizes, Recommendation};

pub const NONE_NEEDED_MESSAGE: &str = "No paint needed";

/// "2 can(s) of 18L and 1 gallon(s) of 3.6L"
pub fn describe_recommendation(
    recommendation: &Recommendation,
    sizes: &ContainerSizes,
    labels: &ContainerLabels,
) -> String {
    let combination = match recommendation {
        Recommendation::NoneNeeded => return NONE_NEEDED_MESSAGE.to_string(),
        Recommendation::Containers(c) => c,
    };

    let mut parts = Vec::new();
    if combination.large > 0 {
        parts.push(format!(
            "{} {}(s) of {}L",
            combination.large, labels.large, sizes.large
        ));
    }
    if combination.small > 0 {
        parts.push(format!(
            "{} {}(s) of {}L",
            combination.small, labels.small, sizes.small
        ));
    }

    if parts.is_empty() {
        format!("Less than 1 {}", labels.small)
    } else {
        parts.join(" and ")
    }
}

pub fn format_liters(liters: f64) -> String {
    format!("{:.2} L", liters)
}

pub fn format_area(area: f64) -> String {
    format!("{:.2} m²", area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ContainerCombination;

    fn describe(large: u64, small: u64) -> String {
        describe_recommendation(
            &Recommendation::Containers(ContainerCombination { large, small }),
            &ContainerSizes::default(),
            &ContainerLabels::default(),
        )
    }

    #[test]
    fn test_both_sizes() {
        assert_eq!(describe(2, 1), "2 can(s) of 18L and 1 gallon(s) of 3.6L");
    }

    #[test]
    fn test_single_size() {
        assert_eq!(describe(1, 0), "1 can(s) of 18L");
        assert_eq!(describe(0, 3), "3 gallon(s) of 3.6L");
    }

    #[test]
    fn test_none_needed() {
        let text = describe_recommendation(
            &Recommendation::NoneNeeded,
            &ContainerSizes::default(),
            &ContainerLabels::default(),
        );
        assert_eq!(text, NONE_NEEDED_MESSAGE);
    }

    #[test]
    fn test_empty_combination_falls_back() {
        assert_eq!(describe(0, 0), "Less than 1 gallon");
    }

    #[test]
    fn test_custom_labels() {
        let labels = ContainerLabels {
            large: "lata".to_string(),
            small: "galão".to_string(),
        };
        let text = describe_recommendation(
            &Recommendation::Containers(ContainerCombination { large: 1, small: 2 }),
            &ContainerSizes::default(),
            &labels,
        );
        assert_eq!(text, "1 lata(s) of 18L and 2 galão(s) of 3.6L");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_liters(0.9984), "1.00 L");
        assert_eq!(format_area(8.32), "8.32 m²");
    }
}
