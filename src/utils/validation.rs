use crate::utils::error::{PaintError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PaintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PaintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PaintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a number greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PaintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_count(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(PaintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String], allowed: &[&str]) -> Result<()> {
    for format in formats {
        if !allowed.contains(&format.as_str()) {
            return Err(PaintError::InvalidConfigValue {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!("Unsupported format. Valid formats: {}", allowed.join(", ")),
            });
        }
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PaintError::MissingConfig {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PaintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons
    if !(value >= min && value <= max) {
        return Err(PaintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
