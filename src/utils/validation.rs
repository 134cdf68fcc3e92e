use crate::utils::error::{ModelError, Result};
use regex::Regex;
use std::sync::LazyLock;

static RESOURCE_ID_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}(?:[0-9a-f]{9})?$").expect("resource id pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModelError::invalid_argument(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(ModelError::invalid_argument(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::invalid_argument(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max: usize) -> Result<()> {
    let length = value.chars().count();
    if length > max {
        return Err(ModelError::invalid_argument(
            field_name,
            value,
            format!("Value is {} characters, limit is {}", length, max),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ModelError::invalid_argument(
            field_name,
            value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Checks an EC2 resource id such as `i-0123456789abcdef0` or `vpc-1a2b3c4d`.
pub fn validate_resource_id(field_name: &str, value: &str, prefix: &str) -> Result<()> {
    let suffix = value
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(|| {
            ModelError::invalid_argument(
                field_name,
                value,
                format!("Expected an id starting with '{}-'", prefix),
            )
        })?;

    if !RESOURCE_ID_SUFFIX.is_match(suffix) {
        return Err(ModelError::invalid_argument(
            field_name,
            value,
            "Id suffix must be 8 or 17 lowercase hex digits",
        ));
    }
    Ok(())
}

pub fn validate_resource_ids(field_name: &str, values: &[String], prefix: &str) -> Result<()> {
    for value in values {
        validate_resource_id(field_name, value, prefix)?;
    }
    Ok(())
}
