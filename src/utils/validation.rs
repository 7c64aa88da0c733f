use crate::utils::error::{AstroError, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AstroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AstroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AstroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(AstroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
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
    if value < min || value > max {
        return Err(AstroError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Request-level name check. Whitespace-only names are rejected, not seeded from the date alone.
pub fn validate_person_name(name: Option<&str>) -> Result<&str> {
    let name = name.ok_or_else(|| AstroError::validation("name is required"))?;
    if name.is_empty() {
        return Err(AstroError::validation("name must contain at least 1 character"));
    }
    if name.trim().is_empty() {
        return Err(AstroError::validation("name cannot be whitespace-only"));
    }
    Ok(name)
}

/// Parses an ISO-8601 calendar date written exactly as `YYYY-MM-DD`, years 1 through 9999.
pub fn parse_birth_date(dob: Option<&str>) -> Result<NaiveDate> {
    static ISO_DATE: OnceLock<Regex> = OnceLock::new();
    let re = ISO_DATE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid")
    });

    let dob = dob.ok_or_else(|| AstroError::validation("dob is required"))?;
    // chrono 的 %Y 也接受未補零、帶正負號或五位數年份
    if !re.is_match(dob) {
        return Err(AstroError::validation(format!(
            "dob '{}' must be formatted as YYYY-MM-DD",
            dob
        )));
    }

    let date = NaiveDate::parse_from_str(dob, "%Y-%m-%d").map_err(|e| {
        AstroError::validation(format!(
            "dob '{}' is not a valid YYYY-MM-DD date: {}",
            dob, e
        ))
    })?;

    if date.year() < 1 {
        return Err(AstroError::validation(format!(
            "dob '{}' is before year 1",
            dob
        )));
    }
    Ok(date)
}
