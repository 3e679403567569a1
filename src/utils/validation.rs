use crate::core::rules;
use crate::domain::model::DeletionRule;
use crate::utils::error::{Result, ScrubError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScrubError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScrubError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScrubError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_rules(field_name: &str, rules: &[DeletionRule]) -> Result<()> {
    if rules.is_empty() {
        return Err(ScrubError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for rule in rules {
        validate_non_empty_string(&format!("{}.name", field_name), &rule.name)?;

        if !seen.insert(rule.name.as_str()) {
            return Err(ScrubError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: rule.name.clone(),
                reason: "Duplicate rule name".to_string(),
            });
        }

        if let Err(e) = rules::compile(rule) {
            return Err(ScrubError::InvalidConfigValueError {
                field: format!("{}.pattern", field_name),
                value: rule.pattern.clone(),
                reason: format!("Pattern does not compile: {}", e),
            });
        }
    }

    Ok(())
}
