use crate::utils::error::{FormatError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Presence and non-empty check for a required free-text field.
///
/// Returns the message to report, if any. `class` names the record type in
/// the message, e.g. `"Site"`.
pub fn check_required_text(class: &str, field_name: &str, value: Option<&str>) -> Option<String> {
    match value {
        None => Some(format!("No {} in {} Class.", field_name, class)),
        Some(v) if v.is_empty() => Some(format!("Empty {} in {} Class.", field_name, class)),
        Some(_) => None,
    }
}

/// Presence and inclusive range check for a required numeric field.
///
/// NaN is never inside a range and is reported as out of range.
pub fn check_required_range(
    class: &str,
    field_name: &str,
    value: Option<f64>,
    min: f64,
    max: f64,
) -> Option<String> {
    match value {
        None => Some(format!("No {} in {} Class.", field_name, class)),
        Some(v) if !(min..=max).contains(&v) => Some(format!(
            "{} in {} Class not in the range of {} to {}.",
            field_name, class, min, max
        )),
        Some(_) => None,
    }
}

/// Presence-only check for a required numeric field.
pub fn check_required_number(class: &str, field_name: &str, value: Option<f64>) -> Option<String> {
    value
        .is_none()
        .then(|| format!("No {} in {} Class.", field_name, class))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(FormatError::config(format!("{} cannot be empty", field_name)));
    }

    if path.contains('\0') {
        return Err(FormatError::config(format!(
            "{} contains null bytes",
            field_name
        )));
    }

    Ok(())
}
