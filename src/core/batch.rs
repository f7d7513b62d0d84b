use crate::domain::model::Site;
use crate::domain::ports::ProcessingFormat;
use crate::utils::error::{describe_value, FormatError, Result};
use serde_json::Value;

pub const NOT_AN_OBJECT_MESSAGE: &str = "Record is not a JSON object.";

/// Outcome of checking one record of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteReport {
    pub index: usize,
    pub site: Site,
    pub errors: Vec<String>,
}

impl SiteReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// `{"index": n, "valid": bool, "errors": [...], "site": {...}}`
    pub fn to_json(&self, include_site: bool) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("index".to_string(), Value::from(self.index));
        obj.insert("valid".to_string(), Value::from(self.is_valid()));
        obj.insert(
            "errors".to_string(),
            Value::Array(self.errors.iter().cloned().map(Value::from).collect()),
        );
        if include_site {
            obj.insert("site".to_string(), Value::Object(self.site.to_json()));
        }
        Value::Object(obj)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[SiteReport]) -> Self {
        let valid = reports.iter().filter(|r| r.is_valid()).count();
        Self {
            total: reports.len(),
            valid,
            invalid: reports.len() - valid,
        }
    }
}

fn check_record(index: usize, value: &Value) -> SiteReport {
    match value {
        Value::Object(obj) => {
            let site = Site::from_json(obj);
            let errors = site.errors();
            SiteReport {
                index,
                site,
                errors,
            }
        }
        other => {
            tracing::debug!("Record {} is {}, not an object", index, describe_value(other));
            let site = Site::default();
            let mut errors = vec![NOT_AN_OBJECT_MESSAGE.to_string()];
            errors.extend(site.errors());
            SiteReport {
                index,
                site,
                errors,
            }
        }
    }
}

/// Checks a document holding either one site object or an array of them.
pub fn check_document(document: &Value) -> Result<Vec<SiteReport>> {
    let reports: Vec<SiteReport> = match document {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| check_record(i, item))
            .collect(),
        // 單一物件視為只有一筆的陣列
        Value::Object(_) => vec![check_record(0, document)],
        other => {
            return Err(FormatError::NotAnObject {
                found: describe_value(other),
            })
        }
    };

    for report in reports.iter().filter(|r| !r.is_valid()) {
        tracing::warn!(
            "Record {} is invalid: {}",
            report.index,
            report.errors.join(" ")
        );
    }

    let summary = BatchSummary::from_reports(&reports);
    tracing::info!(
        "Checked {} record(s): {} valid, {} invalid",
        summary.total,
        summary.valid,
        summary.invalid
    );

    Ok(reports)
}

pub fn check_document_str(text: &str) -> Result<Vec<SiteReport>> {
    let document: Value = serde_json::from_str(text)?;
    check_document(&document)
}
