use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::model::{Assessment, Category, OutputFormat, PackageSpec};
use crate::utils::error::Result;

/// JSON document emitted by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport<'a> {
    pub package: &'a PackageSpec,
    pub category: Category,
    pub bulky: bool,
    pub heavy: bool,
    pub remarks: &'a [String],
    pub classified_at: DateTime<Utc>,
}

impl<'a> ClassificationReport<'a> {
    pub fn new(assessment: &'a Assessment, classified_at: DateTime<Utc>) -> Self {
        Self {
            package: &assessment.package,
            category: assessment.category,
            bulky: assessment.bulky,
            heavy: assessment.heavy,
            remarks: &assessment.remarks,
            classified_at,
        }
    }
}

pub fn render(assessment: &Assessment, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(assessment.category.to_string()),
        OutputFormat::Json => {
            let report = ClassificationReport::new(assessment, Utc::now());
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
