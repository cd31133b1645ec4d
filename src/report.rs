//! Machine-readable verdict for grading pipelines.
//!
//! Printed on stdout by `handin --json`, one object per run:
//!
//! ```text
//! {"path":"Smith-01.zip","checked_at":"2024-09-01T12:00:00Z","accepted":true,
//!  "identity":{"author":"Smith","assignment":"01"},"rejections":[]}
//! ```

use crate::validate::{Accepted, Rejection, RejectionKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Identity fields of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportIdentity {
    pub author: String,
    pub assignment: String,
    /// Only set when the top-level path was a single document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_number: Option<String>,
}

/// One diagnostic in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRejection {
    pub kind: RejectionKind,
    pub message: String,
}

/// Outcome of checking one top-level path.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub path: String,
    pub checked_at: DateTime<Utc>,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ReportIdentity>,
    pub rejections: Vec<ReportRejection>,
}

impl Report {
    /// Build a report from a checker's verdict and its rejections.
    ///
    /// A verdict is only reported as accepted if nothing was rejected.
    pub fn new(path: &Path, accepted: Option<&Accepted>, rejections: &[Rejection]) -> Self {
        let identity = accepted.map(|verdict| ReportIdentity {
            author: verdict.author().to_string(),
            assignment: verdict.assignment().to_string(),
            file_number: match verdict {
                Accepted::Document(id) => Some(id.file_number.clone()),
                Accepted::Submission(_) => None,
            },
        });

        Self {
            path: path.display().to_string(),
            checked_at: Utc::now(),
            accepted: identity.is_some() && rejections.is_empty(),
            identity,
            rejections: rejections
                .iter()
                .map(|r| ReportRejection {
                    kind: r.kind(),
                    message: r.to_string(),
                })
                .collect(),
        }
    }

    /// Serialize the report to a single-line JSON string.
    pub fn to_json(&self) -> String {
        // Only strings, bools and timestamps: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
