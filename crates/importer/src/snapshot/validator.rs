use std::collections::HashSet;

use chrono::DateTime;
use gamification::RawField;
use tracing::warn;

use super::Snapshot;
use crate::{ImporterError, Result};

/// Checks a snapshot before it is handed to the core.
///
/// The core tolerates all of the warnings below; they exist so sheet owners
/// can fix their data. Only rows the core cannot identify at all are errors.
pub struct SnapshotValidator;

impl SnapshotValidator {
    pub fn validate(snapshot: &Snapshot) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        let mut roster_members = HashSet::new();
        for (idx, entry) in snapshot.roster.iter().enumerate() {
            if entry.username.trim().is_empty() {
                report
                    .errors
                    .push(format!("Roster row {} has an empty username", idx + 1));
                continue;
            }

            if !roster_members.insert((entry.class_id(), entry.username.as_str())) {
                report.warnings.push(format!(
                    "Duplicate roster row for '{}'",
                    entry.composite_key()
                ));
            }
        }

        for (idx, record) in snapshot.records.iter().enumerate() {
            let Some(username) = record.username() else {
                report.warnings.push(format!(
                    "Gamification row {} has no studentUsername and will be skipped",
                    idx + 1
                ));
                continue;
            };
            let label = format!("{} ({})", username, record.class_id().unwrap_or("no class"));

            match &record.points {
                None => report
                    .warnings
                    .push(format!("'{}' has no points and will not be ranked", label)),
                Some(raw) if raw.as_integer().is_none() => report.warnings.push(format!(
                    "'{}' has unreadable points {} (treated as 0)",
                    label,
                    describe(raw)
                )),
                Some(_) => {}
            }

            if let Some(raw) = &record.level
                && raw.as_integer().is_none()
            {
                report.warnings.push(format!(
                    "'{}' has unreadable level {} (treated as 1)",
                    label,
                    describe(raw)
                ));
            }

            if let Some(updated_at) = &record.updated_at
                && DateTime::parse_from_rfc3339(updated_at).is_err()
            {
                report.warnings.push(format!(
                    "'{}' has an unreadable updatedAt '{}'",
                    label, updated_at
                ));
            }

            if !roster_members.contains(&(record.class_id(), username)) {
                report
                    .warnings
                    .push(format!("'{}' has no matching roster entry", label));
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::Validation(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

fn describe(raw: &RawField) -> String {
    match raw {
        RawField::Integer(value) => value.to_string(),
        RawField::Float(value) => value.to_string(),
        RawField::Text(text) => format!("'{}'", text),
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
