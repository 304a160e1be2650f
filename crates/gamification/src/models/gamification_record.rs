use serde::{Deserialize, Serialize};

use super::RawField;

/// One gamification row per (class, student) as delivered by the upstream sheet.
///
/// Every column is optional: the core substitutes defaults through
/// [`crate::normalize`] instead of rejecting rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationRecord {
    #[serde(default)]
    pub class_id: Option<String>,
    #[serde(default)]
    pub student_username: Option<String>,
    #[serde(default)]
    pub points: Option<RawField>,
    #[serde(default)]
    pub level: Option<RawField>,
    #[serde(default)]
    pub badges: Option<String>,
    #[serde(default)]
    pub achievements: Option<String>,
    /// Informational only; never used in derivations.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl GamificationRecord {
    pub fn username(&self) -> Option<&str> {
        self.student_username.as_deref().filter(|name| !name.is_empty())
    }

    pub fn class_id(&self) -> Option<&str> {
        self.class_id.as_deref()
    }

    /// A record is rankable when it names a student and carries a points cell.
    /// A literal zero counts as present.
    pub fn is_rankable(&self) -> bool {
        self.username().is_some() && self.points.is_some()
    }
}
