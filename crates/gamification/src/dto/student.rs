use serde::Serialize;

/// Per-student view joined from the roster and the gamification sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedStudentData {
    /// `<classId or "no-class">-<username>`
    pub id: String,
    pub name: String,
    pub username: String,
    pub class: Option<String>,
    pub class_id: Option<String>,
    pub points: u64,
    pub level: u32,
    pub badges: usize,
    /// Badge names followed by achievement names.
    pub achievements: Vec<String>,
}

/// Non-fatal finding raised while processing; callers decide whether to log it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// The same derived id appears on several output rows.
    DuplicateId { id: String, occurrences: usize },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { id, occurrences } => {
                write!(f, "Duplicate student id '{}' ({} rows)", id, occurrences)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessOutcome {
    pub students: Vec<ProcessedStudentData>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ProcessOutcome {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
