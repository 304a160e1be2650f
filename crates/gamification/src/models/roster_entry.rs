use serde::{Deserialize, Serialize};

/// Placeholder class id used in composite keys when a roster row has none.
pub const NO_CLASS: &str = "no-class";

/// One enrolled student. The roster is the source of truth for identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub username: String,
    #[serde(default)]
    pub class_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Display name of the class.
    #[serde(default, rename = "class")]
    pub class_name: Option<String>,
}

impl RosterEntry {
    /// `<classId or "no-class">-<username>`, the derived student id. Distinct
    /// (class, username) pairs can join to the same string.
    pub fn composite_key(&self) -> String {
        format!(
            "{}-{}",
            self.class_id.as_deref().unwrap_or(NO_CLASS),
            self.username
        )
    }

    pub fn class_id(&self) -> Option<&str> {
        self.class_id.as_deref()
    }

    /// Full name, or the username when the sheet left it blank.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(username: &str, class_id: Option<&str>) -> RosterEntry {
        RosterEntry {
            username: username.to_string(),
            class_id: class_id.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_composite_key_with_class() {
        assert_eq!(entry("amy", Some("c1")).composite_key(), "c1-amy");
    }

    #[test]
    fn test_composite_key_without_class() {
        assert_eq!(entry("amy", None).composite_key(), "no-class-amy");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut row = entry("amy", Some("c1"));
        assert_eq!(row.display_name(), "amy");

        row.full_name = Some("   ".to_string());
        assert_eq!(row.display_name(), "amy");

        row.full_name = Some("Amy Pond".to_string());
        assert_eq!(row.display_name(), "Amy Pond");
    }

    #[test]
    fn test_class_column_renamed() {
        let row: RosterEntry = serde_json::from_str(
            r#"{"username":"amy","classId":"c1","fullName":"Amy","class":"Grade 5"}"#,
        )
        .unwrap();
        assert_eq!(row.class_name.as_deref(), Some("Grade 5"));
        assert_eq!(row.full_name.as_deref(), Some("Amy"));
    }
}
