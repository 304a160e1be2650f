use std::collections::{HashMap, HashSet};

use crate::dto::{Diagnostic, ProcessOutcome, ProcessedStudentData};
use crate::models::{GamificationRecord, RosterEntry};
use crate::normalize::{parse_level, parse_points, reconcile_level, split_list};

use super::level_curve::calculate_level;

/// Joins each unique roster student to their gamification record.
///
/// Duplicate roster rows (same class id and username) collapse to the first
/// one seen.
/// A record matches only when both username and class id agree. Colliding
/// output ids are reported in [`ProcessOutcome::diagnostics`]; the rows are
/// still returned.
pub fn process(roster: &[RosterEntry], records: &[GamificationRecord]) -> ProcessOutcome {
    let students: Vec<ProcessedStudentData> = unique_roster(roster)
        .into_iter()
        .map(|entry| {
            let record = records.iter().find(|record| {
                record.student_username.as_deref() == Some(entry.username.as_str())
                    && record.class_id() == entry.class_id()
            });
            build_student(entry, record)
        })
        .collect();

    let diagnostics = find_duplicate_ids(&students);

    ProcessOutcome {
        students,
        diagnostics,
    }
}

fn unique_roster(roster: &[RosterEntry]) -> Vec<&RosterEntry> {
    let mut seen = HashSet::new();
    roster
        .iter()
        .filter(|entry| seen.insert((entry.class_id(), entry.username.as_str())))
        .collect()
}

fn build_student(entry: &RosterEntry, record: Option<&GamificationRecord>) -> ProcessedStudentData {
    let points = parse_points(record.and_then(|r| r.points.as_ref()));
    let stored_level = parse_level(record.and_then(|r| r.level.as_ref()));
    let level = reconcile_level(calculate_level(points), stored_level);

    let badge_names = split_list(record.and_then(|r| r.badges.as_deref()));
    let achievement_names = split_list(record.and_then(|r| r.achievements.as_deref()));
    let badges = badge_names.len();

    let mut achievements = badge_names;
    achievements.extend(achievement_names);

    ProcessedStudentData {
        id: entry.composite_key(),
        name: entry.display_name().to_string(),
        username: entry.username.clone(),
        class: entry.class_name.clone(),
        class_id: entry.class_id.clone(),
        points,
        level,
        badges,
        achievements,
    }
}

/// One diagnostic per id that occurs more than once, in first-seen order.
pub fn find_duplicate_ids(students: &[ProcessedStudentData]) -> Vec<Diagnostic> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for student in students {
        let count = counts.entry(student.id.as_str()).or_insert(0);
        if *count == 0 {
            order.push(student.id.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|id| {
            let occurrences = counts[id];
            (occurrences > 1).then(|| Diagnostic::DuplicateId {
                id: id.to_string(),
                occurrences,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawField;
    use serde_json::json;

    fn roster_entry(username: &str, class_id: Option<&str>, full_name: &str) -> RosterEntry {
        RosterEntry {
            username: username.to_string(),
            class_id: class_id.map(str::to_string),
            full_name: Some(full_name.to_string()),
            class_name: None,
        }
    }

    fn record(value: serde_json::Value) -> GamificationRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_end_to_end_student() {
        let roster = vec![roster_entry("amy", Some("c1"), "Amy")];
        let records = vec![record(json!({
            "studentUsername": "amy",
            "classId": "c1",
            "points": "1200",
            "level": "3",
            "badges": "gold,silver",
            "achievements": ""
        }))];

        let outcome = process(&roster, &records);

        assert!(!outcome.has_diagnostics());
        assert_eq!(outcome.students.len(), 1);
        let amy = &outcome.students[0];
        assert_eq!(amy.id, "c1-amy");
        assert_eq!(amy.name, "Amy");
        assert_eq!(amy.points, 1200);
        assert_eq!(amy.level, 5);
        assert_eq!(amy.badges, 2);
        assert_eq!(amy.achievements, vec!["gold", "silver"]);
    }

    #[test]
    fn test_duplicate_roster_rows_collapse() {
        let roster = vec![
            roster_entry("a", Some("c1"), "First"),
            roster_entry("a", Some("c1"), "Second"),
        ];

        let outcome = process(&roster, &[]);

        assert_eq!(outcome.students.len(), 1);
        assert_eq!(outcome.students[0].name, "First");
        assert!(!outcome.has_diagnostics());
    }

    #[test]
    fn test_same_username_in_two_classes_is_kept() {
        let roster = vec![
            roster_entry("a", Some("c1"), "A"),
            roster_entry("a", Some("c2"), "A"),
        ];

        let outcome = process(&roster, &[]);

        let ids: Vec<&str> = outcome.students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c1-a", "c2-a"]);
    }

    #[test]
    fn test_record_must_match_class() {
        let roster = vec![roster_entry("amy", Some("c1"), "Amy")];
        let records = vec![record(json!({
            "studentUsername": "amy",
            "classId": "c2",
            "points": 900
        }))];

        let outcome = process(&roster, &records);

        assert_eq!(outcome.students[0].points, 0);
        assert_eq!(outcome.students[0].level, 1);
    }

    #[test]
    fn test_roster_without_class_gets_placeholder_id() {
        let roster = vec![roster_entry("bo", None, "Bo")];
        let records = vec![record(json!({ "studentUsername": "bo", "points": 150 }))];

        let outcome = process(&roster, &records);

        assert_eq!(outcome.students[0].id, "no-class-bo");
        assert_eq!(outcome.students[0].points, 150);
        assert_eq!(outcome.students[0].level, 2);
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let roster = vec![roster_entry("amy", Some("c1"), "Amy")];
        let records = vec![record(json!({
            "studentUsername": "amy",
            "classId": "c1",
            "points": "N/A",
            "level": "unknown"
        }))];

        let outcome = process(&roster, &records);

        assert_eq!(outcome.students[0].points, 0);
        assert_eq!(outcome.students[0].level, 1);
    }

    #[test]
    fn test_stored_level_raises_but_never_lowers() {
        let roster = vec![
            roster_entry("up", Some("c1"), "Up"),
            roster_entry("down", Some("c1"), "Down"),
        ];
        let records = vec![
            GamificationRecord {
                class_id: Some("c1".to_string()),
                student_username: Some("up".to_string()),
                points: Some(RawField::Integer(50)),
                level: Some(RawField::Integer(4)),
                ..Default::default()
            },
            GamificationRecord {
                class_id: Some("c1".to_string()),
                student_username: Some("down".to_string()),
                points: Some(RawField::Integer(3000)),
                level: Some(RawField::Integer(2)),
                ..Default::default()
            },
        ];

        let outcome = process(&roster, &records);

        assert_eq!(outcome.students[0].level, 4);
        assert_eq!(outcome.students[1].level, 8);
    }

    #[test]
    fn test_achievements_concatenate_without_dedup() {
        let roster = vec![roster_entry("amy", Some("c1"), "Amy")];
        let records = vec![record(json!({
            "studentUsername": "amy",
            "classId": "c1",
            "points": 10,
            "badges": "gold, gold",
            "achievements": "first login, gold"
        }))];

        let outcome = process(&roster, &records);

        assert_eq!(outcome.students[0].badges, 2);
        assert_eq!(
            outcome.students[0].achievements,
            vec!["gold", "gold", "first login", "gold"]
        );
    }

    #[test]
    fn test_distinct_students_with_colliding_ids_are_kept_and_reported() {
        let roster = vec![
            roster_entry("y", Some("c1-x"), "Y"),
            roster_entry("x-y", Some("c1"), "XY"),
            roster_entry("a", None, "A"),
            roster_entry("a", Some("no-class"), "A again"),
        ];

        let outcome = process(&roster, &[]);

        assert_eq!(outcome.students.len(), 4);
        assert_eq!(
            outcome.diagnostics,
            vec![
                Diagnostic::DuplicateId {
                    id: "c1-x-y".to_string(),
                    occurrences: 2
                },
                Diagnostic::DuplicateId {
                    id: "no-class-a".to_string(),
                    occurrences: 2
                },
            ]
        );
    }

    #[test]
    fn test_find_duplicate_ids_reports_each_collision_once() {
        let student = |id: &str| ProcessedStudentData {
            id: id.to_string(),
            name: String::new(),
            username: String::new(),
            class: None,
            class_id: None,
            points: 0,
            level: 1,
            badges: 0,
            achievements: Vec::new(),
        };
        let students = vec![
            student("c1-a"),
            student("c1-b"),
            student("c1-a"),
            student("c1-b"),
            student("c1-a"),
            student("c1-c"),
        ];

        let diagnostics = find_duplicate_ids(&students);

        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::DuplicateId {
                    id: "c1-a".to_string(),
                    occurrences: 3
                },
                Diagnostic::DuplicateId {
                    id: "c1-b".to_string(),
                    occurrences: 2
                },
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let outcome = process(&[], &[]);
        assert!(outcome.students.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }
}
