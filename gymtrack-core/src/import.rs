//! Bulk import of exercise definitions from a JSON catalog file.

use diesel::prelude::*;
use log::{info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::db::models::{COUNTER_REPS, NewExercise};
use crate::db::operations::insert_exercises;
use crate::error::{Error, Result};

const DEFAULT_VALUE: i32 = 10;

/// One exercise object of the catalog file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "id")]
    pub external_id: Option<String>,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub has_weight: Option<bool>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub force: Option<String>,
    #[serde(default)]
    pub mechanic: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub primary_muscles: Option<Vec<String>>,
    #[serde(default)]
    pub secondary_muscles: Option<Vec<String>>,
}

// Missing, null and empty lists are all stored as NULL.
fn muscles_json(muscles: Option<&[String]>) -> Result<Option<String>> {
    let muscles = muscles.unwrap_or_default();
    if muscles.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(muscles)?))
}

impl CatalogEntry {
    pub fn to_new_exercise(&self) -> Result<NewExercise> {
        Ok(NewExercise {
            name: self.name.clone(),
            description: String::new(),
            instructions: String::new(),
            tip: self.tip.clone().unwrap_or_default(),
            external_id: self.external_id.clone(),
            has_weight: self.has_weight.unwrap_or(false),
            counter_unit: COUNTER_REPS.to_string(),
            default_value: DEFAULT_VALUE,
            is_daily_challenge: false,
            level: self.level.clone(),
            category: self.category.clone(),
            force: self.force.clone(),
            mechanic: self.mechanic.clone(),
            equipment: self.equipment.clone(),
            primary_muscles: muscles_json(self.primary_muscles.as_deref())?,
            secondary_muscles: muscles_json(self.secondary_muscles.as_deref())?,
        })
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(Error::validation(
            "Expected a JSON array of exercise objects.",
        ));
    }
    Ok(serde_json::from_value(value)?)
}

pub fn read_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    if !path.exists() {
        return Err(Error::not_found(format!(
            "File not found: {}",
            path.display()
        )));
    }
    parse_catalog(&fs::read_to_string(path)?)
}

#[derive(Debug, Default, PartialEq)]
pub struct ImportPlan {
    pub to_import: Vec<CatalogEntry>,
    pub skipped: Vec<String>,
}

impl ImportPlan {
    pub fn is_empty(&self) -> bool {
        self.to_import.is_empty()
    }
}

/// Splits `entries` into new exercises and names already present, compared
/// case-insensitively against the catalog and earlier entries of the file.
pub fn plan_import<I>(existing_names: I, entries: Vec<CatalogEntry>) -> ImportPlan
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = existing_names
        .into_iter()
        .map(|n| n.to_lowercase())
        .collect();
    let mut plan = ImportPlan::default();

    for entry in entries {
        if entry.name.trim().is_empty() {
            warn!("Skipping catalog entry without a name: {:?}", entry.external_id);
            continue;
        }
        if seen.insert(entry.name.to_lowercase()) {
            plan.to_import.push(entry);
        } else {
            plan.skipped.push(entry.name);
        }
    }
    plan
}

/// Inserts every planned exercise in one transaction.
pub fn apply_import(conn: &mut SqliteConnection, plan: &ImportPlan) -> Result<usize> {
    let rows = plan
        .to_import
        .iter()
        .map(CatalogEntry::to_new_exercise)
        .collect::<Result<Vec<_>>>()?;

    let inserted = conn.transaction::<_, Error, _>(|conn| insert_exercises(conn, &rows))?;
    info!("Imported {} exercises", inserted);
    Ok(inserted)
}

impl fmt::Display for ImportPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.skipped.is_empty() {
            writeln!(f, "Skipping {} existing exercise(s):", self.skipped.len())?;
            for name in &self.skipped {
                writeln!(f, "  - {name}")?;
            }
        }
        if self.to_import.is_empty() {
            return write!(f, "Nothing to import.");
        }
        write!(f, "Would import {} exercise(s):", self.to_import.len())?;
        for entry in &self.to_import {
            write!(f, "\n  + {}", entry.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::operations::{get_all_exercises, get_exercise_names};
    use crate::testing::seeded_connection;
    use pretty_assertions::assert_eq;

    const CATALOG: &str = r#"[
        {"id": "Lunge_1", "name": "Lunges", "hasWeight": true, "equipment": "dumbbell",
         "primaryMuscles": ["quadriceps"], "secondaryMuscles": ["glutes", "hamstrings"],
         "level": "beginner", "force": "push", "mechanic": "compound", "category": "strength"},
        {"id": "Face_Pull", "name": "Face Pull", "tip": "Elbows high"},
        {"id": "Bench", "name": "bench press"}
    ]"#;

    #[test]
    fn existing_names_are_skipped_case_insensitively() {
        let mut conn = seeded_connection();
        let plan = plan_import(
            get_exercise_names(&mut conn).unwrap(),
            parse_catalog(CATALOG).unwrap(),
        );

        assert_eq!(plan.skipped, vec!["bench press"]);
        assert_eq!(
            plan.to_import.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Lunges", "Face Pull"]
        );
    }

    #[test]
    fn duplicates_within_the_file_import_once() {
        let entries = parse_catalog(r#"[{"name": "Dips"}, {"name": "DIPS"}, {"name": "  "}]"#).unwrap();
        let plan = plan_import(Vec::new(), entries);
        assert_eq!(plan.to_import.len(), 1);
        assert_eq!(plan.skipped, vec!["DIPS"]);
    }

    #[test]
    fn apply_inserts_catalog_rows() {
        let mut conn = seeded_connection();
        let plan = plan_import(
            get_exercise_names(&mut conn).unwrap(),
            parse_catalog(CATALOG).unwrap(),
        );
        assert_eq!(apply_import(&mut conn, &plan).unwrap(), 2);

        let all = get_all_exercises(&mut conn).unwrap();
        assert_eq!(all.len(), 9);

        let lunges = all.iter().find(|e| e.name == "Lunges").unwrap();
        assert!(lunges.has_weight);
        assert_eq!(lunges.external_id.as_deref(), Some("Lunge_1"));
        assert_eq!(lunges.primary_muscles.as_deref(), Some(r#"["quadriceps"]"#));
        assert_eq!(
            lunges.secondary_muscles.as_deref(),
            Some(r#"["glutes","hamstrings"]"#)
        );
        assert_eq!(lunges.counter_unit, "reps");
        assert_eq!(lunges.default_value, 10);

        let face_pull = all.iter().find(|e| e.name == "Face Pull").unwrap();
        assert_eq!(face_pull.tip, "Elbows high");
        assert!(!face_pull.has_weight);
        assert_eq!(face_pull.primary_muscles, None);
    }

    #[test]
    fn null_fields_read_as_absent() {
        let entries = parse_catalog(
            r#"[{"name": "Dips", "primaryMuscles": null, "secondaryMuscles": [], "tip": null}]"#,
        )
        .unwrap();
        let row = entries[0].to_new_exercise().unwrap();

        assert_eq!(row.primary_muscles, None);
        assert_eq!(row.secondary_muscles, None);
        assert_eq!(row.tip, "");
    }

    #[test]
    fn top_level_must_be_an_array() {
        assert!(matches!(
            parse_catalog(r#"{"name": "Dips"}"#),
            Err(Error::Validation(_))
        ));
        assert!(matches!(parse_catalog("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn reads_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, CATALOG).unwrap();

        assert_eq!(read_catalog(&path).unwrap().len(), 3);
        assert!(matches!(
            read_catalog(&dir.path().join("missing.json")),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn plan_summary_lists_both_groups() {
        let plan = ImportPlan {
            to_import: vec![CatalogEntry {
                name: "Dips".into(),
                ..Default::default()
            }],
            skipped: vec!["Squat".into()],
        };
        assert_eq!(
            plan.to_string(),
            "Skipping 1 existing exercise(s):\n  - Squat\nWould import 1 exercise(s):\n  + Dips"
        );
        assert_eq!(ImportPlan::default().to_string(), "Nothing to import.");
    }
}
