//! Exercise catalog browsing and import.

use std::path::Path;

use crate::db::models::Exercise;
use crate::db::operations::{ExerciseFilter, get_all_exercises, get_exercise_names, search_exercises};
use crate::error::Result;
use crate::import::{ImportPlan, apply_import, plan_import, read_catalog};
use crate::program::Program;
use crate::report::ExerciseTable;
use crate::resolve::resolve;

impl Program {
    pub fn get_all_exercises(&mut self) -> Result<Vec<Exercise>> {
        get_all_exercises(&mut self.conn)
    }

    pub fn resolve_exercise(&mut self, query: &str) -> Result<Exercise> {
        let exercises = self.get_all_exercises()?;
        resolve(query, &exercises)
    }

    pub fn search_exercises(&mut self, filter: &ExerciseFilter) -> Result<ExerciseTable> {
        Ok(ExerciseTable(search_exercises(&mut self.conn, filter)?))
    }

    pub fn plan_import(&mut self, catalog: &Path) -> Result<ImportPlan> {
        let entries = read_catalog(catalog)?;
        let existing = get_exercise_names(&mut self.conn)?;
        Ok(plan_import(existing, entries))
    }

    pub fn apply_import(&mut self, plan: &ImportPlan) -> Result<usize> {
        apply_import(&mut self.conn, plan)
    }
}
