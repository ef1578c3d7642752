use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};

use crate::db::schema;

pub const COUNTER_REPS: &str = "reps";
pub const COUNTER_TIMER: &str = "timer";

// Exercise models
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = schema::exercise)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub tip: String,
    pub external_id: Option<String>,
    pub has_weight: bool,
    pub counter_unit: String,
    pub default_value: i32,
    pub is_daily_challenge: bool,
    pub level: Option<String>,
    pub category: Option<String>,
    pub force: Option<String>,
    pub mechanic: Option<String>,
    pub equipment: Option<String>,
    pub primary_muscles: Option<String>,
    pub secondary_muscles: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = schema::exercise)]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub tip: String,
    pub external_id: Option<String>,
    pub has_weight: bool,
    pub counter_unit: String,
    pub default_value: i32,
    pub is_daily_challenge: bool,
    pub level: Option<String>,
    pub category: Option<String>,
    pub force: Option<String>,
    pub mechanic: Option<String>,
    pub equipment: Option<String>,
    pub primary_muscles: Option<String>,
    pub secondary_muscles: Option<String>,
}

// Workout models
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = schema::workout)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Workout {
    pub id: i32,
    pub name: String,
    pub description: String,
}

// Workout exercise models
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(Exercise))]
#[diesel(belongs_to(Workout))]
#[diesel(table_name = schema::workout_exercise)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkoutExercise {
    pub id: i32,
    pub workout_id: i32,
    pub exercise_id: i32,
    pub position: i32,
    pub counter_unit: String,
    pub counter_value: Option<i32>,
    pub counter_label: Option<String>,
    pub rest_seconds: i32,
    pub sets: i32,
    pub is_daily_challenge: bool,
    pub has_weight: bool,
    pub is_active: bool,
}

impl WorkoutExercise {
    pub fn programming(&self) -> Programming {
        Programming {
            counter_unit: self.counter_unit.clone(),
            counter_value: self.counter_value,
            counter_label: self.counter_label.clone(),
            rest_seconds: self.rest_seconds,
            sets: self.sets,
            is_daily_challenge: self.is_daily_challenge,
            has_weight: self.has_weight,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::workout_exercise)]
pub struct NewWorkoutExercise {
    pub workout_id: i32,
    pub exercise_id: i32,
    pub position: i32,
    pub counter_unit: String,
    pub counter_value: Option<i32>,
    pub counter_label: Option<String>,
    pub rest_seconds: i32,
    pub sets: i32,
    pub is_daily_challenge: bool,
    pub has_weight: bool,
    pub is_active: bool,
}

/// Programming attributes carried by a binding, independent of where it sits.
#[derive(Debug, Clone, PartialEq)]
pub struct Programming {
    pub counter_unit: String,
    pub counter_value: Option<i32>,
    pub counter_label: Option<String>,
    pub rest_seconds: i32,
    pub sets: i32,
    pub is_daily_challenge: bool,
    pub has_weight: bool,
}

impl Programming {
    pub fn into_new_row(self, workout_id: i32, exercise_id: i32, position: i32) -> NewWorkoutExercise {
        NewWorkoutExercise {
            workout_id,
            exercise_id,
            position,
            counter_unit: self.counter_unit,
            counter_value: self.counter_value,
            counter_label: self.counter_label,
            rest_seconds: self.rest_seconds,
            sets: self.sets,
            is_daily_challenge: self.is_daily_challenge,
            has_weight: self.has_weight,
            is_active: true,
        }
    }

    pub fn is_timed(&self) -> bool {
        self.counter_unit == COUNTER_TIMER
    }
}

/// Caller-supplied replacements for programming copied from an existing binding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgrammingOverrides {
    pub sets: Option<i32>,
    pub counter_value: Option<i32>,
    pub rest_seconds: Option<i32>,
}

impl ProgrammingOverrides {
    pub fn apply(&self, mut base: Programming) -> Programming {
        if let Some(sets) = self.sets {
            base.sets = sets;
        }
        if let Some(value) = self.counter_value {
            base.counter_value = Some(value);
        }
        if let Some(rest) = self.rest_seconds {
            base.rest_seconds = rest;
        }
        base
    }
}

// Helper struct for displaying bindings with exercise names
#[derive(Debug, Clone)]
pub struct DisplayableEntry {
    pub entry: WorkoutExercise,
    pub exercise_name: String,
}

impl DisplayableEntry {
    pub fn new(entry: WorkoutExercise, exercise_name: String) -> Self {
        Self {
            entry,
            exercise_name,
        }
    }
}
