use diesel::prelude::*;

use crate::{
    db::models::{
        DisplayableEntry, Exercise, NewExercise, NewWorkoutExercise, Workout, WorkoutExercise,
    },
    db::schema::{exercise, workout, workout_exercise},
    error::Result,
};

// Workouts
pub fn get_all_workouts(conn: &mut SqliteConnection) -> Result<Vec<Workout>> {
    workout::table
        .order(workout::id)
        .select(Workout::as_select())
        .load(conn)
        .map_err(Into::into)
}

pub fn get_workout(conn: &mut SqliteConnection, workout_id: i32) -> Result<Workout> {
    workout::table
        .find(workout_id)
        .select(Workout::as_select())
        .first(conn)
        .map_err(Into::into)
}

// Exercises
pub fn get_all_exercises(conn: &mut SqliteConnection) -> Result<Vec<Exercise>> {
    exercise::table
        .order(exercise::id)
        .select(Exercise::as_select())
        .load(conn)
        .map_err(Into::into)
}

pub fn get_exercise_names(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    exercise::table
        .select(exercise::name)
        .load(conn)
        .map_err(Into::into)
}

/// Catalog filter; every field is a case-insensitive substring.
#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    pub name: Option<String>,
    pub muscle: Option<String>,
    pub equipment: Option<String>,
}

fn contains_pattern(needle: &str) -> String {
    format!("%{}%", needle.to_lowercase())
}

// SQLite's LIKE is case-insensitive for ASCII, which covers the catalog.
pub fn search_exercises(
    conn: &mut SqliteConnection,
    filter: &ExerciseFilter,
) -> Result<Vec<Exercise>> {
    let mut query = exercise::table.into_boxed();

    if let Some(name) = &filter.name {
        query = query.filter(exercise::name.like(contains_pattern(name)));
    }
    if let Some(muscle) = &filter.muscle {
        let pattern = contains_pattern(muscle);
        query = query.filter(
            exercise::primary_muscles
                .like(pattern.clone())
                .or(exercise::secondary_muscles.like(pattern)),
        );
    }
    if let Some(equipment) = &filter.equipment {
        query = query.filter(exercise::equipment.like(contains_pattern(equipment)));
    }

    query
        .order(exercise::name)
        .select(Exercise::as_select())
        .load(conn)
        .map_err(Into::into)
}

pub fn insert_exercises(conn: &mut SqliteConnection, new: &[NewExercise]) -> Result<usize> {
    let mut inserted = 0;
    for row in new {
        inserted += diesel::insert_into(exercise::table)
            .values(row)
            .execute(conn)?;
    }
    Ok(inserted)
}

// Workout exercises
pub fn get_workout_entries(
    conn: &mut SqliteConnection,
    workout_id: i32,
    include_inactive: bool,
) -> Result<Vec<DisplayableEntry>> {
    let mut query = workout_exercise::table
        .inner_join(exercise::table)
        .filter(workout_exercise::workout_id.eq(workout_id))
        .into_boxed();
    if !include_inactive {
        query = query.filter(workout_exercise::is_active.eq(true));
    }

    let rows = query
        .order(workout_exercise::position)
        .select((WorkoutExercise::as_select(), exercise::name))
        .load::<(WorkoutExercise, String)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(entry, name)| DisplayableEntry::new(entry, name))
        .collect())
}

pub fn get_active_entries(
    conn: &mut SqliteConnection,
    workout_id: i32,
) -> Result<Vec<WorkoutExercise>> {
    workout_exercise::table
        .filter(workout_exercise::workout_id.eq(workout_id))
        .filter(workout_exercise::is_active.eq(true))
        .order(workout_exercise::position)
        .select(WorkoutExercise::as_select())
        .load(conn)
        .map_err(Into::into)
}

pub fn find_active_entry(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
) -> Result<Option<WorkoutExercise>> {
    workout_exercise::table
        .filter(workout_exercise::workout_id.eq(workout_id))
        .filter(workout_exercise::exercise_id.eq(exercise_id))
        .filter(workout_exercise::is_active.eq(true))
        .select(WorkoutExercise::as_select())
        .first(conn)
        .optional()
        .map_err(Into::into)
}

pub fn get_entry(conn: &mut SqliteConnection, entry_id: i32) -> Result<WorkoutExercise> {
    workout_exercise::table
        .find(entry_id)
        .select(WorkoutExercise::as_select())
        .first(conn)
        .map_err(Into::into)
}

/// Largest position held by any row of the workout, active or not; 0 when empty.
pub fn max_position_in_use(conn: &mut SqliteConnection, workout_id: i32) -> Result<i32> {
    let max: Option<i32> = workout_exercise::table
        .filter(workout_exercise::workout_id.eq(workout_id))
        .select(diesel::dsl::max(workout_exercise::position))
        .first(conn)?;
    Ok(max.unwrap_or(0).max(0))
}

pub fn set_position(conn: &mut SqliteConnection, entry_id: i32, position: i32) -> Result<usize> {
    diesel::update(workout_exercise::table.find(entry_id))
        .set(workout_exercise::position.eq(position))
        .execute(conn)
        .map_err(Into::into)
}

/// Clears the active flag and moves the row to `-id`, a slot no live row can use.
pub fn retire_entry(conn: &mut SqliteConnection, entry_id: i32) -> Result<usize> {
    diesel::update(workout_exercise::table.find(entry_id))
        .set((
            workout_exercise::is_active.eq(false),
            workout_exercise::position.eq(-entry_id),
        ))
        .execute(conn)
        .map_err(Into::into)
}

pub fn insert_entry(
    conn: &mut SqliteConnection,
    new: &NewWorkoutExercise,
) -> Result<WorkoutExercise> {
    diesel::insert_into(workout_exercise::table)
        .values(new)
        .returning(WorkoutExercise::as_returning())
        .get_result(conn)
        .map_err(Into::into)
}
