//! Position manager for a workout's exercise ordering.
//!
//! Active rows of a workout always hold positions `1..=N`. The table enforces
//! `UNIQUE(workoutId, position)` on every statement, so any batch of position
//! changes is written in two passes: each row is first parked above every
//! position in use, then written to its final slot. Retired rows are parked
//! permanently at `-id`.

pub mod plan;

use diesel::prelude::*;
use log::{debug, info};

use crate::db::models::{Programming, WorkoutExercise};
use crate::db::operations::{
    find_active_entry, get_active_entries, insert_entry, max_position_in_use, retire_entry,
    set_position,
};
use crate::error::{Error, Result};
use plan::{Reassignment, Slot};

/// Distance between the highest position in use and the parking area.
pub const PARKING_GAP: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct SwapOutcome {
    pub retired: WorkoutExercise,
    pub inserted: WorkoutExercise,
}

fn slots(entries: &[WorkoutExercise]) -> Vec<Slot> {
    entries
        .iter()
        .map(|e| Slot {
            id: e.id,
            position: e.position,
        })
        .collect()
}

fn active_slots(conn: &mut SqliteConnection, workout_id: i32) -> Result<Vec<Slot>> {
    Ok(slots(&get_active_entries(conn, workout_id)?))
}

/// Writes `moves` via the parking area so no intermediate write can collide.
fn apply_reassignments(
    conn: &mut SqliteConnection,
    workout_id: i32,
    moves: &[Reassignment],
) -> Result<()> {
    if moves.is_empty() {
        return Ok(());
    }
    let mut moves = moves.to_vec();
    moves.sort_by_key(|m| m.from);

    let offset = max_position_in_use(conn, workout_id)? + PARKING_GAP;
    debug!(
        "Parking {} rows of workout {} above {}",
        moves.len(),
        workout_id,
        offset
    );
    for m in &moves {
        set_position(conn, m.id, offset + m.from)?;
    }
    for m in &moves {
        set_position(conn, m.id, m.to)?;
    }
    Ok(())
}

fn active_binding(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
) -> Result<WorkoutExercise> {
    find_active_entry(conn, workout_id, exercise_id)?.ok_or_else(|| {
        Error::not_found(format!(
            "exercise {exercise_id} is not active in workout {workout_id}"
        ))
    })
}

fn insert_unchecked(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
    position: Option<i32>,
    programming: Programming,
) -> Result<WorkoutExercise> {
    let active = active_slots(conn, workout_id)?;
    let position = position.unwrap_or(plan::active_count(&active) + 1);
    plan::validate_insert(&active, position)?;

    apply_reassignments(conn, workout_id, &plan::make_room(&active, position))?;
    insert_entry(
        conn,
        &programming.into_new_row(workout_id, exercise_id, position),
    )
}

/// Inserts `exercise_id` at `position` (appending when `None`), shifting the
/// rows at or after it down by one.
pub fn insert_at(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
    position: Option<i32>,
    programming: Programming,
) -> Result<WorkoutExercise> {
    let inserted = conn.transaction::<_, Error, _>(|conn| {
        insert_unchecked(conn, workout_id, exercise_id, position, programming)
    })?;
    info!(
        "Inserted exercise {} into workout {} at position {}",
        exercise_id, workout_id, inserted.position
    );
    Ok(inserted)
}

/// Retires the active binding of `exercise_id` and closes the gap it leaves.
/// Returns the binding as it was before retirement.
pub fn deactivate(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
) -> Result<WorkoutExercise> {
    let retired = conn.transaction::<_, Error, _>(|conn| {
        let target = active_binding(conn, workout_id, exercise_id)?;
        retire_entry(conn, target.id)?;

        let remaining = active_slots(conn, workout_id)?;
        apply_reassignments(
            conn,
            workout_id,
            &plan::close_gap(&remaining, target.position),
        )?;
        Ok(target)
    })?;
    info!(
        "Deactivated exercise {} at position {} of workout {}",
        exercise_id, retired.position, workout_id
    );
    Ok(retired)
}

/// Replaces the active binding of `old_exercise_id` with `new_exercise_id` in
/// the same slot. `programming` receives the old row's programming and
/// returns the replacement's.
pub fn swap<F>(
    conn: &mut SqliteConnection,
    workout_id: i32,
    old_exercise_id: i32,
    new_exercise_id: i32,
    programming: F,
) -> Result<SwapOutcome>
where
    F: FnOnce(Programming) -> Programming,
{
    let outcome = conn.transaction::<_, Error, _>(|conn| {
        let retired = active_binding(conn, workout_id, old_exercise_id)?;
        retire_entry(conn, retired.id)?;

        // The vacated slot is reused directly, so nothing else moves.
        let replacement = programming(retired.programming());
        let inserted = insert_entry(
            conn,
            &replacement.into_new_row(workout_id, new_exercise_id, retired.position),
        )?;
        Ok(SwapOutcome { retired, inserted })
    })?;
    info!(
        "Swapped exercise {} for {} at position {} of workout {}",
        old_exercise_id, new_exercise_id, outcome.inserted.position, workout_id
    );
    Ok(outcome)
}

/// Moves the row at `from` to `to` and renumbers every active row.
/// Returns the new active ordering.
pub fn move_entry(
    conn: &mut SqliteConnection,
    workout_id: i32,
    from: i32,
    to: i32,
) -> Result<Vec<WorkoutExercise>> {
    let ordering = conn.transaction::<_, Error, _>(|conn| {
        let active = active_slots(conn, workout_id)?;
        let moves = plan::reorder(&active, from, to)?;
        apply_reassignments(conn, workout_id, &moves)?;
        get_active_entries(conn, workout_id)
    })?;
    info!(
        "Moved position {} to {} in workout {}",
        from, to, workout_id
    );
    Ok(ordering)
}
