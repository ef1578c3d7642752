use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::db::operations::get_workout_entries;
use crate::db::run_migrations;

pub const DAY_A: i32 = 1;
pub const DAY_B: i32 = 2;

const SEED: &str = r#"
INSERT INTO exercise (id, name, hasWeight, equipment, primaryMuscles, secondaryMuscles)
VALUES
    (1, 'Bench Press', 1, 'barbell', '["chest"]', '["triceps"]'),
    (2, 'Squat', 1, 'barbell', '["quadriceps"]', '["glutes"]'),
    (3, 'Deadlift', 1, 'barbell', '["lower back"]', '["hamstrings"]'),
    (4, 'Pull-ups', 0, 'body only', '["lats"]', NULL),
    (5, 'Plank', 0, 'body only', '["abdominals"]', NULL),
    (6, 'Dumbbell Rows', 1, 'dumbbell', '["middle back"]', NULL),
    (7, 'Cable Rows', 1, 'cable', '["middle back"]', NULL);

INSERT INTO workout (id, name) VALUES (1, 'Day A'), (2, 'Day B');

INSERT INTO workoutExercise (workoutId, exerciseId, position, counterUnit, counterValue, sets, hasWeight)
VALUES
    (1, 1, 1, 'reps', 10, 3, 1),
    (1, 2, 2, 'reps', 10, 3, 1),
    (1, 3, 3, 'reps', 10, 3, 1),
    (1, 4, 4, 'reps', 10, 3, 0),
    (1, 5, 5, 'timer', 60, 3, 0),
    (2, 6, 1, 'reps', 10, 3, 1),
    (2, 5, 2, 'timer', 60, 3, 0);
"#;

/// In-memory database with two workouts: "Day A" holds five exercises,
/// "Day B" two.
pub fn seeded_connection() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").unwrap();
    conn.batch_execute("PRAGMA foreign_keys = ON").unwrap();
    run_migrations(&mut conn).unwrap();
    conn.batch_execute(SEED).unwrap();
    conn
}

pub fn active_names(conn: &mut SqliteConnection, workout_id: i32) -> Vec<(i32, String)> {
    get_workout_entries(conn, workout_id, false)
        .unwrap()
        .into_iter()
        .map(|e| (e.entry.position, e.exercise_name))
        .collect()
}
