use std::fmt;

use crate::db::models::{COUNTER_TIMER, DisplayableEntry, Exercise, Workout};

/// Timer counters read as `m:ss`, everything else as the bare number.
pub fn format_counter(unit: &str, value: Option<i32>) -> String {
    match value {
        None => "-".to_string(),
        Some(seconds) if unit == COUNTER_TIMER => format!("{}:{:02}", seconds / 60, seconds % 60),
        Some(value) => value.to_string(),
    }
}

pub struct WorkoutListing {
    pub workout: Workout,
    pub entries: Vec<DisplayableEntry>,
}

impl fmt::Display for WorkoutListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "  {}", self.workout.name)?;
        write!(f, "{rule}")?;

        if self.entries.is_empty() {
            return write!(f, "\n  (no exercises)");
        }

        write!(
            f,
            "\n  {:<4} {:<32} {:>4} {:>10} {:>5} {:>3}",
            "#", "Exercise", "Sets", "Reps/Time", "Rest", "Wt"
        )?;
        write!(
            f,
            "\n  {} {} {} {} {} {}",
            "─".repeat(4),
            "─".repeat(32),
            "─".repeat(4),
            "─".repeat(10),
            "─".repeat(5),
            "─".repeat(3)
        )?;
        for DisplayableEntry {
            entry,
            exercise_name,
        } in &self.entries
        {
            let name = if entry.is_active {
                exercise_name.clone()
            } else {
                format!("{exercise_name} [inactive]")
            };
            let counter = entry
                .counter_label
                .as_deref()
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format_counter(&entry.counter_unit, entry.counter_value));
            let weight = if entry.has_weight { "Y" } else { "" };
            write!(
                f,
                "\n  {:<4} {:<32} {:>4} {:>10} {:>4}s {:>3}",
                entry.position, name, entry.sets, counter, entry.rest_seconds, weight
            )?;
        }
        Ok(())
    }
}

pub struct ExerciseTable(pub Vec<Exercise>);

impl fmt::Display for ExerciseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No exercises found.");
        }

        writeln!(
            f,
            "{:>4}  {:<35} {:<15} {:<25} {:<12}",
            "ID", "Name", "Equipment", "Muscles", "Level"
        )?;
        writeln!(
            f,
            "{}  {} {} {} {}",
            "─".repeat(4),
            "─".repeat(35),
            "─".repeat(15),
            "─".repeat(25),
            "─".repeat(12)
        )?;
        for exercise in &self.0 {
            writeln!(
                f,
                "{:>4}  {:<35} {:<15} {:<25} {:<12}",
                exercise.id,
                exercise.name,
                exercise.equipment.as_deref().unwrap_or(""),
                exercise.primary_muscles.as_deref().unwrap_or(""),
                exercise.level.as_deref().unwrap_or("")
            )?;
        }
        write!(f, "\n{} exercise(s) found.", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::operations::{get_workout, get_workout_entries, search_exercises, ExerciseFilter};
    use crate::positions::deactivate;
    use diesel::connection::SimpleConnection;
    use crate::testing::{DAY_B, seeded_connection};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("timer", Some(60), "1:00")]
    #[case("timer", Some(95), "1:35")]
    #[case("timer", Some(5), "0:05")]
    #[case("reps", Some(12), "12")]
    #[case("reps", None, "-")]
    fn counters(#[case] unit: &str, #[case] value: Option<i32>, #[case] expected: &str) {
        assert_eq!(format_counter(unit, value), expected);
    }

    #[test]
    fn listing_marks_inactive_rows() {
        let mut conn = seeded_connection();
        deactivate(&mut conn, DAY_B, 6).unwrap();

        let listing = WorkoutListing {
            workout: get_workout(&mut conn, DAY_B).unwrap(),
            entries: get_workout_entries(&mut conn, DAY_B, true).unwrap(),
        };
        let text = listing.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "  Day B");
        assert!(lines[5].contains("Dumbbell Rows [inactive]"));
        assert!(lines[6].starts_with("  1    Plank"));
        assert!(lines[6].contains("1:00"));
    }

    #[test]
    fn blank_label_keeps_the_counter() {
        let mut conn = seeded_connection();
        conn.batch_execute(
            "UPDATE workoutExercise SET counterLabel = '' WHERE workoutId = 2 AND exerciseId = 5;
             UPDATE workoutExercise SET counterLabel = 'AMRAP' WHERE workoutId = 2 AND exerciseId = 6;",
        )
        .unwrap();

        let listing = WorkoutListing {
            workout: get_workout(&mut conn, DAY_B).unwrap(),
            entries: get_workout_entries(&mut conn, DAY_B, false).unwrap(),
        };
        let text = listing.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[5].contains("AMRAP"));
        assert!(lines[6].contains("1:00"));
    }

    #[test]
    fn empty_listing() {
        let listing = WorkoutListing {
            workout: Workout {
                id: 9,
                name: "Rest".into(),
                description: String::new(),
            },
            entries: vec![],
        };
        assert!(listing.to_string().ends_with("\n  (no exercises)"));
    }

    #[test]
    fn exercise_table_counts_rows() {
        let mut conn = seeded_connection();
        let filter = ExerciseFilter {
            muscle: Some("BACK".into()),
            ..Default::default()
        };
        let table = ExerciseTable(search_exercises(&mut conn, &filter).unwrap()).to_string();

        assert!(table.ends_with("3 exercise(s) found."));
        assert!(ExerciseTable(vec![]).to_string() == "No exercises found.");
    }
}
