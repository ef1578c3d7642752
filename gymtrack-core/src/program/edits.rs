//! Planned edits to a workout's exercise list.
//!
//! Each edit is resolved and validated into a plan first. The plan's `Display`
//! is the dry-run summary; applying it runs one position-manager transaction.

use std::fmt;

use crate::db::models::{
    COUNTER_REPS, COUNTER_TIMER, Exercise, Programming, ProgrammingOverrides, Workout,
    WorkoutExercise,
};
use crate::db::operations::{find_active_entry, get_active_entries, get_workout_entries};
use crate::error::{Error, Result};
use crate::positions::{self, SwapOutcome, plan};
use crate::program::Program;
use crate::report::format_counter;

const DEFAULT_SETS: i32 = 3;
const DEFAULT_REPS: i32 = 10;
const DEFAULT_SECONDS: i32 = 60;
const DEFAULT_REST: i32 = 30;

#[derive(Debug, Clone)]
pub struct SwapPlan {
    pub workout: Workout,
    pub old: Exercise,
    pub new: Exercise,
    pub position: i32,
    pub overrides: ProgrammingOverrides,
    pub programming: Programming,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    pub position: Option<i32>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub rest: Option<i32>,
    pub timed: bool,
    pub weight: bool,
}

#[derive(Debug, Clone)]
pub struct AddPlan {
    pub workout: Workout,
    pub exercise: Exercise,
    pub position: i32,
    pub shifts_others: bool,
    pub programming: Programming,
}

#[derive(Debug, Clone)]
pub struct RemovePlan {
    pub workout: Workout,
    pub exercise: Exercise,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct ReorderPlan {
    pub workout: Workout,
    pub exercise_name: String,
    pub from: i32,
    pub to: i32,
}

impl Program {
    fn active_binding(&mut self, workout: &Workout, exercise: &Exercise) -> Result<WorkoutExercise> {
        find_active_entry(&mut self.conn, workout.id, exercise.id)?.ok_or_else(|| {
            Error::not_found(format!(
                "\"{}\" is not an active exercise in \"{}\".",
                exercise.name, workout.name
            ))
        })
    }

    pub fn plan_swap(
        &mut self,
        workout: &str,
        old: &str,
        new: &str,
        overrides: ProgrammingOverrides,
    ) -> Result<SwapPlan> {
        let workout = self.resolve_workout(workout)?;
        let old = self.resolve_exercise(old)?;
        let new = self.resolve_exercise(new)?;
        let binding = self.active_binding(&workout, &old)?;

        let mut programming = overrides.apply(binding.programming());
        programming.has_weight = new.has_weight;

        Ok(SwapPlan {
            workout,
            old,
            new,
            position: binding.position,
            overrides,
            programming,
        })
    }

    pub fn apply_swap(&mut self, plan: &SwapPlan) -> Result<SwapOutcome> {
        let has_weight = plan.new.has_weight;
        positions::swap(
            &mut self.conn,
            plan.workout.id,
            plan.old.id,
            plan.new.id,
            |current| Programming {
                has_weight,
                ..plan.overrides.apply(current)
            },
        )
    }

    pub fn plan_add(&mut self, workout: &str, exercise: &str, options: AddOptions) -> Result<AddPlan> {
        let workout = self.resolve_workout(workout)?;
        let exercise = self.resolve_exercise(exercise)?;

        let slots: Vec<plan::Slot> = get_active_entries(&mut self.conn, workout.id)?
            .iter()
            .map(|e| plan::Slot {
                id: e.id,
                position: e.position,
            })
            .collect();
        let count = plan::active_count(&slots);
        let position = options.position.unwrap_or(count + 1);
        plan::validate_insert(&slots, position)?;

        let (counter_unit, default_value) = if options.timed {
            (COUNTER_TIMER, DEFAULT_SECONDS)
        } else {
            (COUNTER_REPS, DEFAULT_REPS)
        };
        let programming = Programming {
            counter_unit: counter_unit.to_string(),
            counter_value: Some(options.reps.unwrap_or(default_value)),
            counter_label: None,
            rest_seconds: options.rest.unwrap_or(DEFAULT_REST),
            sets: options.sets.unwrap_or(DEFAULT_SETS),
            is_daily_challenge: false,
            has_weight: options.weight || exercise.has_weight,
        };

        Ok(AddPlan {
            workout,
            exercise,
            position,
            shifts_others: position <= count,
            programming,
        })
    }

    pub fn apply_add(&mut self, plan: &AddPlan) -> Result<WorkoutExercise> {
        positions::insert_at(
            &mut self.conn,
            plan.workout.id,
            plan.exercise.id,
            Some(plan.position),
            plan.programming.clone(),
        )
    }

    pub fn plan_remove(&mut self, workout: &str, exercise: &str) -> Result<RemovePlan> {
        let workout = self.resolve_workout(workout)?;
        let exercise = self.resolve_exercise(exercise)?;
        let binding = self.active_binding(&workout, &exercise)?;

        Ok(RemovePlan {
            workout,
            exercise,
            position: binding.position,
        })
    }

    pub fn apply_remove(&mut self, plan: &RemovePlan) -> Result<WorkoutExercise> {
        positions::deactivate(&mut self.conn, plan.workout.id, plan.exercise.id)
    }

    pub fn plan_reorder(&mut self, workout: &str, from: i32, to: i32) -> Result<ReorderPlan> {
        let workout = self.resolve_workout(workout)?;
        let listing = get_workout_entries(&mut self.conn, workout.id, false)?;
        let slots: Vec<plan::Slot> = listing
            .iter()
            .map(|e| plan::Slot {
                id: e.entry.id,
                position: e.entry.position,
            })
            .collect();
        plan::reorder(&slots, from, to)?;

        let exercise_name = listing
            .into_iter()
            .find(|e| e.entry.position == from)
            .map(|e| e.exercise_name)
            .unwrap_or_default();

        Ok(ReorderPlan {
            workout,
            exercise_name,
            from,
            to,
        })
    }

    pub fn apply_reorder(&mut self, plan: &ReorderPlan) -> Result<Vec<WorkoutExercise>> {
        positions::move_entry(&mut self.conn, plan.workout.id, plan.from, plan.to)
    }
}

impl fmt::Display for SwapPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Swap in \"{}\":", self.workout.name)?;
        writeln!(
            f,
            "  Position {}: {} -> {}",
            self.position, self.old.name, self.new.name
        )?;
        write!(
            f,
            "  Sets: {}, Reps/Value: {}, Rest: {}s",
            self.programming.sets,
            format_counter(&self.programming.counter_unit, self.programming.counter_value),
            self.programming.rest_seconds
        )
    }
}

impl fmt::Display for AddPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.programming;
        writeln!(f, "Add to \"{}\":", self.workout.name)?;
        writeln!(f, "  Position {}: {}", self.position, self.exercise.name)?;
        write!(
            f,
            "  Sets: {}, {}: {}, Rest: {}s, Weight: {}",
            p.sets,
            if p.is_timed() { "Time" } else { "Reps" },
            format_counter(&p.counter_unit, p.counter_value),
            p.rest_seconds,
            if p.has_weight { "Y" } else { "N" }
        )?;
        if self.shifts_others {
            write!(
                f,
                "\n  (exercises at position {}+ will shift down)",
                self.position
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for RemovePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Remove from \"{}\":", self.workout.name)?;
        write!(f, "  Position {}: {}", self.position, self.exercise.name)
    }
}

impl fmt::Display for ReorderPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reorder in \"{}\":", self.workout.name)?;
        write!(
            f,
            "  Move \"{}\" from position {} to {}",
            self.exercise_name, self.from, self.to
        )
    }
}
