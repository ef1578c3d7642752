//! Workout lookup and listing.

use crate::db::models::Workout;
use crate::db::operations::{get_all_workouts, get_workout_entries};
use crate::error::Result;
use crate::program::Program;
use crate::report::WorkoutListing;
use crate::resolve::resolve;

impl Program {
    pub fn get_all_workouts(&mut self) -> Result<Vec<Workout>> {
        get_all_workouts(&mut self.conn)
    }

    pub fn resolve_workout(&mut self, query: &str) -> Result<Workout> {
        let workouts = self.get_all_workouts()?;
        resolve(query, &workouts)
    }

    /// Listings for the workout matching `query`, or for every workout.
    pub fn listings(
        &mut self,
        query: Option<&str>,
        include_inactive: bool,
    ) -> Result<Vec<WorkoutListing>> {
        let workouts = match query {
            Some(query) => vec![self.resolve_workout(query)?],
            None => self.get_all_workouts()?,
        };

        workouts
            .into_iter()
            .map(|workout| {
                let entries = get_workout_entries(&mut self.conn, workout.id, include_inactive)?;
                Ok(WorkoutListing { workout, entries })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded_connection;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_every_workout_in_id_order() {
        let mut program = Program::from_connection(seeded_connection());
        let listings = program.listings(None, false).unwrap();

        let summary: Vec<(String, usize)> = listings
            .iter()
            .map(|l| (l.workout.name.clone(), l.entries.len()))
            .collect();
        assert_eq!(
            summary,
            vec![("Day A".to_string(), 5), ("Day B".to_string(), 2)]
        );
    }

    #[test]
    fn lists_a_single_resolved_workout() {
        let mut program = Program::from_connection(seeded_connection());
        let listings = program.listings(Some("b"), false).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].workout.name, "Day B");
    }

    #[test]
    fn unknown_workout_is_reported() {
        let mut program = Program::from_connection(seeded_connection());
        assert!(program.listings(Some("legs"), false).is_err());
    }
}
