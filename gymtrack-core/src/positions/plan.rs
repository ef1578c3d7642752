//! Pure renumbering plans over a workout's active ordering.
//!
//! Nothing here touches the database: each function takes the active rows
//! (ascending by position) and returns which row has to go where.

use crate::error::{Error, Result};

/// An active row's identity and current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub id: i32,
    pub position: i32,
}

/// A single row changing position from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reassignment {
    pub id: i32,
    pub from: i32,
    pub to: i32,
}

/// Number of active rows as a position value.
pub fn active_count(active: &[Slot]) -> i32 {
    i32::try_from(active.len()).unwrap_or(i32::MAX)
}

/// `position` must lie in `1..=N+1`.
pub fn validate_insert(active: &[Slot], position: i32) -> Result<()> {
    let last = active_count(active) + 1;
    if !(1..=last).contains(&position) {
        return Err(Error::validation(format!(
            "Position must be between 1 and {last}."
        )));
    }
    Ok(())
}

/// Rows at or after `at` move down one slot to make room for an insert.
pub fn make_room(active: &[Slot], at: i32) -> Vec<Reassignment> {
    active
        .iter()
        .filter(|slot| slot.position >= at)
        .map(|slot| Reassignment {
            id: slot.id,
            from: slot.position,
            to: slot.position + 1,
        })
        .collect()
}

/// Rows after a vacated `at` move up one slot.
pub fn close_gap(active: &[Slot], at: i32) -> Vec<Reassignment> {
    active
        .iter()
        .filter(|slot| slot.position > at)
        .map(|slot| Reassignment {
            id: slot.id,
            from: slot.position,
            to: slot.position - 1,
        })
        .collect()
}

/// Moves the row at `from` to `to` and renumbers the whole sequence `1..=N`.
///
/// Every active row gets a reassignment, including those whose position does
/// not change, so the result is always dense regardless of the input.
pub fn reorder(active: &[Slot], from: i32, to: i32) -> Result<Vec<Reassignment>> {
    let Some(from_idx) = active.iter().position(|slot| slot.position == from) else {
        return Err(Error::not_found(format!(
            "No active exercise at position {from}."
        )));
    };
    let count = active_count(active);
    if !(1..=count).contains(&to) {
        return Err(Error::validation(format!(
            "Target position must be between 1 and {count}."
        )));
    }
    if from == to {
        return Err(Error::validation(
            "Source and target positions are the same.",
        ));
    }

    let mut ordered = active.to_vec();
    let moving = ordered.remove(from_idx);
    ordered.insert((to - 1) as usize, moving);

    Ok(ordered
        .into_iter()
        .zip(1..)
        .map(|(slot, position)| Reassignment {
            id: slot.id,
            from: slot.position,
            to: position,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    // ids 10..=50 sit at positions 1..=5
    fn five() -> Vec<Slot> {
        (1..=5)
            .map(|position| Slot {
                id: position * 10,
                position,
            })
            .collect()
    }

    fn final_order(plan: &[Reassignment]) -> Vec<i32> {
        let mut sorted = plan.to_vec();
        sorted.sort_by_key(|r| r.to);
        sorted.into_iter().map(|r| r.id).collect()
    }

    fn apply(active: &[Slot], plan: &[Reassignment]) -> Vec<Slot> {
        let mut next: Vec<Slot> = active
            .iter()
            .map(|slot| {
                let to = plan
                    .iter()
                    .find(|r| r.id == slot.id)
                    .map_or(slot.position, |r| r.to);
                Slot {
                    id: slot.id,
                    position: to,
                }
            })
            .collect();
        next.sort_by_key(|slot| slot.position);
        next
    }

    #[test]
    fn counts_active_rows() {
        assert_eq!(active_count(&five()), 5);
        assert_eq!(active_count(&[]), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(-1)]
    fn insert_outside_range_is_rejected(#[case] position: i32) {
        assert!(matches!(
            validate_insert(&five(), position),
            Err(Error::Validation(_))
        ));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(6)]
    fn insert_inside_range_is_accepted(#[case] position: i32) {
        assert!(validate_insert(&five(), position).is_ok());
    }

    #[test]
    fn insert_into_empty_workout_only_allows_first_slot() {
        assert!(validate_insert(&[], 1).is_ok());
        assert!(validate_insert(&[], 2).is_err());
    }

    #[test]
    fn make_room_shifts_tail_only() {
        assert_eq!(
            make_room(&five(), 4),
            vec![
                Reassignment { id: 40, from: 4, to: 5 },
                Reassignment { id: 50, from: 5, to: 6 },
            ]
        );
        assert!(make_room(&five(), 6).is_empty());
    }

    #[test]
    fn close_gap_shifts_rows_after_the_hole() {
        let remaining: Vec<Slot> = five().into_iter().filter(|s| s.position != 2).collect();
        assert_eq!(
            close_gap(&remaining, 2),
            vec![
                Reassignment { id: 30, from: 3, to: 2 },
                Reassignment { id: 40, from: 4, to: 3 },
                Reassignment { id: 50, from: 5, to: 4 },
            ]
        );
    }

    #[rstest]
    #[case(5, 1, vec![50, 10, 20, 30, 40])]
    #[case(1, 5, vec![20, 30, 40, 50, 10])]
    #[case(3, 2, vec![10, 30, 20, 40, 50])]
    #[case(2, 4, vec![10, 30, 40, 20, 50])]
    fn reorder_moves_one_row(#[case] from: i32, #[case] to: i32, #[case] expected: Vec<i32>) {
        let plan = reorder(&five(), from, to).unwrap();
        assert_eq!(plan.len(), 5);
        assert_eq!(final_order(&plan), expected);
    }

    #[test]
    fn reorder_round_trip_restores_order() {
        let start = five();
        let moved = apply(&start, &reorder(&start, 2, 5).unwrap());
        let back = apply(&moved, &reorder(&moved, 5, 2).unwrap());
        assert_eq!(back, start);
    }

    #[test]
    fn consecutive_reorders_stay_dense() {
        let once = apply(&five(), &reorder(&five(), 5, 1).unwrap());
        let twice = apply(&once, &reorder(&once, 5, 1).unwrap());

        assert_eq!(
            twice.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![40, 50, 10, 20, 30]
        );
        assert_eq!(
            twice.iter().map(|s| s.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[rstest]
    #[case(9, 1)]
    #[case(2, 0)]
    #[case(2, 6)]
    #[case(3, 3)]
    fn reorder_rejects_bad_positions(#[case] from: i32, #[case] to: i32) {
        assert!(reorder(&five(), from, to).is_err());
    }

    #[test]
    fn reorder_reports_missing_source_first() {
        assert!(matches!(reorder(&five(), 9, 9), Err(Error::NotFound(_))));
        assert!(matches!(reorder(&[], 1, 1), Err(Error::NotFound(_))));
    }
}
