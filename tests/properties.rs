//! Layout invariants checked over generated snapshots.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use u_timetable::axis::TimeAxis;
use u_timetable::color::HashColorAssigner;
use u_timetable::compositor::{compose, CellPlan, Composition};
use u_timetable::models::{CourseEntry, Day};

const NAMES: [&str; 6] = ["Algorithms", "Calculus", "Databases", "Ethics", "French", "Go"];

fn entry_strategy() -> impl Strategy<Value = CourseEntry> {
    (0usize..NAMES.len(), 0usize..Day::COUNT, 0usize..24)
        .prop_flat_map(|(name, day, start)| (Just(name), Just(day), Just(start), start + 1..=24))
        .prop_map(|(name, day, start, end)| {
            CourseEntry::new(
                NAMES[name],
                Day::ALL[day],
                start,
                end,
                &HashColorAssigner,
            )
        })
}

fn snapshot_strategy() -> impl Strategy<Value = Vec<CourseEntry>> {
    prop::collection::vec(entry_strategy(), 0..12)
}

fn compose_std(entries: &[CourseEntry]) -> Composition {
    compose(entries, &TimeAxis::standard(), &HashColorAssigner)
}

fn assert_same_up_to_conflict_order(a: &Composition, b: &Composition) {
    assert_eq!(a.conflicts, b.conflicts);
    assert_eq!(a.layout.canonical(), b.layout.canonical());
    assert_eq!(a.legend, b.legend);
}

proptest! {
    #[test]
    fn prop_order_independence(
        (original, shuffled) in snapshot_strategy()
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = compose_std(&original);
        let b = compose_std(&shuffled);
        prop_assert_eq!(&a.conflicts, &b.conflicts);
        prop_assert_eq!(a.layout.canonical(), b.layout.canonical());
        prop_assert_eq!(&a.legend, &b.legend);
    }

    #[test]
    fn prop_coverage_conservation(mut entries in snapshot_strategy()) {
        entries.sort();
        entries.dedup();
        let c = compose_std(&entries);
        for e in &entries {
            prop_assert_eq!(c.occupancy.cells_containing(e), e.duration_slots());
        }
        let total: usize = entries.iter().map(CourseEntry::duration_slots).sum();
        prop_assert_eq!(c.conflicts.total(), total);
    }

    #[test]
    fn prop_conflict_correctness(entries in snapshot_strategy()) {
        let c = compose_std(&entries);
        for (day, slot, plan) in c.layout.grid().iter() {
            let covering: Vec<CourseEntry> = entries
                .iter()
                .filter(|e| e.covers(day, slot))
                .cloned()
                .collect();
            prop_assert_eq!(c.conflict_count(day, slot), covering.len());
            prop_assert_eq!(c.occupancy(day, slot), covering.as_slice());
            prop_assert_eq!(plan.is_conflict(), covering.len() >= 2);
            if let CellPlan::Conflict { entries: listed } = plan {
                prop_assert_eq!(listed, &covering);
            }
        }
    }

    #[test]
    fn prop_span_integrity(entries in snapshot_strategy()) {
        let c = compose_std(&entries);

        // Entries that overlap nothing render as one full-length span.
        for (i, e) in entries.iter().enumerate() {
            let isolated = entries
                .iter()
                .enumerate()
                .all(|(j, other)| i == j || !e.overlaps(other));
            if !isolated {
                continue;
            }
            match c.plan(e.day, e.start_slot) {
                Some(CellPlan::SingleSpan { entry, span_len, .. }) => {
                    prop_assert_eq!(entry, e);
                    prop_assert_eq!(*span_len, e.duration_slots());
                }
                other => prop_assert!(false, "expected span at start, got {:?}", other),
            }
            for slot in e.start_slot + 1..e.end_slot {
                prop_assert_eq!(c.plan(e.day, slot), Some(&CellPlan::Continuation));
            }
        }

        // Every continuation sits under an open span, and spans cover exactly
        // their length.
        for day in Day::ALL {
            let mut remaining = 0usize;
            for plan in c.layout.column(day) {
                match plan {
                    CellPlan::Continuation => {
                        prop_assert!(remaining > 0, "orphan continuation on {}", day);
                        remaining -= 1;
                    }
                    other => {
                        prop_assert_eq!(remaining, 0, "span cut short on {}", day);
                        remaining = other.row_span().saturating_sub(1);
                    }
                }
            }
            prop_assert_eq!(remaining, 0, "span runs past the axis on {}", day);
        }
    }

    #[test]
    fn prop_idempotent(entries in snapshot_strategy()) {
        prop_assert_eq!(compose_std(&entries), compose_std(&entries));
    }
}

#[test]
fn test_seeded_permutations_agree() {
    let colors = HashColorAssigner;
    let entries: Vec<CourseEntry> = vec![
        CourseEntry::new("Algorithms", Day::Mon, 2, 6, &colors),
        CourseEntry::new("Calculus", Day::Mon, 4, 8, &colors),
        CourseEntry::new("Databases", Day::Mon, 5, 7, &colors),
        CourseEntry::new("Ethics", Day::Tue, 0, 24, &colors),
        CourseEntry::new("French", Day::Tue, 10, 12, &colors),
        CourseEntry::new("Go", Day::Sun, 23, 24, &colors),
    ];
    let baseline = compose_std(&entries);

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut shuffled = entries.clone();
        shuffled.shuffle(&mut rng);
        assert_same_up_to_conflict_order(&baseline, &compose_std(&shuffled));
    }
}
