//! Allocation engine: diversity-greedy bench filling.
//!
//! Given a roster and a seat layout, the engine:
//! 1. Permutes the roster with an injectable [`PoolOrder`]
//! 2. Truncates the pool to the layout's seat capacity
//! 3. Fills benches in layout order, seat by seat, taking the first pool
//!    member whose class is not yet on the bench, else the first member

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::grid::{Grid, Seat};
use crate::layout::SeatLayout;
use crate::roster::{Roster, Student};

/// Source of the pool permutation applied before filling.
pub trait PoolOrder {
    /// Reorder the pool in place.
    fn arrange(&mut self, pool: &mut [Arc<Student>]);
}

/// Keeps roster order. Useful for reproducing a plan by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterOrder;

impl PoolOrder for RosterOrder {
    fn arrange(&mut self, _pool: &mut [Arc<Student>]) {}
}

/// Uniform shuffle driven by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngShuffle<R> {
    rng: R,
}

/// Shuffle backed by [`StdRng`], seeded explicitly or from entropy.
pub type SeededShuffle = RngShuffle<StdRng>;

impl<R: Rng> RngShuffle<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffle<StdRng> {
    /// Deterministic shuffle: the same seed always yields the same order.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PoolOrder for RngShuffle<R> {
    fn arrange(&mut self, pool: &mut [Arc<Student>]) {
        pool.shuffle(&mut self.rng);
    }
}

/// A pool member with its class label normalized once up front.
struct PoolEntry {
    class_key: String,
    student: Arc<Student>,
}

/// Seat the roster across the layout.
///
/// Students beyond the layout's capacity (after permutation) are left out
/// of the grid; seats beyond the roster size stay empty. Neither is an
/// error.
pub fn generate<O>(roster: &Roster, layout: &SeatLayout, order: &mut O) -> Grid
where
    O: PoolOrder + ?Sized,
{
    let capacity = layout.total_seats();

    let mut shuffled: Vec<Arc<Student>> = roster.students().to_vec();
    order.arrange(&mut shuffled);

    let excluded = shuffled.len().saturating_sub(capacity);
    if excluded > 0 {
        warn!(
            roster = roster.len(),
            capacity,
            excluded,
            "roster exceeds seat capacity; excluding students from this plan"
        );
        shuffled.truncate(capacity);
    }

    let mut pool: Vec<PoolEntry> = shuffled
        .into_iter()
        .map(|student| PoolEntry {
            class_key: student.class_key(),
            student,
        })
        .collect();

    let mut grid = layout.empty_grid();
    for bench in grid.benches_mut() {
        let mut used_classes: HashSet<String> = HashSet::new();
        for seat in bench.seats.iter_mut() {
            *seat = take_next(&mut pool, &mut used_classes);
        }
        debug!(
            room = %bench.room,
            bench = bench.number,
            classes = used_classes.len(),
            "filled bench"
        );
    }

    let seated = grid.occupied_seats();
    info!(
        seated,
        excluded,
        empty_seats = capacity - seated,
        benches = layout.bench_count(),
        "generated seating plan"
    );

    grid
}

/// [`generate`] with a [`SeededShuffle`] built from `seed`.
pub fn generate_seeded(roster: &Roster, layout: &SeatLayout, seed: u64) -> Grid {
    generate(roster, layout, &mut SeededShuffle::seeded(seed))
}

/// Remove and return the first pool member whose class is unused on the
/// current bench, falling back to the pool head.
fn take_next(pool: &mut Vec<PoolEntry>, used_classes: &mut HashSet<String>) -> Seat {
    if pool.is_empty() {
        return None;
    }
    let idx = pool
        .iter()
        .position(|e| !used_classes.contains(&e.class_key))
        .unwrap_or(0);
    let entry = pool.remove(idx);
    used_classes.insert(entry.class_key);
    Some(entry.student)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Room;

    fn roster(spec: &[(&str, &str)]) -> Roster {
        Roster::new(spec.iter().map(|(id, class)| Student::new(*id, *id, *class))).unwrap()
    }

    fn ids(grid: &Grid, bench: usize) -> Vec<Option<&str>> {
        grid.benches()[bench]
            .seats
            .iter()
            .map(|s| s.as_ref().map(|s| s.id.as_str()))
            .collect()
    }

    fn layout(benches: i64, seats: u32) -> SeatLayout {
        SeatLayout::new(&[Room::new("Room-1", benches)], seats).unwrap()
    }

    #[test]
    fn mixes_classes_per_bench() {
        let r = roster(&[("s1", "A"), ("s2", "A"), ("s3", "B"), ("s4", "B")]);
        let grid = generate(&r, &layout(2, 2), &mut RosterOrder);

        assert_eq!(ids(&grid, 0), vec![Some("s1"), Some("s3")]);
        assert_eq!(ids(&grid, 1), vec![Some("s2"), Some("s4")]);
    }

    #[test]
    fn class_comparison_ignores_case() {
        let r = roster(&[("s1", "Blue"), ("s2", "BLUE"), ("s3", "red")]);
        let grid = generate(&r, &layout(1, 3), &mut RosterOrder);

        assert_eq!(ids(&grid, 0), vec![Some("s1"), Some("s3"), Some("s2")]);
    }

    #[test]
    fn empty_roster_leaves_all_seats_empty() {
        let r = Roster::default();
        let grid = generate(&r, &layout(3, 2), &mut RosterOrder);

        assert_eq!(grid.total_seats(), 6);
        assert_eq!(grid.occupied_seats(), 0);
    }

    #[test]
    fn zero_capacity_excludes_everyone() {
        let r = roster(&[("s1", "A"), ("s2", "B")]);
        let grid = generate(&r, &layout(0, 2), &mut RosterOrder);

        assert!(grid.benches().is_empty());
        assert_eq!(grid.occupied_seats(), 0);
    }

    #[test]
    fn truncates_before_filling() {
        // Only s1 and s2 fit; s3 (class B) must not be pulled forward.
        let r = roster(&[("s1", "A"), ("s2", "A"), ("s3", "B")]);
        let grid = generate(&r, &layout(1, 2), &mut RosterOrder);

        assert_eq!(ids(&grid, 0), vec![Some("s1"), Some("s2")]);
    }

    #[test]
    fn same_seed_same_grid() {
        let r = roster(&[
            ("s1", "A"),
            ("s2", "B"),
            ("s3", "C"),
            ("s4", "A"),
            ("s5", "B"),
            ("s6", "C"),
            ("s7", "D"),
        ]);
        let l = layout(3, 2);

        assert_eq!(generate_seeded(&r, &l, 7), generate_seeded(&r, &l, 7));
    }

    #[test]
    fn accepts_caller_supplied_rng() {
        let r = roster(&[("s1", "A"), ("s2", "B"), ("s3", "C")]);
        let l = layout(1, 3);
        let mut order = RngShuffle::new(StdRng::seed_from_u64(99));
        let grid = generate(&r, &l, &mut order);

        assert_eq!(grid, generate_seeded(&r, &l, 99));
        assert_eq!(grid.occupied_seats(), 3);
    }

    #[test]
    fn works_through_trait_object() {
        let r = roster(&[("s1", "A")]);
        let mut order: Box<dyn PoolOrder> = Box::new(RosterOrder);
        let grid = generate(&r, &layout(1, 1), order.as_mut());

        assert_eq!(ids(&grid, 0), vec![Some("s1")]);
    }
}
