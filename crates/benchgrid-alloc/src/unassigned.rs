//! Roster students missing from the grid.

use std::sync::Arc;

use crate::error::{AllocError, AllocResult};
use crate::grid::Grid;
use crate::roster::{Roster, Student};

/// Roster students not seated anywhere in `grid`, in roster order.
pub fn unassigned(roster: &Roster, grid: &Grid) -> Vec<Arc<Student>> {
    let seated = grid.seated_ids();
    roster
        .iter()
        .filter(|s| !seated.contains(s.id.as_str()))
        .cloned()
        .collect()
}

/// Students offered as overrides for the seats of one bench: everyone
/// unassigned, followed by the bench's own occupants.
pub fn seat_candidates(
    roster: &Roster,
    grid: &Grid,
    bench: usize,
) -> AllocResult<Vec<Arc<Student>>> {
    let Some(b) = grid.bench(bench) else {
        return Err(AllocError::OutOfRange {
            bench,
            seat: 0,
            benches: grid.benches().len(),
            seats_per_bench: grid.seats_per_bench() as usize,
        });
    };
    let mut out = unassigned(roster, grid);
    out.extend(b.occupants().cloned());
    Ok(out)
}
