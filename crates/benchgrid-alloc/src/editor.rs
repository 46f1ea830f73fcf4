//! Manual single-seat overrides on a generated grid.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AllocError, AllocResult};
use crate::grid::{Grid, Seat, SeatPosition};
use crate::roster::Student;

/// How a seat write treats other seats holding the same student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditMode {
    /// Clear any other seat holding the student, so each student sits once.
    #[default]
    Exclusive,
    /// Write the seat only. The same student may end up seated twice.
    AllowDuplicates,
}

/// Applies seat overrides to a grid in place.
pub struct GridEditor<'a> {
    grid: &'a mut Grid,
    mode: EditMode,
}

impl<'a> GridEditor<'a> {
    pub fn new(grid: &'a mut Grid) -> Self {
        Self {
            grid,
            mode: EditMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: EditMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Put `student` (or nothing) into seat `(bench, seat)`.
    ///
    /// Returns the previous occupant of that seat. On an out-of-range index
    /// the grid is left untouched.
    pub fn set_seat(
        &mut self,
        bench: usize,
        seat: usize,
        student: Option<Arc<Student>>,
    ) -> AllocResult<Seat> {
        self.check_bounds(bench, seat)?;

        if let (EditMode::Exclusive, Some(incoming)) = (self.mode, student.as_ref()) {
            let target = SeatPosition { bench, seat };
            let stale: Vec<SeatPosition> = self
                .grid
                .placements()
                .filter(|(pos, s)| *pos != target && s.id == incoming.id)
                .map(|(pos, _)| pos)
                .collect();
            for pos in stale {
                self.grid.benches_mut()[pos.bench].seats[pos.seat] = None;
                debug!(
                    student = %incoming.id,
                    bench = pos.bench,
                    seat = pos.seat,
                    "cleared previous seat"
                );
            }
        }

        let slot = &mut self.grid.benches_mut()[bench].seats[seat];
        let previous = std::mem::replace(slot, student);
        debug!(
            bench,
            seat,
            student = slot.as_ref().map(|s| s.id.as_str()).unwrap_or("-"),
            "seat overridden"
        );
        Ok(previous)
    }

    /// Empty seat `(bench, seat)`, returning whoever sat there.
    pub fn clear_seat(&mut self, bench: usize, seat: usize) -> AllocResult<Seat> {
        self.set_seat(bench, seat, None)
    }

    fn check_bounds(&self, bench: usize, seat: usize) -> AllocResult<()> {
        let in_range = self
            .grid
            .bench(bench)
            .is_some_and(|b| seat < b.seats.len());
        if in_range {
            Ok(())
        } else {
            Err(AllocError::OutOfRange {
                bench,
                seat,
                benches: self.grid.benches().len(),
                seats_per_bench: self.grid.seats_per_bench() as usize,
            })
        }
    }
}

impl Grid {
    /// Exclusive-mode seat override; see [`GridEditor::set_seat`].
    pub fn set_seat(
        &mut self,
        bench: usize,
        seat: usize,
        student: Option<Arc<Student>>,
    ) -> AllocResult<Seat> {
        GridEditor::new(self).set_seat(bench, seat, student)
    }
}
