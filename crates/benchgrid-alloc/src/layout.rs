//! Room configuration and the derived sequence of bench slots.

use serde::{Deserialize, Serialize};

use crate::error::{AllocError, AllocResult};
use crate::grid::{Bench, Grid};

/// A named room with a number of benches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// Signed so that a negative count can be reported instead of wrapping.
    #[serde(rename = "benches")]
    pub bench_count: i64,
}

impl Room {
    pub fn new(name: impl Into<String>, bench_count: i64) -> Self {
        Self {
            name: name.into(),
            bench_count,
        }
    }
}

/// A bench slot in layout order, before any student is seated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchSlot {
    pub room: String,
    /// 1-based, contiguous within the room.
    pub number: u32,
}

/// Ordered empty benches derived from a room list and a per-bench capacity.
#[derive(Debug, Clone)]
pub struct SeatLayout {
    slots: Vec<BenchSlot>,
    seats_per_bench: u32,
}

impl SeatLayout {
    /// Expand `rooms` into one slot per bench, in room-declaration order.
    ///
    /// Rooms with zero benches contribute nothing. Fails without producing a
    /// partial layout if `seats_per_bench` is zero or a bench count is
    /// negative.
    pub fn new(rooms: &[Room], seats_per_bench: u32) -> AllocResult<Self> {
        if seats_per_bench < 1 {
            return Err(AllocError::InvalidLayout(
                "seats per bench must be at least 1".to_string(),
            ));
        }
        if let Some(room) = rooms.iter().find(|r| r.bench_count < 0) {
            return Err(AllocError::InvalidLayout(format!(
                "room '{}' has negative bench count {}",
                room.name, room.bench_count
            )));
        }
        let too_many = rooms.iter().find(|r| r.bench_count > i64::from(u32::MAX));
        if let Some(room) = too_many {
            return Err(AllocError::InvalidLayout(format!(
                "room '{}' has too many benches ({})",
                room.name, room.bench_count
            )));
        }

        let slots = rooms
            .iter()
            .flat_map(|room| {
                (1..=room.bench_count as u32).map(move |number| BenchSlot {
                    room: room.name.clone(),
                    number,
                })
            })
            .collect();

        Ok(Self {
            slots,
            seats_per_bench,
        })
    }

    pub fn slots(&self) -> &[BenchSlot] {
        &self.slots
    }

    pub fn seats_per_bench(&self) -> u32 {
        self.seats_per_bench
    }

    pub fn bench_count(&self) -> usize {
        self.slots.len()
    }

    pub fn total_seats(&self) -> usize {
        self.slots.len() * self.seats_per_bench as usize
    }

    /// A grid with every seat of this layout empty.
    pub fn empty_grid(&self) -> Grid {
        let benches = self
            .slots
            .iter()
            .map(|slot| Bench::empty(slot.room.clone(), slot.number, self.seats_per_bench))
            .collect();
        Grid::new(benches, self.seats_per_bench)
    }
}
