//! The seat assignment produced by one generation call.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;

use crate::roster::Student;

/// A seat: empty, or a shared reference to one student.
pub type Seat = Option<Arc<Student>>;

/// Bench/seat coordinates inside a [`Grid`], both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeatPosition {
    pub bench: usize,
    pub seat: usize,
}

/// One bench and its ordered seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bench {
    pub room: String,
    /// 1-based bench number within the room.
    pub number: u32,
    pub seats: Vec<Seat>,
}

impl Bench {
    pub fn empty(room: String, number: u32, seats_per_bench: u32) -> Self {
        Self {
            room,
            number,
            seats: vec![None; seats_per_bench as usize],
        }
    }

    pub fn occupants(&self) -> impl Iterator<Item = &Arc<Student>> {
        self.seats.iter().flatten()
    }

    /// Number of distinct (case-insensitive) classes seated on this bench.
    pub fn distinct_classes(&self) -> usize {
        self.occupants()
            .map(|s| s.class_key())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Full ordered sequence of benches plus the capacity used to build them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    benches: Vec<Bench>,
    seats_per_bench: u32,
}

impl Grid {
    pub(crate) fn new(benches: Vec<Bench>, seats_per_bench: u32) -> Self {
        Self {
            benches,
            seats_per_bench,
        }
    }

    pub fn benches(&self) -> &[Bench] {
        &self.benches
    }

    pub(crate) fn benches_mut(&mut self) -> &mut [Bench] {
        &mut self.benches
    }

    pub fn bench(&self, index: usize) -> Option<&Bench> {
        self.benches.get(index)
    }

    /// Occupant of a seat. `None` for empty or out-of-range seats.
    pub fn seat(&self, bench: usize, seat: usize) -> Option<&Arc<Student>> {
        self.benches.get(bench)?.seats.get(seat)?.as_ref()
    }

    pub fn seats_per_bench(&self) -> u32 {
        self.seats_per_bench
    }

    pub fn total_seats(&self) -> usize {
        self.benches.iter().map(|b| b.seats.len()).sum()
    }

    pub fn occupied_seats(&self) -> usize {
        self.benches.iter().map(|b| b.occupants().count()).sum()
    }

    /// Iterate over every occupied seat with its position.
    pub fn placements(&self) -> impl Iterator<Item = (SeatPosition, &Arc<Student>)> {
        self.benches.iter().enumerate().flat_map(|(b, bench)| {
            bench.seats.iter().enumerate().filter_map(move |(s, seat)| {
                seat.as_ref()
                    .map(|student| (SeatPosition { bench: b, seat: s }, student))
            })
        })
    }

    /// First seat holding the given student id.
    pub fn position_of(&self, id: &str) -> Option<SeatPosition> {
        self.placements()
            .find(|(_, student)| student.id == id)
            .map(|(pos, _)| pos)
    }

    /// Ids of every student currently seated.
    pub fn seated_ids(&self) -> HashSet<&str> {
        self.placements().map(|(_, s)| s.id.as_str()).collect()
    }

    /// Ids seated more than once, in order of first appearance.
    ///
    /// Always empty after generation or exclusive edits; only the
    /// duplicate-permitting edit mode can produce entries.
    pub fn duplicate_placements(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for (_, student) in self.placements() {
            let count = counts.entry(student.id.as_str()).or_insert(0);
            if *count == 1 {
                order.push(student.id.clone());
            }
            *count += 1;
        }
        order
    }
}
