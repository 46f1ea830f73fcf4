//! benchgrid allocation engine: class-diverse bench seating.
//!
//! This crate seats a roster of students on fixed-capacity benches spread
//! across rooms, trying to put students of different classes side by side.
//! It does no I/O beyond config/roster parsing helpers; callers supply the
//! roster and the room layout and get back a [`Grid`].
//!
//! # Components
//!
//! - **`roster`**: Students and the validated roster
//! - **`layout`**: Rooms expanded into ordered bench slots
//! - **`engine`**: Diversity-greedy fill with injectable shuffling
//! - **`editor`**: Manual seat overrides
//! - **`unassigned`**: Roster students not currently seated
//! - **`import`** / **`export`**: JSON roster rows in, plan rows/report out
//! - **`config`**: seating.toml parsing

pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod export;
pub mod grid;
pub mod import;
pub mod layout;
pub mod roster;
pub mod unassigned;

pub use config::SeatingConfig;
pub use editor::{EditMode, GridEditor};
pub use engine::{PoolOrder, RngShuffle, RosterOrder, SeededShuffle, generate, generate_seeded};
pub use error::{AllocError, AllocResult};
pub use grid::{Bench, Grid, Seat, SeatPosition};
pub use layout::{BenchSlot, Room, SeatLayout};
pub use roster::{Roster, Student};
pub use unassigned::{seat_candidates, unassigned};
