//! Flattened plan rows and a human-readable plan report.

use std::sync::Arc;

use serde::Serialize;

use crate::grid::Grid;
use crate::roster::Student;

/// One seat of an export row. Empty seats carry empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSeat {
    pub id: String,
    pub name: String,
    pub class: String,
}

/// One bench, ready for tabular output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub room: String,
    pub bench: u32,
    pub seats: Vec<ExportSeat>,
}

/// Flatten `grid` into one row per bench.
pub fn rows(grid: &Grid) -> Vec<ExportRow> {
    grid.benches()
        .iter()
        .map(|b| ExportRow {
            room: b.room.clone(),
            bench: b.number,
            seats: b
                .seats
                .iter()
                .map(|seat| match seat {
                    Some(s) => ExportSeat {
                        id: s.id.clone(),
                        name: s.name.clone(),
                        class: s.class.clone(),
                    },
                    None => ExportSeat {
                        id: String::new(),
                        name: String::new(),
                        class: String::new(),
                    },
                })
                .collect(),
        })
        .collect()
}

pub fn format_plan(grid: &Grid, unassigned: &[Arc<Student>]) -> String {
    let mut out = String::new();

    out.push_str("\nSeating Plan\n");
    out.push_str(&format!(
        "  {} benches, {} seats per bench, {}/{} seats filled\n\n",
        grid.benches().len(),
        grid.seats_per_bench(),
        grid.occupied_seats(),
        grid.total_seats()
    ));

    for (i, bench) in grid.benches().iter().enumerate() {
        out.push_str(&format!(
            "  [{:>3}] {} / bench {}  ({} classes)\n",
            i + 1,
            bench.room,
            bench.number,
            bench.distinct_classes()
        ));
        for (s, seat) in bench.seats.iter().enumerate() {
            match seat {
                Some(st) => out.push_str(&format!(
                    "        {}. {} ({}) • {}\n",
                    s + 1,
                    st.name,
                    st.id,
                    st.class
                )),
                None => out.push_str(&format!("        {}. —\n", s + 1)),
            }
        }
    }

    let dupes = grid.duplicate_placements();
    if !dupes.is_empty() {
        out.push_str(&format!("\n  Seated more than once: {}\n", dupes.join(", ")));
    }

    if unassigned.is_empty() {
        out.push_str("\nEveryone is seated.\n");
    } else {
        out.push_str(&format!("\nUnassigned ({}):\n", unassigned.len()));
        for s in unassigned {
            out.push_str(&format!("  • {} ({}) • {}\n", s.name, s.id, s.class));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RosterOrder, generate};
    use crate::layout::{Room, SeatLayout};
    use crate::roster::Roster;
    use crate::unassigned::unassigned;

    fn plan() -> (Roster, Grid) {
        let roster = Roster::new(vec![
            Student::new("1", "Ana", "7A"),
            Student::new("2", "Bo", "7B"),
            Student::new("3", "Cy", "7C"),
        ])
        .unwrap();
        let layout = SeatLayout::new(&[Room::new("Hall", 1)], 2).unwrap();
        let grid = generate(&roster, &layout, &mut RosterOrder);
        (roster, grid)
    }

    #[test]
    fn rows_fill_empty_seats_with_blanks() {
        let roster = Roster::new(vec![Student::new("1", "Ana", "7A")]).unwrap();
        let layout = SeatLayout::new(&[Room::new("Hall", 1)], 2).unwrap();
        let grid = generate(&roster, &layout, &mut RosterOrder);

        let rows = rows(&grid);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].room, "Hall");
        assert_eq!(rows[0].bench, 1);
        assert_eq!(rows[0].seats[0].id, "1");
        assert_eq!(rows[0].seats[1].id, "");
    }

    #[test]
    fn rows_serialize_to_json() {
        let (_, grid) = plan();
        let json = serde_json::to_value(rows(&grid)).unwrap();
        assert_eq!(json[0]["seats"][1]["name"], "Bo");
    }

    #[test]
    fn report_lists_seats_and_unassigned() {
        let (roster, grid) = plan();
        let report = format_plan(&grid, &unassigned(&roster, &grid));

        assert!(report.contains("2/2 seats filled"));
        assert!(report.contains("Ana (1)"));
        assert!(report.contains("Unassigned (1)"));
        assert!(report.contains("Cy (3)"));
    }

    #[test]
    fn report_flags_duplicate_placements() {
        let (roster, mut grid) = plan();
        crate::editor::GridEditor::new(&mut grid)
            .with_mode(crate::editor::EditMode::AllowDuplicates)
            .set_seat(0, 1, roster.get("1").cloned())
            .unwrap();

        let report = format_plan(&grid, &unassigned(&roster, &grid));
        assert!(report.contains("Seated more than once: 1"));
    }
}
