//! `benchgrid generate`: build a plan, apply manual edits, print it.

use std::path::Path;

use anyhow::{Context, Result, bail};
use benchgrid_alloc::engine::generate as generate_grid;
use benchgrid_alloc::{
    GridEditor, PoolOrder, Roster, RosterOrder, SeatingConfig, SeededShuffle, export, unassigned,
};
use tracing::info;

pub struct GenerateOptions {
    pub config_path: String,
    pub roster_path: String,
    pub seed: Option<u64>,
    pub identity: bool,
    pub set: Vec<String>,
    pub clear: Vec<String>,
    pub format: String,
}

/// A manual edit given on the command line, already converted to 0-based
/// indices.
#[derive(Debug, PartialEq, Eq)]
enum SeatEdit {
    Assign { bench: usize, seat: usize, id: String },
    Clear { bench: usize, seat: usize },
}

pub fn generate(opts: &GenerateOptions) -> Result<()> {
    let output = render(opts)?;
    println!("{output}");
    Ok(())
}

fn render(opts: &GenerateOptions) -> Result<String> {
    let config = SeatingConfig::from_file(Path::new(&opts.config_path))?;
    let roster_json = std::fs::read_to_string(&opts.roster_path)
        .with_context(|| format!("failed to read roster {}", opts.roster_path))?;
    let roster = Roster::from_json_str(&roster_json)
        .with_context(|| format!("invalid roster {}", opts.roster_path))?;
    let layout = config.layout()?;

    info!(
        students = roster.len(),
        benches = layout.bench_count(),
        seats = layout.total_seats(),
        "loaded roster and layout"
    );

    let mut order: Box<dyn PoolOrder> = if opts.identity {
        Box::new(RosterOrder)
    } else if let Some(seed) = opts.seed {
        Box::new(SeededShuffle::seeded(seed))
    } else {
        config.pool_order()
    };
    let mut grid = generate_grid(&roster, &layout, order.as_mut());

    let edits = parse_edits(&opts.set, &opts.clear)?;
    let mut editor = GridEditor::new(&mut grid).with_mode(config.edit_mode);
    for edit in edits {
        match edit {
            SeatEdit::Assign { bench, seat, id } => {
                let Some(student) = roster.get(&id) else {
                    bail!("unknown student id: {id}");
                };
                editor.set_seat(bench, seat, Some(student.clone()))?;
            }
            SeatEdit::Clear { bench, seat } => {
                editor.clear_seat(bench, seat)?;
            }
        }
    }

    let left = unassigned(&roster, &grid);
    match opts.format.as_str() {
        "json" => {
            let payload = serde_json::json!({
                "benches": export::rows(&grid),
                "unassigned": left,
            });
            Ok(serde_json::to_string_pretty(&payload)?)
        }
        "text" => Ok(export::format_plan(&grid, &left)),
        other => bail!("unsupported format: {other} (expected text or json)"),
    }
}

/// Parse `--set B:S=ID` and `--clear B:S` arguments. Clears apply first.
fn parse_edits(set: &[String], clear: &[String]) -> Result<Vec<SeatEdit>> {
    let mut edits = Vec::with_capacity(set.len() + clear.len());
    for arg in clear {
        let (bench, seat) = parse_position(arg)?;
        edits.push(SeatEdit::Clear { bench, seat });
    }
    for arg in set {
        let Some((pos, id)) = arg.split_once('=') else {
            bail!("expected BENCH:SEAT=ID, got '{arg}'");
        };
        let id = id.trim();
        if id.is_empty() {
            bail!("missing student id in '{arg}'");
        }
        let (bench, seat) = parse_position(pos)?;
        edits.push(SeatEdit::Assign {
            bench,
            seat,
            id: id.to_string(),
        });
    }
    Ok(edits)
}

/// Parse a 1-based `BENCH:SEAT` pair into 0-based indices.
fn parse_position(arg: &str) -> Result<(usize, usize)> {
    let Some((bench, seat)) = arg.split_once(':') else {
        bail!("expected BENCH:SEAT, got '{arg}'");
    };
    let bench: usize = bench
        .trim()
        .parse()
        .with_context(|| format!("bad bench number in '{arg}'"))?;
    let seat: usize = seat
        .trim()
        .parse()
        .with_context(|| format!("bad seat number in '{arg}'"))?;
    if bench == 0 || seat == 0 {
        bail!("bench and seat numbers start at 1, got '{arg}'");
    }
    Ok((bench - 1, seat - 1))
}
