use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use seqforge::optimizer::runner::OptimizationResult;
use seqforge::scorer::ScoreDetails;

pub struct ValidationRow {
    pub name: String,
    pub reference: f64,
    pub details: ScoreDetails,
}

pub fn print_sequence_grid(name: &str, sequence: &[usize]) {
    println!("\n{}:", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for chunk in sequence.chunks(10) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|n| Cell::new(n).set_alignment(CellAlignment::Right))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_scoring_report(rows: &[ValidationRow], window: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Sequence").add_attribute(Attribute::Bold),
        Cell::new("Fast").fg(Color::Cyan),
        Cell::new("Reference"),
        Cell::new("Drift"),
        Cell::new("Pairs"),
        Cell::new("Mean Aff"),
    ];
    for d in 1..=window {
        header.push(Cell::new(format!("d={}", d)));
    }
    table.add_row(header);

    for i in 1..=(5 + window) {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in rows {
        let d = &row.details;
        let drift = (d.score - row.reference).abs();
        let drift_cell = if drift > 1e-6 {
            Cell::new(format!("{:.2e}", drift)).fg(Color::Red)
        } else {
            Cell::new(format!("{:.0e}", drift)).fg(Color::Green)
        };

        let mut cells = vec![
            Cell::new(&row.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", d.score)).fg(Color::Cyan),
            Cell::new(format!("{:.3}", row.reference)),
            drift_cell,
            Cell::new(d.pairs),
            Cell::new(format!("{:.2}", d.mean_affinity)),
        ];
        for contribution in &d.by_distance {
            cells.push(Cell::new(format!("{:.1}", contribution)));
        }
        table.add_row(cells);
    }
    println!("\n{}", table);
}

pub fn print_search_summary(result: &OptimizationResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Phase").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Detail"),
    ]);
    table.add_row(vec![
        Cell::new("Greedy"),
        Cell::new(format!("{:.3}", result.greedy.result.score)),
        Cell::new(format!("best start {}", result.greedy.start)),
    ]);
    table.add_row(vec![
        Cell::new("Refined"),
        Cell::new(format!("{:.3}", result.refined.score)).fg(Color::Green),
        Cell::new(format!(
            "{} sweeps, {} swaps{}",
            result.stats.sweeps,
            result.stats.accepted,
            if result.stats.aborted { " (stopped early)" } else { "" }
        )),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
    println!("Elapsed: {:.2}s", result.elapsed.as_secs_f64());
}
