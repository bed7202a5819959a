use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use microtiter::geometry::GridPoint;
use microtiter::methods::{AggregationMethod, ScoringMethod};
use microtiter::scorer::types::row_label;
use microtiter::scorer::{CellIndex, ScoreMatrix};

pub fn print_score_matrix(matrix: &ScoreMatrix) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    header.extend(
        (1..=matrix.columns()).map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for i in 1..=matrix.columns() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let closest = matrix.closest_match();
    let farthest = matrix.farthest_match();

    for (r, row) in matrix.iter_rows().enumerate() {
        let mut cells = vec![Cell::new(row_label(r)).add_attribute(Attribute::Bold)];
        for (c, score) in row.iter().enumerate() {
            let here = Some(CellIndex::new(r, c));
            let cell = Cell::new(format!("{:.2}", score));
            let cell = if here == closest {
                cell.fg(Color::Green).add_attribute(Attribute::Bold)
            } else if here == farthest {
                cell.fg(Color::Red)
            } else {
                cell
            };
            cells.push(cell);
        }
        table.add_row(cells);
    }
    println!("{}", table);

    if let (Some(best), Some(worst)) = (closest, farthest) {
        println!("✅ Closest match: {}   ❌ Farthest match: {}", best, worst);
    }
}

pub fn print_grid(points: &[GridPoint], columns: usize) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for chunk in points.chunks(columns.max(1)) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|p| {
                Cell::new(format!(
                    "{}: {}",
                    CellIndex::new(p.row, p.column),
                    p.position()
                ))
                .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_methods() {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Kind").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Code").fg(Color::Cyan),
        Cell::new("Label"),
    ]);

    for (id, m) in AggregationMethod::all().iter().enumerate() {
        table.add_row(vec![
            Cell::new("aggregation"),
            Cell::new(id),
            Cell::new(m.code()).fg(Color::Cyan),
            Cell::new(m.label()),
        ]);
    }
    for (id, m) in ScoringMethod::all().iter().enumerate() {
        table.add_row(vec![
            Cell::new("scoring"),
            Cell::new(id),
            Cell::new(m.code()).fg(Color::Cyan),
            Cell::new(m.label()),
        ]);
    }
    println!("\n{}", table);
}
