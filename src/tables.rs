use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{Sizing, Technology};

/// Render the screening curves: one row per slice, winning technology highlighted.
#[must_use]
pub fn cost_curve_table(sizing: &Sizing) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Level", "PV", "PV + battery", "Grid", "Battery"]);
    for (row, (winner, plan)) in sizing
        .cost_curve
        .rows()
        .iter()
        .zip(sizing.winners.iter().zip(&sizing.battery_plans))
    {
        let paint = |technology| {
            if *winner == technology { Color::Green } else { Color::Reset }
        };
        table.add_row(vec![
            Cell::new(row.level),
            Cell::new(row.pv_only)
                .set_alignment(CellAlignment::Right)
                .fg(paint(Technology::PvOnly)),
            Cell::new(row.pv_battery)
                .set_alignment(CellAlignment::Right)
                .fg(paint(Technology::PvBattery)),
            Cell::new(row.grid)
                .set_alignment(CellAlignment::Right)
                .fg(paint(Technology::Grid)),
            Cell::new(plan.capacity).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Render the selected capacities in one look.
#[must_use]
pub fn summary_table(sizing: &Sizing) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.add_row(vec![Cell::new("Optimal PV capacity"), Cell::new(sizing.pv_capacity)]);
    table.add_row(vec![
        Cell::new("Optimal battery capacity"),
        Cell::new(sizing.battery_capacity),
    ]);
    table.add_row(vec![
        Cell::new("Slices won by PV"),
        Cell::new(count(sizing, Technology::PvOnly)),
    ]);
    table.add_row(vec![
        Cell::new("Slices won by PV + battery"),
        Cell::new(count(sizing, Technology::PvBattery)),
    ]);
    table.add_row(vec![
        Cell::new("Slices won by the grid"),
        Cell::new(count(sizing, Technology::Grid)),
    ]);
    table
}

fn count(sizing: &Sizing, technology: Technology) -> usize {
    sizing.winners.iter().filter(|winner| **winner == technology).count()
}
