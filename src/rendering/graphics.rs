use macroquad::prelude::*;

use crate::application::{Simulation, Viewport};
use crate::config::CONTROLS;
use crate::domain::Generation;

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0); // Bright green
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0); // Dark gray
const HUD_BACKGROUND: Color = Color::new(0.12, 0.12, 0.12, 0.85);

/// Suffixes for HUD counters, largest first
const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Short HUD form of a count: 1500 -> "1.5K"
fn compact_count(n: u64) -> String {
    let value = n as f64;
    UNITS
        .iter()
        .find(|(scale, _)| value >= *scale)
        .map_or_else(|| n.to_string(), |(scale, suffix)| format!("{:.1}{suffix}", value / scale))
}

/// Draw the live cells that fall inside the display area
pub fn draw_generation(generation: &Generation, viewport: &Viewport, area_width: f32, area_height: f32) {
    let cell_size = viewport.cell_size() as f32;
    let visible = viewport.visible_bounds(area_width as f64, area_height as f64);

    // Grid lines when zoomed in enough (before cells so cells draw on top)
    if cell_size >= 8.0 {
        draw_grid_lines(viewport, area_width, area_height);
    }

    // Iterate the population, not the screen: the board is sparse
    for cell in generation.iter().filter(|&c| visible.contains(c)) {
        let (x, y) = viewport.world_to_screen(cell);
        draw_rectangle(x as f32, y as f32, cell_size, cell_size, ALIVE_COLOR);
    }
}

fn draw_grid_lines(viewport: &Viewport, area_width: f32, area_height: f32) {
    let visible = viewport.visible_bounds(area_width as f64, area_height as f64);

    for x in visible.min_x..=visible.max_x.saturating_add(1) {
        let (sx, _) = viewport.world_to_screen((x, 0).into());
        draw_line(sx as f32, 0.0, sx as f32, area_height, 1.0, GRID_LINE_COLOR);
    }
    for y in visible.min_y..=visible.max_y.saturating_add(1) {
        let (_, sy) = viewport.world_to_screen((0, y).into());
        draw_line(0.0, sy as f32, area_width, sy as f32, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw status lines and key help over the top-left corner
pub fn draw_hud(sim: &Simulation, show_help: bool) {
    let status = if sim.is_running { "Running" } else { "Paused" };
    let lines = [
        format!("Generation: {}", compact_count(sim.generation)),
        format!(
            "Population: {} | Candidates: {}",
            compact_count(sim.current().len() as u64),
            compact_count(sim.last_stats.candidates as u64)
        ),
        format!("Rule: {} | Pattern: {}", sim.rule.name(), sim.start.name()),
        format!("Speed: {:.1} gen/s | Cell: {:.0}px", sim.updates_per_second, sim.viewport.cell_size()),
        format!("Status: {}  (H: help)", status),
    ];

    let line_height = 16.0;
    let help_lines = if show_help { CONTROLS.len() + 1 } else { 0 };
    let panel_height = (lines.len() + help_lines) as f32 * line_height + 10.0;
    draw_rectangle(0.0, 0.0, 340.0, panel_height, HUD_BACKGROUND);

    let mut y = line_height;
    for line in &lines {
        draw_text(line, 8.0, y, 16.0, WHITE);
        y += line_height;
    }

    if show_help {
        y += line_height;
        for (key, action) in CONTROLS {
            draw_text(&format!("{key}: {action}"), 8.0, y, 14.0, GRAY);
            y += line_height;
        }
    }
}
