//! Console rendering helpers shared by the example binaries.
use glam::Vec2;
use siteplan::prelude::*;

/// Renders a layout as a coarse character grid, one cell per `cell` site units.
///
/// `A`/`B` mark towers, `#` the plaza, `.` the setback interior, and spaces the
/// setback margin. The y axis points up, so the top row prints first.
pub fn render_layout_ascii(layout: &Layout, config: &SiteConfig, cell: f32) -> String {
    let cols = (config.extent.x / cell).ceil() as usize;
    let rows = (config.extent.y / cell).ceil() as usize;
    let interior = config.interior();
    let mut out = String::with_capacity((cols + 1) * rows);

    for row in (0..rows).rev() {
        for col in 0..cols {
            let p = Vec2::new((col as f32 + 0.5) * cell, (row as f32 + 0.5) * cell);
            out.push(cell_char(layout, &interior, p));
        }
        out.push('\n');
    }

    out
}

fn cell_char(layout: &Layout, interior: &Rect, p: Vec2) -> char {
    if let Some(tower) = layout.towers.iter().find(|t| covers(&t.rect(), p)) {
        return match tower.kind {
            TowerKind::A => 'A',
            TowerKind::B => 'B',
        };
    }
    if covers(&layout.plaza, p) {
        return '#';
    }
    if covers(interior, p) {
        return '.';
    }
    ' '
}

fn covers(rect: &Rect, p: Vec2) -> bool {
    p.x >= rect.min.x && p.x < rect.max.x && p.y >= rect.min.y && p.y < rect.max.y
}
