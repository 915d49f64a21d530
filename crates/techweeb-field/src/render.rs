//! Terminal render pass for particle fields.
//!
//! Particle positions live in virtual pixel space so radii and velocities
//! stay meaningful; this module converts between that space and terminal
//! cells at a nominal 8x16 pixels per cell, and turns a field into the
//! per-cell `Vec<Line>` background the pages draw first.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use techweeb_core::{palette, Pointer, Viewport};

use crate::field::Field;
use crate::orbit::OrbitField;

/// Nominal pixel size of one terminal cell.
pub const CELL_WIDTH_PX: f32 = 8.0;
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Spacing of the faint background grid, in cells (60px in pixel space).
const GRID_COLS: u16 = 7;
const GRID_ROWS: u16 = 4;

/// Pixel-space viewport covering a cell area.
pub fn viewport_for(area: Rect) -> Viewport {
    Viewport::new(
        area.width as f32 * CELL_WIDTH_PX,
        area.height as f32 * CELL_HEIGHT_PX,
    )
}

/// Pointer position at the center of a terminal cell.
pub fn pointer_from_cell(column: u16, row: u16) -> Pointer {
    Pointer::new(
        column as f32 * CELL_WIDTH_PX + CELL_WIDTH_PX / 2.0,
        row as f32 * CELL_HEIGHT_PX + CELL_HEIGHT_PX / 2.0,
    )
}

/// Render just the faint background grid, for pages without a field.
pub fn grid_lines(area: Rect) -> Vec<Line<'static>> {
    lines_from_cells(&grid_cells(area), area)
}

/// Render a particle field (plus the background grid) as one line per row.
pub fn field_lines(field: &Field, area: Rect) -> Vec<Line<'static>> {
    let mut cells = grid_cells(area);

    let width = area.width as usize;
    for particle in field.particles() {
        let column = (particle.x / CELL_WIDTH_PX) as usize;
        let row = (particle.y / CELL_HEIGHT_PX) as usize;
        if column >= width || row >= area.height as usize {
            continue;
        }
        cells[row * width + column] =
            Some((particle_char(particle.size), dot_color(particle.opacity)));
    }

    lines_from_cells(&cells, area)
}

/// Render the intro's orbit spiral centered on the area.
pub fn orbit_lines(orbit: &OrbitField, area: Rect, elapsed_ms: u64) -> Vec<Line<'static>> {
    let mut cells = grid_cells(area);

    let width = area.width as usize;
    let center_col = area.width as f32 / 2.0;
    let center_row = area.height as f32 / 2.0;
    for particle in orbit.particles() {
        let (dx, dy) = particle.offset();
        let column = center_col + dx / CELL_WIDTH_PX;
        let row = center_row + dy / CELL_HEIGHT_PX;
        if column < 0.0 || row < 0.0 {
            continue;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= width || row >= area.height as usize {
            continue;
        }
        cells[row * width + column] = Some((
            particle_char(particle.size),
            dot_color(particle.opacity(elapsed_ms)),
        ));
    }

    lines_from_cells(&cells, area)
}

/// Empty cell buffer pre-seeded with the faint background grid dots.
fn grid_cells(area: Rect) -> Vec<Option<(char, Color)>> {
    let width = area.width as usize;
    let mut cells = vec![None; width * area.height as usize];
    for row in (0..area.height).step_by(GRID_ROWS as usize) {
        for column in (0..area.width).step_by(GRID_COLS as usize) {
            cells[row as usize * width + column as usize] = Some(('·', palette::GRID));
        }
    }
    cells
}

fn lines_from_cells(cells: &[Option<(char, Color)>], area: Rect) -> Vec<Line<'static>> {
    let width = area.width as usize;
    (0..area.height as usize)
        .map(|row| {
            let spans: Vec<Span> = (0..width)
                .map(|column| match cells[row * width + column] {
                    Some((ch, color)) => Span::styled(ch.to_string(), Style::new().fg(color)),
                    None => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Dot character by particle diameter.
fn particle_char(size: f32) -> char {
    if size < 2.5 {
        '·'
    } else if size < 4.0 {
        '•'
    } else {
        '●'
    }
}

/// White dot dimmed toward the page background by opacity.
fn dot_color(opacity: f32) -> Color {
    let value = (30.0 + opacity.clamp(0.0, 1.0) * 225.0) as u8;
    Color::Rgb(value, value, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_viewport_for_area() {
        let viewport = viewport_for(Rect::new(0, 0, 100, 40));
        assert_eq!(viewport.width, 800.0);
        assert_eq!(viewport.height, 640.0);
    }

    #[test]
    fn test_pointer_lands_in_cell_center() {
        let pointer = pointer_from_cell(0, 0);
        assert_eq!((pointer.x, pointer.y), (4.0, 8.0));
        let pointer = pointer_from_cell(10, 5);
        assert_eq!((pointer.x, pointer.y), (84.0, 88.0));
    }

    #[test]
    fn test_field_lines_cover_area() {
        let area = Rect::new(0, 0, 80, 24);
        let mut rng = StdRng::seed_from_u64(3);
        let field = Field::new(FieldConfig::repel_and_wrap(100), viewport_for(area), &mut rng);
        let lines = field_lines(&field, area);
        assert_eq!(lines.len(), 24);
        assert!(lines.iter().all(|line| line.spans.len() == 80));
    }

    #[test]
    fn test_particle_char_buckets() {
        assert_eq!(particle_char(1.0), '·');
        assert_eq!(particle_char(3.0), '•');
        assert_eq!(particle_char(5.5), '●');
    }
}
