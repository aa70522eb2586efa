//! Character-cell rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use polyview_core::Frame;
use std::io::Write;

/// Character used for filled face cells
pub const FILL_CHAR: char = '█';

/// Presentation state: whether and how to fill faces and colour edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub fill_faces: bool,
    pub mark_edges: bool,
    pub face_color: Color,
    pub mark_color: Color,
}

impl RenderOptions {
    /// Marked edges use the mark colour; otherwise edges take the face colour
    /// when filling, and blue when drawing wireframe only.
    pub fn edge_color(&self) -> Color {
        if self.mark_edges {
            self.mark_color
        } else if self.fill_faces {
            self.face_color
        } else {
            Color::Blue
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fill_faces: false,
            mark_edges: false,
            face_color: Color::Red,
            mark_color: Color::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Renders projected frames into a grid of coloured characters.
///
/// Faces are painted in declaration order with no depth test, so a later
/// face covers an earlier one wherever they overlap.
pub struct CellRenderer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![BLANK; width * height];
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Character at a cell, or `None` outside the grid
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x].ch)
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x].color)
    }

    pub fn render_frame(&mut self, frame: &Frame<'_>, options: &RenderOptions) {
        self.clear();

        if options.fill_faces {
            for face in frame.faces {
                let corners = frame.face_points(face);
                self.fill_polygon(&corners, options.face_color);
            }
        }

        let edge_color = options.edge_color();
        for edge in frame.edges {
            let (a, b) = frame.edge_points(edge);
            self.draw_line(a, b, edge_color);
        }
    }

    fn plot(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell { ch, color };
    }

    /// Fill a simple polygon with the even-odd rule, sampling cell centres
    pub fn fill_polygon(&mut self, corners: &[Point2<i32>], color: Color) {
        if corners.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }

        let min_y = corners.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = corners
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(0)
            .min(self.height as i32 - 1);

        let mut crossings = Vec::with_capacity(corners.len());
        for y in min_y..=max_y {
            let scan = y as f64 + 0.5;
            crossings.clear();

            for (i, a) in corners.iter().enumerate() {
                let b = corners[(i + 1) % corners.len()];
                let (ay, by) = (f64::from(a.y), f64::from(b.y));
                if (ay <= scan && scan < by) || (by <= scan && scan < ay) {
                    let t = (scan - ay) / (by - ay);
                    crossings.push(f64::from(a.x) + t * f64::from(b.x - a.x));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                // Cells whose centre x + 0.5 lies in [left, right)
                let first = (span[0] - 0.5).ceil().max(0.0) as i32;
                let last = (span[1] - 0.5).ceil() as i32 - 1;
                let last = last.min(self.width as i32 - 1);
                for x in first..=last {
                    self.plot(x, y, FILL_CHAR, color);
                }
            }
        }
    }

    /// Draw a line with Bresenham's algorithm, choosing a glyph by slope
    pub fn draw_line(&mut self, a: Point2<i32>, b: Point2<i32>, color: Color) {
        let ch = line_glyph(b.x - a.x, b.y - a.y);

        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (a.x, a.y);

        loop {
            self.plot(x, y, ch, color);
            if x == b.x && y == b.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Write the grid to `writer`, one row per line
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                writer.queue(Print("\r\n"))?;
            }
            for cell in row {
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.ch))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    /// The grid as plain text, rows joined by newlines
    pub fn to_text(&self) -> String {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pick a line glyph for a direction in screen space (y grows downward)
fn line_glyph(dx: i32, dy: i32) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ay * 2 < ax {
        '-'
    } else if ax * 2 < ay {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}
