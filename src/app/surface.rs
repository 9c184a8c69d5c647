//! Terminal raster surface
//!
//! Maps the 800x600 logical canvas onto whatever cell area the terminal
//! gives us and paints [`DrawCommand`]s into a ratatui [`Buffer`]. Shapes fill
//! the cells whose centers they cover; a shape too small to cover any cell
//! center still marks the cell under its own center. Alpha is composited
//! against the cell's current background.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::render::{DrawCommand, RenderList, TextAlign, BACKGROUND};
use crate::util::{Bounds, Point, Rgba};
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Text at or above this size is drawn bold
const BOLD_TEXT_SIZE: f64 = 40.0;

/// Conversion between terminal cells and logical canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasMapping {
    area: Rect,
}

impl CanvasMapping {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn cell_width(&self) -> f64 {
        CANVAS_WIDTH / self.area.width.max(1) as f64
    }

    fn cell_height(&self) -> f64 {
        CANVAS_HEIGHT / self.area.height.max(1) as f64
    }

    /// Logical position of the center of cell (`column`, `row`)
    pub fn to_logical(&self, column: u16, row: u16) -> Point {
        let col = column.saturating_sub(self.area.x) as f64;
        let row = row.saturating_sub(self.area.y) as f64;
        Point::new(
            (col + 0.5) * self.cell_width(),
            (row + 0.5) * self.cell_height(),
        )
    }

    /// Cell containing `p`, if it is on screen
    pub fn to_cell(&self, p: Point) -> Option<(u16, u16)> {
        if !(0.0..CANVAS_WIDTH).contains(&p.x) || !(0.0..CANVAS_HEIGHT).contains(&p.y) {
            return None;
        }
        let col = (p.x / self.cell_width()).floor() as u16;
        let row = (p.y / self.cell_height()).floor() as u16;
        if col >= self.area.width || row >= self.area.height {
            return None;
        }
        Some((self.area.x + col, self.area.y + row))
    }

    /// Column of a logical x, unclamped, relative to the area's left edge
    fn column_of(&self, x: f64) -> i32 {
        (x / self.cell_width()).floor() as i32
    }

    /// Row of a logical y, unclamped, relative to the area's top edge
    fn row_of(&self, y: f64) -> i32 {
        (y / self.cell_height()).floor() as i32
    }

    /// Every cell of the area with its logical center
    fn cells(&self) -> impl Iterator<Item = (u16, u16, Point)> + '_ {
        let area = self.area;
        (area.top()..area.bottom()).flat_map(move |y| {
            (area.left()..area.right()).map(move |x| (x, y, self.to_logical(x, y)))
        })
    }
}

/// Widget painting one frame of draw commands
pub struct CanvasSurface<'a> {
    commands: &'a RenderList,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(commands: &'a RenderList) -> Self {
        Self { commands }
    }
}

impl Widget for CanvasSurface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mapping = CanvasMapping::new(area);
        for command in self.commands.iter() {
            paint(&mapping, command, buf);
        }
    }
}

fn paint(mapping: &CanvasMapping, command: &DrawCommand, buf: &mut Buffer) {
    match command {
        DrawCommand::Background { color } => {
            for (x, y, _) in mapping.cells() {
                let cell = buf.get_mut(x, y);
                cell.set_symbol(" ");
                cell.set_bg(to_color(color.over(cell_rgb(cell.bg))));
            }
        }
        DrawCommand::Rect {
            bounds,
            radius,
            color,
        } => fill_shape(mapping, buf, bounds.center(), *color, |p| {
            inside_rounded(bounds, *radius, p)
        }),
        DrawCommand::RotatedRect {
            center,
            width,
            height,
            angle,
            color,
        } => {
            let (sin, cos) = angle.to_radians().sin_cos();
            fill_shape(mapping, buf, *center, *color, |p| {
                let dx = p.x - center.x;
                let dy = p.y - center.y;
                // Undo the rotation to test against the axis-aligned rectangle
                let local_x = dx * cos + dy * sin;
                let local_y = -dx * sin + dy * cos;
                local_x.abs() <= width / 2.0 && local_y.abs() <= height / 2.0
            })
        }
        DrawCommand::Ellipse {
            center,
            width,
            height,
            color,
        } => fill_shape(mapping, buf, *center, *color, |p| {
            inside_ellipse(*center, *width, *height, p)
        }),
        DrawCommand::Dot { at, weight, color } => {
            if let Some((x, y)) = mapping.to_cell(*at) {
                let cell = buf.get_mut(x, y);
                let fg = color.over(cell_rgb(cell.bg));
                cell.set_symbol(if *weight < 2.5 { "·" } else { "•" });
                cell.set_fg(to_color(fg));
            }
        }
        DrawCommand::Text {
            at,
            text,
            size,
            color,
            align,
        } => {
            let width = text.width() as i32;
            let column = match align {
                TextAlign::Left => mapping.column_of(at.x),
                TextAlign::Center => mapping.column_of(at.x) - width / 2,
            };
            put_text(mapping, buf, column, mapping.row_of(at.y), text, *size, *color);
        }
        DrawCommand::TextBox {
            bounds,
            text,
            size,
            color,
        } => {
            let first_col = mapping.column_of(bounds.x);
            let last_col = mapping.column_of(bounds.right());
            let max_cols = (last_col - first_col).max(1) as usize;
            let lines = wrap_text(text, max_cols);

            let first_row = mapping.row_of(bounds.y);
            let rows = (mapping.row_of(bounds.bottom()) - first_row).max(1);
            let used = (lines.len() as i32).min(rows);
            let top = first_row + (rows - used) / 2;
            let center_col = mapping.column_of(bounds.center().x);

            for (i, line) in lines.iter().take(used as usize).enumerate() {
                let column = center_col - line.width() as i32 / 2;
                put_text(mapping, buf, column, top + i as i32, line, *size, *color);
            }
        }
    }
}

/// Fill every cell whose center satisfies `inside`, or the cell under
/// `anchor` if none does
fn fill_shape(
    mapping: &CanvasMapping,
    buf: &mut Buffer,
    anchor: Point,
    color: Rgba,
    inside: impl Fn(Point) -> bool,
) {
    let mut painted = false;
    for (x, y, center) in mapping.cells() {
        if inside(center) {
            fill_cell(buf, x, y, color);
            painted = true;
        }
    }
    if !painted {
        if let Some((x, y)) = mapping.to_cell(anchor) {
            fill_cell(buf, x, y, color);
        }
    }
}

fn fill_cell(buf: &mut Buffer, x: u16, y: u16, color: Rgba) {
    let cell = buf.get_mut(x, y);
    cell.set_symbol(" ");
    cell.set_bg(to_color(color.over(cell_rgb(cell.bg))));
}

fn put_text(
    mapping: &CanvasMapping,
    buf: &mut Buffer,
    column: i32,
    row: i32,
    text: &str,
    size: f64,
    color: Rgba,
) {
    let area = mapping.area();
    if row < 0 || row >= area.height as i32 {
        return;
    }
    let y = area.y + row as u16;

    let mut col = column;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0) as i32;
        if width == 0 {
            continue;
        }
        if col >= 0 && col + width <= area.width as i32 {
            let cell = buf.get_mut(area.x + col as u16, y);
            let fg = color.over(cell_rgb(cell.bg));
            cell.set_char(ch);
            cell.set_fg(to_color(fg));
            if size >= BOLD_TEXT_SIZE {
                cell.modifier.insert(Modifier::BOLD);
            }
        }
        col += width;
    }
}

/// Greedy word wrap to `max_cols` display columns; overlong words are split
pub fn wrap_text(text: &str, max_cols: usize) -> Vec<String> {
    let max_cols = max_cols.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed <= max_cols {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            // Word alone is too wide: cut it at the column limit
            let (head, tail) = split_at_width(&word, max_cols);
            lines.push(head);
            word = tail;
            if word.is_empty() {
                break;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_at_width(word: &str, max_cols: usize) -> (String, String) {
    let mut used = 0;
    let mut split = word.len();
    for (i, ch) in word.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_cols && i > 0 {
            split = i;
            break;
        }
        used += w;
    }
    (word[..split].to_string(), word[split..].to_string())
}

fn inside_ellipse(center: Point, width: f64, height: f64, p: Point) -> bool {
    let rx = width / 2.0;
    let ry = height / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let nx = (p.x - center.x) / rx;
    let ny = (p.y - center.y) / ry;
    nx * nx + ny * ny <= 1.0
}

fn inside_rounded(bounds: &Bounds, radius: f64, p: Point) -> bool {
    if p.x < bounds.x || p.x > bounds.right() || p.y < bounds.y || p.y > bounds.bottom() {
        return false;
    }
    let r = radius.min(bounds.width / 2.0).min(bounds.height / 2.0).max(0.0);
    // Distance from the inner rectangle the corners are rounded around
    let dx = (bounds.x + r - p.x).max(p.x - (bounds.right() - r)).max(0.0);
    let dy = (bounds.y + r - p.y).max(p.y - (bounds.bottom() - r)).max(0.0);
    dx * dx + dy * dy <= r * r
}

fn cell_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (BACKGROUND.r, BACKGROUND.g, BACKGROUND.b),
    }
}

fn to_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
