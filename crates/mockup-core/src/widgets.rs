// File: crates/mockup-core/src/widgets.rs
// Summary: Stateless wireframe drawing primitives (cards, buttons, fields, tables, badges, navigation).
// Notes:
// - Every primitive paints at caller-supplied pixel coordinates; later calls paint over earlier ones.
// - Primitives that feed layout chaining return the pixel extent they consumed.

use skia_safe as skia;

use crate::canvas::Canvas;
use crate::geometry::{Point, Rect};
use crate::palette::Palette;
use crate::types::{ButtonVariant, FontSpec, TableStyle, Tone, SIDEBAR_WIDTH};

/// One table cell: plain text, or a label rendered as a badge.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Badge(String, Tone),
}

impl Cell {
    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge(text.into(), tone)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::Text(s.to_string()) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Cell::Text(s) }
}

impl From<(&str, Tone)> for Cell {
    fn from((s, tone): (&str, Tone)) -> Self { Cell::Badge(s.to_string(), tone) }
}

/// Badge whose tone is given by name (`"success"`, `"danger"`, ...).
impl From<(&str, &str)> for Cell {
    fn from((s, tone): (&str, &str)) -> Self { Cell::Badge(s.to_string(), Tone::from_name(tone)) }
}

/// A deal card inside a kanban column.
#[derive(Clone, Copy, Debug)]
pub struct DealCard<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub owner: &'a str,
}

/// Colours for a diagram box.
#[derive(Clone, Copy, Debug)]
pub struct BoxColors {
    pub fill: skia::Color,
    pub border: skia::Color,
    pub text: skia::Color,
}

/// Rounded rectangle; no-op when neither `fill` nor `stroke` is given.
pub fn rounded_rect(
    canvas: &mut Canvas,
    bounds: Rect,
    radius: f32,
    fill: Option<skia::Color>,
    stroke: Option<skia::Color>,
    stroke_width: f32,
) {
    if let Some(color) = fill {
        canvas.fill_rrect(bounds, radius, color);
    }
    if let Some(color) = stroke {
        canvas.stroke_rrect(bounds, radius, color, stroke_width);
    }
}

/// Soft drop shadow offset by (3, 3).
pub fn shadow(canvas: &mut Canvas, palette: &Palette, bounds: Rect, radius: f32) {
    canvas.fill_rrect(bounds.offset(3, 3), radius, palette.shadow);
}

/// White card with shadow, border and an optional 40 px title band.
pub fn card(canvas: &mut Canvas, palette: &Palette, bounds: Rect, title: Option<&str>) {
    shadow(canvas, palette, bounds, 8.0);
    rounded_rect(canvas, bounds, 8.0, Some(palette.card), Some(palette.border), 1.0);

    if let Some(title) = title {
        let rule_y = bounds.top + 40;
        canvas.line(
            Point::new(bounds.left + 1, rule_y),
            Point::new(bounds.right - 1, rule_y),
            palette.border,
            1.0,
        );
        canvas.text(bounds.origin().offset(16, 12), title, FontSpec::bold(14.0), palette.text);
    }
}

/// Button with a centred bold label; `size` is (width, height).
pub fn button(
    canvas: &mut Canvas,
    palette: &Palette,
    pos: Point,
    label: &str,
    size: (i32, i32),
    variant: ButtonVariant,
) {
    let (width, height) = size;
    let bounds = Rect::from_ltwh(pos.x, pos.y, width, height);
    let (fill, fg, border) = palette.button(variant);
    rounded_rect(canvas, bounds, 4.0, Some(fill), border, 1.0);

    let font = FontSpec::bold(12.0);
    let text_width = canvas.text_width(label, font);
    let at = Point::new(pos.x + (width - text_width) / 2, pos.y + (height - 14) / 2);
    canvas.text(at, label, font, fg);
}

/// Form input; a `value` is shown in the text colour, otherwise the placeholder in a muted one.
pub fn input(canvas: &mut Canvas, palette: &Palette, pos: Point, placeholder: &str, width: i32, value: Option<&str>) {
    let bounds = Rect::from_ltwh(pos.x, pos.y, width, 36);
    rounded_rect(canvas, bounds, 4.0, Some(palette.white), Some(palette.border), 1.0);

    let (text, color) = match value {
        Some(v) => (v, palette.text),
        None => (placeholder, palette.text_light),
    };
    canvas.text(pos.offset(12, 10), text, FontSpec::regular(12.0), color);
}

/// Select field with a downward chevron near the right edge.
pub fn dropdown(canvas: &mut Canvas, palette: &Palette, pos: Point, text: &str, width: i32) {
    let height = 36;
    let bounds = Rect::from_ltwh(pos.x, pos.y, width, height);
    rounded_rect(canvas, bounds, 4.0, Some(palette.white), Some(palette.border), 1.0);
    canvas.text(pos.offset(12, 10), text, FontSpec::regular(12.0), palette.text);

    let ax = pos.x + width - 24;
    let ay = pos.y + height / 2;
    canvas.fill_polygon(
        &[Point::new(ax, ay - 3), Point::new(ax + 8, ay - 3), Point::new(ax + 4, ay + 3)],
        palette.text_secondary,
    );
}

/// Pill label; returns its rendered width for horizontal chaining.
pub fn badge(canvas: &mut Canvas, palette: &Palette, pos: Point, text: &str, tone: Tone, small: bool) -> i32 {
    let (bg, fg) = palette.tone(tone);
    let font = FontSpec::bold(if small { 10.0 } else { 11.0 });
    let text_width = canvas.text_width(text, font);

    let padding = if small { 6 } else { 8 };
    let height = if small { 18 } else { 22 };
    let width = text_width + padding * 2;

    canvas.fill_rrect(Rect::from_ltwh(pos.x, pos.y, width, height), height as f32 / 2.0, bg);
    canvas.text(pos.offset(padding, if small { 3 } else { 4 }), text, font, fg);

    width
}

/// Data table with header band, striped rows and badge cells.
/// Returns the total height consumed: `header_height + rows * row_height`.
pub fn table(
    canvas: &mut Canvas,
    palette: &Palette,
    pos: Point,
    width: i32,
    headers: &[&str],
    rows: &[Vec<Cell>],
    column_widths: Option<&[i32]>,
    style: TableStyle,
) -> i32 {
    let even;
    let widths: &[i32] = match column_widths {
        Some(w) => w,
        None => {
            let n = headers.len().max(1) as i32;
            even = vec![width / n; headers.len()];
            &even
        }
    };
    let total_height = style.total_height(rows.len());
    let outer = Rect::from_ltwh(pos.x, pos.y, width, total_height);

    // Header band: rounded top corners, square bottom edge.
    let header = Rect::from_ltwh(pos.x, pos.y, width, style.header_height);
    canvas.fill_rrect(header, 8.0, palette.bg);
    canvas.fill_rect(Rect::from_ltrb(header.left, header.top + 8, header.right, header.bottom), palette.bg);

    let header_font = FontSpec::bold(12.0);
    let mut col_x = pos.x;
    for (i, title) in headers.iter().enumerate() {
        canvas.text(Point::new(col_x + 16, pos.y + (style.header_height - 16) / 2), title, header_font, palette.text_secondary);
        col_x += widths.get(i).copied().unwrap_or(0);
    }

    let body_font = FontSpec::regular(12.0);
    let mut row_y = pos.y + style.header_height;
    for (row_idx, row) in rows.iter().enumerate() {
        let bg = if row_idx % 2 == 0 { palette.white } else { palette.bg };
        let band = Rect::from_ltwh(pos.x, row_y, width, style.row_height);
        if row_idx + 1 == rows.len() {
            // Last row closes the rounded outline.
            canvas.fill_rrect(band, 8.0, bg);
            canvas.fill_rect(band.with_height(8), bg);
        } else {
            canvas.fill_rect(band, bg);
        }

        let mut col_x = pos.x;
        for (i, cell) in row.iter().enumerate() {
            match cell {
                Cell::Badge(text, tone) => {
                    let y = row_y + (style.row_height - 22) / 2;
                    badge(canvas, palette, Point::new(col_x + 16, y), text, *tone, false);
                }
                Cell::Text(text) => {
                    let y = row_y + (style.row_height - 16) / 2;
                    canvas.text(Point::new(col_x + 16, y), text, body_font, palette.text);
                }
            }
            col_x += widths.get(i).copied().unwrap_or(0);
        }
        row_y += style.row_height;
    }

    canvas.stroke_rrect(outer, 8.0, palette.border, 1.0);
    total_height
}

/// Circle placeholder for an icon.
pub fn icon_placeholder(canvas: &mut Canvas, palette: &Palette, pos: Point, size: i32, filled: bool) {
    let bounds = Rect::from_ltwh(pos.x, pos.y, size, size);
    if filled {
        canvas.fill_oval(bounds, palette.primary);
    } else {
        canvas.stroke_oval(bounds, palette.text_secondary, 2.0);
    }
}

/// Round avatar with centred initials.
pub fn avatar(canvas: &mut Canvas, palette: &Palette, pos: Point, size: i32, initials: &str) {
    canvas.fill_oval(Rect::from_ltwh(pos.x, pos.y, size, size), palette.primary);
    let font = FontSpec::bold((size / 3) as f32);
    let (tw, th) = canvas.text_size(initials, font);
    canvas.text(Point::new(pos.x + (size - tw) / 2, pos.y + (size - th) / 2), initials, font, palette.white);
}

/// Vertical navigation band with a brand strip and one highlighted row.
/// `width` is the canvas width; the band never exceeds it. Returns the band width.
pub fn sidebar(
    canvas: &mut Canvas,
    palette: &Palette,
    width: i32,
    height: i32,
    brand: &str,
    items: &[&str],
    active_index: Option<usize>,
) -> i32 {
    let band = SIDEBAR_WIDTH.min(width);
    canvas.fill_rect(Rect::from_ltwh(0, 0, band, height), palette.sidebar);

    canvas.fill_rect(Rect::from_ltwh(0, 0, band, 64), palette.sidebar_active);
    canvas.text(Point::new(20, 20), brand, FontSpec::bold(20.0), palette.white);

    let item_height = 44;
    let font = FontSpec::regular(13.0);
    let mut y = 80;
    for (idx, item) in items.iter().enumerate() {
        let active = active_index == Some(idx);
        if active {
            canvas.fill_rect(Rect::from_ltwh(0, y, band, item_height), palette.sidebar_active);
            canvas.fill_rect(Rect::from_ltwh(0, y, 4, item_height), palette.primary);
        }
        canvas.stroke_oval(Rect::from_ltwh(20, y + 12, 20, 20), palette.text_light, 1.0);
        let color = if active { palette.white } else { palette.sidebar_text };
        canvas.text(Point::new(52, y + 13), item, font, color);
        y += item_height;
    }

    band
}

/// Top application bar: search field, notification bell, avatar and user name.
pub fn header_bar(canvas: &mut Canvas, palette: &Palette, x: i32, y: i32, width: i32, user: (&str, &str)) {
    let height = 64;
    canvas.fill_rect(Rect::from_ltwh(x, y, width, height), palette.white);
    canvas.line(Point::new(x, y + height), Point::new(x + width, y + height), palette.border, 1.0);

    let search_x = x + 24;
    canvas.fill_rrect(Rect::from_ltrb(search_x, y + 16, search_x + 300, y + 48), 4.0, palette.bg);
    canvas.text(Point::new(search_x + 40, y + 24), "Search...", FontSpec::regular(13.0), palette.text_light);
    canvas.stroke_oval(Rect::from_ltrb(search_x + 12, y + 22, search_x + 32, y + 42), palette.text_light, 1.0);

    let right_x = x + width - 160;
    canvas.fill_oval(Rect::from_ltrb(right_x, y + 20, right_x + 24, y + 44), palette.bg);
    canvas.stroke_oval(Rect::from_ltrb(right_x + 5, y + 25, right_x + 19, y + 39), palette.text_secondary, 1.0);

    let (initials, name) = user;
    avatar(canvas, palette, Point::new(right_x + 40, y + 12), 40, initials);
    canvas.text(Point::new(right_x + 90, y + 24), name, FontSpec::regular(13.0), palette.text);
}

/// Page title, optional subtitle and right-aligned action buttons `(label, is_primary)`.
pub fn page_header(
    canvas: &mut Canvas,
    palette: &Palette,
    x: i32,
    y: i32,
    width: i32,
    title: &str,
    subtitle: Option<&str>,
    buttons: &[(&str, bool)],
) {
    canvas.text(Point::new(x, y), title, FontSpec::bold(24.0), palette.text);
    if let Some(subtitle) = subtitle {
        canvas.text(Point::new(x, y + 32), subtitle, FontSpec::regular(13.0), palette.text_secondary);
    }

    let mut btn_x = x + width;
    for &(label, primary) in buttons.iter().rev() {
        let btn_width = label.chars().count() as i32 * 9 + 24;
        btn_x -= btn_width + 12;
        let variant = if primary { ButtonVariant::Primary } else { ButtonVariant::Default };
        button(canvas, palette, Point::new(btn_x, y), label, (btn_width, 36), variant);
    }
}

/// KPI card; `trend` is (text, is_up) and is prefixed with `+` or `-`.
pub fn stat_card(canvas: &mut Canvas, palette: &Palette, bounds: Rect, label: &str, value: &str, trend: Option<(&str, bool)>) {
    card(canvas, palette, bounds, None);
    canvas.text(bounds.origin().offset(20, 16), label, FontSpec::regular(12.0), palette.text_secondary);
    canvas.text(bounds.origin().offset(20, 36), value, FontSpec::bold(24.0), palette.text);

    if let Some((trend, up)) = trend {
        let color = if up { palette.success } else { palette.danger };
        let sign = if up { "+" } else { "-" };
        let text = format!("{sign}{}", trend.trim_start_matches(['+', '-']));
        canvas.text(Point::new(bounds.left + 20, bounds.bottom - 28), &text, FontSpec::bold(12.0), color);
    }
}

/// Kanban column header plus at most three deal cards.
pub fn kanban_column(
    canvas: &mut Canvas,
    palette: &Palette,
    bounds: Rect,
    title: &str,
    count: &str,
    value: &str,
    cards: &[DealCard<'_>],
) {
    let (x, y, width) = (bounds.left, bounds.top, bounds.width());
    let head = Rect::from_ltwh(x, y, width, 50);
    canvas.fill_rrect(head, 8.0, palette.bg);
    canvas.fill_rect(Rect::from_ltrb(x, y + 42, x + width, y + 50), palette.bg);

    canvas.text(Point::new(x + 12, y + 8), title, FontSpec::bold(13.0), palette.text);
    let summary = format!("{count} deals - {value}");
    canvas.text(Point::new(x + 12, y + 28), &summary, FontSpec::regular(11.0), palette.text_secondary);

    let card_height = 80;
    let mut card_y = y + 60;
    for deal in cards.iter().take(3) {
        card(canvas, palette, Rect::from_ltwh(x + 4, card_y, width - 8, card_height), None);
        canvas.text(Point::new(x + 16, card_y + 12), deal.title, FontSpec::bold(12.0), palette.text);
        canvas.text(Point::new(x + 16, card_y + 32), deal.value, FontSpec::bold(14.0), palette.primary);
        canvas.text(Point::new(x + 16, card_y + 54), deal.owner, FontSpec::regular(11.0), palette.text_secondary);
        card_y += card_height + 8;
    }
}

/// Diagram box with shadow and centred heading plus optional sub-heading.
pub fn labelled_box(
    canvas: &mut Canvas,
    palette: &Palette,
    bounds: Rect,
    text: &str,
    subtext: Option<&str>,
    colors: BoxColors,
) {
    let radius = 12.0;
    canvas.fill_rrect(bounds.offset(4, 4), radius, palette.shadow);
    rounded_rect(canvas, bounds, radius, Some(colors.fill), Some(colors.border), 2.0);

    let font = FontSpec::bold(14.0);
    let text_x = bounds.left + (bounds.width() - canvas.text_width(text, font)) / 2;

    match subtext {
        Some(sub) => {
            let text_y = bounds.top + bounds.height() / 3 - 8;
            canvas.text(Point::new(text_x, text_y), text, font, colors.text);
            let sub_font = FontSpec::regular(11.0);
            let sub_x = bounds.left + (bounds.width() - canvas.text_width(sub, sub_font)) / 2;
            canvas.text(Point::new(sub_x, text_y + 24), sub, sub_font, palette.text_secondary);
        }
        None => {
            let text_y = bounds.top + (bounds.height() - 16) / 2;
            canvas.text(Point::new(text_x, text_y), text, font, colors.text);
        }
    }
}
