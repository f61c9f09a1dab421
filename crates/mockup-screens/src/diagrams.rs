// File: crates/mockup-screens/src/diagrams.rs
// Summary: Platform architecture and entity-relationship diagrams.

use mockup_core::palette::rgb;
use mockup_core::widgets::{labelled_box, rounded_rect};
use mockup_core::{arrow, connector, BoxColors, Canvas, FontSpec, Palette, Point, Rect, Result};

fn title(canvas: &mut Canvas, palette: &Palette, text: &str) {
    let font = FontSpec::bold(20.0);
    let x = (canvas.width() - canvas.text_width(text, font)) / 2;
    canvas.text(Point::new(x, 20), text, font, palette.primary_dark);
}

/// Side panel with a heading and a bulleted list.
fn bullet_panel(canvas: &mut Canvas, palette: &Palette, bounds: Rect, heading: &str, items: &[&str], colors: BoxColors) {
    rounded_rect(canvas, bounds, 12.0, Some(colors.fill), Some(colors.border), 2.0);
    canvas.text(bounds.origin().offset(20, 10), heading, FontSpec::bold(12.0), colors.text);
    let mut y = bounds.top + 40;
    for item in items {
        let line = format!("\u{2022} {item}");
        canvas.text(Point::new(bounds.left + 20, y), &line, FontSpec::regular(11.0), palette.text_secondary);
        y += 35;
    }
}

/// Layered platform architecture with service and security side panels.
pub fn architecture(palette: &Palette) -> Result<Canvas> {
    let (width, height) = (1000, 700);
    let mut canvas = Canvas::new(width, height, palette.bg)?;
    title(&mut canvas, palette, "TeamACE CRM-ERP Platform Architecture");

    let layer_width = 800;
    let layer_height = 70;
    let start_x = (width - layer_width) / 2;
    let mid_x = width / 2;

    let layer = |canvas: &mut Canvas, y: i32, name: &str, detail: &str, colors: BoxColors| {
        labelled_box(canvas, palette, Rect::from_ltwh(start_x, y, layer_width, layer_height), name, Some(detail), colors);
    };
    let down = |canvas: &mut Canvas, from_y: i32| {
        arrow(canvas, Point::new(mid_x, from_y + 5), Point::new(mid_x, from_y + 35), palette.secondary);
    };

    layer(
        &mut canvas,
        70,
        "PRESENTATION LAYER",
        "React 18 + Vite + Tailwind CSS (Responsive Web Application)",
        BoxColors { fill: rgb(0xE3F2FD), border: palette.primary, text: palette.primary_dark },
    );
    down(&mut canvas, 70 + layer_height);

    layer(
        &mut canvas,
        180,
        "API GATEWAY LAYER",
        "Express.js REST API + JWT Authentication",
        BoxColors { fill: rgb(0xE0F7FA), border: rgb(0x00BCD4), text: rgb(0x006064) },
    );
    down(&mut canvas, 180 + layer_height);

    // Business logic container with one tile per module
    let y = 290;
    let (module_width, module_height, gap) = (145, 80, 12);
    let modules = [
        ("Core CRM", rgb(0xE8F5E9), rgb(0x4CAF50)),
        ("Business Dev", rgb(0xE3F2FD), rgb(0x2196F3)),
        ("HR Outsourcing", rgb(0xFFF3E0), rgb(0xFF9800)),
        ("Finance", rgb(0xEDE7F6), rgb(0x7C4DFF)),
        ("Collaboration", rgb(0xE0F7FA), rgb(0x00BCD4)),
    ];
    let n = modules.len() as i32;
    let container_width = n * module_width + (n - 1) * gap + 40;
    let container_x = (width - container_width) / 2;
    rounded_rect(
        &mut canvas,
        Rect::from_ltrb(container_x, y - 10, container_x + container_width, y + module_height + 30),
        12.0,
        None,
        Some(palette.border),
        2.0,
    );
    canvas.text(Point::new(container_x + 20, y - 5), "BUSINESS LOGIC LAYER", FontSpec::bold(10.0), palette.text_secondary);

    let font = FontSpec::bold(11.0);
    let mut module_x = container_x + 20;
    for (name, fill, border) in modules {
        rounded_rect(&mut canvas, Rect::from_ltwh(module_x, y + 15, module_width, module_height), 8.0, Some(fill), Some(border), 2.0);
        let text_w = canvas.text_width(name, font);
        canvas.text(Point::new(module_x + (module_width - text_w) / 2, y + 40), name, font, palette.text);
        module_x += module_width + gap;
    }
    down(&mut canvas, y + module_height + 30);

    layer(
        &mut canvas,
        420,
        "DATA ACCESS LAYER",
        "Knex.js Query Builder + Connection Pooling",
        BoxColors { fill: palette.purple_light, border: palette.purple, text: rgb(0x4527A0) },
    );
    down(&mut canvas, 420 + layer_height);

    layer(
        &mut canvas,
        530,
        "DATABASE LAYER",
        "PostgreSQL 15 + Multi-Tenant Schema Separation",
        BoxColors { fill: palette.success_light, border: palette.success, text: rgb(0x1B5E20) },
    );

    // Side panels
    let (panel_width, panel_height, panel_y) = (160, 200, 180);
    let left = Rect::from_ltwh(20, panel_y, panel_width, panel_height);
    let right = Rect::from_ltwh(width - panel_width - 20, panel_y, panel_width, panel_height);
    let services = BoxColors { fill: rgb(0xFFF8E1), border: rgb(0xFFC107), text: rgb(0xF57F17) };
    let security = BoxColors { fill: rgb(0xFFEBEE), border: rgb(0xF44336), text: rgb(0xC62828) };
    bullet_panel(
        &mut canvas,
        palette,
        left,
        "External Services",
        &["Email (SMTP)", "File Storage", "PDF Generator", "Notifications"],
        services,
    );
    bullet_panel(
        &mut canvas,
        palette,
        right,
        "Security Layer",
        &["JWT Auth", "RBAC", "Rate Limiting", "Data Encryption"],
        security,
    );

    canvas.line(Point::new(left.right, 280), Point::new(start_x, 280), services.border, 2.0);
    canvas.line(Point::new(right.left, 280), Point::new(start_x + layer_width, 280), security.border, 2.0);

    canvas.text(
        Point::new(start_x, height - 40),
        "Multi-tenant architecture with schema-based isolation per organization",
        FontSpec::regular(11.0),
        palette.text_secondary,
    );
    Ok(canvas)
}

const ENTITY_W: i32 = 140;
const ENTITY_H: i32 = 50;

struct Entity {
    name: &'static str,
    at: Point,
    fill: u32,
    border: u32,
}

impl Entity {
    const fn new(name: &'static str, x: i32, y: i32, fill: u32, border: u32) -> Self {
        Self { name, at: Point::new(x, y), fill, border }
    }
    fn bounds(&self) -> Rect {
        Rect::from_ltwh(self.at.x, self.at.y, ENTITY_W, ENTITY_H)
    }
}

const ENTITIES: [Entity; 10] = [
    Entity::new("LEADS", 100, 120, 0xFFF3E0, 0xEF6C00),
    Entity::new("OPPORTUNITIES", 100, 280, 0xE0F7FA, 0x0097A7),
    Entity::new("PROPOSALS", 100, 440, 0xEDE7F6, 0x7B1FA2),
    Entity::new("CLIENTS", 400, 200, 0xE8F5E9, 0x388E3C),
    Entity::new("CONTACTS", 400, 360, 0xE3F2FD, 0x1565C0),
    Entity::new("ENGAGEMENTS", 700, 200, 0xFCE4EC, 0xC2185B),
    Entity::new("ASSIGNMENTS", 700, 360, 0xFFF3E0, 0xE65100),
    Entity::new("INVOICES", 700, 520, 0xE8F5E9, 0x2E7D32),
    Entity::new("DEPLOYMENTS", 950, 360, 0xE1F5FE, 0x0277BD),
    Entity::new("SERVICE_LOGS", 950, 520, 0xF3E5F5, 0x7B1FA2),
];

/// Relationship drawn as a polyline ending in an arrowhead, with a label placed at `label_at`.
struct Relation {
    path: &'static [(i32, i32)],
    label: &'static str,
    label_at: (i32, i32),
}

const RELATIONS: [Relation; 11] = [
    Relation { path: &[(170, 170), (170, 270)], label: "creates", label_at: (130, 210) },
    Relation { path: &[(240, 145), (400, 225)], label: "converts", label_at: (290, 165) },
    Relation { path: &[(240, 305), (400, 250)], label: "", label_at: (0, 0) },
    Relation { path: &[(170, 330), (170, 430)], label: "generates", label_at: (125, 375) },
    Relation { path: &[(470, 250), (470, 350)], label: "has", label_at: (480, 295) },
    Relation { path: &[(540, 225), (700, 225)], label: "signs", label_at: (600, 205) },
    Relation { path: &[(770, 250), (770, 350)], label: "has", label_at: (780, 295) },
    Relation { path: &[(770, 250), (770, 510)], label: "generates", label_at: (720, 420) },
    Relation { path: &[(840, 385), (950, 385)], label: "has", label_at: (875, 365) },
    Relation { path: &[(840, 410), (950, 520)], label: "logs", label_at: (870, 460) },
    Relation {
        path: &[(240, 465), (600, 465), (600, 250), (700, 250)],
        label: "becomes (when accepted)",
        label_at: (380, 445),
    },
];

/// Phase 1 entity-relationship diagram.
pub fn erd(palette: &Palette) -> Result<Canvas> {
    let (width, height) = (1100, 800);
    let mut canvas = Canvas::new(width, height, palette.bg)?;
    title(&mut canvas, palette, "Phase 1 Entity Relationship Diagram");

    let font = FontSpec::bold(12.0);
    for e in &ENTITIES {
        let b = e.bounds();
        canvas.fill_rrect(b.offset(3, 3), 8.0, palette.shadow);
        rounded_rect(&mut canvas, b, 8.0, Some(rgb(e.fill)), Some(rgb(e.border)), 2.0);
        let tw = canvas.text_width(e.name, font);
        canvas.text(Point::new(b.left + (ENTITY_W - tw) / 2, b.top + 17), e.name, font, palette.text);
    }

    let label_font = FontSpec::regular(10.0);
    for rel in &RELATIONS {
        let points: Vec<Point> = rel.path.iter().map(|&p| Point::from(p)).collect();
        if points.len() == 2 {
            arrow(&mut canvas, points[0], points[1], palette.text_secondary);
        } else {
            connector(&mut canvas, &points, palette.text_secondary, true);
        }
        if !rel.label.is_empty() {
            canvas.text(Point::from(rel.label_at), rel.label, label_font, palette.text_secondary);
        }
    }

    // Legend
    let legend_y = 650;
    canvas.text(Point::new(50, legend_y), "Legend:", FontSpec::bold(12.0), palette.text);
    let legend = [
        ("CRM Entities", 0xE8F5E9, 0x388E3C),
        ("Sales Pipeline", 0xFFF3E0, 0xEF6C00),
        ("HR Operations", 0xFFF3E0, 0xE65100),
        ("Finance", 0xE8F5E9, 0x2E7D32),
    ];
    let mut lx = 120;
    for (name, fill, border) in legend {
        rounded_rect(&mut canvas, Rect::from_ltwh(lx, legend_y - 5, 20, 20), 4.0, Some(rgb(fill)), Some(rgb(border)), 2.0);
        canvas.text(Point::new(lx + 30, legend_y - 2), name, FontSpec::regular(11.0), palette.text_secondary);
        lx += 180;
    }

    canvas.text(
        Point::new(50, height - 50),
        "All relationships show primary key \u{2192} foreign key direction. Multi-tenant isolation via organization_id.",
        FontSpec::regular(11.0),
        palette.text_secondary,
    );
    Ok(canvas)
}
