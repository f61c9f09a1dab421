// File: crates/mockup-screens/src/wireframes.rs
// Summary: The ten CRM/ERP screen wireframes, composed from mockup-core primitives over fixed sample data.

use mockup_core::types::{HEIGHT, MOBILE_HEIGHT, MOBILE_WIDTH, WIDTH};
use mockup_core::widgets::{
    avatar, badge, button, card, dropdown, header_bar, input, kanban_column, page_header, sidebar, stat_card, table,
};
use mockup_core::{ButtonVariant, Canvas, Cell, DealCard, FontSpec, Palette, Point, Rect, Result, TableStyle, Tone};

const BRAND: &str = "TeamACE";
const USER: (&str, &str) = ("GV", "Gawie V");

const NAV_ITEMS: [&str; 9] = [
    "Dashboard",
    "Clients",
    "BD / Sales",
    "Engagements",
    "HR Outsourcing",
    "Finance",
    "Tasks",
    "Reports",
    "Settings",
];

const NAV_DASHBOARD: usize = 0;
const NAV_CLIENTS: usize = 1;
const NAV_SALES: usize = 2;
const NAV_FINANCE: usize = 5;
const NAV_TASKS: usize = 6;

/// Content area to the right of the sidebar, below the header bar.
#[derive(Clone, Copy, Debug)]
struct Content {
    x: i32,
    y: i32,
    width: i32,
}

/// Desktop frame: background, sidebar with `active` highlighted, header bar.
fn shell(palette: &Palette, active: usize) -> Result<(Canvas, Content)> {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, palette.bg)?;
    let side = sidebar(&mut canvas, palette, WIDTH, HEIGHT, BRAND, &NAV_ITEMS, Some(active));
    header_bar(&mut canvas, palette, side, 0, WIDTH - side, USER);
    let content = Content { x: side + 32, y: 80, width: WIDTH - side - 64 };
    Ok((canvas, content))
}

fn label(canvas: &mut Canvas, palette: &Palette, x: i32, y: i32, text: &str) {
    canvas.text(Point::new(x, y), text, FontSpec::regular(12.0), palette.text_secondary);
}

/// Label / value pairs stacked vertically at `step` spacing.
fn key_values(
    canvas: &mut Canvas,
    palette: &Palette,
    at: Point,
    value_dx: i32,
    step: i32,
    items: &[(&str, &str)],
    value_font: FontSpec,
) {
    let mut y = at.y;
    for &(k, v) in items {
        label(canvas, palette, at.x, y, k);
        canvas.text(Point::new(at.x + value_dx, y), v, value_font, palette.text);
        y += step;
    }
}

/// Label over value, laid out left to right at 200 px intervals.
fn summary_strip(canvas: &mut Canvas, palette: &Palette, at: Point, items: &[(&str, &str, bool)]) {
    let mut x = at.x;
    for &(k, v, highlight) in items {
        label(canvas, palette, x, at.y, k);
        let color = if highlight { palette.primary } else { palette.text };
        canvas.text(Point::new(x, at.y + 18), v, FontSpec::bold(14.0), color);
        x += 200;
    }
}

/// D.1 Global navigation and layout.
pub fn global_layout(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_DASHBOARD)?;
    let y = c.y + 16;

    label(&mut canvas, palette, c.x, y, "Home  /  Dashboard");
    page_header(&mut canvas, palette, c.x, y + 24, c.width, "Dashboard", Some("Welcome back, Gawie"), &[("+ New", true)]);
    card(&mut canvas, palette, Rect::from_ltwh(c.x, y + 100, c.width, HEIGHT - y - 140), Some("Main Content Area"));
    Ok(canvas)
}

/// D.2.1 Client list.
pub fn client_list(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_CLIENTS)?;

    page_header(
        &mut canvas,
        palette,
        c.x,
        c.y,
        c.width,
        "Clients",
        Some("Manage your client relationships"),
        &[("+ New Client", true), ("Export", false)],
    );

    let filter_y = c.y + 56;
    input(&mut canvas, palette, Point::new(c.x, filter_y), "Search clients...", 280, None);
    dropdown(&mut canvas, palette, Point::new(c.x + 300, filter_y), "Type: All", 140);
    dropdown(&mut canvas, palette, Point::new(c.x + 460, filter_y), "Tier: All", 140);
    dropdown(&mut canvas, palette, Point::new(c.x + 620, filter_y), "Status: Active", 160);

    let headers = ["Company Name", "Industry", "Type", "Tier", "Account Mgr", ""];
    let widths = [220, 140, 100, 120, 160, 60];
    let active = || Cell::badge("Active", Tone::Success);
    let rows: Vec<Vec<Cell>> = vec![
        vec!["Acme Corporation".into(), "Technology".into(), active(), "Premium".into(), "John Doe".into(), "...".into()],
        vec!["Beta Industries".into(), "Manufacturing".into(), active(), "Standard".into(), "Jane Smith".into(), "...".into()],
        vec!["Gamma Holdings".into(), "Finance".into(), Cell::badge("Prospect", Tone::Warning), "-".into(), "John Doe".into(), "...".into()],
        vec!["Delta Services".into(), "Consulting".into(), active(), "Enterprise".into(), "Mike Brown".into(), "...".into()],
        vec!["Echo Limited".into(), "Technology".into(), active(), "Standard".into(), "Sarah Wilson".into(), "...".into()],
    ];
    table(&mut canvas, palette, Point::new(c.x, filter_y + 56), c.width, &headers, &rows, Some(&widths[..]), TableStyle::default());

    label(&mut canvas, palette, c.x, HEIGHT - 60, "Showing 1-20 of 156 clients");
    button(&mut canvas, palette, Point::new(c.x + c.width - 180, HEIGHT - 64), "Previous", (80, 32), ButtonVariant::Default);
    button(&mut canvas, palette, Point::new(c.x + c.width - 90, HEIGHT - 64), "Next", (80, 32), ButtonVariant::Primary);
    Ok(canvas)
}

/// D.2.2 Client detail.
pub fn client_detail(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_CLIENTS)?;

    canvas.text(Point::new(c.x, c.y), "< Back to Clients", FontSpec::regular(12.0), palette.primary);

    let header_y = c.y + 32;
    card(&mut canvas, palette, Rect::from_ltwh(c.x, header_y, c.width, 100), None);
    avatar(&mut canvas, palette, Point::new(c.x + 20, header_y + 20), 60, "AC");
    canvas.text(Point::new(c.x + 100, header_y + 20), "Acme Corporation", FontSpec::bold(20.0), palette.text);

    let mut badge_x = c.x + 100;
    for (text, tone) in [("Active", Tone::Success), ("Premium", Tone::Primary), ("Technology", Tone::Light)] {
        badge_x += badge(&mut canvas, palette, Point::new(badge_x, header_y + 50), text, tone, false) + 8;
    }

    button(&mut canvas, palette, Point::new(c.x + c.width - 160, header_y + 30), "Edit", (70, 32), ButtonVariant::Default);
    button(&mut canvas, palette, Point::new(c.x + c.width - 80, header_y + 30), "Delete", (70, 32), ButtonVariant::Danger);

    // Tabs
    let tab_y = header_y + 116;
    let mut tab_x = c.x;
    for (i, tab) in ["Overview", "Contacts", "Engagements", "Documents", "Activities", "Invoices"].iter().enumerate() {
        let active = i == 0;
        let color = if active { palette.primary } else { palette.text_secondary };
        let font = if active { FontSpec::bold(13.0) } else { FontSpec::regular(13.0) };
        canvas.text(Point::new(tab_x, tab_y), tab, font, color);
        let chars = tab.chars().count() as i32;
        if active {
            canvas.fill_rect(Rect::from_ltrb(tab_x, tab_y + 24, tab_x + chars * 8, tab_y + 27), palette.primary);
        }
        tab_x += chars * 9 + 32;
    }
    canvas.line(Point::new(c.x, tab_y + 28), Point::new(c.x + c.width, tab_y + 28), palette.border, 1.0);

    let col_width = (c.width - 32) / 2;
    let col1_x = c.x;
    let col2_x = c.x + c.width / 2 + 16;
    let detail_y = tab_y + 48;

    card(&mut canvas, palette, Rect::from_ltwh(col1_x, detail_y, col_width, 180), Some("Company Information"));
    key_values(
        &mut canvas,
        palette,
        Point::new(col1_x + 16, detail_y + 52),
        104,
        28,
        &[
            ("Registration:", "RC-123456"),
            ("TIN:", "1234567890"),
            ("Phone:", "+234 801 234 5678"),
            ("Email:", "info@acme.com"),
        ],
        FontSpec::regular(12.0),
    );

    card(&mut canvas, palette, Rect::from_ltwh(col2_x, detail_y, col_width, 180), Some("Quick Stats"));
    key_values(
        &mut canvas,
        palette,
        Point::new(col2_x + 16, detail_y + 52),
        col_width - 96,
        28,
        &[
            ("Active Engagements:", "3"),
            ("Deployed Staff:", "12"),
            ("Outstanding:", "N2.5M"),
            ("Total Revenue:", "N45M"),
        ],
        FontSpec::bold(12.0),
    );
    Ok(canvas)
}

/// D.3.1 Sales pipeline kanban board.
pub fn pipeline_kanban(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_SALES)?;

    page_header(
        &mut canvas,
        palette,
        c.x,
        c.y,
        c.width,
        "Sales Pipeline",
        None,
        &[("+ New Opportunity", true), ("Filter", false)],
    );

    let stat_y = c.y + 48;
    card(&mut canvas, palette, Rect::from_ltwh(c.x, stat_y, c.width, 50), None);
    summary_strip(
        &mut canvas,
        palette,
        Point::new(c.x + 24, stat_y + 10),
        &[("Total Weighted:", "N125.5M", true), ("Unweighted:", "N250M", false), ("Opportunities:", "42", false)],
    );

    let kanban_y = stat_y + 70;
    let col_width = (c.width - 48) / 5;
    let col_height = HEIGHT - kanban_y - 32;

    let deal = |title, value, owner| DealCard { title, value, owner };
    let columns: [(&str, &str, &str, Vec<DealCard>); 5] = [
        ("Qualification", "5", "N5M", vec![deal("Acme Deal", "N2M", "John D."), deal("Echo Ltd", "N3M", "Jane S.")]),
        ("Needs Analysis", "8", "N15M", vec![deal("Beta Corp", "N8M", "Jane S."), deal("Foxtrot Inc", "N7M", "John D.")]),
        ("Proposal Sent", "12", "N35M", vec![deal("Delta Co", "N15M", "Mike B."), deal("Golf Inc", "N20M", "Jane S.")]),
        ("Negotiation", "10", "N40M", vec![deal("Gamma Corp", "N25M", "John D.")]),
        ("Closed Won", "7", "N155M", vec![deal("Hotel Ltd", "N50M", "Mike B.")]),
    ];

    let mut col_x = c.x;
    for (title, count, value, cards) in &columns {
        let bounds = Rect::from_ltwh(col_x, kanban_y, col_width - 8, col_height);
        kanban_column(&mut canvas, palette, bounds, title, count, value, cards);
        col_x += col_width + 8;
    }
    Ok(canvas)
}

/// D.5.1 Invoice list.
pub fn invoice_list(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_FINANCE)?;

    page_header(
        &mut canvas,
        palette,
        c.x,
        c.y,
        c.width,
        "Invoices",
        Some("Manage billing and payments"),
        &[("+ New Invoice", true)],
    );

    let filter_y = c.y + 56;
    input(&mut canvas, palette, Point::new(c.x, filter_y), "Search invoices...", 280, None);
    dropdown(&mut canvas, palette, Point::new(c.x + 300, filter_y), "Status: All", 140);
    dropdown(&mut canvas, palette, Point::new(c.x + 460, filter_y), "Client: All", 180);
    dropdown(&mut canvas, palette, Point::new(c.x + 660, filter_y), "This Month", 140);

    let table_y = filter_y + 56;
    let headers = ["Invoice #", "Client", "Amount", "Status", "Due Date", ""];
    let widths = [150, 200, 150, 100, 120, 80];
    let row = |no: &str, client: &str, amount: &str, status: (&str, &str), due: &str| -> Vec<Cell> {
        vec![no.into(), client.into(), amount.into(), status.into(), due.into(), "...".into()]
    };
    let rows = vec![
        row("INV-2025-0042", "Acme Corporation", "N2,500,000", ("Paid", "success"), "Nov 15"),
        row("INV-2025-0041", "Beta Industries", "N1,800,000", ("Overdue", "danger"), "Nov 10"),
        row("INV-2025-0040", "Gamma Holdings", "N3,200,000", ("Sent", "info"), "Nov 30"),
        row("INV-2025-0039", "Delta Services", "N950,000", ("Draft", "light"), "-"),
        row("INV-2025-0038", "Acme Corporation", "N2,500,000", ("Partial", "warning"), "Nov 20"),
    ];
    let table_height = table(
        &mut canvas,
        palette,
        Point::new(c.x, table_y),
        c.width,
        &headers,
        &rows,
        Some(&widths[..]),
        TableStyle::default(),
    );

    let summary_y = table_y + table_height + 24;
    card(&mut canvas, palette, Rect::from_ltwh(c.x, summary_y, c.width, 60), None);
    summary_strip(
        &mut canvas,
        palette,
        Point::new(c.x + 24, summary_y + 14),
        &[("Total:", "N10,950,000", false), ("Paid:", "N2,500,000", false), ("Outstanding:", "N8,450,000", false)],
    );
    Ok(canvas)
}

/// D.5.2 Invoice create form.
pub fn invoice_create(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_FINANCE)?;

    page_header(
        &mut canvas,
        palette,
        c.x,
        c.y,
        c.width,
        "Create Invoice",
        None,
        &[("Send", true), ("Save Draft", false), ("Preview", false)],
    );

    let form_y = c.y + 56;
    card(&mut canvas, palette, Rect::from_ltwh(c.x, form_y, c.width, 140), None);

    let field_label = |canvas: &mut Canvas, x: i32, y: i32, text: &str| {
        canvas.text(Point::new(x, y), text, FontSpec::regular(11.0), palette.text_secondary);
    };

    let mut field_y = form_y + 20;
    field_label(&mut canvas, c.x + 20, field_y, "Client *");
    dropdown(&mut canvas, palette, Point::new(c.x + 20, field_y + 18), "Acme Corporation", 280);
    field_label(&mut canvas, c.x + 340, field_y, "Engagement");
    dropdown(&mut canvas, palette, Point::new(c.x + 340, field_y + 18), "HR Outsourcing - 2024", 280);

    field_y += 70;
    field_label(&mut canvas, c.x + 20, field_y, "Invoice Date *");
    input(&mut canvas, palette, Point::new(c.x + 20, field_y + 18), "", 180, Some("Nov 30, 2025"));
    field_label(&mut canvas, c.x + 220, field_y, "Due Date *");
    input(&mut canvas, palette, Point::new(c.x + 220, field_y + 18), "", 180, Some("Dec 30, 2025"));
    field_label(&mut canvas, c.x + 420, field_y, "Payment Terms");
    dropdown(&mut canvas, palette, Point::new(c.x + 420, field_y + 18), "Net 30", 140);

    // Line items
    let items_y = form_y + 160;
    canvas.text(Point::new(c.x, items_y), "Line Items", FontSpec::bold(14.0), palette.text);
    button(&mut canvas, palette, Point::new(c.x + c.width - 120, items_y - 4), "+ Add Item", (110, 28), ButtonVariant::Default);

    let headers = ["#", "Description", "Qty", "Unit", "Rate", "Total", ""];
    let widths = [40, 320, 80, 80, 120, 120, 40];
    let rows: Vec<Vec<Cell>> = [
        ["1", "HR Outsourcing - John Smith", "1", "Month", "N350,000", "N350,000", "x"],
        ["2", "HR Outsourcing - Jane Doe", "1", "Month", "N300,000", "N300,000", "x"],
        ["3", "Overtime Hours - November", "24", "Hours", "N5,000", "N120,000", "x"],
    ]
    .iter()
    .map(|r| r.iter().map(|&s| Cell::from(s)).collect())
    .collect();
    table(
        &mut canvas,
        palette,
        Point::new(c.x, items_y + 32),
        c.width,
        &headers,
        &rows,
        Some(&widths[..]),
        TableStyle::default(),
    );

    // Totals
    let totals_x = c.x + c.width - 280;
    let totals_y = items_y + 220;
    card(&mut canvas, palette, Rect::from_ltwh(totals_x, totals_y, 280, 140), None);
    key_values(
        &mut canvas,
        palette,
        Point::new(totals_x + 20, totals_y + 16),
        160,
        24,
        &[("Subtotal:", "N770,000.00"), ("VAT (7.5%):", "N57,750.00"), ("WHT (5%):", "(N38,500.00)")],
        FontSpec::regular(12.0),
    );
    let rule_y = totals_y + 16 + 3 * 24;
    canvas.line(Point::new(totals_x + 20, rule_y), Point::new(totals_x + 260, rule_y), palette.border, 1.0);
    canvas.text(Point::new(totals_x + 20, rule_y + 12), "TOTAL:", FontSpec::bold(14.0), palette.text);
    canvas.text(Point::new(totals_x + 140, rule_y + 12), "N789,250.00", FontSpec::bold(16.0), palette.primary);
    Ok(canvas)
}

/// D.7 Dashboard.
pub fn dashboard(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_DASHBOARD)?;

    canvas.text(Point::new(c.x, c.y), "Dashboard", FontSpec::bold(24.0), palette.text);
    canvas.text(Point::new(c.x, c.y + 32), "Welcome back, Gawie!", FontSpec::regular(13.0), palette.text_secondary);

    // KPI row
    let stat_y = c.y + 64;
    let stat_width = (c.width - 48) / 4;
    let stats = [
        ("Active Clients", "42", "3", true),
        ("Open Leads", "18", "5", true),
        ("Pipeline Value", "N125.5M", "12%", true),
        ("Outstanding", "N13.15M", "8%", false),
    ];
    let mut stat_x = c.x;
    for (label, value, trend, up) in stats {
        stat_card(&mut canvas, palette, Rect::from_ltwh(stat_x, stat_y, stat_width, 100), label, value, Some((trend, up)));
        stat_x += stat_width + 16;
    }

    // Tasks and activities
    let row2_y = stat_y + 120;
    let col_width = (c.width - 16) / 2;
    let right_x = c.x + col_width + 16;

    card(&mut canvas, palette, Rect::from_ltwh(c.x, row2_y, col_width, 200), Some("My Tasks (5 due today)"));
    let tasks = [
        ("Follow up with Acme on proposal", "High", Tone::Danger),
        ("Review service logs for billing", "Medium", Tone::Warning),
        ("Send payment reminder", "High", Tone::Danger),
    ];
    let mut task_y = row2_y + 56;
    for (task, priority, tone) in tasks {
        canvas.stroke_oval(Rect::from_ltrb(c.x + 20, task_y + 4, c.x + 32, task_y + 16), palette.border, 2.0);
        canvas.text(Point::new(c.x + 44, task_y), task, FontSpec::regular(12.0), palette.text);
        badge(&mut canvas, palette, Point::new(c.x + col_width - 80, task_y), priority, tone, true);
        task_y += 36;
    }
    canvas.text(Point::new(c.x + 20, row2_y + 172), "View All Tasks >", FontSpec::regular(12.0), palette.primary);

    card(&mut canvas, palette, Rect::from_ltwh(right_x, row2_y, col_width, 200), Some("Recent Activities"));
    let activities = [
        "John created Invoice INV-2025-0043",
        "Jane updated Client: Acme Corp",
        "Mike logged activity on Beta Ind.",
        "Sarah submitted leave request",
    ];
    let mut activity_y = row2_y + 56;
    for activity in activities {
        canvas.fill_oval(Rect::from_ltrb(right_x + 20, activity_y + 2, right_x + 32, activity_y + 14), palette.primary_light);
        canvas.text(Point::new(right_x + 44, activity_y), activity, FontSpec::regular(12.0), palette.text);
        activity_y += 32;
    }

    // Pipeline bars and receivables aging
    let row3_y = row2_y + 220;
    card(&mut canvas, palette, Rect::from_ltwh(c.x, row3_y, col_width, 140), Some("Pipeline Summary"));
    let stages = [
        ("Qualification", 12, "N15M"),
        ("Needs Analysis", 26, "N32M"),
        ("Proposal Sent", 36, "N45M"),
        ("Negotiation", 27, "N33.5M"),
    ];
    let mut bar_y = row3_y + 52;
    for (stage, pct, value) in stages {
        canvas.text(Point::new(c.x + 20, bar_y), stage, FontSpec::regular(11.0), palette.text_secondary);
        let bar_width = (col_width - 200) * pct / 100;
        canvas.fill_rrect(Rect::from_ltwh(c.x + 140, bar_y, bar_width, 16), 4.0, palette.primary);
        canvas.text(Point::new(c.x + col_width - 60, bar_y), value, FontSpec::regular(11.0), palette.text);
        bar_y += 22;
    }

    card(&mut canvas, palette, Rect::from_ltwh(right_x, row3_y, col_width, 140), Some("Receivables Aging"));
    key_values(
        &mut canvas,
        palette,
        Point::new(right_x + 20, row3_y + 52),
        144,
        22,
        &[("Current:", "N5.2M"), ("1-30 Days:", "N3.8M"), ("31-60 Days:", "N2.1M"), ("60+ Days:", "N2.05M")],
        FontSpec::bold(12.0),
    );
    Ok(canvas)
}

/// D.6.1 Task list.
pub fn task_list(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_TASKS)?;

    page_header(
        &mut canvas,
        palette,
        c.x,
        c.y,
        c.width,
        "My Tasks",
        None,
        &[("+ New Task", true), ("Sort", false), ("Filter", false)],
    );

    // Filter pills
    let tab_y = c.y + 52;
    let mut tab_x = c.x;
    for (i, (tab, count)) in [("All", "24"), ("Open", "8"), ("In Progress", "3"), ("Completed", "13")].iter().enumerate() {
        let active = i == 1;
        let (bg, fg) = if active { (palette.primary, palette.white) } else { (palette.white, palette.text) };
        let text = format!("{tab} ({count})");
        let width = text.chars().count() as i32 * 8 + 24;
        canvas.fill_rrect(Rect::from_ltwh(tab_x, tab_y, width, 32), 16.0, bg);
        canvas.text(Point::new(tab_x + 12, tab_y + 8), &text, FontSpec::regular(12.0), fg);
        tab_x += width + 12;
    }

    let mut group_y = tab_y + 52;
    canvas.text(Point::new(c.x, group_y), "TODAY (3)", FontSpec::bold(12.0), palette.text_secondary);
    group_y += 28;

    let today = [
        ("Follow up with Acme on proposal response", "Proposal PRP-2025-0023", "High"),
        ("Review service logs for November billing", "Client: Beta Industries", "Medium"),
        ("Send payment reminder to Gamma Holdings", "Invoice INV-2025-0040", "High"),
    ];
    for (title, related, priority) in today {
        card(&mut canvas, palette, Rect::from_ltwh(c.x, group_y, c.width, 72), None);
        canvas.stroke_oval(Rect::from_ltwh(c.x + 20, group_y + 24, 20, 20), palette.border, 2.0);
        canvas.text(Point::new(c.x + 56, group_y + 16), title, FontSpec::bold(13.0), palette.text);
        canvas.text(Point::new(c.x + 56, group_y + 40), related, FontSpec::regular(11.0), palette.text_secondary);
        let tone = if priority == "High" { Tone::Danger } else { Tone::Warning };
        badge(&mut canvas, palette, Point::new(c.x + c.width - 80, group_y + 24), priority, tone, false);
        group_y += 84;
    }

    group_y += 16;
    canvas.text(Point::new(c.x, group_y), "THIS WEEK (5)", FontSpec::bold(12.0), palette.text_secondary);
    group_y += 28;

    for (title, due) in [("Prepare monthly outsourcing report", "Dec 3"), ("Schedule performance review - John Smith", "Dec 4")] {
        card(&mut canvas, palette, Rect::from_ltwh(c.x, group_y, c.width, 56), None);
        canvas.stroke_oval(Rect::from_ltwh(c.x + 20, group_y + 16, 20, 20), palette.border, 2.0);
        canvas.text(Point::new(c.x + 56, group_y + 18), title, FontSpec::regular(13.0), palette.text);
        let due = format!("Due: {due}");
        canvas.text(Point::new(c.x + c.width - 80, group_y + 18), &due, FontSpec::regular(11.0), palette.text_secondary);
        group_y += 68;
    }
    Ok(canvas)
}

/// D.6.2 Approval queue.
pub fn approval_queue(palette: &Palette) -> Result<Canvas> {
    let (mut canvas, c) = shell(palette, NAV_TASKS)?;

    page_header(
        &mut canvas,
        palette,
        c.x,
        c.y,
        c.width,
        "Pending Approvals",
        Some("You have 5 pending approvals"),
        &[("Refresh", false)],
    );

    let approvals = [
        ("INVOICE APPROVAL", "Invoice INV-2025-0043 for Acme Corporation - N2,500,000", "John Doe", "2 hours ago", Tone::Info),
        ("LEAVE REQUEST", "Annual Leave: Dec 20-27, 2025 (5 working days)", "Sarah Wilson", "1 day ago", Tone::Warning),
        ("EXPENSE CLAIM", "Travel Expenses: Client visit to Port Harcourt - N85,000", "Mike Brown", "2 days ago", Tone::Success),
    ];

    let mut card_y = c.y + 64;
    for (kind, desc, requester, when, tone) in approvals {
        card(&mut canvas, palette, Rect::from_ltwh(c.x, card_y, c.width, 120), None);

        let (tint, accent) = palette.tone_tint(tone);
        canvas.fill_rrect(Rect::from_ltwh(c.x + 20, card_y + 20, 40, 40), 8.0, tint);
        canvas.stroke_oval(Rect::from_ltwh(c.x + 30, card_y + 30, 20, 20), accent, 2.0);

        badge(&mut canvas, palette, Point::new(c.x + 76, card_y + 20), kind, tone, true);
        canvas.text(Point::new(c.x + c.width - 100, card_y + 20), when, FontSpec::regular(11.0), palette.text_light);
        canvas.text(Point::new(c.x + 76, card_y + 46), desc, FontSpec::regular(13.0), palette.text);
        let by = format!("Requested by: {requester}");
        canvas.text(Point::new(c.x + 76, card_y + 70), &by, FontSpec::regular(12.0), palette.text_secondary);

        let btn_y = card_y + 76;
        button(&mut canvas, palette, Point::new(c.x + c.width - 200, btn_y), "Reject", (80, 28), ButtonVariant::Outline);
        button(&mut canvas, palette, Point::new(c.x + c.width - 100, btn_y), "Approve", (80, 28), ButtonVariant::Success);

        card_y += 136;
    }
    Ok(canvas)
}

/// D.8 Mobile responsive view.
pub fn mobile_view(palette: &Palette) -> Result<Canvas> {
    let (w, h) = (MOBILE_WIDTH, MOBILE_HEIGHT);
    let mut canvas = Canvas::new(w, h, palette.bg)?;

    // App bar with notification and menu icons
    canvas.fill_rect(Rect::from_ltwh(0, 0, w, 56), palette.sidebar);
    canvas.text(Point::new(16, 18), BRAND, FontSpec::bold(18.0), palette.white);
    for i in 0..3 {
        canvas.fill_rect(Rect::from_ltrb(w - 40, 20 + i * 8, w - 16, 23 + i * 8), palette.white);
    }
    canvas.stroke_oval(Rect::from_ltrb(w - 70, 18, w - 50, 38), palette.white, 2.0);

    canvas.fill_rect(Rect::from_ltrb(0, 56, w, 100), palette.white);
    canvas.text(Point::new(16, 70), "Dashboard", FontSpec::bold(18.0), palette.text);

    // 2x2 KPI grid
    let card_width = (w - 48) / 2;
    let card_height = 80;
    let stats = [("Active Clients", "42"), ("Open Leads", "18"), ("Pipeline", "N125M"), ("Outstanding", "N13M")];
    for (i, (label, value)) in stats.iter().enumerate() {
        let (row, col) = (i as i32 / 2, i as i32 % 2);
        let x = 16 + col * (card_width + 16);
        let y = 116 + row * (card_height + 12);
        card(&mut canvas, palette, Rect::from_ltwh(x, y, card_width, card_height), None);
        canvas.text(Point::new(x + 12, y + 12), label, FontSpec::regular(11.0), palette.text_secondary);
        canvas.text(Point::new(x + 12, y + 32), value, FontSpec::bold(20.0), palette.text);
    }

    // Client card
    let client_y = 320;
    card(&mut canvas, palette, Rect::from_ltwh(16, client_y, w - 32, 140), None);
    avatar(&mut canvas, palette, Point::new(32, client_y + 16), 48, "AC");
    canvas.text(Point::new(92, client_y + 20), "Acme Corporation", FontSpec::bold(14.0), palette.text);
    let badge_x = 92 + badge(&mut canvas, palette, Point::new(92, client_y + 44), "Active", Tone::Success, true) + 8;
    badge(&mut canvas, palette, Point::new(badge_x, client_y + 44), "Technology", Tone::Light, true);
    canvas.line(Point::new(32, client_y + 72), Point::new(w - 48, client_y + 72), palette.border, 1.0);
    canvas.text(Point::new(32, client_y + 84), "Engagements: 3", FontSpec::regular(12.0), palette.text);
    canvas.text(Point::new(32, client_y + 104), "Outstanding: N2.5M", FontSpec::regular(12.0), palette.text);

    let btn_width = (w - 80) / 3;
    let btn_y = client_y + 160;
    for (i, (label, variant)) in [("Call", ButtonVariant::Outline), ("Email", ButtonVariant::Outline), ("View", ButtonVariant::Primary)]
        .into_iter()
        .enumerate()
    {
        let x = 24 + (btn_width + 12) * i as i32;
        button(&mut canvas, palette, Point::new(x, btn_y), label, (btn_width, 36), variant);
    }

    // Bottom navigation
    let nav_y = h - 64;
    canvas.fill_rect(Rect::from_ltrb(0, nav_y, w, h), palette.white);
    canvas.line(Point::new(0, nav_y), Point::new(w, nav_y), palette.border, 1.0);
    let mut nav_x = w / 8;
    for (i, item) in ["Home", "Clients", "Tasks", "More"].iter().enumerate() {
        let color = if i == 0 { palette.primary } else { palette.text_secondary };
        canvas.stroke_oval(Rect::from_ltrb(nav_x - 12, nav_y + 12, nav_x + 12, nav_y + 36), color, 2.0);
        let font = FontSpec::regular(10.0);
        let tw = canvas.text_width(item, font);
        canvas.text(Point::new(nav_x - tw / 2, nav_y + 42), item, font, color);
        nav_x += w / 4;
    }
    Ok(canvas)
}
