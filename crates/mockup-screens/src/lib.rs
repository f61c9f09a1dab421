// File: crates/mockup-screens/src/lib.rs
// Summary: Registry of the named mock-ups rendered by `mockup-gen`.

pub mod diagrams;
pub mod wireframes;

use mockup_core::MockupFn;

/// Screen wireframes, in document order.
pub const WIREFRAMES: [MockupFn; 10] = [
    MockupFn::new("01_global_layout.png", wireframes::global_layout),
    MockupFn::new("02_client_list.png", wireframes::client_list),
    MockupFn::new("03_client_detail.png", wireframes::client_detail),
    MockupFn::new("04_pipeline_kanban.png", wireframes::pipeline_kanban),
    MockupFn::new("05_invoice_list.png", wireframes::invoice_list),
    MockupFn::new("06_invoice_create.png", wireframes::invoice_create),
    MockupFn::new("07_dashboard.png", wireframes::dashboard),
    MockupFn::new("08_task_list.png", wireframes::task_list),
    MockupFn::new("09_approval_queue.png", wireframes::approval_queue),
    MockupFn::new("10_mobile_view.png", wireframes::mobile_view),
];

/// Technical diagrams.
pub const DIAGRAMS: [MockupFn; 2] = [
    MockupFn::new("architecture_diagram.png", diagrams::architecture),
    MockupFn::new("erd_diagram.png", diagrams::erd),
];

/// Every mock-up: wireframes first, then diagrams.
pub fn all() -> Vec<MockupFn> {
    WIREFRAMES.iter().chain(DIAGRAMS.iter()).copied().collect()
}
