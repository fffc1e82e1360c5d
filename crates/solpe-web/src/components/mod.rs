mod dashboard_layout;
mod section;

pub use dashboard_layout::DashboardLayout;
pub use section::Section;
