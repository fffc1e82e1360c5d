mod dashboard;
mod landing;
mod not_found;
mod vault;

pub use dashboard::DashboardHome;
pub use landing::LandingPage;
pub use not_found::NotFound;
pub use vault::VaultPage;
