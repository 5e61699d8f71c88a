pub mod health;
pub mod homes;
pub mod users;

pub use health::{health_handler, readiness_handler, ReadinessProbe};
pub use homes::{create_home_handler, get_home_handler, list_homes_handler, update_home_handler};
pub use users::{login_handler, register_handler};
