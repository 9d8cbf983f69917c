pub mod app;
pub mod diagnostics;
pub mod photos;
pub mod users;

pub use app::{health_check, index, metrics};
pub use diagnostics::{schema_diagnostics, schema_info};
pub use photos::photos_of_user;
pub use users::{get_user, list_users};
