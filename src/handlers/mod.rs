pub mod health;
pub mod images;

pub use health::health_check;
pub use images::{create_image, edit_image};
