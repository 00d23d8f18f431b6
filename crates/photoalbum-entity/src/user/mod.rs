//! User domain entities.

pub mod model;
pub mod registration;

pub use model::User;
pub use registration::RegistrationForm;
