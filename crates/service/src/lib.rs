//! Permit tracking core.
//! - `Category` names the two fixed permit classes.
//! - `store` holds permits for one category behind a single lock.
//! - `permit_service` routes category names to stores and owns nothing else.

pub mod category;
pub mod errors;
pub mod permit;
pub mod permit_service;
pub mod store;

pub use category::Category;
pub use errors::PermitError;
pub use permit::{Permit, PermitInput};
pub use permit_service::PermitService;
