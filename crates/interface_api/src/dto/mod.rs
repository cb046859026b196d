//! Request and response bodies

pub mod session;
pub mod admin;
pub mod claims;
