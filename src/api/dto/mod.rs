//! Data Transfer Objects for REST request/response serialization.

pub mod admin_dto;
pub mod common_dto;
pub mod registration_dto;

pub use admin_dto::*;
pub use common_dto::*;
pub use registration_dto::*;
