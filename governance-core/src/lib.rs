//! governance-core: request-governance layer shared by the store-management services.
//!
//! Pure, request-scoped decision logic that sits in front of business logic:
//! ordered access-requirement evaluation, partial-update presence validation,
//! paginated result packaging, and uniform validation problem documents.
//! Transport, persistence, and authentication live in the service crates.
pub mod authorization;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod problem;
pub mod validation;

pub use error::AppError;
pub use extract::ValidatedJson;
pub use pagination::PagedList;
pub use problem::ValidationProblem;

pub use axum;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
