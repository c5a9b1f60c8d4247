pub mod application;
pub mod listing;
pub mod user;

pub use application::*;
pub use listing::*;
pub use user::*;

use serde::Serialize;

/// Plain acknowledgment body for update/delete operations.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
