//! API layer for the Comments domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::CommentsState;
pub use routes::routes;
