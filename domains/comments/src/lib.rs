//! Comments domain: visitor comments and ratings attached to artifacts

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::{Comment, CommentDraft, ANONYMOUS_USER_NAME};

pub use repository::{
    CommentRepository, CommentStore, CommentsRepositories, InMemoryCommentRepository,
};

pub use api::routes;
pub use api::CommentsState;
