//! Per-resource façades over the HTTP client.
//!
//! Each façade holds its own `HttpClient` handle and does pure path and
//! query assembly; no validation or transformation happens at this layer.

pub mod albums;
pub mod comments;
pub mod posts;
pub mod todos;
pub mod users;

pub use albums::AlbumsClient;
pub use comments::CommentsClient;
pub use posts::PostsClient;
pub use todos::TodosClient;
pub use users::UsersClient;
