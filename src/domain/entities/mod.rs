pub mod author;
pub mod comment;
pub mod request;
pub mod site;

pub use author::Author;
pub use comment::{Comment, CommentBuilder};
pub use request::Request;
pub use site::Site;
