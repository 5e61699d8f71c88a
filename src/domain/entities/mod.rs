mod home;
mod photo;
mod user;

pub use home::{Home, HomeDetails};
pub use photo::{Photo, FALLBACK_CONTENT_TYPE};
pub use user::User;

#[cfg(test)]
pub(crate) use home::test_support;
