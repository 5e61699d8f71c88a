mod argon2_password_hasher;
mod object_id_generator;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use object_id_generator::ObjectIdGenerator;
