#[cfg(test)]
use mockall::automock;

/// Port for one-way password hashing
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, String>;

    /// `false` for a wrong password and for an unreadable hash alike
    fn verify(&self, password: &str, hash: &str) -> bool;
}
