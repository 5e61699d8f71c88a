#[cfg(test)]
use mockall::automock;

use crate::domain::value_objects::HomeId;

/// Port for minting fresh, globally unique home ids
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> HomeId;
}
