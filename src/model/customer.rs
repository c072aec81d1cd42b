use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned customer identifier. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered customer.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait.
/// The `id` is drawn from the table's sequence when the customer is created, so
/// a `Customer` value always carries a real identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub last_name: String,
    pub first_name: String,
    pub street: String,
    pub zip: String,
    pub phone: String,
}

impl Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer {}: {}, {} - {} {} - {}",
            self.id, self.last_name, self.first_name, self.street, self.zip, self.phone
        )
    }
}

/// Payload for creating a new customer. Carries no identifier.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub last_name: String,
    pub first_name: String,
    pub street: String,
    pub zip: String,
    pub phone: String,
}

impl CustomerCreate {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        street: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            street: street.into(),
            zip: zip.into(),
            phone: phone.into(),
        }
    }
}
