//! ActorEntity trait implementation for the Customer domain type.

use crate::framework::{ActorEntity, IdSequence, SequenceExhausted};
use crate::model::{Customer, CustomerCreate, CustomerId};

use super::CustomerError;

impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Context = ();
    type Error = CustomerError;

    fn assign_id(_params: &CustomerCreate, sequence: &mut IdSequence) -> Result<CustomerId, SequenceExhausted> {
        sequence.next_value().map(CustomerId)
    }

    /// Builds the customer around its freshly drawn id.
    ///
    /// Both name parts are required.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        if params.last_name.trim().is_empty() || params.first_name.trim().is_empty() {
            return Err(CustomerError::Validation(format!(
                "customer {id} needs both a first and a last name"
            )));
        }
        Ok(Self {
            id,
            last_name: params.last_name,
            first_name: params.first_name,
            street: params.street,
            zip: params.zip,
            phone: params.phone,
        })
    }

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn surrogate(&self) -> Option<u64> {
        Some(self.id.0)
    }
}
