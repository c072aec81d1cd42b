//! ActorEntity trait implementation for the Product domain type.
//!
//! Products are keyed by UPC. The key comes from the payload, so the table's
//! [`IdSequence`] is never touched. Creation rejects empty UPCs and prices that
//! are negative or not finite.

use crate::framework::{ActorEntity, IdSequence, SequenceExhausted};
use crate::model::{Product, ProductCreate, Upc};

use super::ProductError;

impl ActorEntity for Product {
    type Id = Upc;
    type Create = ProductCreate;
    type Context = ();
    type Error = ProductError;

    fn assign_id(params: &ProductCreate, _sequence: &mut IdSequence) -> Result<Upc, SequenceExhausted> {
        Ok(params.upc.clone())
    }

    fn from_create_params(upc: Upc, params: ProductCreate) -> Result<Self, ProductError> {
        if upc.as_str().trim().is_empty() {
            return Err(ProductError::Validation("UPC must not be empty".to_string()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(ProductError::Validation(format!(
                "price for {} must be a non-negative amount, got {}",
                upc, params.price
            )));
        }
        Ok(Self {
            upc,
            description: params.description,
            manufacturer: params.manufacturer,
            style: params.style,
            price: params.price,
            quantity: params.quantity,
        })
    }

    fn id(&self) -> &Upc {
        &self.upc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upc_comes_from_payload() {
        let mut sequence = IdSequence::new();
        let params = ProductCreate::new("076174517163", "hammer", "Stanely Tools", "1", 9.97, 50);
        let upc = Product::assign_id(&params, &mut sequence).unwrap();
        assert_eq!(upc, Upc::from("076174517163"));
        assert_eq!(sequence.peek(), 1, "natural keys must not consume the sequence");
    }

    #[test]
    fn test_rejects_negative_and_non_finite_prices() {
        for price in [-0.01, f64::NAN, f64::INFINITY] {
            let params = ProductCreate::new("A", "thing", "maker", "1", price, 1);
            let result = Product::from_create_params(Upc::from("A"), params);
            assert!(matches!(result, Err(ProductError::Validation(_))), "price {price} accepted");
        }
    }

    #[test]
    fn test_rejects_blank_upc() {
        let params = ProductCreate::new(" ", "thing", "maker", "1", 1.0, 1);
        let result = Product::from_create_params(Upc::from(" "), params);
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }
}
