//! Demo records loaded into an empty store at startup.

use crate::model::{CustomerCreate, ProductCreate};

pub fn products() -> Vec<ProductCreate> {
    vec![
        ProductCreate::new("076174517163", "16 oz. hickory hammer", "Stanely Tools", "1", 9.97, 50),
        ProductCreate::new("076167817162", "20 volt drill driver", "Atomic Tools", "5", 69.99, 10),
        ProductCreate::new("076111117166", "10 in adjustable wrench", "Husky Tools", "2", 19.97, 100),
    ]
}

pub fn customers() -> Vec<CustomerCreate> {
    vec![
        CustomerCreate::new("Smith", "John", "Flower road 1112", "90809", "9091254327"),
        CustomerCreate::new("Dol", "Bob", "Lewis lane 333", "90812", "9041153367"),
        CustomerCreate::new("Frank", "Franky", "Olive street E 281", "91842", "5123448695"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_upcs_are_distinct() {
        let upcs: HashSet<_> = products().into_iter().map(|p| p.upc).collect();
        assert_eq!(upcs.len(), 3);
    }
}
