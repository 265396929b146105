//! # Demonstration Data
//!
//! The three products shown on a first run, before anything was saved.
//!
//! | id | name                   | price  | qty | category    | available |
//! |----|------------------------|--------|-----|-------------|-----------|
//! | 1  | Smartphone Samsung     | 699.99 | 15  | electronics | yes       |
//! | 2  | T-shirt Cotton         | 24.99  | 3   | clothing    | yes       |
//! | 3  | Cafetière Programmable | 89.99  | 0   | home        | no        |
//!
//! Between them they cover all three stock levels.

use catalog_core::{Category, Product, DEFAULT_CURRENCY};

/// Returns a fresh copy of the demonstration products.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Smartphone Samsung".to_string(),
            price: 699.99,
            quantity: 15,
            description: "Smartphone Android avec écran 6.5\" et triple caméra".to_string(),
            image_data: None,
            available: true,
            category: Category::Electronics,
            currency: DEFAULT_CURRENCY.to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "T-shirt Cotton".to_string(),
            price: 24.99,
            quantity: 3,
            description: "T-shirt 100% coton, différentes couleurs disponibles".to_string(),
            image_data: None,
            available: true,
            category: Category::Clothing,
            currency: DEFAULT_CURRENCY.to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "Cafetière Programmable".to_string(),
            price: 89.99,
            quantity: 0,
            description: "Cafetière avec minuterie et fonction keep warm".to_string(),
            image_data: None,
            available: false,
            category: Category::Home,
            currency: DEFAULT_CURRENCY.to_string(),
        },
    ]
}
