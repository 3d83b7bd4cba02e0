// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled but hidden from documentation, so integration tests,
//! benches, and fuzz targets build catalogs the same way.

#![doc(hidden)]

use crate::types::{DocId, Document};

/// A document with just a brand and product name.
pub fn make_doc(id: u64, brand: &str, product: &str) -> Document {
    Document {
        id: DocId(id),
        brand_name: brand.to_string(),
        product_name: product.to_string(),
        ..Document::default()
    }
}

/// A fully populated laptop record.
pub fn make_laptop(id: u64, brand: &str, product: &str, processor: &str, memory: &str) -> Document {
    Document {
        id: DocId(id),
        brand_name: brand.to_string(),
        product_name: product.to_string(),
        os: "Windows 11 Home".to_string(),
        processor: processor.to_string(),
        graphics: "Integrated".to_string(),
        display: "15.6\" FHD".to_string(),
        memory: memory.to_string(),
        storage: "512GB SSD".to_string(),
    }
}

/// Documents with ids `0..names.len()` and brand "Generic".
pub fn make_catalog(names: &[&str]) -> Vec<Document> {
    names
        .iter()
        .enumerate()
        .map(|(id, name)| make_doc(id as u64, "Generic", name))
        .collect()
}

/// A small mixed-brand catalog used across integration tests.
pub fn sample_catalog() -> Vec<Document> {
    vec![
        make_laptop(1, "HP", "ProBook 450 G9", "Intel Core i5-1235U", "8GB"),
        make_laptop(2, "Lenovo", "ThinkPad T14 Gen 4", "Intel Core i7-1355U", "16GB"),
        make_laptop(3, "HP", "ProBook 455 G10", "AMD Ryzen 5 7530U", "16GB"),
        make_laptop(4, "Dell", "XPS 13 Plus", "Intel Core i7-1360P", "16GB"),
        make_laptop(5, "Apple", "MacBook Air M2", "Apple M2", "8GB"),
        make_laptop(6, "Apple", "MacBook Pro 14", "Apple M3 Pro", "18GB"),
        make_laptop(7, "Asus", "Zenbook 14 OLED", "Intel Core Ultra 7", "16GB"),
        make_laptop(8, "Dell", "Inspiron 15 3520", "Intel Core i3-1215U", "8GB"),
    ]
}
