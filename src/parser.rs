use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use brotli::Decompressor;

use crate::catalog::{Catalog, CatalogError};
use crate::product::Product;
use crate::traits::CatalogProvider;

/// Catalog bundled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../assets/products.json");

/// Parses a catalog document from a JSON string.
///
/// Malformed fields fall back to placeholders. Only records without an
/// integer id are skipped (with a warning); document-level problems are errors.
pub fn parse_catalog_str(json: &str) -> Result<Catalog, CatalogError> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    catalog_from_document(document)
}

/// Parses a catalog document from any reader.
pub fn parse_catalog_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let document: serde_json::Value = serde_json::from_reader(reader)?;
    catalog_from_document(document)
}

/// Parses a catalog file, with automatic decompression based on file extension (`.br`).
///
/// # Supported Formats
///
/// - `.json`: Uncompressed catalog document
/// - `.json.br`: Brotli-compressed catalog document
///
/// # Examples
///
/// ```no_run
/// # use rcatalog::parse_catalog;
/// # fn main() -> anyhow::Result<()> {
/// let catalog = parse_catalog("products.json")?;
/// let compressed = parse_catalog("products.json.br")?;
/// # Ok(())
/// # }
/// ```
pub fn parse_catalog(file_path: &str) -> Result<Catalog> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let reader: Box<dyn Read> = if file_path.ends_with(".br") {
        Box::new(BufReader::new(Decompressor::new(file, 4096)))
    } else {
        Box::new(BufReader::new(file))
    };

    let catalog = parse_catalog_reader(reader)
        .with_context(|| format!("Failed to parse catalog: {}", file_path))?;

    tracing::info!(path = file_path, products = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn catalog_from_document(document: serde_json::Value) -> Result<Catalog, CatalogError> {
    let records = match document {
        serde_json::Value::Object(mut map) => match map.remove("products") {
            Some(serde_json::Value::Array(records)) => records,
            _ => return Err(CatalogError::MissingProducts),
        },
        _ => return Err(CatalogError::MissingProducts),
    };

    let total = records.len();
    let mut products = Vec::with_capacity(total);

    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Product>(record) {
            Ok(mut product) => {
                if product.sanitize() {
                    tracing::warn!(id = product.id, "product had out-of-range fields, clamped");
                }
                products.push(product);
            }
            Err(e) => {
                tracing::warn!(position, error = %e, "skipping unreadable product record");
            }
        }
    }

    if products.is_empty() {
        return Err(CatalogError::Empty { skipped: total });
    }

    Catalog::new(products)
}

/// Provides the catalog bundled with the application.
pub struct EmbeddedCatalogProvider;

impl EmbeddedCatalogProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for EmbeddedCatalogProvider {
    fn load(&self) -> Result<Catalog> {
        let catalog = parse_catalog_str(EMBEDDED_CATALOG).context("Embedded catalog is malformed")?;
        tracing::info!(products = catalog.len(), "embedded catalog loaded");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        "Bundled catalog".to_string()
    }
}

/// Provides a catalog read from a JSON (or `.json.br`) file.
pub struct JsonCatalogProvider {
    path: PathBuf,
}

impl JsonCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CatalogProvider for JsonCatalogProvider {
    fn load(&self) -> Result<Catalog> {
        let path = self
            .path
            .to_str()
            .with_context(|| format!("Catalog path is not valid UTF-8: {}", self.path.display()))?;
        parse_catalog(path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductCategory;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = EmbeddedCatalogProvider::new().load().unwrap();
        assert!(catalog.len() >= 3);
        assert!(catalog.products().iter().all(|p| !p.brand().is_empty()));
    }

    #[test]
    fn test_malformed_fields_keep_the_record() {
        let json = r#"{
            "products": [
                { "id": 1, "name": "Fine", "price": 10.0 },
                { "id": 2, "name": "No image", "image": null },
                { "id": 3, "name": "Text price", "price": "25" },
                { "id": 4, "name": "Odd fields", "category": 12,
                  "specifications": { "brand": "Acme", "weight": null } }
            ]
        }"#;

        let catalog = parse_catalog_str(json).unwrap();
        let ids: Vec<u64> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        assert!(!catalog.get(2).unwrap().has_image());
        assert_eq!(catalog.get(3).unwrap().price, 0.0);
        let odd = catalog.get(4).unwrap();
        assert_eq!(odd.category, ProductCategory::Unknown);
        assert_eq!(odd.brand(), "Acme");
        assert_eq!(odd.specifications.entries().len(), 1);
    }

    #[test]
    fn test_unreadable_records_are_skipped() {
        let json = r#"{
            "products": [
                { "id": 1, "name": "Good", "price": 9.5, "category": "Audio" },
                { "name": "No id" },
                { "id": "seven", "name": "Bad id" },
                { "id": 2, "name": "Odd category", "category": "Garden" }
            ]
        }"#;

        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().category, ProductCategory::Audio);
        assert_eq!(catalog.get(2).unwrap().category, ProductCategory::Unknown);
    }

    #[test]
    fn test_document_errors_fail_loudly() {
        assert!(matches!(parse_catalog_str("not json"), Err(CatalogError::Json(_))));
        assert!(matches!(parse_catalog_str("[]"), Err(CatalogError::MissingProducts)));
        assert!(matches!(
            parse_catalog_str(r#"{"items": []}"#),
            Err(CatalogError::MissingProducts)
        ));
        assert!(matches!(
            parse_catalog_str(r#"{"products": [{"name": "x"}]}"#),
            Err(CatalogError::Empty { skipped: 1 })
        ));
        assert!(matches!(
            parse_catalog_str(r#"{"products": [{"id": 4}, {"id": 4}]}"#),
            Err(CatalogError::DuplicateId(4))
        ));
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let catalog = parse_catalog_str(r#"{"products": [{"id": 1, "price": -3, "rating": 9}]}"#).unwrap();
        let product = catalog.get(1).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.rating, 5.0);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = parse_catalog("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
