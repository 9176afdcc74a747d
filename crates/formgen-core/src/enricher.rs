//! Enrichment — product-type-specific fields beyond the fixed catalog
//!
//! An [`Enricher`] receives the product and the prompt a generative model
//! would be asked. Only [`StubEnricher`] exists; it answers every product
//! with the same four device fields and never looks at the prompt. A
//! model-backed enricher plugs in behind the same trait.

use crate::schema::{FieldSpec, FieldType};
use crate::{ProductDescriptor, Result};

/// Source of suggested form fields for a product
pub trait Enricher: Send + Sync {
    fn enrich(&self, product: &ProductDescriptor, prompt: &str) -> Result<Vec<FieldSpec>>;
}

/// Fixed answer standing in for a model call
#[derive(Debug, Clone, Copy, Default)]
pub struct StubEnricher;

impl Enricher for StubEnricher {
    fn enrich(&self, product: &ProductDescriptor, _prompt: &str) -> Result<Vec<FieldSpec>> {
        tracing::debug!(product_type = %product.product_type, "using stub enrichment fields");
        Ok(vec![
            FieldSpec::new("screenSizeInches", FieldType::Decimal, "Screen Size (inches)"),
            FieldSpec::new("batteryCapacityMah", FieldType::Integer, "Battery (mAh)"),
            FieldSpec::new("storageGb", FieldType::Integer, "Storage (GB)"),
            FieldSpec::new("ramGb", FieldType::Integer, "RAM (GB)"),
        ])
    }
}
