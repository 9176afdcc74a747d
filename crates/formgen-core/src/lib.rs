//! Formgen Core - product type identifiers and form schemas
//!
//! Turns a free-text product type ("Wireless Bluetooth Headphones") into a
//! representative word and a stable type identifier, then assembles the
//! suggested form fields for that product type.
//!
//! # Architecture
//!
//! ```text
//! productType → Analyzer → Normalizer → representative word
//!                                          ↓
//!                                   Identifier → typeId (12 hex)
//! product → Prompt → Enricher → enrichment fields
//!                                          ↓
//!          enrichment ++ additional fields → FormSchema
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input and lexicon always produce identical output
//! - **Pure**: no I/O, no shared mutable state; safe to call from many threads
//! - **Fail fast**: empty input and unloadable models are errors, never guesses

pub mod analyzer;
pub mod enricher;
pub mod error;
pub mod identifier;
pub mod normalizer;
pub mod prompt;
pub mod schema;

pub use analyzer::Analyzer;
pub use enricher::{Enricher, StubEnricher};
pub use error::{Error, Result};
pub use identifier::{generate_id, TYPE_ID_LEN};
pub use normalizer::{normalize, normalize_with, Normalizer};
pub use schema::{FieldSpec, FieldType, FormSchema};

/// The product attributes supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptor {
    pub category: String,
    pub product_type: String,
    pub brand: String,
    pub name: String,
    pub description: String,
}

/// Build the form schema for a product
///
/// Pipeline: normalize product type → type id → prompt → enrich → merge
///
/// # Errors
/// Returns `InvalidInput` if the product type is blank, or whatever the
/// enricher reports.
pub fn generate_form(
    analyzer: &dyn Analyzer,
    enricher: &dyn Enricher,
    product: &ProductDescriptor,
) -> Result<FormSchema> {
    let representative_word = normalize_with(analyzer, &product.product_type)?;
    let type_id = generate_id(&representative_word)?;

    let prompt = prompt::build_prompt(product);
    tracing::trace!(%prompt, "enrichment prompt");
    let enrichment = enricher.enrich(product, &prompt)?;

    let fields = schema::merge_fields(enrichment, schema::additional_fields());
    tracing::debug!(
        type_id = %type_id,
        word = %representative_word,
        fields = fields.len(),
        "generated form schema"
    );

    Ok(FormSchema {
        type_id,
        representative_word,
        fields,
    })
}
