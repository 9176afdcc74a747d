//! Form schema — field descriptors and the output record
//!
//! A schema is `{typeId, representativeWord, fields}`. Fields from the
//! enricher come first, followed by the fixed catalog of product fields.
//! `specifications` is free-form and never becomes a form field.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Field names that never appear in a generated form
pub const EXCLUDED_FIELDS: &[&str] = &["specifications"];

/// Value type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Integer,
    Decimal,
    Boolean,
    #[serde(rename = "List<String>")]
    StringList,
}

/// One suggested form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
}

impl FieldSpec {
    pub fn new(name: &str, field_type: FieldType, label: &str) -> Self {
        FieldSpec {
            name: name.to_string(),
            field_type,
            label: label.to_string(),
        }
    }
}

/// Generated form description for one product type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub type_id: String,
    pub representative_word: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Compact single-line JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Product fields present on every form, in display order
pub fn additional_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("productionYear", FieldType::Integer, "Production Year"),
        FieldSpec::new("price", FieldType::Decimal, "Price"),
        FieldSpec::new("unitsInStock", FieldType::Integer, "Units in Stock"),
        FieldSpec::new("payOnDelivery", FieldType::Boolean, "Pay on Delivery"),
        FieldSpec::new("images", FieldType::StringList, "Product Images"),
        FieldSpec::new("videos", FieldType::StringList, "Product Videos"),
        FieldSpec::new("imported", FieldType::Boolean, "Imported"),
    ]
}

/// Enrichment fields first, then additional fields, minus excluded names
pub fn merge_fields(enrichment: Vec<FieldSpec>, additional: Vec<FieldSpec>) -> Vec<FieldSpec> {
    enrichment
        .into_iter()
        .chain(additional)
        .filter(|f| !EXCLUDED_FIELDS.contains(&f.name.as_str()))
        .collect()
}
