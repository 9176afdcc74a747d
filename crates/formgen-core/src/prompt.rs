//! Prompt text for a model-backed enricher

use crate::ProductDescriptor;

/// Build the request asking for product-type-specific fields
pub fn build_prompt(product: &ProductDescriptor) -> String {
    format!(
        "Generate relevant product attributes for a productType '{}' in the '{}' category.\n\
         \n\
         Product Name: {}\n\
         Brand: {}\n\
         Description: {}\n\
         \n\
         Respond in JSON with suggested field names, types, and descriptions.\n",
        product.product_type, product.category, product.name, product.brand, product.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_every_attribute() {
        let product = ProductDescriptor {
            category: "Audio".into(),
            product_type: "Wireless Bluetooth Headphones".into(),
            brand: "Sonic".into(),
            name: "Sonic Air 2".into(),
            description: "Over-ear, 30h battery".into(),
        };
        let prompt = build_prompt(&product);
        assert!(prompt.starts_with(
            "Generate relevant product attributes for a productType \
             'Wireless Bluetooth Headphones' in the 'Audio' category.\n\n"
        ));
        assert!(prompt.contains("Product Name: Sonic Air 2\nBrand: Sonic\n"));
        assert!(prompt.contains("Description: Over-ear, 30h battery\n\n"));
        assert!(prompt.ends_with("types, and descriptions.\n"));
    }
}
