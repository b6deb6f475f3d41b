// src/dtos/product.rs

/// The four display values a row needs. Rows never see the full record.
#[derive(Debug, Clone, PartialEq)]
pub struct RowProps<'a> {
    pub image: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub price: &'a str,
}

// Project the model onto row props
impl<'a> From<&'a crate::models::product::Product> for RowProps<'a> {
    fn from(product: &'a crate::models::product::Product) -> Self {
        Self {
            image: &product.media.source,
            name: &product.name,
            description: &product.description,
            price: &product.price.formatted_with_symbol,
        }
    }
}
