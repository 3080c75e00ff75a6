/// One row of the product sheet. Every attribute is the verbatim cell text;
/// an absent value is the empty string, never an Option. The sheet owner
/// writes free text here ("1200-1500", "S,M,L", "in stock") and the bot
/// reads it back to callers unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    /// Lowercase trimmed product name, the lookup key.
    pub name: String,
    pub price: String,
    pub sizes: String,
    pub colors: String,
    pub availability: String,
    pub material: String,
    pub moq: String,
    pub delivery: String,
}

/// In-memory snapshot of the product sheet, rebuilt on every fetch.
/// Row order is preserved: product detection takes the first name that
/// appears in the transcript, so sheet order is the tie-breaker.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}
