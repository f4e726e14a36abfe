use std::fmt;

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Price: {}, Quantity: {}",
            self.name, self.price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_console_format() {
        let widget = Product::new("Widget", 9.99, 5);
        assert_eq!(widget.to_string(), "Product: Widget, Price: 9.99, Quantity: 5");

        // Whole prices print without a fractional part.
        let apple = Product::new("Apple", 1.0, 1);
        assert_eq!(apple.to_string(), "Product: Apple, Price: 1, Quantity: 1");
    }
}
