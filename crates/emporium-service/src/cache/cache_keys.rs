//! Cache key generators for consistent key naming.

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "emporium:cache";

/// Cache key for the featured-products snapshot.
#[must_use]
pub fn featured_products() -> String {
    format!("{}:featured_products", CACHE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_products_key() {
        assert_eq!(featured_products(), "emporium:cache:featured_products");
    }
}
