//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for domain crates:
//! - `TestDynamoTable`: DynamoDB Local container with a ready table (feature: "dynamodb")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `dynamodb` (default): Enables DynamoDB Local test infrastructure
//! - `all`: Enables all storage test infrastructure
//!
//! # Usage
//!
//! Container-backed tests need Docker, so mark them `#[ignore]` and run them
//! with `cargo test -- --ignored`:
//!
//! ```rust,no_run
//! use test_utils::{TestDynamoTable, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_dynamodb_test() {
//!     let table = TestDynamoTable::new("items").await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let item_id = builder.item_id("main");
//!     let item_name = builder.name("item", "main");
//! }
//! ```

#[cfg(feature = "dynamodb")]
mod dynamodb;

#[cfg(feature = "dynamodb")]
pub use dynamodb::TestDynamoTable;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_put_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique item id for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.item_id("main"), "item-12345-main");
    /// ```
    pub fn item_id(&self, suffix: &str) -> String {
        format!("item-{}-{}", self.seed, suffix)
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The type of resource (e.g., "item", "table")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("item", "main");
    /// // Returns: "test-item-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Decimal price text derived from the seed, with two fraction digits
    pub fn price(&self) -> String {
        format!("{}.{:02}", self.seed % 1000, self.seed % 100)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two prices are equal within `f64` rendering tolerance
    pub fn assert_price_eq(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() <= f64::EPSILON * expected.abs().max(1.0),
            "{}: expected price {}, got {}",
            context,
            expected,
            actual
        );
    }
}
