//! Standard messages for responses whose text is not chosen by a domain.

/// Body text for any failure that must not leak its cause to the client.
pub const INTERNAL_ERROR: &str = "Internal Server Error";

/// Body text for the router fallback.
pub const NOT_FOUND_ROUTE: &str = "Not Found";
