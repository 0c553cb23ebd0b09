//! Application-wide constants

/// Page size applied when a paged listing is requested without one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Upper bound on a caller-supplied page size.
pub const MAX_PAGE_SIZE: i64 = 100;
