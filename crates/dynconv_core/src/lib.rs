//! Public library API for coercing loosely-typed dynamic values.

/// Dynamic value model, scalar/list/map coercions, and JSON interop.
pub mod coerce;
