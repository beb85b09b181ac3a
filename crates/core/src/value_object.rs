//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are compared by their attributes
/// (e.g. a cost breakdown line, a KPI tile, a stats summary). They are
/// immutable once computed; a new filter state produces new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
