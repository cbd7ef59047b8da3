//! Value object trait: equality by value, not identity.
//!
//! Filter toggles and price ranges have **no identity**. Two values with the
//! same attributes are interchangeable, and "changing" one means building a
//! new value.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: values are copied into the next state on every update
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceRange { min: f64, max: f64, enabled: bool }
///
/// impl ValueObject for PriceRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
