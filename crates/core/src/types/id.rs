//! Newtype IDs for type-safe record references.
//!
//! Use the `define_id!` macro to create ID wrappers that cannot be mixed up
//! across tables. Every table allocates ids sequentially starting at 1.

/// Macro to define a type-safe sequential ID wrapper.
///
/// Creates a newtype wrapper around `u32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - `new()`, `get()` and `next()`
/// - `From<u32>` and `Into<u32>` implementations
///
/// # Example
///
/// ```rust
/// # use loyalty_core::define_id;
/// define_id!(TableId);
///
/// let id = TableId::new(4);
/// assert_eq!(id.next(), TableId::new(5));
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from its raw value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the underlying value.
            #[must_use]
            pub const fn get(&self) -> u32 {
                self.0
            }

            /// The ID allocated after this one.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(AccountId);
define_id!(CustomerId);
define_id!(OrderId);
define_id!(ReservationId);
define_id!(CampaignId);
define_id!(RewardId);
define_id!(ActivityId);

impl OrderId {
    /// Human-facing order code, e.g. `ORD-007`.
    #[must_use]
    pub fn code(&self) -> String {
        format!("ORD-{:03}", self.0)
    }
}

/// Allocate the next id for a table: one past the largest id present.
///
/// An empty table starts at 1.
pub fn next_id<I, T>(existing: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Copy + From<u32>,
    u32: From<T>,
{
    let max = existing.into_iter().map(u32::from).max().unwrap_or(0);
    T::from(max + 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_code_is_zero_padded() {
        assert_eq!(OrderId::new(7).code(), "ORD-007");
        assert_eq!(OrderId::new(1234).code(), "ORD-1234");
    }

    #[test]
    fn test_next_id_empty_table_starts_at_one() {
        let id: CustomerId = next_id(Vec::new());
        assert_eq!(id, CustomerId::new(1));
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let ids = [CustomerId::new(3), CustomerId::new(9), CustomerId::new(1)];
        assert_eq!(next_id(ids), CustomerId::new(10));
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&RewardId::new(4)).unwrap();
        assert_eq!(json, "4");
    }
}
