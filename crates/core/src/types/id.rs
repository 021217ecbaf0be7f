//! Entity IDs.
//!
//! Use the `define_id!` macro to create ID wrappers that cannot be mixed up
//! and that know the GraphQL node type they are exposed as.

/// Define an `i32` ID newtype bound to a GraphQL node type.
///
/// The wrapper is a transparent `i32` for serde and, with the `postgres`
/// feature, for sqlx. It carries the GraphQL node type name so global IDs of
/// one type never decode as another.
///
/// # Example
///
/// ```rust
/// # use shopkeep_core::define_id;
/// define_id!(UserId, "User");
///
/// let id = UserId::new(1);
/// assert_eq!(id.to_global_id().as_str(), "VXNlcjox");
/// assert_eq!(UserId::from_global_id("VXNlcjox"), Some(id));
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $node_type:literal) => {
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
        #[cfg_attr(feature = "postgres", derive(::sqlx::Type), sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// GraphQL node type this ID belongs to.
            pub const NODE_TYPE: &'static str = $node_type;

            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }

            /// Encode this ID as an opaque Relay global ID.
            #[must_use]
            pub fn to_global_id(&self) -> $crate::GlobalId {
                $crate::GlobalId::encode(Self::NODE_TYPE, self.0)
            }

            /// Decode a Relay global ID, returning `None` if it is malformed or
            /// refers to another node type.
            #[must_use]
            pub fn from_global_id(raw: &str) -> Option<Self> {
                $crate::GlobalId::decode(raw)
                    .ok()
                    .and_then(|gid| gid.pk_for(Self::NODE_TYPE))
                    .map(Self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(UserId, "User");
define_id!(AddressId, "Address");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_id_is_bound_to_node_type() {
        let user = UserId::new(7);
        let encoded = user.to_global_id();

        assert_eq!(UserId::from_global_id(encoded.as_str()), Some(user));
        assert_eq!(AddressId::from_global_id(encoded.as_str()), None);
    }

    #[test]
    fn test_from_global_id_rejects_garbage() {
        assert_eq!(UserId::from_global_id("not base64 at all!"), None);
        assert_eq!(UserId::from_global_id(""), None);
    }
}
