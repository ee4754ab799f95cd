//! Newtype IDs for Shopify global identifiers.
//!
//! Shopify issues opaque global IDs of the form `gid://shopify/<Type>/<n>`.
//! Use the `define_gid!` macro to create type-safe wrappers that prevent
//! accidentally mixing IDs from different resource types.

/// Macro to define a type-safe Shopify global ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `numeric_id()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// The wrapped value is never validated: IDs are issued by the remote store
/// and treated as opaque handles.
///
/// # Example
///
/// ```rust
/// # use catalog_seeder_core::define_gid;
/// define_gid!(CollectionGid);
///
/// let id = CollectionGid::new("gid://shopify/Collection/42");
/// assert_eq!(id.numeric_id(), "42");
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a global ID string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the full global ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the trailing numeric segment (`gid://shopify/Product/123` -> `123`).
            ///
            /// Returns the whole value when it contains no `/`.
            #[must_use]
            pub fn numeric_id(&self) -> &str {
                self.0.rsplit('/').next().unwrap_or(&self.0)
            }

            /// Consume the wrapper and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_gid!(ProductGid);
define_gid!(VariantGid);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_strips_prefix() {
        let id = ProductGid::new("gid://shopify/Product/8123456789");
        assert_eq!(id.numeric_id(), "8123456789");
        assert_eq!(id.as_str(), "gid://shopify/Product/8123456789");
    }

    #[test]
    fn test_numeric_id_without_slash() {
        let id = ProductGid::new("8123456789");
        assert_eq!(id.numeric_id(), "8123456789");
    }

    #[test]
    fn test_serde_transparent() {
        let id = VariantGid::new("gid://shopify/ProductVariant/1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gid://shopify/ProductVariant/1\"");

        let back: VariantGid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display() {
        let id = ProductGid::from("gid://shopify/Product/7");
        assert_eq!(id.to_string(), "gid://shopify/Product/7");
    }
}
