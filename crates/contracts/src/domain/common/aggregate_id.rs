//! Backend ids are opaque strings, so every id type is a thin newtype over
//! `String` that serializes as the bare string.

/// Declares a transparent string-backed id type.
#[macro_export]
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    string_id!(SampleId);

    #[test]
    fn test_display_is_the_raw_id() {
        let id = SampleId::new("doc 1/a");
        assert_eq!(id.to_string(), "doc 1/a");
        assert_eq!(id.as_str(), "doc 1/a");
    }

    #[test]
    fn test_serializes_transparently() {
        let id = SampleId::new("doc-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"doc-1\"");
        let back: SampleId = serde_json::from_str("\"doc-1\"").unwrap();
        assert_eq!(back, id);
    }
}
