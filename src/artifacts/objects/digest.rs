//! SHA-256 digests
//!
//! Commits and file contents are both identified by a SHA-256 digest written
//! as 64 lowercase hexadecimal characters. The two are kept as distinct types
//! so a file fingerprint can never be mistaken for a commit reference.
//!
//! ## Format
//!
//! - Full: 64 hex characters
//! - Short: first 7 characters, used in command output

/// Length of a hex-encoded SHA-256 digest
pub const DIGEST_LENGTH: usize = 64;

/// Length of the abbreviated form shown to users
pub const SHORT_DIGEST_LENGTH: usize = 7;

/// Check that `id` is a full-length lowercase hex digest
pub fn is_valid_digest(id: &str) -> bool {
    id.len() == DIGEST_LENGTH && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

macro_rules! digest_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Parse and validate a digest string
            ///
            /// Returns `None` unless `id` is exactly 64 lowercase hex characters.
            pub fn try_parse(id: impl Into<String>) -> Option<Self> {
                let id = id.into();
                is_valid_digest(&id).then_some(Self(id))
            }

            /// Build from raw digest bytes
            pub(crate) fn from_digest(bytes: &[u8]) -> Self {
                Self(hex::encode(bytes))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Abbreviated form (first 7 characters)
            pub fn to_short(&self) -> &str {
                &self.0[..SHORT_DIGEST_LENGTH]
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

digest_type!(
    /// Identifier of a commit, derived from its message and staged content
    CommitHash
);

digest_type!(
    /// Fingerprint of a single file's bytes
    Fingerprint
);
