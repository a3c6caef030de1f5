//! Typed identifiers for Agora entities.
//!
//! Every entity id is a UUID wrapped in its own newtype so that a
//! `CommentId` can never be passed where a `PostId` is expected. Ids are
//! generated with UUID v4 on creation and are immutable thereafter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse from a hyphenated UUID string.
            ///
            /// Fails with [`TypeError::InvalidId`] on malformed input; the
            /// HTTP layer maps that to a 400 response.
            pub fn parse(s: &str) -> Result<Self, TypeError> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| TypeError::InvalidId(s.to_string()))
            }

            /// Wrap an existing UUID. Use `new()` for production code.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a registered user, resolved by the auth collaborator.
    UserId
);
entity_id!(
    /// Identity of a post.
    PostId
);
entity_id!(
    /// Identity of a comment.
    CommentId
);
entity_id!(
    /// Identity of a single vote record.
    VoteId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(UserId::new(), UserId::new());
        assert_ne!(VoteId::new(), VoteId::new());
    }

    #[test]
    fn parse_roundtrip() {
        let id = PostId::new();
        let parsed = PostId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = CommentId::parse("not-a-uuid").unwrap_err();
        assert_eq!(err, TypeError::InvalidId("not-a-uuid".into()));
    }

    #[test]
    fn from_str_matches_parse() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn serde_uses_plain_uuid_string() {
        let id = VoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: VoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn debug_includes_type_name() {
        let id = PostId::new();
        assert!(format!("{id:?}").starts_with("PostId("));
    }
}
