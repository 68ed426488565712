//! Identifier newtypes for participants, questions, and choices.
//!
//! All three wrap a `String` and compare, order, and hash by that value.
//! Ordering is what makes engine runs reproducible: every index iterates its
//! keys in ascending identifier order.
//!
//! # Examples
//!
//! ```
//! use juror_core::ids::{ChoiceId, ParticipantId};
//!
//! let choice = ChoiceId::from("A");
//! assert_eq!(choice.as_str(), "A");
//! assert_eq!(ParticipantId::from(7u32).to_string(), "7");
//! ```

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<u32> for $name {
            fn from(n: u32) -> Self {
                Self(n.to_string())
            }
        }
    };
}

string_id!(
    /// An annotator providing answers.
    ParticipantId
);

string_id!(
    /// The unit being labeled.
    QuestionId
);

string_id!(
    /// A candidate category for a question.
    ChoiceId
);
