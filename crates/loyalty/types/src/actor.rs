//! Actor identity: who is calling
//!
//! Every entry point takes an explicit `ActorId` for the caller; the
//! engine never resolves identity itself. The nil (empty) id stands for
//! the invalid zero-identity and is rejected wherever a real target is
//! required.

use serde::{Deserialize, Serialize};

/// Identity of an actor interacting with the program
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The nil identity, never a valid member or transfer target
    pub fn nil() -> Self {
        Self(String::new())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_empty()
    }

    /// First 8 characters, for compact log output
    pub fn short(&self) -> String {
        self.0.chars().take(8).collect()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
