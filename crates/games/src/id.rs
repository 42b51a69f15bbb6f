//! Path-derived game identifiers.

use std::fmt;
use std::str::FromStr;

use sha1::{Digest, Sha1};
use uuid::Uuid;

/// Stable identifier of a registered game.
///
/// Name-based SHA-1 UUID (version 5) computed over the UTF-8 bytes of the
/// executable path, with no namespace prefix. The same path string always
/// yields the same id; any change to the string (case, separators, a
/// trailing slash) yields a different one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(Uuid);

impl GameId {
    /// Derives the id for an executable path.
    pub fn from_executable(path: &str) -> Self {
        let digest = Sha1::digest(path.as_bytes());
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self(uuid::Builder::from_sha1_bytes(bytes).into_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for GameId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<GameId> for Uuid {
    fn from(id: GameId) -> Uuid {
        id.0
    }
}
