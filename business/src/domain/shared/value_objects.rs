use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Number of hexadecimal characters in an [`EntityId`].
pub const ENTITY_ID_LENGTH: usize = 24;

const COUNTER_MASK: u32 = 0x00ff_ffff;

/// 5 random bytes fixed for the lifetime of the process.
static PROCESS_UNIQUE: LazyLock<u64> = LazyLock::new(|| rand::random::<u64>() & 0xff_ffff_ffff);

/// Starts in the lower half of the 3-byte range so it does not wrap early.
static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & (COUNTER_MASK >> 1)));

/// Returned when a string is not a well-formed [`EntityId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("entity_id.invalid")]
pub struct InvalidEntityId;

/// Opaque identifier shared by items, shopping lists and their entries.
///
/// Always 24 lowercase hex characters: a 4-byte creation timestamp
/// (seconds, big-endian), 5 bytes unique to the process and a 3-byte
/// counter. Ids generated by one process sort in creation order, including
/// ids created within the same second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        let seconds = Utc::now().timestamp() as u32;
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;
        Self(format!("{:08x}{:010x}{:06x}", seconds, *PROCESS_UNIQUE, counter))
    }

    /// Parses user input, accepting exactly 24 hex digits in either case.
    pub fn parse(raw: &str) -> Result<Self, InvalidEntityId> {
        if raw.len() != ENTITY_ID_LENGTH || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidEntityId);
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Constructor for ids already persisted in the repository (no validation).
    pub fn from_repository(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = InvalidEntityId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Resolves a partial update of an optional description.
///
/// `None` keeps the current value; a blank string clears it.
pub fn updated_description(update: Option<String>, current: Option<String>) -> Option<String> {
    match update {
        Some(text) if text.trim().is_empty() => None,
        Some(text) => Some(text),
        None => current,
    }
}
