//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Every digest in the
//! workspace selects its prefix through [`HashDomain`], so a maze digest can
//! never collide with a visit-sequence digest computed over the same bytes.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: exactly one `:` separator with non-empty text on both sides
/// (enforced by [`ContentHash::parse`] and by [`canonical_hash`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Typed domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// `MazeV1` canonical layout.
    MazeLayout,
    /// Ordered sequence of cells yielded by a search run.
    VisitSequence,
    /// Reconstructed start-to-goal path.
    SearchPath,
    /// Deterministic projection of a run report.
    RunReport,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        Self::MazeLayout,
        Self::VisitSequence,
        Self::SearchPath,
        Self::RunReport,
    ];

    /// The raw, null-terminated prefix bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::MazeLayout => b"LABYRINTH::MAZE_LAYOUT::V1\0",
            Self::VisitSequence => b"LABYRINTH::VISIT_SEQUENCE::V1\0",
            Self::SearchPath => b"LABYRINTH::SEARCH_PATH::V1\0",
            Self::RunReport => b"LABYRINTH::RUN_REPORT::V1\0",
        }
    }
}

/// Hash `data` under `domain`.
///
/// Result format: `"sha256:<lowercase hex>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    let full = format!("sha256:{digest}");
    ContentHash { colon: 6, full }
}
