// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Collider name codec
//!
//! Unreal's importer pairs a collision mesh with the renderable mesh it
//! protects purely by name: `UCX_<base>_<index>`. This module maps between
//! that string convention and a structured [`ColliderName`]. Both directions
//! are total functions; malformed input degrades to "not a collider" or
//! "collider with unknown index", never an error.
//!
//! The parsing rules are deliberately kept bug-for-bug compatible with the
//! convention as practiced: base names that themselves end in digits or
//! separators are ambiguous, and a Blender-style duplicate suffix (`.002`)
//! is folded into the index as an additive offset.

use serde::{Deserialize, Serialize};

/// Reserved prefix marking an object name as a collision mesh.
pub const UCX_PREFIX: &str = "UCX_";

/// A decoded collider name: the base mesh it belongs to plus its ordinal
/// position among that mesh's colliders.
///
/// `index` is `None` when the name is recognizably a collider but carries no
/// parseable index (e.g. `UCX_Wall`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColliderName {
    pub base: String,
    pub index: Option<u32>,
}

impl ColliderName {
    pub fn new(base: impl Into<String>, index: u32) -> Self {
        Self {
            base: base.into(),
            index: Some(index),
        }
    }

    pub fn unknown_index(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            index: None,
        }
    }
}

/// Quick check used when filtering export candidates: anything carrying the
/// reserved prefix is treated as a collider, decodable index or not.
pub fn is_collider(name: &str) -> bool {
    name.starts_with(UCX_PREFIX)
}

/// Decode an object name into a [`ColliderName`].
///
/// Returns `None` when `name` does not carry the `UCX_` prefix. Otherwise:
///
/// 1. A trailing `.NNN` duplicate-object suffix (only considered when more
///    than four characters remain) is stripped and its digits recorded as an
///    additive offset on the index.
/// 2. The maximal run of trailing ASCII digits is the explicit index.
/// 3. A single `.` or `_` separating the digits from the base is stripped.
/// 4. No digit run means the index is unknown; the offset is discarded.
pub fn decode(name: &str) -> Option<ColliderName> {
    let rest = name.strip_prefix(UCX_PREFIX)?;

    let (rest, dup_offset) = strip_duplicate_suffix(rest);

    let stem = rest.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &rest[stem.len()..];
    let base = stem.strip_suffix(['.', '_']).unwrap_or(stem);

    // A digit run too long for u32 counts as unparseable, same as no run.
    let index = digits
        .parse::<u32>()
        .ok()
        .map(|idx| idx.saturating_add(dup_offset));

    Some(ColliderName {
        base: base.to_string(),
        index,
    })
}

/// Format a base name and index as a collider name.
///
/// The index is zero-padded to at least two digits; wider indices are kept
/// as-is (`1` -> `01`, `123` -> `123`).
pub fn encode(base: &str, index: u32) -> String {
    format!("{}{}_{:02}", UCX_PREFIX, base, index)
}

/// Strip Blender's duplicated-object suffix (a dot followed by exactly three
/// digits) and return the remaining name together with the suffix value.
fn strip_duplicate_suffix(name: &str) -> (&str, u32) {
    let bytes = name.as_bytes();
    if bytes.len() > 4 {
        let tail = &bytes[bytes.len() - 4..];
        if tail[0] == b'.' && tail[1..].iter().all(u8::is_ascii_digit) {
            let offset = name[name.len() - 3..].parse().unwrap_or(0);
            return (&name[..name.len() - 4], offset);
        }
    }
    (name, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_collider() {
        assert_eq!(decode("Wall"), None);
        assert_eq!(decode(""), None);
        assert_eq!(decode("ucx_Wall_01"), None); // prefix is case-sensitive
        assert_eq!(decode("UCXWall"), None);
    }

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode("UCX_Wall_03"), Some(ColliderName::new("Wall", 3)));
        assert_eq!(decode("UCX_Wall.03"), Some(ColliderName::new("Wall", 3)));
        assert_eq!(decode("UCX_Wall_123"), Some(ColliderName::new("Wall", 123)));
    }

    #[test]
    fn test_decode_unknown_index() {
        assert_eq!(decode("UCX_Wall"), Some(ColliderName::unknown_index("Wall")));
        // Bare prefix decodes as a collider with an empty base.
        assert_eq!(decode("UCX_"), Some(ColliderName::unknown_index("")));
    }

    #[test]
    fn test_decode_duplicate_suffix() {
        // The duplicate counter is an additive offset on the explicit index.
        assert_eq!(
            decode("UCX_Wall_03.002"),
            Some(ColliderName::new("Wall", 5))
        );
        // No explicit index left after stripping: the offset is discarded.
        assert_eq!(
            decode("UCX_Wall.002"),
            Some(ColliderName::unknown_index("Wall"))
        );
    }

    #[test]
    fn test_duplicate_suffix_length_guard() {
        // ".002" alone is not treated as a duplicate suffix (needs > 4 chars
        // remaining), so its digits parse as a plain index.
        assert_eq!(decode("UCX_.002"), Some(ColliderName::new("", 2)));
        assert_eq!(
            decode("UCX_A.002"),
            Some(ColliderName::unknown_index("A")),
            "suffix stripped, no explicit index remains"
        );
    }

    #[test]
    fn test_decode_no_separator() {
        // Trailing digits without a separator still parse; this is the
        // documented ambiguity for base names ending in digits.
        assert_eq!(decode("UCX_Wall3"), Some(ColliderName::new("Wall", 3)));
        assert_eq!(decode("UCX_007"), Some(ColliderName::new("", 7)));
    }

    #[test]
    fn test_decode_overflow_degrades() {
        assert_eq!(
            decode("UCX_Wall_99999999999999999999"),
            Some(ColliderName::unknown_index("Wall"))
        );
    }

    #[test]
    fn test_encode_padding() {
        assert_eq!(encode("Wall", 1), "UCX_Wall_01");
        assert_eq!(encode("Wall", 12), "UCX_Wall_12");
        assert_eq!(encode("Wall", 123), "UCX_Wall_123");
        assert_eq!(encode("Wall", 0), "UCX_Wall_00");
    }

    #[test]
    fn test_roundtrip() {
        for idx in 0..=99 {
            let name = encode("Crate", idx);
            assert_eq!(decode(&name), Some(ColliderName::new("Crate", idx)));
        }
    }

    #[test]
    fn test_is_collider() {
        assert!(is_collider("UCX_Wall_01"));
        assert!(is_collider("UCX_"));
        assert!(!is_collider("Wall"));
    }
}
