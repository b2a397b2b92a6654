// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Collider bookkeeping over plain name lists
//!
//! Everything here is a pure function from names to names; applying a rename
//! plan to actual scene objects or files is the caller's concern.

use super::codec::{decode, encode, ColliderName};

/// One step of a rename plan. Plans include no-op steps (a collider already
/// carrying its target name) so callers can show the full ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStep {
    pub from: String,
    pub to: String,
}

impl RenameStep {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// All names decoding as colliders of `base`, sorted by index.
///
/// Colliders with an unknown index sort before any explicit index; ties keep
/// input order.
pub fn colliders_for<'a>(
    base: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Vec<(String, ColliderName)> {
    let mut found: Vec<(String, ColliderName)> = names
        .into_iter()
        .filter_map(|name| decode(name).map(|collider| (name.to_string(), collider)))
        .filter(|(_, collider)| collider.base == base)
        .collect();
    found.sort_by_key(|(_, collider)| collider.index);
    found
}

/// Build a consistent renumbering for all colliders of `base`.
///
/// Existing colliders keep their relative order (by index), then any `extras`
/// are appended (skipping duplicates and `base` itself), and the whole list
/// is renamed `UCX_<base>_01`, `UCX_<base>_02`, ... in order.
pub fn rename_plan<'a>(
    base: &str,
    scene_names: impl IntoIterator<Item = &'a str>,
    extras: impl IntoIterator<Item = &'a str>,
) -> Vec<RenameStep> {
    let mut ordered: Vec<String> = colliders_for(base, scene_names)
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    for name in extras {
        if name != base && !ordered.iter().any(|existing| existing == name) {
            ordered.push(name.to_string());
        }
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, from)| RenameStep {
            to: encode(base, i as u32 + 1),
            from,
        })
        .collect()
}

/// The next free collider name for `base`: one past the highest existing
/// index, or index 1 when `base` has no indexed colliders yet.
pub fn next_collider_name<'a>(base: &str, names: impl IntoIterator<Item = &'a str>) -> String {
    let next = colliders_for(base, names)
        .iter()
        .filter_map(|(_, collider)| collider.index)
        .max()
        .map_or(1, |highest| highest.saturating_add(1));
    encode(base, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colliders_sorted_by_index() {
        let names = ["UCX_Wall_02", "Wall", "UCX_Wall", "UCX_Wall_01", "UCX_Floor_01"];
        let found = colliders_for("Wall", names);
        let order: Vec<&str> = found.iter().map(|(name, _)| name.as_str()).collect();
        // Unknown index first, mirroring the original's -1 sort key.
        assert_eq!(order, vec!["UCX_Wall", "UCX_Wall_01", "UCX_Wall_02"]);
    }

    #[test]
    fn test_rename_plan_renumbers_existing() {
        let scene = ["UCX_Wall_07", "UCX_Wall_02", "Wall", "Floor"];
        let plan = rename_plan("Wall", scene, []);
        assert_eq!(
            plan,
            vec![
                RenameStep {
                    from: "UCX_Wall_02".into(),
                    to: "UCX_Wall_01".into()
                },
                RenameStep {
                    from: "UCX_Wall_07".into(),
                    to: "UCX_Wall_02".into()
                },
            ]
        );
    }

    #[test]
    fn test_rename_plan_appends_extras() {
        let scene = ["UCX_Wall_01", "Wall", "Rock"];
        let plan = rename_plan("Wall", scene, ["Rock", "Wall", "UCX_Wall_01"]);
        let targets: Vec<&str> = plan.iter().map(|step| step.to.as_str()).collect();
        assert_eq!(targets, vec!["UCX_Wall_01", "UCX_Wall_02"]);
        assert!(plan[0].is_noop());
        assert_eq!(plan[1].from, "Rock");
    }

    #[test]
    fn test_next_collider_name() {
        assert_eq!(next_collider_name("Wall", []), "UCX_Wall_01");
        assert_eq!(
            next_collider_name("Wall", ["UCX_Wall_01", "UCX_Wall_05"]),
            "UCX_Wall_06"
        );
        // Unknown-index colliders alone do not bump the counter.
        assert_eq!(next_collider_name("Wall", ["UCX_Wall"]), "UCX_Wall_01");
    }
}
