//! Menu registry - indexes the navigation tree by group id.
//!
//! The tree itself is a compiled-in constant; the registry gives the renderer
//! and the CLI lookups over it and checks the structural invariants the
//! markup builder relies on.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::entry::{NavEntry, ROOT_LIST_ID, SITE_MENU, Tier};
use crate::error::{MenuError, MenuResult};

/// Registry of menu groups and leaves.
#[derive(Debug)]
pub struct MenuRegistry {
    /// Top-level entries, in display order
    roots: &'static [NavEntry],
    /// Group entries, indexed by group id
    groups: HashMap<&'static str, &'static NavEntry>,
    /// Group ids in traversal order
    group_order: Vec<&'static str>,
    /// Leaf entries in traversal order
    leaves: Vec<&'static NavEntry>,
}

impl MenuRegistry {
    /// Create a registry over an arbitrary entry tree.
    pub fn new(roots: &'static [NavEntry]) -> Self {
        let mut registry = Self {
            roots,
            groups: HashMap::new(),
            group_order: Vec::new(),
            leaves: Vec::new(),
        };

        for entry in roots {
            registry.register(entry);
        }

        debug!(
            groups = registry.group_order.len(),
            leaves = registry.leaves.len(),
            "built menu registry"
        );
        registry
    }

    /// Registry over the documentation site menu.
    pub fn site() -> Self {
        Self::new(SITE_MENU)
    }

    fn register(&mut self, entry: &'static NavEntry) {
        match entry.group_id {
            Some(id) if entry.is_group() => {
                if self.groups.insert(id, entry).is_some() {
                    warn!(group = %id, "duplicate menu group id");
                } else {
                    self.group_order.push(id);
                }
            }
            _ => self.leaves.push(entry),
        }

        for child in entry.children {
            self.register(child);
        }
    }

    /// Top-level entries.
    pub fn roots(&self) -> &'static [NavEntry] {
        self.roots
    }

    /// Get a group entry by its id.
    pub fn get(&self, group_id: &str) -> Option<&'static NavEntry> {
        self.groups.get(group_id).copied()
    }

    /// Get the children of a group. Unknown ids yield an empty slice.
    pub fn children_of(&self, group_id: &str) -> &'static [NavEntry] {
        self.get(group_id).map(|g| g.children).unwrap_or_default()
    }

    /// Group ids in traversal order.
    pub fn groups(&self) -> &[&'static str] {
        &self.group_order
    }

    /// Navigable leaves in traversal order.
    pub fn leaves(&self) -> &[&'static NavEntry] {
        &self.leaves
    }

    /// Total entry count (groups and leaves).
    pub fn len(&self) -> usize {
        self.group_order.len() + self.leaves.len()
    }

    /// Check if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the invariants the markup builder depends on.
    ///
    /// - the tree has at least one top-level entry
    /// - every group has an id, a non-empty child list and an empty target
    /// - every leaf has a non-empty target
    /// - group ids are unique and distinct from the root list id
    pub fn validate(&self) -> MenuResult<()> {
        if self.roots.is_empty() {
            return Err(MenuError::InvalidTree("menu has no entries".to_string()));
        }
        validate_entries(self.roots, &mut Vec::new())
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::site()
    }
}

fn validate_entries(entries: &[NavEntry], seen: &mut Vec<&'static str>) -> MenuResult<()> {
    for entry in entries {
        match (entry.is_group(), entry.group_id) {
            (true, None) => {
                return Err(MenuError::InvalidTree(format!(
                    "group '{}' has no id",
                    entry.label
                )));
            }
            (true, Some(id)) => {
                if id == ROOT_LIST_ID || seen.contains(&id) {
                    return Err(MenuError::InvalidTree(format!(
                        "group id '{id}' is not unique"
                    )));
                }
                // Top-level groups may link to a landing page; nested headers may not.
                if entry.tier != Tier::Top && !entry.target.is_empty() {
                    return Err(MenuError::InvalidTree(format!(
                        "group header '{}' must not have a target",
                        entry.label
                    )));
                }
                seen.push(id);
                validate_entries(entry.children, seen)?;
            }
            (false, _) => {
                if entry.target.is_empty() {
                    return Err(MenuError::InvalidTree(format!(
                        "entry '{}' has no target",
                        entry.label
                    )));
                }
            }
        }
    }
    Ok(())
}
