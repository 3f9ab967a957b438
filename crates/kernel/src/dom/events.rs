//! Hover bindings between menu items and their nested lists.

use serde::Serialize;

/// Which node of a group receives the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverTrigger {
    /// The list item that owns the group.
    Item,
    /// The nested list itself.
    List,
}

/// Pointer-enter shows `group_id`, pointer-leave hides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HoverBinding {
    pub group_id: &'static str,
    pub trigger: HoverTrigger,
}

impl HoverBinding {
    pub fn new(group_id: &'static str, trigger: HoverTrigger) -> Self {
        Self { group_id, trigger }
    }

    /// Inline handler attributes for hosts that execute the markup directly.
    pub fn inline_attributes(group_id: &str) -> String {
        format!(r#" onmouseover="show('{group_id}')" onmouseout="hide('{group_id}')""#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_attributes_format() {
        assert_eq!(
            HoverBinding::inline_attributes("doc"),
            r#" onmouseover="show('doc')" onmouseout="hide('doc')""#
        );
    }
}
