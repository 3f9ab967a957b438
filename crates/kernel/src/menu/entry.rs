//! Navigation entries and the site menu tree.

use serde::Serialize;

/// Nesting level of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Top,
    List,
    Sublist,
}

impl Tier {
    /// Tier of this entry's children.
    pub fn child(self) -> Tier {
        match self {
            Tier::Top => Tier::List,
            Tier::List | Tier::Sublist => Tier::Sublist,
        }
    }
}

/// One node of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    /// Shorter label used by the legacy markup, when it differs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_label: Option<&'static str>,
    /// Site-relative link target; empty for group headers.
    pub target: &'static str,
    pub tier: Tier,
    /// Element id of the nested list; set on every entry with children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<&'static str>,
    #[serde(skip_serializing_if = "is_leaf")]
    pub children: &'static [NavEntry],
}

impl NavEntry {
    const fn leaf(tier: Tier, label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            legacy_label: None,
            target,
            tier,
            group_id: None,
            children: &[],
        }
    }

    const fn group(
        tier: Tier,
        label: &'static str,
        target: &'static str,
        group_id: &'static str,
        children: &'static [NavEntry],
    ) -> Self {
        Self {
            label,
            legacy_label: None,
            target,
            tier,
            group_id: Some(group_id),
            children,
        }
    }

    const fn legacy(mut self, label: &'static str) -> Self {
        self.legacy_label = Some(label);
        self
    }

    /// Whether this entry opens a nested list.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Label for the given markup flavour.
    pub fn label_for(&self, legacy: bool) -> &'static str {
        match self.legacy_label {
            Some(short) if legacy => short,
            _ => self.label,
        }
    }
}

fn is_leaf(children: &&'static [NavEntry]) -> bool {
    children.is_empty()
}

/// Element id of the outermost menu list.
pub const ROOT_LIST_ID: &str = "top";

const TUTORIALS: &[NavEntry] = &[
    NavEntry::leaf(Tier::List, "Getting Started", "getstarted/readme1.html"),
    NavEntry::leaf(
        Tier::List,
        "Client Application Basics",
        "getstarted/clientbasics1.html",
    )
    .legacy("Client App Basics"),
];

const UNDERSTANDING: &[NavEntry] = &[
    NavEntry::leaf(Tier::Sublist, "Client API", "docs/understandingClientAPI.html"),
    NavEntry::leaf(Tier::Sublist, "Toolbar", "docs/understandingToolbar.html"),
    NavEntry::leaf(Tier::Sublist, "File Status", "docs/understandingFileStatus.html"),
    NavEntry::leaf(Tier::Sublist, "Filters", "docs/understandingFilters.html"),
    NavEntry::leaf(Tier::Sublist, "Merge", "docs/understandingMerge.html"),
    NavEntry::leaf(Tier::Sublist, "Directory Usage", "docs/understandingDirectories.html"),
    NavEntry::leaf(
        Tier::Sublist,
        "QVCS Attributes",
        "docs/understandingQVCSAttributes.html",
    ),
    NavEntry::leaf(Tier::Sublist, "Labels", "docs/understandingLabels.html"),
    NavEntry::leaf(Tier::Sublist, "Views", "docs/understandingViews.html"),
    NavEntry::leaf(
        Tier::Sublist,
        "Automatic Updates",
        "docs/understandingAutomaticUpdates.html",
    ),
    NavEntry::leaf(
        Tier::Sublist,
        "Roles and Actions",
        "docs/understandingRolesAndActions.html",
    ),
];

const REFERENCE: &[NavEntry] = &[
    NavEntry::leaf(Tier::Sublist, "Client API", "clientAPIDocs/index.html"),
    NavEntry::leaf(
        Tier::Sublist,
        "Server Command Line",
        "docs/referenceServerCommandLine.html",
    ),
    NavEntry::leaf(
        Tier::Sublist,
        "Client Command Line",
        "docs/referenceClientCommandLine.html",
    ),
    NavEntry::leaf(
        Tier::Sublist,
        "Admin Command Line",
        "docs/referenceAdminCommandLine.html",
    ),
    NavEntry::leaf(
        Tier::Sublist,
        "User Preferences Dialog",
        "docs/referenceUserPreferencesDialog.html",
    ),
    NavEntry::leaf(
        Tier::Sublist,
        "Define File Groups Dialog",
        "docs/referenceFileGroupsDialog.html",
    ),
    NavEntry::leaf(Tier::Sublist, "Filters", "docs/understandingFilters.html"),
];

const DOCUMENTATION: &[NavEntry] = &[
    NavEntry::leaf(Tier::List, "Installation", "getstarted/readme1.html"),
    NavEntry::leaf(Tier::List, "FAQ", "docs/faq.html"),
    NavEntry::leaf(Tier::List, "QVCS Custom Ant Task", "docs/qvcsanttask.html"),
    NavEntry::group(Tier::List, "Understanding...", "", "understand", UNDERSTANDING),
    NavEntry::group(Tier::List, "Reference...", "", "reference", REFERENCE),
    NavEntry::leaf(Tier::List, "Glossary", "docs/glossary.html"),
    NavEntry::leaf(Tier::List, "License", "docs/license.html"),
    NavEntry::leaf(Tier::List, "Acknowledgements", "docs/acknowledgements.html"),
];

/// The documentation site menu. The first top-level entry is the home link.
pub const SITE_MENU: &[NavEntry] = &[
    NavEntry::leaf(Tier::Top, "Home", "index.html"),
    NavEntry::group(Tier::Top, "Tutorials", "", "tutorial", TUTORIALS),
    NavEntry::group(
        Tier::Top,
        "Documentation",
        "docs/intro.html",
        "doc",
        DOCUMENTATION,
    ),
    NavEntry::leaf(Tier::Top, "What's New", "new.html"),
    NavEntry::leaf(Tier::Top, "Features", "features.html"),
    NavEntry::leaf(Tier::Top, "Screenshot", "screen.html"),
];
