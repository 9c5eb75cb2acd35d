//! Preview links and the sidebar navigation table

/// Path of the preview page for a post
pub fn preview_path(id: &str) -> String {
    format!("/posts/{}", urlencoding::encode(id))
}

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Link text
    pub label: &'static str,
    /// Target path
    pub path: &'static str,
    /// Icon name
    pub icon: &'static str,
}

impl NavItem {
    /// Whether the item is highlighted for `current`
    ///
    /// The root item only matches exactly; the others also match sub-paths.
    pub fn is_active(&self, current: &str) -> bool {
        if self.path == "/" {
            return current == "/";
        }
        current == self.path
            || current
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Sidebar entries in display order
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Dashboard",
        path: "/",
        icon: "dashboard",
    },
    NavItem {
        label: "Posts",
        path: "/posts",
        icon: "article",
    },
    NavItem {
        label: "Profile",
        path: "/profile",
        icon: "person",
    },
    NavItem {
        label: "Settings",
        path: "/settings",
        icon: "settings",
    },
];
