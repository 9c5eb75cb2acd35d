//! Sidebar and mobile-menu state of the dashboard shell

/// Viewports at or below this width use the mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Brand shown in the sidebar header
pub const BRAND: &str = "BlogDash";

/// Open/closed toggles of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    /// Whether the sidebar is expanded
    pub sidebar_open: bool,
    /// Whether the mobile menu overlay is showing
    pub mobile_menu_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            mobile_menu_open: false,
        }
    }
}

impl ShellState {
    /// Whether a viewport width counts as mobile
    pub fn is_mobile(viewport_width: f64) -> bool {
        viewport_width <= MOBILE_BREAKPOINT_PX
    }

    /// Toggle the sidebar; on narrow viewports this also closes the mobile menu
    pub fn toggle_sidebar(&mut self, viewport_width: f64) {
        self.sidebar_open = !self.sidebar_open;
        if Self::is_mobile(viewport_width) {
            self.mobile_menu_open = false;
        }
    }

    /// Toggle the mobile menu
    pub const fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// A nav item was clicked
    pub const fn nav_clicked(&mut self) {
        self.mobile_menu_open = false;
    }
}
