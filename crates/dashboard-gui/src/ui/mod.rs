pub mod dashboard_view;
pub mod decorations;
pub mod sidebar;
pub mod theme;
