//! Navigation shell state
//!
//! Holds what the top-level shell needs to render a page: which section is
//! shown, the theme, whether the mobile menu is expanded and which project (if
//! any) is open in the gallery modal.

use serde::Serialize;

use crate::content::{self, Project};
use crate::section::Section;
use crate::theme::Theme;

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

impl NavItem {
    pub fn css_class(&self) -> &'static str {
        if self.active {
            "text-purple-600"
        } else {
            "text-gray-600 hover:text-purple-600"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShellState {
    pub section: Section,
    pub theme: Theme,
    pub menu_open: bool,
    pub selected_project: Option<u32>,
}

impl ShellState {
    pub fn new(theme: Theme) -> Self {
        Self {
            section: Section::Hero,
            theme,
            menu_open: false,
            selected_project: None,
        }
    }

    /// Show a section. Closes the mobile menu and any open project.
    pub fn select(&mut self, section: Section) {
        self.section = section;
        self.menu_open = false;
        self.selected_project = None;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Open a project in the gallery modal. Returns the project, or `None`
    /// (leaving the state unchanged) for an unknown id or when the gallery
    /// isn't the current section.
    pub fn open_project(&mut self, id: u32) -> Option<&'static Project> {
        if self.section != Section::Portfolio {
            return None;
        }
        let project = content::project(id)?;
        self.selected_project = Some(project.id);
        Some(project)
    }

    pub fn close_project(&mut self) {
        self.selected_project = None;
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.selected_project.and_then(content::project)
    }

    /// Nav bar entries in order, exactly one of them active.
    pub fn nav_items(&self) -> Vec<NavItem> {
        Section::ALL
            .into_iter()
            .map(|section| NavItem {
                section,
                label: section.label(),
                href: section.path(),
                active: section == self.section,
            })
            .collect()
    }

    /// Link that flips the mobile menu on the current section.
    pub fn menu_toggle_href(&self) -> String {
        if self.menu_open {
            self.section.path().to_string()
        } else {
            format!("{}?menu=open", self.section.path())
        }
    }

    /// Path (with query) that reproduces this state, minus the theme.
    pub fn current_href(&self) -> String {
        let mut query = Vec::new();
        if self.menu_open {
            query.push("menu=open".to_string());
        }
        if let Some(id) = self.selected_project {
            query.push(format!("project={}", id));
        }
        if query.is_empty() {
            self.section.path().to_string()
        } else {
            format!("{}?{}", self.section.path(), query.join("&"))
        }
    }
}
