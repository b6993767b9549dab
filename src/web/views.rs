// View models and Askama templates for the site shell and its sections

use askama::Template;

use crate::contact_form::{ContactDraft, ContactField};
use crate::content::{ContactChannel, Profile, Project};
use crate::section::Section;
use crate::shell::{NavItem, ShellState};
use crate::theme::Theme;

// ============================================================================
// View Models
// ============================================================================

/// Decorative shape behind the hero copy
#[derive(Debug, Clone)]
pub struct HeroShape {
    pub class: String,
}

/// Where the form stands after the last request
#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub draft: ContactDraft,
    pub missing: Vec<ContactField>,
    pub sent: bool,
}

impl ContactFormView {
    pub fn sent() -> Self {
        Self {
            sent: true,
            ..Self::default()
        }
    }

    pub fn rejected(draft: ContactDraft, missing: Vec<ContactField>) -> Self {
        Self {
            draft,
            missing,
            sent: false,
        }
    }

    pub fn is_missing(&self, field: ContactField) -> bool {
        self.missing.contains(&field)
    }

    pub fn missing_labels(&self) -> String {
        self.missing
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Everything a section template reads
#[derive(Debug, Clone)]
pub struct SectionView {
    pub shell: ShellState,
    pub theme: Theme,
    pub nav_items: Vec<NavItem>,
    pub background: &'static str,
    pub previous: Section,
    pub next: Section,
    /// Path the theme toggle returns to
    pub return_to: String,
    pub hero_shapes: Vec<HeroShape>,
    pub profile: Profile,
    pub projects: &'static [Project],
    pub selected: Option<&'static Project>,
    pub channels: Vec<ContactChannel>,
    pub form: ContactFormView,
}

impl SectionView {
    pub fn new(
        shell: ShellState,
        profile: Profile,
        channels: Vec<ContactChannel>,
        form: ContactFormView,
    ) -> Self {
        let theme = shell.theme;
        let positions = [
            "top-20 left-20 w-40 h-40 rounded-full",
            "top-40 right-40 w-60 h-60 rounded-lg rotate-45",
            "bottom-20 left-1/3 w-40 h-40 rounded-lg",
        ];
        let hero_shapes = positions
            .iter()
            .zip(theme.hero_shapes())
            .map(|(position, colour)| HeroShape {
                class: format!("{} {}", position, colour),
            })
            .collect();

        Self {
            shell,
            theme,
            nav_items: shell.nav_items(),
            background: theme.section_background(shell.section),
            previous: shell.section.previous(),
            next: shell.section.next(),
            return_to: shell.current_href(),
            hero_shapes,
            profile,
            projects: crate::content::projects(),
            selected: shell.selected_project(),
            channels,
            form,
        }
    }

    /// Link that opens a project in the gallery modal
    pub fn project_href(&self, project: &Project) -> String {
        format!("{}?project={}", Section::Portfolio.path(), project.id)
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Full document: nav, main and the floating theme toggle
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub view: SectionView,
    pub oob: bool,
}

/// htmx swap: title, `<main>` and an out-of-band nav refresh
#[derive(Template)]
#[template(path = "fragment.html")]
pub struct FragmentTemplate {
    pub view: SectionView,
    pub oob: bool,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}
