//! Project gallery

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectCategory {
    Branding,
    Web,
    Packaging,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Branding => "Branding",
            ProjectCategory::Web => "Web",
            ProjectCategory::Packaging => "Packaging",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: ProjectCategory,
}

static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Branding Minimalista",
        description: "Identidad visual para una marca de productos orgánicos",
        image: "https://images.unsplash.com/photo-1634942537034-2531766767d1",
        category: ProjectCategory::Branding,
    },
    Project {
        id: 2,
        title: "Diseño Web Creativo",
        description: "Interfaz moderna para una startup tecnológica",
        image: "https://images.unsplash.com/photo-1613909207039-6b173b755cc1",
        category: ProjectCategory::Web,
    },
    Project {
        id: 3,
        title: "Packaging Sostenible",
        description: "Diseño eco-friendly para productos naturales",
        image: "https://images.unsplash.com/photo-1636955779321-819753cd1741",
        category: ProjectCategory::Packaging,
    },
    Project {
        id: 4,
        title: "Identidad Corporativa",
        description: "Sistema de diseño completo para empresa de servicios",
        image: "https://images.unsplash.com/photo-1600132806370-bf17e65e942f",
        category: ProjectCategory::Branding,
    },
    Project {
        id: 5,
        title: "UI/UX App Mobile",
        description: "Diseño de interfaz para aplicación móvil",
        image: "https://images.unsplash.com/photo-1616469829581-73993eb86b02",
        category: ProjectCategory::Web,
    },
    Project {
        id: 6,
        title: "Packaging Premium",
        description: "Diseño de empaque para productos de lujo",
        image: "https://images.unsplash.com/photo-1636955779198-7c2f938c4472",
        category: ProjectCategory::Packaging,
    },
];

/// All projects in gallery order
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
