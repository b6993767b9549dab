//! Owner profile and biography

use pulldown_cmark::{html, Parser};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Specialty {
    pub label: &'static str,
    /// Tailwind class for the bullet dot
    pub accent: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    /// Biography rendered to HTML
    pub biography_html: String,
    pub specialties: Vec<Specialty>,
}

const BIOGRAPHY_MD: &str = "\
¡Hola! Soy Camila, tengo 18 años y actualmente estudio Administración en la universidad. \
Sin embargo, descubrí que mi verdadera pasión es el diseño gráfico, la edición y la producción de videos, \
ya que me permite expresar creatividad mientras transmito experiencias de manera visual e impactante.

Trabajo en el área de marketing para distribuidores de lubricantes Motul y repuestos de refrigeración en el Oriente de Venezuela. \
Me especializo en la creación de contenido visual, diseñando piezas gráficas y videos interactivos que destacan la identidad y los servicios de cada empresa. \
A través de mi trabajo, me encargo de desarrollar estrategias visuales que potencian la imagen de tu negocio, \
ayudando a resaltar tus productos y servicios con diseños atractivos y profesionales. \
Para ello, utilizo herramientas como **Adobe Illustrator**, **Photoshop** y **CapCut Pro**.

Mi enfoque combina el minimalismo con toques creativos y coloridos, siempre \
manteniendo un equilibrio entre la estética y la funcionalidad.
";

const SPECIALTIES: [(&str, &str); 7] = [
    ("Flyers llamativos", "bg-purple-400"),
    ("Pendones publicitarios", "bg-pink-400"),
    ("Rebranding e identidad corporativa", "bg-red-400"),
    ("Gigantografías", "bg-blue-400"),
    ("Logos corporativos", "bg-green-400"),
    ("Manuales de marca", "bg-orange-400"),
    ("Edición de videos impactantes", "bg-yellow-400"),
];

/// Render Markdown copy to an HTML fragment
pub fn render_markdown(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new(markdown));
    out
}

pub fn profile() -> Profile {
    Profile {
        name: "Camila",
        role: "Diseñadora Gráfica",
        tagline: "Creando diseños modernos y minimalistas con un toque de color y creatividad. \
                  Especializada en identidad visual, diseño web y packaging.",
        image: "/image/perfil/yo.jpg",
        image_alt: "Camila - Diseñadora Gráfica",
        biography_html: render_markdown(BIOGRAPHY_MD),
        specialties: SPECIALTIES
            .iter()
            .map(|&(label, accent)| Specialty { label, accent })
            .collect(),
    }
}
