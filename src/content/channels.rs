//! Contact channels listed next to the form

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelKind {
    Email,
    Phone,
    Instagram,
    Linkedin,
}

impl ChannelKind {
    /// Social channels render as icon-only links that open in a new tab.
    pub fn is_social(&self) -> bool {
        matches!(self, ChannelKind::Instagram | ChannelKind::Linkedin)
    }

    /// Inner SVG markup (24x24 stroke icons)
    pub fn svg_path(&self) -> &'static str {
        match self {
            ChannelKind::Email => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ChannelKind::Phone => r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
            ChannelKind::Instagram => r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
            ChannelKind::Linkedin => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub href: &'static str,
    pub display: &'static str,
}

pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            kind: ChannelKind::Email,
            href: "mailto:camila@example.com",
            display: "camila@example.com",
        },
        ContactChannel {
            kind: ChannelKind::Phone,
            href: "tel:+1234567890",
            display: "+1 (234) 567-890",
        },
        ContactChannel {
            kind: ChannelKind::Instagram,
            href: "https://instagram.com",
            display: "Instagram",
        },
        ContactChannel {
            kind: ChannelKind::Linkedin,
            href: "https://linkedin.com",
            display: "LinkedIn",
        },
    ]
}
