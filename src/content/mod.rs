//! Static Content Catalog
//!
//! Everything the four sections display: the owner's profile and biography,
//! the project gallery, and the contact channels. The copy is fixed at build
//! time; nothing here is loaded from disk or the network.

pub mod channels;
pub mod profile;
pub mod projects;

pub use channels::{contact_channels, ContactChannel, ChannelKind};
pub use profile::{profile, Profile, Specialty};
pub use projects::{project, projects, Project, ProjectCategory};
