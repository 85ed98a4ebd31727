//! Database entity models for folio-db.
//!
//! These models represent the database tables and provide
//! type-safe interactions with PostgreSQL.

pub mod achievement;
pub mod blog_post;
pub mod certification;
pub mod contact_message;
pub mod project;
pub mod resume;
pub mod skill;

pub use achievement::Achievement;
pub use blog_post::BlogPost;
pub use certification::Certification;
pub use contact_message::{ContactMessage, CreateContactMessage};
pub use project::Project;
pub use resume::ResumeFile;
pub use skill::{ProficiencyLevel, Skill};
