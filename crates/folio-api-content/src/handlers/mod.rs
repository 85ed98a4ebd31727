//! HTTP handlers for public portfolio content.

pub mod blog;
pub mod portfolio;
pub mod resume;

pub use blog::{get_blog_post_handler, list_blog_posts_handler};
pub use portfolio::{
    list_achievements_handler, list_certifications_handler, list_projects_handler,
    list_skills_handler,
};
pub use resume::get_resume_handler;
