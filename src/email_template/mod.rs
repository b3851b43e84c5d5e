mod placeholder;
mod render;
mod templates;

pub use placeholder::{Occurrences, Placeholder, SubstitutionRules};
pub use render::{RenderedEmail, render_email, render_pattern, resolve_template_id};
pub use templates::EmailTemplate;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("`{0}` is not a known email template.")]
    UnknownTemplate(String),
}
