//! Domain layer - Content model and rendering engine

pub mod content;
pub mod context;
pub mod date;
pub mod item;
pub mod link_tagger;
pub mod newsletter;
pub mod section;
pub mod target;
pub mod templates;
pub mod text;

pub use content::{Content, EditorForm, FormItem, Metadata};
pub use context::{Placeholders, RenderContext};
pub use date::format_publication_date;
pub use item::{Item, Rank};
pub use link_tagger::{Campaign, LinkTagger};
pub use newsletter::Newsletter;
pub use section::Section;
pub use target::Target;
pub use templates::TemplateTable;
pub use text::{clean_text, newlines_to_breaks};
