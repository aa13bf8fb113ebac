//! CLI command implementations

pub mod categories;
pub mod select;
pub mod serve;
pub mod templates;

pub use categories::CategoriesCommand;
pub use select::SelectCommand;
pub use serve::ServeCommand;
pub use templates::TemplatesCommand;

use console::Emoji;

static POPULAR: Emoji = Emoji("★", "*");
