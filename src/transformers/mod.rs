/*! Wikitext transformers.

Each rule strips one kind of markup. [MarkupCleaner] chains them in a fixed order:

1. [Templates]: `{{...}}`, nested ones included
1. [Links]: `[[target|label]]` → `label`, `[[target]]` → `target`
1. [Headings]: `== ... ==`
1. [Tags]: `<ref>...</ref>`, comments and HTML-like tags
1. [Emphasis]: `''` and `'''`
1. [Whitespace]: runs collapsed to a single space

This is a lexical pass, not a parser: malformed markup may leave residue.
!*/
mod cleaner;
mod emphasis;
mod headings;
mod links;
mod tags;
mod templates;
mod transform;
mod whitespace;

pub use cleaner::{Clean, MarkupCleaner};
pub use emphasis::Emphasis;
pub use headings::Headings;
pub use links::{Links, HIDDEN_NAMESPACES};
pub use tags::Tags;
pub use templates::Templates;
pub use transform::Transform;
pub use whitespace::Whitespace;
