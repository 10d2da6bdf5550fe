/*! Filtering utilities

Filters operate on raw articles, before any cleaning.
They implement [Filter], which is pure: the same article always gets the same answer.

Every filter can be built from a [crate::profiles::LanguageProfile], which holds its thresholds.
!*/
mod article;
mod filter;

pub use article::{BulletDensity, Categories, Length, TemplateDensity};
pub use filter::Filter;
