//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - main trait for language code generators
//! - [`NamingConvention`] - file layout and reserved-word rules
//! - [`GenerateResult`] - what a generation run wrote
//! - [`PreviewFile`] - generated file preview
//!
//! Type rendering lives in [`TypeMapper`](crate::builder::TypeMapper).

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
