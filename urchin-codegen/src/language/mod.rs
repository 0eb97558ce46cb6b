//! Language-specific abstractions.
//!
//! - [`HelperCodegen`] - Main trait for helper file generators
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, HelperCodegen, PreviewFile};
