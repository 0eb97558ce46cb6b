//! Shared code generation utilities for urchin.
//!
//! This crate provides the language-agnostic pieces used by helper
//! generators (e.g., `urchin-codegen-php`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - The [`HelperCodegen`](language::HelperCodegen) trait and its result types

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use language::{GenerateResult, HelperCodegen, PreviewFile};
