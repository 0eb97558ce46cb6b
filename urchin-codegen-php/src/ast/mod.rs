//! PHP AST builders for generating functions, classes and array literals.
//!
//! These provide a high-level API for constructing PHP syntax, which is then
//! rendered through [`CodeBuilder`](urchin_codegen::CodeBuilder).

mod class;
mod fns;
mod value;

pub use class::Class;
pub use fns::{Function, Param, Visibility};
pub use value::{PhpValue, quote};
