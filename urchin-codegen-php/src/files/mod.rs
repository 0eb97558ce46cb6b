//! PHP helper file generators.

mod assets_class;
mod assets_helper;

pub use assets_class::AssetsClass;
pub use assets_helper::AssetsHelper;

/// Doc block placed at the top of every generated file.
fn header(generated_at: &str) -> String {
    format!("This file was automatically generated on {generated_at}. DO NOT modify directly.")
}
