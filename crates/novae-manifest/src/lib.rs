pub mod manifest;
pub mod package;

pub use manifest::Manifest;
pub use package::{Package, PackageKind};
