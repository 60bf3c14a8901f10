#![forbid(unsafe_code)]

mod bundled;
mod dataset_file;
mod error;
mod loader;
mod manifest;
mod overlay;

pub use crate::bundled::bundled_dataset;
pub use crate::dataset_file::{DatasetFile, LanguageTerritory, TerritoryEntry};
pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::loader::{load_dataset, load_manifest, load_verified, parse_sha256};
pub use crate::manifest::{DatasetManifest, FileEntry};
pub use crate::overlay::apply_overlay;
