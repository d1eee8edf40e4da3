// Format catalog: sport name → scoring profile

pub mod loader;
pub mod registry;

pub use loader::{
    default_catalog, CatalogDocument, SCORING_FORMATS_PATH_ENV, SCORING_FORMATS_YAML,
};
pub use registry::{FormatCatalog, DEFAULT_SPORT};
