//! Resolution of the command-line catalog argument.

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use rcatalog::{CatalogProvider, EmbeddedCatalogProvider, JsonCatalogProvider, VirtualCatalogProvider};

const VIRTUAL_PREFIX: &str = "virtual:";

/// Seed used for `virtual:N` catalogs
const VIRTUAL_SEED: u64 = 42;

/// Where the browser takes its products from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Catalog bundled in the binary
    Embedded,
    /// JSON (or `.br` compressed JSON) file
    File(PathBuf),
    /// Synthetic catalog of N products
    Virtual(usize),
}

impl CatalogSource {
    /// Parses the optional first command-line argument.
    ///
    /// - none → embedded catalog
    /// - `virtual:N` → synthetic catalog of N products
    /// - anything else → file path
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        let Some(arg) = arg.map(str::trim).filter(|arg| !arg.is_empty()) else {
            return Ok(CatalogSource::Embedded);
        };

        if let Some(count) = arg.strip_prefix(VIRTUAL_PREFIX) {
            let count: usize = count
                .parse()
                .with_context(|| format!("Invalid product count in '{}'", arg))?;
            if count == 0 {
                bail!("A virtual catalog needs at least one product");
            }
            return Ok(CatalogSource::Virtual(count));
        }

        Ok(CatalogSource::File(PathBuf::from(arg)))
    }

    pub fn provider(&self) -> Box<dyn CatalogProvider> {
        match self {
            CatalogSource::Embedded => Box::new(EmbeddedCatalogProvider::new()),
            CatalogSource::File(path) => Box::new(JsonCatalogProvider::new(path.clone())),
            CatalogSource::Virtual(count) => {
                Box::new(VirtualCatalogProvider::with_config(*count, VIRTUAL_SEED))
            }
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "embedded catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Virtual(count) => write!(f, "{}{}", VIRTUAL_PREFIX, count),
        }
    }
}
