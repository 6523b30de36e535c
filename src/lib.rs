//! # printquote
//!
//! The computational core of a 3D-print price quoting tool: analyze an
//! uploaded model file into aggregate geometry statistics, then compute a
//! deterministic price and time breakdown from those statistics combined
//! with user print parameters and a printer profile.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Binary STL parsing: enclosed volume (divergence theorem), surface
//!   area, bounding box and triangle count
//! - Size-based placeholder estimates for formats without a real parser
//! - Never-failing analysis: malformed input yields fixed fallback
//!   statistics so a quote can always be shown
//! - Deterministic pricing with component-level currency rounding
//! - Injected, immutable reference tables for materials, nozzles and
//!   printer profiles
//!
//! ## Example
//!
//! ```
//! use printquote::{analyzer, pricing, Catalog, PrintConfiguration};
//!
//! # fn main() -> printquote::Result<()> {
//! let catalog = Catalog::standard();
//! let config = PrintConfiguration::default();
//!
//! let analysis = analyzer::analyze(&[0u8; 4096], "bracket.3mf");
//! let breakdown = pricing::compute_breakdown(
//!     Some(&analysis.stats),
//!     &config,
//!     catalog.active_printer().expect("catalog has printers"),
//!     &catalog,
//! )?;
//!
//! println!("total: {:.2}, print time: {:.1} h", breakdown.total, breakdown.print_time_hours);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod advice;
pub mod analyzer;
pub mod catalog;
pub mod error;
pub mod model;
pub mod pricing;

pub use catalog::{
    Catalog, MaterialColor, MaterialProperties, NozzleProfile, PrinterProfile, reconcile,
};
pub use error::{Error, Result};
pub use model::{Analysis, GeometryStats, PriceBreakdown, PrintConfiguration, StatsSource};

impl Analysis {
    /// Analyze a model file on disk
    ///
    /// Reads the file's bytes (the single I/O operation in the crate) and
    /// delegates to [`analyzer::analyze`] with the file name for extension
    /// sniffing. Only the read itself can fail; malformed contents still
    /// produce statistics, with the provenance recorded in
    /// [`StatsSource`].
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the model file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use printquote::Analysis;
    ///
    /// # fn main() -> printquote::Result<()> {
    /// let analysis = Analysis::from_file("model.stl")?;
    /// println!("volume: {:.1} mm³", analysis.stats.volume_mm3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        Ok(analyzer::analyze(&bytes, filename))
    }
}
