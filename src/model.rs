//! Core data types shared by the analyzer and the pricing engine
//!
//! All types here are plain data: public fields, no behavior beyond small
//! constructors. They flow one way through the system: the analyzer
//! produces [`GeometryStats`], the pricing engine consumes them together
//! with a [`PrintConfiguration`] and produces a [`PriceBreakdown`].

/// Aggregate geometric statistics for an uploaded model
///
/// Produced once per uploaded file and immutable thereafter. A new upload
/// replaces the whole value. All fields are finite; volume and surface area
/// are non-negative by construction (the analyzer reports the absolute
/// value of the signed volume, so inverted winding does not leak a sign).
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryStats {
    /// Enclosed volume in mm³
    pub volume_mm3: f64,
    /// Total surface area in mm²
    pub surface_area_mm2: f64,
    /// Axis-aligned bounding box extents in mm (x, y, z)
    pub bounding_box_mm: [f64; 3],
    /// Number of triangles in the mesh
    pub triangle_count: u32,
}

impl GeometryStats {
    /// Create geometry statistics from raw aggregates
    pub fn new(
        volume_mm3: f64,
        surface_area_mm2: f64,
        bounding_box_mm: [f64; 3],
        triangle_count: u32,
    ) -> Self {
        Self {
            volume_mm3,
            surface_area_mm2,
            bounding_box_mm,
            triangle_count,
        }
    }
}

/// How a [`GeometryStats`] value was obtained
///
/// The analyzer never fails, so provenance is the only way for callers to
/// distinguish a real parse from a substituted estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    /// Parsed from a well-formed binary STL buffer
    ParsedStl,
    /// Derived from file size alone (non-STL extension, no real parser)
    SizeHeuristic,
    /// STL parsing failed; the fixed fallback statistics were substituted
    ParseFallback,
}

/// Analyzer output: statistics plus their provenance
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The computed (or substituted) geometry statistics
    pub stats: GeometryStats,
    /// Where the statistics came from
    pub source: StatsSource,
}

impl Analysis {
    /// Create an analysis result
    pub fn new(stats: GeometryStats, source: StatsSource) -> Self {
        Self { stats, source }
    }
}

/// User-selected print parameters
///
/// Collected by the presentation layer and mutable across a session. The
/// surrounding UI keeps values within valid ranges; when tables or the
/// selection change, [`crate::catalog::reconcile`] restores consistency
/// (enabled material, valid color, enabled nozzle).
#[derive(Debug, Clone, PartialEq)]
pub struct PrintConfiguration {
    /// Identifier of the selected material (must reference the catalog)
    pub material: String,
    /// Infill density in percent, 0–100
    pub infill_percent: u8,
    /// Layer height in mm, must be > 0
    pub layer_height_mm: f64,
    /// Number of copies to print, >= 1
    pub quantity: u32,
    /// Selected color as a hex value; ignored when multicolor is active
    pub color: String,
    /// Whether multicolor printing is active
    pub multicolor: bool,
    /// Number of colors for multicolor printing, 2–7
    pub color_count: u8,
    /// Selected nozzle diameter in mm (must reference the catalog)
    pub nozzle_diameter_mm: f64,
}

impl Default for PrintConfiguration {
    fn default() -> Self {
        Self {
            material: "PLA".to_string(),
            infill_percent: 20,
            layer_height_mm: 0.2,
            quantity: 1,
            color: "#000000".to_string(),
            multicolor: false,
            color_count: 2,
            nozzle_diameter_mm: 0.4,
        }
    }
}

/// Computed price and time estimate
///
/// Recomputed on every configuration or geometry change, never persisted.
/// The three cost components are each independently rounded to the nearest
/// 0.05 currency unit; the print time is left unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    /// Material cost (rounded)
    pub material_cost: f64,
    /// Labor cost: per-unit handling plus any multicolor surcharge (rounded)
    pub labor_cost: f64,
    /// Machine time cost (rounded)
    pub machine_cost: f64,
    /// Grand total including the base setup fee (rounded)
    pub total: f64,
    /// Estimated print duration in hours (unrounded)
    pub print_time_hours: f64,
}

impl PriceBreakdown {
    /// The breakdown shown before any file has been analyzed
    pub fn zero() -> Self {
        Self {
            material_cost: 0.0,
            labor_cost: 0.0,
            machine_cost: 0.0,
            total: 0.0,
            print_time_hours: 0.0,
        }
    }
}
