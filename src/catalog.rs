//! Reference configuration tables
//!
//! Materials, nozzles and printer profiles are static reference data:
//! loaded once at process start, read-only afterwards, and passed
//! explicitly to the pricing engine. [`Catalog::standard`] carries the
//! production tables; tests inject synthetic catalogs through the same
//! type.
//!
//! The [`reconcile`] function restores a [`PrintConfiguration`] to a valid
//! state whenever the tables or the selection change: disabled materials,
//! colors the material does not offer, and disabled nozzles are all reset
//! to sensible defaults in one pure pass instead of scattered UI fixups.

use crate::model::{GeometryStats, PrintConfiguration};

/// A single color offered for a material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialColor {
    /// Display name, e.g. "Schwarz" or "Clear"
    pub name: String,
    /// Color value as a `#RRGGBB` hex string
    pub hex: String,
}

impl MaterialColor {
    /// Create a color entry
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Physical and commercial properties of a printable material
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperties {
    /// Unique identifier, e.g. "PLA"
    pub id: String,
    /// Density in g/cm³, > 0
    pub density_g_cm3: f64,
    /// Filament cost per kilogram, >= 0
    pub cost_per_kg: f64,
    /// Whether this material is currently offered
    pub enabled: bool,
    /// Colors offered for this material
    pub colors: Vec<MaterialColor>,
}

impl MaterialProperties {
    /// Find a color by hex value
    pub fn color_by_hex(&self, hex: &str) -> Option<&MaterialColor> {
        self.colors.iter().find(|c| c.hex == hex)
    }

    /// The default color for this material
    ///
    /// Prefers a color named "Black" or "Schwarz"; falls back to the first
    /// listed color. Returns None when the material defines no colors.
    pub fn default_color(&self) -> Option<&MaterialColor> {
        self.colors
            .iter()
            .find(|c| c.name == "Black" || c.name == "Schwarz")
            .or_else(|| self.colors.first())
    }
}

/// A nozzle size option with its effect on print time
#[derive(Debug, Clone, PartialEq)]
pub struct NozzleProfile {
    /// Nozzle diameter in mm
    pub diameter_mm: f64,
    /// Whether this nozzle is currently offered
    pub enabled: bool,
    /// Multiplier applied to base print time; smaller = faster
    pub time_factor: f64,
    /// Optional display label
    pub label: Option<String>,
}

impl NozzleProfile {
    /// Create a nozzle profile
    pub fn new(diameter_mm: f64, enabled: bool, time_factor: f64) -> Self {
        Self {
            diameter_mm,
            enabled,
            time_factor,
            label: None,
        }
    }
}

/// Machine-specific constants for one physical printer
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterProfile {
    /// Operating cost per hour of machine time
    pub hourly_rate: f64,
    /// Relative print speed; 1.0 = baseline, lower = faster
    pub speed_factor: f64,
    /// Multiplier applied to time and labor when multicolor is active
    pub multicolor_factor: f64,
    /// Usable build volume in mm (x, y, z)
    pub build_volume_mm: [f64; 3],
}

impl PrinterProfile {
    /// Whether a model's bounding box fits inside this printer's build volume
    pub fn accommodates(&self, stats: &GeometryStats) -> bool {
        stats
            .bounding_box_mm
            .iter()
            .zip(self.build_volume_mm.iter())
            .all(|(extent, limit)| extent <= limit)
    }
}

/// Immutable reference tables consumed by the pricing engine
///
/// Constructed once at startup and passed by reference wherever needed.
/// There is no hidden global: tests build small synthetic catalogs with
/// the same constructors the production tables use.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Available materials
    pub materials: Vec<MaterialProperties>,
    /// Available nozzle sizes
    pub nozzles: Vec<NozzleProfile>,
    /// Printer profiles by name
    pub printers: Vec<(String, PrinterProfile)>,
    /// Name of the profile used for quoting
    pub default_printer: String,
    /// Flat fee added to every quote, pre-rounded before summation
    pub base_setup_fee: f64,
    /// Labor rate per hour used for the per-unit handling charge
    pub labor_hourly_rate: f64,
    /// Whether the multicolor option is offered at all
    pub multicolor_enabled: bool,
}

impl Catalog {
    /// The production catalog
    ///
    /// Material densities and costs, nozzle factors and printer constants
    /// match the values quoted to customers. Disabled entries stay in the
    /// table so they can be switched back on without a data change.
    pub fn standard() -> Self {
        Self {
            materials: vec![
                MaterialProperties {
                    id: "PLA".to_string(),
                    density_g_cm3: 1.24,
                    cost_per_kg: 25.0,
                    enabled: true,
                    colors: vec![
                        MaterialColor::new("Schwarz", "#000000"),
                        MaterialColor::new("Kalt-Weiss", "#FFFFFF"),
                    ],
                },
                MaterialProperties {
                    id: "PETG".to_string(),
                    density_g_cm3: 1.27,
                    cost_per_kg: 30.0,
                    enabled: false,
                    colors: vec![
                        MaterialColor::new("White", "#FFFFFF"),
                        MaterialColor::new("Black", "#000000"),
                        MaterialColor::new("Clear", "#EAF6FF"),
                        MaterialColor::new("Cyan", "#06B6D4"),
                        MaterialColor::new("Green", "#10B981"),
                    ],
                },
                MaterialProperties {
                    id: "ABS".to_string(),
                    density_g_cm3: 1.04,
                    cost_per_kg: 28.0,
                    enabled: false,
                    colors: vec![
                        MaterialColor::new("Black", "#000000"),
                        MaterialColor::new("Grey", "#6B7280"),
                        MaterialColor::new("Red", "#DC2626"),
                        MaterialColor::new("Orange", "#F59E0B"),
                        MaterialColor::new("Blue", "#2563EB"),
                    ],
                },
                MaterialProperties {
                    id: "TPU".to_string(),
                    density_g_cm3: 1.21,
                    cost_per_kg: 40.0,
                    enabled: true,
                    colors: vec![MaterialColor::new("Schwarz", "#000000")],
                },
                MaterialProperties {
                    id: "NYLON".to_string(),
                    density_g_cm3: 1.1,
                    cost_per_kg: 60.0,
                    enabled: false,
                    colors: vec![
                        MaterialColor::new("Natural", "#F5F5F4"),
                        MaterialColor::new("Black", "#000000"),
                        MaterialColor::new("Grey", "#9CA3AF"),
                    ],
                },
            ],
            nozzles: vec![
                NozzleProfile {
                    diameter_mm: 0.2,
                    enabled: false,
                    time_factor: 2.0,
                    label: Some("0.2".to_string()),
                },
                NozzleProfile {
                    diameter_mm: 0.4,
                    enabled: true,
                    time_factor: 1.0,
                    label: Some("0.4".to_string()),
                },
                NozzleProfile {
                    diameter_mm: 0.6,
                    enabled: false,
                    time_factor: 0.6,
                    label: Some("0.6".to_string()),
                },
            ],
            printers: vec![
                (
                    "Default".to_string(),
                    PrinterProfile {
                        hourly_rate: 2.0,
                        speed_factor: 1.0,
                        multicolor_factor: 1.5,
                        build_volume_mm: [200.0, 200.0, 200.0],
                    },
                ),
                (
                    "BambuLab H2C".to_string(),
                    PrinterProfile {
                        hourly_rate: 6.0,
                        speed_factor: 0.20,
                        multicolor_factor: 1.3,
                        build_volume_mm: [256.0, 256.0, 256.0],
                    },
                ),
                (
                    "BambuLab P2S".to_string(),
                    PrinterProfile {
                        hourly_rate: 5.0,
                        speed_factor: 0.25,
                        multicolor_factor: 1.2,
                        build_volume_mm: [256.0, 256.0, 256.0],
                    },
                ),
                (
                    "Creality Ender 3 V2".to_string(),
                    PrinterProfile {
                        hourly_rate: 1.5,
                        speed_factor: 1.0,
                        multicolor_factor: 0.0,
                        build_volume_mm: [210.0, 220.0, 250.0],
                    },
                ),
            ],
            default_printer: "Creality Ender 3 V2".to_string(),
            base_setup_fee: 5.0,
            labor_hourly_rate: 15.0,
            multicolor_enabled: false,
        }
    }

    /// Look up a material by identifier
    pub fn material(&self, id: &str) -> Option<&MaterialProperties> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up a nozzle by diameter
    pub fn nozzle(&self, diameter_mm: f64) -> Option<&NozzleProfile> {
        self.nozzles
            .iter()
            .find(|n| (n.diameter_mm - diameter_mm).abs() < 1e-9)
    }

    /// Look up a printer profile by name
    pub fn printer(&self, name: &str) -> Option<&PrinterProfile> {
        self.printers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// The profile quotes are computed against
    ///
    /// Falls back to the first listed profile if the configured default
    /// name is missing from the table.
    pub fn active_printer(&self) -> Option<&PrinterProfile> {
        self.printer(&self.default_printer)
            .or_else(|| self.printers.first().map(|(_, p)| p))
    }

    /// Materials currently offered
    pub fn enabled_materials(&self) -> impl Iterator<Item = &MaterialProperties> {
        self.materials.iter().filter(|m| m.enabled)
    }

    /// Nozzles currently offered
    pub fn enabled_nozzles(&self) -> impl Iterator<Item = &NozzleProfile> {
        self.nozzles.iter().filter(|n| n.enabled)
    }
}

/// Restore a configuration to a state consistent with the catalog
///
/// Invoked whenever the material table or the user's selection changes:
/// - an unknown or disabled material is replaced by the first enabled one;
/// - a color the material does not offer is replaced by "Black"/"Schwarz"
///   if present, else the material's first color;
/// - multicolor is switched off when the catalog does not offer it, and
///   the color count is clamped to 2–7;
/// - a nozzle diameter the catalog does not offer is replaced by the first
///   enabled nozzle.
///
/// Pure function: the input configuration is not modified.
pub fn reconcile(config: &PrintConfiguration, catalog: &Catalog) -> PrintConfiguration {
    let mut out = config.clone();

    let material_ok = catalog
        .material(&out.material)
        .map(|m| m.enabled)
        .unwrap_or(false);
    if !material_ok {
        if let Some(first) = catalog.enabled_materials().next() {
            out.material = first.id.clone();
        }
    }

    if let Some(material) = catalog.material(&out.material) {
        if !material.colors.is_empty() && material.color_by_hex(&out.color).is_none() {
            if let Some(color) = material.default_color() {
                out.color = color.hex.clone();
            }
        }
    }

    if !catalog.multicolor_enabled {
        out.multicolor = false;
    }
    out.color_count = out.color_count.clamp(2, 7);

    let nozzle_ok = catalog
        .nozzle(out.nozzle_diameter_mm)
        .map(|n| n.enabled)
        .unwrap_or(false);
    if !nozzle_ok {
        if let Some(first) = catalog.enabled_nozzles().next() {
            out.nozzle_diameter_mm = first.diameter_mm;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_lookups() {
        let catalog = Catalog::standard();

        let pla = catalog.material("PLA").unwrap();
        assert_eq!(pla.density_g_cm3, 1.24);
        assert_eq!(pla.cost_per_kg, 25.0);
        assert!(pla.enabled);

        let nozzle = catalog.nozzle(0.4).unwrap();
        assert_eq!(nozzle.time_factor, 1.0);
        assert!(nozzle.enabled);

        let ender = catalog.printer("Creality Ender 3 V2").unwrap();
        assert_eq!(ender.hourly_rate, 1.5);
        assert_eq!(ender.speed_factor, 1.0);

        assert!(catalog.material("RESIN").is_none());
        assert!(catalog.nozzle(0.8).is_none());
    }

    #[test]
    fn test_active_printer_is_default() {
        let catalog = Catalog::standard();
        let active = catalog.active_printer().unwrap();
        assert_eq!(active.hourly_rate, 1.5);
    }

    #[test]
    fn test_active_printer_falls_back_to_first() {
        let mut catalog = Catalog::standard();
        catalog.default_printer = "gone".to_string();
        let active = catalog.active_printer().unwrap();
        assert_eq!(active.hourly_rate, 2.0);
    }

    #[test]
    fn test_enabled_materials_filtered() {
        let catalog = Catalog::standard();
        let ids: Vec<_> = catalog.enabled_materials().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["PLA", "TPU"]);
    }

    #[test]
    fn test_default_color_prefers_black() {
        let catalog = Catalog::standard();
        let abs = catalog.material("ABS").unwrap();
        assert_eq!(abs.default_color().unwrap().name, "Black");

        let pla = catalog.material("PLA").unwrap();
        assert_eq!(pla.default_color().unwrap().name, "Schwarz");
    }

    #[test]
    fn test_reconcile_disabled_material() {
        let catalog = Catalog::standard();
        let config = PrintConfiguration {
            material: "PETG".to_string(),
            ..PrintConfiguration::default()
        };
        let fixed = reconcile(&config, &catalog);
        assert_eq!(fixed.material, "PLA");
    }

    #[test]
    fn test_reconcile_unknown_material() {
        let catalog = Catalog::standard();
        let config = PrintConfiguration {
            material: "RESIN".to_string(),
            ..PrintConfiguration::default()
        };
        let fixed = reconcile(&config, &catalog);
        assert_eq!(fixed.material, "PLA");
    }

    #[test]
    fn test_reconcile_invalid_color() {
        let catalog = Catalog::standard();
        let config = PrintConfiguration {
            color: "#FF00FF".to_string(),
            ..PrintConfiguration::default()
        };
        let fixed = reconcile(&config, &catalog);
        // PLA offers Schwarz and Kalt-Weiss; Schwarz wins
        assert_eq!(fixed.color, "#000000");
    }

    #[test]
    fn test_reconcile_keeps_valid_selection() {
        let catalog = Catalog::standard();
        let config = PrintConfiguration {
            color: "#FFFFFF".to_string(),
            ..PrintConfiguration::default()
        };
        let fixed = reconcile(&config, &catalog);
        assert_eq!(fixed, config);
    }

    #[test]
    fn test_reconcile_disabled_nozzle() {
        let catalog = Catalog::standard();
        let config = PrintConfiguration {
            nozzle_diameter_mm: 0.6,
            ..PrintConfiguration::default()
        };
        let fixed = reconcile(&config, &catalog);
        assert_eq!(fixed.nozzle_diameter_mm, 0.4);
    }

    #[test]
    fn test_reconcile_forces_multicolor_off() {
        let catalog = Catalog::standard();
        let config = PrintConfiguration {
            multicolor: true,
            color_count: 9,
            ..PrintConfiguration::default()
        };
        let fixed = reconcile(&config, &catalog);
        assert!(!fixed.multicolor);
        assert_eq!(fixed.color_count, 7);
    }

    #[test]
    fn test_accommodates() {
        let catalog = Catalog::standard();
        let ender = catalog.printer("Creality Ender 3 V2").unwrap();

        let small = GeometryStats::new(1000.0, 600.0, [10.0, 10.0, 10.0], 12);
        assert!(ender.accommodates(&small));

        let tall = GeometryStats::new(1000.0, 600.0, [10.0, 10.0, 300.0], 12);
        assert!(!ender.accommodates(&tall));
    }
}
