//! Deterministic price and time estimation
//!
//! A pure function from geometry statistics, print configuration, printer
//! profile and catalog tables to a [`PriceBreakdown`]. No side effects and
//! no I/O: the engine is safe to invoke on every slider change.
//!
//! Infill is modeled as a linear scaling of effective material volume, and
//! print time as a linear function of raw volume scaled by printer, layer,
//! nozzle and multicolor factors. Neither is a slicer simulation; both are
//! quoting proxies.
//!
//! Each cost component is rounded to the nearest 0.05 currency unit
//! *before* the components are summed into the total. Summing unrounded
//! components and rounding once would give different cent-level totals;
//! the component-first order is the documented billing behavior and is
//! kept exactly.

use crate::catalog::{Catalog, PrinterProfile};
use crate::error::{Error, Result};
use crate::model::{GeometryStats, PriceBreakdown, PrintConfiguration};

/// Currency increment all cost components are rounded to
pub const CURRENCY_INCREMENT: f64 = 0.05;

/// Hours of handling labor charged per printed unit
const LABOR_HOURS_PER_UNIT: f64 = 0.2;

/// Layer height (mm) at which the layer time factor is 1.0
const REFERENCE_LAYER_HEIGHT_MM: f64 = 0.2;

/// Round an amount to the nearest multiple of `increment`
///
/// Halves round away from zero, which for positive currency amounts is the
/// usual commercial behavior. The result is re-rounded to 2 decimal places
/// to strip floating-point residue left by the division.
///
/// # Arguments
/// * `amount` - The value to round
/// * `increment` - The rounding step, e.g. 0.05
pub fn round_to_increment(amount: f64, increment: f64) -> f64 {
    let stepped = (amount / increment).round() * increment;
    (stepped * 100.0).round() / 100.0
}

/// Round an amount to the nearest [`CURRENCY_INCREMENT`]
pub fn round_currency(amount: f64) -> f64 {
    round_to_increment(amount, CURRENCY_INCREMENT)
}

/// Compute the price and time breakdown for one quote
///
/// Pure function over its inputs. `None` statistics (no file uploaded yet)
/// yield [`PriceBreakdown::zero`].
///
/// # Arguments
/// * `stats` - Analyzer output, if a file has been analyzed
/// * `config` - The user's print parameters
/// * `profile` - The active printer profile
/// * `catalog` - Reference tables for material and nozzle lookups, labor
///   rate and setup fee
///
/// # Errors
/// Fails only when `config` references a material or nozzle missing from
/// the catalog; a configuration that went through
/// [`crate::catalog::reconcile`] cannot trigger either case.
///
/// `config.layer_height_mm > 0` is a caller obligation (enforced by the
/// surrounding UI's fixed layer-height choices) and is not checked here.
pub fn compute_breakdown(
    stats: Option<&GeometryStats>,
    config: &PrintConfiguration,
    profile: &PrinterProfile,
    catalog: &Catalog,
) -> Result<PriceBreakdown> {
    let Some(stats) = stats else {
        return Ok(PriceBreakdown::zero());
    };

    let material = catalog
        .material(&config.material)
        .ok_or_else(|| Error::UnknownMaterial(config.material.clone()))?;
    let nozzle = catalog
        .nozzle(config.nozzle_diameter_mm)
        .ok_or(Error::UnknownNozzle(config.nozzle_diameter_mm))?;

    let quantity = config.quantity as f64;
    let infill_factor = config.infill_percent as f64 / 100.0;

    let used_volume_cm3 = (stats.volume_mm3 / 1000.0) * infill_factor;
    let weight_g = used_volume_cm3 * material.density_g_cm3;
    let material_raw = (weight_g / 1000.0) * material.cost_per_kg * quantity;

    let base_time_hours = (stats.volume_mm3 / 10000.0) * profile.speed_factor;
    let layer_factor = REFERENCE_LAYER_HEIGHT_MM / config.layer_height_mm;
    let multicolor_time_factor = if config.multicolor {
        profile.multicolor_factor
    } else {
        1.0
    };
    let print_time_hours =
        base_time_hours * layer_factor * infill_factor * nozzle.time_factor * multicolor_time_factor;

    // Flat per-color-change surcharge, scaled by how much heavier this
    // printer's multicolor process is than the 1.5-factor baseline
    let multicolor_labor_flat = if config.multicolor {
        2.5 * config.color_count as f64 * (profile.multicolor_factor / 1.5)
    } else {
        0.0
    };
    let labor_raw = LABOR_HOURS_PER_UNIT * catalog.labor_hourly_rate * quantity + multicolor_labor_flat;

    let machine_raw = print_time_hours * profile.hourly_rate * quantity;

    let material_cost = round_currency(material_raw);
    let labor_cost = round_currency(labor_raw);
    let machine_cost = round_currency(machine_raw);

    let setup_fee = round_currency(catalog.base_setup_fee);
    let total = round_currency(setup_fee + material_cost + labor_cost + machine_cost);

    Ok(PriceBreakdown {
        material_cost,
        labor_cost,
        machine_cost,
        total,
        print_time_hours,
    })
}
