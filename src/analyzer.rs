//! Mesh analysis for uploaded model files
//!
//! This module turns an uploaded file's raw bytes into aggregate
//! [`GeometryStats`]: enclosed volume, surface area, axis-aligned bounding
//! box and triangle count.
//!
//! Binary STL is the only format that is truly parsed. The enclosed volume
//! is computed with the divergence theorem (summing, over every triangle,
//! the signed volume of the tetrahedron formed by that triangle and the
//! origin), so the result is independent of where the mesh sits relative
//! to the origin, and winding direction only affects the sign, which is
//! dropped before reporting.
//!
//! Analysis never fails. A malformed STL buffer yields fixed fallback
//! statistics, and non-STL formats get a size-derived placeholder, so the
//! pricing engine downstream always has valid input. Provenance is
//! recorded in [`StatsSource`] for callers that need to tell the cases
//! apart.

use crate::error::{Error, Result};
use crate::model::{Analysis, GeometryStats, StatsSource};
use nalgebra::Vector3;
use std::path::Path;
use tracing::{debug, warn};

/// Length of the ignored binary STL header
const HEADER_LEN: usize = 80;

/// Header plus the 4-byte little-endian triangle count
const PROLOGUE_LEN: usize = HEADER_LEN + 4;

/// Bytes per triangle record: normal (12) + 3 vertices (36) + attribute (2)
const RECORD_LEN: usize = 50;

/// Statistics substituted when STL parsing fails
///
/// A deliberate availability-over-accuracy tradeoff: the user gets a
/// plausible estimate instead of an error screen.
pub fn fallback_stats() -> GeometryStats {
    GeometryStats::new(15000.0, 4000.0, [50.0, 50.0, 50.0], 1000)
}

fn le_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn le_vertex(bytes: &[u8], offset: usize) -> Vector3<f64> {
    Vector3::new(
        le_f32(bytes, offset) as f64,
        le_f32(bytes, offset + 4) as f64,
        le_f32(bytes, offset + 8) as f64,
    )
}

/// Parse a binary STL buffer into geometry statistics
///
/// Layout: 80-byte header (ignored), little-endian `u32` triangle count,
/// then 50-byte records of normal (ignored), three vertices of three
/// little-endian `f32` each, and a 2-byte attribute field (ignored).
///
/// Fails on a buffer shorter than the prologue, a declared count of zero,
/// or a buffer truncated before the declared count is reached. Callers in
/// the upload flow should use [`analyze`] instead, which maps every
/// failure to [`fallback_stats`].
///
/// # Arguments
/// * `bytes` - The raw file contents
///
/// # Returns
/// Geometry statistics with the volume reported as an absolute value, so
/// a consistently inverted winding does not produce a negative volume.
pub fn parse_binary_stl(bytes: &[u8]) -> Result<GeometryStats> {
    if bytes.len() < PROLOGUE_LEN {
        return Err(Error::stl_truncated(PROLOGUE_LEN, bytes.len()));
    }

    let triangle_count = u32::from_le_bytes([
        bytes[HEADER_LEN],
        bytes[HEADER_LEN + 1],
        bytes[HEADER_LEN + 2],
        bytes[HEADER_LEN + 3],
    ]);
    if triangle_count == 0 {
        return Err(Error::InvalidStl(
            "declared triangle count is zero".to_string(),
        ));
    }

    let needed = PROLOGUE_LEN + triangle_count as usize * RECORD_LEN;
    if bytes.len() < needed {
        return Err(Error::stl_truncated(needed, bytes.len()));
    }

    let mut volume = 0.0_f64;
    let mut area = 0.0_f64;
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);

    for i in 0..triangle_count as usize {
        // 12-byte normal is ignored
        let base = PROLOGUE_LEN + i * RECORD_LEN + 12;
        let v1 = le_vertex(bytes, base);
        let v2 = le_vertex(bytes, base + 12);
        let v3 = le_vertex(bytes, base + 24);

        for v in [&v1, &v2, &v3] {
            min = min.inf(v);
            max = max.sup(v);
        }

        // Signed volume contribution of this triangle
        volume += v1.x * (v2.y * v3.z - v2.z * v3.y)
            + v2.x * (v3.y * v1.z - v3.z * v1.y)
            + v3.x * (v1.y * v2.z - v1.z * v2.y);

        area += 0.5 * (v2 - v1).cross(&(v3 - v1)).norm();
    }
    volume /= 6.0;

    let extents = max - min;
    Ok(GeometryStats::new(
        volume.abs(),
        area,
        [extents.x, extents.y, extents.z],
        triangle_count,
    ))
}

/// Derive placeholder statistics from file size alone
///
/// Used for formats without a real parser (`.3mf`, `.step`, `.stp` and
/// anything unrecognized). The model is treated as a cube whose volume is
/// proportional to the byte length, with the surface area discounted by a
/// fixed shape-complexity factor. Pure arithmetic over the length: the
/// same size and extension always produce the same statistics.
///
/// The multipliers encode no real-world calibration. If real parsing for
/// these formats is ever added, this function is to be replaced, not
/// tuned.
pub fn estimate_from_size(file_size: usize, extension: &str) -> GeometryStats {
    let multiplier = match extension {
        "3mf" => 1.2,
        "step" | "stp" => 0.8,
        _ => 0.5,
    };

    let raw_volume = (file_size as f64 * multiplier).clamp(2000.0, 1_000_000.0);
    let side = raw_volume.cbrt().round().max(10.0);
    let surface_area = (6.0 * side * side * 0.6).round();
    let triangle_count = (file_size as f64 / 10.0).round().clamp(100.0, 500_000.0) as u32;

    GeometryStats::new(raw_volume, surface_area, [side, side, side], triangle_count)
}

fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Analyze an uploaded file
///
/// Total function: every input yields statistics. Filenames ending in
/// `.stl` (case-insensitive) go through [`parse_binary_stl`], with parse
/// failures mapped to [`fallback_stats`]; everything else goes through
/// [`estimate_from_size`]. The returned [`Analysis`] records which path
/// produced the statistics.
///
/// # Arguments
/// * `bytes` - The raw file contents
/// * `filename` - The uploaded file's name, used for extension sniffing
pub fn analyze(bytes: &[u8], filename: &str) -> Analysis {
    let extension = extension_of(filename);

    if extension == "stl" {
        match parse_binary_stl(bytes) {
            Ok(stats) => {
                debug!(
                    triangles = stats.triangle_count,
                    volume_mm3 = stats.volume_mm3,
                    "parsed binary STL"
                );
                Analysis::new(stats, StatsSource::ParsedStl)
            }
            Err(e) => {
                warn!(file = filename, error = %e, "STL parse failed, using fallback stats");
                Analysis::new(fallback_stats(), StatsSource::ParseFallback)
            }
        }
    } else {
        debug!(file = filename, size = bytes.len(), "no parser for extension, estimating from size");
        Analysis::new(
            estimate_from_size(bytes.len(), &extension),
            StatsSource::SizeHeuristic,
        )
    }
}
