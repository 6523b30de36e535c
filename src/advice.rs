//! Advice collaborator boundary
//!
//! The surrounding product can ask an external consultant service (a
//! large-language-model call) for free-text printing guidance. To the
//! core, that service is a black box behind the [`AdviceProvider`] trait:
//! callers implement it against whatever transport they use, and the crate
//! ships no network code of its own.
//!
//! The boundary must tolerate the collaborator being unavailable. The
//! [`printing_advice`] wrapper converts every provider failure into a
//! fixed, user-facing fallback message and logs the error for diagnostics;
//! it never fails.

use crate::error::Result;
use crate::model::{GeometryStats, PrintConfiguration};
use tracing::warn;

/// Message shown when the advice collaborator cannot be reached
pub const OFFLINE_FALLBACK: &str =
    "The AI consultant is currently offline. Please check your print settings manually.";

/// Snapshot of the data the consultant sees
///
/// Plain data assembled from analyzer output and the user's configuration;
/// the provider turns it into whatever request format its transport needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    /// Model volume in mm³
    pub volume_mm3: f64,
    /// Bounding box extents in mm
    pub bounding_box_mm: [f64; 3],
    /// Triangle count, as a complexity proxy
    pub triangle_count: u32,
    /// Selected material identifier
    pub material: String,
    /// Infill density in percent
    pub infill_percent: u8,
    /// Layer height in mm
    pub layer_height_mm: f64,
    /// Target natural language for the response, e.g. "en" or "de"
    pub language: String,
}

impl AdviceRequest {
    /// Assemble a request from analyzer output and configuration
    pub fn new(stats: &GeometryStats, config: &PrintConfiguration, language: &str) -> Self {
        Self {
            volume_mm3: stats.volume_mm3,
            bounding_box_mm: stats.bounding_box_mm,
            triangle_count: stats.triangle_count,
            material: config.material.clone(),
            infill_percent: config.infill_percent,
            layer_height_mm: config.layer_height_mm,
            language: language.to_string(),
        }
    }

    /// Render the consultant prompt text
    pub fn to_prompt(&self) -> String {
        format!(
            "You are a professional 3D printing consultant. Analyze this 3D model geometry \
             and print settings to provide optimization advice.\n\
             \n\
             MODEL DATA:\n\
             - Volume: {:.2} mm³\n\
             - Bounding Box Dimensions: {:.1} x {:.1} x {:.1} mm\n\
             - Complexity (Triangles): {}\n\
             \n\
             PRINT CONFIGURATION:\n\
             - Material: {}\n\
             - Infill Density: {}%\n\
             - Layer Height: {} mm\n\
             \n\
             Please provide advice in the {} language on:\n\
             1. Printability: Potential overhangs or support needs.\n\
             2. Material Suitability: Is {} ideal for this volume and scale?\n\
             3. Optimization: Specific tips to reduce print time and cost without \
             compromising structural integrity.\n\
             4. Best Orientation: Recommend the optimal build plate orientation.\n\
             \n\
             Response format: Use clean Markdown. Be professional, concise, and helpful.",
            self.volume_mm3,
            self.bounding_box_mm[0],
            self.bounding_box_mm[1],
            self.bounding_box_mm[2],
            self.triangle_count,
            self.material,
            self.infill_percent,
            self.layer_height_mm,
            self.language,
            self.material,
        )
    }
}

/// Transport for the external consultant service
///
/// Implement this against your LLM client of choice. Return
/// [`crate::Error::AdviceUnavailable`] (or any other error) on transport
/// failure; [`printing_advice`] takes care of the user-facing fallback.
///
/// # Example
///
/// ```
/// use printquote::advice::{AdviceProvider, AdviceRequest};
/// use printquote::Result;
///
/// struct CannedAdvisor;
///
/// impl AdviceProvider for CannedAdvisor {
///     fn advise(&self, request: &AdviceRequest) -> Result<String> {
///         Ok(format!("Looks printable in {}.", request.material))
///     }
/// }
/// ```
pub trait AdviceProvider: Send + Sync {
    /// Produce free-text advice for the given request
    ///
    /// # Arguments
    /// * `request` - The model and configuration snapshot to advise on
    fn advise(&self, request: &AdviceRequest) -> Result<String>;
}

/// Ask the consultant for advice, falling back to a fixed message
///
/// Builds an [`AdviceRequest`], calls the provider, and returns its text.
/// Any provider error is logged and replaced by [`OFFLINE_FALLBACK`]; the
/// rest of the UI never sees a hard failure from this boundary.
pub fn printing_advice(
    provider: &dyn AdviceProvider,
    stats: &GeometryStats,
    config: &PrintConfiguration,
    language: &str,
) -> String {
    let request = AdviceRequest::new(stats, config, language);
    match provider.advise(&request) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "advice service failed, returning fallback message");
            OFFLINE_FALLBACK.to_string()
        }
    }
}
