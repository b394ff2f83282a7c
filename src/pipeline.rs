//! The fixed preprocessing sequence and its configuration record.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::buffer::RasterBuffer;
use crate::error::PrepError;
use crate::filters;

/// Tunable parameters of the fixed pipeline. The defaults are the values
/// the document preset ships with; callers adjust them here instead of
/// touching filter code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Neighborhood side for divisive normalization.
    pub window: u32,
    /// Brightness shift applied in the final adjustment step.
    pub brightness: f64,
    /// Contrast multiplier applied in the final adjustment step.
    pub contrast: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window: 10,
            brightness: 10.0,
            contrast: 50.0,
        }
    }
}

/// Timing information for a single pipeline step.
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats.
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessResult {
    /// Preprocessed image (not serialized).
    #[serde(skip)]
    pub image: RasterBuffer,
    /// Total preprocessing time in milliseconds.
    pub total_time_ms: u64,
    /// Individual step timings, in execution order.
    pub steps: Vec<StepTiming>,
}

/// The fixed document-preprocessing sequence:
/// grayscale, dilate, divisive normalization, erode, brightness/contrast.
///
/// The path is linear with no branching; the only failure modes are a
/// malformed buffer (rejected when the [`RasterBuffer`] is constructed)
/// and an invalid configuration (rejected here before the first step runs).
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full sequence over `image`.
    pub fn process(&self, image: RasterBuffer) -> Result<PreprocessResult, PrepError> {
        // Config is checked before any step touches the buffer.
        if self.config.window < 1 {
            return Err(PrepError::InvalidParameter {
                name: "window",
                reason: format!("must be at least 1, got {}", self.config.window),
            });
        }

        let start = Instant::now();
        let mut steps = Vec::new();
        let window = self.config.window;
        let (brightness, contrast) = (self.config.brightness, self.config.contrast);

        let mut img = image;
        img = run_step("grayscale", img, &mut steps, filters::grayscale::apply)?;
        img = run_step("dilate", img, &mut steps, filters::morphology::dilate)?;
        img = run_step("normalize", img, &mut steps, |img| {
            filters::normalize::apply(img, window)
        })?;
        img = run_step("erode", img, &mut steps, filters::morphology::erode)?;
        img = run_step("brightness_contrast", img, &mut steps, |img| {
            filters::adjust::apply(img, brightness, contrast)
        })?;

        let total_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            total_ms = total_time_ms,
            width = img.width(),
            height = img.height(),
            "preprocessing complete"
        );

        Ok(PreprocessResult {
            image: img,
            total_time_ms,
            steps,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

/// Run the default pipeline and return just the image.
pub fn preprocess(image: RasterBuffer) -> Result<RasterBuffer, PrepError> {
    Pipeline::default().process(image).map(|result| result.image)
}

fn run_step<F>(
    name: &'static str,
    image: RasterBuffer,
    timings: &mut Vec<StepTiming>,
    step_fn: F,
) -> Result<RasterBuffer, PrepError>
where
    F: FnOnce(RasterBuffer) -> Result<RasterBuffer, PrepError>,
{
    let step_start = Instant::now();
    let result = step_fn(image)?;
    let time_ms = step_start.elapsed().as_millis() as u64;
    tracing::debug!(step = name, elapsed_ms = time_ms, "pipeline step finished");
    timings.push(StepTiming {
        name: name.to_string(),
        time_ms,
    });
    Ok(result)
}
