//! Raster preprocessing for scanned document images.
//!
//! The crate takes a decoded 8-bit RGBA buffer from an external decoder,
//! runs a fixed binarization/denoising sequence over it, and hands the
//! result back for display or encoding. Decode, encode and presentation
//! stay outside; the library is pure, synchronous computation over an
//! owned [`RasterBuffer`].
//!
//! The default pipeline is grayscale, dilate, divisive normalization,
//! erode, brightness/contrast. Every filter in [`filters`] is also
//! independently callable with explicit parameters; nothing reads hidden
//! global state.
//!
//! ```
//! use docprep::{Pipeline, RasterBuffer};
//!
//! let input = RasterBuffer::filled(4, 4, [128, 128, 128, 255])?;
//! let result = Pipeline::default().process(input)?;
//! assert_eq!(result.image.width(), 4);
//! # Ok::<(), docprep::PrepError>(())
//! ```

pub mod buffer;
pub mod error;
pub mod filters;
mod neighborhood;
pub mod pipeline;

#[cfg(feature = "image")]
mod convert;

pub use buffer::{RasterBuffer, Snapshot};
pub use error::PrepError;
pub use pipeline::{preprocess, Pipeline, PipelineConfig, PreprocessResult, StepTiming};
