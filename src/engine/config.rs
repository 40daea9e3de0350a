use super::NormalPolicy;
use bon::Builder;
use thiserror::Error;

pub const DEFAULT_MIN_DISTANCE: f32 = 30.0;
pub const DEFAULT_STEPS_PER_SEGMENT: u32 = 50;
pub const DEFAULT_HALF_WIDTH: f32 = 15.0;
pub const DEFAULT_REFERENCE_WIDTH: f32 = 100.0;
pub const DEFAULT_MIN_U: f32 = 0.1;
pub const DEFAULT_MAX_U: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
	#[error("minimum distance must be finite and non-negative: {0}")]
	InvalidMinDistance(f32),
	#[error("steps per segment must be at least one")]
	ZeroSteps,
	#[error("half width must be finite and positive: {0}")]
	InvalidHalfWidth(f32),
	#[error("reference width must be finite and positive: {0}")]
	InvalidReferenceWidth(f32),
	#[error("texture band [{min_u}, {max_u}] must be ordered and within [0, 1]")]
	InvalidTextureBand { min_u: f32, max_u: f32 },
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// Options for turning a gesture into a ribbon. Fixed for the lifetime of a [`super::Stroke`].
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct StrokeConfig {
	/// Minimum spacing between key points, in path units.
	#[builder(default = DEFAULT_MIN_DISTANCE)]
	pub min_distance: f32,
	/// Samples per quadratic segment.
	#[builder(default = DEFAULT_STEPS_PER_SEGMENT)]
	pub steps_per_segment: u32,
	/// Half the ribbon's thickness.
	#[builder(default = DEFAULT_HALF_WIDTH)]
	pub half_width: f32,
	/// Stroke length covered by one repetition of the texture.
	#[builder(default = DEFAULT_REFERENCE_WIDTH)]
	pub reference_width: f32,
	#[builder(default = DEFAULT_MIN_U)]
	pub min_u: f32,
	#[builder(default = DEFAULT_MAX_U)]
	pub max_u: f32,
	#[builder(default)]
	pub normal_policy: NormalPolicy,
}

impl Default for StrokeConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl StrokeConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		use ConfigError::*;
		if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
			Err(InvalidMinDistance(self.min_distance))?;
		}
		if self.steps_per_segment == 0 {
			Err(ZeroSteps)?;
		}
		if !(self.half_width.is_finite() && self.half_width > 0.0) {
			Err(InvalidHalfWidth(self.half_width))?;
		}
		if !(self.reference_width.is_finite() && self.reference_width > 0.0) {
			Err(InvalidReferenceWidth(self.reference_width))?;
		}
		if !(0.0 <= self.min_u && self.min_u <= self.max_u && self.max_u <= 1.0) {
			Err(InvalidTextureBand {
				min_u: self.min_u,
				max_u: self.max_u,
			})?;
		}
		Ok(())
	}
}
