use super::{ribbon_mesh, simplify, tessellate_with, ConfigError, CurveSample, RibbonMesh, StrokeConfig};
use glam::Vec2;

/// A gesture in progress.
///
/// Points are appended as input arrives; every [`Stroke::compute_mesh`] rebuilds the ribbon from
/// the full path, so the result depends only on the points appended so far.
#[derive(Debug, Clone)]
pub struct Stroke {
	config: StrokeConfig,
	points: Vec<Vec2>,
}

impl Stroke {
	pub fn new(config: StrokeConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			config,
			points: Vec::new(),
		})
	}

	pub fn config(&self) -> &StrokeConfig {
		&self.config
	}

	pub fn points(&self) -> &[Vec2] {
		&self.points
	}

	pub fn append_point(&mut self, point: Vec2) {
		if !point.is_finite() {
			tracing::warn!(?point, "ignoring non-finite stroke point");
			return;
		}
		self.points.push(point);
	}

	/// Forgets the current gesture so the stroke can be reused for the next one.
	pub fn clear(&mut self) {
		self.points.clear();
	}

	pub fn key_path(&self) -> Vec<Vec2> {
		simplify(&self.points, self.config.min_distance)
	}

	pub fn curve(&self) -> Vec<CurveSample> {
		tessellate_with(
			&self.key_path(),
			self.config.steps_per_segment,
			self.config.normal_policy,
		)
	}

	#[tracing::instrument(level = "trace", skip(self), fields(points = self.points.len()))]
	pub fn compute_mesh(&self) -> RibbonMesh {
		let key_path = self.key_path();
		let curve = tessellate_with(
			&key_path,
			self.config.steps_per_segment,
			self.config.normal_policy,
		);
		let mesh = ribbon_mesh(&curve)
			.half_width(self.config.half_width)
			.reference_width(self.config.reference_width)
			.min_u(self.config.min_u)
			.max_u(self.config.max_u)
			.build();
		tracing::trace!(
			key_points = key_path.len(),
			samples = curve.len(),
			vertices = mesh.vertex_count(),
			triangles = mesh.triangle_count(),
			"computed ribbon mesh"
		);
		mesh
	}
}
