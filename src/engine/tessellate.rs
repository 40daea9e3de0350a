use super::bezier::{self, Bezier};
use glam::Vec2;
use itertools::Itertools;

/// A point on the tessellated stroke and the unit normal there.
///
/// `normal` is [`Vec2::ZERO`] where the curve has no defined tangent.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CurveSample {
	pub position: Vec2,
	pub normal: Vec2,
}

/// What to do with samples whose tangent vanishes, e.g. when the pointer sat still and produced
/// coincident control points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NormalPolicy {
	/// Keep the zero normal. The ribbon pinches to zero width at that sample.
	#[default]
	Zero,
	/// Substitute the most recent non-zero normal. Leading degenerate samples stay zero.
	ReusePrevious,
}

/// Builds the chain of quadratic segments that smooths a key path.
///
/// Segment `i` is controlled by key point `i + 1` and runs between the midpoints of the key-point
/// pairs on either side, so adjacent segments share both an anchor and a tangent direction. The
/// first segment starts on the first key point and the last segment ends on the last key point.
///
/// Key paths with fewer than three points produce no segments.
pub fn quadratic_chain(key_path: &[Vec2]) -> impl Iterator<Item = Bezier> + '_ {
	let last_segment = key_path.len().saturating_sub(3);
	key_path
		.iter()
		.tuple_windows()
		.enumerate()
		.map(move |(i, (&a, &b, &c))| {
			let start = if i == 0 { a } else { (a + b) * 0.5 };
			let end = if i == last_segment { c } else { (b + c) * 0.5 };
			Bezier::Quadratic([start, b, end])
		})
}

/// Tessellates a key path into a dense curve, keeping zero normals where the tangent vanishes.
pub fn tessellate(key_path: &[Vec2], steps_per_segment: u32) -> Vec<CurveSample> {
	tessellate_with(key_path, steps_per_segment, NormalPolicy::Zero)
}

/// Tessellates a key path into a dense curve.
///
/// - Fewer than two key points cannot form a curve, so the result is empty.
/// - Two key points form a straight segment: both endpoints verbatim, sharing one normal.
/// - Otherwise every segment of [`quadratic_chain`] is sampled at `steps_per_segment + 1` evenly
///   spaced parameters, `t = 1` included. Each join is emitted once, so the curve has
///   `(key_path.len() - 2) * steps_per_segment + 1` samples.
///
/// A `steps_per_segment` of zero is treated as one.
pub fn tessellate_with(
	key_path: &[Vec2],
	steps_per_segment: u32,
	policy: NormalPolicy,
) -> Vec<CurveSample> {
	let steps = steps_per_segment.max(1);
	let samples = match key_path {
		[] | [_] => return Vec::new(),
		&[p0, p1] => {
			let normal = bezier::normal(p1 - p0);
			vec![
				CurveSample {
					position: p0,
					normal,
				},
				CurveSample {
					position: p1,
					normal,
				},
			]
		}
		_ => {
			let segment_count = key_path.len() - 2;
			let mut samples = Vec::with_capacity(segment_count * steps as usize + 1);
			for (i, segment) in quadratic_chain(key_path).enumerate() {
				// Each later segment starts on the previous segment's final sample.
				let first_step = if i == 0 { 0 } else { 1 };
				samples.extend((first_step..=steps).map(|step| {
					let t = step as f32 / steps as f32;
					CurveSample {
						position: segment.point(t),
						normal: segment.normal(t),
					}
				}));
			}
			samples
		}
	};

	match policy {
		NormalPolicy::Zero => samples,
		NormalPolicy::ReusePrevious => reuse_previous_normals(samples),
	}
}

fn reuse_previous_normals(mut samples: Vec<CurveSample>) -> Vec<CurveSample> {
	let mut previous = Vec2::ZERO;
	for sample in &mut samples {
		if sample.normal == Vec2::ZERO {
			sample.normal = previous;
		} else {
			previous = sample.normal;
		}
	}
	samples
}
