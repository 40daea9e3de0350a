//! Bezier evaluation for the stroke tessellator.
//!
//! All functions clamp `t` to `[0, 1]` before evaluating, so callers can step past the ends of a
//! segment without extrapolating.

use glam::Vec2;

fn clamp01(t: f32) -> f32 {
	if t < 0.0 {
		0.0
	} else if t > 1.0 {
		1.0
	} else {
		t
	}
}

/// `(1-t)³p₀ + 3(1-t)²t·p₁ + 3(1-t)t²·p₂ + t³p₃`
pub fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
	let s = clamp01(t);
	let r = 1.0 - s;
	let r2 = r * r;
	let s2 = s * s;
	p0 * (r2 * r) + p1 * (3.0 * r2 * s) + p2 * (3.0 * r * s2) + p3 * (s2 * s)
}

/// `3(1-t)²(p₁-p₀) + 6(1-t)t(p₂-p₁) + 3t²(p₃-p₂)`
pub fn cubic_derivative(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
	let s = clamp01(t);
	let r = 1.0 - s;
	(p1 - p0) * (3.0 * r * r) + (p2 - p1) * (6.0 * r * s) + (p3 - p2) * (3.0 * s * s)
}

/// `(1-t)²p₀ + 2(1-t)t·p₁ + t²p₂`
pub fn quadratic_point(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
	let s = clamp01(t);
	let r = 1.0 - s;
	p0 * (r * r) + p1 * (2.0 * r * s) + p2 * (s * s)
}

/// `2(1-t)(p₁-p₀) + 2t(p₂-p₁)`
pub fn quadratic_derivative(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
	let s = clamp01(t);
	(p1 - p0) * (2.0 * (1.0 - s)) + (p2 - p1) * (2.0 * s)
}

/// Unit normal to the left of `derivative`, i.e. the tangent rotated a quarter turn
/// counter-clockwise.
///
/// A zero-length tangent has no direction, so the normal is [`Vec2::ZERO`]. Downstream, a zero normal
/// means "no lateral offset" rather than an error.
pub fn normal(derivative: Vec2) -> Vec2 {
	derivative.perp().normalize_or_zero()
}

/// The two curve degrees a stroke can be built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bezier {
	Quadratic([Vec2; 3]),
	Cubic([Vec2; 4]),
}

impl Bezier {
	pub fn point(&self, t: f32) -> Vec2 {
		match *self {
			Bezier::Quadratic([p0, p1, p2]) => quadratic_point(p0, p1, p2, t),
			Bezier::Cubic([p0, p1, p2, p3]) => cubic_point(p0, p1, p2, p3, t),
		}
	}

	pub fn derivative(&self, t: f32) -> Vec2 {
		match *self {
			Bezier::Quadratic([p0, p1, p2]) => quadratic_derivative(p0, p1, p2, t),
			Bezier::Cubic([p0, p1, p2, p3]) => cubic_derivative(p0, p1, p2, p3, t),
		}
	}

	pub fn normal(&self, t: f32) -> Vec2 {
		normal(self.derivative(t))
	}

	pub fn start(&self) -> Vec2 {
		match self {
			Bezier::Quadratic(p) => p[0],
			Bezier::Cubic(p) => p[0],
		}
	}

	pub fn end(&self) -> Vec2 {
		match self {
			Bezier::Quadratic(p) => p[2],
			Bezier::Cubic(p) => p[3],
		}
	}
}
