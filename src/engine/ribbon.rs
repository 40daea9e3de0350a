use super::CurveSample;
use crate::geom::AABox;
use bon::builder;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use itertools::Itertools;

/// Interleaved vertex layout for uploading a [`RibbonMesh`] to the GPU.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RibbonVertex {
	pub position: [f32; 2],
	pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(RibbonVertex, [f32; 4]);

/// A quad strip following a stroke, two triangles per pair of adjacent curve samples.
///
/// Every quad owns its four vertices, ordered bottom-left, top-left, bottom-right, top-right.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RibbonMesh {
	pub vertices: Vec<Vec2>,
	pub tex_u: Vec<f32>,
	pub tex_v: Vec<f32>,
	pub triangles: Vec<[u32; 3]>,
}

impl RibbonMesh {
	fn with_quad_capacity(quads: usize) -> Self {
		Self {
			vertices: Vec::with_capacity(4 * quads),
			tex_u: Vec::with_capacity(4 * quads),
			tex_v: Vec::with_capacity(4 * quads),
			triangles: Vec::with_capacity(2 * quads),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn triangle_count(&self) -> usize {
		self.triangles.len()
	}

	/// Triangle indices flattened into a single index buffer.
	pub fn indices(&self) -> &[u32] {
		bytemuck::cast_slice(&self.triangles)
	}

	pub fn interleaved(&self) -> Vec<RibbonVertex> {
		self
			.vertices
			.iter()
			.zip(&self.tex_u)
			.zip(&self.tex_v)
			.map(|((position, &u), &v)| RibbonVertex {
				position: position.to_array(),
				uv: [u, v],
			})
			.collect()
	}

	pub fn bounds(&self) -> AABox {
		AABox::containing(self.vertices.iter().copied())
	}

	fn push_quad(&mut self, corners: [Vec2; 4], u0: f32, u1: f32) {
		let offset = self.vertices.len() as u32;
		self.vertices.extend(corners);
		self.tex_u.extend([u0, u0, u1, u1]);
		self.tex_v.extend([1.0, 0.0, 1.0, 0.0]);
		self
			.triangles
			.extend([[offset, offset + 1, offset + 2], [offset + 1, offset + 2, offset + 3]]);
	}
}

/// Maps a distance along the stroke to a U coordinate that tiles every `reference_width` and
/// stays within `[min_u, max_u]`.
fn tile_u(length: f32, reference_width: f32, min_u: f32, max_u: f32) -> f32 {
	let u = (length / reference_width).fract();
	if u < min_u {
		min_u
	} else if u > max_u {
		max_u
	} else {
		u
	}
}

/// Builds the ribbon mesh for a tessellated curve.
///
/// Each sample is offset by `half_width` along its normal to either side. U tiles with the
/// cumulative distance between samples, clamped to `[min_u, max_u]` so sampling stays clear of
/// the texture's edges; V is 1 on the bottom edge and 0 on the top edge.
///
/// Curves with fewer than two samples produce an empty mesh, as do closed curves (more than two
/// samples with the last landing exactly on the first). So does a `reference_width` that is not
/// finite and positive, or a band with `min_u > max_u`, since no U could honor it.
#[builder(finish_fn = build)]
pub fn ribbon_mesh(
	#[builder(start_fn)] curve: &[CurveSample],
	half_width: f32,
	reference_width: f32,
	#[builder(default = 0.0)] min_u: f32,
	#[builder(default = 1.0)] max_u: f32,
) -> RibbonMesh {
	let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
		return RibbonMesh::default();
	};
	if !(reference_width.is_finite() && reference_width > 0.0 && min_u <= max_u) {
		tracing::debug!(
			reference_width,
			min_u,
			max_u,
			"refusing to build a ribbon without a valid texture band"
		);
		return RibbonMesh::default();
	}
	if curve.len() > 2 && first.position == last.position {
		tracing::debug!(samples = curve.len(), "refusing to build a ribbon for a closed curve");
		return RibbonMesh::default();
	}

	let mut mesh = RibbonMesh::with_quad_capacity(curve.len().saturating_sub(1));
	let mut length = 0.0;
	for (a, b) in curve.iter().tuple_windows() {
		let offset_a = a.normal * half_width;
		let offset_b = b.normal * half_width;
		let u0 = tile_u(length, reference_width, min_u, max_u);
		length += a.position.distance(b.position);
		let u1 = tile_u(length, reference_width, min_u, max_u);
		mesh.push_quad(
			[
				a.position - offset_a,
				a.position + offset_a,
				b.position - offset_b,
				b.position + offset_b,
			],
			u0,
			u1,
		);
	}
	mesh
}
