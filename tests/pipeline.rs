use approx::assert_abs_diff_eq;
use glam::{vec2, Vec2};
use inkribbon::{
	ribbon_mesh, simplify, tessellate, tessellate_with, CurveSample, NormalPolicy, RibbonMesh,
	Stroke, StrokeConfig,
};
use itertools::Itertools;

fn spiral(count: usize) -> Vec<Vec2> {
	(0..count)
		.map(|i| {
			let a = i as f32 * 0.05;
			vec2(a.cos(), a.sin()) * (20.0 + 4.0 * a * a)
		})
		.collect()
}

fn stroke_from(config: StrokeConfig, points: &[Vec2]) -> Stroke {
	let mut stroke = Stroke::new(config).unwrap();
	for &point in points {
		stroke.append_point(point);
	}
	stroke
}

fn check_mesh(mesh: &RibbonMesh, curve: &[CurveSample]) {
	let quads = curve.len() - 1;
	assert_eq!(mesh.vertices.len(), 4 * quads);
	assert_eq!(mesh.tex_u.len(), 4 * quads);
	assert_eq!(mesh.tex_v.len(), 4 * quads);
	assert_eq!(mesh.indices().len(), 6 * quads);
	assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn straight_two_point_stroke() {
	let config = StrokeConfig::builder()
		.min_distance(30.0)
		.steps_per_segment(50)
		.half_width(5.0)
		.build();
	let stroke = stroke_from(config, &[vec2(0.0, 0.0), vec2(10.0, 0.0)]);
	let mesh = stroke.compute_mesh();
	assert_eq!(
		mesh.vertices,
		vec![vec2(0.0, -5.0), vec2(0.0, 5.0), vec2(10.0, -5.0), vec2(10.0, 5.0)]
	);
	assert_eq!(mesh.triangles, vec![[0, 1, 2], [1, 2, 3]]);
}

#[test]
fn empty_input() {
	let mesh = stroke_from(StrokeConfig::default(), &[]).compute_mesh();
	assert!(mesh.vertices.is_empty());
	assert!(mesh.tex_u.is_empty());
	assert!(mesh.tex_v.is_empty());
	assert!(mesh.triangles.is_empty());
}

#[test]
fn jitter_reduces_to_endpoints() {
	let raw = (0..50)
		.map(|i| {
			let i = i as f32;
			vec2(10.0 + 3.0 * (i * 0.9).sin(), 10.0 + 3.0 * (i * 1.3).cos())
		})
		.collect_vec();
	let key_path = simplify(&raw, 30.0);
	assert_eq!(key_path, vec![raw[0], raw[49]]);
}

#[test]
fn closed_stroke_is_rejected() {
	let curve = [vec2(0.0, 0.0), vec2(5.0, 5.0), vec2(10.0, 0.0), vec2(0.0, 0.0)]
		.map(|position| CurveSample {
			position,
			normal: vec2(0.0, 1.0),
		});
	let mesh = ribbon_mesh(&curve).half_width(3.0).reference_width(50.0).build();
	assert!(mesh.is_empty());
}

#[test]
fn spiral_end_to_end() {
	let raw = spiral(400);
	let config = StrokeConfig::builder().steps_per_segment(12).build();
	let stroke = stroke_from(config, &raw);

	let key_path = stroke.key_path();
	assert_eq!(key_path.first(), raw.first());
	assert_eq!(key_path.last(), raw.last());
	for (a, b) in key_path[..key_path.len() - 1].iter().tuple_windows() {
		assert!(a.distance(*b) >= config.min_distance);
	}

	let curve = stroke.curve();
	assert_eq!(curve.len(), (key_path.len() - 2) * 12 + 1);
	for sample in &curve {
		assert_abs_diff_eq!(sample.normal.length(), 1.0, epsilon = 1e-6);
	}

	let mesh = stroke.compute_mesh();
	check_mesh(&mesh, &curve);
	assert!(mesh.tex_u.iter().all(|u| (config.min_u..=config.max_u).contains(u)));
	assert_eq!(mesh, stroke.compute_mesh());

	let bounds = mesh.bounds();
	assert!(curve.iter().all(|s| bounds.contains(s.position)));
}

#[test]
fn ribbon_edges_sit_half_width_from_the_curve() {
	let key_path = spiral(200).into_iter().step_by(20).collect_vec();
	let curve = tessellate(&key_path, 10);
	let mesh = ribbon_mesh(&curve).half_width(4.0).reference_width(64.0).build();
	check_mesh(&mesh, &curve);
	for (quad, corners) in mesh.vertices.chunks(4).enumerate() {
		let (left, right) = (curve[quad].position, curve[quad + 1].position);
		assert_abs_diff_eq!(corners[0].distance(left), 4.0, epsilon = 1e-3);
		assert_abs_diff_eq!(corners[1].distance(left), 4.0, epsilon = 1e-3);
		assert_abs_diff_eq!(corners[2].distance(right), 4.0, epsilon = 1e-3);
		assert_abs_diff_eq!(corners[3].distance(right), 4.0, epsilon = 1e-3);
	}
}

#[test]
fn stationary_pointer() {
	let p = vec2(7.0, 7.0);
	let raw = vec![p; 10];
	let key_path = simplify(&raw, 30.0);
	assert_eq!(key_path, vec![p, p]);

	for policy in [NormalPolicy::Zero, NormalPolicy::ReusePrevious] {
		let curve = tessellate_with(&key_path, 8, policy);
		assert_eq!(curve.len(), 2);
		assert!(curve.iter().all(|s| s.normal == Vec2::ZERO));
		let mesh = ribbon_mesh(&curve).half_width(5.0).reference_width(100.0).build();
		check_mesh(&mesh, &curve);
		assert!(mesh.vertices.iter().all(|&v| v == p));
	}
}
