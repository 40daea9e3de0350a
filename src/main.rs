use glam::vec2;
use inkribbon::util::ResultExt;
use inkribbon::{Stroke, StrokeConfig};

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.finish(),
	)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`, for any dependency that logs through the former.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

/// Replays a synthetic swipe through a stroke one input event at a time, recomputing the mesh after
/// each event the way an input loop would.
fn main() -> anyhow::Result<()> {
	// We can technically continue without logging.
	configure_logging().ok_or_log("configuring logging");

	let config = StrokeConfig::builder()
		.min_distance(30.0)
		.steps_per_segment(16)
		.half_width(12.0)
		.reference_width(240.0)
		.build();
	let mut stroke = Stroke::new(config)?;

	for i in 0..240 {
		let x = i as f32 * 4.0;
		stroke.append_point(vec2(x, 80.0 * (x / 150.0).sin()));
		let mesh = stroke.compute_mesh();
		tracing::debug!(vertices = mesh.vertex_count(), "updated stroke");
	}

	let mesh = stroke.compute_mesh();
	let bounds = mesh.bounds();
	tracing::info!(
		points = stroke.points().len(),
		key_points = stroke.key_path().len(),
		vertices = mesh.vertex_count(),
		triangles = mesh.triangle_count(),
		min = ?bounds.min(),
		max = ?bounds.max(),
		"finished stroke"
	);
	Ok(())
}
