use glam::Vec2;

/// Reduces a raw pointer path to the key points a stroke is fitted through.
///
/// Greedy and single-pass: starting from the first point, the next point kept is the first one at
/// least `min_distance` away from the previously kept point. The final point is always kept, even
/// when it lies closer than `min_distance` to the previous key point, so the stroke ends exactly
/// where the gesture did.
///
/// Paths with fewer than two points are returned as they are.
pub fn simplify(raw: &[Vec2], min_distance: f32) -> Vec<Vec2> {
	let [first, interior @ .., last] = raw else {
		return raw.to_vec();
	};

	let mut key_points = vec![*first];
	let mut anchor = *first;
	for &point in interior {
		if anchor.distance(point) >= min_distance {
			key_points.push(point);
			anchor = point;
		}
	}
	key_points.push(*last);
	key_points
}
