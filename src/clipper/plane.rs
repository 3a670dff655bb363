//! Clipping one triangle against one plane.
//!
//! Each vertex is classified by its signed distance to the plane
//! (`>= 0` is inside). Depending on how many vertices are inside, the
//! triangle is dropped, passed through, shrunk to a smaller triangle, or the
//! remaining quad is split into two triangles.

use crate::math::vec4::Vec4;
use crate::triangle::Triangle;

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the "inside" (kept) half-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec4,
    pub normal: Vec4,
}

impl Plane {
    /// Creates a plane; the normal is normalized.
    pub fn new(point: Vec4, normal: Vec4) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Returns the signed distance from a point to this plane.
    /// Positive = inside (same side as normal), Negative = outside.
    pub fn signed_distance(&self, position: Vec4) -> f32 {
        self.normal.dot(position) - self.normal.dot(self.point)
    }

    /// Where the segment `inside..outside` crosses this plane.
    fn intersect(&self, inside: Vec4, outside: Vec4) -> Vec4 {
        Vec4::plane_intersect(self.point, self.normal, inside, outside)
    }
}

/// Result of clipping a triangle against a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clipped {
    /// Every vertex was outside.
    Culled,
    /// The input triangle unchanged (all inside) or a smaller one (one inside).
    One(Triangle),
    /// Two inside: the remaining quad as two triangles.
    Two(Triangle, Triangle),
}

impl Clipped {
    pub fn len(&self) -> usize {
        match self {
            Clipped::Culled => 0,
            Clipped::One(_) => 1,
            Clipped::Two(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Clipped::Culled)
    }
}

impl IntoIterator for Clipped {
    type Item = Triangle;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<Triangle>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        let slots = match self {
            Clipped::Culled => [None, None],
            Clipped::One(a) => [Some(a), None],
            Clipped::Two(a, b) => [Some(a), Some(b)],
        };
        slots.into_iter().flatten()
    }
}

/// Clips `triangle` against `plane`, producing 0, 1 or 2 triangles.
///
/// Output vertex order follows the classification order: inside vertices
/// first, then intersections in the order the outside vertices were found.
/// In the two-inside case both output triangles share the first intersection
/// point. The color is copied to every output triangle.
pub fn clip_against_plane(plane: &Plane, triangle: &Triangle) -> Clipped {
    // Slots (0..3) of the input vertices on each side of the plane.
    let mut inside = [0usize; 3];
    let mut outside = [0usize; 3];
    let mut n_inside = 0;
    let mut n_outside = 0;

    for (slot, &point) in triangle.points.iter().enumerate() {
        if plane.signed_distance(point) >= 0.0 {
            inside[n_inside] = slot;
            n_inside += 1;
        } else {
            outside[n_outside] = slot;
            n_outside += 1;
        }
    }

    let p = triangle.points;
    let color = triangle.color;

    match n_inside {
        0 => Clipped::Culled,
        1 => {
            let kept = p[inside[0]];
            Clipped::One(Triangle::new(
                [
                    kept,
                    plane.intersect(kept, p[outside[0]]),
                    plane.intersect(kept, p[outside[1]]),
                ],
                color,
            ))
        }
        2 => {
            let (a, b) = (p[inside[0]], p[inside[1]]);
            let lost = p[outside[0]];
            let a_cut = plane.intersect(a, lost);
            let b_cut = plane.intersect(b, lost);
            Clipped::Two(
                Triangle::new([a, b, a_cut], color),
                Triangle::new([b, a_cut, b_cut], color),
            )
        }
        _ => Clipped::One(*triangle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const COLOR: u32 = 0x40404000;

    fn near_plane() -> Plane {
        Plane::new(Vec4::point(0.0, 0.0, 0.1), Vec4::point(0.0, 0.0, 1.0))
    }

    fn tri(a: (f32, f32, f32), b: (f32, f32, f32), c: (f32, f32, f32)) -> Triangle {
        Triangle::new(
            [
                Vec4::point(a.0, a.1, a.2),
                Vec4::point(b.0, b.1, b.2),
                Vec4::point(c.0, c.1, c.2),
            ],
            COLOR,
        )
    }

    fn total_area(clipped: Clipped) -> f32 {
        clipped.into_iter().map(|t| t.area()).sum()
    }

    #[test]
    fn fully_outside_is_culled() {
        let t = tri((0.0, 0.0, -1.0), (1.0, 0.0, -2.0), (0.0, 1.0, 0.05));
        let clipped = clip_against_plane(&near_plane(), &t);
        assert_eq!(clipped, Clipped::Culled);
        assert!(clipped.is_empty());
        assert_eq!(clipped.into_iter().count(), 0);
    }

    #[test]
    fn fully_inside_passes_through_unchanged() {
        let t = tri((0.0, 0.0, 1.0), (1.0, 0.0, 2.0), (0.0, 1.0, 0.1));
        assert_eq!(clip_against_plane(&near_plane(), &t), Clipped::One(t));
    }

    #[test]
    fn one_inside_shrinks_to_smaller_triangle() {
        // Only the middle vertex is inside.
        let t = tri((0.0, 0.0, -1.0), (0.0, 0.0, 2.0), (1.0, 0.0, -1.0));
        let Clipped::One(out) = clip_against_plane(&near_plane(), &t) else {
            panic!("expected one triangle");
        };

        assert_eq!(out.color, COLOR);
        assert_relative_eq!(out.points[0], t.points[1]);
        // Intersections follow the outside vertex order: slot 0, then slot 2.
        assert_relative_eq!(out.points[1].z, 0.1, epsilon = 1e-6);
        assert_relative_eq!(out.points[1].x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(out.points[2].z, 0.1, epsilon = 1e-6);
        assert!(out.points[2].x > 0.0);
    }

    #[test]
    fn two_inside_splits_into_fan_sharing_one_intersection() {
        let t = tri((0.0, 0.0, 1.0), (2.0, 0.0, -1.0), (0.0, 2.0, 1.0));
        let Clipped::Two(first, second) = clip_against_plane(&near_plane(), &t) else {
            panic!("expected two triangles");
        };

        let (a, b, lost) = (t.points[0], t.points[2], t.points[1]);
        let a_cut = Vec4::plane_intersect(near_plane().point, near_plane().normal, a, lost);
        let b_cut = Vec4::plane_intersect(near_plane().point, near_plane().normal, b, lost);

        assert_eq!(first.points, [a, b, a_cut]);
        assert_eq!(second.points, [b, a_cut, b_cut]);
        assert_eq!(first.points[2], second.points[1]);
        assert_eq!((first.color, second.color), (COLOR, COLOR));
    }

    #[test]
    fn vertex_on_plane_counts_as_inside() {
        let t = tri((0.0, 0.0, 0.1), (1.0, 0.0, 0.1), (0.0, 1.0, 0.1));
        assert_eq!(clip_against_plane(&near_plane(), &t), Clipped::One(t));
    }

    #[test]
    fn intersection_points_lie_on_plane() {
        let plane = Plane::new(Vec4::point(3.0, 1.0, 0.0), Vec4::point(-1.0, 0.5, 0.25));
        let t = tri((0.0, 0.0, 0.0), (10.0, 2.0, 1.0), (-4.0, 6.0, 3.0));

        for out in clip_against_plane(&plane, &t) {
            for p in out.points {
                assert!(plane.signed_distance(p) >= -1e-4);
            }
        }
    }

    #[test]
    fn clipping_never_adds_area() {
        let planes = [
            near_plane(),
            Plane::new(Vec4::point(0.0, 0.0, 0.0), Vec4::point(1.0, 0.0, 0.0)),
            Plane::new(Vec4::point(0.5, 0.5, 0.0), Vec4::point(-1.0, 1.0, 0.3)),
            Plane::new(Vec4::point(0.0, 3.0, 0.0), Vec4::point(0.0, -1.0, 0.0)),
        ];
        let triangles = [
            tri((0.0, 0.0, 1.0), (2.0, 0.0, -1.0), (0.0, 2.0, 1.0)),
            tri((-1.0, -1.0, 0.0), (3.0, 0.5, 2.0), (0.5, 4.0, -2.0)),
            tri((5.0, 5.0, 5.0), (6.0, 5.0, 5.0), (5.0, 6.0, 5.0)),
            tri((-3.0, 1.0, 0.2), (0.2, -3.0, 0.0), (1.0, 1.0, 0.0)),
        ];

        for plane in &planes {
            for t in &triangles {
                let clipped = clip_against_plane(plane, t);
                assert!(clipped.len() <= 2);
                assert!(total_area(clipped) <= t.area() + 1e-4);
            }
        }
    }

    #[test]
    fn split_halves_cover_the_kept_quad() {
        // Right triangle cut by x >= 0.5 keeps a known area.
        let plane = Plane::new(Vec4::point(0.5, 0.0, 0.0), Vec4::point(-1.0, 0.0, 0.0));
        let t = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
        let clipped = clip_against_plane(&plane, &t);

        assert_eq!(clipped.len(), 2);
        // Kept region: x <= 0.5, area = 0.5 - 0.125
        assert_abs_diff_eq!(total_area(clipped), 0.375, epsilon = 1e-5);
    }
}
