use glam::{Affine3A, Vec3};

use crate::util::Ray;

/// Axis aligned bounds of an entity's mesh, in the entity's local space.
///
/// Combined with the entity's [`super::GlobalTransform`] this gives an oriented box in global space,
/// which is what grabbing and pointer picking test against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a box centred on the origin with the given half extents
    pub fn from_half_extents(half_extents: Vec3) -> Self {
        Self {
            min: -half_extents,
            max: half_extents,
        }
    }

    /// Distance in global space from `point` to the closest point of the box, or zero if the point
    /// is inside.
    pub fn distance_to_point(&self, global_from_local: &Affine3A, point: Vec3) -> f32 {
        let point_in_local = global_from_local.inverse().transform_point3(point);
        let closest_in_local = point_in_local.clamp(self.min, self.max);
        global_from_local
            .transform_point3(closest_in_local)
            .distance(point)
    }

    /// Cast a global space ray against the box. Returns the distance along the ray to the first
    /// hit, if it is within `max_distance`. A ray starting inside the box hits at zero.
    pub fn ray_intersection(
        &self,
        global_from_local: &Affine3A,
        ray: &Ray,
        max_distance: f32,
    ) -> Option<f32> {
        // Affine maps keep the ray parameter, so a hit at `t` in local space is a hit at `t` in
        // global space as long as the global direction is unit length.
        let local_from_global = global_from_local.inverse();
        let origin = local_from_global.transform_point3(ray.origin);
        let direction = local_from_global.transform_vector3(ray.direction);

        let mut t_min = 0.0_f32;
        let mut t_max = max_distance;

        for axis in 0..3 {
            let (o, d) = (origin[axis], direction[axis]);
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if d.abs() < f32::EPSILON {
                // Parallel to this slab: miss unless we start between the planes.
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inverse = 1.0 / d;
            let (mut t0, mut t1) = ((lo - o) * inverse, (hi - o) * inverse);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }
}
