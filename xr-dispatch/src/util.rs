use glam::{Affine3A, Quat, Vec3};

/// A half-line in global space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Where the ray starts
    pub origin: Vec3,
    /// Unit direction of the ray
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is normalised.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// A ray starting at the pose's position, pointing along its `-Z` axis
    pub fn from_pose(global_from_pose: &Affine3A) -> Self {
        Self::new(
            global_from_pose.translation.into(),
            global_from_pose.transform_vector3(Vec3::NEG_Z),
        )
    }
}

#[inline]
/// Convert a pose from an XR runtime (eg. an `openxr::Posef` with the `mint` feature) into an Affine3
pub fn affine_from_pose(
    position: mint::Vector3<f32>,
    orientation: mint::Quaternion<f32>,
) -> Affine3A {
    let translation: Vec3 = position.into();
    let rotation: Quat = orientation.into();

    Affine3A::from_rotation_translation(rotation, translation)
}

#[inline]
/// A rotation of `degrees` about the global up axis. Positive values turn to the right when
/// looking down `-Z`.
pub fn yaw_right(degrees: f32) -> Quat {
    Quat::from_rotation_y(-degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_affine_from_pose() {
        let position = mint::Vector3 {
            x: 0.2,
            y: 1.4,
            z: -0.5,
        };
        let orientation = mint::Quaternion {
            v: mint::Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            s: 1.0,
        };

        let affine = affine_from_pose(position, orientation);
        assert_relative_eq!(affine, Affine3A::from_translation([0.2, 1.4, -0.5].into()));
    }

    #[test]
    fn test_yaw_right() {
        assert_relative_eq!(yaw_right(90.0) * Vec3::NEG_Z, Vec3::X, epsilon = 1e-6);
        assert_relative_eq!(yaw_right(-90.0) * Vec3::NEG_Z, Vec3::NEG_X, epsilon = 1e-6);
    }

    #[test]
    fn test_ray_from_pose() {
        let pose = Affine3A::from_rotation_translation(yaw_right(90.0), [1.0, 1.5, 0.0].into());
        let ray = Ray::from_pose(&pose);
        assert_relative_eq!(ray.origin, Vec3::new(1.0, 1.5, 0.0));
        assert_relative_eq!(ray.direction, Vec3::X, epsilon = 1e-6);
    }
}
