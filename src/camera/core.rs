use glam::{Mat4, Vec3};

/// A perspective view of the scene: where the eye sits, what it looks at,
/// and the frustum it sees through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the eye looks at.
    pub target: Vec3,
    /// World direction that maps to screen up.
    pub up: Vec3,
    /// Viewport width over height.
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Same view with a different viewport aspect ratio.
    #[must_use]
    pub fn with_aspect(self, aspect: f32) -> Self {
        Self { aspect, ..self }
    }

    /// World-to-eye transform.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Eye-to-clip transform with wgpu's `[0, 1]` depth range.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// World-to-clip transform.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// The camera as the wireframe shader sees it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Column-major world-to-clip matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Uniform that passes positions through untransformed.
    pub const IDENTITY: Self = Self {
        view_proj: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
}

impl From<&Camera> for CameraUniform {
    fn from(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn camera_at(eye: Vec3) -> Camera {
        Camera {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 60.0,
            znear: 1.0,
            zfar: 10_000.0,
        }
    }

    fn ndc(camera: &Camera, point: Vec3) -> Vec3 {
        let clip = camera.view_proj() * point.extend(1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn target_projects_to_screen_center() {
        let camera = camera_at(Vec3::new(0.0, 0.0, 2000.0));
        let p = ndc(&camera, Vec3::ZERO);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!((0.0..=1.0).contains(&p.z));
    }

    #[test]
    fn wider_viewport_pulls_points_toward_center() {
        let square = camera_at(Vec3::new(0.0, 0.0, 2000.0));
        let wide = square.with_aspect(2.0);
        let point = Vec3::new(300.0, 0.0, 0.0);

        let x_square = ndc(&square, point).x;
        let x_wide = ndc(&wide, point).x;
        assert!(x_square > 0.0);
        assert!((x_wide - x_square / 2.0).abs() < 1e-5);
    }

    #[test]
    fn points_behind_the_far_plane_fall_outside_depth_range() {
        let camera = camera_at(Vec3::new(0.0, 0.0, 2000.0));
        let beyond = camera.view_proj() * Vec4::new(0.0, 0.0, -20_000.0, 1.0);
        assert!(beyond.z / beyond.w > 1.0);
    }

    #[test]
    fn uniform_holds_the_view_projection() {
        let camera = camera_at(Vec3::new(0.0, 0.0, 500.0));
        let uniform = CameraUniform::from(&camera);
        assert_eq!(uniform.view_proj, camera.view_proj().to_cols_array_2d());
        assert_eq!(
            CameraUniform::IDENTITY.view_proj,
            Mat4::IDENTITY.to_cols_array_2d()
        );
    }
}
