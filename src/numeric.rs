/*

    Declare numeric types used throughout this repo.

    WARNING: If you like to use f32 instead of f64
    during computations, you need to change all of these:
    pub type Float = f32;
    pub type Vector2 = Vec2;
    pub type Vector3 = Vec3; ...

    @date: 2 Oct, 2025
    @author: Bartu
*/

use bevy_math::{DMat4, DVec2, DVec3, DVec4};
pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update vector and matrix types
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
pub type Vector4 = DVec4;
pub type Matrix4 = DMat4;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-8
}

/// Affine transform of a point, w = 1 and no divide.
pub fn transform_point(mat: &Matrix4, v: &Vector3) -> Vector3 {
    let v4 = Vector4::new(v.x, v.y, v.z, 1.0);
    let r = *mat * v4;
    Vector3::new(r.x, r.y, r.z)
}

/// Same as transform_point but divides by the resulting w, so
/// projection matrices give normalized device coordinates.
/// w = 0 is not guarded, the divide yields inf/NaN.
pub fn project_point(mat: &Matrix4, v: &Vector3) -> Vector3 {
    let v4 = Vector4::new(v.x, v.y, v.z, 1.0);
    let r = *mat * v4;
    Vector3::new(r.x, r.y, r.z) / r.w
}

/// Anything that can map a 3D point somewhere else.
pub trait PointTransform {
    fn apply(&self, p: &Vector3) -> Vector3;
}

impl PointTransform for Matrix4 {
    #[inline]
    fn apply(&self, p: &Vector3) -> Vector3 {
        project_point(self, p)
    }
}
