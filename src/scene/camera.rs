//! Transform builders for the viewing pipeline
//!
//! Conventions: row-major matrices acting on column vectors, camera looking down
//! its own +w axis, screen y growing downward after the viewport transform.

use crate::rasterizer::{Mat4, Vec3};

/// Map normalized device coordinates [-1, 1]^2 onto an `nx` x `ny` pixel grid
pub fn viewport(nx: f32, ny: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.m[0][0] = nx / 2.0;
    m.m[1][1] = ny / 2.0;
    m.m[0][3] = (nx - 1.0) / 2.0;
    m.m[1][3] = (ny - 1.0) / 2.0;
    m
}

/// Map the box [l, r] x [b, t] x [n, f] onto the canonical cube
pub fn orthographic(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.m[0][0] = 2.0 / (r - l);
    m.m[1][1] = 2.0 / (t - b);
    m.m[2][2] = 2.0 / (f - n);
    m.m[0][3] = -(r + l) / (r - l);
    m.m[1][3] = -(t + b) / (t - b);
    m.m[2][3] = -(f + n) / (f - n);
    m
}

/// Perspective squeeze with near plane `n` and far plane `f`; follow with a
/// perspective divide.
pub fn perspective(n: f32, f: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.m[0][0] = n;
    m.m[1][1] = n;
    m.m[2][2] = -(f + n) / (f - n);
    m.m[2][3] = -(2.0 * f * n) / (f - n);
    m.m[3][2] = -1.0;
    m.m[3][3] = 0.0;
    m
}

/// Symmetric near-plane frustum bounds `(l, r, b, t)` for a vertical field of view
pub fn frustum_bounds(fov_radians: f32, near: f32) -> (f32, f32, f32, f32) {
    let half = (fov_radians / 2.0).tan() * near;
    (-half, half, -half, half)
}

/// Translation by `t`
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.m[0][3] = t.x;
    m.m[1][3] = t.y;
    m.m[2][3] = t.z;
    m
}

/// Rotation by `theta` radians about `axis` (Rodrigues form)
pub fn rotation_axis(axis: Vec3, theta: f32) -> Mat4 {
    let a = axis.normalize();
    let (x, y, z) = (a.x, a.y, a.z);
    let c = theta.cos();
    let s = theta.sin();
    let t = 1.0 - c;

    Mat4::from_rows([
        [t * x * x + c, t * x * y - s * z, t * x * z + s * y, 0.0],
        [t * x * y + s * z, t * y * y + c, t * y * z - s * x, 0.0],
        [t * x * z - s * y, t * y * z + s * x, t * z * z + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// View matrix for a camera at `eye` looking along `gaze`.
///
/// Builds the orthonormal basis (u, v, w) with w = gaze, falling back to +x as
/// the reference "up" when gaze is nearly vertical.
pub fn look_along(eye: Vec3, gaze: Vec3) -> Mat4 {
    let w = gaze.normalize();
    let top = if w.y.abs() > 0.99 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        Vec3::UP
    };
    let u = top.cross(w).normalize();
    let v = w.cross(u).normalize();

    Mat4::from_rows([
        [u.x, u.y, u.z, -u.dot(eye)],
        [v.x, v.y, v.z, -v.dot(eye)],
        [w.x, w.y, w.z, -w.dot(eye)],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
