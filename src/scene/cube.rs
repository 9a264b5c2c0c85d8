//! Spinning cube demo scene

use std::f32::consts::PI;

use super::camera::{frustum_bounds, look_along, orthographic, perspective, rotation_axis, viewport};
use super::config::{RenderStyle, SceneConfig};
use crate::rasterizer::{ColorPreset, Framebuffer, Mat4, Vec2, Vec3};

/// Cube faces as triangle pairs over the corner indices of [`cube_vertices`]
pub const CUBE_TRIANGLES: [([usize; 3], ColorPreset); 12] = [
    // back
    ([0, 1, 2], ColorPreset::Orange),
    ([0, 2, 3], ColorPreset::Orange),
    // bottom
    ([0, 4, 5], ColorPreset::Blue),
    ([0, 5, 1], ColorPreset::Blue),
    // right
    ([1, 5, 6], ColorPreset::Green),
    ([1, 6, 2], ColorPreset::Green),
    // left
    ([0, 4, 7], ColorPreset::Yellow),
    ([0, 7, 3], ColorPreset::Yellow),
    // front
    ([4, 5, 6], ColorPreset::Red),
    ([4, 6, 7], ColorPreset::Red),
    // top
    ([3, 7, 6], ColorPreset::White),
    ([3, 6, 2], ColorPreset::White),
];

/// Corners of an axis-aligned cube of edge `size` centred on the origin.
/// 0-3 are the back face (z = -size/2), 4-7 the front face.
pub fn cube_vertices(size: f32) -> [Vec3; 8] {
    let h = size / 2.0;
    [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ]
}

/// A vertex after projection: screen position plus view-space depth
#[derive(Debug, Clone, Copy)]
pub struct ProjectedVertex {
    pub screen: Vec2,
    pub depth: f32,
}

/// Model and camera transforms for one animation frame
#[derive(Debug, Clone, Copy)]
pub struct FrameTransforms {
    pub model: Mat4,
    pub view: Mat4,
    pub perspective: Mat4,
    /// Orthographic normalisation followed by the viewport mapping
    pub screen: Mat4,
}

impl FrameTransforms {
    pub fn for_frame(config: &SceneConfig, frame: u32) -> Self {
        let f = frame as f32;

        // Cube spins about the main diagonal
        let theta = PI / 60.0 * f;
        let model = rotation_axis(Vec3::new(1.0, 1.0, 1.0), theta);

        // Camera dollies along +z, always looking at the origin
        let eye = Vec3::new(
            0.0,
            0.0,
            config.orbit_radius * (f * 0.02).cos() + config.orbit_radius + config.orbit_offset,
        );
        let view = look_along(eye, eye * -1.0);

        let (l, r, b, t) = frustum_bounds(config.fov_degrees.to_radians(), config.near);
        let screen = viewport(config.width as f32, config.height as f32)
            * orthographic(l, r, b, t, config.near, config.far);

        Self {
            model,
            view,
            perspective: perspective(config.near, config.far),
            screen,
        }
    }

    pub fn project(&self, p: Vec3) -> ProjectedVertex {
        let eye_space = self.view * (self.model * p.to_point());
        let ndc = (self.perspective * eye_space).perspective_divide();
        let screen = self.screen * ndc;
        ProjectedVertex {
            screen: screen.xy(),
            depth: eye_space.z,
        }
    }
}

/// Project the cube corners for `frame`
pub fn project_cube(config: &SceneConfig, frame: u32) -> [ProjectedVertex; 8] {
    let transforms = FrameTransforms::for_frame(config, frame);
    cube_vertices(config.cube_size).map(|v| transforms.project(v))
}

/// Draw one frame of the spinning cube into `fb` (which the caller clears).
///
/// Triangles with a corner at or behind the near plane are skipped; there is no
/// clipping against the view volume. Returns the number of triangles drawn.
pub fn render_frame(fb: &mut Framebuffer, config: &SceneConfig, frame: u32) -> usize {
    let verts = project_cube(config, frame);
    let mut drawn = 0;

    for ([a, b, c], preset) in CUBE_TRIANGLES {
        let tri = [verts[a], verts[b], verts[c]];
        if tri.iter().any(|v| v.depth <= config.near) {
            log::debug!("Frame {}: triangle {:?} crosses the near plane, skipped", frame, [a, b, c]);
            continue;
        }

        let [p0, p1, p2] = tri.map(|v| v.screen);
        match config.style {
            RenderStyle::Wireframe => fb.draw_wireframe_triangle(p0, p1, p2, preset.color()),
            RenderStyle::Filled => fb.draw_filled_triangle(p0, p1, p2, preset.color()),
        }
        drawn += 1;
    }

    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Color;

    fn small_config(style: RenderStyle) -> SceneConfig {
        SceneConfig {
            width: 128,
            height: 128,
            style,
            ..SceneConfig::default()
        }
    }

    fn render(config: &SceneConfig, frame: u32) -> Framebuffer {
        let mut fb = Framebuffer::with_size(config.width, config.height);
        fb.clear_preset(config.background);
        render_frame(&mut fb, config, frame);
        fb
    }

    fn painted(fb: &Framebuffer) -> usize {
        fb.data().iter().filter(|c| **c != Color::BLACK).count()
    }

    #[test]
    fn test_origin_projects_to_screen_centre() {
        let config = small_config(RenderStyle::Wireframe);
        let p = FrameTransforms::for_frame(&config, 0).project(Vec3::ZERO).screen;
        assert!((p.x - 63.5).abs() < 1e-3);
        assert!((p.y - 63.5).abs() < 1e-3);
    }

    #[test]
    fn test_every_triangle_uses_distinct_corners() {
        for ([a, b, c], _) in CUBE_TRIANGLES {
            assert!(a != b && b != c && a != c);
            assert!(a < 8 && b < 8 && c < 8);
        }
    }

    #[test]
    fn test_filled_front_face_covers_centre() {
        let config = small_config(RenderStyle::Filled);
        let fb = render(&config, 0);
        // Front face is drawn after the back face and faces the camera at frame 0
        assert_eq!(fb.pixel_at(64, 74), Some(Color::RED));
        assert_eq!(fb.pixel_at(74, 64), Some(Color::RED));
        assert_eq!(fb.pixel_at(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_wireframe_uses_face_colors_only() {
        let config = small_config(RenderStyle::Wireframe);
        let fb = render(&config, 0);
        let faces: Vec<Color> = CUBE_TRIANGLES.iter().map(|(_, p)| p.color()).collect();
        assert!(painted(&fb) > 0);
        assert!(fb
            .data()
            .iter()
            .all(|c| *c == Color::BLACK || faces.contains(c)));

        let filled = render(&small_config(RenderStyle::Filled), 0);
        assert!(painted(&filled) > painted(&fb));
    }

    #[test]
    fn test_all_frames_render() {
        let config = SceneConfig {
            width: 32,
            height: 32,
            ..small_config(RenderStyle::Filled)
        };
        for frame in (0..config.frames).step_by(15) {
            let mut fb = Framebuffer::with_size(32, 32);
            fb.clear(Color::BLACK);
            let drawn = render_frame(&mut fb, &config, frame);
            assert!(drawn <= CUBE_TRIANGLES.len());
        }
    }
}
