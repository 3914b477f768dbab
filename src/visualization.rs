//! Interactive 3D viewer using kiss3d.
//!
//! The viewer plays three roles around the controller: it issues moves from
//! key presses, ticks the controller once per rendered frame, and draws the
//! cube from the read-only [`CubeView`] queries.

use kiss3d::prelude::*;

use cubist::animation::CubeController;
use cubist::cube::{self, Cubie};
use cubist::moves::MoveKind;
use cubist::CubeView;

/// Size of each cubie body (slightly smaller than 1.0 for visible gaps).
const CUBIE_SIZE: f32 = 0.97;
/// Edge length of a sticker plate.
const STICKER_SIZE: f32 = 0.85;
/// Thickness of a sticker plate.
const STICKER_THICKNESS: f32 = 0.02;
/// Offset to center the cube around the origin.
const CENTER_OFFSET: f32 = -1.0;
/// Camera distance, matching an eye point of (5, 5, 5).
const CAMERA_DIST: f32 = 8.66;

const TITLE: &str = "Cube - [R/L/U/D/F/B] turn a face";

fn to_color(color: cube::Color) -> Color {
    let (r, g, b) = color.rgb();
    Color::new(r, g, b, 1.0)
}

fn to_vec3((x, y, z): (f32, f32, f32)) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Maps a key to the move it triggers.
fn key_move(key: kiss3d::event::Key) -> Option<MoveKind> {
    use kiss3d::event::Key;
    match key {
        Key::R => Some(MoveKind::R),
        Key::L => Some(MoveKind::L),
        Key::U => Some(MoveKind::U),
        Key::D => Some(MoveKind::D),
        Key::F => Some(MoveKind::F),
        Key::B => Some(MoveKind::B),
        _ => None,
    }
}

/// Adds a cubie body and its sticker plates under `parent`.
///
/// Coordinate conventions:
/// - Engine coordinates use integer x, y, z in 0..=2.
/// - Rendered cubies map x->X, y->Y, z->Z in world units.
/// - The cube is centered at the origin by offsetting positions by -1.0.
fn add_cubie(parent: &mut SceneNode3d, cubie: &Cubie) {
    let (x, y, z) = cubie.position;
    let center = Vec3::new(
        x as f32 + CENTER_OFFSET,
        y as f32 + CENTER_OFFSET,
        z as f32 + CENTER_OFFSET,
    );

    parent
        .add_cube(CUBIE_SIZE, CUBIE_SIZE, CUBIE_SIZE)
        .set_color(to_color(cube::Color::Black))
        .set_position(center);

    for (face, color) in cubie.faces.iter() {
        if !color.is_sticker() {
            continue;
        }
        let (nx, ny, nz) = face.normal();
        let normal = Vec3::new(nx as f32, ny as f32, nz as f32);
        // thin along the normal, full size across it
        let size = |n: i32| {
            if n == 0 {
                STICKER_SIZE
            } else {
                STICKER_THICKNESS
            }
        };
        parent
            .add_cube(size(nx), size(ny), size(nz))
            .set_color(to_color(color))
            .set_position(center + normal * (CUBIE_SIZE + STICKER_THICKNESS) / 2.0);
    }
}

/// Scene nodes for the cube, split into the still part and the turning slice.
struct CubeNodes {
    still: SceneNode3d,
    turning: SceneNode3d,
}

impl CubeNodes {
    fn build(scene: &mut SceneNode3d, view: &dyn CubeView) -> Self {
        let mut still = scene.add_group();
        let mut turning = scene.add_group();

        let snapshot = view.animation_snapshot();
        for cubie in view.current_state().cubies() {
            if cubie.is_center() {
                continue;
            }
            match &snapshot {
                Some(snapshot) if snapshot.is_affected(cubie.position) => {
                    add_cubie(&mut turning, cubie)
                }
                _ => add_cubie(&mut still, cubie),
            }
        }

        Self { still, turning }
    }

    fn remove(mut self) {
        self.still.remove();
        self.turning.remove();
    }
}

/// Runs the viewer until the window is closed.
pub fn display(controller: CubeController) {
    pollster::block_on(display_async(controller));
}

async fn display_async(mut controller: CubeController) {
    let mut window = Window::new(TITLE).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(CAMERA_DIST);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let mut nodes = CubeNodes::build(&mut scene, &controller);
    // nodes are rebuilt whenever a move starts or commits
    let mut was_rotating = controller.is_rotating();

    loop {
        let mut started = false;
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                if action == kiss3d::event::Action::Press {
                    if let Some(kind) = key_move(key) {
                        started |= controller.rotate_move(kind);
                    }
                }
            }
        }

        controller.tick();

        // a large step can start and commit a move within one frame
        if started || controller.is_rotating() != was_rotating {
            was_rotating = controller.is_rotating();
            nodes.remove();
            nodes = CubeNodes::build(&mut scene, &controller);
        }

        if let Some(snapshot) = controller.animation_snapshot() {
            let axis = to_vec3(snapshot.render_axis);
            nodes
                .turning
                .set_rotation(Quat::from_axis_angle(axis, snapshot.angle));
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
