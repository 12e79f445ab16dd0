use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Rectangle};
use bevy::window::WindowResolution;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::simulation::trajectory::Trajectory;

const BACKGROUND: Color = Color::srgb(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0);
const PIVOT_COLOR: Color = Color::srgb(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0);
const ROD_COLOR: Color = Color::srgb(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0);
const BOB1_COLOR: Color = Color::srgb(12.0 / 255.0, 80.0 / 255.0, 140.0 / 255.0);
const BOB2_COLOR: Color = Color::srgb(140.0 / 255.0, 12.0 / 255.0, 80.0 / 255.0);

/// Marks a bob sprite: 0 for the first mass, 1 for the second
#[derive(Component)]
struct BobIndex(pub usize);

/// Precomputed run being played back, one trajectory step per fixed tick
#[derive(Resource)]
struct Playback {
    trajectory: Trajectory,
    masses: [f64; 2],
    pivot_size: f32,
    frame: usize,
}

impl Playback {
    fn finished(&self) -> bool {
        self.frame >= self.trajectory.len()
    }

    /// Bob positions in world space for the current frame (world y points up)
    fn bobs(&self) -> Option<[Vec2; 2]> {
        self.trajectory
            .positions
            .get(self.frame)
            .map(|p| [to_world(&p.bob1), to_world(&p.bob2)])
    }
}

fn to_world(p: &NVec2) -> Vec2 {
    Vec2::new(p.x as f32, -(p.y as f32))
}

/// Open a window and play `trajectory` back, then show both path traces
pub fn run_2d(scenario: Scenario, trajectory: Trajectory) {
    log::info!("run_2d: playing back {} steps", trajectory.len());

    let display = scenario.display.clone();
    let playback = Playback {
        trajectory,
        masses: [scenario.constants.mass1, scenario.constants.mass2],
        pivot_size: display.pivot_size as f32,
        frame: 0,
    };

    App::new()
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(Time::<Fixed>::from_hz(display.frame_rate))
        .insert_resource(playback)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Double Pendulum Simulator".to_string(),
                resolution: WindowResolution::new(display.width as f32, display.height as f32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_pendulum_system)
        .add_systems(FixedUpdate, advance_frame_system)
        .add_systems(Update, (sync_bobs_system, draw_rods_system, draw_traces_system))
        .run();
}

fn setup_pendulum_system(mut commands: Commands, playback: Res<Playback>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera centered on the pivot
    commands.spawn(Camera2dBundle::default());

    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Rectangle::new(playback.pivot_size, playback.pivot_size))),
        material: materials.add(ColorMaterial::from(PIVOT_COLOR)),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    let start = playback.bobs().unwrap_or([Vec2::ZERO; 2]);
    let colors = [BOB1_COLOR, BOB2_COLOR];

    for i in 0..2 {
        // bob diameter grows with its mass
        let radius = (playback.masses[i] as f32 * 4.0 + 10.0) / 2.0;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(colors[i])),
                transform: Transform::from_xyz(start[i].x, start[i].y, 1.0),
                ..Default::default()
            },
            BobIndex(i),
        ));
    }
}

fn advance_frame_system(mut playback: ResMut<Playback>) {
    if !playback.finished() {
        playback.frame += 1;
    }
}

fn sync_bobs_system(playback: Res<Playback>, mut query: Query<(&BobIndex, &mut Transform, &mut Visibility)>) {
    let bobs = playback.bobs();
    for (BobIndex(i), mut transform, mut visibility) in &mut query {
        match bobs {
            Some(b) => {
                transform.translation.x = b[*i].x;
                transform.translation.y = b[*i].y;
            }
            // animation over: only the traces remain
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn draw_rods_system(playback: Res<Playback>, mut gizmos: Gizmos) {
    if let Some([b1, b2]) = playback.bobs() {
        gizmos.line_2d(Vec2::ZERO, b1, ROD_COLOR);
        gizmos.line_2d(b1, b2, ROD_COLOR);
    }
}

fn draw_traces_system(playback: Res<Playback>, mut gizmos: Gizmos) {
    if !playback.finished() {
        return;
    }
    let positions = &playback.trajectory.positions;
    gizmos.linestrip_2d(positions.iter().map(|p| to_world(&p.bob1)), BOB1_COLOR);
    gizmos.linestrip_2d(positions.iter().map(|p| to_world(&p.bob2)), BOB2_COLOR);
}
