use bevy::math::primitives::{Circle, Rectangle};
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, RodFrame};
use crate::simulation::tension::tension_label;
use crate::visualization::playback::{Playback, PlaybackAction};

/// World-space → screen-space scaling factor for positions
const SCALE: f32 = 120.0;
/// Side of the square markers and diameter of the center-of-mass dot
const MARKER_SIZE: f32 = 30.0;
/// Gap between dots of the rod
const DOT_SPACING: f32 = 6.0;

const M1_BLUE: Color = Color::srgb(0.0, 0.0, 1.0);
const M2_RED: Color = Color::srgb(1.0, 0.0, 0.0);
const PATH_GRAY: Color = Color::srgb(0.5, 0.5, 0.5);
const ARROW_GREEN: Color = Color::srgb(0.0, 0.55, 0.0);

const BUTTON_IDLE: Color = Color::srgb(0.88, 0.88, 0.88);
const BUTTON_HOVERED: Color = Color::srgb(0.78, 0.78, 0.78);
const BUTTON_PRESSED: Color = Color::srgb(0.62, 0.62, 0.62);

/// Which mass marker an entity draws
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    M1,
    M2,
    CenterOfMass,
}

impl Piece {
    fn label(self) -> &'static str {
        match self {
            Piece::M1 => "m1",
            Piece::M2 => "m2",
            Piece::CenterOfMass => "cm",
        }
    }

    // cm sits on top of the rail mass when they overlap
    fn z(self) -> f32 {
        match self {
            Piece::M1 | Piece::M2 => 1.0,
            Piece::CenterOfMass => 2.0,
        }
    }
}

/// Text following a marker, kept unrotated
#[derive(Component)]
struct PieceLabel(Piece);

#[derive(Component)]
struct TensionLabel;

#[derive(Component)]
struct PlaybackButton(PlaybackAction);

const LABEL_Z: f32 = 3.0;

#[derive(Resource)]
struct PlaybackClock {
    playback: Playback,
    timer: Timer,
}

impl PlaybackClock {
    fn new(scenario: &Scenario) -> Self {
        Self {
            playback: Playback::new(scenario.trajectory.len(), scenario.engine.looping),
            timer: Timer::from_seconds(scenario.engine.frame_duration as f32, TimerMode::Repeating),
        }
    }

    fn apply(&mut self, action: PlaybackAction) {
        let was_playing = self.playback.is_playing();
        self.playback.apply(action);
        if !was_playing && self.playback.is_playing() {
            self.timer.reset();
        }
        info!("{} at frame {}", action.label(), self.playback.frame());
    }

    fn toggle(&mut self) {
        let action = if self.playback.is_playing() {
            PlaybackAction::Pause
        } else {
            PlaybackAction::Play
        };
        self.apply(action);
    }
}

pub fn run_2d(scenario: Scenario) {
    let title = scenario.captions.title.clone();
    let clock = PlaybackClock::new(&scenario);

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(scenario)
        .insert_resource(clock)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, (setup_scene_system, setup_controls_system))
        .add_systems(
            Update,
            (
                playback_buttons_system,
                playback_keys_system,
                advance_frame_system,
                sync_transforms_system,
                tension_label_system,
                draw_lines_system,
            )
                .chain(),
        )
        .run();
}

fn to_screen(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32 * SCALE, p.y as f32 * SCALE)
}

fn piece_transform(piece: Piece, frame: &RodFrame, rotate: bool) -> Transform {
    let (pos, angle) = match piece {
        Piece::M1 => (frame.m1, frame.m1_angle),
        Piece::M2 => (frame.m2, frame.m2_angle),
        Piece::CenterOfMass => (frame.cm, 0.0),
    };
    let angle = if rotate { angle as f32 } else { 0.0 };

    Transform::from_translation(to_screen(pos).extend(piece.z())).with_rotation(Quat::from_rotation_z(angle))
}

/// Label sits just past the arrow tail
fn tension_label_position(frame: &RodFrame) -> Option<Vec2> {
    frame.tension.map(|arrow| {
        let tail = to_screen(arrow.tail());
        let away = to_screen(-arrow.d).normalize_or_zero();
        tail + away * MARKER_SIZE * 0.75
    })
}

fn setup_scene_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>, mut gizmo_store: ResMut<GizmoConfigStore>) {
    let params = &scenario.parameters;
    info!(
        "run_2d: {:?} viewer, {} frames at {:.0} ms, a = {}, b = {}",
        scenario.engine.variant,
        scenario.trajectory.len(),
        scenario.engine.frame_duration * 1000.0,
        params.a,
        params.b
    );

    // keep y in [-1.2 a, 1.2 a] on screen, x follows the window aspect
    let mut camera = Camera2dBundle::default();
    camera.projection.scaling_mode = ScalingMode::FixedVertical(2.4 * params.a as f32 * SCALE);
    commands.spawn(camera);

    let (gizmo_config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.line_width = 2.0;

    let Some(first) = scenario.trajectory.frames.first() else {
        warn!("scenario has no frames, nothing to animate");
        return;
    };
    let rotate = scenario.engine.is_spatial();

    let square = Mesh2dHandle(meshes.add(Rectangle::new(MARKER_SIZE, MARKER_SIZE)));
    let dot = Mesh2dHandle(meshes.add(Circle::new(MARKER_SIZE / 2.0)));

    for (piece, mesh, color) in [
        (Piece::M1, square.clone(), M1_BLUE),
        (Piece::M2, square, M2_RED),
        (Piece::CenterOfMass, dot, Color::BLACK),
    ] {
        let transform = piece_transform(piece, first, rotate);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh,
                material: materials.add(ColorMaterial::from(color)),
                transform,
                ..Default::default()
            },
            piece,
        ));

        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    piece.label(),
                    TextStyle {
                        font_size: 16.0,
                        color: Color::WHITE,
                        ..Default::default()
                    },
                ),
                transform: Transform::from_translation(transform.translation.truncate().extend(LABEL_Z)),
                ..Default::default()
            },
            PieceLabel(piece),
        ));
    }

    if let (Some(arrow), Some(pos)) = (first.tension, tension_label_position(first)) {
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    tension_label(&arrow, false),
                    TextStyle {
                        font_size: 16.0,
                        color: ARROW_GREEN,
                        ..Default::default()
                    },
                ),
                transform: Transform::from_translation(pos.extend(LABEL_Z)),
                ..Default::default()
            },
            TensionLabel,
        ));
    }

    if let Some(credit) = &scenario.captions.credit {
        let pos = to_screen(NVec2::new(-3.25 * params.b, -1.1 * params.a));
        commands.spawn(Text2dBundle {
            text: Text::from_section(
                credit.clone(),
                TextStyle {
                    font_size: 12.0,
                    color: Color::BLACK,
                    ..Default::default()
                },
            ),
            transform: Transform::from_translation(pos.extend(LABEL_Z)),
            ..Default::default()
        });
    }
}

fn setup_controls_system(mut commands: Commands, scenario: Res<Scenario>) {
    // Title, centered along the top edge
    commands
        .spawn(NodeBundle {
            style: Style {
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                padding: UiRect::all(Val::Px(10.0)),
                ..Default::default()
            },
            ..Default::default()
        })
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                scenario.captions.title.clone(),
                TextStyle {
                    font_size: 22.0,
                    color: Color::BLACK,
                    ..Default::default()
                },
            ));
        });

    // Axis titles
    for (title, style) in [
        (
            "x",
            Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Percent(50.0),
                ..Default::default()
            },
        ),
        (
            "y",
            Style {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Percent(50.0),
                ..Default::default()
            },
        ),
    ] {
        commands.spawn(
            TextBundle::from_section(
                title,
                TextStyle {
                    font_size: 18.0,
                    color: Color::BLACK,
                    ..Default::default()
                },
            )
            .with_style(style),
        );
    }

    // Play / Pause, top left
    commands
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                column_gap: Val::Px(8.0),
                ..Default::default()
            },
            ..Default::default()
        })
        .with_children(|row| {
            for action in [PlaybackAction::Play, PlaybackAction::Pause] {
                row.spawn((
                    ButtonBundle {
                        style: Style {
                            width: Val::Px(80.0),
                            height: Val::Px(32.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..Default::default()
                        },
                        background_color: BackgroundColor(BUTTON_IDLE),
                        ..Default::default()
                    },
                    PlaybackButton(action),
                ))
                .with_children(|button| {
                    button.spawn(TextBundle::from_section(
                        action.label(),
                        TextStyle {
                            font_size: 18.0,
                            color: Color::BLACK,
                            ..Default::default()
                        },
                    ));
                });
            }
        });
}

fn playback_buttons_system(mut clock: ResMut<PlaybackClock>, mut query: Query<(&Interaction, &PlaybackButton, &mut BackgroundColor), Changed<Interaction>>) {
    for (interaction, PlaybackButton(action), mut background) in &mut query {
        match *interaction {
            Interaction::Pressed => {
                *background = BackgroundColor(BUTTON_PRESSED);
                clock.apply(*action);
            }
            Interaction::Hovered => *background = BackgroundColor(BUTTON_HOVERED),
            Interaction::None => *background = BackgroundColor(BUTTON_IDLE),
        }
    }
}

/// Space toggles playback, arrow keys step one frame while paused
fn playback_keys_system(keys: Res<ButtonInput<KeyCode>>, mut clock: ResMut<PlaybackClock>) {
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle();
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        clock.playback.step(1);
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        clock.playback.step(-1);
    }
}

fn advance_frame_system(time: Res<Time>, mut clock: ResMut<PlaybackClock>) {
    if !clock.playback.is_playing() {
        return;
    }

    clock.timer.tick(time.delta());
    let steps = clock.timer.times_finished_this_tick();
    if steps > 0 && clock.playback.advance(steps) {
        info!("animation finished at frame {}", clock.playback.frame());
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    clock: Res<PlaybackClock>,
    mut pieces: Query<(&Piece, &mut Transform), Without<PieceLabel>>,
    mut labels: Query<(&PieceLabel, &mut Transform), Without<Piece>>,
) {
    let Some(frame) = scenario.trajectory.frames.get(clock.playback.frame()) else {
        return;
    };
    let rotate = scenario.engine.is_spatial();

    for (piece, mut transform) in &mut pieces {
        *transform = piece_transform(*piece, frame, rotate);
    }
    for (PieceLabel(piece), mut transform) in &mut labels {
        let target = piece_transform(*piece, frame, false);
        transform.translation = target.translation.truncate().extend(LABEL_Z);
    }
}

fn tension_label_system(scenario: Res<Scenario>, clock: Res<PlaybackClock>, mut query: Query<(&mut Text, &mut Transform), With<TensionLabel>>) {
    let Some(frame) = scenario.trajectory.frames.get(clock.playback.frame()) else {
        return;
    };
    let (Some(arrow), Some(pos)) = (frame.tension, tension_label_position(frame)) else {
        return;
    };

    for (mut text, mut transform) in &mut query {
        text.sections[0].value = tension_label(&arrow, clock.playback.has_started());
        transform.translation = pos.extend(LABEL_Z);
    }
}

fn draw_lines_system(mut gizmos: Gizmos, scenario: Res<Scenario>, clock: Res<PlaybackClock>) {
    // frictionless rail
    let half = scenario.parameters.rail_half_length() as f32 * SCALE;
    gizmos.line_2d(Vec2::new(-half, 0.0), Vec2::new(half, 0.0), Color::BLACK);

    // m1 path
    gizmos.linestrip_2d(scenario.trajectory.path.iter().map(|p| to_screen(*p)), PATH_GRAY);

    let Some(frame) = scenario.trajectory.frames.get(clock.playback.frame()) else {
        return;
    };

    // massless rigid rod
    dotted_line(&mut gizmos, to_screen(frame.m1), to_screen(frame.m2), Color::BLACK);

    if let Some(arrow) = frame.tension {
        let head = to_screen(arrow.head);
        let tail = to_screen(arrow.tail());
        if head.distance(tail) > f32::EPSILON {
            gizmos.arrow_2d(tail, head, ARROW_GREEN);
        }
    }
}

fn dotted_line(gizmos: &mut Gizmos, from: Vec2, to: Vec2, color: Color) {
    let n = ((from.distance(to) / DOT_SPACING).ceil() as usize).max(1);
    for i in (0..n).step_by(2) {
        let a = from.lerp(to, i as f32 / n as f32);
        let b = from.lerp(to, ((i + 1) as f32 / n as f32).min(1.0));
        gizmos.line_2d(a, b, color);
    }
}
