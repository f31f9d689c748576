/*!
# Pose Sync

Client-authoritative character movement with pose replication, built with
Bevy ECS (Entity Component System).

## Architecture Overview

Each process simulates the one character it owns and mirrors everyone else's:

- **CorePlugin**: Shared configuration and the replication tick rate
- **PlayerPlugin**: Spawning local and mirrored characters, registry by network id
- **InputPlugin**: Routing input commands to locally owned characters
- **MovementPlugin**: Camera-relative motion, jump and gravity, facing blend
- **AbilityPlugin**: Ticks the ability subsystem of local characters
- **AnimationPlugin**: Forwards forward speed / jumping to the animation consumer
- **CameraPlugin**: Follow camera that supplies the view direction
- **NetworkPlugin**: Snapshot writer (local) and reader (mirrors)
- **InterpolationPlugin**: Smooths mirrors toward their latest snapshot
- **DebugPlugin**: Periodic state dump

## How It Works

1. Start a relay with `NETWORK_ROLE=relay`
2. Start peers (default role); each connects to `RELAY_URL` (or `ws://127.0.0.1:5000`)
3. The relay welcomes each peer with the id of the character it owns
4. Peers simulate their own character and stream its pose to the relay
5. The relay forwards poses to every other peer, who interpolate them

Configuration comes from the JSON file named by `MOVEMENT_CONFIG` plus the
`RELAY_HOST`, `RELAY_PORT` and `RELAY_URL` environment variables.
*/

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use std::time::Duration;

mod ecs;

use ecs::core::{CorePlugin, GameConfig};
use ecs::plugins::ability::{Abilities, LoggingAbilities};
use ecs::plugins::animation::{AnimationBridge, LoggingAnimator};
use ecs::plugins::camera::FollowCamera;
use ecs::plugins::collision::{Collider, GroundPlane};
use ecs::plugins::input::{InputCommand, InputCommandEvent};
use ecs::plugins::network::ws::{PeerConnectionPlugin, RelayPlugin};
use ecs::plugins::player::{Capabilities, CapabilityFactory, CharacterRegistry, PlayerCamera};
use ecs::{
    AbilityPlugin, AnimationPlugin, CameraPlugin, DebugPlugin, InputPlugin, InterpolationPlugin,
    MovementPlugin, NetworkPlugin, PlayerPlugin,
};

/// Main entry point.
///
/// Runs the relay or a peer depending on `NETWORK_ROLE`. Both are headless
/// Bevy apps ticking at 60 Hz.
fn main() -> AppExit {
    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return AppExit::error();
        }
    };

    let role = std::env::var("NETWORK_ROLE").unwrap_or_else(|_| "peer".to_string());

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0 / 60.0))),
        LogPlugin {
            filter: config.log_filter.clone(),
            level: Level::INFO,
            ..default()
        },
    ));

    match role.as_str() {
        "relay" => {
            app.add_plugins(RelayPlugin { bind_addr: config.relay_bind_addr() });
        }
        _ => {
            let url = config.relay_url();
            app
                // Core first: the other plugins read GameConfig
                .add_plugins(CorePlugin { config })
                .add_plugins((
                    PlayerPlugin,
                    InputPlugin,
                    MovementPlugin,
                    AbilityPlugin,
                    AnimationPlugin,
                    CameraPlugin,
                    NetworkPlugin,
                    InterpolationPlugin,
                    DebugPlugin,
                ))
                .add_plugins(PeerConnectionPlugin { url })
                .insert_resource(CapabilityFactory::new(default_capabilities))
                .add_systems(Startup, setup_camera)
                .add_systems(Update, autopilot_system.before(ecs::plugins::input::InputSet));
        }
    }

    app.run()
}

fn default_capabilities(network_id: u32) -> Capabilities {
    Capabilities {
        collider: Some(Collider::new(GroundPlane::default())),
        animation: AnimationBridge::new(LoggingAnimator { label: format!("character {}", network_id) }),
        abilities: Abilities::new(LoggingAbilities::default()),
    }
}

/// Spawns the follow camera and hands it to the player plugin.
fn setup_camera(mut commands: Commands) {
    let follow = FollowCamera::default();
    let camera = commands
        .spawn((
            follow,
            Transform::from_translation(follow.offset).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();
    commands.insert_resource(PlayerCamera(camera));
    info!("Camera ready; waiting for the relay to assign a character");
}

/// Headless stand-in for a player: walks a slow circle and jumps every few seconds.
fn autopilot_system(
    time: Res<Time>,
    registry: Res<CharacterRegistry>,
    mut input_events: EventWriter<InputCommandEvent>,
    mut last_jump: Local<f32>,
) {
    let Some(network_id) = registry.local_id() else {
        return;
    };

    let t = time.elapsed_secs();
    input_events.send(InputCommandEvent {
        network_id,
        command: InputCommand::Axes { horizontal: (t * 0.5).sin(), vertical: (t * 0.5).cos() },
    });

    if t - *last_jump > 3.0 {
        *last_jump = t;
        input_events.send(InputCommandEvent { network_id, command: InputCommand::JumpPressed });
        input_events.send(InputCommandEvent { network_id, command: InputCommand::JumpReleased });
    }
}
