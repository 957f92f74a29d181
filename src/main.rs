use anyhow::Result;
use glam::Vec2;
use log::{info, trace, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::{AssetLoader, UniformFrames};
use engine::clock::GameClock;
use engine::input::InputManager;
use engine::renderer::FrameRecorder;
use game::characters::AnimationLibrary;
use game::level::Level;
use game::settings::{PLAYER_ASSET_DIR, TILE_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH, WORLD_MAP};

/// Frames per status when running without player sprites
const PLACEHOLDER_FRAMES: usize = 4;

fn load_animations() -> Result<AnimationLibrary> {
    match AnimationLibrary::load(&AssetLoader::new(PLAYER_ASSET_DIR)) {
        Ok(library) => Ok(library),
        Err(err) => {
            warn!("Player sprites unavailable ({err}), using placeholder frames");
            let placeholder = UniformFrames::new(Vec2::splat(TILE_SIZE), PLACEHOLDER_FRAMES);
            Ok(AnimationLibrary::load(&placeholder)?)
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Tile Grove...");

    let mut level = Level::new(WORLD_MAP, load_animations()?)?;
    let mut input = InputManager::new();
    let mut clock = GameClock::new();
    let mut recorder = FrameRecorder::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Tile Grove")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
                level.resize(physical_size.width as f32, physical_size.height as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_event(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let now = clock.begin_frame();
                recorder.clear();
                level.run(now, &input.intent(), &mut recorder);
                input.update();

                trace!(
                    "Frame {} at {} ms: {} draws, {:.1} fps",
                    clock.frame_count(),
                    now,
                    recorder.commands().len(),
                    clock.fps()
                );

                if level.player().is_dead() {
                    info!("Game over");
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
