use anyhow::{Context, Result};
use glam::Vec2;
use log::{error, info};
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use crate::core::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TITLE};
use crate::core::GameConfig;
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::renderer::{Font, FrameStatus, Renderer, ShapeBatch};
use game::{scene, FrameInput, Game};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting MagLab...");

    let config = GameConfig::load().context("Failed to load configuration")?;
    let mut game = Game::new(config).context("Failed to set up the game")?;
    let font = Font::builtin().context("Failed to build the font")?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let logical_size = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut renderer = pollster::block_on(Renderer::new(window.clone(), logical_size))?;

    let mut input = InputManager::default();
    let mut game_loop = GameLoop::new();
    let mut batch = ShapeBatch::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!(
                        "Close requested after {} frames and {} updates, shutting down...",
                        game_loop.frame_count(),
                        game_loop.update_count()
                    );
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => renderer.resize(physical_size),
                WindowEvent::KeyboardInput { event, .. } => input.process_keyboard_event(&event),
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(state, button)
                }
                WindowEvent::CursorMoved { position, .. } => input.process_cursor_moved(position),
                WindowEvent::Touch(touch) => input.process_touch(&touch),
                WindowEvent::Focused(false) => input.reset(),
                WindowEvent::RedrawRequested => {
                    // Presses go to the first update of the frame only
                    for step in 0..game_loop.begin_frame() {
                        let frame_input = if step == 0 {
                            let camera = renderer.camera();
                            input.take_frame_input(|p| camera.screen_to_world(p))
                        } else {
                            FrameInput::default()
                        };
                        game.update(&frame_input);
                    }

                    scene::draw(&game, &font, &mut batch);
                    if renderer.render(&batch) == FrameStatus::Fatal {
                        error!("GPU out of memory, exiting");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
