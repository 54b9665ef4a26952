use anyhow::Result;
use glam::Vec2;
use log::info;
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::TurnPacer;
use engine::input::action::vi_key_bindings;
use engine::input::{Command, InputManager};
use engine::renderer::{FrameQueue, Renderer, Tileset};
use game::{Game, GameArena, TurnOutcome};

/// Side length of a tile in pixels
const TILE_SIZE: u32 = 16;

const DEMO_ARENA: &str = "
####################
#@.......~~~.......#
#........~~~...r...#
#..####..~~~.......#
#..#..#......::....#
#..#..#..g...::..b.#
#.......r....::....#
####################
";

fn demo_tileset() -> Tileset {
    Tileset::new(8, 8, TILE_SIZE)
        .with_tile("floor", 0, 0)
        .with_tile("wall", 1, 0)
        .with_tile("water", 2, 0)
        .with_tile("chasm", 3, 0)
        .with_tile("hero", 0, 1)
        .with_tile("rat", 1, 1)
        .with_tile("goblin", 2, 1)
        .with_tile("bat", 3, 1)
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Rusted Rogue...");

    let layout = GameArena::from_ascii(DEMO_ARENA)?;
    let width = layout.arena.width() as u32 * TILE_SIZE;
    let height = layout.arena.height() as u32 * TILE_SIZE;
    let mut game = Game::from_layout(layout, "Hero", demo_tileset())?;

    let mut input = InputManager::default();
    for (source, command) in vi_key_bindings() {
        input.config_mut().bind(source, command);
    }
    let mut pacer = TurnPacer::default();
    let mut frame = FrameQueue::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Rogue")
        .with_inner_size(winit::dpi::LogicalSize::new(width * 3, height * 3))
        .with_resizable(true)
        .build(&event_loop)?;
    let window = Arc::new(window);

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        Vec2::new(width as f32, height as f32),
    ))?;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
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
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                frame.clear();
                game.draw(&mut frame);
                log::trace!("Queued {} sprites", frame.sprite_count());
                if let Err(e) = renderer.render(&frame) {
                    log::error!("Render error: {}", e);
                }
            }
            Event::AboutToWait => {
                if input.take_press(Command::Quit) {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.take_press(Command::Pause) {
                    pacer.toggle_pause();
                }

                if pacer.begin_frame() {
                    match game.step(input.keyboard_mut()) {
                        TurnOutcome::AwaitingInput => {}
                        TurnOutcome::Played => pacer.turn_played(),
                        TurnOutcome::HeroDied => {
                            info!("Game over after {} turns", game.turn());
                            elwt.exit();
                        }
                    }
                }

                input.update();
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
