// Turns the game state into shapes for the renderer

use crate::core::config::{BALL_SIZE, BELL_SIZE, MAGNET_SIZE};
use crate::engine::renderer::{Color, Font, ShapeBatch};

use super::game::Game;
use super::hud;
use super::level;

const WALL_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
const BALL_COLOR: Color = [0.83, 0.83, 0.83, 1.0];
const VELOCITY_COLOR: Color = [1.0, 1.0, 0.0, 1.0];
const MAGNET_COLOR: Color = [0.0, 0.0, 1.0, 1.0];
const BELL_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
const TEXT_COLOR: Color = [1.0, 1.0, 1.0, 1.0];

const WALL_WIDTH: f32 = 1.0;

/// Velocity line length per pixel/second of ball speed
const VELOCITY_SCALE: f32 = 0.1;

/// Queue one frame: walls, ball, magnets, bell, then text on top
pub fn draw(game: &Game, font: &Font, batch: &mut ShapeBatch) {
    batch.clear();

    for wall in level::arena_outline().iter().chain(&game.level_walls()) {
        batch.line(wall.start, wall.end, WALL_WIDTH, WALL_COLOR);
    }

    let ball = game.ball_position();
    batch.square(ball, BALL_SIZE, BALL_COLOR);
    if game.config().draw_velocity {
        let tip = ball + game.ball_velocity() * VELOCITY_SCALE;
        batch.line(ball, tip, WALL_WIDTH, VELOCITY_COLOR);
    }

    for magnet in game.magnets().iter() {
        batch.square(magnet.position, MAGNET_SIZE, MAGNET_COLOR);
    }

    batch.square(game.bell_position(), BELL_SIZE, BELL_COLOR);

    for line in hud::layout(game) {
        batch.text(font, &line.text, line.x, line.y, line.size, TEXT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::game::FrameInput;
    use glam::Vec2;

    fn setup() -> (Game, Font, ShapeBatch) {
        let game = Game::new(GameConfig::default()).unwrap();
        (game, Font::builtin().unwrap(), ShapeBatch::new())
    }

    fn count_color(batch: &ShapeBatch, color: Color) -> usize {
        batch.vertices().iter().filter(|v| v.color == color).count()
    }

    #[test]
    fn test_ball_and_bell_drawn() {
        let (game, font, mut batch) = setup();
        draw(&game, &font, &mut batch);

        assert_eq!(count_color(&batch, BALL_COLOR), 6);
        assert_eq!(count_color(&batch, BELL_COLOR), 6);
        assert!(count_color(&batch, TEXT_COLOR) > 0);
    }

    #[test]
    fn test_one_square_per_magnet() {
        let (mut game, font, mut batch) = setup();
        game.update(&FrameInput {
            start: true,
            place_magnet: Some(Vec2::new(100.0, 100.0)),
            ..Default::default()
        });
        game.update(&FrameInput {
            place_magnet: Some(Vec2::new(200.0, 100.0)),
            ..Default::default()
        });

        draw(&game, &font, &mut batch);
        assert_eq!(count_color(&batch, MAGNET_COLOR), 2 * 6);
    }

    #[test]
    fn test_redraw_replaces_previous_frame() {
        let (game, font, mut batch) = setup();
        draw(&game, &font, &mut batch);
        let first = batch.vertices().len();
        draw(&game, &font, &mut batch);
        assert_eq!(batch.vertices().len(), first);
    }

    #[test]
    fn test_velocity_line_only_when_enabled() {
        let (game, font, mut batch) = setup();
        draw(&game, &font, &mut batch);
        assert_eq!(count_color(&batch, VELOCITY_COLOR), 0);
    }
}
