// State-dependent text overlay

use crate::core::config::{
    FONT_SIZE, SCORE_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH, SMALL_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::core::math::centered_x;

use super::game::Game;
use super::phase::GamePhase;

/// First text row, in lines of the row's font size
const FIRST_ROW: usize = 4;

/// Countdown values at or below this are hidden
const COUNTDOWN_HIDE_BELOW: f64 = 0.1;

const CREDITS: [&str; 2] = ["MagLab by rangzen is", "licenced under CC BY 3.0."];

/// A line of text positioned on the logical screen
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Left edge
    pub x: f32,
    /// Baseline
    pub y: f32,
    /// Font size (glyph cell width and height)
    pub size: f32,
}

/// Lay out every text line for the current game state
pub fn layout(game: &Game) -> Vec<TextLine> {
    let mut lines = Vec::new();

    let (titles, texts): (Vec<String>, Vec<String>) = match game.phase() {
        GamePhase::Ready => (
            vec!["MagLab".to_string()],
            ready_instructions(game.config().preparation_duration),
        ),
        GamePhase::Preparing => {
            let remaining = game.preparation_remaining();
            let texts = if remaining > COUNTDOWN_HIDE_BELOW {
                let mut rows = vec![String::new(); 14];
                rows.push(format!("{:.1}", remaining));
                rows
            } else {
                Vec::new()
            };
            (Vec::new(), texts)
        }
        GamePhase::Ended => (Vec::new(), vec![String::new(), "GAME OVER!".to_string()]),
        GamePhase::Initialising | GamePhase::Running => (Vec::new(), Vec::new()),
    };

    lines.extend(centered_rows(&titles, TITLE_FONT_SIZE));
    lines.extend(centered_rows(&texts, FONT_SIZE));

    if game.phase() <= GamePhase::Ready {
        for (i, credit) in CREDITS.iter().enumerate() {
            lines.push(TextLine {
                text: credit.to_string(),
                x: centered_x(SCREEN_WIDTH, credit.chars().count(), SMALL_FONT_SIZE),
                y: SCREEN_HEIGHT - 4.0 + (i as f32 - 1.0) * SMALL_FONT_SIZE,
                size: SMALL_FONT_SIZE,
            });
        }
    }

    if game.phase().shows_score() {
        lines.push(score_line(game.score()));
    }

    lines
}

/// The score, anchored to the bottom-right corner
pub fn score_line(score: i64) -> TextLine {
    let text = format!("Score: {}", score);
    TextLine {
        x: SCREEN_WIDTH - text.chars().count() as f32 * FONT_SIZE - SCORE_MARGIN,
        y: SCREEN_HEIGHT - FONT_SIZE + 3.0 * SCORE_MARGIN,
        size: FONT_SIZE,
        text,
    }
}

fn ready_instructions(preparation_duration: f64) -> Vec<String> {
    let mut rows = vec![String::new(); 9];
    rows.extend(
        [
            "PRESS SPACE,",
            "CLICK,",
            "OR TOUCH",
            "TO START",
            "PREPARATION",
            "PERIOD",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    rows.push(format!("({} seconds)", preparation_duration));
    rows
}

fn centered_rows(rows: &[String], size: f32) -> impl Iterator<Item = TextLine> + '_ {
    rows.iter()
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(move |(i, text)| TextLine {
            text: text.clone(),
            x: centered_x(SCREEN_WIDTH, text.chars().count(), size),
            y: (i + FIRST_ROW) as f32 * size,
            size,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::game::FrameInput;

    fn texts(lines: &[TextLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_ready_screen() {
        let game = Game::new(GameConfig::default()).unwrap();
        let lines = layout(&game);
        let texts = texts(&lines);

        assert!(texts.contains(&"MagLab"));
        assert!(texts.contains(&"PRESS SPACE,"));
        assert!(texts.contains(&"(5 seconds)"));
        assert!(texts.contains(&"licenced under CC BY 3.0."));
        assert!(!texts.iter().any(|t| t.starts_with("Score")));

        let title = &lines[0];
        assert_eq!(title.size, TITLE_FONT_SIZE);
        assert_eq!(title.y, 4.0 * TITLE_FONT_SIZE);
        assert_eq!(title.x, (SCREEN_WIDTH - 6.0 * TITLE_FONT_SIZE) / 2.0);
    }

    #[test]
    fn test_instruction_rows() {
        let game = Game::new(GameConfig::default()).unwrap();
        let lines = layout(&game);
        let press = lines.iter().find(|l| l.text == "PRESS SPACE,").unwrap();
        assert_eq!(press.y, (9 + FIRST_ROW) as f32 * FONT_SIZE);
    }

    #[test]
    fn test_preparing_countdown() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.update(&FrameInput {
            start: true,
            ..FrameInput::default()
        });

        let lines = layout(&game);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "5.0");
        assert_eq!(lines[0].y, (14 + FIRST_ROW) as f32 * FONT_SIZE);
    }

    #[test]
    fn test_score_line_bottom_right() {
        let line = score_line(6128);
        assert_eq!(line.text, "Score: 6128");
        assert_eq!(line.x, SCREEN_WIDTH - 11.0 * FONT_SIZE - SCORE_MARGIN);
        assert_eq!(line.y, SCREEN_HEIGHT - FONT_SIZE + 3.0 * SCORE_MARGIN);
    }

    #[test]
    fn test_negative_score_line() {
        assert_eq!(score_line(-12).text, "Score: -12");
    }
}
