use crate::Coords;
use crate::game::Snapshot;
use crate::grid::{BOARD_HEIGHT, BOARD_WIDTH, TILE_SIZE};

pub const SCORE_POS: Coords = (50, 20);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Lime,
    White,
}

pub const FOOD_COLOR: Color = Color::Red;
pub const SNAKE_COLOR: Color = Color::Lime;
pub const TEXT_COLOR: Color = Color::White;

/// One drawing instruction, in board pixels. Text is centered on `pos`,
/// one line per `\n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Rect { pos: Coords, size: i32, color: Color },
    Text { pos: Coords, text: String, color: Color, bold: bool },
}

pub fn render(snap: &Snapshot) -> Vec<DrawCall> {
    let mut calls = Vec::with_capacity(snap.body.len() + 5);
    calls.push(DrawCall::Clear);
    calls.push(tile(snap.food, FOOD_COLOR));
    calls.push(tile(snap.head, SNAKE_COLOR));
    calls.extend(snap.body.iter().map(|&pos| tile(pos, SNAKE_COLOR)));
    calls.push(text(SCORE_POS, format!("Score: {}", snap.score)));

    if snap.game_over {
        let msg = format!("GAME OVER\nScore: {}\nPress SPACE to Restart", snap.score);
        calls.push(text(board_center(), msg));
    }

    calls
}

pub fn board_center() -> Coords {
    (BOARD_WIDTH / 2, BOARD_HEIGHT / 2)
}

pub fn text(pos: Coords, text: String) -> DrawCall {
    DrawCall::Text { pos, text, color: TEXT_COLOR, bold: true }
}

fn tile(pos: Coords, color: Color) -> DrawCall {
    DrawCall::Rect { pos, size: TILE_SIZE, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(game_over: bool) -> Snapshot {
        Snapshot {
            food: (300, 200),
            head: (100, 100),
            body: vec![(75, 100), (50, 100)],
            score: 2,
            game_over,
        }
    }

    #[test]
    fn running_frame() {
        assert_eq!(render(&snapshot(false)), vec![
            DrawCall::Clear,
            DrawCall::Rect { pos: (300, 200), size: 25, color: Color::Red },
            DrawCall::Rect { pos: (100, 100), size: 25, color: Color::Lime },
            DrawCall::Rect { pos: (75, 100), size: 25, color: Color::Lime },
            DrawCall::Rect { pos: (50, 100), size: 25, color: Color::Lime },
            DrawCall::Text {
                pos: (50, 20),
                text: "Score: 2".to_string(),
                color: Color::White,
                bold: true,
            },
        ]);
    }

    #[test]
    fn game_over_frame_adds_centered_overlay() {
        let calls = render(&snapshot(true));
        assert_eq!(calls.len(), 7);
        assert_eq!(calls[6], DrawCall::Text {
            pos: (312, 312),
            text: "GAME OVER\nScore: 2\nPress SPACE to Restart".to_string(),
            color: Color::White,
            bold: true,
        });
    }

    #[test]
    fn frame_always_starts_with_clear() {
        assert_eq!(render(&snapshot(true))[0], DrawCall::Clear);
        assert_eq!(render(&snapshot(false))[0], DrawCall::Clear);
    }
}
