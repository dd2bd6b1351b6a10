//! Progressive hangman figure drawn on a braille canvas.

use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Block,
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
    },
};
use strum::IntoEnumIterator;

/// Canvas bounds, in the coordinates the figure is designed in (y grows down).
const X_BOUNDS: [f64; 2] = [180.0, 440.0];
const Y_BOUNDS: [f64; 2] = [140.0, 520.0];

/// Gallows segments, always drawn.
const GALLOWS: [[f64; 4]; 4] = [
    [200.0, 500.0, 420.0, 500.0],
    [250.0, 500.0, 250.0, 160.0],
    [250.0, 160.0, 370.0, 160.0],
    [370.0, 160.0, 370.0, 210.0],
];

/// Body parts in the order wrong guesses add them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum FigurePart {
    /// First miss.
    Head,
    /// Second miss.
    Body,
    /// Third miss.
    LeftArm,
    /// Fourth miss.
    RightArm,
    /// Fifth miss.
    LeftLeg,
    /// Sixth miss.
    RightLeg,
}

impl FigurePart {
    /// Failed attempts needed before the part is drawn.
    pub fn threshold(self) -> usize {
        match self {
            Self::Head => 1,
            Self::Body => 2,
            Self::LeftArm => 3,
            Self::RightArm => 4,
            Self::LeftLeg => 5,
            Self::RightLeg => 6,
        }
    }

    /// Parts drawn after `failed` wrong guesses.
    pub fn visible(failed: usize) -> impl Iterator<Item = FigurePart> {
        Self::iter().filter(move |p| failed >= p.threshold())
    }

    fn paint(self, ctx: &mut Context<'_>) {
        let segment = match self {
            Self::Head => {
                ctx.draw(&Circle {
                    x: 370.0,
                    y: flip(235.0),
                    radius: 30.0,
                    color: Color::White,
                });
                return;
            }
            Self::Body => [370.0, 265.0, 370.0, 360.0],
            Self::LeftArm => [370.0, 290.0, 330.0, 330.0],
            Self::RightArm => [370.0, 290.0, 410.0, 330.0],
            Self::LeftLeg => [370.0, 360.0, 330.0, 410.0],
            Self::RightLeg => [370.0, 360.0, 410.0, 410.0],
        };
        draw_segment(ctx, segment, Color::White);
    }
}

/// Converts a y-down design coordinate to the canvas' y-up space.
fn flip(y: f64) -> f64 {
    Y_BOUNDS[0] + Y_BOUNDS[1] - y
}

fn draw_segment(ctx: &mut Context<'_>, [x1, y1, x2, y2]: [f64; 4], color: Color) {
    ctx.draw(&CanvasLine::new(x1, flip(y1), x2, flip(y2), color));
}

/// Draws the gallows plus one body part per failed attempt.
pub fn draw_figure(frame: &mut Frame, area: Rect, failed: usize, title_color: Color) {
    let canvas = Canvas::default()
        .block(Block::bordered().title("Hangman").border_style(title_color))
        .marker(Marker::Braille)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(move |ctx| {
            for segment in GALLOWS {
                draw_segment(ctx, segment, Color::DarkGray);
            }
            for part in FigurePart::visible(failed) {
                part.paint(ctx);
            }
        });
    frame.render_widget(canvas, area);
}
