//! Win-rate chart rendering
//!
//! [`draw_win_rate`] paints onto whatever frame it is handed; the canvas
//! program below is just one caller.

use crate::styles::{self, CHART_MARGIN};
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Theme};
use session::{WinRatePlot, WIN_RATE_TITLE, WIN_RATE_X_LABEL, WIN_RATE_Y_LABEL};

/// Canvas program drawing a borrowed plot
pub struct WinRateChart<'a> {
    plot: &'a WinRatePlot,
}

impl<'a> WinRateChart<'a> {
    pub fn new(plot: &'a WinRatePlot) -> Self {
        Self { plot }
    }
}

impl<Message> canvas::Program<Message> for WinRateChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        draw_win_rate(&mut frame, self.plot);
        vec![frame.into_geometry()]
    }
}

/// Maps plot coordinates into the frame's drawing area
struct Axes {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Axes {
    fn new(frame: &Frame, plot: &WinRatePlot) -> Self {
        Self {
            left: CHART_MARGIN,
            right: frame.width() - CHART_MARGIN * 0.5,
            top: CHART_MARGIN * 0.6,
            bottom: frame.height() - CHART_MARGIN,
            x_range: plot.x_range(),
            y_range: (plot.y_min, plot.y_max),
        }
    }

    fn point(&self, x: f64, y: f64) -> Point {
        let fx = fraction(x, self.x_range);
        let fy = fraction(y, self.y_range);
        Point::new(
            self.left + (self.right - self.left) * fx,
            self.bottom - (self.bottom - self.top) * fy,
        )
    }
}

fn fraction(v: f64, (lo, hi): (f64, f64)) -> f32 {
    if hi - lo <= f64::EPSILON {
        0.5
    } else {
        ((v - lo) / (hi - lo)) as f32
    }
}

fn label(content: String, position: Point, size: f32) -> Text {
    Text {
        content,
        position,
        color: styles::LABEL_COLOR,
        size: size.into(),
        horizontal_alignment: Horizontal::Center,
        vertical_alignment: Vertical::Center,
        ..Text::default()
    }
}

/// Draw the cumulative win-rate line, axes, grid and labels onto `frame`
pub fn draw_win_rate(frame: &mut Frame, plot: &WinRatePlot) {
    let axes = Axes::new(frame, plot);
    let grid = Stroke::default().with_color(styles::GRID_COLOR).with_width(1.0);
    let axis = Stroke::default().with_color(styles::AXIS_COLOR).with_width(1.0);

    // horizontal grid lines with y tick labels
    for step in 0..=4 {
        let y = plot.y_min + (plot.y_max - plot.y_min) * step as f64 / 4.0;
        let p = axes.point(axes.x_range.0, y);
        frame.stroke(
            &Path::line(Point::new(axes.left, p.y), Point::new(axes.right, p.y)),
            grid,
        );
        frame.fill_text(label(
            format!("{:.2}", y),
            Point::new(axes.left - 18.0, p.y),
            10.0,
        ));
    }

    // round ticks; thin them out once the session gets long
    let (x_lo, x_hi) = axes.x_range;
    let rounds = x_hi as usize;
    let every = (rounds / 10).max(1);
    for round in (x_lo as usize..=rounds).filter(|r| (r - 1) % every == 0) {
        let p = axes.point(round as f64, plot.y_min);
        frame.fill_text(label(round.to_string(), Point::new(p.x, axes.bottom + 10.0), 10.0));
    }

    frame.stroke(
        &Path::line(
            Point::new(axes.left, axes.bottom),
            Point::new(axes.right, axes.bottom),
        ),
        axis,
    );
    frame.stroke(
        &Path::line(Point::new(axes.left, axes.top), Point::new(axes.left, axes.bottom)),
        axis,
    );

    let center_x = (axes.left + axes.right) / 2.0;
    frame.fill_text(label(WIN_RATE_TITLE.to_string(), Point::new(center_x, 10.0), 14.0));
    frame.fill_text(label(
        WIN_RATE_X_LABEL.to_string(),
        Point::new(center_x, frame.height() - 10.0),
        12.0,
    ));
    frame.fill_text(label(
        WIN_RATE_Y_LABEL.to_string(),
        Point::new(axes.left, axes.top - 8.0),
        11.0,
    ));

    if plot.points.is_empty() {
        return;
    }

    let line = Path::new(|builder| {
        for (i, &(x, y)) in plot.points.iter().enumerate() {
            let p = axes.point(x, y);
            if i == 0 {
                builder.move_to(p);
            } else {
                builder.line_to(p);
            }
        }
    });
    frame.stroke(
        &line,
        Stroke::default().with_color(styles::LINE_COLOR).with_width(2.0),
    );

    for &(x, y) in &plot.points {
        frame.fill(&Path::circle(axes.point(x, y), 3.5), styles::LINE_COLOR);
    }

    if let Some(note) = &plot.annotation {
        let at = axes.point(note.x, note.label_y);
        frame.fill_text(Text {
            color: styles::LINE_COLOR,
            ..label(note.text.clone(), Point::new(at.x, at.y - 8.0), 11.0)
        });
    }
}
