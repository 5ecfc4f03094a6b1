//! Combined statistics figure written to an SVG file
//!
//! The win-rate plot sits on top, taking two thirds of the height; the
//! last-moves strip fills the bottom third.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;

use crate::chart::{
    move_rgb, LastMovesStrip, WinRatePlot, LINE_RGB, WIN_RATE_TITLE, WIN_RATE_X_LABEL,
    WIN_RATE_Y_LABEL,
};

/// Default figure size in pixels
pub const FIGURE_SIZE: (u32, u32) = (600, 400);

const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum FigureError {
    #[error("unsupported figure format for {0} (only .svg is written)")]
    UnsupportedFormat(String),

    #[error("failed to draw figure: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> FigureError {
    FigureError::Draw(e.to_string())
}

fn color((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

/// Draw `plot` over `strip` and write the result to `path` (`.svg`).
pub fn save_figure(
    path: &Path,
    plot: &WinRatePlot,
    strip: &LastMovesStrip,
    size: (u32, u32),
) -> Result<(), FigureError> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Err(FigureError::UnsupportedFormat(path.display().to_string()));
    }

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let (upper, lower) = root.split_vertically((size.1 * 2 / 3) as i32);
    draw_plot(&upper, plot)?;
    draw_strip(&lower, strip)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_plot<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    plot: &WinRatePlot,
) -> Result<(), FigureError> {
    let line = color(LINE_RGB);
    let (x_lo, x_hi) = plot.x_range();

    let mut chart = ChartBuilder::on(area)
        .caption(WIN_RATE_TITLE, (FONT, 16))
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(44)
        .build_cartesian_2d(x_lo..x_hi, plot.y_min..plot.y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(WIN_RATE_X_LABEL)
        .y_desc(WIN_RATE_Y_LABEL)
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .y_label_formatter(&|y: &f64| format!("{:.2}", y))
        .draw()
        .map_err(draw_err)?;

    if plot.is_empty() {
        return Ok(());
    }

    chart
        .draw_series(LineSeries::new(plot.points.iter().copied(), line.stroke_width(2)))
        .map_err(draw_err)?;
    chart
        .draw_series(
            plot.points
                .iter()
                .map(|&point| Circle::new(point, 3, line.filled())),
        )
        .map_err(draw_err)?;

    if let Some(note) = &plot.annotation {
        let style = (FONT, 12)
            .into_font()
            .color(&line)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(std::iter::once(Text::new(
                note.text.clone(),
                (note.x, note.label_y),
                style,
            )))
            .map_err(draw_err)?;
    }

    Ok(())
}

fn draw_strip<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    strip: &LastMovesStrip,
) -> Result<(), FigureError> {
    let area = area.titled(&strip.title, (FONT, 12)).map_err(draw_err)?;
    if strip.slots.is_empty() {
        return Ok(());
    }

    let (width, height) = area.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);
    let slot_width = width / strip.slots.len() as i32;
    let half_box = (height / 6).clamp(6, 14);
    let rows = [height * 3 / 10, height * 7 / 10];

    let letter = (FONT, 13)
        .into_font()
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let side_label = (FONT, 10)
        .into_font()
        .color(&RGBColor(0x44, 0x44, 0x44))
        .pos(Pos::new(HPos::Center, VPos::Center));

    area.draw(&Text::new("P", (slot_width / 4, rows[0]), side_label.clone()))
        .map_err(draw_err)?;
    area.draw(&Text::new("A", (slot_width / 4, rows[1]), side_label))
        .map_err(draw_err)?;

    for (i, slot) in strip.slots.iter().enumerate() {
        let cx = slot_width * i as i32 + slot_width / 2;
        for (row_y, mv) in rows.into_iter().zip([slot.player, slot.opponent]) {
            area.draw(&Rectangle::new(
                [(cx - half_box, row_y - half_box), (cx + half_box, row_y + half_box)],
                color(move_rgb(mv)).filled(),
            ))
            .map_err(draw_err)?;
            let label = mv.map_or("-".to_string(), |m| m.to_string());
            area.draw(&Text::new(label, (cx, row_y), letter.clone()))
                .map_err(draw_err)?;
        }
    }

    Ok(())
}
