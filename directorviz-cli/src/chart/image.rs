use plotters::coord::Shift;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error as StdError;
use std::path::Path;

use super::{Chart, ChartKind, ImageFormat};

type DrawResult = Result<(), Box<dyn StdError>>;

const OVERVIEW_SIZE: (u32, u32) = (1400, 800);
const DECADES_SIZE: (u32, u32) = (1200, 700);

const OVERVIEW_BAR: RGBColor = RGBColor(135, 206, 235);
const DECADE_BAR: RGBColor = RGBColor(31, 119, 180);
const RATING_LINE: RGBColor = RGBColor(214, 39, 40);

/// Write `chart` to `path`. The backend creates, fills and closes the file.
pub fn save(chart: &Chart, path: &Path, format: ImageFormat) -> DrawResult {
    let size = match chart.kind {
        ChartKind::Overview => OVERVIEW_SIZE,
        ChartKind::Decades => DECADES_SIZE,
    };

    match format {
        ImageFormat::Png => paint(&BitMapBackend::new(path, size).into_drawing_area(), chart),
        ImageFormat::Svg => paint(&SVGBackend::new(path, size).into_drawing_area(), chart),
    }
}

fn paint<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> DrawResult
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    match chart.kind {
        ChartKind::Overview => draw_overview(root, chart)?,
        ChartKind::Decades => draw_decades(root, chart)?,
    }
    root.present()?;
    Ok(())
}

fn draw_overview<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let n = chart.bars.len() as u32;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(170)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..headroom(chart.max_count()))?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(chart.bars.len())
        .x_label_formatter(&|v: &SegmentValue<u32>| bar_label(chart, v))
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .y_desc("Number of Movies")
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(OVERVIEW_BAR.mix(0.8).filled())
            .margin(8)
            .data(chart.bars.iter().enumerate().map(|(i, b)| (i as u32, b.count as u32))),
    )?;

    // Rating text sits just above each bar
    let annotation =
        TextStyle::from(("sans-serif", 13).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, b)| {
        Text::new(
            format!("Rating: {:.1}", b.avg_rating),
            (SegmentValue::CenterOf(i as u32), b.count as u32),
            annotation.clone(),
        )
    }))?;

    Ok(())
}

fn draw_decades<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let n = chart.bars.len() as u32;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..headroom(chart.max_count()))?
        .set_secondary_coord((0..n).into_segmented(), 0f64..10f64);

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(chart.bars.len())
        .x_label_formatter(&|v: &SegmentValue<u32>| bar_label(chart, v))
        .x_desc(chart.x_desc)
        .y_desc("Number of Movies")
        .y_label_style(("sans-serif", 14).into_font().color(&DECADE_BAR))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    ctx.configure_secondary_axes()
        .y_desc("Average Rating")
        .label_style(("sans-serif", 14).into_font().color(&RATING_LINE))
        .draw()?;

    let bars = Histogram::vertical(&*ctx)
        .style(DECADE_BAR.mix(0.7).filled())
        .margin(12)
        .data(chart.bars.iter().enumerate().map(|(i, b)| (i as u32, b.count as u32)));
    ctx.draw_series(bars)?;

    let ratings: Vec<(SegmentValue<u32>, f64)> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, b)| (SegmentValue::CenterOf(i as u32), b.avg_rating))
        .collect();
    ctx.draw_secondary_series(LineSeries::new(
        ratings.clone(),
        RATING_LINE.stroke_width(2),
    ))?;
    ctx.draw_secondary_series(
        ratings
            .into_iter()
            .map(|point| Circle::new(point, 5, RATING_LINE.filled())),
    )?;

    Ok(())
}

fn bar_label(chart: &Chart, value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => chart
            .bars
            .get(*i as usize)
            .map(|b| b.label.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Upper bound of the count axis, leaving room for the rating text.
fn headroom(max_count: usize) -> u32 {
    let max = max_count as u32;
    max + (max / 8).max(1)
}
