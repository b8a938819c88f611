use colored::{Color, Colorize};
use std::io::{self, Write};

use super::{Chart, ChartKind};

const BAR_WIDTH: usize = 40;

/// Horizontal text rendering of a chart, one line per bar.
pub fn display(chart: &Chart, out: &mut impl Write) -> io::Result<()> {
    let bar_color = match chart.kind {
        ChartKind::Overview => Color::Cyan,
        ChartKind::Decades => Color::Blue,
    };
    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .chain([chart.x_desc.len()])
        .max()
        .unwrap_or(0);
    let scale = chart.max_count().max(1);

    writeln!(out, "{}", chart.title.bold())?;
    writeln!(
        out,
        "{}",
        format!("{:<label_width$}  Number of Movies", chart.x_desc).dimmed()
    )?;

    for bar in &chart.bars {
        let width = (bar.count * BAR_WIDTH).div_ceil(scale);
        writeln!(
            out,
            "{:<label_width$}  {} {}  {}",
            bar.label,
            "█".repeat(width).color(bar_color),
            bar.count,
            format!("Rating: {:.1}", bar.avg_rating).red(),
        )?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DecadeBucket, DirectorSummary};

    fn render(chart: &Chart) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        display(chart, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn overview_lists_each_director_with_rating() {
        let chart = Chart::overview(&[
            DirectorSummary {
                name: "Alfred Hitchcock".to_string(),
                movie_count: 4,
                avg_rating: 8.175,
            },
            DirectorSummary {
                name: "Billy Wilder".to_string(),
                movie_count: 2,
                avg_rating: 8.2,
            },
        ]);
        let text = render(&chart);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Top Directors by Number of Movies in IMDB Top 1000");
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Alfred Hitchcock  "));
        assert!(lines[2].ends_with(" 4  Rating: 8.2"));
        assert_eq!(lines[2].matches('█').count(), BAR_WIDTH);
        assert!(lines[3].starts_with("Billy Wilder      "));
        assert_eq!(lines[3].matches('█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn decades_use_bucket_labels() {
        let chart = Chart::decades(
            "Akira Kurosawa",
            &[
                DecadeBucket { decade: 1950, movie_count: 3, avg_rating: 8.3 },
                DecadeBucket { decade: 1980, movie_count: 1, avg_rating: 8.2 },
            ],
        );
        let text = render(&chart);

        assert!(text.starts_with("Akira Kurosawa: Movies and Ratings by Decade\n"));
        assert!(text.contains("1950s   "));
        assert!(text.contains(" 3  Rating: 8.3"));
        assert!(text.contains(" 1  Rating: 8.2"));
    }

    #[test]
    fn small_counts_still_get_a_visible_bar() {
        let chart = Chart::decades(
            "Orson Welles",
            &[
                DecadeBucket { decade: 1940, movie_count: 100, avg_rating: 8.0 },
                DecadeBucket { decade: 1950, movie_count: 1, avg_rating: 7.0 },
            ],
        );
        let text = render(&chart);
        let last = text.lines().last().unwrap();
        assert_eq!(last.matches('█').count(), 1);
    }
}
