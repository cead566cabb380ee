//! Minimal terminal line plot.
//!
//! Renders a sampled series on a fixed-size character grid with a labeled
//! y-axis. Enough for eyeballing parameter choices; not a charting library.

/// Rows in the plot area.
const HEIGHT: usize = 15;

/// Maximum columns; longer series are downsampled.
const MAX_WIDTH: usize = 60;

/// Render `series` as a line plot titled `title`, with `y_unit` appended to
/// the axis labels. Returns the finished multi-line string; empty input
/// renders as an empty string.
pub fn render(series: &[f64], title: &str, y_unit: &str) -> String {
    if series.is_empty() {
        return String::new();
    }

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    // A flat series still needs a finite scale to land on one row.
    let scale = if span > 0.0 { span } else { 1.0 };

    let width = series.len().min(MAX_WIDTH);
    let mut grid = vec![vec![' '; width]; HEIGHT];

    let mut prev_row: Option<usize> = None;
    for col in 0..width {
        // Nearest-sample downsampling; first and last ticks always land
        // on the first and last columns.
        let idx = if width == 1 {
            0
        } else {
            col * (series.len() - 1) / (width - 1)
        };
        let row = (((max - series[idx]) / scale) * (HEIGHT - 1) as f64).round() as usize;

        // Connect to the previous column so steep segments read as a line.
        if let Some(prev) = prev_row {
            let (lo, hi) = if prev <= row { (prev, row) } else { (row, prev) };
            for cell in grid.iter_mut().take(hi).skip(lo + 1) {
                cell[col] = '|';
            }
        }
        grid[row][col] = '*';
        prev_row = Some(row);
    }

    let label_width = 10 + y_unit.len();
    let mut out = String::new();

    let pad = label_width + 2 + width.saturating_sub(title.len()) / 2;
    out.push_str(&format!("{:>pad$}{title}\n", "", pad = pad));

    for (r, cells) in grid.iter().enumerate() {
        let labeled = r == 0 || r == HEIGHT / 2 || r == HEIGHT - 1;
        if labeled {
            let value = max - span * r as f64 / (HEIGHT - 1) as f64;
            out.push_str(&format!("{value:>10.4}{y_unit} |"));
        } else {
            out.push_str(&format!("{:>label_width$} |", "", label_width = label_width));
        }
        out.extend(cells.iter());
        out.push('\n');
    }

    out.push_str(&format!(
        "{:>label_width$} +{}\n{:>label_width$}  ticks 0..{}\n",
        "",
        "-".repeat(width),
        "",
        series.len() - 1,
        label_width = label_width,
    ));
    out
}
