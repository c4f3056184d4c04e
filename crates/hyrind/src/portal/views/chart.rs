use super::escape_html;
use crate::portal::domain::MetricPoint;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 240;
const PADDING: u32 = 24;

/// Inline SVG area chart of the series, scaled to its own maximum.
pub(crate) fn area_chart(points: &[MetricPoint]) -> String {
    if points.is_empty() {
        return "<p class=\"muted\">No revenue recorded yet.</p>".to_string();
    }

    let max = points.iter().map(|point| point.value).max().unwrap_or(0).max(1);
    let plot_width = WIDTH - 2 * PADDING;
    let plot_height = HEIGHT - 2 * PADDING;
    let step = if points.len() > 1 {
        plot_width as f32 / (points.len() - 1) as f32
    } else {
        0.0
    };

    let coords: Vec<(f32, f32)> = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = PADDING as f32 + step * index as f32;
            let y = (PADDING + plot_height) as f32
                - point.value as f32 / max as f32 * plot_height as f32;
            (x, y)
        })
        .collect();

    let line = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let baseline = (PADDING + plot_height) as f32;
    let (first_x, _) = coords[0];
    let (last_x, _) = coords[coords.len() - 1];
    let area = format!("{first_x:.1},{baseline:.1} {line} {last_x:.1},{baseline:.1}");

    let labels = points
        .iter()
        .zip(&coords)
        .map(|(point, (x, _))| {
            format!(
                "<text x=\"{x:.1}\" y=\"{}\" font-size=\"12\" text-anchor=\"middle\" fill=\"#64748b\">{}</text>",
                HEIGHT - 4,
                escape_html(&point.label)
            )
        })
        .collect::<String>();

    format!(
        "<svg viewBox=\"0 0 {WIDTH} {HEIGHT}\" width=\"100%\" role=\"img\" aria-label=\"Revenue trend\">\
<polygon points=\"{area}\" fill=\"#dbeafe\"/>\
<polyline points=\"{line}\" fill=\"none\" stroke=\"#2563eb\" stroke-width=\"2\"/>{labels}</svg>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_every_point() {
        let points = vec![
            MetricPoint {
                label: "Jan".into(),
                value: 10,
            },
            MetricPoint {
                label: "Feb".into(),
                value: 20,
            },
        ];
        let svg = area_chart(&points);
        assert!(svg.contains(">Jan</text>"));
        assert!(svg.contains(">Feb</text>"));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn empty_series_renders_placeholder() {
        assert!(area_chart(&[]).contains("No revenue"));
    }
}
