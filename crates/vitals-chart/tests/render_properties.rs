// File: crates/vitals-chart/tests/render_properties.rs
// Purpose: Geometry guarantees of the renderer: ordering, padding, degenerate input, ticks, purity.

use vitals_chart::{
    render, Anchor, Backend, Canvas, DrawCommand, PlotSpec, Point, Renderer, Rgba, Series,
    SurfaceCapabilities, Theme,
};

const EPS: f64 = 1e-9;

/// Group path commands into (points, color) per stroke.
fn strokes(cmds: &[DrawCommand]) -> Vec<(Vec<Point>, Rgba)> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for c in cmds {
        match c {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => current.push(*p),
            DrawCommand::Stroke { color, .. } => out.push((std::mem::take(&mut current), *color)),
            DrawCommand::Text { .. } => {}
        }
    }
    out
}

fn series_paths(cmds: &[DrawCommand]) -> Vec<Vec<Point>> {
    let line = Theme::light().line;
    strokes(cmds).into_iter().filter(|(_, c)| *c == line).map(|(p, _)| p).collect()
}

fn labels(cmds: &[DrawCommand], anchor: Anchor) -> Vec<String> {
    cmds.iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, anchor: a, .. } if *a == anchor => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn bare_spec() -> PlotSpec {
    PlotSpec::default()
}

#[test]
fn unsorted_input_is_drawn_in_time_order() {
    let series = Series::from_samples(vec![(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
    let cmds = render(&series, &bare_spec(), Canvas::new(300.0, 200.0));
    let paths = series_paths(&cmds);
    assert_eq!(paths.len(), 1);
    let xs: Vec<f64> = paths[0].iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 3);
    assert!(xs[0] < xs[1] && xs[1] < xs[2], "x not ascending: {:?}", xs);

    // first point of the series path is a move, the rest are lines
    let first_move = cmds.iter().position(|c| matches!(c, DrawCommand::MoveTo(_))).unwrap();
    assert!(matches!(cmds[first_move + 1], DrawCommand::LineTo(_)));
    assert!(matches!(cmds[first_move + 2], DrawCommand::LineTo(_)));
}

#[test]
fn padding_moves_domain_endpoints_inside() {
    let series = Series::from_samples(vec![(0.0, 1.0), (50.0, 2.0), (100.0, 3.0)]);
    let canvas = Canvas::new(1100.0, 200.0);
    let path = &series_paths(&render(&series, &bare_spec(), canvas))[0];

    // padded domain is [-5, 105]
    assert!((path[0].x - 5.0 / 110.0 * canvas.width).abs() < EPS);
    assert!((path[2].x - 105.0 / 110.0 * canvas.width).abs() < EPS);
    assert!(path[0].x > 0.0 && path[2].x < canvas.width);
}

#[test]
fn flat_signal_sits_on_one_row_inside_canvas() {
    let series: Series = (0..10).map(|i| (i as f64, 5.0)).collect();
    let canvas = Canvas::new(400.0, 200.0);
    let path = &series_paths(&render(&series, &bare_spec(), canvas))[0];
    assert_eq!(path.len(), 10);
    let row = path[0].y;
    assert!(path.iter().all(|p| (p.y - row).abs() < EPS));
    assert!(row > 0.0 && row < canvas.height);
    assert!((row - canvas.height / 2.0).abs() < EPS);
}

#[test]
fn empty_series_draws_no_line() {
    let cmds = render(&Series::new(), &bare_spec(), Canvas::new(300.0, 200.0));
    assert!(series_paths(&cmds).is_empty());
    assert!(cmds.iter().all(|c| match c {
        DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => p.x.is_finite() && p.y.is_finite(),
        _ => true,
    }));
}

#[test]
fn empty_series_placeholder_is_flat_midline() {
    let spec = bare_spec().with_empty_placeholder(true);
    let canvas = Canvas::new(300.0, 200.0);
    let paths = series_paths(&render(&Series::new(), &spec, canvas));
    assert_eq!(paths, vec![vec![Point::new(0.0, 100.0), Point::new(300.0, 100.0)]]);
}

#[test]
fn single_sample_is_centred() {
    let series = Series::from_samples(vec![(42.0, 7.5)]);
    let canvas = Canvas::new(320.0, 180.0);
    let cmds = render(&series, &bare_spec(), canvas);
    let paths = series_paths(&cmds);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 1);
    assert!((paths[0][0].x - 160.0).abs() < EPS);
    assert!((paths[0][0].y - 90.0).abs() < EPS);
}

#[test]
fn non_finite_samples_are_dropped_not_fatal() {
    let series = Series::from_samples(vec![(0.0, 1.0), (f64::NAN, 2.0), (1.0, f64::INFINITY), (2.0, 3.0)]);
    let path = &series_paths(&render(&series, &bare_spec(), Canvas::default()))[0];
    assert_eq!(path.len(), 2);
}

#[test]
fn y_labels_use_two_decimals_for_unit_range() {
    let series = Series::from_samples(vec![(0.0, 0.0), (10.0, 1.0)]);
    let got = labels(&render(&series, &bare_spec(), Canvas::default()), Anchor::Leading);
    assert_eq!(got, vec!["-0.05", "0.32", "0.68", "1.05"]);
}

#[test]
fn y_labels_use_one_decimal_for_wide_range() {
    let series = Series::from_samples(vec![(0.0, 0.0), (10.0, 100.0)]);
    let got = labels(&render(&series, &bare_spec(), Canvas::default()), Anchor::Leading);
    assert_eq!(got, vec!["-5.0", "31.7", "68.3", "105.0"]);
}

#[test]
fn y_ticks_can_be_hidden() {
    let series = Series::from_samples(vec![(0.0, 0.0), (10.0, 100.0)]);
    let spec = bare_spec().with_y_ticks(false);
    assert!(labels(&render(&series, &spec, Canvas::default()), Anchor::Leading).is_empty());
}

#[test]
fn first_x_tick_is_skipped() {
    let series = Series::from_samples(vec![(0.0, 1.0), (100.0, 2.0)]);
    let got = labels(&render(&series, &bare_spec(), Canvas::default()), Anchor::Top);
    let want: Vec<String> = (1..=10).map(|k| format!("{}", -5 + 11 * k)).collect();
    assert_eq!(got, want);
}

#[test]
fn axis_text_comes_last() {
    let series = Series::from_samples(vec![(0.0, 60.0), (10.0, 80.0)]);
    let spec = PlotSpec::new("Pulse Rate", "Time (s)", "BPM");
    let cmds = render(&series, &spec, Canvas::default());
    let tail: Vec<&str> = cmds
        .iter()
        .rev()
        .take(3)
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(tail, vec!["Time (s)", "BPM", "Pulse Rate"]);
}

#[test]
fn native_backend_draws_grid_beneath_series() {
    let series = Series::from_samples(vec![(0.0, 1.0), (100.0, 2.0)]);
    let theme = Theme::light();
    let renderer = Renderer::new(theme, Backend::Native);
    let cmds = renderer.render(&series, &bare_spec(), Canvas::default());
    let all = strokes(&cmds);
    let first_line = all.iter().position(|(_, c)| *c == theme.line).unwrap();
    assert!(first_line > 0);
    assert!(all[..first_line].iter().all(|(_, c)| *c == theme.grid));
    // 11 vertical + 4 horizontal grid lines
    assert_eq!(first_line, 15);

    let x_labels = labels(&cmds, Anchor::Top);
    assert_eq!(x_labels.first().map(String::as_str), Some("-5"));
}

#[test]
fn backend_follows_surface_capabilities() {
    assert_eq!(Backend::for_capabilities(SurfaceCapabilities { native_charts: true }), Backend::Native);
    assert_eq!(Backend::for_capabilities(SurfaceCapabilities::default()), Backend::ConnectTheDots);
}

#[test]
fn render_is_idempotent() {
    let series = Series::from_samples(vec![(2.0, 0.4), (0.5, 0.9), (1.0, 0.1)]);
    let spec = PlotSpec::new("Confidence", "Time", "Score");
    let a = render(&series, &spec, Canvas::default());
    let b = render(&series, &spec, Canvas::default());
    assert_eq!(a, b);
}

fn all_points_finite(cmds: &[DrawCommand]) -> bool {
    cmds.iter().all(|c| match c {
        DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) | DrawCommand::Text { at: p, .. } => {
            p.x.is_finite() && p.y.is_finite()
        }
        DrawCommand::Stroke { .. } => true,
    })
}

#[test]
fn extreme_finite_samples_stay_on_canvas() {
    let canvas = Canvas::new(300.0, 200.0);
    let renderer = Renderer::new(Theme::light(), Backend::Native);
    let inputs = [
        vec![(-1e308, 1.0), (1e308, 2.0)],
        vec![(-f64::MAX, -f64::MAX), (f64::MAX, f64::MAX)],
        vec![(0.0, -1e308), (1.0, 1e308)],
    ];
    for samples in inputs {
        let cmds = renderer.render(&Series::from_samples(samples.clone()), &bare_spec(), canvas);
        assert!(all_points_finite(&cmds), "non-finite command for {:?}", samples);
        let path = &series_paths(&cmds)[0];
        assert!(path.iter().all(|p| (0.0..=300.0).contains(&p.x) && (0.0..=200.0).contains(&p.y)));
        assert!(path[0].x < path[1].x);
    }
}

#[test]
fn huge_timestamps_draw_few_x_ticks() {
    let series = Series::from_samples(vec![(1.7e18, 70.0)]);
    let cmds = render(&series, &bare_spec(), Canvas::new(300.0, 200.0));
    assert!(labels(&cmds, Anchor::Top).len() <= 10);
    let path = &series_paths(&cmds)[0];
    assert_eq!(path.len(), 1);
    assert!((path[0].x - 150.0).abs() < EPS && (path[0].y - 100.0).abs() < EPS);
}

#[test]
fn degenerate_canvas_does_not_panic() {
    let series = Series::from_samples(vec![(0.0, 1.0), (1.0, 2.0)]);
    let cmds = render(&series, &bare_spec(), Canvas::new(f64::NAN, -10.0));
    assert!(!cmds.is_empty());
}
