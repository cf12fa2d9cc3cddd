//! SVG rendering of a mapping pass. This module only consumes the computed geometry; colors,
//! sizes, and fonts all come from a `StyleConfig`.

use crate::airfoil::JoukowskyAirfoil;
use crate::conformal::to_point;
use crate::errors::RenderError;
use itertools::{Itertools, MinMaxResult};
use ncollide2d::na::Point2;
use std::path::Path;
use svg::node::element::{Circle, Group, Line, Path as SvgPath, Rectangle, Text};
use svg::Document;
use tracing::info;

pub mod style;

pub use style::StyleConfig;

const CIRCLE_TITLE: &str = "Off-Center Circle in z-plane";
const AIRFOIL_TITLE: &str = "Joukowsky Transformation on off-center Circle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// A single panel with the offset circle, its center, and the radius to the trailing edge
    CirclePlane,

    /// The circle on the left and the mapped airfoil on the right
    SideBySide,
}

impl Layout {
    pub fn default_output(&self) -> &'static str {
        match self {
            Layout::CirclePlane => "output/complex_circle_z_plane.svg",
            Layout::SideBySide => "output/joukowsky_airfoil.svg",
        }
    }
}

enum Mark {
    Dot,
    Cross,
}

struct Marker {
    at: Point2<f64>,
    color: String,
    mark: Mark,
    label: &'static str,
}

struct Panel {
    title: &'static str,
    curve: Vec<Point2<f64>>,
    color: String,
    curve_width: f64,
    dashed: Option<(Point2<f64>, Point2<f64>)>,
    markers: Vec<Marker>,
}

impl Panel {
    fn extent(&self) -> Vec<Point2<f64>> {
        let mut points = self.curve.clone();
        if let Some((a, b)) = self.dashed {
            points.push(a);
            points.push(b);
        }
        points.extend(self.markers.iter().map(|m| m.at));
        points
    }
}

/// Maps plane coordinates into the pixel box of a panel with the same scale on both axes
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    cx: f64,
    cy: f64,
    scale: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

fn bounds(result: MinMaxResult<f64>) -> Option<(f64, f64)> {
    match result {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(a, b) => Some((a, b)),
    }
}

impl Frame {
    fn fit(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        margin: f64,
        points: &[Point2<f64>],
    ) -> Result<Frame, RenderError> {
        let (x0, x1) =
            bounds(points.iter().map(|p| p.x).minmax()).ok_or(RenderError::EmptyGeometry)?;
        let (y0, y1) =
            bounds(points.iter().map(|p| p.y).minmax()).ok_or(RenderError::EmptyGeometry)?;

        let inner_w = (width - 2.0 * margin).max(1.0);
        let inner_h = (height - 2.0 * margin).max(1.0);
        let span_x = (x1 - x0).max(1e-9) * 1.1;
        let span_y = (y1 - y0).max(1e-9) * 1.1;
        let scale = (inner_w / span_x).min(inner_h / span_y);

        let cx = (x0 + x1) / 2.0;
        let cy = (y0 + y1) / 2.0;
        let half_w = inner_w / scale / 2.0;
        let half_h = inner_h / scale / 2.0;

        Ok(Frame {
            left: left + margin,
            top: top + margin,
            width: inner_w,
            height: inner_h,
            cx,
            cy,
            scale,
            x_range: (cx - half_w, cx + half_w),
            y_range: (cy - half_h, cy + half_h),
        })
    }

    fn px(&self, p: &Point2<f64>) -> (f64, f64) {
        (
            self.left + self.width / 2.0 + (p.x - self.cx) * self.scale,
            self.top + self.height / 2.0 - (p.y - self.cy) * self.scale,
        )
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A round tick spacing of 1, 2, or 5 times a power of ten giving roughly five ticks over `span`
fn nice_step(span: f64) -> f64 {
    let raw = span / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };

    factor * magnitude
}

fn ticks(range: (f64, f64)) -> (Vec<f64>, usize) {
    let step = nice_step(range.1 - range.0);
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    let start = (range.0 / step).ceil() as i64;
    let end = (range.1 / step).floor() as i64;
    let values = (start..=end)
        .map(|i| if i == 0 { 0.0 } else { i as f64 * step })
        .collect();

    (values, decimals)
}

fn path_data(points: &[Point2<f64>], frame: &Frame) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (x, y) = frame.px(p);
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{}{:.3},{:.3}", command, x, y)
        })
        .join(" ")
}

fn cross_data(x: f64, y: f64, s: f64) -> String {
    format!(
        "M{:.3},{:.3} L{:.3},{:.3} M{:.3},{:.3} L{:.3},{:.3}",
        x - s,
        y - s,
        x + s,
        y + s,
        x - s,
        y + s,
        x + s,
        y - s
    )
}

/// Renders mapping results as SVG documents
pub struct SvgRenderer {
    style: StyleConfig,
}

impl SvgRenderer {
    pub fn new(style: StyleConfig) -> SvgRenderer {
        SvgRenderer { style }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    fn edge_markers(&self, trailing: Point2<f64>, leading: Point2<f64>) -> Vec<Marker> {
        vec![
            Marker {
                at: leading,
                color: self.style.leading_edge_color().to_string(),
                mark: Mark::Dot,
                label: "Leading Edge",
            },
            Marker {
                at: trailing,
                color: self.style.trailing_edge_color().to_string(),
                mark: Mark::Dot,
                label: "Trailing Edge",
            },
        ]
    }

    fn circle_panel(&self, result: &JoukowskyAirfoil, show_center: bool) -> Panel {
        let trailing = to_point(&result.edges.trailing());
        let leading = to_point(&result.edges.leading());
        let mut markers = self.edge_markers(trailing, leading);
        let mut dashed = None;
        let mut curve_width = self.style.curve_width;

        if show_center {
            let center = to_point(&result.params.center());
            dashed = Some((center, trailing));
            curve_width = self.style.circle_plane_curve_width;
            markers.push(Marker {
                at: center,
                color: self.style.axis_color.clone(),
                mark: Mark::Cross,
                label: "Center",
            });
        }

        Panel {
            title: CIRCLE_TITLE,
            curve: result.circle.to_points(),
            color: self.style.circle_color.clone(),
            curve_width,
            dashed,
            markers,
        }
    }

    fn airfoil_panel(&self, result: &JoukowskyAirfoil) -> Panel {
        Panel {
            title: AIRFOIL_TITLE,
            curve: result.to_outer_contour(),
            color: self.style.airfoil_color.clone(),
            curve_width: self.style.curve_width,
            dashed: None,
            markers: self.edge_markers(
                to_point(&result.mapped_edges.trailing()),
                to_point(&result.mapped_edges.leading()),
            ),
        }
    }

    fn draw_grid(&self, frame: &Frame) -> Group {
        let s = &self.style;
        let mut group = Group::new()
            .set("stroke", "#b0b0b0")
            .set("stroke-width", 1.0)
            .set("stroke-opacity", s.grid_opacity);

        let (x_ticks, x_decimals) = ticks(frame.x_range);
        for x in x_ticks {
            let (px, _) = frame.px(&Point2::new(x, frame.cy));
            group = group
                .add(
                    Line::new()
                        .set("x1", px)
                        .set("y1", frame.top)
                        .set("x2", px)
                        .set("y2", frame.bottom()),
                )
                .add(
                    Text::new(format!("{:.*}", x_decimals, x))
                        .set("x", px)
                        .set("y", frame.bottom() + s.tick_size + 4.0)
                        .set("font-size", s.tick_size)
                        .set("text-anchor", "middle")
                        .set("stroke", "none")
                        .set("fill", s.axis_color.as_str()),
                );
        }

        let (y_ticks, y_decimals) = ticks(frame.y_range);
        for y in y_ticks {
            let (_, py) = frame.px(&Point2::new(frame.cx, y));
            group = group
                .add(
                    Line::new()
                        .set("x1", frame.left)
                        .set("y1", py)
                        .set("x2", frame.right())
                        .set("y2", py),
                )
                .add(
                    Text::new(format!("{:.*}", y_decimals, y))
                        .set("x", frame.left - 6.0)
                        .set("y", py + s.tick_size / 3.0)
                        .set("font-size", s.tick_size)
                        .set("text-anchor", "end")
                        .set("stroke", "none")
                        .set("fill", s.axis_color.as_str()),
                );
        }

        group
    }

    fn draw_axes(&self, frame: &Frame) -> Group {
        let s = &self.style;
        let mut group = Group::new()
            .set("stroke", s.axis_color.as_str())
            .set("stroke-width", s.axis_width);

        if frame.x_range.0 <= 0.0 && 0.0 <= frame.x_range.1 {
            let (px, _) = frame.px(&Point2::new(0.0, frame.cy));
            group = group.add(
                Line::new()
                    .set("x1", px)
                    .set("y1", frame.top)
                    .set("x2", px)
                    .set("y2", frame.bottom()),
            );
        }

        if frame.y_range.0 <= 0.0 && 0.0 <= frame.y_range.1 {
            let (_, py) = frame.px(&Point2::new(frame.cx, 0.0));
            group = group.add(
                Line::new()
                    .set("x1", frame.left)
                    .set("y1", py)
                    .set("x2", frame.right())
                    .set("y2", py),
            );
        }

        group
    }

    fn draw_marker(&self, marker: &Marker, x: f64, y: f64) -> Group {
        let r = self.style.marker_radius;
        let group = Group::new();
        match marker.mark {
            Mark::Dot => group.add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", r)
                    .set("fill", marker.color.as_str()),
            ),
            Mark::Cross => group.add(
                SvgPath::new()
                    .set("d", cross_data(x, y, r))
                    .set("fill", "none")
                    .set("stroke", marker.color.as_str())
                    .set("stroke-width", 2.0),
            ),
        }
    }

    fn draw_legend(&self, markers: &[Marker], frame: &Frame) -> Group {
        let s = &self.style;
        let row = s.legend_size * 1.8;
        let width = s.legend_size * 9.0;
        let height = row * markers.len() as f64 + s.legend_size * 0.6;
        let left = frame.right() - width - 8.0;
        let top = frame.top + 8.0;

        let mut group = Group::new().add(
            Rectangle::new()
                .set("x", left)
                .set("y", top)
                .set("width", width)
                .set("height", height)
                .set("rx", 4.0)
                .set("fill", "#ffffff")
                .set("fill-opacity", 0.8)
                .set("stroke", "#cccccc"),
        );

        for (i, marker) in markers.iter().enumerate() {
            let y = top + row * (i as f64 + 0.5) + s.legend_size * 0.3;
            group = group
                .add(self.draw_marker(marker, left + s.legend_size, y))
                .add(
                    Text::new(marker.label)
                        .set("x", left + s.legend_size * 2.2)
                        .set("y", y + s.legend_size / 3.0)
                        .set("font-size", s.legend_size)
                        .set("fill", s.axis_color.as_str()),
                );
        }

        group
    }

    fn draw_panel(&self, panel: &Panel, frame: &Frame) -> Group {
        let s = &self.style;
        let mut group = Group::new()
            .add(
                Rectangle::new()
                    .set("x", frame.left)
                    .set("y", frame.top)
                    .set("width", frame.width)
                    .set("height", frame.height)
                    .set("fill", "none")
                    .set("stroke", "#cccccc"),
            )
            .add(self.draw_grid(frame))
            .add(self.draw_axes(frame))
            .add(
                SvgPath::new()
                    .set("d", path_data(&panel.curve, frame))
                    .set("fill", "none")
                    .set("stroke", panel.color.as_str())
                    .set("stroke-width", panel.curve_width)
                    .set("stroke-linejoin", "round"),
            );

        if let Some((a, b)) = panel.dashed {
            let (x1, y1) = frame.px(&a);
            let (x2, y2) = frame.px(&b);
            group = group.add(
                Line::new()
                    .set("x1", x1)
                    .set("y1", y1)
                    .set("x2", x2)
                    .set("y2", y2)
                    .set("stroke", s.axis_color.as_str())
                    .set("stroke-width", s.radius_width)
                    .set("stroke-dasharray", "10,6"),
            );
        }

        for marker in panel.markers.iter() {
            let (x, y) = frame.px(&marker.at);
            group = group.add(self.draw_marker(marker, x, y));
        }

        let mid_x = frame.left + frame.width / 2.0;
        let label_x = frame.left - s.tick_size * 3.5;
        let label_y = frame.top + frame.height / 2.0;

        group
            .add(
                Text::new(panel.title)
                    .set("x", mid_x)
                    .set("y", frame.top - s.title_size)
                    .set("font-size", s.title_size)
                    .set("text-anchor", "middle"),
            )
            .add(
                Text::new("Real")
                    .set("x", mid_x)
                    .set("y", frame.bottom() + s.tick_size + s.label_size + 14.0)
                    .set("font-size", s.label_size)
                    .set("text-anchor", "middle"),
            )
            .add(
                Text::new("Imaginary")
                    .set("x", label_x)
                    .set("y", label_y)
                    .set("font-size", s.label_size)
                    .set("text-anchor", "middle")
                    .set("transform", format!("rotate(-90 {:.3} {:.3})", label_x, label_y)),
            )
            .add(self.draw_legend(&panel.markers, frame))
    }

    /// Build the figure for one mapping pass in the requested layout
    pub fn render(
        &self,
        result: &JoukowskyAirfoil,
        layout: Layout,
    ) -> Result<Document, RenderError> {
        let s = &self.style;
        let panels = match layout {
            Layout::CirclePlane => vec![self.circle_panel(result, true)],
            Layout::SideBySide => vec![self.circle_panel(result, false), self.airfoil_panel(result)],
        };

        let width = s.panel_width * panels.len() as f64;
        let height = s.panel_height;
        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {} {}", width, height))
            .set("font-family", s.font_family.as_str())
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "#ffffff"),
            );

        for (i, panel) in panels.iter().enumerate() {
            let frame = Frame::fit(
                s.panel_width * i as f64,
                0.0,
                s.panel_width,
                s.panel_height,
                s.margin,
                &panel.extent(),
            )?;
            document = document.add(self.draw_panel(panel, &frame));
        }

        Ok(document)
    }

    /// Render and write the figure to `path`, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(
        &self,
        result: &JoukowskyAirfoil,
        layout: Layout,
        path: P,
    ) -> Result<(), RenderError> {
        let path = path.as_ref();
        let document = self.render(result, layout)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        svg::save(path, &document)?;
        info!(path = %path.display(), ?layout, "wrote figure");
        Ok(())
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        SvgRenderer::new(StyleConfig::default())
    }
}
