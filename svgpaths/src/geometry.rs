//! SVG path-data geometry: parse, evaluate, reverse, re-serialize.
//!
//! DESIGN
//! ======
//! `d` attributes are tokenized with `svgtypes::PathParser` (full SVG path
//! grammar: all commands, absolute and relative, arc flags) and normalized
//! into absolute segments that each carry their own start and end points.
//! Shorthand commands disappear during normalization: `H`/`V` become lines,
//! smooth curves get their reflected control point materialized. That makes
//! reversal a purely structural operation — reverse the segment order and
//! flip each segment's own direction — and serialization deterministic
//! (absolute commands only).

use std::fmt::Write;

use svgtypes::{PathParser, PathSegment as SvgSegment};

/// Samples per curved segment when approximating arc length for `point_at`.
const LENGTH_SAMPLES: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum PathDataError {
    /// The `d` string does not conform to SVG path-data grammar.
    #[error("malformed path data: {0}")]
    Malformed(#[from] svgtypes::Error),
    /// The `d` string contains no move-to, so there is no geometry at all.
    #[error("empty path data")]
    Empty,
}

/// A 2D point in user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Display form used for path start points: fixed six decimal places.
    #[must_use]
    pub fn display(&self) -> String {
        format!("({:.6}, {:.6})", self.x, self.y)
    }

    fn lerp(a: Point, b: Point, t: f64) -> Point {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    fn distance(a: Point, b: Point) -> f64 {
        (b.x - a.x).hypot(b.y - a.y)
    }
}

/// One drawing segment with absolute start and end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    Cubic {
        start: Point,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
    Quadratic {
        start: Point,
        ctrl: Point,
        end: Point,
    },
    Arc {
        start: Point,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
}

impl Segment {
    #[must_use]
    pub fn start(&self) -> Point {
        match *self {
            Self::Line { start, .. }
            | Self::Cubic { start, .. }
            | Self::Quadratic { start, .. }
            | Self::Arc { start, .. } => start,
        }
    }

    #[must_use]
    pub fn end(&self) -> Point {
        match *self {
            Self::Line { end, .. }
            | Self::Cubic { end, .. }
            | Self::Quadratic { end, .. }
            | Self::Arc { end, .. } => end,
        }
    }

    /// Position along this segment at local parameter `u` in `[0, 1]`.
    #[must_use]
    pub fn eval(&self, u: f64) -> Point {
        match *self {
            Self::Line { start, end } => Point::lerp(start, end, u),
            Self::Quadratic { start, ctrl, end } => {
                let v = 1.0 - u;
                Point::new(
                    v * v * start.x + 2.0 * v * u * ctrl.x + u * u * end.x,
                    v * v * start.y + 2.0 * v * u * ctrl.y + u * u * end.y,
                )
            }
            Self::Cubic {
                start,
                ctrl1,
                ctrl2,
                end,
            } => {
                let v = 1.0 - u;
                Point::new(
                    v * v * v * start.x
                        + 3.0 * v * v * u * ctrl1.x
                        + 3.0 * v * u * u * ctrl2.x
                        + u * u * u * end.x,
                    v * v * v * start.y
                        + 3.0 * v * v * u * ctrl1.y
                        + 3.0 * v * u * u * ctrl2.y
                        + u * u * u * end.y,
                )
            }
            Self::Arc { .. } => self.eval_arc(u),
        }
    }

    /// Elliptical arc evaluation via the endpoint-to-center conversion of
    /// SVG 1.1 appendix F.6.5, including the out-of-range radii correction.
    fn eval_arc(&self, u: f64) -> Point {
        let Self::Arc {
            start,
            rx,
            ry,
            x_rotation,
            large_arc,
            sweep,
            end,
        } = *self
        else {
            unreachable!("eval_arc called on non-arc segment");
        };

        let mut rx = rx.abs();
        let mut ry = ry.abs();
        if rx == 0.0 || ry == 0.0 {
            return Point::lerp(start, end, u);
        }

        let phi = x_rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let dx2 = (start.x - end.x) / 2.0;
        let dy2 = (start.y - end.y) / 2.0;
        let x1p = cos_phi * dx2 + sin_phi * dy2;
        let y1p = -sin_phi * dx2 + cos_phi * dy2;

        // Scale radii up when no ellipse of the given size can span the endpoints.
        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        let num = rx * rx * ry * ry - rx * rx * y1p * y1p - ry * ry * x1p * x1p;
        let den = rx * rx * y1p * y1p + ry * ry * x1p * x1p;
        let mut coef = if den == 0.0 { 0.0 } else { (num / den).max(0.0).sqrt() };
        if large_arc == sweep {
            coef = -coef;
        }
        let cxp = coef * rx * y1p / ry;
        let cyp = -coef * ry * x1p / rx;
        let cx = cos_phi * cxp - sin_phi * cyp + (start.x + end.x) / 2.0;
        let cy = sin_phi * cxp + cos_phi * cyp + (start.y + end.y) / 2.0;

        let theta1 = vector_angle(1.0, 0.0, (x1p - cxp) / rx, (y1p - cyp) / ry);
        let mut delta = vector_angle(
            (x1p - cxp) / rx,
            (y1p - cyp) / ry,
            (-x1p - cxp) / rx,
            (-y1p - cyp) / ry,
        ) % (2.0 * std::f64::consts::PI);
        if !sweep && delta > 0.0 {
            delta -= 2.0 * std::f64::consts::PI;
        }
        if sweep && delta < 0.0 {
            delta += 2.0 * std::f64::consts::PI;
        }

        let theta = theta1 + u * delta;
        let (sin_t, cos_t) = theta.sin_cos();
        Point::new(
            cx + rx * cos_phi * cos_t - ry * sin_phi * sin_t,
            cy + rx * sin_phi * cos_t + ry * cos_phi * sin_t,
        )
    }

    /// Approximate arc length by polyline sampling; exact for lines.
    fn length(&self) -> f64 {
        if let Self::Line { start, end } = *self {
            return Point::distance(start, end);
        }
        let mut total = 0.0;
        let mut prev = self.eval(0.0);
        for i in 1..=LENGTH_SAMPLES {
            #[allow(clippy::cast_precision_loss)]
            let next = self.eval(i as f64 / LENGTH_SAMPLES as f64);
            total += Point::distance(prev, next);
            prev = next;
        }
        total
    }

    /// The same shape traversed in the opposite direction.
    fn reversed(&self) -> Segment {
        match *self {
            Self::Line { start, end } => Self::Line { start: end, end: start },
            Self::Quadratic { start, ctrl, end } => Self::Quadratic {
                start: end,
                ctrl,
                end: start,
            },
            Self::Cubic {
                start,
                ctrl1,
                ctrl2,
                end,
            } => Self::Cubic {
                start: end,
                ctrl1: ctrl2,
                ctrl2: ctrl1,
                end: start,
            },
            Self::Arc {
                start,
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep,
                end,
            } => Self::Arc {
                start: end,
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep: !sweep,
                end: start,
            },
        }
    }
}

fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();
    if len == 0.0 {
        return 0.0;
    }
    let angle = (dot / len).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 { -angle } else { angle }
}

/// One move-to and the segments drawn from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    pub start: Point,
    pub segments: Vec<Segment>,
    pub closed: bool,
}

/// Parsed path-data geometry: an ordered sequence of subpaths.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGeometry {
    pub subpaths: Vec<SubPath>,
}

/// Control point carried across segments for smooth-curve reflection.
#[derive(Clone, Copy)]
enum PrevCtrl {
    None,
    Cubic(Point),
    Quadratic(Point),
}

/// Parse a `d` attribute into geometry.
///
/// Accepts every standard path command in absolute and relative form.
/// Shorthand commands are normalized away: `H`/`V` become lines, `S`/`T`
/// materialize the reflected control point (reflection applies only when the
/// preceding segment is a curve of the same kind, per the SVG rules), and
/// `Z` becomes an explicit closing line plus a `closed` flag.
///
/// # Errors
///
/// [`PathDataError::Malformed`] when tokenization fails and
/// [`PathDataError::Empty`] when the string holds no move-to at all.
pub fn parse(d: &str) -> Result<PathGeometry, PathDataError> {
    let mut subpaths: Vec<SubPath> = Vec::new();
    let mut cur = Point::new(0.0, 0.0);
    let mut prev_ctrl = PrevCtrl::None;

    for token in PathParser::from(d) {
        let seg = token?;
        let abs_of = |abs: bool, x: f64, y: f64| {
            if abs {
                Point::new(x, y)
            } else {
                Point::new(cur.x + x, cur.y + y)
            }
        };

        match seg {
            SvgSegment::MoveTo { abs, x, y } => {
                let p = abs_of(abs, x, y);
                subpaths.push(SubPath {
                    start: p,
                    segments: Vec::new(),
                    closed: false,
                });
                cur = p;
                prev_ctrl = PrevCtrl::None;
            }
            SvgSegment::LineTo { abs, x, y } => {
                let end = abs_of(abs, x, y);
                push_segment(&mut subpaths, cur, Segment::Line { start: cur, end });
                cur = end;
                prev_ctrl = PrevCtrl::None;
            }
            SvgSegment::HorizontalLineTo { abs, x } => {
                let end = Point::new(if abs { x } else { cur.x + x }, cur.y);
                push_segment(&mut subpaths, cur, Segment::Line { start: cur, end });
                cur = end;
                prev_ctrl = PrevCtrl::None;
            }
            SvgSegment::VerticalLineTo { abs, y } => {
                let end = Point::new(cur.x, if abs { y } else { cur.y + y });
                push_segment(&mut subpaths, cur, Segment::Line { start: cur, end });
                cur = end;
                prev_ctrl = PrevCtrl::None;
            }
            SvgSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let ctrl1 = abs_of(abs, x1, y1);
                let ctrl2 = abs_of(abs, x2, y2);
                let end = abs_of(abs, x, y);
                push_segment(
                    &mut subpaths,
                    cur,
                    Segment::Cubic {
                        start: cur,
                        ctrl1,
                        ctrl2,
                        end,
                    },
                );
                cur = end;
                prev_ctrl = PrevCtrl::Cubic(ctrl2);
            }
            SvgSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let ctrl1 = match prev_ctrl {
                    PrevCtrl::Cubic(c) => Point::new(2.0 * cur.x - c.x, 2.0 * cur.y - c.y),
                    _ => cur,
                };
                let ctrl2 = abs_of(abs, x2, y2);
                let end = abs_of(abs, x, y);
                push_segment(
                    &mut subpaths,
                    cur,
                    Segment::Cubic {
                        start: cur,
                        ctrl1,
                        ctrl2,
                        end,
                    },
                );
                cur = end;
                prev_ctrl = PrevCtrl::Cubic(ctrl2);
            }
            SvgSegment::Quadratic { abs, x1, y1, x, y } => {
                let ctrl = abs_of(abs, x1, y1);
                let end = abs_of(abs, x, y);
                push_segment(&mut subpaths, cur, Segment::Quadratic { start: cur, ctrl, end });
                cur = end;
                prev_ctrl = PrevCtrl::Quadratic(ctrl);
            }
            SvgSegment::SmoothQuadratic { abs, x, y } => {
                let ctrl = match prev_ctrl {
                    PrevCtrl::Quadratic(c) => Point::new(2.0 * cur.x - c.x, 2.0 * cur.y - c.y),
                    _ => cur,
                };
                let end = abs_of(abs, x, y);
                push_segment(&mut subpaths, cur, Segment::Quadratic { start: cur, ctrl, end });
                cur = end;
                prev_ctrl = PrevCtrl::Quadratic(ctrl);
            }
            SvgSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let end = abs_of(abs, x, y);
                // A zero radius collapses the arc to a straight line (SVG F.6.6).
                let segment = if rx == 0.0 || ry == 0.0 {
                    Segment::Line { start: cur, end }
                } else {
                    Segment::Arc {
                        start: cur,
                        rx,
                        ry,
                        x_rotation: x_axis_rotation,
                        large_arc,
                        sweep,
                        end,
                    }
                };
                push_segment(&mut subpaths, cur, segment);
                cur = end;
                prev_ctrl = PrevCtrl::None;
            }
            SvgSegment::ClosePath { .. } => {
                if let Some(sub) = subpaths.last_mut() {
                    if cur != sub.start {
                        sub.segments.push(Segment::Line {
                            start: cur,
                            end: sub.start,
                        });
                    }
                    sub.closed = true;
                    cur = sub.start;
                }
                prev_ctrl = PrevCtrl::None;
            }
        }
    }

    if subpaths.is_empty() {
        return Err(PathDataError::Empty);
    }
    Ok(PathGeometry { subpaths })
}

/// A drawing command before any move-to starts an implicit subpath at the
/// current point. svgtypes rejects paths that do not begin with a move-to,
/// so this only guards geometry built by hand.
fn push_segment(subpaths: &mut Vec<SubPath>, cur: Point, segment: Segment) {
    if subpaths.is_empty() {
        subpaths.push(SubPath {
            start: cur,
            segments: Vec::new(),
            closed: false,
        });
    }
    if let Some(sub) = subpaths.last_mut() {
        sub.segments.push(segment);
    }
}

/// Position along the whole path at normalized arc-position `t` in `[0, 1]`.
///
/// `t` is distributed over segments by approximate arc length, so `t = 0` is
/// exactly the first subpath's start and `t = 1` the last segment's end. A
/// geometry with no drawable segments (a lone move-to) evaluates to its start
/// point for every `t`.
#[must_use]
pub fn point_at(geometry: &PathGeometry, t: f64) -> Point {
    let t = t.clamp(0.0, 1.0);
    let origin = geometry
        .subpaths
        .first()
        .map_or(Point::new(0.0, 0.0), |s| s.start);

    let segments: Vec<&Segment> = geometry
        .subpaths
        .iter()
        .flat_map(|s| s.segments.iter())
        .collect();
    if segments.is_empty() {
        return origin;
    }

    let lengths: Vec<f64> = segments.iter().map(|s| s.length()).collect();
    let total: f64 = lengths.iter().sum();
    if total <= f64::EPSILON {
        return origin;
    }

    let target = t * total;
    let mut walked = 0.0;
    for (seg, len) in segments.iter().zip(&lengths) {
        if walked + len >= target && *len > 0.0 {
            return seg.eval((target - walked) / len);
        }
        walked += len;
    }
    segments[segments.len() - 1].end()
}

/// A geometry with identical rendered shape but reversed traversal direction.
///
/// Subpaths come out in reverse order and each subpath's segments are
/// reversed individually: cubic control points swap roles, arcs flip their
/// sweep flag. Reversing twice restores the original geometry.
#[must_use]
pub fn reverse(geometry: &PathGeometry) -> PathGeometry {
    let subpaths = geometry
        .subpaths
        .iter()
        .rev()
        .map(|sub| {
            let start = sub.segments.last().map_or(sub.start, Segment::end);
            let segments: Vec<Segment> =
                sub.segments.iter().rev().map(Segment::reversed).collect();
            SubPath {
                start,
                segments,
                closed: sub.closed,
            }
        })
        .collect();
    PathGeometry { subpaths }
}

/// Serialize geometry back into a `d` string using absolute commands only.
///
/// Closed subpaths end in `Z`; when the final segment is the explicit closing
/// line back to the subpath start it is folded into the `Z` (which draws the
/// identical line), so close-path round-trips do not accumulate segments.
#[must_use]
pub fn to_path_data(geometry: &PathGeometry) -> String {
    let mut d = String::new();
    for sub in &geometry.subpaths {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = write!(d, "M {} {}", fmt_num(sub.start.x), fmt_num(sub.start.y));
        for (i, seg) in sub.segments.iter().enumerate() {
            let is_last = i + 1 == sub.segments.len();
            if sub.closed && is_last {
                if let Segment::Line { end, .. } = seg {
                    if *end == sub.start {
                        continue;
                    }
                }
            }
            match *seg {
                Segment::Line { end, .. } => {
                    let _ = write!(d, " L {} {}", fmt_num(end.x), fmt_num(end.y));
                }
                Segment::Quadratic { ctrl, end, .. } => {
                    let _ = write!(
                        d,
                        " Q {} {} {} {}",
                        fmt_num(ctrl.x),
                        fmt_num(ctrl.y),
                        fmt_num(end.x),
                        fmt_num(end.y)
                    );
                }
                Segment::Cubic {
                    ctrl1, ctrl2, end, ..
                } => {
                    let _ = write!(
                        d,
                        " C {} {} {} {} {} {}",
                        fmt_num(ctrl1.x),
                        fmt_num(ctrl1.y),
                        fmt_num(ctrl2.x),
                        fmt_num(ctrl2.y),
                        fmt_num(end.x),
                        fmt_num(end.y)
                    );
                }
                Segment::Arc {
                    rx,
                    ry,
                    x_rotation,
                    large_arc,
                    sweep,
                    end,
                    ..
                } => {
                    let _ = write!(
                        d,
                        " A {} {} {} {} {} {} {}",
                        fmt_num(rx),
                        fmt_num(ry),
                        fmt_num(x_rotation),
                        u8::from(large_arc),
                        u8::from(sweep),
                        fmt_num(end.x),
                        fmt_num(end.y)
                    );
                }
            }
        }
        if sub.closed {
            d.push_str(" Z");
        }
    }
    d
}

/// Shortest round-trip decimal form; `-0` collapses to `0`.
fn fmt_num(n: f64) -> String {
    if n == 0.0 {
        return "0".to_owned();
    }
    format!("{n}")
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
