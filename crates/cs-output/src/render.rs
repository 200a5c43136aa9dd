//! SVG rendering of a finished schedule.
//!
//! One document, two stacked panels sharing a time axis:
//!
//! - **Occupancy** (top, 3/4 of the plot height): one row per stall,
//!   `Stall1` at the bottom, one bar per served `[start, end)` interval.
//!   Bar colours cycle through a 20-colour palette per stall.
//! - **Queuing vs charging** (bottom, 1/4): one row per vehicle by ascending
//!   id, a red segment from arrival to start and a green segment from start
//!   to end.
//!
//! The renderer reads the table only.  Coordinates are written with one
//! decimal so output is stable across platforms.

use std::fmt::Write as _;
use std::path::Path;

use cs_sim::ResultTable;

use crate::{OutputError, OutputResult};

/// Matplotlib's `tab20c`, the palette the occupancy bars cycle through.
const PALETTE: [&str; 20] = [
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d",
    "#fd8d3c", "#fdae6b", "#fdd0a2", "#31a354", "#74c476",
    "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc",
    "#dadaeb", "#636363", "#969696", "#bdbdbd", "#d9d9d9",
];

const QUEUE_COLOR:  &str = "red";
const CHARGE_COLOR: &str = "green";
const GRID_COLOR:   &str = "#dddddd";

const MARGIN_LEFT:   f64 = 90.0;
const MARGIN_RIGHT:  f64 = 30.0;
const MARGIN_TOP:    f64 = 50.0;
/// Space between the panels and below the lower one: tick labels, axis
/// title, and the next panel's title.
const PANEL_GAP:     f64 = 80.0;
const TARGET_TICKS:  usize = 10;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Panel {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Panel {
    fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Vertical centre of row `i` of `rows`, counting from the bottom.
    fn row_center(&self, i: usize, rows: usize) -> f64 {
        let row_h = self.h / rows as f64;
        self.bottom() - (i as f64 + 0.5) * row_h
    }
}

/// Maps simulated time onto the horizontal axis.
#[derive(Clone, Copy)]
struct TimeAxis {
    t0: f64,
    t1: f64,
}

impl TimeAxis {
    fn x(&self, panel: &Panel, t: f64) -> f64 {
        let span = self.t1 - self.t0;
        let span = if span > 0.0 { span } else { 1.0 };
        panel.x + (t - self.t0).max(0.0) / span * panel.w
    }

    /// Evenly spaced tick values using a 1-2-5 step, at most
    /// `2 * TARGET_TICKS + 1` of them.
    fn ticks(&self) -> Vec<f64> {
        let step = nice_step(self.t1 - self.t0, TARGET_TICKS);
        let first = (self.t0 / step).ceil() * step;
        (0..=2 * TARGET_TICKS)
            .map(|k| first + k as f64 * step)
            .take_while(|&t| t <= self.t1)
            .collect()
    }
}

/// Smallest step from the 1-2-5 series such that `span / step <= target`.
///
/// Falls back to `span` itself (or `1.0`) when the series cannot be formed.
fn nice_step(span: f64, target: usize) -> f64 {
    if !(span > 0.0 && span.is_finite()) {
        return 1.0;
    }
    let magnitude = 10f64.powf((span / target as f64).log10().floor());
    if !(magnitude > 0.0 && magnitude.is_finite()) {
        return span;
    }
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|&step| span / step <= target as f64)
        .unwrap_or(span)
}

/// Tick label with only as many decimals as `step` needs.
fn tick_label(t: f64, step: f64) -> String {
    let decimals = (-step.log10().floor()).clamp(0.0, 12.0) as usize;
    format!("{t:.decimals$}")
}

// ── SvgRenderer ───────────────────────────────────────────────────────────────

/// Renders a [`ResultTable`] as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub width:  u32,
    pub height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { width: 1000, height: 800 }
    }
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render `table` to an SVG string.
    ///
    /// Fails with [`OutputError::EmptyTable`] if no vehicle has been served.
    pub fn render(&self, table: &ResultTable) -> OutputResult<String> {
        let served: Vec<_> = table.iter().filter(|r| r.is_served()).collect();
        if served.is_empty() {
            return Err(OutputError::EmptyTable);
        }

        let axis = TimeAxis {
            t0: 0.0,
            t1: served.iter().map(|r| r.end_time).max().map_or(1.0, |t| t.0),
        };

        let (w, h) = (self.width as f64, self.height as f64);
        let plot_w = w - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = h - MARGIN_TOP - 2.0 * PANEL_GAP;
        let top = Panel { x: MARGIN_LEFT, y: MARGIN_TOP, w: plot_w, h: plot_h * 0.75 };
        let bottom = Panel {
            x: MARGIN_LEFT,
            y: top.bottom() + PANEL_GAP,
            w: plot_w,
            h: plot_h * 0.25,
        };

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif" font-size="12">"#,
            self.width, self.height, self.width, self.height
        )?;
        writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        self.occupancy_panel(&mut svg, table, &top, axis)?;
        self.vehicle_panel(&mut svg, table, &bottom, axis)?;

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }

    /// Render `table` and write it to `path`.
    pub fn write(&self, table: &ResultTable, path: &Path) -> OutputResult<()> {
        let svg = self.render(table)?;
        std::fs::write(path, svg)?;
        Ok(())
    }

    // ── Panels ────────────────────────────────────────────────────────────

    fn occupancy_panel(
        &self,
        svg:   &mut String,
        table: &ResultTable,
        panel: &Panel,
        axis:  TimeAxis,
    ) -> OutputResult<()> {
        let stalls = table.num_stalls().max(1);
        let row_h = panel.h / stalls as f64;

        frame(svg, panel, axis, "Charging Stalls Occupancy Over Time", "Charging Stalls")?;

        for (s, group) in table.by_stall().iter().enumerate() {
            let cy = panel.row_center(s, stalls);
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" dominant-baseline="middle">Stall{}</text>"#,
                panel.x - 8.0,
                cy,
                s + 1
            )?;
            for (j, row) in group.iter().enumerate() {
                let x0 = axis.x(panel, row.start_time.0);
                let x1 = axis.x(panel, row.end_time.0);
                writeln!(
                    svg,
                    r#"<rect class="charge" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>vehicle {} [{}, {})</title></rect>"#,
                    x0,
                    cy - 0.4 * row_h,
                    (x1 - x0).max(0.5),
                    0.8 * row_h,
                    PALETTE[j % PALETTE.len()],
                    row.id.0,
                    row.start_time.0,
                    row.end_time.0
                )?;
            }
        }
        Ok(())
    }

    fn vehicle_panel(
        &self,
        svg:   &mut String,
        table: &ResultTable,
        panel: &Panel,
        axis:  TimeAxis,
    ) -> OutputResult<()> {
        let rows = table.len().max(1);

        frame(svg, panel, axis, "Serving or Queuing Distribution for Vehicles", "Vehicle ID")?;

        // Rows are in ascending id already.
        for (i, row) in table.iter().enumerate().filter(|(_, r)| r.is_served()) {
            let y = panel.row_center(i, rows);
            let arrive = axis.x(panel, row.arrival_time.0);
            let start = axis.x(panel, row.start_time.0);
            let end = axis.x(panel, row.end_time.0);
            if row.wait_time() > 0.0 {
                segment(svg, "queue", arrive, start, y, QUEUE_COLOR)?;
            }
            segment(svg, "service", start, end, y, CHARGE_COLOR)?;
        }

        // Legend, lower right.
        let lx = panel.x + panel.w - 110.0;
        let ly = panel.bottom() - 34.0;
        writeln!(
            svg,
            r#"<rect x="{:.1}" y="{:.1}" width="100" height="30" fill="white" stroke="{}"/>"#,
            lx - 5.0,
            ly - 5.0,
            GRID_COLOR
        )?;
        for (k, (label, color)) in [("Queuing", QUEUE_COLOR), ("Charging", CHARGE_COLOR)]
            .into_iter()
            .enumerate()
        {
            let y = ly + 5.0 + 12.0 * k as f64;
            writeln!(
                svg,
                r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{color}" stroke-width="2"/><text x="{:.1}" y="{y:.1}" dominant-baseline="middle">{label}</text>"#,
                lx,
                lx + 20.0,
                lx + 26.0,
            )?;
        }
        Ok(())
    }
}

// ── Drawing helpers ───────────────────────────────────────────────────────────

/// Panel border, vertical grid with tick labels, title, and axis titles.
fn frame(
    svg:     &mut String,
    panel:   &Panel,
    axis:    TimeAxis,
    title:   &str,
    y_label: &str,
) -> OutputResult<()> {
    let ticks = axis.ticks();
    let step = match ticks.as_slice() {
        [a, b, ..] => b - a,
        _ => 1.0,
    };
    for t in ticks {
        let x = axis.x(panel, t);
        writeln!(
            svg,
            r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="{GRID_COLOR}"/><text x="{x:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            panel.y,
            panel.bottom(),
            panel.bottom() + 16.0,
            tick_label(t, step),
        )?;
    }
    writeln!(
        svg,
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="black"/>"#,
        panel.x, panel.y, panel.w, panel.h
    )?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{title}</text>"#,
        panel.x + panel.w / 2.0,
        panel.y - 12.0
    )?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">Time(Minutes)</text>"#,
        panel.x + panel.w / 2.0,
        panel.bottom() + 36.0
    )?;
    let (yx, yy) = (panel.x - 70.0, panel.y + panel.h / 2.0);
    writeln!(
        svg,
        r#"<text x="{yx:.1}" y="{yy:.1}" text-anchor="middle" transform="rotate(-90 {yx:.1} {yy:.1})">{y_label}</text>"#,
    )?;
    Ok(())
}

fn segment(svg: &mut String, class: &str, x0: f64, x1: f64, y: f64, color: &str) -> OutputResult<()> {
    writeln!(
        svg,
        r#"<line class="{class}" x1="{x0:.1}" y1="{y:.1}" x2="{x1:.1}" y2="{y:.1}" stroke="{color}" stroke-width="2"/>"#,
    )?;
    Ok(())
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Render with the default 1000×800 canvas.
pub fn render_svg(table: &ResultTable) -> OutputResult<String> {
    SvgRenderer::default().render(table)
}

/// Render with the default canvas and write to `path`.
pub fn write_svg(table: &ResultTable, path: &Path) -> OutputResult<()> {
    SvgRenderer::default().write(table, path)
}
