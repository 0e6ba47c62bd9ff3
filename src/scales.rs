// src/scales.rs
//
// Geometry mapping: record fields → screen position, radius, fill.
//
// Scales are fit ONCE against the full RecordStore and never refit when
// filters change. Filtering masks records; it must not rescale the chart.
// A record therefore keeps the same cx/cy/r/fill for the whole session.

use crate::config::consts::*;
use crate::records::{Record, RecordStore};

/// Plain sRGB triple, GUI-toolkit agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Linear scale over [0, domain_max] → [range.0, range.1].
/// The range may run high-to-low; the y axis uses that, anchoring zero
/// conceded at the bottom edge of the plot area like the source chart.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain_max: f32,
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain_max: f32, range: (f32, f32)) -> Self {
        Self { domain_max, range }
    }

    pub fn map(&self, v: f32) -> f32 {
        if self.domain_max <= 0.0 {
            return self.range.0;
        }
        let t = v / self.domain_max;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    pub fn domain_max(&self) -> f32 { self.domain_max }
}

/// Square-root scale over [0, domain_max] → [range.0, range.1].
/// Area-proportional encoding for the point totals, so a doubled points
/// tally does not read as a quadrupled bubble.
#[derive(Clone, Copy, Debug)]
pub struct SqrtScale {
    domain_max: f32,
    range: (f32, f32),
}

impl SqrtScale {
    pub fn new(domain_max: f32, range: (f32, f32)) -> Self {
        Self { domain_max, range }
    }

    pub fn map(&self, v: f32) -> f32 {
        if self.domain_max <= 0.0 {
            return self.range.0;
        }
        let t = (v.max(0.0) / self.domain_max).sqrt();
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Magma ramp anchors, evenly spaced over t in [0, 1].
const MAGMA: [Rgb; 11] = [
    Rgb { r: 0x00, g: 0x00, b: 0x04 },
    Rgb { r: 0x14, g: 0x0e, b: 0x36 },
    Rgb { r: 0x3b, g: 0x0f, b: 0x70 },
    Rgb { r: 0x64, g: 0x1a, b: 0x80 },
    Rgb { r: 0x8c, g: 0x29, b: 0x81 },
    Rgb { r: 0xb7, g: 0x37, b: 0x79 },
    Rgb { r: 0xde, g: 0x49, b: 0x68 },
    Rgb { r: 0xf7, g: 0x70, b: 0x5c },
    Rgb { r: 0xfe, g: 0x9f, b: 0x6d },
    Rgb { r: 0xfe, g: 0xcf, b: 0x92 },
    Rgb { r: 0xfc, g: 0xfd, b: 0xbf },
];

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Sample the magma ramp at t in [0, 1] (clamped).
pub fn magma(t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0) * (MAGMA.len() - 1) as f32;
    let i = (t.floor() as usize).min(MAGMA.len() - 2);
    let f = t - i as f32;
    let (a, b) = (MAGMA[i], MAGMA[i + 1]);
    Rgb {
        r: lerp_u8(a.r, b.r, f),
        g: lerp_u8(a.g, b.g, f),
        b: lerp_u8(a.b, b.b, f),
    }
}

/// Sequential color over the closed finishing-position domain [1, 20].
/// Independent of the other scales and of filtering.
#[derive(Clone, Copy, Debug)]
pub struct PositionColor;

impl PositionColor {
    pub fn map(&self, position: u32) -> Rgb {
        let t = (position.clamp(1, 20) - 1) as f32 / 19.0;
        magma(t)
    }
}

/// The full geometry mapping for one session.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub size: SqrtScale,
    pub color: PositionColor,
}

impl Scales {
    /// Fit against the unfiltered store. Called once, on load.
    pub fn fit(store: &RecordStore) -> Self {
        Self {
            x: LinearScale::new(
                store.max_gf() as f32,
                (MARGIN_LEFT, CHART_W - MARGIN_RIGHT),
            ),
            // Range runs baseline-up: 0 conceded maps to the bottom edge.
            y: LinearScale::new(
                store.max_ga() as f32,
                (CHART_H - MARGIN_BOTTOM, MARGIN_TOP),
            ),
            size: SqrtScale::new(store.max_points() as f32, (RADIUS_MIN, RADIUS_MAX)),
            color: PositionColor,
        }
    }

    pub fn cx(&self, r: &Record) -> f32 { self.x.map(r.gf as f32) }
    pub fn cy(&self, r: &Record) -> f32 { self.y.map(r.ga as f32) }
    pub fn radius(&self, r: &Record) -> f32 { self.size.map(r.points as f32) }
    pub fn fill(&self, r: &Record) -> Rgb { self.color.map(r.position) }
}
