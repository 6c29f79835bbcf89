//! Easing functions for one-shot transitions over `[0, 1]`.
//!
//! Unlike waveforms these are not periodic: input is progress through a
//! transition, with 0 at the start and 1 at the end.

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InExpo,
    OutExpo,
    InOutExpo,
}

impl Easing {
    pub const ALL: [Easing; 9] = [
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
    ];
}

/// Apply an easing curve to progress `x`.
pub fn ease(kind: Easing, x: f64) -> f64 {
    match kind {
        Easing::InQuad => ease_in_quad(x),
        Easing::OutQuad => ease_out_quad(x),
        Easing::InOutQuad => ease_in_out_quad(x),
        Easing::InCubic => ease_in_cubic(x),
        Easing::OutCubic => ease_out_cubic(x),
        Easing::InOutCubic => ease_in_out_cubic(x),
        Easing::InExpo => ease_in_expo(x),
        Easing::OutExpo => ease_out_expo(x),
        Easing::InOutExpo => ease_in_out_expo(x),
    }
}

pub fn ease_in_quad(x: f64) -> f64 {
    x * x
}

pub fn ease_out_quad(x: f64) -> f64 {
    1.0 - (1.0 - x) * (1.0 - x)
}

pub fn ease_in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

pub fn ease_in_cubic(x: f64) -> f64 {
    x * x * x
}

pub fn ease_out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(3)
}

pub fn ease_in_out_cubic(x: f64) -> f64 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

/// `2^(10x - 10)`, pinned to exactly 0 at the start.
pub fn ease_in_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * x - 10.0)
    }
}

/// `1 - 2^(-10x)`, pinned to exactly 1 at the end.
pub fn ease_out_expo(x: f64) -> f64 {
    if x == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * x)
    }
}

pub fn ease_in_out_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x == 0.5 {
        0.5
    } else if x < 0.5 {
        2f64.powf(20.0 * x - 10.0) / 2.0
    } else {
        1.0 - 2f64.powf(-20.0 * x + 10.0) / 2.0
    }
}
