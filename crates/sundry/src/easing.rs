//! Easing/tweening curves.
//!
//! Every curve maps normalized time (`t` in `0..=1`) to normalized value
//! progress, with `f(0) = 0` and `f(1) = 1`. Curves with an extra shape
//! parameter (`power_in`, `back_in`, ...) have fixed-parameter shortcuts
//! matching an [`EasingCurve`].

use std::f32::consts::PI;

/// An easing function curve: normalized time in, normalized progress out.
pub type EasingCurve = fn(f32) -> f32;

pub fn linear(t: f32) -> f32 {
    t
}

// Power

pub fn power_in(t: f32, power: f32) -> f32 {
    t.powf(power)
}

pub fn power_out(t: f32, power: f32) -> f32 {
    1.0 - power_in(1.0 - t, power)
}

pub fn power_in_out(t: f32, power: f32) -> f32 {
    if t < 0.5 {
        return power_in(t * 2.0, power) / 2.0;
    }
    1.0 - power_in((1.0 - t) * 2.0, power) / 2.0
}

pub fn quad_in(t: f32) -> f32 {
    power_in(t, 2.0)
}

pub fn quad_out(t: f32) -> f32 {
    power_out(t, 2.0)
}

pub fn quad_in_out(t: f32) -> f32 {
    power_in_out(t, 2.0)
}

pub fn cubic_in(t: f32) -> f32 {
    power_in(t, 3.0)
}

pub fn cubic_out(t: f32) -> f32 {
    power_out(t, 3.0)
}

pub fn cubic_in_out(t: f32) -> f32 {
    power_in_out(t, 3.0)
}

pub fn quart_in(t: f32) -> f32 {
    power_in(t, 4.0)
}

pub fn quart_out(t: f32) -> f32 {
    power_out(t, 4.0)
}

pub fn quart_in_out(t: f32) -> f32 {
    power_in_out(t, 4.0)
}

pub fn quint_in(t: f32) -> f32 {
    power_in(t, 5.0)
}

pub fn quint_out(t: f32) -> f32 {
    power_out(t, 5.0)
}

pub fn quint_in_out(t: f32) -> f32 {
    power_in_out(t, 5.0)
}

// Sine

pub fn sine_in(t: f32) -> f32 {
    1.0 - (t * PI / 2.0).cos()
}

pub fn sine_out(t: f32) -> f32 {
    (t * PI / 2.0).sin()
}

pub fn sine_in_out(t: f32) -> f32 {
    ((t * PI).cos() - 1.0) / -2.0
}

// Expo

pub fn expo_in(t: f32) -> f32 {
    2f32.powf(10.0 * (t - 1.0))
}

pub fn expo_out(t: f32) -> f32 {
    1.0 - expo_in(1.0 - t)
}

pub fn expo_in_out(t: f32) -> f32 {
    if t < 0.5 {
        return expo_in(t * 2.0) / 2.0;
    }
    1.0 - expo_in((1.0 - t) * 2.0) / 2.0
}

// Circ

pub fn circ_in(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

pub fn circ_out(t: f32) -> f32 {
    1.0 - circ_in(1.0 - t)
}

pub fn circ_in_out(t: f32) -> f32 {
    if t < 0.5 {
        return circ_in(t * 2.0) / 2.0;
    }
    1.0 - circ_in((1.0 - t) * 2.0) / 2.0
}

// Elastic

pub fn elastic_in(t: f32) -> f32 {
    1.0 - elastic_out(1.0 - t)
}

pub fn elastic_out(t: f32) -> f32 {
    const P: f32 = 0.3;
    2f32.powf(-10.0 * t) * ((t - P / 4.0) * (2.0 * PI) / P).sin() + 1.0
}

pub fn elastic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        return elastic_in(t * 2.0) / 2.0;
    }
    1.0 - elastic_in((1.0 - t) * 2.0) / 2.0
}

// Back

const BACK_CONSTANT: f32 = 1.70158;

pub fn back_in_with(t: f32, back_multiplier: f32) -> f32 {
    let back = BACK_CONSTANT * back_multiplier;
    t * t * ((back + 1.0) * t - back)
}

pub fn back_out_with(t: f32, back_multiplier: f32) -> f32 {
    1.0 - back_in_with(1.0 - t, back_multiplier)
}

pub fn back_in_out_with(t: f32, back_multiplier: f32) -> f32 {
    if t < 0.5 {
        return back_in_with(t * 2.0, back_multiplier) / 2.0;
    }
    1.0 - back_in_with((1.0 - t) * 2.0, back_multiplier) / 2.0
}

pub fn back_in(t: f32) -> f32 {
    back_in_with(t, 1.0)
}

pub fn back_out(t: f32) -> f32 {
    back_out_with(t, 1.0)
}

pub fn back_in_out(t: f32) -> f32 {
    back_in_out_with(t, 1.0)
}

// Bounce

pub fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

pub fn bounce_out(t: f32) -> f32 {
    const DIV: f32 = 2.75;
    const MULT: f32 = 7.5625;

    if t < 1.0 / DIV {
        MULT * t * t
    } else if t < 2.0 / DIV {
        let t = t - 1.5 / DIV;
        MULT * t * t + 0.75
    } else if t < 2.5 / DIV {
        let t = t - 2.25 / DIV;
        MULT * t * t + 0.9375
    } else {
        let t = t - 2.625 / DIV;
        MULT * t * t + 0.984375
    }
}

pub fn bounce_in_out(t: f32) -> f32 {
    if t < 0.5 {
        return bounce_in(t * 2.0) / 2.0;
    }
    1.0 - bounce_in((1.0 - t) * 2.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: &[(&str, EasingCurve)] = &[
        ("linear", linear),
        ("quad_in", quad_in),
        ("quad_out", quad_out),
        ("quad_in_out", quad_in_out),
        ("cubic_in", cubic_in),
        ("cubic_out", cubic_out),
        ("cubic_in_out", cubic_in_out),
        ("quart_in", quart_in),
        ("quart_out", quart_out),
        ("quart_in_out", quart_in_out),
        ("quint_in", quint_in),
        ("quint_out", quint_out),
        ("quint_in_out", quint_in_out),
        ("sine_in", sine_in),
        ("sine_out", sine_out),
        ("sine_in_out", sine_in_out),
        ("circ_in", circ_in),
        ("circ_out", circ_out),
        ("circ_in_out", circ_in_out),
        ("elastic_in", elastic_in),
        ("elastic_out", elastic_out),
        ("elastic_in_out", elastic_in_out),
        ("back_in", back_in),
        ("back_out", back_out),
        ("back_in_out", back_in_out),
        ("bounce_in", bounce_in),
        ("bounce_out", bounce_out),
        ("bounce_in_out", bounce_in_out),
    ];

    #[test]
    fn curves_end_at_one() {
        for (name, curve) in CURVES {
            assert!((curve(1.0) - 1.0).abs() < 1e-3, "{name}(1) = {}", curve(1.0));
        }
    }

    #[test]
    fn curves_start_near_zero() {
        // expo_in is exactly zero only in the limit; the rest start at 0.
        for (name, curve) in CURVES {
            assert!(curve(0.0).abs() < 1e-3, "{name}(0) = {}", curve(0.0));
        }
    }

    #[test]
    fn in_and_out_mirror_each_other() {
        for t in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            assert!((quad_out(t) - (1.0 - quad_in(1.0 - t))).abs() < 1e-6);
            assert!((circ_out(t) - (1.0 - circ_in(1.0 - t))).abs() < 1e-6);
            assert!((bounce_in(t) - (1.0 - bounce_out(1.0 - t))).abs() < 1e-6);
        }
    }

    #[test]
    fn linear_is_identity() {
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(linear(t), t);
        }
    }

    #[test]
    fn power_curves_match_their_shortcuts() {
        for t in [0.0, 0.3, 0.5, 0.8, 1.0] {
            assert_eq!(quad_in(t), power_in(t, 2.0));
            assert_eq!(quint_in_out(t), power_in_out(t, 5.0));
        }
    }

    #[test]
    fn back_overshoots_below_zero_on_the_way_in() {
        let dip = back_in(0.3);
        assert!(dip < 0.0, "back_in(0.3) = {dip} should dip below zero");
    }
}
