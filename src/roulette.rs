//! Roulette wheel: labeled sectors, a timed ease-out spin and the mapping
//! from the wheel's final angle to the sector under the 12 o'clock pointer.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::GameError;
use crate::rng::GameRng;
use crate::util::clog;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 15;
pub const DEFAULT_OPTIONS: usize = 4;
pub const SPIN_DURATION_MS: f64 = 5000.0;
pub const MIN_SPINS: u32 = 5;
pub const MAX_SPINS: u32 = 9;
/// Sectors are laid out from 12 o'clock.
pub const START_OFFSET: f64 = -FRAC_PI_2;

#[derive(Clone, Debug, PartialEq)]
pub struct RouletteOption {
    /// What the user typed, kept verbatim for the input field.
    pub text: String,
    /// Text shown on the wheel; the placeholder when `text` is blank.
    pub label: String,
    pub hue: f64,
}

pub fn default_option_label(index: usize) -> String {
    format!("Option {}", index + 1)
}

pub fn hue(index: usize, count: usize) -> f64 {
    360.0 * index as f64 / count as f64
}

pub fn angle_per_option(count: usize) -> f64 {
    TAU / count as f64
}

/// Start and end angle of a sector as drawn on the canvas.
pub fn sector_angles(index: usize, count: usize, rotation: f64) -> (f64, f64) {
    let step = angle_per_option(count);
    let start = START_OFFSET + index as f64 * step + rotation;
    (start, start + step)
}

/// Folds any angle into [0, 2π).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU { 0.0 } else { a }
}

/// Ease-out quartic: fast start, velocity falls to zero at `t = 1`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Sector under the fixed pointer for a normalized rotation. The wheel turns
/// clockwise while sectors are numbered clockwise, so the index under the
/// pointer counts down as the rotation grows.
pub fn selected_index(rotation: f64, count: usize) -> usize {
    let raw = (normalize_angle(rotation) / angle_per_option(count)).floor() as usize;
    let raw = raw.min(count - 1);
    (count - raw - 1) % count
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Spin {
    /// Frame timestamp of the first frame; set lazily.
    started_at: Option<f64>,
    total: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpinResult {
    pub index: usize,
    pub label: String,
    pub rotation: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Idle,
    Turning { rotation: f64 },
    Stopped(SpinResult),
}

#[derive(Clone, Debug)]
pub struct Roulette {
    options: Vec<RouletteOption>,
    rotation: f64,
    spin: Option<Spin>,
    last_result: Option<String>,
    rng: GameRng,
}

impl Roulette {
    pub fn new(rng: GameRng) -> Self {
        let mut r = Self {
            options: Vec::new(),
            rotation: 0.0,
            spin: None,
            last_result: None,
            rng,
        };
        r.regenerate(DEFAULT_OPTIONS);
        r
    }

    pub fn options(&self) -> &[RouletteOption] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    fn regenerate(&mut self, count: usize) {
        self.options = (0..count)
            .map(|i| {
                let label = default_option_label(i);
                RouletteOption {
                    text: label.clone(),
                    label,
                    hue: hue(i, count),
                }
            })
            .collect();
        self.rotation = 0.0;
    }

    /// Rebuilds the option list with default labels and resets the wheel.
    /// Locked while a spin is in flight.
    pub fn set_option_count(&mut self, count: usize) -> Result<(), GameError> {
        if self.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        self.regenerate(count.clamp(MIN_OPTIONS, MAX_OPTIONS));
        Ok(())
    }

    /// Relabels one sector in place; rotation and the other sectors stay.
    pub fn set_label(&mut self, index: usize, text: &str) -> Result<(), GameError> {
        let len = self.options.len();
        let opt = self
            .options
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;
        let trimmed = text.trim();
        opt.text = text.to_string();
        opt.label = if trimmed.is_empty() {
            default_option_label(index)
        } else {
            trimmed.to_string()
        };
        Ok(())
    }

    /// Draws a target of at least [`MIN_SPINS`] full turns plus a uniform
    /// stopping angle and arms the animation. The wheel restarts from 0.
    /// Returns the total rotation the animation will cover.
    pub fn spin(&mut self) -> Result<f64, GameError> {
        if self.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        let turns = self.rng.int_inclusive(MIN_SPINS, MAX_SPINS);
        let offset = self.rng.angle();
        let total = TAU * turns as f64 + offset;
        self.rotation = 0.0;
        self.spin = Some(Spin {
            started_at: None,
            total,
        });
        clog(&format!("roulette: spinning {} turns + {:.3} rad", turns, offset));
        Ok(total)
    }

    /// Advances the animation to `now_ms` (a frame timestamp).
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        let Some(spin) = self.spin.as_mut() else {
            return Frame::Idle;
        };
        let started_at = *spin.started_at.get_or_insert(now_ms);
        let total = spin.total;
        let progress = ((now_ms - started_at) / SPIN_DURATION_MS).clamp(0.0, 1.0);
        let current = total * ease_out(progress);
        if progress < 1.0 {
            self.rotation = current;
            return Frame::Turning { rotation: current };
        }

        self.spin = None;
        self.rotation = normalize_angle(current);
        let index = selected_index(self.rotation, self.options.len());
        let label = self.options[index].label.clone();
        self.last_result = Some(label.clone());
        Frame::Stopped(SpinResult {
            index,
            label,
            rotation: self.rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn spin_to_end(r: &mut Roulette) -> SpinResult {
        r.spin().unwrap();
        let mut t = 0.0;
        loop {
            match r.frame(t) {
                Frame::Stopped(res) => return res,
                Frame::Turning { .. } => t += 16.0,
                Frame::Idle => panic!("spin vanished"),
            }
        }
    }

    #[test]
    fn default_wheel_has_four_options() {
        let r = Roulette::new(GameRng::seeded(1));
        let labels: Vec<&str> = r.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Option 1", "Option 2", "Option 3", "Option 4"]);
        assert_eq!(r.rotation(), 0.0);
        assert!(!r.is_spinning());
    }

    #[test]
    fn option_count_is_clamped_and_hues_spread_evenly() {
        let mut r = Roulette::new(GameRng::seeded(1));
        r.set_option_count(1).unwrap();
        assert_eq!(r.option_count(), MIN_OPTIONS);
        r.set_option_count(40).unwrap();
        assert_eq!(r.option_count(), MAX_OPTIONS);
        r.set_option_count(6).unwrap();
        let hues: Vec<f64> = r.options().iter().map(|o| o.hue).collect();
        assert_eq!(hues, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
        assert_eq!(r.options()[5].label, "Option 6");
    }

    #[test]
    fn blank_label_falls_back_to_placeholder() {
        let mut r = Roulette::new(GameRng::seeded(1));
        r.set_option_count(4).unwrap();
        r.set_label(0, "Pizza").unwrap();
        r.set_label(2, "").unwrap();
        let labels: Vec<&str> = r.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Pizza", "Option 2", "Option 3", "Option 4"]);
        assert_eq!(r.options()[2].text, "");
        r.set_label(1, "   ").unwrap();
        assert_eq!(r.options()[1].label, "Option 2");
        assert_eq!(
            r.set_label(4, "x"),
            Err(GameError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn relabel_keeps_rotation() {
        let mut r = Roulette::new(GameRng::seeded(3));
        let before = spin_to_end(&mut r).rotation;
        r.set_label(1, "Sushi").unwrap();
        assert_eq!(r.rotation(), before);
        r.set_option_count(5).unwrap();
        assert_eq!(r.rotation(), 0.0);
    }

    #[test]
    fn four_sectors_start_at_twelve_o_clock() {
        let expected = [-FRAC_PI_2, 0.0, FRAC_PI_2, std::f64::consts::PI];
        for (i, want) in expected.iter().enumerate() {
            let (start, end) = sector_angles(i, 4, 0.0);
            assert!((start - want).abs() < EPS);
            assert!((end - start - FRAC_PI_2).abs() < EPS);
        }
    }

    #[test]
    fn ease_out_decelerates_to_a_stop() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        let mut prev_value = 0.0;
        let mut prev_step = f64::MAX;
        for i in 1..=100 {
            let v = ease_out(i as f64 / 100.0);
            let step = v - prev_value;
            assert!(step >= 0.0 && step < prev_step);
            prev_value = v;
            prev_step = step;
        }
    }

    #[test]
    fn selected_sector_sits_under_the_pointer() {
        for count in MIN_OPTIONS..=MAX_OPTIONS {
            for k in 0..360 {
                let rotation = (k as f64 + 0.5) * TAU / 360.0;
                let idx = selected_index(rotation, count);
                assert!(idx < count);
                let (start, _) = sector_angles(idx, count, rotation);
                // pointer angle measured from the sector start, clockwise
                let into = normalize_angle(START_OFFSET - start);
                assert!(into < angle_per_option(count) + EPS, "count {count} rot {rotation}");
            }
        }
    }

    #[test]
    fn selection_inverts_raw_index() {
        let step = angle_per_option(4);
        assert_eq!(selected_index(0.1, 4), 3);
        assert_eq!(selected_index(step * 1.5, 4), 2);
        assert_eq!(selected_index(step * 3.5, 4), 0);
        assert_eq!(selected_index(TAU + 0.1, 4), 3);
    }

    #[test]
    fn normalize_folds_into_range() {
        assert!((normalize_angle(TAU * 7.0 + 1.0) - 1.0).abs() < 1e-9);
        assert!((normalize_angle(-0.5) - (TAU - 0.5)).abs() < EPS);
        assert!(normalize_angle(-1e-18) < TAU);
    }

    #[test]
    fn spin_lands_in_range_and_reports_label() {
        let mut r = Roulette::new(GameRng::seeded(99));
        for _ in 0..20 {
            let res = spin_to_end(&mut r);
            assert!((0.0..TAU).contains(&res.rotation));
            assert!(res.index < r.option_count());
            assert_eq!(res.label, r.options()[res.index].label);
            assert_eq!(r.last_result(), Some(res.label.as_str()));
            assert!(!r.is_spinning());
        }
    }

    #[test]
    fn spin_covers_five_to_nine_turns_over_five_seconds() {
        let mut r = Roulette::new(GameRng::seeded(5));
        let total = r.spin().unwrap();
        assert!(total >= TAU * MIN_SPINS as f64 && total < TAU * (MAX_SPINS + 1) as f64);
        assert_eq!(r.frame(1000.0), Frame::Turning { rotation: 0.0 });
        let mut last = 0.0;
        for ms in [1500.0, 2500.0, 4000.0, 5999.0] {
            match r.frame(ms) {
                Frame::Turning { rotation } => {
                    assert!(rotation > last);
                    last = rotation;
                }
                other => panic!("expected turning at {ms}, got {other:?}"),
            }
        }
        match r.frame(6000.0) {
            Frame::Stopped(res) => {
                assert!((res.rotation - normalize_angle(total)).abs() < 1e-9);
            }
            other => panic!("expected stop, got {other:?}"),
        }
        assert_eq!(r.frame(6016.0), Frame::Idle);
    }

    #[test]
    fn second_spin_while_spinning_is_refused() {
        let mut r = Roulette::new(GameRng::seeded(11));
        let total = r.spin().unwrap();
        r.frame(0.0);
        let mid = match r.frame(1000.0) {
            Frame::Turning { rotation } => rotation,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(r.spin(), Err(GameError::AlreadySpinning));
        assert_eq!(r.rotation(), mid);
        assert_eq!(r.set_option_count(6), Err(GameError::AlreadySpinning));
        assert_eq!(r.option_count(), DEFAULT_OPTIONS);
        match r.frame(5000.0) {
            Frame::Stopped(res) => assert!((res.rotation - normalize_angle(total)).abs() < 1e-9),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn seeded_spins_are_reproducible() {
        let mut a = Roulette::new(GameRng::seeded(2024));
        let mut b = Roulette::new(GameRng::seeded(2024));
        for _ in 0..10 {
            assert_eq!(spin_to_end(&mut a), spin_to_end(&mut b));
        }
    }
}
