//! Domain to pixel mappings for the label and value axes.

use log::warn;

use super::layout::{Dimensions, ScreenAxis};
use super::types::ScaleKind;

/// Number of ticks requested from the value axis.
pub const VALUE_TICK_COUNT: usize = 10;

/// Linear threshold of the symlog transform.
const SYMLOG_CONSTANT: f64 = 1.0;

/// Affine mapping from `domain` to `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub domain: (f64, f64),
	pub range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	pub fn map(&self, v: f64) -> f64 {
		interpolate(self.domain, self.range, v)
	}

	pub fn ticks(&self, count: usize) -> Vec<f64> {
		nice_ticks(self.domain.0, self.domain.1, count)
	}
}

/// A degenerate domain maps everything to the middle of the range.
fn interpolate(domain: (f64, f64), range: (f64, f64), v: f64) -> f64 {
	let (d0, d1) = domain;
	let (r0, r1) = range;
	let span = d1 - d0;
	if span == 0.0 {
		return (r0 + r1) / 2.0;
	}
	r0 + (v - d0) / span * (r1 - r0)
}

fn symlog(v: f64) -> f64 {
	v.signum() * (v.abs() / SYMLOG_CONSTANT).ln_1p()
}

/// Value axis mapping; the label axis is always linear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueScale {
	Linear(LinearScale),
	/// Base 10. A non-positive domain bound yields NaN.
	Log(LinearScale),
	Symlog(LinearScale),
}

impl ValueScale {
	pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64)) -> Self {
		let inner = LinearScale::new(domain, range);
		match kind {
			ScaleKind::Linear => ValueScale::Linear(inner),
			ScaleKind::Log => {
				if domain.0 <= 0.0 || domain.1 <= 0.0 {
					warn!(
						"log scale with non-positive domain [{}, {}]; positions will be undefined",
						domain.0, domain.1
					);
				}
				ValueScale::Log(inner)
			}
			ScaleKind::Symlog => ValueScale::Symlog(inner),
		}
	}

	fn inner(&self) -> &LinearScale {
		match self {
			ValueScale::Linear(s) | ValueScale::Log(s) | ValueScale::Symlog(s) => s,
		}
	}

	pub fn domain(&self) -> (f64, f64) {
		self.inner().domain
	}

	pub fn range(&self) -> (f64, f64) {
		self.inner().range
	}

	pub fn map(&self, v: f64) -> f64 {
		match self {
			ValueScale::Linear(s) => s.map(v),
			ValueScale::Log(s) => {
				let (d0, d1) = s.domain;
				interpolate((log10(d0), log10(d1)), s.range, log10(v))
			}
			ValueScale::Symlog(s) => {
				let (d0, d1) = s.domain;
				interpolate((symlog(d0), symlog(d1)), s.range, symlog(v))
			}
		}
	}

	/// Tick values; symlog ticks like its underlying linear domain.
	pub fn ticks(&self, count: usize) -> Vec<f64> {
		match self {
			ValueScale::Linear(s) | ValueScale::Symlog(s) => s.ticks(count),
			ValueScale::Log(s) => log_ticks(s.domain.0, s.domain.1, count),
		}
	}

	/// Tick values paired with their display text.
	pub fn labelled_ticks(&self, count: usize) -> Vec<(f64, String)> {
		let ticks = self.ticks(count);
		match self {
			ValueScale::Log(_) => {
				// leading digits above `k` keep their tick but lose the text
				let k = (10.0 * count as f64 / ticks.len() as f64).max(1.0);
				ticks
					.into_iter()
					.map(|t| {
						let text = if leading_digit(t) <= k {
							format_tick(t, t.abs())
						} else {
							String::new()
						};
						(t, text)
					})
					.collect()
			}
			ValueScale::Linear(s) | ValueScale::Symlog(s) => {
				let step = tick_step(s.domain.0, s.domain.1, count);
				ticks.into_iter().map(|t| (t, format_tick(t, step))).collect()
			}
		}
	}
}

/// `d` over its nearest power of ten, scaled into `1..10`.
fn leading_digit(d: f64) -> f64 {
	let i = d / 10f64.powf(d.log10().round());
	if i * 10.0 < 9.5 { i * 10.0 } else { i }
}

fn log10(v: f64) -> f64 {
	if v > 0.0 { v.log10() } else { f64::NAN }
}

/// Label and value scales of one render, placed by the orientation table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
	pub label: LinearScale,
	pub value: ValueScale,
	pub label_axis: ScreenAxis,
}

impl Scales {
	pub fn build(
		dims: &Dimensions,
		x_domain: (f64, f64),
		y_domain: (f64, f64),
		kind: ScaleKind,
	) -> Self {
		let (label_range, value_range) = dims.ranges();
		Self {
			label: LinearScale::new(x_domain, label_range),
			value: ValueScale::new(kind, y_domain, value_range),
			label_axis: dims.orientation.layout().label_axis,
		}
	}

	/// Pixel position of a screen-ordered point (see `normalize`).
	pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
		match self.label_axis {
			ScreenAxis::X => (self.label.map(x), self.value.map(y)),
			ScreenAxis::Y => (self.value.map(x), self.label.map(y)),
		}
	}
}

/// Positive step between round-number ticks.
fn tick_increment(start: f64, stop: f64, count: usize) -> Option<f64> {
	let step = (stop - start).abs() / count as f64;
	if count == 0 || !step.is_finite() || step == 0.0 {
		return None;
	}
	let power = step.log10().floor();
	let error = step / 10f64.powf(power);
	let factor = if error >= 50f64.sqrt() {
		10.0
	} else if error >= 10f64.sqrt() {
		5.0
	} else if error >= 2f64.sqrt() {
		2.0
	} else {
		1.0
	};
	Some(10f64.powf(power) * factor)
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
	tick_increment(start, stop, count).unwrap_or(1.0)
}

/// Round-number ticks (1, 2 or 5 times a power of ten) inside `[start, stop]`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
	if !start.is_finite() || !stop.is_finite() || count == 0 {
		return Vec::new();
	}
	if start == stop {
		return vec![start];
	}
	let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
	let Some(step) = tick_increment(lo, hi, count) else {
		return Vec::new();
	};
	let first = (lo / step).ceil() as i64;
	let last = (hi / step).floor() as i64;
	// multiply by the inverse for fractional steps to keep 0.1 * 3 == 0.3
	let inverse = 1.0 / step;
	let exact_inverse = inverse.fract() == 0.0;
	let mut ticks: Vec<f64> = (first..=last)
		.map(|i| {
			if exact_inverse && step < 1.0 {
				i as f64 / inverse
			} else {
				i as f64 * step
			}
		})
		.collect();
	if start > stop {
		ticks.reverse();
	}
	ticks
}

/// Decade ticks for a base 10 log scale.
pub fn log_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
	let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
	if !(lo > 0.0) || !hi.is_finite() {
		return Vec::new();
	}
	let i = lo.log10().floor() as i32;
	let j = hi.log10().ceil() as i32;
	let mut ticks = Vec::new();
	if ((j - i) as usize) < count.max(1) {
		for p in i..=j {
			let base = 10f64.powi(p);
			for k in 1..10 {
				let t = k as f64 * base;
				if t >= lo && t <= hi {
					ticks.push(t);
				}
			}
		}
	} else {
		for e in nice_ticks(i as f64, j as f64, count) {
			let t = 10f64.powf(e);
			if t >= lo && t <= hi {
				ticks.push(t);
			}
		}
	}
	if start > stop {
		ticks.reverse();
	}
	ticks
}

/// Text of a tick value with as many decimals as `step` needs.
pub fn format_tick(value: f64, step: f64) -> String {
	if !value.is_finite() {
		return value.to_string();
	}
	let decimals = if step > 0.0 && step.is_finite() {
		(-step.log10().floor()).max(0.0) as usize
	} else {
		0
	};
	let text = format!("{:.*}", decimals.min(12), value);
	if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
		text[1..].to_string()
	} else {
		text
	}
}
