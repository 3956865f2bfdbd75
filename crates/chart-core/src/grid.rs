// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 steps) and tick label formatting.

/// Round `span / target` up to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let target = target.max(1) as f64;
    let raw = (span.abs() / target).max(f64::MIN_POSITIVE);
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside `[min, max]` on a nice step, roughly `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + step * 1e-9 { break; }
        // snap -0.0 and float dust to the grid
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        i += 1;
    }
    out
}

/// Compact label for a tick value: integers print bare, large values get k/M suffixes.
pub fn format_tick(v: f64, step: f64) -> String {
    let a = v.abs();
    if a >= 1e6 && step >= 1e5 {
        trim_zeros(format!("{:.1}", v / 1e6)) + "M"
    } else if a >= 1e4 && step >= 1e3 {
        trim_zeros(format!("{:.1}", v / 1e3)) + "k"
    } else if step >= 1.0 {
        format!("{:.0}", v)
    } else {
        let decimals = (-step.log10().floor()).max(0.0) as usize;
        format!("{:.*}", decimals, v)
    }
}

fn trim_zeros(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
