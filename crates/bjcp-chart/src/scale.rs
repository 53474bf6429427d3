//! Linear and band scales.

/// Default number of ticks requested from a linear axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Maps a continuous domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Pixel position of `value`. A collapsed domain maps to the middle of
    /// the range.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Evenly spaced "nice" tick values (multiples of 1, 2 or 5 times a
    /// power of ten) inside the domain.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = ordered(self.domain);
        if start == stop || count == 0 {
            return vec![start];
        }
        let step = tick_step(start, stop, count);
        if step.power >= 0 {
            let size = step.factor * 10f64.powi(step.power);
            let (first, last) = ((start / size).ceil(), (stop / size).floor());
            steps(first, last).map(|i| i * size).collect()
        } else {
            // Divide instead of multiplying to keep 0.1 steps exact.
            let inverse = 10f64.powi(-step.power) / step.factor;
            let (first, last) = ((start * inverse).ceil(), (stop * inverse).floor());
            steps(first, last).map(|i| i / inverse).collect()
        }
    }

    /// Decimal places needed to label ticks from [`Self::ticks`].
    #[must_use]
    pub fn tick_precision(&self, count: usize) -> usize {
        let (start, stop) = ordered(self.domain);
        if start == stop || count == 0 {
            return 0;
        }
        let step = tick_step(start, stop, count);
        let size = step.factor * 10f64.powi(step.power);
        let decimals = -size.log10().floor();
        if decimals > 0.0 { decimals as usize } else { 0 }
    }
}

struct TickStep {
    power: i32,
    factor: f64,
}

fn tick_step(start: f64, stop: f64, count: usize) -> TickStep {
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor() as i32;
    let error = raw / 10f64.powi(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    TickStep { power, factor }
}

fn steps(first: f64, last: f64) -> impl Iterator<Item = f64> {
    let count = if last >= first {
        (last - first) as usize + 1
    } else {
        0
    };
    (0..count).map(move |offset| first + offset as f64)
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Splits a pixel range into equal bands, one per item, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f64, f64),
    padding_inner: f64,
}

impl BandScale {
    #[must_use]
    pub const fn new(count: usize, range: (f64, f64), padding_inner: f64) -> Self {
        Self {
            count,
            range,
            padding_inner,
        }
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        (r1 - r0) / (self.count as f64 - self.padding_inner).max(1.0)
    }

    /// Height (or width) of each band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start of the band at `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + self.step() * index as f64
    }

    /// Center of the band at `index`, where its axis tick goes.
    #[must_use]
    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + self.bandwidth() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_and_inverts() {
        let x = LinearScale::new((0.0, 10.0), (0.0, 500.0));
        assert_eq!(x.map(5.0), 250.0);
        let y = LinearScale::new((0.0, 100.0), (400.0, 0.0));
        assert_eq!(y.map(100.0), 0.0);
        assert_eq!(y.map(25.0), 300.0);
    }

    #[test]
    fn collapsed_domain_maps_to_middle() {
        let x = LinearScale::new((0.0, 0.0), (0.0, 100.0));
        assert_eq!(x.map(0.0), 50.0);
    }

    #[test]
    fn ticks_are_nice() {
        let abv = LinearScale::new((0.0, 7.5), (0.0, 100.0));
        assert_eq!(abv.ticks(10), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(abv.tick_precision(10), 0);

        let ibu = LinearScale::new((0.0, 75.0), (0.0, 100.0));
        assert_eq!(ibu.ticks(10), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);

        let og = LinearScale::new((0.0, 1.2), (0.0, 100.0));
        assert_eq!(og.ticks(10).len(), 13);
        assert_eq!(og.ticks(10)[6], 0.6);
        assert_eq!(og.tick_precision(10), 1);
    }

    #[test]
    fn band_follows_input_order_with_padding() {
        let y = BandScale::new(3, (0.0, 58.0), 0.1);
        assert!((y.step() - 20.0).abs() < 1e-9);
        assert!((y.bandwidth() - 18.0).abs() < 1e-9);
        assert_eq!(y.position(0), 0.0);
        assert!((y.position(2) - 40.0).abs() < 1e-9);
        assert!((y.center(1) - 29.0).abs() < 1e-9);
    }
}
