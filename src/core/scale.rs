/// Affine data-to-pixel map.
///
/// A collapsed domain (`x0 == x1`) maps every input to `y0` instead of
/// dividing by zero, so single-sample series and locked degenerate ranges
/// stay renderable.
#[must_use]
pub fn lin_map(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if x1 == x0 {
        return y0;
    }
    y0 + (y1 - y0) * ((x - x0) / (x1 - x0))
}

/// Value-type wrapper around `lin_map` for a fixed domain/range pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearMap {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        lin_map(
            value,
            self.domain_start,
            self.domain_end,
            self.range_start,
            self.range_end,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearMap, lin_map};

    #[test]
    fn maps_endpoints_exactly() {
        assert_eq!(lin_map(0.0, 0.0, 10.0, 100.0, 200.0), 100.0);
        assert_eq!(lin_map(10.0, 0.0, 10.0, 100.0, 200.0), 200.0);
    }

    #[test]
    fn collapsed_domain_returns_range_start() {
        assert_eq!(lin_map(5.0, 3.0, 3.0, 40.0, 80.0), 40.0);
        let map = LinearMap::new((3.0, 3.0), (40.0, 80.0));
        assert_eq!(map.map(5.0), 40.0);
    }

    #[test]
    fn inverted_range_maps_downward() {
        // Pixel Y grows downward while data grows upward.
        let map = LinearMap::new((0.0, 100.0), (400.0, 0.0));
        assert_eq!(map.map(0.0), 400.0);
        assert_eq!(map.map(100.0), 0.0);
        assert_eq!(map.map(50.0), 200.0);
    }
}
