use crate::core::Rgb8;

/// Square-root mapping from activity count to bubble radius, so circle area
/// grows linearly with count. Domain `[0, max]`, range `[0, r_max]`.
#[derive(Clone, Copy, Debug)]
pub struct SqrtScale {
    domain_max: f64,
    range_max: f64,
}

impl SqrtScale {
    pub fn new(domain_max: f64, range_max: f64) -> Self {
        Self {
            domain_max,
            range_max,
        }
    }

    pub fn scale(&self, value: f64) -> f64 {
        if self.domain_max <= 0.0 || value <= 0.0 {
            return 0.0;
        }
        self.range_max * (value / self.domain_max).sqrt()
    }
}

/// Linear mapping with an explicit degenerate-domain rule: when the domain
/// collapses to a point, every input lands on the range midpoint.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Three-stop color ramp over qualifying ranks: rank 1 is red, the midpoint
/// of `[1, max_rank]` is orange, `max_rank` is gray. Piecewise linear per
/// sRGB channel. Ranks above `max_rank` are filtered out before this scale
/// is ever queried.
#[derive(Clone, Copy, Debug)]
pub struct RankColorScale {
    max_rank: u32,
}

impl RankColorScale {
    pub fn new(max_rank: u32) -> Self {
        Self { max_rank }
    }

    pub fn color(&self, rank: u32) -> Rgb8 {
        let lo = 1.0;
        let hi = f64::from(self.max_rank);
        let mid = (lo + hi) / 2.0;
        let r = f64::from(rank);

        if hi <= lo || r <= lo {
            Rgb8::RED
        } else if r < mid {
            Rgb8::RED.lerp(Rgb8::ORANGE, (r - lo) / (mid - lo))
        } else if r < hi {
            Rgb8::ORANGE.lerp(Rgb8::GRAY, (r - mid) / (hi - mid))
        } else {
            Rgb8::GRAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_scale_is_linear_in_area() {
        let s = SqrtScale::new(100.0, 25.0);
        assert_eq!(s.scale(100.0), 25.0);
        assert_eq!(s.scale(25.0), 12.5);
        assert_eq!(s.scale(0.0), 0.0);
    }

    #[test]
    fn sqrt_scale_zero_domain_maps_to_zero() {
        let s = SqrtScale::new(0.0, 25.0);
        assert_eq!(s.scale(10.0), 0.0);
    }

    #[test]
    fn linear_scale_endpoints_and_interior() {
        let s = LinearScale::new((10.0, 30.0), (1.0, 20.0));
        assert_eq!(s.scale(10.0), 1.0);
        assert_eq!(s.scale(30.0), 20.0);
        assert_eq!(s.scale(20.0), 10.5);
    }

    #[test]
    fn linear_scale_degenerate_domain_hits_midpoint() {
        let s = LinearScale::new((7.0, 7.0), (1.0, 20.0));
        assert_eq!(s.scale(7.0), 10.5);
        assert_eq!(s.scale(999.0), 10.5);
    }

    #[test]
    fn rank_color_hits_all_three_stops() {
        let s = RankColorScale::new(9);
        assert_eq!(s.color(1), Rgb8::RED);
        assert_eq!(s.color(5), Rgb8::ORANGE); // (1 + 9) / 2
        assert_eq!(s.color(9), Rgb8::GRAY);
    }

    #[test]
    fn rank_color_interpolates_between_stops() {
        let s = RankColorScale::new(9);
        let c = s.color(3); // halfway between rank 1 (red) and rank 5 (orange)
        assert_eq!(c, Rgb8 { r: 255, g: 83, b: 0 });
    }

    #[test]
    fn rank_color_degenerate_threshold_is_red() {
        let s = RankColorScale::new(1);
        assert_eq!(s.color(1), Rgb8::RED);
    }
}
