use crate::error::{RanktrailError, RanktrailResult};

/// Ordered sequence of `YYYY-MM` month identifiers forming the chart's time
/// axis. Built once at startup from a configuration range and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    months: Vec<String>,
}

impl Timeline {
    /// Validates that every identifier is zero-padded `YYYY-MM` and that the
    /// sequence is strictly ascending (distinctness follows).
    pub fn new(months: Vec<String>) -> RanktrailResult<Self> {
        for m in &months {
            parse_year_month(m)?;
        }
        for pair in months.windows(2) {
            if pair[0] >= pair[1] {
                return Err(RanktrailError::validation(format!(
                    "timeline months must be strictly ascending ('{}' then '{}')",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self { months })
    }

    /// Generates the inclusive month sequence from `first` to `last`.
    pub fn from_range(first: &str, last: &str) -> RanktrailResult<Self> {
        let (y0, m0) = parse_year_month(first)?;
        let (y1, m1) = parse_year_month(last)?;
        if (y0, m0) > (y1, m1) {
            return Err(RanktrailError::validation(format!(
                "timeline range start '{first}' is after end '{last}'"
            )));
        }

        let mut months = Vec::new();
        let (mut y, mut m) = (y0, m0);
        loop {
            months.push(format!("{y:04}-{m:02}"));
            if (y, m) == (y1, m1) {
                break;
            }
            m += 1;
            if m > 12 {
                m = 1;
                y += 1;
            }
        }
        Ok(Self { months })
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn index_of(&self, month: &str) -> Option<usize> {
        self.months.iter().position(|m| m == month)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.months.iter().map(String::as_str)
    }

    /// Latest-first iteration, for last-qualifying-month scans.
    pub fn iter_rev(&self) -> impl Iterator<Item = &str> {
        self.months.iter().rev().map(String::as_str)
    }
}

fn parse_year_month(s: &str) -> RanktrailResult<(u32, u32)> {
    let bad = || RanktrailError::validation(format!("'{s}' is not a zero-padded YYYY-MM month"));

    let (year, month) = s.split_once('-').ok_or_else(bad)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(bad());
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let y: u32 = year.parse().map_err(|_| bad())?;
    let m: u32 = month.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&m) {
        return Err(bad());
    }
    Ok((y, m))
}

/// Straight (non-premultiplied) sRGB color handed to the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };
    pub const ORANGE: Self = Self {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const GRAY: Self = Self {
        r: 128,
        g: 128,
        b: 128,
    };

    /// Per-channel linear interpolation with rounding, `t` in `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn mix(a: u8, b: u8, t: f64) -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        }
        Self {
            r: mix(self.r, other.r, t),
            g: mix(self.g, other.g, t),
            b: mix(self.b, other.b, t),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_range_spans_year_boundaries() {
        let tl = Timeline::from_range("2017-11", "2018-02").unwrap();
        assert_eq!(tl.months(), ["2017-11", "2017-12", "2018-01", "2018-02"]);
        assert_eq!(tl.len(), 4);
    }

    #[test]
    fn from_range_single_month() {
        let tl = Timeline::from_range("2020-06", "2020-06").unwrap();
        assert_eq!(tl.months(), ["2020-06"]);
    }

    #[test]
    fn from_range_rejects_inverted_bounds() {
        assert!(Timeline::from_range("2020-02", "2020-01").is_err());
    }

    #[test]
    fn new_rejects_bad_format_and_order() {
        assert!(Timeline::new(vec!["2020-1".into()]).is_err());
        assert!(Timeline::new(vec!["2020-13".into()]).is_err());
        assert!(Timeline::new(vec!["202001".into()]).is_err());
        assert!(Timeline::new(vec!["2020-02".into(), "2020-01".into()]).is_err());
        assert!(Timeline::new(vec!["2020-01".into(), "2020-01".into()]).is_err());
    }

    #[test]
    fn index_of_and_reversed_iteration() {
        let tl = Timeline::from_range("2020-01", "2020-03").unwrap();
        assert_eq!(tl.index_of("2020-02"), Some(1));
        assert_eq!(tl.index_of("2019-12"), None);
        let rev: Vec<&str> = tl.iter_rev().collect();
        assert_eq!(rev, ["2020-03", "2020-02", "2020-01"]);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(Rgb8::RED.lerp(Rgb8::GRAY, 0.0), Rgb8::RED);
        assert_eq!(Rgb8::RED.lerp(Rgb8::GRAY, 1.0), Rgb8::GRAY);
        let mid = Rgb8::RED.lerp(Rgb8::ORANGE, 0.5);
        assert_eq!(mid, Rgb8 { r: 255, g: 83, b: 0 });
    }

    #[test]
    fn hex_is_lowercase_six_digit() {
        assert_eq!(Rgb8::ORANGE.to_hex(), "#ffa500");
    }
}
