use serde::Serialize;

use super::Rgb;

/// Fill colors of the fixed choropleth legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendColor {
    Green,
    LightGreen,
    Yellow,
    Orange,
    LightRed,
    Red,
    DarkRed,
    Crimson,
    Firebrick,
    Tomato,
    Coral,
    LightCoral,
    Gray,
}

impl LegendColor {
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Green      => Rgb::new(0x00, 0x80, 0x00),
            Self::LightGreen => Rgb::new(0x90, 0xEE, 0x90),
            Self::Yellow     => Rgb::new(0xFF, 0xFF, 0x00),
            Self::Orange     => Rgb::new(0xFF, 0xA5, 0x00),
            Self::LightRed   => Rgb::new(0xFF, 0xCC, 0xCB),
            Self::Red        => Rgb::new(0xFF, 0x00, 0x00),
            Self::DarkRed    => Rgb::new(0xB2, 0x22, 0x22),
            Self::Crimson    => Rgb::new(0xDC, 0x14, 0x3C),
            Self::Firebrick  => Rgb::new(0xFF, 0x45, 0x00),
            Self::Tomato     => Rgb::new(0xFF, 0x63, 0x47),
            Self::Coral      => Rgb::new(0xFF, 0x7F, 0x50),
            Self::LightCoral => Rgb::new(0xFF, 0xB6, 0xC1),
            Self::Gray       => Rgb::new(0x80, 0x80, 0x80),
        }
    }

    /// CSS hex string, e.g. `#ffa500`.
    pub fn hex(self) -> String { self.rgb().to_string() }
}

/// A closed-upper-bound value range and its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendBucket {
    pub upper: f64,
    pub color: LegendColor,
    pub label: &'static str,
}

/// Buckets in ascending order; a value takes the first bucket whose `upper` bound it does not exceed.
pub const LEGEND: [LegendBucket; 12] = [
    LegendBucket { upper: -50.0, color: LegendColor::Green,      label: "-100 to -50" },
    LegendBucket { upper:   0.0, color: LegendColor::LightGreen, label: "-49 to 0" },
    LegendBucket { upper:  10.0, color: LegendColor::Yellow,     label: "1 to 10" },
    LegendBucket { upper:  20.0, color: LegendColor::Orange,     label: "11 to 20" },
    LegendBucket { upper:  30.0, color: LegendColor::LightRed,   label: "21 to 30" },
    LegendBucket { upper:  40.0, color: LegendColor::Red,        label: "31 to 40" },
    LegendBucket { upper:  50.0, color: LegendColor::DarkRed,    label: "41 to 50" },
    LegendBucket { upper:  60.0, color: LegendColor::Crimson,    label: "51 to 60" },
    LegendBucket { upper:  70.0, color: LegendColor::Firebrick,  label: "61 to 70" },
    LegendBucket { upper:  80.0, color: LegendColor::Tomato,     label: "71 to 80" },
    LegendBucket { upper:  90.0, color: LegendColor::Coral,      label: "81 to 90" },
    LegendBucket { upper: 100.0, color: LegendColor::LightCoral, label: "91 to 100" },
];

/// Color for values above every bucket, NaN, or absent.
pub const NO_DATA_COLOR: LegendColor = LegendColor::Gray;

/// Bin a value into its legend color.
pub fn color_for(value: Option<f64>) -> LegendColor {
    let Some(value) = value else { return NO_DATA_COLOR };
    LEGEND.iter()
        .find(|bucket| value <= bucket.upper)
        .map_or(NO_DATA_COLOR, |bucket| bucket.color)
}

/// One legend row for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: &'static str,
}

/// Legend rows in bucket order.
pub fn legend() -> Vec<LegendEntry> {
    LEGEND.iter()
        .map(|bucket| LegendEntry { color: bucket.color.hex(), label: bucket.label })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_bins() {
        assert_eq!(color_for(Some(-60.0)), LegendColor::Green);
        assert_eq!(color_for(Some(-10.0)), LegendColor::LightGreen);
        assert_eq!(color_for(Some(5.0)), LegendColor::Yellow);
        assert_eq!(color_for(Some(150.0)), LegendColor::Gray);
        assert_eq!(color_for(None), LegendColor::Gray);
    }

    #[test]
    fn upper_bounds_are_inclusive() {
        assert_eq!(color_for(Some(-50.0)), LegendColor::Green);
        assert_eq!(color_for(Some(0.0)), LegendColor::LightGreen);
        assert_eq!(color_for(Some(0.01)), LegendColor::Yellow);
        assert_eq!(color_for(Some(100.0)), LegendColor::LightCoral);
        assert_eq!(color_for(Some(100.0001)), LegendColor::Gray);
        assert_eq!(color_for(Some(-1e9)), LegendColor::Green);
    }

    #[test]
    fn nan_is_gray() {
        assert_eq!(color_for(Some(f64::NAN)), LegendColor::Gray);
    }

    #[test]
    fn buckets_are_strictly_ascending() {
        assert!(LEGEND.windows(2).all(|w| w[0].upper < w[1].upper));
    }

    #[test]
    fn legend_mirrors_bucket_table() {
        let entries = legend();
        assert_eq!(entries.len(), LEGEND.len());
        for (entry, bucket) in entries.iter().zip(LEGEND.iter()) {
            assert_eq!(entry.label, bucket.label);
            assert_eq!(entry.color, bucket.color.hex());
            assert_eq!(color_for(Some(bucket.upper)), bucket.color);
        }
        assert_eq!(entries[0].color, "#008000");
        assert_eq!(entries[11].label, "91 to 100");
    }
}
