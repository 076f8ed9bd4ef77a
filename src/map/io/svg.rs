use std::{io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result, anyhow};
use geo::{Coord, CoordsIter, LineString, MultiPolygon};

use crate::{
    common::{PendingWrite, escape_xml, write_svg_footer, write_svg_header, write_svg_styles},
    feature::bounds_of,
    legend::LegendEntry,
    map::MapLayer,
};

/// Projection function: lon/lat -> SVG coords (x,y)
type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

const LEGEND_ROW_HEIGHT: f64 = 16.0;
const LEGEND_SWATCH: f64 = 12.0;

impl MapLayer<'_> {
    /// Write the layer to an SVG file with default size, replacing `path` atomically.
    pub fn to_svg(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(PendingWrite::open(path, true)?);
        self.write_svg(&mut writer, 1200, 10)?;
        writer.into_inner()
            .map_err(|e| anyhow!("[map::to_svg] Failed to flush {}: {}", path.display(), e.error()))?
            .finalize()
            .with_context(|| format!("[map::to_svg] Failed to write {}", path.display()))
    }

    /// Render the layer as an SVG document string with default size.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_svg(&mut buffer, 1200, 10)?;
        String::from_utf8(buffer).context("[map::to_svg] SVG output is not UTF-8")
    }

    /// Draw every feature with its fill and tooltip, then the legend, using an
    /// equirectangular projection fitted to `width`.
    pub fn write_svg<W: Write>(&self, writer: &mut W, width: u32, margin: u32) -> Result<()> {
        let bounds = bounds_of(self.features.iter().map(|f| &f.feature.geometry))
            .ok_or_else(|| anyhow!("[map::to_svg] Could not determine bounds; nothing to draw."))?;
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(anyhow!("[map::to_svg] Degenerate bounds; nothing to draw."));
        }

        let margin = margin as f64;
        let width = width as f64;
        let scale = (width - 2.0 * margin) / bounds.width();
        let map_height = bounds.height() * scale + 2.0 * margin;
        let height = map_height + legend_height(&self.legend);

        let project = move |coord: &Coord<f64>| -> (f64, f64) {
            let x = margin + (coord.x - bounds.min().x) * scale;
            let y = margin + (bounds.max().y - coord.y) * scale; // invert vertically
            (x, y)
        };

        write_svg_header(writer, width, height, &bounds)?;
        write_svg_styles(writer)?;

        writeln!(writer, r#"<g class="countries">"#)?;
        for styled in &self.features {
            let style = &styled.style;
            write!(writer,
                r#"<path class="country" data-code="{}" d="{}" fill="{}" fill-opacity="{}" fill-rule="evenodd""#,
                escape_xml(&styled.feature.iso_code),
                multipolygon_to_path(&styled.feature.geometry, &project),
                style.fill_color.hex(),
                style.fill_opacity,
            )?;
            match &styled.tooltip {
                Some(tooltip) => writeln!(writer, "><title>{}</title></path>", escape_xml(&tooltip.to_text()))?,
                None => writeln!(writer, "/>")?,
            }
        }
        writeln!(writer, "</g>")?;

        write_legend(writer, &self.legend, margin, map_height)?;
        write_svg_footer(writer)?;
        Ok(())
    }
}

fn legend_height(legend: &[LegendEntry]) -> f64 {
    (legend.len() as f64 + 1.0) * LEGEND_ROW_HEIGHT + 8.0
}

fn write_legend<W: Write>(writer: &mut W, legend: &[LegendEntry], x: f64, top: f64) -> Result<()> {
    writeln!(writer, r#"<g class="legend" transform="translate({x:.3},{top:.3})">"#)?;
    writeln!(writer, r#"<text x="0" y="{:.3}">Legend</text>"#, LEGEND_SWATCH)?;
    for (i, entry) in legend.iter().enumerate() {
        let y = (i as f64 + 1.0) * LEGEND_ROW_HEIGHT;
        writeln!(writer,
            r#"<rect x="0" y="{y:.3}" width="{s}" height="{s}" fill="{}"/><text x="{tx}" y="{ty:.3}">{}</text>"#,
            entry.color,
            escape_xml(&entry.label),
            s = LEGEND_SWATCH,
            tx = LEGEND_SWATCH + 6.0,
            ty = y + LEGEND_SWATCH - 1.0,
        )?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &Projection) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        out.push_str(&ring_to_path(polygon.exterior(), project));
        for interior in polygon.interiors() {
            out.push_str(&ring_to_path(interior, project));
        }
    }

    out
}

/// Build a compact SVG path string for a LineString (ring).
fn ring_to_path(ring: &LineString<f64>, project: &Projection) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter()
        .map(|coord| project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }

    out
}

#[cfg(test)]
mod tests {
    use geo::{MultiPolygon, polygon};

    use crate::{feature::GeoFeature, map::render, record::{CountryCode, Record}};

    fn features() -> Vec<GeoFeature> {
        vec![
            GeoFeature {
                iso_code: "KEN".into(),
                admin_name: "Kenya".into(),
                geometry: MultiPolygon(vec![polygon![(x: 34.0, y: -4.0), (x: 41.0, y: -4.0), (x: 41.0, y: 5.0), (x: 34.0, y: 5.0)]]),
            },
            GeoFeature {
                iso_code: "UGA".into(),
                admin_name: "Uganda".into(),
                geometry: MultiPolygon(vec![polygon![(x: 29.5, y: -1.5), (x: 34.0, y: -1.5), (x: 34.0, y: 4.0), (x: 29.5, y: 4.0)]]),
            },
        ]
    }

    #[test]
    fn svg_contains_fills_titles_and_legend() {
        let features = features();
        let records = vec![Record {
            code: CountryCode::parse("KEN").unwrap(),
            name: "Kenya".into(),
            indicator: None,
            series: vec![(2021, 33.333)],
        }];

        let svg = render(&features, &records).to_svg_string().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"data-code="KEN""#));
        assert!(svg.contains(r##"fill="#ff0000" fill-opacity="0.7""##));
        assert!(svg.contains("<title>Country: Kenya\nYear: 2021\nValue: 33.33</title>"));
        assert!(svg.contains(r#"data-code="UGA""#));
        assert!(svg.contains(r#"fill-opacity="0" fill-rule="evenodd"/>"#));
        assert!(svg.contains("91 to 100"));
    }

    #[test]
    fn empty_layer_is_an_error() {
        let layer = render(&[], &[]);
        assert!(layer.to_svg_string().is_err());
    }

    #[test]
    fn writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        let features = features();
        render(&features, &[]).to_svg(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<g class=\"legend\""));
    }

    #[test]
    fn failed_render_leaves_existing_file_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        std::fs::write(&path, "previous").unwrap();

        assert!(render(&[], &[]).to_svg(&path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");

        let features = features();
        render(&features, &[]).to_svg(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().trim_end().ends_with("</svg>"));
    }
}
