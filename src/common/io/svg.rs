//! SVG document scaffolding shared by map exports.

use std::io::Write;

use anyhow::Result;

/// Escape text for use inside SVG element content or attribute values.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Write the XML declaration, opening <svg> tag and background.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64, bounds: &geo::Rect) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width}" height="{height}"
        viewBox="0 0 {width} {height}"
        data-lon-min="{lon_min}" data-lon-max="{lon_max}"
        data-lat-min="{lat_min}" data-lat-max="{lat_max}">"##,
        lon_min = bounds.min().x,
        lon_max = bounds.max().x,
        lat_min = bounds.min().y,
        lat_max = bounds.max().y,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#dbe4ee"/>"##)?;
    Ok(())
}

/// Write the stylesheet for country outlines and the legend.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .country {{ stroke: #ffffff; stroke-width: 2; stroke-opacity: 1; stroke-dasharray: 3; vector-effect: non-scaling-stroke; }}
    .legend text {{ font: 11px sans-serif; fill: #111827; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"Côte d'Ivoire <"A&B">"#), "Côte d&apos;Ivoire &lt;&quot;A&amp;B&quot;&gt;");
    }
}
