//! Just enough WKT to read `POLYGON ((lon lat, ...))` footprints.

use crate::error::{IngestError, Result};
use fp_domain::{LonLat, Ring};

/// Parses the exterior ring of a WKT polygon.
///
/// Line breaks are removed before parsing so wrapped numbers survive. Holes
/// are ignored. An open ring is closed by repeating its first position.
///
/// # Errors
/// [`IngestError::Wkt`] for anything other than a polygon with at least three
/// valid `lon lat` positions.
pub fn parse_polygon(wkt: &str) -> Result<Ring> {
    let clean: String = wkt.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let clean = clean.trim();

    let Some(prefix) = clean.get(..7).filter(|p| p.eq_ignore_ascii_case("POLYGON")) else {
        return Err(IngestError::wkt(format!("expected POLYGON, got '{}'", truncate(clean))));
    };
    let body = clean[prefix.len()..].trim_start();

    let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) else {
        return Err(IngestError::wkt("unbalanced parentheses"));
    };
    let inner = inner.trim();
    let Some(rest) = inner.strip_prefix('(') else {
        return Err(IngestError::wkt("missing ring"));
    };
    let exterior = rest.split(')').next().unwrap_or_default();

    let mut ring = exterior.split(',').map(parse_position).collect::<Result<Ring>>()?;

    if ring.len() < 3 {
        return Err(IngestError::wkt(format!("ring has {} positions, need at least 3", ring.len())));
    }
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }
    if ring.len() < 4 {
        return Err(IngestError::wkt("ring collapses to fewer than 3 distinct positions"));
    }

    Ok(ring)
}

fn parse_position(pair: &str) -> Result<LonLat> {
    let mut parts = pair.split_whitespace();
    let (Some(lon), Some(lat), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(IngestError::wkt(format!("invalid coordinate pair '{}'", pair.trim())));
    };

    let parse = |raw: &str| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| IngestError::wkt(format!("invalid coordinate value '{raw}'")))
    };

    Ok(LonLat::new(parse(lon)?, parse(lat)?))
}

fn truncate(s: &str) -> &str {
    s.char_indices().nth(24).map_or(s, |(idx, _)| &s[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_closed_ring() {
        let ring = parse_polygon(
            "POLYGON((11.206 10.261, 11.207 10.261, 11.207 10.262, 11.206 10.262, 11.206 10.261))",
        )
        .unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], LonLat::new(11.206, 10.261));
        assert_eq!(ring[2], LonLat::new(11.207, 10.262));
    }

    #[test]
    fn closes_open_ring_and_tolerates_line_breaks() {
        let ring = parse_polygon("polygon ((11.206 10.2\n61, 11.207 10.261,\r\n 11.207 10.262))").unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], LonLat::new(11.206, 10.261));
        assert_eq!(ring[0], ring[3]);
    }

    #[test]
    fn keeps_only_the_exterior_ring() {
        let ring = parse_polygon(
            "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 2 1, 2 2, 1 1))",
        )
        .unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[2], LonLat::new(4.0, 4.0));
    }

    #[test]
    fn rejects_garbage() {
        for wkt in [
            "",
            "POINT (11.2 10.3)",
            "POLYGON ((11.2 10.3, 11.3 10.3))",
            "POLYGON ((11.2 10.3, 11.3, 11.3 10.4, 11.2 10.3))",
            "POLYGON ((11.2 abc, 11.3 10.3, 11.3 10.4, 11.2 10.3))",
            "POLYGON ((11.2 10.3, 11.3 10.3, 11.3 10.4",
            "POLYGON ((1 1, 2 2, 1 1))",
        ] {
            let err = parse_polygon(wkt).unwrap_err();
            assert_eq!(err.kind(), "Wkt", "{wkt}");
        }
    }
}
