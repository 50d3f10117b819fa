//! Image footprints: one closed ring per image segment, combined across
//! segments into the location of the whole file.
use geo::{BoundingRect, Coord, LineString, MultiPolygon, Polygon};
use tracing::{debug, info};

use crate::core::wkt::ToWkt;
use crate::error::{Error, Result};
use crate::model::{ImageCoordinates, ImageCoordinatesRepresentation, ImageSegment, NitfFile};
use crate::types::FootprintPolicy;

/// Location derived from the image segments of one file.
#[derive(Debug, Clone, PartialEq)]
pub enum Footprint {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl ToWkt for Footprint {
    fn to_wkt(&self) -> String {
        match self {
            Footprint::Polygon(p) => p.to_wkt(),
            Footprint::MultiPolygon(mp) => mp.to_wkt(),
        }
    }
}

/// Build the 5-point ring top-left, top-right, bottom-right, bottom-left,
/// top-left. x is longitude, y is latitude.
pub fn build_polygon(corners: &ImageCoordinates) -> Polygon<f64> {
    let to_coord = |c: &crate::model::ImageCoordinatePair| Coord {
        x: c.longitude,
        y: c.latitude,
    };
    let first = to_coord(&corners.coordinate00);
    let ring = vec![
        first,
        to_coord(&corners.coordinate0_max_col),
        to_coord(&corners.coordinate_max_row_max_col),
        to_coord(&corners.coordinate_max_row0),
        first,
    ];
    Polygon::new(LineString::new(ring), vec![])
}

/// Polygon for one segment, or `None` when its corners are not usable degrees.
///
/// Returns [`Error::MissingField`] when the segment declares a degree
/// representation but carries no corners.
pub fn segment_polygon(index: usize, segment: &ImageSegment) -> Result<Option<Polygon<f64>>> {
    match segment.image_coordinates_representation {
        rep if rep.is_geographic() => {
            let corners = segment
                .image_coordinates
                .as_ref()
                .ok_or_else(|| Error::MissingField {
                    segment: format!("image[{}]", index),
                    field: "imageCoordinates",
                })?;
            Ok(Some(build_polygon(corners)))
        }
        ImageCoordinatesRepresentation::None => {
            debug!("Image segment {} has no coordinates", index);
            Ok(None)
        }
        other => {
            info!(
                "Unsupported coordinate representation {} on image segment {}",
                other, index
            );
            Ok(None)
        }
    }
}

/// Combine the footprints of every image segment.
///
/// Zero segments yield nothing; one segment yields its polygon; two or more
/// yield a multi-polygon in segment order (or its envelope, per `policy`).
pub fn file_footprint(file: &NitfFile, policy: FootprintPolicy) -> Result<Option<Footprint>> {
    match file.image_segments.as_slice() {
        [] => Ok(None),
        [segment] => Ok(segment_polygon(0, segment)?.map(Footprint::Polygon)),
        segments => {
            let mut polygons = Vec::with_capacity(segments.len());
            for (i, segment) in segments.iter().enumerate() {
                if let Some(polygon) = segment_polygon(i, segment)? {
                    polygons.push(polygon);
                }
            }
            if polygons.is_empty() {
                debug!("No image segment has usable coordinates");
                return Ok(None);
            }
            let multi = MultiPolygon::new(polygons);
            Ok(Some(match policy {
                FootprintPolicy::MultiPolygon => Footprint::MultiPolygon(multi),
                FootprintPolicy::Envelope => match envelope(&multi) {
                    Some(polygon) => Footprint::Polygon(polygon),
                    None => Footprint::MultiPolygon(multi),
                },
            }))
        }
    }
}

/// Bounding envelope as a closed ring starting at the minimum corner.
fn envelope(multi: &MultiPolygon<f64>) -> Option<Polygon<f64>> {
    let rect = multi.bounding_rect()?;
    let (min, max) = (rect.min(), rect.max());
    Some(Polygon::new(
        LineString::from(vec![
            (min.x, min.y),
            (min.x, max.y),
            (max.x, max.y),
            (max.x, min.y),
            (min.x, min.y),
        ]),
        vec![],
    ))
}

/// Location of the file as WKT, if any image segment contributes one.
pub fn location_wkt(file: &NitfFile, policy: FootprintPolicy) -> Result<Option<String>> {
    Ok(file_footprint(file, policy)?.map(|f| f.to_wkt()))
}
