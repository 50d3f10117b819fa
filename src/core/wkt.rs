//! Well-known text for the footprint geometries.
use std::fmt::Write;

use geo::{LineString, MultiPolygon, Polygon};

pub trait ToWkt {
    fn to_wkt(&self) -> String;
}

fn write_ring(out: &mut String, ring: &LineString<f64>) {
    out.push('(');
    for (i, c) in ring.coords().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write!(out, "{} {}", c.x, c.y).ok();
    }
    out.push(')');
}

fn write_polygon_body(out: &mut String, polygon: &Polygon<f64>) {
    out.push('(');
    write_ring(out, polygon.exterior());
    for interior in polygon.interiors() {
        out.push_str(", ");
        write_ring(out, interior);
    }
    out.push(')');
}

impl ToWkt for Polygon<f64> {
    fn to_wkt(&self) -> String {
        if self.exterior().0.is_empty() {
            return "POLYGON EMPTY".to_string();
        }
        let mut out = String::from("POLYGON ");
        write_polygon_body(&mut out, self);
        out
    }
}

impl ToWkt for MultiPolygon<f64> {
    fn to_wkt(&self) -> String {
        if self.0.is_empty() {
            return "MULTIPOLYGON EMPTY".to_string();
        }
        let mut out = String::from("MULTIPOLYGON (");
        for (i, polygon) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_polygon_body(&mut out, polygon);
        }
        out.push(')');
        out
    }
}
