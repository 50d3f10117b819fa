#![doc = r#"
nitfmeta — catalog metadata for NITF imagery.

This crate takes the structural view of a parsed NITF (National Imagery
Transmission Format) file and derives everything a catalog needs to index it:

- a footprint geometry as WKT (`POLYGON` / `MULTIPOLYGON`), built from the
  corner coordinates of every image segment;
- a `<metadata>` XML document exposing every header field, security block and
  nested TRE (Tagged Record Extension) of the file and its segments;
- a flat set of typed attributes for a fixed catalog vocabulary.

Binary NITF parsing is out of scope: input is the parser's object graph, or
its JSON structural dump.

Quick start
-----------
```rust
use nitfmeta::{NitfTransformer, TransformerConfig};
use nitfmeta::model::{
    ImageCoordinatePair, ImageCoordinates, ImageCoordinatesRepresentation, ImageSegment,
    NitfFile,
};

fn main() -> nitfmeta::Result<()> {
    let corner = |lat, lon| ImageCoordinatePair::new(lat, lon);
    let file = NitfFile {
        file_title: "EXAMPLE".to_string(),
        image_segments: vec![ImageSegment {
            image_coordinates_representation: ImageCoordinatesRepresentation::Geographic,
            image_coordinates: Some(ImageCoordinates {
                coordinate00: corner(0.0, 0.0),
                coordinate0_max_col: corner(1.0, 0.0),
                coordinate_max_row_max_col: corner(1.0, 1.0),
                coordinate_max_row0: corner(0.0, 1.0),
            }),
            ..Default::default()
        }],
        ..Default::default()
    };

    let metacard = NitfTransformer::new(TransformerConfig::default()).transform(&file, None)?;
    assert_eq!(
        metacard.location.as_deref(),
        Some("POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))")
    );
    assert!(metacard.metadata.contains("<fileTitle>EXAMPLE</fileTitle>"));
    Ok(())
}
```

Structural dumps
----------------
```rust,no_run
use std::path::Path;
use nitfmeta::NitfTransformer;

fn main() -> nitfmeta::Result<()> {
    let metacard = NitfTransformer::default().transform_path(Path::new("/data/image.json"), Some("id"))?;
    println!("{}", metacard.metadata);
    Ok(())
}
```

Multi-segment footprints
------------------------
Files with two or more image segments produce a `MULTIPOLYGON` with one member
per segment whose corners are geographic or decimal degrees. Set
[`FootprintPolicy::Envelope`] to collapse them into their bounding polygon
instead.

Error handling
--------------
All public functions return `nitfmeta::Result<T>`. Empty input is
[`Error::EmptyInput`]; malformed dumps are [`Error::Dump`]; an image segment
that declares degree coordinates without carrying them is
[`Error::MissingField`]. Unsupported coordinate representations are not
errors: they are logged and contribute no geometry.

Useful modules
--------------
- [`api`] — high-level entry points and the [`Metacard`].
- [`model`] — the parsed NITF structure consumed by every transform.
- [`core`] — footprint, XML document and attribute projection.
- [`io`] — structural dump reader and output writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod model;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::TransformerConfig;
pub use error::{Error, Result};
pub use types::{FootprintPolicy, OutputFormat};

// Readers
pub use io::reader::{DumpError, read_dump, read_dump_bytes};

// Derivations
pub use crate::core::attributes::{AttributeValue, FlatAttributeSet, NITF_ATTRIBUTES, project_attributes};
pub use crate::core::document::build_metadata_xml;
pub use crate::core::footprint::{Footprint, build_polygon, file_footprint, location_wkt};
pub use crate::core::wkt::ToWkt;

// High-level API re-exports
pub use api::{BatchReport, Metacard, NitfTransformer, iterate_dumps, process_directory_to_path};
