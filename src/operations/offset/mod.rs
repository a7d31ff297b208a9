mod offset_polygon;

pub use offset_polygon::OffsetPolygon;
