mod voronoi;

pub use voronoi::{FarthestVoronoiVertex, VoronoiDiagram};
