pub mod iteration;
pub mod point_series;
pub mod primitives;
pub mod render;
pub mod types;

pub use iteration::for_each;
pub use point_series::PointSeries;
pub use render::Render;
pub use types::RenderedPoint;
