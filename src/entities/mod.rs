mod annotation;
mod location;
mod place;

pub use annotation::{Annotation, AnnotationStyle};
pub use location::{Coordinate, LocationSample, Region, Span};
pub use place::{NewPlace, Place, Placemark};
