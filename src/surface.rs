use crate::{
    api::{Inputs, MapSurface, Navigator},
    entities::{Annotation, AnnotationStyle, Region},
};

/// Renders map commands as log lines. Used by the binary, where there is no
/// map view to draw on.
#[derive(Debug, Default)]
pub struct LoggingSurface;

impl MapSurface for LoggingSurface {
    fn set_region(&self, region: Region) {
        let bounds = region.bounds();

        tracing::info!(
            lat = region.center.latitude,
            lng = region.center.longitude,
            min = ?bounds.min(),
            max = ?bounds.max(),
            "region"
        );
    }

    fn add_annotation(&self, annotation: Annotation) {
        let marker = match annotation.style {
            AnnotationStyle::Provisional => "green (unsaved)",
            AnnotationStyle::Persisted => "green",
        };

        tracing::info!(
            %marker,
            title = %annotation.title,
            subtitle = %annotation.subtitle,
            lat = annotation.coordinate.latitude,
            lng = annotation.coordinate.longitude,
            "annotation"
        );
    }

    fn set_inputs(&self, inputs: &Inputs) {
        tracing::info!(?inputs, "inputs");
    }

    fn show_notice(&self, message: &str) {
        tracing::warn!(%message, "notice");
    }
}

impl Navigator for LoggingSurface {
    fn back(&self) {
        tracing::info!("navigate back");
    }
}
