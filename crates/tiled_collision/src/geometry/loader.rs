//! Geometry loader: map layer to collider set
//!
//! Turns the polylines of one named layer into absolute segments and reduces
//! each to a [`SegmentRange`]. Loading is all or nothing: one malformed object
//! fails the whole layer.

use std::path::Path;

use thiserror::Error;

use super::collider_set::ColliderSet;
use super::segment::{Segment, SegmentRange};
use crate::foundation::math::{to_absolute, Point2};
use crate::map::{MapError, PolylineObject, TiledMap};

/// Errors raised while loading a collider layer
#[derive(Error, Debug)]
pub enum LoadError {
    /// The map document could not be read or parsed
    #[error(transparent)]
    Map(#[from] MapError),

    /// No layer carries the configured name
    #[error("collider layer '{layer}' not found in map")]
    MissingLayer {
        /// Requested layer name
        layer: String,
    },

    /// The matched layer is a tile, image or group layer
    #[error("collider layer '{layer}' is not an object layer (type {})", kind_name(.kind))]
    NotObjectLayer {
        /// Requested layer name
        layer: String,
        /// Layer type from the export, if present
        kind: Option<String>,
    },

    /// An object of the matched layer is not a usable polyline
    #[error("collider layer '{layer}' object #{index}{}: {reason}", id_suffix(.id))]
    MalformedData {
        /// Layer being loaded
        layer: String,
        /// Position of the object within the layer
        index: usize,
        /// Editor id of the object, if present
        id: Option<u64>,
        /// What was wrong
        reason: String,
    },
}

fn id_suffix(id: &Option<u64>) -> String {
    id.map(|id| format!(" (id {id})")).unwrap_or_default()
}

fn kind_name(kind: &Option<String>) -> &str {
    kind.as_deref().unwrap_or("unknown")
}

/// Loads collider layers from map exports
pub struct GeometryLoader;

impl GeometryLoader {
    /// Build the collider set for `layer_name` from a parsed map
    pub fn load(map: &TiledMap, layer_name: &str) -> Result<ColliderSet, LoadError> {
        let (layer, matches) = map.find_layer(layer_name).ok_or_else(|| LoadError::MissingLayer {
            layer: layer_name.to_string(),
        })?;

        if matches > 1 {
            log::warn!("{matches} layers named '{layer_name}', using the first one");
        }

        if !layer.is_object_layer() {
            return Err(LoadError::NotObjectLayer {
                layer: layer_name.to_string(),
                kind: layer.kind.clone(),
            });
        }

        let objects = layer.polyline_objects().map_err(|bad| LoadError::MalformedData {
            layer: layer_name.to_string(),
            index: bad.index,
            id: bad.id,
            reason: bad.reason,
        })?;

        let mut ranges = Vec::new();
        for (index, object) in objects.iter().enumerate() {
            let before = ranges.len();
            let points = Self::absolute_points(object);
            if !points.iter().all(|point| point.x.is_finite() && point.y.is_finite()) {
                return Err(LoadError::MalformedData {
                    layer: layer_name.to_string(),
                    index,
                    id: object.id,
                    reason: "coordinate out of range".to_string(),
                });
            }
            ranges.extend(Segment::chain(&points).map(|segment| segment.range()));

            let produced = ranges.len() - before;
            if produced == 0 {
                log::warn!(
                    "Layer '{layer_name}' object #{index} has a single point and yields no segments"
                );
            } else {
                log::debug!("Layer '{layer_name}' object #{index}: {produced} segments");
            }
        }

        log::info!(
            "Loaded collider layer '{}': {} objects, {} segment ranges",
            layer_name,
            objects.len(),
            ranges.len()
        );

        Ok(ColliderSet::new(layer_name, ranges))
    }

    /// Parse a JSON map export and load `layer_name` from it
    pub fn load_from_str(json: &str, layer_name: &str) -> Result<ColliderSet, LoadError> {
        let map = TiledMap::from_json(json)?;
        Self::load(&map, layer_name)
    }

    /// Read a JSON map export from disk and load `layer_name` from it
    pub fn load_from_path<P: AsRef<Path>>(path: P, layer_name: &str) -> Result<ColliderSet, LoadError> {
        let path = path.as_ref();
        log::debug!("Reading map export {}", path.display());
        let map = TiledMap::from_path(path)?;
        Self::load(&map, layer_name)
    }

    /// Translate every editor-relative point of `object` by its origin
    pub fn absolute_points(object: &PolylineObject) -> Vec<Point2> {
        let origin = object.origin();
        object
            .polyline
            .iter()
            .map(|point| to_absolute(origin, point.as_vec()))
            .collect()
    }

    /// Ranges of a single polyline object
    pub fn object_ranges(object: &PolylineObject) -> Vec<SegmentRange> {
        let points = Self::absolute_points(object);
        Segment::chain(&points).map(|segment| segment.range()).collect()
    }
}
