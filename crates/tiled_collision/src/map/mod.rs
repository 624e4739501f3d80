//! Tiled map export schema
//!
//! Only the parts of the JSON export that collider loading needs are modelled.
//! Layer objects are kept as raw JSON until a layer is selected, so a malformed
//! object in some unrelated layer never prevents a map from loading. Objects of
//! the selected layer are validated into [`PolylineObject`] on demand.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::foundation::math::Vec2;

/// Errors reading or parsing a map export
#[derive(Error, Debug)]
pub enum MapError {
    /// The map file could not be read
    #[error("failed to read map {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or lacks the `layers` list
    #[error("failed to parse map JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A parsed map export
#[derive(Debug, Clone, Deserialize)]
pub struct TiledMap {
    /// Top level layers in document order
    pub layers: Vec<TiledLayer>,
}

/// One layer of a map export
#[derive(Debug, Clone, Deserialize)]
pub struct TiledLayer {
    /// Layer name as set in the editor
    pub name: String,

    /// Layer type (`objectgroup`, `tilelayer`, `group`, ...)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Raw objects; only object layers carry this key
    #[serde(default)]
    pub objects: Option<Vec<serde_json::Value>>,

    /// Child layers of a group layer
    #[serde(default)]
    pub layers: Vec<TiledLayer>,
}

/// A polyline object validated from a layer's raw objects
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolylineObject {
    /// Editor object id, if exported
    #[serde(default)]
    pub id: Option<u64>,

    /// Origin x of the object
    pub x: f32,

    /// Origin y of the object
    pub y: f32,

    /// Points relative to the origin, in authoring order
    pub polyline: Vec<PolylinePoint>,
}

/// Editor-relative polyline point
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PolylinePoint {
    /// Relative x
    pub x: f32,
    /// Relative y
    pub y: f32,
}

/// A raw object that does not match the polyline schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedObject {
    /// Position of the object within its layer
    pub index: usize,
    /// Editor id, when it could be read
    pub id: Option<u64>,
    /// What was wrong with it
    pub reason: String,
}

impl TiledMap {
    /// Parse a map export from JSON text
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a map export from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Find a layer by name
    ///
    /// Layers are searched in document order, descending into group layers.
    /// Returns the first match together with the total number of layers that
    /// carry the name.
    pub fn find_layer(&self, name: &str) -> Option<(&TiledLayer, usize)> {
        let mut matches = Vec::new();
        collect_layers(&self.layers, name, &mut matches);
        matches.first().map(|layer| (*layer, matches.len()))
    }
}

fn collect_layers<'a>(layers: &'a [TiledLayer], name: &str, out: &mut Vec<&'a TiledLayer>) {
    for layer in layers {
        if layer.name == name {
            out.push(layer);
        }
        collect_layers(&layer.layers, name, out);
    }
}

impl TiledLayer {
    /// True for an `objectgroup` layer, or an untyped layer with an `objects` list
    pub fn is_object_layer(&self) -> bool {
        self.objects.is_some() && self.kind.as_deref().map_or(true, |kind| kind == "objectgroup")
    }

    /// Validate every raw object of this layer as a polyline object
    ///
    /// Fails on the first object that lacks `x`, `y` or `polyline`, has a
    /// non-numeric coordinate, or has an empty point list.
    pub fn polyline_objects(&self) -> Result<Vec<PolylineObject>, MalformedObject> {
        self.objects
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, raw)| {
                let id = raw.get("id").and_then(serde_json::Value::as_u64);
                let object = PolylineObject::deserialize(raw).map_err(|e| MalformedObject {
                    index,
                    id,
                    reason: e.to_string(),
                })?;
                if object.polyline.is_empty() {
                    return Err(MalformedObject {
                        index,
                        id,
                        reason: "polyline has no points".to_string(),
                    });
                }
                Ok(object)
            })
            .collect()
    }
}

impl PolylineObject {
    /// Object origin as a vector
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl PolylinePoint {
    /// Point as a vector relative to its object origin
    pub fn as_vec(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
