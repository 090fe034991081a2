/*

    Declare data structs needed to parse JSON.

    - SingleOrVec
    - Transformations: named translation, scaling and
      rotation entries referred to by objects as "t1 r2 ..."

    @date: 13 Oct, 2025
    @author: Bartu
*/

use serde::{Deserialize};
use tracing::{warn};

use crate::json_parser::{deser_usize, deser_float_vec};
use crate::numeric::{Float, Matrix4, Vector3};

// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T: Clone> SingleOrVec<T>  {
    pub fn all(&self) -> Vec<T> {
        match &self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t.clone()],
            SingleOrVec::Multiple(vec) => vec.clone(),
        }
    }
}

impl<T> SingleOrVec<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            SingleOrVec::Empty => Default::default(),
            SingleOrVec::Single(t) => std::slice::from_ref(t).iter(),
            SingleOrVec::Multiple(vec) => vec.iter(),
        }
    }
}

impl<T> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Translation,
    Scaling,
    Rotation,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Transform {
    #[serde(deserialize_with = "deser_usize")]
    pub _id: usize,
    #[serde(deserialize_with = "deser_float_vec")]
    pub _data: Vec<Float>,
}

impl Transform {
    /// Translation and scaling read "x y z", rotation reads
    /// "angle_degrees axis_x axis_y axis_z". Malformed data
    /// falls back to identity.
    pub fn get_mat4(&self, kind: TransformKind) -> Matrix4 {
        let expected = match kind {
            TransformKind::Translation | TransformKind::Scaling => 3,
            TransformKind::Rotation => 4,
        };
        if self._data.len() != expected {
            warn!("{:?} '{}' has {} values, expected {}. Using identity.", kind, self._id, self._data.len(), expected);
            return Matrix4::IDENTITY;
        }

        let d = &self._data;
        match kind {
            TransformKind::Translation => Matrix4::from_translation(Vector3::new(d[0], d[1], d[2])),
            TransformKind::Scaling => Matrix4::from_scale(Vector3::new(d[0], d[1], d[2])),
            TransformKind::Rotation => {
                let axis = Vector3::new(d[1], d[2], d[3]);
                if axis.length_squared() == 0.0 {
                    warn!("Rotation '{}' has a zero axis. Using identity.", self._id);
                    return Matrix4::IDENTITY;
                }
                Matrix4::from_axis_angle(axis.normalize(), d[0].to_radians())
            }
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Transformations {
    #[serde(rename = "Translation")]
    pub translation: SingleOrVec<Transform>,
    #[serde(rename = "Scaling")]
    pub scaling: SingleOrVec<Transform>,
    #[serde(rename = "Rotation")]
    pub rotation: SingleOrVec<Transform>,
}

impl Transformations {
    pub fn find(&self, kind: TransformKind, id: usize) -> Option<&Transform> {
        let list = match kind {
            TransformKind::Translation => &self.translation,
            TransformKind::Scaling => &self.scaling,
            TransformKind::Rotation => &self.rotation,
        };
        list.iter().find(|tf| tf._id == id)
    }
}
