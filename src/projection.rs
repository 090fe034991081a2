/*

    Given a projection job (objects with bounds and
    transforms, an optional camera and a viewport),
    compute the screen rectangle of every object.

    Currently supports:
        - Culling against the viewport rectangle
        - Union of all visible rectangles
        - Pairwise overlap queries for picking

    No clipping is done, so bounds crossing the camera
    plane project to meaningless rectangles.

    @date: Oct 11, 2025
    @author: Bartu
*/

use rayon::prelude::*;
use std::{self, time::Instant};

use crate::bounds::{Bounds};
use crate::camera::{Camera};
use crate::json_structs::{SingleOrVec, Transformations};
use crate::rectangle::{Rectangle};
use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct RootJob {
    #[serde(rename = "Projection")]
    pub job: ProjectionJob,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ProjectionJob {
    #[serde(rename = "Camera")]
    pub camera: Option<Camera>,

    #[serde(rename = "Viewport")]
    pub viewport: Viewport,

    #[serde(rename = "Transformations")]
    pub transformations: Transformations,

    #[serde(rename = "Objects")]
    pub objects: SceneObjects,
}

impl ProjectionJob {
    /// Identity if no camera is given, so object coordinates
    /// are taken as already being in screen space.
    pub fn view_projection(&self) -> Matrix4 {
        match &self.camera {
            Some(cam) => cam.view_projection(),
            None => {
                debug!("No camera given, defaulting view-projection to identity.");
                Matrix4::IDENTITY
            }
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct Viewport {
    #[serde(rename = "Min", deserialize_with = "deser_vec2")]
    #[default(Vector2::NEG_ONE)]
    pub min: Vector2,
    #[serde(rename = "Max", deserialize_with = "deser_vec2")]
    #[default(Vector2::ONE)]
    pub max: Vector2,
}

impl Viewport {
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::from_min_max(self.min, self.max)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct SceneObjects {
    #[serde(rename = "Object", default)]
    pub object: SingleOrVec<SceneObject>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SceneObject {
    #[serde(deserialize_with = "deser_usize")]
    pub _id: usize,

    #[serde(flatten)]
    pub bounds: Bounds,

    #[serde(rename = "Transformations", default)]
    pub transformation_names: Option<String>,
}

impl SceneObject {
    pub fn new(_id: usize, bounds: Bounds, transformation_names: Option<String>) -> Self {
        Self { _id, bounds, transformation_names }
    }

    pub fn model_matrix(&self, transforms: &Transformations) -> Matrix4 {
        match self.transformation_names.as_deref() {
            Some(expr) => parse_transform_expression(expr, transforms),
            None => {
                debug!("Object '{}'s transformation is not given, defaulting to Identity.", self._id);
                Matrix4::IDENTITY
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedObject {
    pub _id: usize,
    pub rect: Rectangle,
    pub visible: bool,       // intersects the viewport
    pub fully_inside: bool,  // contained by the viewport
}

#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub viewport: Rectangle,
    pub objects: Vec<ProjectedObject>,
    pub visible_union: Rectangle, // EMPTY if nothing is visible
}

impl ProjectionReport {
    pub fn visible(&self) -> impl Iterator<Item = &ProjectedObject> {
        self.objects.iter().filter(|o| o.visible)
    }

    pub fn find(&self, id: usize) -> Option<&ProjectedObject> {
        self.objects.iter().find(|o| o._id == id)
    }

    /// Ids of visible objects whose screen rectangles intersect, each
    /// pair once, ordered by position in the Objects list (not by id).
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let visible: Vec<&ProjectedObject> = self.visible().collect();
        let mut pairs = Vec::new();
        for (i, a) in visible.iter().enumerate() {
            for b in visible.iter().skip(i + 1) {
                if a.rect.intersects(&b.rect) {
                    pairs.push((a._id, b._id));
                }
            }
        }
        pairs
    }

    /// Visible objects whose screen rectangle contains the point
    pub fn pick(&self, pt: &Vector2) -> Vec<usize> {
        self.visible()
            .filter(|o| o.rect.contains_point(pt))
            .map(|o| o._id)
            .collect()
    }
}

pub fn project_object(object: &SceneObject, view_projection: &Matrix4, transforms: &Transformations, viewport: &Rectangle) -> ProjectedObject {
    let clip = *view_projection * object.model_matrix(transforms);
    let rect = Rectangle::from_projected_bounds(&object.bounds, &clip);
    ProjectedObject {
        _id: object._id,
        rect,
        visible: viewport.intersects(&rect),
        fully_inside: viewport.contains_rectangle(&rect),
    }
}

pub fn project_objects(job: &ProjectionJob) -> ProjectionReport {

    let span = tracing::span!(tracing::Level::INFO, "project_objects");
    let _enter = span.enter();

    let start = Instant::now();
    let viewport = job.viewport.to_rectangle();
    let view_projection = job.view_projection();
    let objects: Vec<SceneObject> = job.objects.object.all();
    info!(">> There are {} objects in the job.", objects.len());

    // --- Rayon Multithreading ---
    let projected: Vec<ProjectedObject> = objects
        .par_iter()
        .map(|obj| project_object(obj, &view_projection, &job.transformations, &viewport))
        .collect();
    // -----------------------------

    let mut visible_union = Rectangle::new();
    for p in projected.iter() {
        debug!("Object '{}' -> {} (visible: {}, inside: {})", p._id, p.rect, p.visible, p.fully_inside);
        if p.visible {
            visible_union.merge(&p.rect);
        }
    }

    let n_visible = projected.iter().filter(|p| p.visible).count();
    if n_visible == 0 && !projected.is_empty() {
        warn!("None of the {} objects intersect the viewport {}", projected.len(), viewport);
    }
    info!("Projected {} objects ({} visible) in {:?}", projected.len(), n_visible, start.elapsed());

    ProjectionReport {
        viewport,
        objects: projected,
        visible_union,
    }
}
