/*

    Declare Camera, the source of the view-projection
    matrix objects are projected through.

    Right handed, looking down -z, with OpenGL style
    clip space so visible points land in [-1, 1] after
    the perspective divide.

    @date: Oct, 2025
    @author: bartu
*/


use crate::prelude::*;

#[derive(Debug, Deserialize, Clone)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct Camera {
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    #[default(Vector3::new(0., 0., 1.))]
    pub position: Vector3,

    #[serde(rename = "GazePoint", deserialize_with = "deser_vec3")]
    pub gaze_point: Vector3,

    #[serde(rename = "Up", deserialize_with = "deser_vec3")]
    #[default(Vector3::Y)]
    pub up: Vector3,

    #[serde(rename = "FovY", deserialize_with = "deser_float")]
    #[default = 60.0]
    pub fovy: Float, // degrees

    #[serde(rename = "Aspect", deserialize_with = "deser_float")]
    #[default = 1.0]
    pub aspect: Float,

    #[serde(rename = "NearDistance", deserialize_with = "deser_float")]
    #[default = 0.1]
    pub near_distance: Float,

    #[serde(rename = "FarDistance", deserialize_with = "deser_float")]
    #[default = 1000.0]
    pub far_distance: Float,
}

impl Camera {

    pub fn view(&self) -> Matrix4 {
        Matrix4::look_at_rh(self.position, self.gaze_point, self.up)
    }

    pub fn projection(&self) -> Matrix4 {
        Matrix4::perspective_rh_gl(self.fovy.to_radians(), self.aspect, self.near_distance, self.far_distance)
    }

    pub fn view_projection(&self) -> Matrix4 {
        let vp = self.projection() * self.view();
        debug!("View-projection matrix: {}", vp);
        vp
    }
}


#[cfg(test)]
mod tests {
    use super::*; // access to the outer scope

    #[test]
    fn gaze_point_lands_on_screen_center() {
        let cam = Camera {
            position: Vector3::new(3., 2., 5.),
            gaze_point: Vector3::new(-1., 0., 0.5),
            ..Default::default()
        };
        let p = cam.view_projection().apply(&cam.gaze_point);
        assert!(approx_zero(p.x) && approx_zero(p.y), "{:?}", p);
        assert!(p.z > -1.0 && p.z < 1.0);
    }

    #[test]
    fn defaults_from_empty_json() {
        let cam: Camera = serde_json::from_str("{}").unwrap();
        assert_eq!(cam.fovy, 60.0);
        assert_eq!(cam.up, Vector3::Y);
        assert_eq!(cam.position, Vector3::new(0., 0., 1.));
    }
}
