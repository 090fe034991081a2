
pub mod numeric;
pub mod interval;
pub mod bounds;
pub mod rectangle;
pub mod camera;
pub mod projection;
pub mod json_structs;
pub mod json_parser;

pub mod prelude;
