/*

    Provide utilities to parse projection job files in JSON.

    The parser is somewhat robust, let <a> be integer or float type,
    in JSON file <a> can be given both in quotes (string) or as is.

    e.g. In JSON file both
    "FovY": "60" and "FovY": 60
    works as fovy: Float in source code

    Vector fields can be given either as a whitespace separated
    string "<a> <a> <a>" or as an array [<a>, <a>, <a>].

    @date: 2 Oct, 2025
    @author: bartu
*/

use std::fmt::{self};
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess};

use crate::prelude::*;
use crate::projection::{RootJob};
use crate::json_structs::{Transformations, TransformKind};

pub fn parse_projection_json(path: &str) -> Result<RootJob, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_job");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path);

    // Parse JSON into job
    let root: RootJob = serde_json::from_reader(reader)?;
    Ok(root)
}

pub(crate) fn deser_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize usize type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_u64()
            .map(|v| v as usize)
            .ok_or_else(|| de::Error::custom("Invalid unsigned integer")),
        serde_json::Value::String(s) => s.trim().parse::<usize>()
            .map_err(|_| de::Error::custom("Failed to parse integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {t}"))),
    }
}

// Handles floats as string or number
pub(crate) fn deser_float<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: Deserializer<'de>,
{
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_f64()
            .map(|v| v as Float)
            .ok_or_else(|| de::Error::custom("Invalid float")),
        serde_json::Value::String(s) => s.trim().parse::<Float>()
            .map_err(|_| de::Error::custom("Failed to parse float from string")),
        t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
    }
}

pub(crate) fn deser_float_vec<'de, D>(deserializer: D) -> Result<Vec<Float>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FloatVecVisitor;

    impl<'de> Visitor<'de> for FloatVecVisitor {
        type Value = Vec<Float>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string of numbers 'a b c ...' or an array of numbers")
        }

        fn visit_str<E>(self, value: &str) -> Result<Vec<Float>, E>
        where
            E: de::Error,
        {
            parse_float_str(value).map_err(de::Error::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Vec<Float>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(NumberOrString(x)) = seq.next_element()? {
                out.push(x);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_any(FloatVecVisitor)
}

// Array elements may themselves be quoted, e.g. ["1", 2, "3.5"]
struct NumberOrString(Float);

impl<'de> Deserialize<'de> for NumberOrString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deser_float(deserializer).map(NumberOrString)
    }
}

fn deser_float_array<'de, D, const N: usize>(deserializer: D) -> Result<[Float; N], D::Error>
where
    D: Deserializer<'de>,
{
    let v = deser_float_vec(deserializer)?;
    let len = v.len();
    v.try_into().map_err(|_| de::Error::custom(format!("Expected {} components, got {}", N, len)))
}

pub(crate) fn deser_vec2<'de, D>(deserializer: D) -> Result<Vector2, D::Error>
where
    D: Deserializer<'de>,
{
    deser_float_array::<D, 2>(deserializer).map(Vector2::from_array)
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    deser_float_array::<D, 3>(deserializer).map(Vector3::from_array)
}

/// Helper function: parse a string like "25 25 25" into floats
fn parse_float_str(s: &str) -> Result<Vec<Float>, String> {
    s.split_whitespace()
        .map(|x| x.parse::<Float>().map_err(|e| format!("'{}': {}", x, e)))
        .collect()
}

/// Compose a matrix out of tokens like "t1 r2 s1". Each token
/// pre-multiplies the result so they take effect left to right.
/// Unknown kinds or ids are skipped.
pub fn parse_transform_expression(
    expr: &str,
    global_transforms: &Transformations
) -> Matrix4 {

    let mut out = Matrix4::IDENTITY;

    for token in expr.split_whitespace() {
        if token.chars().count() < 2 {
            warn!("Found token '{}' shorter than 2 characters, skipping...", token);
            continue;
        }

        // Kind is a single character, possibly multi-byte
        let (kind, id_str) = match token.chars().next() {
            Some(c) => token.split_at(c.len_utf8()),
            None => continue,
        };
        let id: usize = match id_str.parse() {
            Ok(n) => n,
            Err(_) => {
                warn!("Invalid transformation id in '{}'", token);
                continue;
            }
        };
        let kind = match kind {
            "t" | "T" => TransformKind::Translation,
            "s" | "S" => TransformKind::Scaling,
            "r" | "R" => TransformKind::Rotation,
            _ => {
                warn!("Unknown transform token '{}'", kind);
                continue;
            }
        };
        match global_transforms.find(kind, id) {
            Some(tf) => {
                debug!("Found {:?} '{}': {:?}", kind, id, tf);
                out = tf.get_mat4(kind) * out;
            }
            None => warn!("{:?} with id '{}' is not declared, skipping...", kind, id),
        }
    }

    out
}
