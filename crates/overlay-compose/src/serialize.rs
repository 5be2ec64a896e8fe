//! Serde helpers that round floats to three decimal places when serializing.
//!
//! Used with `#[serde(with = "...")]` on fields.

fn round_dp3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// (De)serialize a [f64] rounded to three decimal places.
pub mod f64_dp3 {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(super::round_dp3(*value))
    }

    /// Deserialize
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer)
    }
}

/// (De)serialize a [`na::Vector2<f64>`] rounded to three decimal places.
pub mod na_vector2_f64_dp3 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize
    pub fn serialize<S>(value: &na::Vector2<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [super::round_dp3(value[0]), super::round_dp3(value[1])].serialize(serializer)
    }

    /// Deserialize
    pub fn deserialize<'de, D>(deserializer: D) -> Result<na::Vector2<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(na::vector![x, y])
    }
}

/// (De)serialize a [`na::Point2<f64>`] rounded to three decimal places.
pub mod na_point2_f64_dp3 {
    use serde::{Deserializer, Serializer};

    /// Serialize
    pub fn serialize<S>(value: &na::Point2<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::na_vector2_f64_dp3::serialize(&value.coords, serializer)
    }

    /// Deserialize
    pub fn deserialize<'de, D>(deserializer: D) -> Result<na::Point2<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::na_vector2_f64_dp3::deserialize(deserializer).map(na::Point2::from)
    }
}
