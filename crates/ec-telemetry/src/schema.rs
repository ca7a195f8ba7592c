//! Arrow schema for ego-motion recordings.

use arrow::datatypes::{DataType, Field, Schema};

pub const COL_TIMESTAMP: &str = "timestamp";
pub const COL_QX: &str = "qx";
pub const COL_QY: &str = "qy";
pub const COL_QZ: &str = "qz";
pub const COL_QW: &str = "qw";
pub const COL_VX: &str = "vx";
pub const COL_VY: &str = "vy";
pub const COL_VZ: &str = "vz";
pub const COL_CURVATURE: &str = "curvature";

/// Columns a recording must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_TIMESTAMP,
    COL_QX,
    COL_QY,
    COL_QZ,
    COL_QW,
    COL_VX,
    COL_VY,
    COL_VZ,
    COL_CURVATURE,
];

/// Canonical schema for an ego-motion recording as this tool writes it.
///
/// Readers are more permissive: the timestamp may also arrive as
/// timestamp[µs], and float columns as Float32.
pub fn egomotion_schema() -> Schema {
    Schema::new(vec![
        Field::new(COL_TIMESTAMP, DataType::Int64, false),
        Field::new(COL_QX, DataType::Float64, false),
        Field::new(COL_QY, DataType::Float64, false),
        Field::new(COL_QZ, DataType::Float64, false),
        Field::new(COL_QW, DataType::Float64, false),
        Field::new(COL_VX, DataType::Float64, false),
        Field::new(COL_VY, DataType::Float64, false),
        Field::new(COL_VZ, DataType::Float64, false),
        Field::new(COL_CURVATURE, DataType::Float64, false),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_covers_all_required_columns() {
        let schema = egomotion_schema();
        for name in REQUIRED_COLUMNS {
            assert!(schema.column_with_name(name).is_some(), "missing {name}");
        }
        assert_eq!(schema.fields().len(), REQUIRED_COLUMNS.len());
    }
}
