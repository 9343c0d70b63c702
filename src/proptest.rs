use crate::primitive::frame::WindowFrame;
use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};
use proptest::prelude::*;

/// A Strategy to generate f64 values within the range [-50.0, 50.0].
/// though it is set up to be likely to produce zeros, round numbers, and edge cases.
///
/// 50 units is about the size of a building facade, which is as far apart as windows
/// sharing one skirt get.
pub fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
            Just(std::f64::consts::PI),
            Just(-std::f64::consts::PI),
        ],
        -50.0..=50.0,
    ]
}

pub fn arbitrary_vector() -> impl Strategy<Value = Vector3<f64>> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

pub fn arbitrary_unit_vector() -> impl Strategy<Value = Unit<Vector3<f64>>> {
    arbitrary_vector()
        .prop_filter("Non-zero vector", |v| v.norm() > 0.0001)
        .prop_map(Unit::new_normalize)
}

pub fn arbitrary_point() -> impl Strategy<Value = Point3<f64>> {
    arbitrary_vector().prop_map(Point3::from)
}

/// Light directions as a caller would pass them: not normalized, never zero.
pub fn arbitrary_light_direction() -> impl Strategy<Value = Vector3<f64>> {
    prop_oneof![
        Just(Vector3::new(0.0, -1.0, 0.0)),
        Just(Vector3::new(0.0, 0.0, -1.0)),
        arbitrary_vector().prop_filter("Non-zero light", |v| v.norm() > 0.0001),
    ]
}

pub fn arbitrary_rotation() -> impl Strategy<Value = UnitQuaternion<f64>> {
    prop_oneof![
        Just(UnitQuaternion::identity()),
        (arbitrary_unit_vector(), -std::f64::consts::PI..std::f64::consts::PI)
            .prop_map(|(axis, angle)| UnitQuaternion::from_axis_angle(&axis, angle)),
    ]
}

pub fn arbitrary_frame() -> impl Strategy<Value = WindowFrame> {
    (arbitrary_point(), arbitrary_rotation())
        .prop_map(|(position, rotation)| WindowFrame::new(position, rotation))
}

/// Valid ray counts, i.e. multiples of 4 up to the editor's limit of 128.
pub fn arbitrary_ray_count() -> impl Strategy<Value = usize> {
    prop_oneof![Just(4usize), Just(16), Just(128), (1usize..=32).prop_map(|q| q * 4)]
}

/// Window slot lists with some empty slots mixed in.
pub fn arbitrary_window_slots(max_n: usize) -> impl Strategy<Value = Vec<Option<WindowFrame>>> {
    prop::collection::vec(prop::option::weighted(0.75, arbitrary_frame()), 0..=max_n)
}
