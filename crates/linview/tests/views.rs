//! Behavior of masters, views and copies as seen through the public API.

use linview::*;

#[test]
fn views_track_the_master() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut master = Vector4d::zero();
    let memoized = master.read_only() as *const Vector4<f64, ReadOnly>;
    let view = master.as_read_only();

    for _ in 0..200 {
        let index = rng.usize(..4);
        let value = rng.f64() * 100.0 - 50.0;
        master.set(index, value);

        assert_eq!(view.get(index), value);
        assert_eq!(view, master);
        assert!(view.is_dirty());
        assert_eq!(memoized, master.read_only() as *const _);

        if rng.bool() {
            master.mark_clean();
            assert!(!view.is_dirty());
        }
    }
}

#[test]
fn memoized_and_fresh_views_agree() {
    let p = point3(1, 2, 3);
    let a = p.read_only();
    let b = p.read_only();
    assert!(std::ptr::eq(a, b));

    let fresh = p.as_read_only();
    assert!(!std::ptr::eq(a, &fresh));
    assert_eq!(*a, fresh);
    assert!(a.shares_storage_with(&fresh));
}

#[test]
fn copies_are_independent() {
    let mut master = point2(1.0, 1.0);
    master.set_x(2.0);

    let copy = master.clone();
    let from_view = master.read_only().to_mutable();
    assert!(copy.is_dirty());
    assert!(from_view.is_dirty());
    assert!(!copy.shares_storage_with(&master));

    master.mark_clean();
    master.set_y(5.0);
    assert_eq!(copy, point2(2.0, 1.0));
    assert_eq!(from_view, point2(2.0, 1.0));

    let mut copy = copy;
    copy.mark_clean();
    assert!(master.is_dirty());
    assert!(!copy.is_dirty());
}

#[test]
fn read_only_factories_match_converted_views() {
    let made = Point3::new_read_only([1.0, 2.0, 3.0]);
    let converted = point3(1.0, 2.0, 3.0).as_read_only();
    assert_eq!(made, converted);
    assert!(made.is_read_only());
    assert!(converted.is_read_only());
    assert_eq!(made.access_mode(), AccessMode::ReadOnly);

    // Both reject mutation through the dynamic handle as well.
    for handle in [DynTuple::from(made), DynTuple::from(converted)] {
        let mut handle = handle;
        assert_eq!(
            handle.try_set(0, 0.0).map(|_| ()),
            Err(Error::IllegalMutation { operation: "set" })
        );
        assert_eq!(handle.to_array(), [1.0, 2.0, 3.0]);
    }
}

#[test]
fn exact_and_epsilon_equality() {
    let a = vector3(1.0, 2.0, 3.0);
    let b = vector3(1.0, 2.0, 3.25);
    assert_ne!(a, b);
    assert!(a.epsilon_equals(&b, 0.25));
    assert!(!a.epsilon_equals(&b, 0.125));
    assert!(a.epsilon_equals(&a.as_read_only(), 0.0));

    assert_ne!(vector2(0.0, 0.0), vector2(-0.0, 0.0));
    assert!(vector2(0.0, 0.0).epsilon_equals(&vector2(-0.0, 0.0), 0.0));
}

#[test]
fn geometry() {
    assert_eq!(point3(0.0, 0.0, 0.0).distance(&point3(3.0, 4.0, 0.0)), 5.0);

    let mut v = vector3(1.0, 0.0, 0.0);
    v.cross(&vector3(1.0, 0.0, 0.0), &vector3(0.0, 1.0, 0.0));
    assert_eq!(v, vector3(0.0, 0.0, 1.0));

    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..100 {
        let mut v = Vector3d::from_fn(|_| rng.f64() * 20.0 - 10.0);
        if v.length() < 1e-6 {
            continue;
        }
        v.normalize();
        assert_approx_eq!(v.length(), 1.0).abs(1e-12);
    }
}

#[test]
fn identity_matrix() {
    let id = Mat3d::identity();
    assert_eq!(id.determinant(), 1.0);
    assert_eq!(id.inverse(), id);

    let mut inverted = Mat3d::identity();
    inverted.invert();
    assert_eq!(inverted.to_rows(), id.to_rows());
}

#[test]
fn rays_follow_their_components() {
    let mut ray = Rayd::new(point3(0.0, 0.0, 0.0), vector3(0.0, 0.0, 1.0));
    let view = ray.as_read_only();
    let moved = ray.origin() + &vector3(1.0, 0.0, 0.0);
    ray.set_origin(&moved);
    assert_eq!(view.point_at(2.0), point3(1.0, 0.0, 2.0));
    assert!(view.is_dirty());
}
