//! Exchanging tuples and matrices with flat buffers.

use linview::*;

#[test]
fn sub_matrix_store_load() -> anyhow::Result<()> {
    let mut m = Mat4d::from_fn(|row, col| (row * 4 + col) as f64);
    let mut sub = m.sub_matrix_mut::<3, 2>(1, 1);
    assert_eq!(sub.row_stride(), 4);

    let mut buf = [0.0; 6];
    sub.store(&mut buf, Order::RowMajor)?;
    assert_eq!(buf, [5.0, 6.0, 9.0, 10.0, 13.0, 14.0]);
    sub.store(&mut buf, Order::ColumnMajor)?;
    assert_eq!(buf, [5.0, 9.0, 13.0, 6.0, 10.0, 14.0]);

    assert!(!m.is_dirty());
    sub.load(&[-1.0; 6], Order::ColumnMajor)?;
    assert!(m.is_dirty());
    for row in 0..4 {
        for col in 0..4 {
            let inside = (1..4).contains(&row) && (1..3).contains(&col);
            let expected = if inside { -1.0 } else { (row * 4 + col) as f64 };
            assert_eq!(m.get(row, col), expected, "({row}, {col})");
        }
    }

    let err = sub.load(&[0.0; 5], Order::RowMajor).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            expected: 6,
            actual: 5
        }
    );
    assert_eq!(sub.get(0, 0), -1.0);
    Ok(())
}

#[test]
fn column_major_round_trip() -> anyhow::Result<()> {
    let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    let mut buf = vec![0; 6];
    m.store(&mut buf, Order::ColumnMajor)?;

    let mut back = Matrix::<i32, 2, 3>::zero();
    back.load(&buf, Order::ColumnMajor)?;
    assert_eq!(back, m);

    let mut transposed = Matrix::<i32, 3, 2>::zero();
    transposed.load(&buf, Order::RowMajor)?;
    assert_eq!(transposed, m.transposed());
    Ok(())
}

#[test]
fn slices() -> anyhow::Result<()> {
    let mut v = Vector3f::from_slice(&[1.0, 2.0, 3.0])?;
    assert!(Vector3f::from_slice(&[1.0, 2.0]).is_err());

    v.set_from_slice(&[4.0, 5.0, 6.0])?;
    assert_eq!(v.to_array(), [4.0, 5.0, 6.0]);
    assert_eq!(
        v.set_from_slice(&[0.0; 4]).map(|_| ()),
        Err(Error::DimensionMismatch {
            expected: 3,
            actual: 4
        })
    );
    assert_eq!(v, [4.0, 5.0, 6.0]);
    Ok(())
}

#[test]
fn codec_round_trip() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(2024);
    let mut buf = vec![0; 256];

    let mut p = Point3d::from_fn(|_| rng.f64());
    let mut m = Mat3f::from_fn(|_, _| rng.f32());
    let mut q = Quatd::rotation_y(rng.f64());
    m.mark_clean();
    q.mark_clean();
    p.set_x(-1.0);

    let mut pos = p.serialize(0, &mut buf)?;
    pos = m.serialize(pos, &mut buf)?;
    let end = q.serialize(pos, &mut buf)?;
    assert_eq!(end, p.encoded_len() + m.encoded_len() + q.encoded_len());

    let (mut p2, mut m2, mut q2) = (Point3d::zero(), Mat3f::identity(), Quatd::zero());
    let mut pos = p2.deserialize(0, &buf)?;
    pos = m2.deserialize(pos, &buf)?;
    assert_eq!(q2.deserialize(pos, &buf)?, end);

    assert_eq!(p2, p);
    assert_eq!(m2, m);
    assert_eq!(q2, q);
    assert!(p2.is_dirty());
    assert!(!m2.is_dirty());
    assert!(!q2.is_dirty());

    assert!(matches!(
        q2.deserialize(end - 1, &buf[..end]),
        Err(Error::BufferTooShort { .. })
    ));
    Ok(())
}
