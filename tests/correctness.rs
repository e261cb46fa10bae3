use approx::assert_relative_eq;
use dense_layout::{
    blas_transpose_tag, complex_index, index, BlasTranspose, ComplexOffsets, MatrixDescriptor,
    MatrixFlags, MatrixView, MatrixViewMut,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn make_data(rows: usize, cols: usize) -> Vec<f64> {
    (0..rows * cols).map(|x| x as f64).collect()
}

#[test]
fn test_3x4_end_to_end() {
    assert_eq!(index(MatrixFlags::empty(), 3, 4, 2, 3), 11);
    assert_eq!(index(MatrixFlags::TRANSPOSED, 4, 3, 3, 2), 11);

    let mut desc = MatrixDescriptor::new(3, 4);
    assert_eq!(desc.index(2, 3), 11);
    desc.transpose_in_place();
    assert_eq!((desc.rows, desc.cols), (4, 3));
    assert_eq!(desc.index(3, 2), 11);
}

#[test]
fn test_2x2_complex_end_to_end() {
    let off = complex_index(MatrixFlags::empty(), 2, 2, 1, 1);
    assert_eq!(off, ComplexOffsets { re: 5, im: 6 });
}

#[test]
fn test_transposed_view_reads_original_elements() {
    let data = make_data(7, 5);
    let a = MatrixView::real(&data, 7, 5).unwrap();
    let a_t = a.t();

    for i in 0..5 {
        for j in 0..7 {
            assert_relative_eq!(a_t.get(i, j), (j * 5 + i) as f64, epsilon = 1e-10);
        }
    }
    // A second transpose returns to the original addressing.
    let a_tt = a_t.t();
    assert_eq!(a_tt.descriptor(), a.descriptor());
}

#[test]
fn test_random_coordinates_transpose_symmetry() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let rows = rng.gen_range(1..64);
        let cols = rng.gen_range(1..64);
        let r = rng.gen_range(0..rows);
        let c = rng.gen_range(0..cols);
        let flags = MatrixFlags::from_bits_truncate(rng.gen::<u32>());

        let plain = flags - MatrixFlags::TRANSPOSED;
        let trans = flags | MatrixFlags::TRANSPOSED;
        assert_eq!(index(trans, cols, rows, c, r), index(plain, rows, cols, r, c));
        assert_eq!(
            complex_index(trans, cols, rows, c, r),
            complex_index(plain, rows, cols, r, c)
        );
    }
}

#[test]
fn test_blas_operand_after_transpose() {
    let desc = MatrixDescriptor::with_flags(6, 2, MatrixFlags::TINY);
    assert_eq!(blas_transpose_tag(desc.flags), BlasTranspose::NoTrans);

    let t = desc.transposed();
    let op = t.blas_operand();
    assert_eq!(op.trans, BlasTranspose::Trans);
    assert_eq!((op.rows, op.cols, op.ld), (6, 2, 2));
    assert_eq!((op.op_rows(), op.op_cols()), (t.rows, t.cols));
}

#[test]
fn test_complex_view_reads_every_element_at_its_offsets() {
    let data = make_data(2 * 3 * 4, 1);
    let view = MatrixView::complex(&data, 3, 4).unwrap();
    let view_t = view.t();

    for r in 0..3 {
        for c in 0..4 {
            let off = view.descriptor().complex_index(r, c);
            let z = view.get_complex(r, c);
            assert_relative_eq!(z.re, off.re as f64);
            assert_relative_eq!(z.im, off.im as f64);

            let z_t = view_t.get_complex(c, r);
            assert_relative_eq!(z_t.re, z.re);
            assert_relative_eq!(z_t.im, z.im);
        }
    }
    // Row-major neighbours share a slot: im of (r, c) is re of (r, c + 1).
    assert_relative_eq!(view.get_complex(2, 1).im, view.get_complex(2, 2).re);
}

#[test]
fn test_write_then_read_through_both_orientations() {
    let mut data = vec![0.0f64; 12];
    let mut view = MatrixViewMut::real(&mut data, 3, 4).unwrap();
    for r in 0..3 {
        for c in 0..4 {
            view.set(r, c, (10 * r + c) as f64);
        }
    }
    view.transpose_in_place();
    for r in 0..4 {
        for c in 0..3 {
            assert_relative_eq!(view.get(r, c), (10 * c + r) as f64);
        }
    }
    assert_relative_eq!(data[11], 23.0);
}

#[test]
fn test_checked_access_rejects_out_of_range() {
    let data = make_data(2, 2);
    let view = MatrixView::real(&data, 2, 2).unwrap();
    assert!(view.try_get(1, 1).is_ok());
    let err = view.try_get(1, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "index (1, 2) out of bounds for 2x2 matrix"
    );
}
