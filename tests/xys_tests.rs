use step_plot::PlotError;
use step_plot::core::{Point, XYer, XYs};

#[test]
fn copies_finite_points_in_order() {
    let xys = XYs::try_from_pairs(vec![(0.0, 1.0), (2.0, -3.5)]).expect("xys");
    assert_eq!(xys.len(), 2);
    assert_eq!(xys[1], Point::new(2.0, -3.5));
    assert_eq!(xys.as_slice(), &[Point::new(0.0, 1.0), Point::new(2.0, -3.5)]);
}

#[test]
fn rejects_nan_and_infinite_coordinates() {
    for bad in [(f64::NAN, 1.0), (1.0, f64::INFINITY), (f64::NEG_INFINITY, 0.0)] {
        let err = XYs::try_from_pairs(vec![(0.0, 0.0), bad]).expect_err("non-finite");
        match err {
            PlotError::InvalidInput(message) => assert!(message.contains("point 1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn parallel_slices_must_have_equal_length() {
    let err = XYs::try_from_xy_slices(&[0.0, 1.0, 2.0], &[1.0, 2.0]).expect_err("mismatch");
    assert!(matches!(err, PlotError::InvalidInput(_)));

    let xys = XYs::try_from_xy_slices(&[0.0, 1.0], &[5.0, 6.0]).expect("xys");
    assert_eq!(xys[0], Point::new(0.0, 5.0));
}

#[test]
fn copy_from_reads_any_xyer_source() {
    let pairs: Vec<(f64, f64)> = vec![(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)];
    assert_eq!(XYer::len(pairs.as_slice()), 3);

    let xys = XYs::copy_from(pairs.as_slice()).expect("copy");
    assert_eq!(xys.len(), 3);
    assert_eq!(xys[2], Point::new(3.0, 9.0));

    let again = XYs::copy_from(xys.as_slice()).expect("copy of copy");
    assert_eq!(again, xys);
}

#[test]
fn empty_input_is_valid() {
    let xys = XYs::try_from_points(Vec::new()).expect("empty");
    assert!(xys.is_empty());
    assert_eq!(xys, XYs::empty());
}

#[test]
fn try_from_vec_validates() {
    assert!(XYs::try_from(vec![Point::new(0.0, 0.0)]).is_ok());
    assert!(XYs::try_from(vec![Point::new(f64::NAN, 0.0)]).is_err());
}
