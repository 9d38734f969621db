use step_plot::api::{DataRanger, Step};
use step_plot::core::{DataRange, Point, step_data_range, xy_range};
use step_plot::render::Color;

fn pts(pairs: &[(f64, f64)]) -> Vec<Point> {
    pairs.iter().copied().map(Point::from).collect()
}

#[test]
fn unfilled_range_is_the_tight_bounding_box() {
    let points = pts(&[(1.0, 2.0), (4.0, 7.0), (2.0, 5.0)]);
    assert_eq!(
        step_data_range(&points, false),
        DataRange::new(1.0, 4.0, 2.0, 7.0)
    );
    assert_eq!(step_data_range(&points, false), xy_range(&points));
}

#[test]
fn filled_range_with_positive_values_reaches_down_to_zero() {
    let points = pts(&[(1.0, 2.0), (4.0, 7.0)]);
    let range = step_data_range(&points, true);
    assert_eq!(range.y_min, 0.0);
    assert_eq!(range.y_max, 7.0);
    assert_eq!((range.x_min, range.x_max), (1.0, 4.0));
}

#[test]
fn filled_range_with_negative_values_reaches_up_to_zero() {
    let points = pts(&[(0.0, -3.0), (1.0, -1.0)]);
    let range = step_data_range(&points, true);
    assert_eq!(range.y_min, -3.0);
    assert_eq!(range.y_max, 0.0);
}

#[test]
fn filled_range_straddling_zero_is_unchanged() {
    let points = pts(&[(0.0, -3.0), (1.0, 5.0)]);
    assert_eq!(step_data_range(&points, true), xy_range(&points));
}

#[test]
fn empty_series_reports_empty_range() {
    let step = Step::try_from_pairs(Vec::new()).expect("empty step");
    assert!(step.data_range().is_empty());
}

#[test]
fn step_element_range_follows_its_fill_setting() {
    let step = Step::try_from_pairs(vec![(0.0, 2.0), (3.0, 4.0)]).expect("step");
    assert_eq!(step.data_range().y_min, 2.0);

    let filled = step.with_fill_color(Color::rgb(0.2, 0.4, 0.6));
    assert_eq!(filled.data_range().y_min, 0.0);
    assert_eq!(filled.data_range().y_max, 4.0);
}
