#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::cast_possible_truncation
)]

//! Cross-operation scenarios for the calculator
//!
//! These exercise chains of operations through both the plain functions and
//! the `CalculatorClientV1` trait object.

use std::sync::Arc;

use calculator::{CalculatorOperations, Service, local_client};
use calculator_sdk::{CalculatorClientV1, CalculatorError};

fn client() -> Arc<dyn CalculatorClientV1> {
    local_client(Arc::new(Service::new()))
}

#[test]
fn chained_add_multiply_divide() {
    // (10 + 5) * 2 / 3
    let sum = CalculatorOperations::add(10, 5);
    let product = CalculatorOperations::multiply(sum, 2);
    let result = CalculatorOperations::divide(product, 3).unwrap();

    assert_eq!(sum, 15);
    assert_eq!(product, 30);
    assert_eq!(result, 10.0);
}

#[test]
fn circle_area_then_square_root() {
    let area = CalculatorOperations::circle_area(4.0).unwrap();
    let root = CalculatorOperations::square_root(area).unwrap();

    assert!((50.0..=51.0).contains(&area), "area = {area}");
    assert!((7.0..=7.1).contains(&root), "root = {root}");
}

#[test]
fn power_and_square_root_are_inverse() {
    let powered = CalculatorOperations::power(5.0, 2.0);
    let result = CalculatorOperations::square_root(powered).unwrap();

    assert_eq!(powered, 25.0);
    assert!((result - 5.0).abs() < 1e-10);
}

#[test]
fn subtract_then_divide_scenarios() {
    for (a, b, expected) in [(100, 20, 4.0), (50, 10, 4.0), (1000, 100, 9.0)] {
        let difference = CalculatorOperations::subtract(a, b);
        let result = CalculatorOperations::divide(difference, b).unwrap();
        assert_eq!(result, expected, "({a} - {b}) / {b}");
    }
}

#[test]
fn nested_calculation_with_circle_area() {
    let area = CalculatorOperations::circle_area(3.0).unwrap();
    let rounded = area.round() as i32;
    let result = CalculatorOperations::add(rounded, 10);

    // area ~ 28.27, rounded to 28
    assert!((37..=39).contains(&result), "result = {result}");
}

#[test]
fn large_number_subtraction() {
    let large = i32::MAX - 1000;
    assert_eq!(CalculatorOperations::subtract(large, 500), large - 500);
}

#[test]
fn circle_area_small_and_large_radius() {
    let small = CalculatorOperations::circle_area(0.5).unwrap();
    let large = CalculatorOperations::circle_area(100.0).unwrap();

    assert!((0.78..=0.79).contains(&small), "small = {small}");
    assert!((31415.0..=31416.0).contains(&large), "large = {large}");
}

#[test]
fn divide_by_zero_is_reported() {
    assert_eq!(
        CalculatorOperations::divide(10, 0),
        Err(CalculatorError::DivisionByZero)
    );
}

#[test]
fn negative_radius_is_reported() {
    let err = CalculatorOperations::circle_area(-5.0).unwrap_err();
    assert!(matches!(err, CalculatorError::InvalidArgument(_)));
    assert!(err.to_string().contains("Radius cannot be negative"));
}

#[test]
fn negative_square_root_is_reported() {
    let err = CalculatorOperations::square_root(-16.0).unwrap_err();
    assert!(matches!(err, CalculatorError::InvalidArgument(_)));
    assert!(
        err.to_string()
            .contains("Cannot calculate square root of negative number")
    );
}

#[test]
fn client_trait_matches_plain_functions() {
    let client = client();

    assert_eq!(client.add(10, 5), 15);
    assert_eq!(client.subtract(10, 5), 5);
    assert_eq!(client.multiply(15, 2), 30);
    assert_eq!(client.divide(30, 3).unwrap(), 10.0);
    assert_eq!(client.power(2.0, 8.0), 256.0);
    assert_eq!(client.square_root(25.0).unwrap(), 5.0);
    assert_eq!(
        client.circle_area(2.0).unwrap(),
        CalculatorOperations::circle_area(2.0).unwrap()
    );
    assert_eq!(client.divide(1, 0), Err(CalculatorError::DivisionByZero));
}

#[test]
fn client_is_shareable_across_threads() {
    let client = client();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = Arc::clone(&client);
            std::thread::spawn(move || client.add(i, i))
        })
        .collect();

    let sums: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sums, vec![0, 2, 4, 6]);
}
