use std::path::Path;

use coin_combinations::dynamic_programming::coin_combinations_2;
use coin_combinations::testing;

#[test]
fn test_case_files() {
    testing::verify_all_tests(
        Path::new("data/coin_combinations_2"),
        coin_combinations_2::solve,
    );
}

#[test]
fn test_discover_sorted() {
    let found = testing::discover_tests(Path::new("data/coin_combinations_2"));
    assert_eq!(found, vec![1, 2]);
}

#[test]
fn test_missing_dir_reports_nothing() {
    let dir = Path::new("data/does_not_exist");
    assert!(testing::discover_tests(dir).is_empty());
    assert!(testing::run_test_case(dir, 1, coin_combinations_2::solve).is_err());
}
