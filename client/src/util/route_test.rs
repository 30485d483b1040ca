use super::*;

#[test]
fn paths_are_stable() {
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::Signup.path(), "/signup");
    assert_eq!(Route::Dashboard.path(), "/dashboard");
}

#[test]
fn every_path_is_distinct_and_absolute() {
    let paths = [Route::Login.path(), Route::Signup.path(), Route::Dashboard.path()];
    for (i, path) in paths.iter().enumerate() {
        assert!(path.starts_with('/'));
        assert!(!paths[i + 1..].contains(path));
    }
}
