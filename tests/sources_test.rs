use std::fs;
use tempfile::TempDir;
use templatizer::sources::{expand_sources, is_glob_pattern};

fn touch(tmp_dir: &TempDir, relative: &str) {
    let path = tmp_dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x").unwrap();
}

fn patterns(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_is_glob_pattern() {
    assert!(is_glob_pattern("*.html"));
    assert!(is_glob_pattern("page?.html"));
    assert!(is_glob_pattern("[ab].html"));
    assert!(is_glob_pattern("{a,b}.html"));
    assert!(!is_glob_pattern("templates/home.html"));
}

#[test]
fn test_literals_kept_in_configured_order() {
    let tmp_dir = TempDir::new().unwrap();
    touch(&tmp_dir, "b.html");
    touch(&tmp_dir, "a.html");

    let result =
        expand_sources(tmp_dir.path(), &patterns(&["b.html", "a.html"])).unwrap();

    assert_eq!(
        result,
        vec![tmp_dir.path().join("b.html"), tmp_dir.path().join("a.html")]
    );
}

#[test]
fn test_missing_literal_is_kept() {
    let tmp_dir = TempDir::new().unwrap();

    let result = expand_sources(tmp_dir.path(), &patterns(&["missing.html"])).unwrap();

    assert_eq!(result, vec![tmp_dir.path().join("missing.html")]);
}

#[test]
fn test_glob_matches_are_sorted() {
    let tmp_dir = TempDir::new().unwrap();
    touch(&tmp_dir, "templates/b.html");
    touch(&tmp_dir, "templates/a.html");
    touch(&tmp_dir, "templates/notes.txt");

    let result =
        expand_sources(tmp_dir.path(), &patterns(&["templates/*.html"])).unwrap();

    assert_eq!(
        result,
        vec![
            tmp_dir.path().join("templates/a.html"),
            tmp_dir.path().join("templates/b.html")
        ]
    );
}

#[test]
fn test_star_does_not_cross_directories() {
    let tmp_dir = TempDir::new().unwrap();
    touch(&tmp_dir, "a.html");
    touch(&tmp_dir, "sub/b.html");

    let result = expand_sources(tmp_dir.path(), &patterns(&["*.html"])).unwrap();

    assert_eq!(result, vec![tmp_dir.path().join("a.html")]);
}

#[test]
fn test_recursive_glob_crosses_directories() {
    let tmp_dir = TempDir::new().unwrap();
    touch(&tmp_dir, "a.html");
    touch(&tmp_dir, "sub/b.html");

    let result = expand_sources(tmp_dir.path(), &patterns(&["**/*.html"])).unwrap();

    assert_eq!(
        result,
        vec![tmp_dir.path().join("a.html"), tmp_dir.path().join("sub/b.html")]
    );
}

#[test]
fn test_negation_removes_previous_matches() {
    let tmp_dir = TempDir::new().unwrap();
    touch(&tmp_dir, "a.html");
    touch(&tmp_dir, "b.html");

    let result =
        expand_sources(tmp_dir.path(), &patterns(&["*.html", "!b.html"])).unwrap();

    assert_eq!(result, vec![tmp_dir.path().join("a.html")]);
}

#[test]
fn test_duplicates_keep_first_position() {
    let tmp_dir = TempDir::new().unwrap();
    touch(&tmp_dir, "a.html");
    touch(&tmp_dir, "b.html");

    // The glob re-selects b.html, which stays at its original position.
    let result =
        expand_sources(tmp_dir.path(), &patterns(&["b.html", "*.html"])).unwrap();

    assert_eq!(
        result,
        vec![tmp_dir.path().join("b.html"), tmp_dir.path().join("a.html")]
    );
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let tmp_dir = TempDir::new().unwrap();

    let result = expand_sources(tmp_dir.path(), &patterns(&["[unclosed.html"]));

    assert!(result.is_err());
}
