use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GraphicError::dependency_missing("png")
            .to_string()
            .contains("dependency missing:")
    );
    assert!(
        GraphicError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GraphicError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn only_dependency_missing_is_classified_as_such() {
    assert!(GraphicError::dependency_missing("png").is_dependency_missing());
    assert!(!GraphicError::validation("x").is_dependency_missing());
    assert!(!GraphicError::render("x").is_dependency_missing());
    assert!(!GraphicError::Other(anyhow::anyhow!("x")).is_dependency_missing());
}

#[test]
fn io_error_names_the_path() {
    let err = GraphicError::io(
        "assets/images/out.png",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    let msg = err.to_string();
    assert!(msg.contains("assets/images/out.png"));
    assert!(msg.contains("denied"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GraphicError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
