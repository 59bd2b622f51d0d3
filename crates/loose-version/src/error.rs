#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// One side was built from an empty or missing string and has no tokens.
    #[error(
        "Cannot compare version {} with {}: an empty version has no components",
        side(.left),
        side(.right)
    )]
    InvalidComparison {
        left: Option<String>,
        right: Option<String>,
    },
}

fn side(version: &Option<String>) -> String {
    match version {
        Some(version) => format!("{version:?}"),
        None => "<none>".to_string(),
    }
}
