use std::fmt;

/// An (HTTP method, path) pair expected to be declared in the routes file.
///
/// The method is kept upper-case for display; [`RouteSpec::dsl_method`] gives the
/// lower-case form used by the `Route::get(...)` call syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteSpec {
    method: String,
    path: String,
}

impl RouteSpec {
    pub fn new(method: impl AsRef<str>, path: impl Into<String>) -> Self {
        Self {
            method: method.as_ref().trim().to_ascii_uppercase(),
            path: path.into(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn dsl_method(&self) -> String {
        self.method.to_ascii_lowercase()
    }
}

impl fmt::Display for RouteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
