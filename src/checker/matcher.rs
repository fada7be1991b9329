//! Pattern matching of route declarations against routes file text.

use regex::Regex;

use crate::lib::errors::CheckError;

use super::RouteSpec;

/// Builds declaration patterns of the form `<Keyword>::<method>('<path>'`.
///
/// Either quote character is accepted on each side of the path. The keyword must
/// not be preceded by an identifier character, so `MyRoute::get` does not count
/// for `Route`, while `Facades\Route::get` does. The method name is matched
/// case-insensitively because PHP method calls are.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    keyword: String,
}

impl RouteMatcher {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    pub fn pattern_for(&self, route: &RouteSpec) -> Result<Regex, CheckError> {
        let pattern = format!(
            r#"(?:^|[^A-Za-z0-9_]){keyword}::(?i:{method})\(['"]{path}['"]"#,
            keyword = regex::escape(self.keyword.trim_start_matches('\\')),
            method = regex::escape(&route.dsl_method()),
            path = regex::escape(route.path()),
        );
        Regex::new(&pattern).map_err(|source| CheckError::Pattern {
            route: route.to_string(),
            source,
        })
    }

    pub fn is_declared(&self, contents: &str, route: &RouteSpec) -> Result<bool, CheckError> {
        Ok(self.pattern_for(route)?.is_match(contents))
    }
}

/// Returns true when `contents` declares `route` through `keyword`.
pub fn route_declared(
    contents: &str,
    keyword: &str,
    route: &RouteSpec,
) -> Result<bool, CheckError> {
    RouteMatcher::new(keyword).is_declared(contents, route)
}
