use log::debug;
use rustc_hash::FxHashMap;

use crate::errors::RouteError;
use crate::route::FullRoute;

/// Maps paths to views. Paths are unique and matched exactly: no parameters, no nesting, no fallback.
pub struct RouteTable<'a> {
    routes: Vec<&'a dyn FullRoute>,
    index: FxHashMap<&'static str, usize>,
}

impl<'a> RouteTable<'a> {
    pub fn new(routes: &[&'a dyn FullRoute]) -> Result<Self, RouteError> {
        let mut index = FxHashMap::default();

        for (position, route) in routes.iter().enumerate() {
            let path = route.route_raw();

            if !path.starts_with('/') {
                return Err(RouteError::RelativePath {
                    path: path.to_string(),
                });
            }

            if index.insert(path, position).is_some() {
                return Err(RouteError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(Self {
            routes: routes.to_vec(),
            index,
        })
    }

    /// Returns the route bound to exactly `path`, if any.
    pub fn resolve(&self, path: &str) -> Option<&'a dyn FullRoute> {
        let route = self.index.get(path).map(|&position| self.routes[position]);

        if route.is_none() {
            debug!(target: "navigation", "no route matches {}", path);
        }

        route
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &'a dyn FullRoute> + '_ {
        self.routes.iter().copied()
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|route| route.route_raw())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{InternalRoute, PageContext, RenderResult};

    struct TestRoute {
        route: &'static str,
    }

    impl InternalRoute for TestRoute {
        fn route_raw(&self) -> &'static str {
            self.route
        }
    }

    impl FullRoute for TestRoute {
        fn render_internal(&self, _ctx: &mut PageContext) -> RenderResult {
            RenderResult::Text(self.route.to_string())
        }
    }

    const HOME: TestRoute = TestRoute { route: "/" };
    const SECOND: TestRoute = TestRoute {
        route: "/second-page",
    };
    const ANOTHER: TestRoute = TestRoute {
        route: "/another-page",
    };

    #[test]
    fn test_resolve_exact_match() {
        let table = RouteTable::new(&[&HOME, &SECOND, &ANOTHER]).unwrap();

        assert_eq!(table.resolve("/").unwrap().route_raw(), "/");
        assert_eq!(
            table.resolve("/second-page").unwrap().route_raw(),
            "/second-page"
        );
        assert_eq!(
            table.resolve("/another-page").unwrap().route_raw(),
            "/another-page"
        );
    }

    #[test]
    fn test_resolve_no_match() {
        let table = RouteTable::new(&[&HOME, &SECOND, &ANOTHER]).unwrap();

        assert!(table.resolve("/nonexistent").is_none());
        assert!(table.resolve("/second-page/").is_none());
        assert!(table.resolve("/Second-Page").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn test_paths_keep_declaration_order() {
        let table = RouteTable::new(&[&SECOND, &HOME, &ANOTHER]).unwrap();

        assert_eq!(
            table.paths().collect::<Vec<_>>(),
            vec!["/second-page", "/", "/another-page"]
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let duplicate = TestRoute {
            route: "/second-page",
        };

        let result = RouteTable::new(&[&HOME, &SECOND, &duplicate]);

        assert_eq!(
            result.err(),
            Some(RouteError::DuplicatePath {
                path: "/second-page".to_string()
            })
        );
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let relative = TestRoute {
            route: "second-page",
        };

        let result = RouteTable::new(&[&relative]);

        assert_eq!(
            result.err(),
            Some(RouteError::RelativePath {
                path: "second-page".to_string()
            })
        );
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new(&[]).unwrap();

        assert!(table.is_empty());
        assert!(table.resolve("/").is_none());
    }
}
