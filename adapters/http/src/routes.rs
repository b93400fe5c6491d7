//! Exact-match routing from `(method, path)` pairs to board operations.

use axum::http::Method;

/// Path prefix whose requests are delegated to the static file collaborator.
pub const STATIC_PREFIX: &str = "/static/";

/// Operations the adapter exposes over HTTP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Renders the full page.
    Home,
    /// Returns the complete board state as JSON.
    State,
    /// Advances one generation and stops auto-run.
    Step,
    /// Flips the cell named by the `x` and `y` form fields.
    Toggle,
    /// Kills every cell.
    Clear,
    /// Refills the board randomly.
    Randomize,
    /// Starts or stops auto-run.
    ToggleAutoRun,
    /// Advances one generation when auto-run is enabled.
    AutoStep,
    /// Returns the step counter as text.
    StepCount,
    /// Returns the status line.
    Status,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Route {
    method: Method,
    path: &'static str,
    operation: Operation,
}

/// Outcome of resolving a request against the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'p> {
    /// A registered route matched.
    Operation(Operation),
    /// The path carries the static prefix; holds the remainder after it.
    Static(&'p str),
    /// Nothing matched.
    NotFound,
}

/// Ordered list of routes matched by byte-exact method and path equality.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    static_prefix: &'static str,
}

impl RouteTable {
    /// Creates an empty table that delegates `static_prefix` paths to static files.
    #[must_use]
    pub const fn new(static_prefix: &'static str) -> Self {
        Self {
            routes: Vec::new(),
            static_prefix,
        }
    }

    /// Table with every board operation registered.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new(STATIC_PREFIX);
        table.register(Method::GET, "/", Operation::Home);
        table.register(Method::GET, "/api/state", Operation::State);
        table.register(Method::POST, "/api/step", Operation::Step);
        table.register(Method::POST, "/api/toggle", Operation::Toggle);
        table.register(Method::POST, "/api/clear", Operation::Clear);
        table.register(Method::POST, "/api/random", Operation::Randomize);
        table.register(Method::POST, "/api/toggle-auto", Operation::ToggleAutoRun);
        table.register(Method::POST, "/api/auto-step", Operation::AutoStep);
        table.register(Method::GET, "/api/step-count", Operation::StepCount);
        table.register(Method::GET, "/api/status", Operation::Status);
        table
    }

    /// Appends a route. Earlier registrations win when two routes collide.
    pub fn register(&mut self, method: Method, path: &'static str, operation: Operation) {
        self.routes.push(Route {
            method,
            path,
            operation,
        });
    }

    /// Resolves a request line against the table.
    #[must_use]
    pub fn resolve<'p>(&self, method: &Method, path: &'p str) -> Resolution<'p> {
        if let Some(rest) = path.strip_prefix(self.static_prefix) {
            return Resolution::Static(rest);
        }

        self.routes
            .iter()
            .find(|route| route.method == *method && route.path == path)
            .map_or(Resolution::NotFound, |route| {
                Resolution::Operation(route.operation)
            })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
