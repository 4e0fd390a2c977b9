use super::NativeSolver;
use crate::solver::SettingsError;
use std::fmt;
use std::sync::Arc;

/// The set of native solver backends a [`SparseSolver`](crate::solver::SparseSolver)
/// may use.
///
/// Backends are registered explicitly, typically once at startup after the
/// native library has been loaded, and the registry is then handed to
/// [`SparseSolver::new`](crate::solver::SparseSolver::new).   Nothing is
/// discovered from process-wide state.
///
/// Registration order matters: `"auto"` resolves to the first backend
/// registered.
#[derive(Clone, Default)]
pub struct SolverAvailability {
    backends: Vec<Arc<dyn NativeSolver>>,
}

impl SolverAvailability {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style [`register`](Self::register).
    pub fn with_backend(mut self, backend: impl NativeSolver + 'static) -> Self {
        self.register(Arc::new(backend));
        self
    }

    /// Adds a backend.   A backend already registered under the same name
    /// is replaced, keeping its position.
    pub fn register(&mut self, backend: Arc<dyn NativeSolver>) {
        match self.backends.iter().position(|b| b.name() == backend.name()) {
            Some(k) => self.backends[k] = backend,
            None => self.backends.push(backend),
        }
    }

    /// The backend registered as `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<dyn NativeSolver>> {
        self.backends.iter().find(|b| b.name() == name).cloned()
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.backends.iter().any(|b| b.name() == name)
    }

    /// Names of all registered backends, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Resolves a `direct_solve_method` setting to a backend.
    ///
    /// `"auto"` selects the first registered backend.   Any other value
    /// must name a registered backend.
    pub fn resolve(&self, method: &str) -> Result<Arc<dyn NativeSolver>, SettingsError> {
        let found = match method {
            "auto" => self.backends.first().cloned(),
            _ => self.get(method),
        };
        found.ok_or_else(|| SettingsError::LinearSolverProblem {
            solver: method.to_string(),
            problem: "not available",
        })
    }
}

impl fmt::Debug for SolverAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
