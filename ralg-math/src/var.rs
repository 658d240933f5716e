//! Polynomial variables and the fresh-variable pool.

use lasso::{Rodeo, Spur};
use parking_lot::Mutex;
use std::sync::OnceLock;

/// Variable identifier for polynomials.
pub type Var = u32;

/// First variable handed out by the process-wide pool.
///
/// Ids below this are free for callers that number variables themselves.
pub const GLOBAL_VAR_BASE: Var = 1 << 20;

/// Allocator of unique, named variables.
///
/// Every call to [`VariablePool::fresh`] returns a variable that was never
/// returned before by the same pool. Names are interned and need not be
/// unique; two variables may share a human-readable name.
#[derive(Debug, Default)]
pub struct VariablePool {
    names: Rodeo,
    vars: Vec<Spur>,
    base: Var,
}

impl VariablePool {
    /// Create an empty pool numbering variables from 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pool numbering variables from `base`.
    pub fn with_base(base: Var) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Allocate a fresh variable with the given name.
    pub fn fresh(&mut self, name: &str) -> Var {
        let spur = self.names.get_or_intern(name);
        let var = self.base + self.vars.len() as Var;
        self.vars.push(spur);
        var
    }

    /// Name of a variable allocated by this pool.
    pub fn name(&self, var: Var) -> Option<&str> {
        let index = var.checked_sub(self.base)?;
        self.vars
            .get(index as usize)
            .map(|spur| self.names.resolve(spur))
    }

    /// Number of variables allocated so far.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if no variable has been allocated.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn global() -> &'static Mutex<VariablePool> {
        static POOL: OnceLock<Mutex<VariablePool>> = OnceLock::new();
        POOL.get_or_init(|| Mutex::new(VariablePool::with_base(GLOBAL_VAR_BASE)))
    }

    /// Allocate a fresh variable from the process-wide pool.
    ///
    /// The result is at least [`GLOBAL_VAR_BASE`].
    pub fn global_fresh(name: &str) -> Var {
        Self::global().lock().fresh(name)
    }

    /// Name of a variable allocated from the process-wide pool.
    pub fn global_name(var: Var) -> Option<String> {
        Self::global().lock().name(var).map(str::to_owned)
    }
}
