// crates/core/src/functions.rs
use std::collections::HashMap;

use char_stats_shared_kernel::{DomainError, DomainResult};

type BoxedFn<T, R> = Box<dyn Fn(T) -> R + Send + Sync>;

/// Registry of named unary functions.
///
/// Registration is last-wins, so callers can shadow a stock function
/// with their own under the same name.
pub struct FunctionMap<T, R> {
    functions: HashMap<String, BoxedFn<T, R>>,
}

impl<T, R> FunctionMap<T, R> {
    #[must_use]
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    /// Registers `function` under `name`, replacing any previous entry.
    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        function: impl Fn(T) -> R + Send + Sync + 'static,
    ) {
        self.functions.insert(name.into(), Box::new(function));
    }

    /// Looks up the function registered under `name`.
    pub fn get(&self, name: &str) -> DomainResult<&(dyn Fn(T) -> R + Send + Sync)> {
        self.functions
            .get(name)
            .map(|function| function.as_ref())
            .ok_or_else(|| DomainError::UnknownFunction { name: name.to_string() })
    }

    /// Applies the function registered under `name` to `input`.
    pub fn apply(&self, name: &str, input: T) -> DomainResult<R> {
        Ok(self.get(name)?(input))
    }

    /// Registered names, sorted for stable listing.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<T, R> Default for FunctionMap<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// The stock integer functions.
///
/// All arithmetic saturates at the `i64` limits instead of wrapping.
#[must_use]
pub fn int_function_map() -> FunctionMap<i64, i64> {
    let mut map = FunctionMap::new();
    map.add_function("abs", |n: i64| n.saturating_abs());
    map.add_function("sgn", |n: i64| n.signum());
    map.add_function("increment", |n: i64| n.saturating_add(1));
    map.add_function("decrement", |n: i64| n.saturating_sub(1));
    map.add_function("square", |n: i64| n.saturating_mul(n));
    map
}
