//! Stack growth guard for tree-walking evaluation.
//!
//! The evaluator recurses once per syntax-tree level, so a pathologically
//! nested expression (`-(-(-(...)))` a few hundred thousand deep) would
//! overflow a fixed-size thread stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves the evaluation onto a freshly allocated
//! segment whenever the remaining stack drops below the red zone.
//!
//! On `wasm32` the guard is a plain call; the host engine owns the stack.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn eval_expression(&mut self, expr: &Expression) -> EvalResult {
///     ensure_sufficient_stack(|| match expr {
///         // ... recursive evaluation ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
