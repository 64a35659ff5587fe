//! Stack growth for deeply nested expressions.
//!
//! Parenthesized expressions and `!`/`&` prefixes recurse; pathological
//! nesting must not overflow the native stack.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: no-op passthrough.

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
