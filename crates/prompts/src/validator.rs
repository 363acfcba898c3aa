//! Validator contract: the caller's hook between recognition and the value a prompt returns.
//!
//! A prompt calls its validator exactly once per `recognize()`, passing `Some(candidate)` when
//! recognition succeeded and `None` when it did not. Whatever the validator returns is the final
//! result; `None` tells the caller to re-prompt.

use async_trait::async_trait;
use std::marker::PhantomData;
use turn_core::{Result, Turn};

/// Accepts, rejects, or transforms a recognized candidate. May send activities through `turn`
/// (e.g. a custom "I didn't understand" reply).
#[async_trait]
pub trait Validator<T: Send>: Send + Sync {
    async fn validate(&self, turn: &dyn Turn, candidate: Option<T>) -> Result<Option<T>>;
}

/// Default validator: returns the candidate unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

#[async_trait]
impl<T: Send + 'static> Validator<T> for PassThrough {
    async fn validate(&self, _turn: &dyn Turn, candidate: Option<T>) -> Result<Option<T>> {
        Ok(candidate)
    }
}

/// Adapts a synchronous closure into a [`Validator`].
pub struct FnValidator<T, F> {
    f: F,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, F> FnValidator<T, F>
where
    F: Fn(&dyn Turn, Option<T>) -> Option<T> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T, F> Validator<T> for FnValidator<T, F>
where
    T: Send + 'static,
    F: Fn(&dyn Turn, Option<T>) -> Option<T> + Send + Sync,
{
    async fn validate(&self, turn: &dyn Turn, candidate: Option<T>) -> Result<Option<T>> {
        Ok((self.f)(turn, candidate))
    }
}
