//! Compile time dependency injection.
//!
//! Services are plain generic structs deriving [`Build`]. A provider (see
//! [`provider!`]) holds the values that cannot be built from other values,
//! like configuration or the storage handle, and caches every value it built
//! so each service exists only once per provider.

#[cfg(test)]
extern crate self as portfolio_di;

pub use portfolio_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Cache of values that have already been built by this provider.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}
