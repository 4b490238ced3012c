//! Caller-owned pluggable provider registry.
//!
//! A [`ProviderRegistry`] maps a provider *type* to the factory that builds
//! it. The registry is an ordinary value: construct it, register factories,
//! and pass it by reference to whatever needs to resolve providers. There is
//! no process-wide registry and no hidden state.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Builds providers of type `T` from string arguments.
///
/// The arguments typically carry a selection hint (which concrete provider
/// to build) followed by provider-specific parameters; a factory may return
/// `None` when it cannot build anything from them.
pub trait ProviderFactory<T> {
    fn create(&self, args: &[&str]) -> Option<T>;
}

/// A type-keyed registry of provider factories.
///
/// ```
/// use velarium::provider::{ProviderFactory, ProviderRegistry};
///
/// struct Greeter(String);
///
/// struct GreeterFactory;
/// impl ProviderFactory<Greeter> for GreeterFactory {
///     fn create(&self, args: &[&str]) -> Option<Greeter> {
///         Some(Greeter(args.first().unwrap_or(&"hello").to_string()))
///     }
/// }
///
/// let mut registry = ProviderRegistry::new();
/// registry.set(GreeterFactory);
/// let greeter: Greeter = registry.resolve(&["hi"]).unwrap();
/// assert_eq!(greeter.0, "hi");
/// ```
#[derive(Default)]
pub struct ProviderRegistry {
    factories: HashMap<TypeId, Box<dyn Any>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ProviderRegistry::default()
    }

    /// Register the factory for `T`, replacing any previous one.
    pub fn set<T: 'static>(&mut self, factory: impl ProviderFactory<T> + 'static) {
        self.factories.insert(TypeId::of::<T>(), Box::new(Box::new(factory) as Box<dyn ProviderFactory<T>>));
    }

    /// Drop the factory for `T`, reporting whether one was registered.
    pub fn remove<T: 'static>(&mut self) -> bool {
        self.factories.remove(&TypeId::of::<T>()).is_some()
    }

    /// Build a `T` through its registered factory.
    ///
    /// `None` when no factory is registered for `T`, or when the factory
    /// declines the arguments.
    pub fn resolve<T: 'static>(&self, args: &[&str]) -> Option<T> {
        let factory = self.factories.get(&TypeId::of::<T>())?;
        factory.downcast_ref::<Box<dyn ProviderFactory<T>>>()?.create(args)
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry").field("registered", &self.factories.len()).finish()
    }
}
