use crate::core::destination::{DestinationContext, DestinationKind, Host};
use crate::core::dispatcher::{InsertError, InsertionDispatcher, InsertionOutcome, Notifier};
use crate::core::registry::{display_slice, Category, SymbolRegistry};

/// Entry points offered to a host UI: list categories, list symbols, insert
///
/// The registry and dispatcher are injected so tests and hosts can build a
/// palette without any global state.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    registry: SymbolRegistry,
    dispatcher: InsertionDispatcher,
}

impl Palette {
    pub fn new(registry: SymbolRegistry, dispatcher: InsertionDispatcher) -> Self {
        Self {
            registry,
            dispatcher,
        }
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// The fixed category enumeration, for populating a selector
    pub fn categories(&self) -> &[Category] {
        self.registry.categories()
    }

    /// Symbols for a category key; empty for unknown keys
    pub fn symbols(&self, category: &str) -> &'static [&'static str] {
        self.registry.lookup(category)
    }

    /// The part of a category a palette grid shows
    pub fn displayed_symbols(&self, category: &str, limit: usize) -> &'static [&'static str] {
        display_slice(self.registry.lookup(category), limit)
    }

    /// Inserts `symbol` into the destination described by `context`
    pub fn insert_symbol<H>(
        &self,
        host: &mut H,
        context: &DestinationContext,
        symbol: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<InsertionOutcome, InsertError>
    where
        H: Host + ?Sized,
    {
        self.dispatcher.insert(host, context, symbol, notifier)
    }

    /// Derives a fresh context from the host and inserts into it
    ///
    /// `kind` overrides the host's active destination when given.
    pub fn insert_into_host<H>(
        &self,
        host: &mut H,
        kind: Option<DestinationKind>,
        symbol: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<InsertionOutcome, InsertError>
    where
        H: Host + ?Sized,
    {
        let context = match kind {
            Some(kind) => host.context_for(kind),
            None => host.destination_context(),
        };
        self.insert_symbol(host, &context, symbol, notifier)
    }
}
