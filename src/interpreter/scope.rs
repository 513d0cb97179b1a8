use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::Value};

/// A shared handle to a scope.
///
/// Scopes are shared between the evaluator and every function value that
/// captured them, so they live behind `Rc<RefCell<_>>`: the chain stays
/// alive as long as any closure can still reach it, and a mutation through
/// one handle is visible through all of them.
pub type ScopeRef = Rc<RefCell<Scope>>;

/// How a name was introduced into a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// Introduced by `const`; assignment is a fatal error.
    Const,
    /// Introduced by `let`; freely reassignable.
    Let,
    /// Introduced by a named function literal; reassignable like `let`.
    Func,
}

/// A bound value together with its binding discipline.
#[derive(Debug, Clone)]
struct Binding {
    value: Value,
    kind:  BindingKind,
}

/// One node of the lexical scope chain.
///
/// Lookup walks from the innermost scope outward and returns the first hit.
/// Declarations always land in the innermost scope; assignment mutates the
/// scope that owns the binding, wherever it sits on the chain.
#[derive(Debug, Default)]
pub struct Scope {
    values: HashMap<String, Binding>,
    parent: Option<ScopeRef>,
}

impl Scope {
    /// Creates a fresh root scope.
    #[must_use]
    pub fn new() -> ScopeRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a fresh scope whose lookups fall through to `parent`.
    #[must_use]
    pub fn child_of(parent: &ScopeRef) -> ScopeRef {
        Rc::new(RefCell::new(Self { values: HashMap::new(),
                                    parent: Some(Rc::clone(parent)), }))
    }

    /// Looks a name up along the chain, innermost first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.values.get(name) {
            Some(binding) => Some(binding.value.clone()),
            None => self.parent.as_ref().and_then(|p| p.borrow().get(name)),
        }
    }

    /// Inserts a binding into this scope, shadowing any binding of the same
    /// name further out on the chain.
    pub fn declare(&mut self, name: &str, value: Value, kind: BindingKind) {
        self.values.insert(name.to_string(), Binding { value, kind });
    }

    /// Replaces the value of an existing binding, preserving its kind.
    ///
    /// Walks the chain to the scope that owns the binding and mutates it in
    /// place, so closures observing an outer scope see the new value.
    ///
    /// # Errors
    /// - [`RuntimeError::ConstReassignment`] if the binding is a `const`.
    /// - [`RuntimeError::UndefinedVariable`] if no scope binds the name.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> Result<(), RuntimeError> {
        if let Some(binding) = self.values.get_mut(name) {
            if binding.kind == BindingKind::Const {
                return Err(RuntimeError::ConstReassignment { name: name.to_string(),
                                                             line });
            }
            binding.value = value;
            return Ok(());
        }

        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value, line),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }
}
