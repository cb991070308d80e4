//! The rendering-environment boundary.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Receives effective colors as named style variables.
///
/// The engine pushes every role's value through this after each state
/// change. Implementations decide what "live" means: a UI would update
/// its stylesheet, tests record the calls.
pub trait StyleTarget {
    /// Set variable `name` (e.g. `"--primary"`) to `value` (`"H S% L%"`).
    fn set_variable(&mut self, name: &str, value: &str);
}

/// Discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTarget;

impl StyleTarget for NullTarget {
    fn set_variable(&mut self, _name: &str, _value: &str) {}
}

/// Records updates in a shared map.
///
/// Clones share the same storage, so a caller can keep a handle for
/// reading while the engine owns the target.
#[derive(Debug, Clone, Default)]
pub struct VariableMap {
    variables: Rc<RefCell<BTreeMap<String, String>>>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value set for `name`, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        self.variables.borrow().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.variables.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.borrow().is_empty()
    }
}

impl StyleTarget for VariableMap {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}
