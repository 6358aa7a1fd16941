//! Per-function symbol table
//!
//! A [`SymbolTable`] maps each variable name to the last value assigned to
//! it. One table is created empty for every function that is interpreted and
//! handed back to the caller when the function completes; nothing is shared
//! between functions.

use super::value::Value;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    vars: FxHashMap<String, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Insert or overwrite; returns the value previously bound to `name`
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.vars.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Variables sorted by name
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut vars: Vec<_> = self.iter().collect();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for (name, value) in iter {
            table.set(name, value);
        }
        table
    }
}
