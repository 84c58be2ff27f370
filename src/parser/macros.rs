//! `#define` bindings collected during one parse
//!
//! The table is owned by a single parser instance and only grows: there is
//! no `#undef` handling because conditional compilation is never evaluated.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

/// One `#define`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroDefinition {
    pub name: SmolStr,
    /// Replacement text with whitespace collapsed
    pub value: String,
    /// Parameter names for function-like macros
    pub params: Option<Vec<SmolStr>>,
}

impl MacroDefinition {
    pub fn object(name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            params: None,
        }
    }

    pub fn function(
        name: impl Into<SmolStr>,
        params: Vec<SmolStr>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            params: Some(params),
        }
    }

    pub fn is_function_like(&self) -> bool {
        self.params.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MacroTable {
    defines: FxHashMap<SmolStr, MacroDefinition>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition; a later `#define` of the same name wins
    pub fn define(&mut self, definition: MacroDefinition) {
        tracing::debug!(
            name = %definition.name,
            value = %definition.value,
            function_like = definition.is_function_like(),
            "macro defined"
        );
        self.defines.insert(definition.name.clone(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&MacroDefinition> {
        self.defines.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.defines.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.defines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MacroDefinition> {
        self.defines.values()
    }

    /// Textual replacement for an identifier.
    ///
    /// Unknown names and function-like macros resolve to themselves. When a
    /// value is itself the name of a macro, resolution follows the chain; a
    /// cycle stops at the first repeated name, which is returned literally.
    pub fn resolve<'s>(&'s self, name: &'s str) -> &'s str {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut current = name;
        loop {
            if !visited.insert(current) {
                return current;
            }
            let Some(def) = self.defines.get(current) else {
                return current;
            };
            if def.is_function_like() {
                return current;
            }
            if self.defines.contains_key(def.value.as_str()) {
                current = def.value.as_str();
            } else {
                return def.value.as_str();
            }
        }
    }
}
