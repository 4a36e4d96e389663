use std::collections::HashMap;

use crate::ast::{FunctionDef, Node};

/// Name bindings for one interpreter run.
///
/// Functions map to their definitions and variables map to the node of their
/// initializer, which is never evaluated. Names are unique; defining a name
/// again replaces the earlier binding.
#[derive(Debug, Default)]
pub struct Environment<'a> {
    functions: HashMap<&'a str, &'a FunctionDef<'a>>,
    variables: HashMap<&'a str, &'a Node<'a>>,
}

impl<'a> Environment<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a function definition, returning the previous one.
    pub fn define_function(&mut self,
                           name: &'a str,
                           def: &'a FunctionDef<'a>)
                           -> Option<&'a FunctionDef<'a>> {
        self.functions.insert(name, def)
    }

    #[must_use]
    pub fn function(&self, name: &str) -> Option<&'a FunctionDef<'a>> {
        self.functions.get(name).copied()
    }

    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Binds `name` to an initializer node, returning the previous one.
    pub fn define_variable(&mut self, name: &'a str, value: &'a Node<'a>) -> Option<&'a Node<'a>> {
        self.variables.insert(name, value)
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&'a Node<'a>> {
        self.variables.get(name).copied()
    }
}
