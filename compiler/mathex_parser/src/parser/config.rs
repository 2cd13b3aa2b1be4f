use std::collections::HashMap;

/// Values substituted for letters while parsing, keyed by letter name.
pub type Bindings = HashMap<String, f64>;

/// Maximum allowed nesting depth to prevent stack overflow
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 100;

/// Maximum height of a parsed tree, bounding chains such as `1 + 1 + ... + 1`
pub const DEFAULT_MAX_TREE_DEPTH: usize = 1_000;

/// How a chain of `^` operators groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Associativity {
    /// `a^b^c` parses as `(a^b)^c`
    #[default]
    Left,
    /// `a^b^c` parses as `a^(b^c)`
    Right,
}

/// Configuration for a [`Parser`](crate::parser::Parser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested groupings, signs, functions and
    /// right-associative powers before parsing fails
    pub max_depth: usize,
    /// Maximum height of the resulting tree, a lone leaf being height 1
    pub max_tree_depth: usize,
    /// Grouping of repeated `^`
    pub power_associativity: Associativity,
    /// Read a letter directly followed by a number as an indexed letter
    pub indexed_letters: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
            power_associativity: Associativity::Left,
            indexed_letters: false,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }

    pub fn with_power_associativity(mut self, associativity: Associativity) -> Self {
        self.power_associativity = associativity;
        self
    }

    pub fn with_indexed_letters(mut self, enabled: bool) -> Self {
        self.indexed_letters = enabled;
        self
    }
}
