//! String interning for struct tags and member names.
//!
//! Tags and member names are compared on every struct visit, so they are
//! stored once and handed out as `Symbol` handles. Comparing two symbols
//! from the same interner is an integer comparison and agrees with comparing
//! the strings themselves.

use std::collections::HashMap;

/// A lightweight handle to an interned string.
///
/// Symbols are only meaningful for the interner that produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symbol(u32);

/// Deduplicating string store.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: HashMap<Box<str>, Symbol>,
    strings: Vec<Box<str>>,
}

impl Interner {
    /// Intern a string, returning the existing Symbol if it was seen before.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.map.get(s) {
            return sym;
        }

        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(s.into());
        self.map.insert(s.into(), sym);
        sym
    }

    /// Resolve a Symbol back to its string.
    ///
    /// # Panics
    /// Panics if the symbol was not created by this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}
