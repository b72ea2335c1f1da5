//! Symbolic OID references and their resolution to numeric form.

use rustc_hash::FxHashSet;

use crate::error::SemanticError;
use crate::symtable::SymbolTableSet;

/// One piece of a partially resolved OID.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OidPiece {
    Number(u32),
    /// Reference to a value declared in `module`.
    Symbol { name: String, module: String },
}

impl OidPiece {
    pub fn symbol(name: impl Into<String>, module: impl Into<String>) -> OidPiece {
        OidPiece::Symbol {
            name: name.into(),
            module: module.into(),
        }
    }
}

impl From<u32> for OidPiece {
    fn from(value: u32) -> OidPiece {
        OidPiece::Number(value)
    }
}

/// An OID whose leading pieces may still refer to symbols in this or other
/// modules. Stored in symbol-table entries; fully resolvable once every
/// referenced module's table is available.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolicOid(pub Vec<OidPiece>);

impl SymbolicOid {
    pub fn pieces(&self) -> &[OidPiece] {
        &self.0
    }

    /// The OID of a direct child arc.
    pub fn child(&self, arc: u32) -> SymbolicOid {
        let mut pieces = self.0.clone();
        pieces.push(OidPiece::Number(arc));
        SymbolicOid(pieces)
    }

    /// Expands every symbolic piece left to right into numeric arcs.
    ///
    /// `iso` is the terminal base case and resolves to `1` without a table
    /// lookup. Unknown modules or symbols and reference cycles are semantic
    /// errors.
    pub fn resolve(&self, tables: &SymbolTableSet) -> Result<Vec<u32>, SemanticError> {
        let mut arcs = Vec::new();
        let mut visited = FxHashSet::default();
        self.resolve_into(tables, &mut visited, &mut arcs)?;
        Ok(arcs)
    }

    fn resolve_into(
        &self,
        tables: &SymbolTableSet,
        visited: &mut FxHashSet<(String, String)>,
        arcs: &mut Vec<u32>,
    ) -> Result<(), SemanticError> {
        for piece in &self.0 {
            match piece {
                OidPiece::Number(arc) => arcs.push(*arc),
                OidPiece::Symbol { name, module } => {
                    if name == "iso" {
                        arcs.push(1);
                        continue;
                    }
                    if !visited.insert((module.clone(), name.clone())) {
                        return Err(SemanticError::OidCycle {
                            module: module.clone(),
                            name: name.clone(),
                        });
                    }
                    let symbol = tables.expect_symbol(module, name)?;
                    let parent = symbol.oid.as_ref().ok_or_else(|| SemanticError::MissingOid {
                        module: module.clone(),
                        name: name.clone(),
                    })?;
                    parent.resolve_into(tables, visited, arcs)?;
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<OidPiece> for SymbolicOid {
    fn from_iter<I: IntoIterator<Item = OidPiece>>(iter: I) -> SymbolicOid {
        SymbolicOid(iter.into_iter().collect())
    }
}

/// Joins resolved arcs with dots: `1.3.6.1`.
pub fn dotted(arcs: &[u32]) -> String {
    let mut out = String::new();
    for (position, arc) in arcs.iter().enumerate() {
        if position > 0 {
            out.push('.');
        }
        out.push_str(&arc.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symtable::{Symbol, SymbolKind, SymbolTable, SymbolTableSet};

    fn table_with(entries: &[(&str, SymbolicOid)]) -> SymbolTable {
        let mut table = SymbolTable::default();
        for (name, oid) in entries {
            table.insert_for_tests(
                (*name).to_string(),
                Symbol {
                    orig_name: (*name).to_string(),
                    kind: SymbolKind::MibIdentifier,
                    oid: Some(oid.clone()),
                    syntax: None,
                    defval: None,
                },
            );
        }
        table
    }

    #[test]
    fn iso_is_terminal() {
        let tables = SymbolTableSet::default();
        let oid = SymbolicOid(vec![OidPiece::symbol("iso", "TEST-MIB"), 3.into()]);
        assert_eq!(oid.resolve(&tables), Ok(vec![1, 3]));
    }

    #[test]
    fn nested_symbol_resolution() {
        let mut tables = SymbolTableSet::default();
        tables.insert(
            "TEST-MIB",
            table_with(&[
                (
                    "a",
                    SymbolicOid(vec![OidPiece::symbol("iso", "TEST-MIB"), 3.into()]),
                ),
                (
                    "b",
                    SymbolicOid(vec![OidPiece::symbol("a", "TEST-MIB"), 6.into()]),
                ),
            ]),
        );
        let oid = SymbolicOid(vec![OidPiece::symbol("b", "TEST-MIB"), 1.into()]);
        assert_eq!(oid.resolve(&tables), Ok(vec![1, 3, 6, 1]));
    }

    #[test]
    fn unknown_module_fails() {
        let tables = SymbolTableSet::default();
        let oid = SymbolicOid(vec![OidPiece::symbol("mgmt", "NO-SUCH-MIB")]);
        assert_eq!(
            oid.resolve(&tables),
            Err(SemanticError::UnknownModule("NO-SUCH-MIB".to_string()))
        );
    }

    #[test]
    fn cycle_is_detected() {
        let mut tables = SymbolTableSet::default();
        tables.insert(
            "TEST-MIB",
            table_with(&[
                (
                    "a",
                    SymbolicOid(vec![OidPiece::symbol("b", "TEST-MIB"), 1.into()]),
                ),
                (
                    "b",
                    SymbolicOid(vec![OidPiece::symbol("a", "TEST-MIB"), 2.into()]),
                ),
            ]),
        );
        let oid = SymbolicOid(vec![OidPiece::symbol("a", "TEST-MIB")]);
        assert!(matches!(
            oid.resolve(&tables),
            Err(SemanticError::OidCycle { .. })
        ));
    }

    #[test]
    fn dotted_rendering() {
        assert_eq!(dotted(&[1, 3, 6, 1, 2]), "1.3.6.1.2");
        assert_eq!(dotted(&[]), "");
    }
}
