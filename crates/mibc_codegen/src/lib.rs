//! Two-pass code generation for parsed SMI modules.
//!
//! The [`symtable::SymbolTableBuilder`] first pass lowers a module's AST
//! into a symbol table: every declared name with its kind, partially
//! resolved OID and normalized syntax reference. The
//! [`jsondoc::DocumentGenerator`] second pass consumes the AST together
//! with the symbol tables of the module and all of its imports and emits a
//! structured JSON document describing the module's managed objects, types,
//! notifications, groups and compliances.
//!
//! Both passes are pure with respect to their inputs: a driver may compile
//! modules in parallel as long as each pass instance owns its module's run.

pub mod error;
pub mod imports;
pub mod index;
pub mod jsondoc;
pub mod literal;
pub mod oid;
pub mod symtable;

pub use error::{CodegenError, SemanticError};
pub use imports::ImportRewrites;
pub use jsondoc::DocumentGenerator;
pub use symtable::{Symbol, SymbolKind, SymbolTable, SymbolTableBuilder, SymbolTableSet};

/// Summary of one compiled module: its canonical name and the modules it
/// imports.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MibInfo {
    pub name: String,
    pub imported: Vec<String>,
}

/// Document generation options.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Emit description/contact/organization/lastupdated/units texts.
    pub gen_texts: bool,
    /// Comment lines recorded in the document's `meta` block.
    pub comments: Option<Vec<String>>,
}
