//! First pass: builds the per-module symbol table.
//!
//! Every declared name gets an entry carrying its kind, partially resolved
//! OID and syntax reference. Symbols whose parents are not yet known are
//! postponed and woken when the missing name is admitted (or recorded as a
//! conceptual-table row); whatever is still postponed at the end of the
//! module is a semantic error.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use mibc_smi_ast::{
    Constraint, DefVal, Declaration, Module, ObjectType, ObjectTypeSyntax, Oid, OidElement,
    PlainSyntax, TypeDeclaration, TypeSpec, ValueRange,
};

use crate::MibInfo;
use crate::error::SemanticError;
use crate::imports::{self, ImportRewrites, SYMTABLE_CONST_IMPORTS};
use crate::literal::{eval_int, safe_identifier};
use crate::oid::{OidPiece, SymbolicOid};

/// Base ASN.1 types every textual-convention chain bottoms out in.
pub(crate) const BASE_TYPES: &[&str] =
    &["Integer", "Integer32", "Bits", "ObjectIdentifier", "OctetString"];

/// Type-name promotions applied while lowering syntax references. Includes
/// the SMIv1 application-type spellings and a few legacy renames carried
/// over from pre-SMIv2 modules.
const TYPE_CLASSES: &[(&str, &str)] = &[
    ("COUNTER32", "Counter32"),
    ("COUNTER64", "Counter64"),
    ("GAUGE32", "Gauge32"),
    ("INTEGER", "Integer32"),
    ("INTEGER32", "Integer32"),
    ("IPADDRESS", "IpAddress"),
    ("NETWORKADDRESS", "IpAddress"),
    ("OBJECT IDENTIFIER", "ObjectIdentifier"),
    ("OCTET STRING", "OctetString"),
    ("OPAQUE", "Opaque"),
    ("TIMETICKS", "TimeTicks"),
    ("UNSIGNED32", "Unsigned32"),
    ("Counter", "Counter32"),
    ("Gauge", "Gauge32"),
    ("NetworkAddress", "IpAddress"),
    ("nullSpecific", "zeroDotZero"),
    ("ipRoutingTable", "ipRouteTable"),
    ("snmpEnableAuthTraps", "snmpEnableAuthenTraps"),
];

/// Bare type names an SMIv1 `INDEX` clause may use in place of a column.
pub(crate) const SMIV1_INDEX_TYPES: &[&str] =
    &["INTEGER", "OCTET STRING", "IPADDRESS", "NETWORKADDRESS"];

pub(crate) const FAKE_COLUMN_PREFIX: &str = "pysmiFakeCol";
const FAKE_COLUMN_START: u32 = 1000;

pub(crate) fn promote_type(name: &str) -> &str {
    TYPE_CLASSES
        .iter()
        .find(|(from, _)| *from == name)
        .map_or(name, |(_, to)| *to)
}

fn is_table_token(name: &str) -> bool {
    matches!(name, "MibTable" | "MibTableRow" | "MibTableColumn")
}

/// What a symbol-table entry stands for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SymbolKind {
    ModuleIdentity,
    ObjectType,
    ObjectIdentity,
    NotificationType,
    ObjectGroup,
    NotificationGroup,
    ModuleCompliance,
    AgentCapabilities,
    TypeDeclaration,
    MibIdentifier,
    /// Column synthesized for an SMIv1 bare-type `INDEX` entry.
    FakeColumn,
}

/// A type reference: the type name plus the module it resolves in. Base
/// types and the built-in table tokens carry an empty module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeRef {
    pub name: String,
    pub module: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> TypeRef {
        TypeRef {
            name: name.into(),
            module: module.into(),
        }
    }

    pub fn builtin(name: impl Into<String>) -> TypeRef {
        TypeRef {
            name: name.into(),
            module: String::new(),
        }
    }
}

/// Subtype constraint carried in a symbol-table entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxConstraint {
    /// Enumeration members or `BITS` positions.
    NamedValues(Vec<(String, i64)>),
    Ranges(Vec<(i64, i64)>),
    Sizes(Vec<(i64, i64)>),
}

/// A lowered syntax reference: `((type, module), constraint)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymbolSyntax {
    pub ty: TypeRef,
    pub constraint: Option<SyntaxConstraint>,
}

/// One symbol-table entry. Created by the builder, never mutated after.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Symbol {
    /// Name as written in the source.
    pub orig_name: String,
    pub kind: SymbolKind,
    /// Absent only for type declarations.
    pub oid: Option<SymbolicOid>,
    pub syntax: Option<SymbolSyntax>,
    /// Raw `DEFVAL` payload, kept for downstream consumers.
    pub defval: Option<DefVal>,
}

/// Symbol table of one module: entries keyed by normalized name, plus the
/// declaration order and the row/column bookkeeping the document pass needs.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, Symbol>,
    order: Vec<String>,
    rows: IndexSet<String>,
    cols: IndexMap<String, String>,
}

impl SymbolTable {
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Registered names in declaration order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn is_row(&self, name: &str) -> bool {
        self.rows.contains(name)
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    /// Columns of every row type, with their declared types.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cols
            .iter()
            .map(|(name, ty)| (name.as_str(), ty.as_str()))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn insert_for_tests(&mut self, name: String, symbol: Symbol) {
        self.order.push(name.clone());
        self.symbols.insert(name, symbol);
    }
}

/// Symbol tables of every module visible to a compilation: the module being
/// generated plus everything it transitively imports.
#[derive(Debug, Default)]
pub struct SymbolTableSet {
    tables: FxHashMap<String, SymbolTable>,
}

impl SymbolTableSet {
    pub fn insert(&mut self, module: impl Into<String>, table: SymbolTable) {
        self.tables.insert(module.into(), table);
    }

    pub fn get(&self, module: &str) -> Option<&SymbolTable> {
        self.tables.get(module)
    }

    pub(crate) fn expect_module(&self, module: &str) -> Result<&SymbolTable, SemanticError> {
        self.tables
            .get(module)
            .ok_or_else(|| SemanticError::UnknownModule(module.to_string()))
    }

    pub(crate) fn expect_symbol(&self, module: &str, name: &str) -> Result<&Symbol, SemanticError> {
        self.expect_module(module)?
            .get(name)
            .ok_or_else(|| SemanticError::UnknownSymbol {
                module: module.to_string(),
                name: name.to_string(),
            })
    }

    /// Follows a textual-convention chain down to its base ASN.1 type,
    /// merging subtype constraints along the way. Cycles are semantic
    /// errors.
    pub fn base_type(&self, name: &str, module: &str) -> Result<SymbolSyntax, SemanticError> {
        let mut visited = FxHashSet::default();
        self.base_type_inner(name, module, &mut visited)
    }

    fn base_type_inner(
        &self,
        name: &str,
        module: &str,
        visited: &mut FxHashSet<(String, String)>,
    ) -> Result<SymbolSyntax, SemanticError> {
        let symbol = self.expect_symbol(module, name)?;
        let syntax = symbol
            .syntax
            .as_ref()
            .filter(|syntax| !syntax.ty.name.is_empty())
            .ok_or_else(|| SemanticError::UnknownType(name.to_string()))?;
        if BASE_TYPES.contains(&syntax.ty.name.as_str()) {
            return Ok(syntax.clone());
        }
        if !visited.insert((syntax.ty.module.clone(), syntax.ty.name.clone())) {
            return Err(SemanticError::TypeCycle {
                module: syntax.ty.module.clone(),
                name: syntax.ty.name.clone(),
            });
        }
        let base = self.base_type_inner(&syntax.ty.name, &syntax.ty.module, visited)?;
        Ok(SymbolSyntax {
            ty: base.ty,
            constraint: merge_constraints(syntax.constraint.clone(), base.constraint),
        })
    }
}

/// Child constraints come first; a refinement without its own constraint
/// inherits the parent's.
fn merge_constraints(
    child: Option<SyntaxConstraint>,
    parent: Option<SyntaxConstraint>,
) -> Option<SyntaxConstraint> {
    use SyntaxConstraint::{NamedValues, Ranges, Sizes};
    match (child, parent) {
        (Some(NamedValues(mut child)), Some(NamedValues(parent))) => {
            child.extend(parent);
            Some(NamedValues(child))
        }
        (Some(Ranges(mut child)), Some(Ranges(parent))) => {
            child.extend(parent);
            Some(Ranges(child))
        }
        (Some(Sizes(mut child)), Some(Sizes(parent))) => {
            child.extend(parent);
            Some(Sizes(child))
        }
        (None, parent @ Some(_)) => parent,
        (child, _) => child,
    }
}

struct PendingSymbol {
    missing: FxHashSet<String>,
    symbol: Symbol,
}

/// Builds the symbol table for one module. Constructed per module; all
/// mutable state is owned by the builder and discarded with it.
pub struct SymbolTableBuilder {
    rewrites: ImportRewrites,
    module_name: String,
    /// Normalized symbol → source module, after SMIv2 rewriting and macro
    /// expansion.
    import_map: FxHashMap<String, String>,
    /// Every name that appeared as the symbolic head of an OID.
    parent_names: IndexSet<String>,
    postponed: IndexMap<String, PendingSymbol>,
    /// Missing parent name → postponed symbols waiting on it.
    waiters: FxHashMap<String, Vec<String>>,
    table: SymbolTable,
    fake_index: u32,
}

impl Default for SymbolTableBuilder {
    fn default() -> Self {
        SymbolTableBuilder::new()
    }
}

impl SymbolTableBuilder {
    pub fn new() -> SymbolTableBuilder {
        SymbolTableBuilder::with_rewrites(ImportRewrites::default())
    }

    pub fn with_rewrites(rewrites: ImportRewrites) -> SymbolTableBuilder {
        SymbolTableBuilder {
            rewrites,
            module_name: String::new(),
            import_map: FxHashMap::default(),
            parent_names: IndexSet::new(),
            postponed: IndexMap::new(),
            waiters: FxHashMap::default(),
            table: SymbolTable::default(),
            fake_index: FAKE_COLUMN_START,
        }
    }

    pub fn build(mut self, module: &Module) -> Result<(MibInfo, SymbolTable), SemanticError> {
        self.module_name = module.name.clone();

        let merged =
            imports::rewrite_imports(&module.imports, &self.rewrites, SYMTABLE_CONST_IMPORTS);
        let mut imported: Vec<String> = merged.keys().cloned().collect();
        imported.sort();
        for module_name in &imported {
            let mut seen = FxHashSet::default();
            for symbol in &merged[module_name] {
                if !seen.insert(symbol.as_str()) {
                    continue;
                }
                match imports::macro_expansion(symbol) {
                    Some(classes) => {
                        for class in classes {
                            self.import_map
                                .insert(safe_identifier(class), module_name.clone());
                        }
                    }
                    None => {
                        self.import_map
                            .insert(safe_identifier(symbol), module_name.clone());
                    }
                }
            }
        }

        for declaration in &module.declarations {
            self.lower_declaration(declaration)?;
        }

        if !self.postponed.is_empty() {
            return Err(SemanticError::UnresolvedSymbols(
                self.postponed.keys().cloned().collect(),
            ));
        }
        for parent in &self.parent_names {
            if !self.table.symbols.contains_key(parent) && !self.import_map.contains_key(parent) {
                return Err(SemanticError::UnknownParentSymbol(parent.clone()));
            }
        }

        debug!(
            module = %self.module_name,
            imported = imported.len(),
            symbols = self.table.order.len(),
            "built symbol table"
        );
        Ok((
            MibInfo {
                name: self.module_name,
                imported,
            },
            self.table,
        ))
    }

    fn lower_declaration(&mut self, declaration: &Declaration) -> Result<(), SemanticError> {
        match declaration {
            Declaration::ModuleIdentity(decl) => {
                self.register_plain(&decl.name, SymbolKind::ModuleIdentity, &decl.oid)
            }
            Declaration::ObjectIdentity(decl) => {
                self.register_plain(&decl.name, SymbolKind::ObjectIdentity, &decl.oid)
            }
            Declaration::NotificationType(decl) => {
                self.register_plain(&decl.name, SymbolKind::NotificationType, &decl.oid)
            }
            Declaration::NotificationGroup(decl) => {
                self.register_plain(&decl.name, SymbolKind::NotificationGroup, &decl.oid)
            }
            Declaration::ObjectGroup(decl) => {
                self.register_plain(&decl.name, SymbolKind::ObjectGroup, &decl.oid)
            }
            Declaration::ModuleCompliance(decl) => {
                self.register_plain(&decl.name, SymbolKind::ModuleCompliance, &decl.oid)
            }
            Declaration::AgentCapabilities(decl) => {
                self.register_plain(&decl.name, SymbolKind::AgentCapabilities, &decl.oid)
            }
            Declaration::ValueDeclaration(decl) => {
                self.register_plain(&decl.name, SymbolKind::MibIdentifier, &decl.oid)
            }
            Declaration::TrapType(decl) => {
                let mut oid = self.lower_oid(&decl.enterprise);
                oid.0.push(OidPiece::Number(0));
                oid.0.push(OidPiece::Number(decl.value));
                let symbol = Symbol {
                    orig_name: decl.name.clone(),
                    kind: SymbolKind::NotificationType,
                    oid: Some(oid),
                    syntax: None,
                    defval: None,
                };
                self.register(safe_identifier(&decl.name), symbol, &[])
            }
            Declaration::TypeDeclaration(decl) => self.lower_type_declaration(decl),
            Declaration::ObjectType(decl) => self.lower_object_type(decl),
        }
    }

    fn register_plain(&mut self, name: &str, kind: SymbolKind, oid: &Oid) -> Result<(), SemanticError> {
        let symbol = Symbol {
            orig_name: name.to_string(),
            kind,
            oid: Some(self.lower_oid(oid)),
            syntax: None,
            defval: None,
        };
        self.register(safe_identifier(name), symbol, &[])
    }

    fn lower_type_declaration(&mut self, decl: &TypeDeclaration) -> Result<(), SemanticError> {
        let syntax = match &decl.spec {
            TypeSpec::Sequence { columns } => {
                // The row's SEQUENCE declares the table's columns; the type
                // itself is not registered.
                for (column, ty) in columns {
                    self.table.cols.insert(column.clone(), ty.clone());
                }
                return Ok(());
            }
            TypeSpec::Syntax(plain) | TypeSpec::TextualConvention { syntax: plain, .. } => {
                self.lower_plain_syntax(plain)?
            }
        };
        let parents = vec![syntax.ty.name.clone()];
        let symbol = Symbol {
            orig_name: decl.name.clone(),
            kind: SymbolKind::TypeDeclaration,
            oid: None,
            syntax: Some(syntax),
            defval: None,
        };
        self.register(safe_identifier(&decl.name), symbol, &parents)
    }

    fn lower_object_type(&mut self, decl: &ObjectType) -> Result<(), SemanticError> {
        let oid = self.lower_oid(&decl.oid);
        let syntax = match &decl.syntax {
            ObjectTypeSyntax::Table { row } => {
                self.record_row(safe_identifier(row));
                SymbolSyntax {
                    ty: TypeRef::builtin("MibTable"),
                    constraint: None,
                }
            }
            ObjectTypeSyntax::Plain(plain) => self.lower_plain_syntax(plain)?,
        };

        let mut parents = vec![syntax.ty.name.clone()];
        if let Some(augments) = &decl.augments {
            parents.push(safe_identifier(augments));
        }

        for item in &decl.index {
            if !SMIV1_INDEX_TYPES.contains(&item.name.as_str()) {
                continue;
            }
            let fake_name = format!("{FAKE_COLUMN_PREFIX}{}", self.fake_index);
            let fake = Symbol {
                orig_name: fake_name.clone(),
                kind: SymbolKind::FakeColumn,
                oid: Some(oid.child(self.fake_index)),
                syntax: Some(self.simple_syntax(&item.name, None)?),
                defval: None,
            };
            self.register(fake_name, fake, &[])?;
            self.fake_index += 1;
        }

        let symbol = Symbol {
            orig_name: decl.name.clone(),
            kind: SymbolKind::ObjectType,
            oid: Some(oid),
            syntax: Some(syntax),
            defval: decl.defval.clone(),
        };
        self.register(safe_identifier(&decl.name), symbol, &parents)
    }

    /// A bare type reference either names a previously recorded row type or
    /// lowers as simple syntax.
    fn lower_plain_syntax(&mut self, plain: &PlainSyntax) -> Result<SymbolSyntax, SemanticError> {
        match plain {
            PlainSyntax::Type { name, constraint } => {
                if self.table.rows.contains(&safe_identifier(name)) {
                    return Ok(SymbolSyntax {
                        ty: TypeRef::builtin("MibTableRow"),
                        constraint: None,
                    });
                }
                self.simple_syntax(name, constraint.as_ref())
            }
            PlainSyntax::Bits { names } => Ok(SymbolSyntax {
                ty: TypeRef::builtin("Bits"),
                constraint: Some(SyntaxConstraint::NamedValues(
                    names
                        .iter()
                        .map(|(name, value)| (name.clone(), i64::from(*value)))
                        .collect(),
                )),
            }),
        }
    }

    fn simple_syntax(
        &self,
        name: &str,
        constraint: Option<&Constraint>,
    ) -> Result<SymbolSyntax, SemanticError> {
        let promoted = safe_identifier(promote_type(name));
        let module = if BASE_TYPES.contains(&promoted.as_str()) {
            String::new()
        } else {
            self.import_map
                .get(&promoted)
                .cloned()
                .unwrap_or_else(|| self.module_name.clone())
        };
        let constraint = constraint.map(lower_constraint).transpose()?;
        Ok(SymbolSyntax {
            ty: TypeRef::new(promoted, module),
            constraint,
        })
    }

    fn lower_oid(&mut self, oid: &Oid) -> SymbolicOid {
        let mut pieces = Vec::with_capacity(oid.elements().len());
        for element in oid.elements() {
            match element {
                OidElement::Number(number) => pieces.push(OidPiece::Number(*number)),
                OidElement::Name(name) => {
                    let parent = safe_identifier(name);
                    self.parent_names.insert(parent.clone());
                    let module = self
                        .import_map
                        .get(&parent)
                        .cloned()
                        .unwrap_or_else(|| self.module_name.clone());
                    pieces.push(OidPiece::Symbol {
                        name: parent,
                        module,
                    });
                }
                OidElement::NamedNumber { number, .. } => pieces.push(OidPiece::Number(*number)),
            }
        }
        SymbolicOid(pieces)
    }

    fn parent_exists(&self, parent: &str) -> bool {
        self.table.symbols.contains_key(parent)
            || self.import_map.contains_key(parent)
            || BASE_TYPES.contains(&parent)
            || is_table_token(parent)
            || self.table.rows.contains(parent)
    }

    fn register(
        &mut self,
        name: String,
        symbol: Symbol,
        parents: &[String],
    ) -> Result<(), SemanticError> {
        if self.table.symbols.contains_key(&name) || self.postponed.contains_key(&name) {
            return Err(SemanticError::DuplicateSymbol(name));
        }
        let missing: FxHashSet<String> = parents
            .iter()
            .filter(|parent| !self.parent_exists(parent))
            .cloned()
            .collect();
        if missing.is_empty() {
            self.admit(name, symbol);
        } else {
            for parent in &missing {
                self.waiters
                    .entry(parent.clone())
                    .or_default()
                    .push(name.clone());
            }
            self.postponed.insert(name, PendingSymbol { missing, symbol });
        }
        Ok(())
    }

    fn admit(&mut self, name: String, symbol: Symbol) {
        self.table.symbols.insert(name.clone(), symbol);
        self.table.order.push(name.clone());
        self.wake(name);
    }

    fn record_row(&mut self, name: String) {
        if self.table.rows.insert(name.clone()) {
            self.wake(name);
        }
    }

    /// Transitively admits postponed symbols whose last missing parent just
    /// became available.
    fn wake(&mut self, admitted: String) {
        let mut queue = vec![admitted];
        while let Some(name) = queue.pop() {
            let Some(waiting) = self.waiters.remove(&name) else {
                continue;
            };
            for waiter in waiting {
                let ready = match self.postponed.get_mut(&waiter) {
                    Some(pending) => {
                        pending.missing.remove(&name);
                        pending.missing.is_empty()
                    }
                    None => false,
                };
                if ready {
                    if let Some(pending) = self.postponed.shift_remove(&waiter) {
                        self.table.symbols.insert(waiter.clone(), pending.symbol);
                        self.table.order.push(waiter.clone());
                        queue.push(waiter);
                    }
                }
            }
        }
    }
}

fn lower_constraint(constraint: &Constraint) -> Result<SyntaxConstraint, SemanticError> {
    match constraint {
        Constraint::Enumeration(pairs) => Ok(SyntaxConstraint::NamedValues(pairs.clone())),
        Constraint::Ranges(ranges) => Ok(SyntaxConstraint::Ranges(lower_ranges(ranges)?)),
        Constraint::Sizes(ranges) => Ok(SyntaxConstraint::Sizes(lower_ranges(ranges)?)),
    }
}

fn lower_ranges(ranges: &[ValueRange]) -> Result<Vec<(i64, i64)>, SemanticError> {
    ranges
        .iter()
        .map(|range| {
            let min = eval_int(&range.min)?;
            let max = match &range.max {
                Some(literal) => eval_int(literal)?,
                None => min,
            };
            Ok((min, max))
        })
        .collect()
}
