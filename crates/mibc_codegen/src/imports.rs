//! Import rewriting: SMIv1 imports are rewritten to their SMIv2 equivalents
//! and a fixed set of constant imports is merged in so the core SMI classes
//! are always resolvable.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use mibc_smi_ast::Import;

/// Macro symbols expand to the implementation classes they stand for when
/// building the symbol-table import map.
const SYMBOL_CLASSES: &[(&str, &[&str])] = &[
    ("MODULE-IDENTITY", &["ModuleIdentity"]),
    (
        "OBJECT-TYPE",
        &["MibScalar", "MibTable", "MibTableRow", "MibTableColumn"],
    ),
    ("NOTIFICATION-TYPE", &["NotificationType"]),
    ("TEXTUAL-CONVENTION", &["TextualConvention"]),
    ("MODULE-COMPLIANCE", &["ModuleCompliance"]),
    ("OBJECT-GROUP", &["ObjectGroup"]),
    ("NOTIFICATION-GROUP", &["NotificationGroup"]),
    ("AGENT-CAPABILITIES", &["AgentCapabilities"]),
    ("OBJECT-IDENTITY", &["ObjectIdentity"]),
    // smidump always renders traps as notifications
    ("TRAP-TYPE", &["NotificationType"]),
    ("BITS", &["Bits"]),
];

/// Imports always merged in by the symbol table builder. Several entries
/// cover omissions in widely deployed MIBs.
pub(crate) const SYMTABLE_CONST_IMPORTS: &[(&str, &[&str])] = &[
    (
        "SNMPv2-SMI",
        &[
            "iso",
            "Bits",
            "Integer32",
            "TimeTicks",
            "Counter32",
            "Counter64",
            "NOTIFICATION-TYPE",
            "Gauge32",
            "MODULE-IDENTITY",
            "OBJECT-TYPE",
            "OBJECT-IDENTITY",
            "Unsigned32",
            "IpAddress",
            "MibIdentifier",
        ],
    ),
    ("SNMPv2-TC", &["DisplayString", "TEXTUAL-CONVENTION"]),
    ("SNMPv2-CONF", &["MODULE-COMPLIANCE", "NOTIFICATION-GROUP"]),
];

/// Imports always merged in by the document generator.
pub(crate) const DOC_CONST_IMPORTS: &[(&str, &[&str])] = &[
    (
        "SNMPv2-SMI",
        &[
            "iso",
            "NOTIFICATION-TYPE",
            "MODULE-IDENTITY",
            "OBJECT-TYPE",
            "OBJECT-IDENTITY",
        ],
    ),
    ("SNMPv2-TC", &["DisplayString", "TEXTUAL-CONVENTION"]),
    ("SNMPv2-CONF", &["MODULE-COMPLIANCE", "NOTIFICATION-GROUP"]),
];

/// Modules that are never compiled: they define MACROs the implementation
/// supplies, or carry OIDs that every import of them gets rewritten away
/// from. Dropped from the document pass's reported import list.
pub(crate) const BASE_MIBS: &[&str] = &[
    "ASN1",
    "ASN1-ENUMERATION",
    "ASN1-REFINEMENT",
    "RFC1065-SMI",
    "RFC1155-SMI",
    "RFC1158-MIB",
    "RFC-1212",
    "RFC1212",
    "RFC-1215",
    "RFC1215",
    "RFC1213-MIB",
    "SNMPv2-SMI",
    "SNMPv2-TC",
    "SNMPv2-TM",
    "SNMPv2-CONF",
];

pub(crate) fn is_base_mib(module: &str) -> bool {
    BASE_MIBS.contains(&module)
}

/// Expansion of a macro symbol into implementation classes, if any.
pub(crate) fn macro_expansion(symbol: &str) -> Option<&'static [&'static str]> {
    SYMBOL_CLASSES
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, classes)| *classes)
}

/// SMIv1→SMIv2 import rewrite table: `module → symbol → replacements`.
///
/// The default covers the well-known SMIv1 base modules; drivers may supply
/// their own table.
#[derive(Clone, Debug)]
pub struct ImportRewrites {
    rules: FxHashMap<String, FxHashMap<String, Vec<(String, String)>>>,
}

impl ImportRewrites {
    pub fn empty() -> Self {
        ImportRewrites {
            rules: FxHashMap::default(),
        }
    }

    /// Adds one rewrite: importing `symbol` from `module` pulls in every
    /// `(new module, new symbol)` replacement instead.
    pub fn insert(
        &mut self,
        module: impl Into<String>,
        symbol: impl Into<String>,
        replacements: Vec<(String, String)>,
    ) {
        self.rules
            .entry(module.into())
            .or_default()
            .insert(symbol.into(), replacements);
    }

    fn lookup(&self, module: &str, symbol: &str) -> Option<&[(String, String)]> {
        self.rules
            .get(module)?
            .get(symbol)
            .map(Vec::as_slice)
    }
}

impl Default for ImportRewrites {
    fn default() -> Self {
        const SMIV1_BASE: &[(&str, &str)] = &[
            ("internet", "internet"),
            ("directory", "directory"),
            ("mgmt", "mgmt"),
            ("experimental", "experimental"),
            ("private", "private"),
            ("enterprises", "enterprises"),
            ("IpAddress", "IpAddress"),
            ("NetworkAddress", "IpAddress"),
            ("Counter", "Counter32"),
            ("Gauge", "Gauge32"),
            ("TimeTicks", "TimeTicks"),
            ("Opaque", "Opaque"),
        ];

        let mut rewrites = ImportRewrites::empty();
        for smiv1_module in ["RFC1065-SMI", "RFC1155-SMI"] {
            for (symbol, replacement) in SMIV1_BASE {
                rewrites.insert(
                    smiv1_module,
                    *symbol,
                    vec![("SNMPv2-SMI".to_string(), (*replacement).to_string())],
                );
            }
        }
        rewrites.insert(
            "RFC-1212",
            "OBJECT-TYPE",
            vec![("SNMPv2-SMI".to_string(), "OBJECT-TYPE".to_string())],
        );
        rewrites.insert(
            "RFC-1215",
            "TRAP-TYPE",
            vec![("SNMPv2-SMI".to_string(), "TRAP-TYPE".to_string())],
        );
        for (symbol, new_module, new_symbol) in [
            ("nullSpecific", "SNMPv2-SMI", "zeroDotZero"),
            ("ipRoutingTable", "RFC1213-MIB", "ipRouteTable"),
            ("snmpEnableAuthTraps", "SNMPv2-MIB", "snmpEnableAuthenTraps"),
            ("DisplayString", "SNMPv2-TC", "DisplayString"),
        ] {
            rewrites.insert(
                "RFC1158-MIB",
                symbol,
                vec![(new_module.to_string(), new_symbol.to_string())],
            );
        }
        for (symbol, new_module) in [
            ("mib-2", "SNMPv2-SMI"),
            ("DisplayString", "SNMPv2-TC"),
            ("PhysAddress", "SNMPv2-TC"),
        ] {
            rewrites.insert(
                "RFC1213-MIB",
                symbol,
                vec![(new_module.to_string(), symbol.to_string())],
            );
        }
        rewrites
    }
}

/// Applies the rewrite table to the declared imports, then merges the
/// constant imports. The result maps module name to its (possibly
/// duplicated) symbol list; consumers deduplicate at emission.
pub(crate) fn rewrite_imports(
    imports: &[Import],
    rewrites: &ImportRewrites,
    const_imports: &[(&str, &[&str])],
) -> IndexMap<String, Vec<String>> {
    let mut merged: IndexMap<String, Vec<String>> = IndexMap::new();
    for import in imports {
        merged
            .entry(import.module.clone())
            .or_default()
            .extend(import.symbols.iter().cloned());
    }

    // Rewrite against the declared pairs only; replacements are never
    // themselves rewritten.
    let declared: Vec<(String, String)> = merged
        .iter()
        .flat_map(|(module, symbols)| {
            symbols
                .iter()
                .map(move |symbol| (module.clone(), symbol.clone()))
        })
        .collect();
    for (module, symbol) in &declared {
        let Some(replacements) = rewrites.lookup(module, symbol) else {
            continue;
        };
        let replacements = replacements.to_vec();
        if let Some(symbols) = merged.get_mut(module) {
            if let Some(position) = symbols.iter().position(|name| name == symbol) {
                symbols.remove(position);
            }
        }
        for (new_module, new_symbol) in replacements {
            merged.entry(new_module).or_default().push(new_symbol);
        }
    }

    for (module, symbols) in const_imports {
        merged
            .entry((*module).to_string())
            .or_default()
            .extend(symbols.iter().map(|symbol| (*symbol).to_string()));
    }
    merged
}
