//! End-to-end tests: symbol table pass feeding the document pass.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use mibc_codegen::jsondoc::render;
use mibc_codegen::{DocumentGenerator, MibInfo, Options, SymbolTableBuilder, SymbolTableSet};
use mibc_smi_ast::{
    ComplianceModule, DefVal, Declaration, Import, IndexItem, Module, ModuleCompliance,
    ModuleIdentity, NotificationType, ObjectGroup, ObjectIdentity, ObjectType, ObjectTypeSyntax,
    Oid, PlainSyntax, TrapType, TypeDeclaration, TypeSpec, ValueDeclaration,
};

fn value_declaration(name: &str, oid: Oid) -> Declaration {
    Declaration::ValueDeclaration(ValueDeclaration {
        name: name.to_string(),
        oid,
    })
}

fn object_type(name: &str, syntax: ObjectTypeSyntax, oid: Oid) -> ObjectType {
    ObjectType {
        name: name.to_string(),
        syntax,
        units: None,
        max_access: None,
        description: None,
        augments: None,
        index: Vec::new(),
        defval: None,
        oid,
    }
}

fn compile_with(module: &Module, options: Options) -> (MibInfo, Value) {
    let (_, table) = SymbolTableBuilder::new()
        .build(module)
        .expect("symbol table pass succeeds");
    let mut tables = SymbolTableSet::default();
    tables.insert(module.name.clone(), table);
    DocumentGenerator::new(&tables)
        .with_options(options)
        .generate(module)
        .expect("document pass succeeds")
}

fn compile(module: &Module) -> (MibInfo, Value) {
    compile_with(module, Options::default())
}

fn document_keys(document: &Value) -> Vec<&str> {
    document
        .as_object()
        .expect("document is an object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn empty_module_emits_constant_imports_only() {
    let module = Module::new("TEST-MIB");
    let (info, document) = compile(&module);

    assert_eq!(
        document,
        json!({
            "imports": {
                "class": "imports",
                "SNMPv2-CONF": ["MODULE-COMPLIANCE", "NOTIFICATION-GROUP"],
                "SNMPv2-SMI": [
                    "MODULE-IDENTITY",
                    "NOTIFICATION-TYPE",
                    "OBJECT-IDENTITY",
                    "OBJECT-TYPE",
                    "iso",
                ],
                "SNMPv2-TC": ["DisplayString", "TEXTUAL-CONVENTION"],
            }
        })
    );
    assert_eq!(document_keys(&document), ["imports"]);
    // The constant modules are never compiled, so nothing is reported as
    // imported.
    assert_eq!(info.imported, Vec::<String>::new());
}

#[test]
fn object_identity_record() {
    let mut module = Module::new("TEST-MIB");
    module
        .declarations
        .push(Declaration::ObjectIdentity(ObjectIdentity {
            name: "fooBar".to_string(),
            description: None,
            oid: Oid(vec!["iso".into(), 1u32.into()]),
        }));
    let (_, document) = compile(&module);
    assert_eq!(
        document["fooBar"],
        json!({"name": "fooBar", "oid": "1.1", "class": "objectidentity"})
    );
}

#[test]
fn nested_oid_resolution() {
    let mut module = Module::new("TEST-MIB");
    module
        .declarations
        .push(value_declaration("a", Oid(vec!["iso".into(), 3u32.into()])));
    module
        .declarations
        .push(value_declaration("b", Oid(vec!["a".into(), 6u32.into()])));
    module
        .declarations
        .push(value_declaration("c", Oid(vec!["b".into(), 1u32.into()])));
    let (_, document) = compile(&module);

    assert_eq!(document["a"]["oid"], json!("1.3"));
    assert_eq!(document["b"]["oid"], json!("1.3.6"));
    assert_eq!(document["c"]["oid"], json!("1.3.6.1"));
    assert_eq!(document["c"]["class"], json!("objectidentity"));
    assert_eq!(document_keys(&document), ["imports", "a", "b", "c"]);
}

#[test]
fn smiv1_bare_index_promotes_to_fake_column() {
    let mut module = Module::new("TEST-MIB");
    module.declarations.push(Declaration::ObjectType(object_type(
        "barTable",
        ObjectTypeSyntax::Table {
            row: "BarEntry".to_string(),
        },
        Oid(vec!["iso".into(), 3u32.into(), 2u32.into()]),
    )));
    let mut row = object_type(
        "barEntry",
        ObjectTypeSyntax::Plain(PlainSyntax::named("BarEntry")),
        Oid(vec!["barTable".into(), 1u32.into()]),
    );
    row.index.push(IndexItem::new("IPADDRESS"));
    module.declarations.push(Declaration::ObjectType(row));
    let (_, document) = compile(&module);

    assert_eq!(
        document["barEntry"]["indices"],
        json!([{"module": "TEST-MIB", "object": "pysmiFakeCol1000"}])
    );
    assert_eq!(
        document["pysmiFakeCol1000"],
        json!({
            "name": "pysmiFakeCol1000",
            "oid": "1.3.2.1.1000",
            "class": "objecttype",
            "syntax": {"type": "IpAddress", "class": "type"},
        })
    );
    assert_eq!(
        document_keys(&document),
        ["imports", "barTable", "pysmiFakeCol1000", "barEntry"]
    );
}

#[test]
fn enumeration_default() {
    let mut module = Module::new("TEST-MIB");
    module
        .declarations
        .push(Declaration::TypeDeclaration(TypeDeclaration {
            name: "Status".to_string(),
            spec: TypeSpec::Syntax(PlainSyntax::constrained(
                "INTEGER",
                mibc_smi_ast::Constraint::Enumeration(vec![
                    ("up".to_string(), 1),
                    ("down".to_string(), 2),
                ]),
            )),
        }));
    let mut scalar = object_type(
        "s",
        ObjectTypeSyntax::Plain(PlainSyntax::named("Status")),
        Oid(vec!["iso".into(), 9u32.into(), 1u32.into()]),
    );
    scalar.defval = Some(DefVal::Symbol("up".to_string()));
    module.declarations.push(Declaration::ObjectType(scalar));
    let (_, document) = compile(&module);

    assert_eq!(
        document["s"]["default"],
        json!({"value": "up", "format": "enum"})
    );
}

#[test]
fn trap_type_lowering() {
    let mut module = Module::new("TEST-MIB");
    module.declarations.push(value_declaration(
        "snmp",
        Oid(vec![
            "iso".into(),
            3u32.into(),
            6u32.into(),
            1u32.into(),
            2u32.into(),
            1u32.into(),
            11u32.into(),
        ]),
    ));
    module.declarations.push(Declaration::TrapType(TrapType {
        name: "coldStart".to_string(),
        enterprise: Oid(vec!["snmp".into()]),
        variables: Vec::new(),
        description: None,
        value: 0,
    }));
    let (_, document) = compile(&module);

    assert_eq!(
        document["coldStart"],
        json!({
            "name": "coldStart",
            "oid": "1.3.6.1.2.1.11.0.0",
            "class": "notificationtype",
        })
    );
}

#[test]
fn forward_reference_is_reordered() {
    let mut module = Module::new("TEST-MIB");
    module
        .declarations
        .push(Declaration::TypeDeclaration(TypeDeclaration {
            name: "ChildType".to_string(),
            spec: TypeSpec::Syntax(PlainSyntax::named("ParentType")),
        }));
    module
        .declarations
        .push(Declaration::TypeDeclaration(TypeDeclaration {
            name: "ParentType".to_string(),
            spec: TypeSpec::Syntax(PlainSyntax::named("OCTET STRING")),
        }));
    let (_, document) = compile(&module);

    assert_eq!(
        document_keys(&document),
        ["imports", "ParentType", "ChildType"]
    );
    assert_eq!(
        document["ChildType"],
        json!({"name": "ChildType", "class": "type", "type": "ParentType"})
    );
}

#[test]
fn conceptual_table_syntax_records() {
    let mut module = Module::new("TEST-MIB");
    module.declarations.push(Declaration::ObjectType(object_type(
        "fooTable",
        ObjectTypeSyntax::Table {
            row: "FooEntry".to_string(),
        },
        Oid(vec!["iso".into(), 3u32.into(), 1u32.into()]),
    )));
    let mut row = object_type(
        "fooEntry",
        ObjectTypeSyntax::Plain(PlainSyntax::named("FooEntry")),
        Oid(vec!["fooTable".into(), 1u32.into()]),
    );
    row.index.push(IndexItem::new("fooIndex"));
    module.declarations.push(Declaration::ObjectType(row));
    module
        .declarations
        .push(Declaration::TypeDeclaration(TypeDeclaration {
            name: "FooEntry".to_string(),
            spec: TypeSpec::Sequence {
                columns: vec![("fooIndex".to_string(), "Integer32".to_string())],
            },
        }));
    let mut column = object_type(
        "fooIndex",
        ObjectTypeSyntax::Plain(PlainSyntax::named("Integer32")),
        Oid(vec!["fooEntry".into(), 1u32.into()]),
    );
    column.max_access = Some("read-only".to_string());
    module.declarations.push(Declaration::ObjectType(column));
    let (_, document) = compile(&module);

    assert_eq!(
        document["fooTable"]["syntax"],
        json!({"type": "MibTable", "class": "type"})
    );
    assert_eq!(
        document["fooEntry"]["syntax"],
        json!({"type": "MibTableRow", "class": "type"})
    );
    assert_eq!(
        document["fooEntry"]["indices"],
        json!([{"module": "TEST-MIB", "object": "fooIndex"}])
    );
    assert_eq!(
        document["fooIndex"]["syntax"],
        json!({"type": "Integer32", "class": "type"})
    );
    assert_eq!(document["fooIndex"]["maxaccess"], json!("read-only"));
    // The SEQUENCE type itself never becomes a record.
    assert_eq!(
        document_keys(&document),
        ["imports", "fooTable", "fooEntry", "fooIndex"]
    );
}

#[test]
fn default_value_formats() {
    let mut module = Module::new("TEST-MIB");

    let mut hex_int = object_type(
        "hexInt",
        ObjectTypeSyntax::Plain(PlainSyntax::named("Integer32")),
        Oid(vec!["iso".into(), 9u32.into(), 1u32.into()]),
    );
    hex_int.defval = Some(DefVal::Hex("ff".to_string()));
    module.declarations.push(Declaration::ObjectType(hex_int));

    let mut hex_string = object_type(
        "hexString",
        ObjectTypeSyntax::Plain(PlainSyntax::named("OCTET STRING")),
        Oid(vec!["iso".into(), 9u32.into(), 2u32.into()]),
    );
    hex_string.defval = Some(DefVal::Hex("aabb".to_string()));
    module.declarations.push(Declaration::ObjectType(hex_string));

    let mut bin_int = object_type(
        "binInt",
        ObjectTypeSyntax::Plain(PlainSyntax::named("Integer32")),
        Oid(vec!["iso".into(), 9u32.into(), 3u32.into()]),
    );
    bin_int.defval = Some(DefVal::Binary("1010".to_string()));
    module.declarations.push(Declaration::ObjectType(bin_int));

    let mut bin_string = object_type(
        "binString",
        ObjectTypeSyntax::Plain(PlainSyntax::named("OCTET STRING")),
        Oid(vec!["iso".into(), 9u32.into(), 4u32.into()]),
    );
    bin_string.defval = Some(DefVal::Binary("11111111".to_string()));
    module.declarations.push(Declaration::ObjectType(bin_string));

    let mut decimal = object_type(
        "plainInt",
        ObjectTypeSyntax::Plain(PlainSyntax::named("Integer32")),
        Oid(vec!["iso".into(), 9u32.into(), 5u32.into()]),
    );
    decimal.defval = Some(DefVal::Integer(5));
    module.declarations.push(Declaration::ObjectType(decimal));

    let mut empty_text = object_type(
        "emptyText",
        ObjectTypeSyntax::Plain(PlainSyntax::named("Integer32")),
        Oid(vec!["iso".into(), 9u32.into(), 6u32.into()]),
    );
    empty_text.defval = Some(DefVal::Text(String::new()));
    module.declarations.push(Declaration::ObjectType(empty_text));

    let mut empty_octets = object_type(
        "emptyOctets",
        ObjectTypeSyntax::Plain(PlainSyntax::named("OCTET STRING")),
        Oid(vec!["iso".into(), 9u32.into(), 7u32.into()]),
    );
    empty_octets.defval = Some(DefVal::Text(String::new()));
    module.declarations.push(Declaration::ObjectType(empty_octets));

    let (_, document) = compile(&module);

    assert_eq!(
        document["hexInt"]["default"],
        json!({"value": "255", "format": "hex"})
    );
    assert_eq!(
        document["hexString"]["default"],
        json!({"value": "aabb", "format": "hex"})
    );
    assert_eq!(
        document["binInt"]["default"],
        json!({"value": "10", "format": "bin"})
    );
    assert_eq!(
        document["binString"]["default"],
        json!({"value": "ff", "format": "hex"})
    );
    assert_eq!(
        document["plainInt"]["default"],
        json!({"value": 5, "format": "decimal"})
    );
    assert_eq!(document["emptyText"].get("default"), None);
    assert_eq!(
        document["emptyOctets"]["default"],
        json!({"value": "", "format": "string"})
    );
}

#[test]
fn oid_valued_default() {
    let mut module = Module::new("TEST-MIB");
    module
        .declarations
        .push(value_declaration("anchor", Oid(vec!["iso".into(), 3u32.into()])));
    let mut scalar = object_type(
        "ptr",
        ObjectTypeSyntax::Plain(PlainSyntax::named("OBJECT IDENTIFIER")),
        Oid(vec!["iso".into(), 9u32.into(), 8u32.into()]),
    );
    scalar.defval = Some(DefVal::Symbol("anchor".to_string()));
    module.declarations.push(Declaration::ObjectType(scalar));
    let (_, document) = compile(&module);

    assert_eq!(
        document["ptr"]["default"],
        json!({"value": "(1, 3)", "format": "oid"})
    );
}

#[test]
fn bits_default_and_unknown_bit() {
    let bits_syntax = || {
        ObjectTypeSyntax::Plain(PlainSyntax::Bits {
            names: vec![("red".to_string(), 0), ("green".to_string(), 1)],
        })
    };
    let mut module = Module::new("TEST-MIB");
    let mut flags = object_type(
        "flags",
        bits_syntax(),
        Oid(vec!["iso".into(), 9u32.into(), 9u32.into()]),
    );
    flags.defval = Some(DefVal::Bits(vec!["green".to_string(), "red".to_string()]));
    module.declarations.push(Declaration::ObjectType(flags));
    let (_, document) = compile(&module);
    assert_eq!(
        document["flags"]["default"],
        json!({"value": {"green": 1, "red": 0}, "format": "bits"})
    );
    assert_eq!(
        document["flags"]["syntax"],
        json!({
            "type": "Bits",
            "class": "type",
            "constraints": {"Bits": {"red": 0, "green": 1}},
        })
    );

    let mut module = Module::new("TEST-MIB");
    let mut flags = object_type(
        "flags",
        bits_syntax(),
        Oid(vec!["iso".into(), 9u32.into(), 9u32.into()]),
    );
    flags.defval = Some(DefVal::Bits(vec!["blue".to_string()]));
    module.declarations.push(Declaration::ObjectType(flags));
    let (_, table) = SymbolTableBuilder::new().build(&module).unwrap();
    let mut tables = SymbolTableSet::default();
    tables.insert("TEST-MIB", table);
    let error = DocumentGenerator::new(&tables).generate(&module).unwrap_err();
    assert!(error.to_string().contains("no bit `blue`"));
}

#[test]
fn constraints_render_as_ranges_sizes_and_enums() {
    use mibc_smi_ast::{Constraint, ValueRange};

    let mut module = Module::new("TEST-MIB");
    module.declarations.push(Declaration::ObjectType(object_type(
        "ranged",
        ObjectTypeSyntax::Plain(PlainSyntax::constrained(
            "Integer32",
            Constraint::Ranges(vec![ValueRange::bounded(0, 100), ValueRange::single(200)]),
        )),
        Oid(vec!["iso".into(), 9u32.into(), 10u32.into()]),
    )));
    module.declarations.push(Declaration::ObjectType(object_type(
        "sized",
        ObjectTypeSyntax::Plain(PlainSyntax::constrained(
            "OCTET STRING",
            Constraint::Sizes(vec![ValueRange::bounded(0, 255)]),
        )),
        Oid(vec!["iso".into(), 9u32.into(), 11u32.into()]),
    )));
    module.declarations.push(Declaration::ObjectType(object_type(
        "state",
        ObjectTypeSyntax::Plain(PlainSyntax::constrained(
            "INTEGER",
            Constraint::Enumeration(vec![("on".to_string(), 1), ("off".to_string(), 2)]),
        )),
        Oid(vec!["iso".into(), 9u32.into(), 12u32.into()]),
    )));
    let (_, document) = compile(&module);

    assert_eq!(
        document["ranged"]["syntax"]["constraints"],
        json!({"range": [{"min": 0, "max": 100}, {"min": 200, "max": 200}]})
    );
    assert_eq!(
        document["sized"]["syntax"]["constraints"],
        json!({"size": [{"min": 0, "max": 255}]})
    );
    assert_eq!(
        document["state"]["syntax"],
        json!({
            "type": "INTEGER",
            "class": "type",
            "constraints": {"enumeration": {"on": 1, "off": 2}},
        })
    );
}

#[test]
fn module_identity_texts_and_revisions() {
    let mut module = Module::new("TEST-MIB");
    module
        .declarations
        .push(Declaration::ModuleIdentity(ModuleIdentity {
            name: "testMIB".to_string(),
            last_updated: Some("200011160000Z".to_string()),
            organization: Some("Example\n   Org".to_string()),
            contact_info: Some("info@example.org".to_string()),
            description: Some("A   test\nmodule".to_string()),
            revisions: vec!["200011160000Z".to_string(), "9502040000Z".to_string()],
            oid: Oid(vec!["iso".into(), 42u32.into()]),
        }));

    let (_, silent) = compile(&module);
    assert_eq!(
        silent["testMIB"],
        json!({
            "name": "testMIB",
            "oid": "1.42",
            "class": "moduleidentity",
            "revisions": ["2000-11-16 00:00", "1995-02-04 00:00"],
        })
    );

    let (_, texted) = compile_with(
        &module,
        Options {
            gen_texts: true,
            comments: None,
        },
    );
    assert_eq!(
        texted["testMIB"],
        json!({
            "name": "testMIB",
            "oid": "1.42",
            "class": "moduleidentity",
            "revisions": ["2000-11-16 00:00", "1995-02-04 00:00"],
            "lastupdated": "200011160000Z",
            "organization": "Example Org",
            "contactinfo": "info@example.org",
            "description": "A test module",
        })
    );
}

#[test]
fn groups_and_compliances_attribute_modules() {
    let mut module = Module::new("TEST-MIB");
    module.imports.push(Import {
        module: "IF-MIB".to_string(),
        symbols: vec!["ifIndex".to_string()],
    });
    module
        .declarations
        .push(value_declaration("local", Oid(vec!["iso".into(), 3u32.into()])));
    module.declarations.push(Declaration::ObjectGroup(ObjectGroup {
        name: "ifGroup".to_string(),
        objects: vec!["ifIndex".to_string(), "local".to_string()],
        description: None,
        oid: Oid(vec!["iso".into(), 4u32.into()]),
    }));
    module
        .declarations
        .push(Declaration::ModuleCompliance(ModuleCompliance {
            name: "basicCompliance".to_string(),
            description: None,
            compliances: vec![
                ComplianceModule {
                    module: None,
                    symbols: vec!["ifGroup".to_string()],
                },
                ComplianceModule {
                    module: Some("IF-MIB".to_string()),
                    symbols: vec!["ifGeneralGroup".to_string()],
                },
            ],
            oid: Oid(vec!["iso".into(), 5u32.into()]),
        }));
    let (info, document) = compile(&module);

    assert_eq!(
        document["ifGroup"]["objects"],
        json!([
            {"module": "IF-MIB", "object": "ifIndex"},
            {"module": "TEST-MIB", "object": "local"},
        ])
    );
    assert_eq!(
        document["basicCompliance"]["modulecompliance"],
        json!([
            {"module": "TEST-MIB", "object": "ifGroup"},
            {"module": "IF-MIB", "object": "ifGeneralGroup"},
        ])
    );
    assert_eq!(info.imported, vec!["IF-MIB"]);
}

#[test]
fn augments_and_notifications() {
    let mut module = Module::new("TEST-MIB");
    module.declarations.push(Declaration::ObjectType(object_type(
        "baseTable",
        ObjectTypeSyntax::Table {
            row: "BaseEntry".to_string(),
        },
        Oid(vec!["iso".into(), 3u32.into(), 1u32.into()]),
    )));
    module.declarations.push(Declaration::ObjectType(object_type(
        "baseEntry",
        ObjectTypeSyntax::Plain(PlainSyntax::named("BaseEntry")),
        Oid(vec!["baseTable".into(), 1u32.into()]),
    )));
    module.declarations.push(Declaration::ObjectType(object_type(
        "extTable",
        ObjectTypeSyntax::Table {
            row: "ExtEntry".to_string(),
        },
        Oid(vec!["iso".into(), 3u32.into(), 2u32.into()]),
    )));
    let mut extension = object_type(
        "extEntry",
        ObjectTypeSyntax::Plain(PlainSyntax::named("ExtEntry")),
        Oid(vec!["extTable".into(), 1u32.into()]),
    );
    extension.augments = Some("baseEntry".to_string());
    module.declarations.push(Declaration::ObjectType(extension));
    module
        .declarations
        .push(Declaration::NotificationType(NotificationType {
            name: "linkUp".to_string(),
            objects: vec!["baseEntry".to_string()],
            description: None,
            oid: Oid(vec!["iso".into(), 6u32.into(), 1u32.into()]),
        }));
    let (_, document) = compile(&module);

    assert_eq!(
        document["extEntry"]["augmention"],
        json!({"name": "extEntry", "module": "TEST-MIB", "object": "baseEntry"})
    );
    assert_eq!(
        document["linkUp"]["objects"],
        json!([{"module": "TEST-MIB", "object": "baseEntry"}])
    );
}

#[test]
fn meta_block_carries_comments() {
    let module = Module::new("TEST-MIB");
    let (_, document) = compile_with(
        &module,
        Options {
            gen_texts: false,
            comments: Some(vec!["built by tests".to_string()]),
        },
    );
    assert_eq!(
        document["meta"],
        json!({"comments": ["built by tests"], "module": "TEST-MIB"})
    );
    assert_eq!(document_keys(&document), ["imports", "meta"]);
}

#[test]
fn oid_roundtrip_matches_document() {
    let mut module = Module::new("TEST-MIB");
    module
        .declarations
        .push(value_declaration("a", Oid(vec!["iso".into(), 3u32.into()])));
    module
        .declarations
        .push(value_declaration("b", Oid(vec!["a".into(), 6u32.into()])));
    let (_, table) = SymbolTableBuilder::new().build(&module).unwrap();
    let mut tables = SymbolTableSet::default();
    tables.insert("TEST-MIB", table);
    let (_, document) = DocumentGenerator::new(&tables).generate(&module).unwrap();

    let table = tables.get("TEST-MIB").unwrap();
    for name in table.order() {
        let symbol = table.get(name).unwrap();
        let arcs = symbol.oid.as_ref().unwrap().resolve(&tables).unwrap();
        let dotted: Vec<String> = arcs.iter().map(u32::to_string).collect();
        assert_eq!(document[name]["oid"], json!(dotted.join(".")));
    }
}

#[test]
fn generation_is_deterministic() {
    let mut module = Module::new("TEST-MIB");
    module.imports.push(Import {
        module: "IF-MIB".to_string(),
        symbols: vec!["ifIndex".to_string(), "ifDescr".to_string()],
    });
    module
        .declarations
        .push(value_declaration("a", Oid(vec!["iso".into(), 3u32.into()])));
    module
        .declarations
        .push(value_declaration("b", Oid(vec!["a".into(), 6u32.into()])));

    let (_, first) = compile(&module);
    let (_, second) = compile(&module);
    assert_eq!(render(&first), render(&second));
}

#[test]
fn missing_symbol_table_entry_is_a_codegen_error() {
    // A table whose order names a symbol the document pass never produced
    // must surface as a codegen error rather than a silent omission.
    let mut module = Module::new("TEST-MIB");
    module
        .declarations
        .push(value_declaration("a", Oid(vec!["iso".into(), 3u32.into()])));
    let (_, table) = SymbolTableBuilder::new().build(&module).unwrap();
    let mut tables = SymbolTableSet::default();
    tables.insert("TEST-MIB", table);

    let error = DocumentGenerator::new(&tables)
        .generate(&Module::new("TEST-MIB"))
        .unwrap_err();
    assert_eq!(error.to_string(), "no generated code for symbol `a`");
}
