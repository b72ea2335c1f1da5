use thiserror::Error;

/// Malformed input the generators can diagnose. Fatal to the current
/// module's compilation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SemanticError {
    #[error("duplicate symbol found: {0}")]
    DuplicateSymbol(String),

    #[error("no module `{0}` in symbol table")]
    UnknownModule(String),

    #[error("no symbol `{name}` in module `{module}`")]
    UnknownSymbol { module: String, name: String },

    #[error("unknown parents for symbols: {}", .0.join(", "))]
    UnresolvedSymbols(Vec<String>),

    #[error("unknown parent symbol: {0}")]
    UnknownParentSymbol(String),

    #[error("empty binary string to integer conversion")]
    EmptyBinaryLiteral,

    #[error("empty hex string to integer conversion")]
    EmptyHexLiteral,

    #[error("malformed integer literal `{0}`")]
    MalformedLiteral(String),

    #[error("cyclic OID reference through `{name}` in module `{module}`")]
    OidCycle { module: String, name: String },

    #[error("cyclic type reference through `{name}` in module `{module}`")]
    TypeCycle { module: String, name: String },

    #[error("unknown type for symbol `{0}`")]
    UnknownType(String),

    #[error("no OID registered for symbol `{name}` in module `{module}`")]
    MissingOid { module: String, name: String },

    #[error("no bit `{bit}` for symbol `{symbol}`")]
    UnknownBit { symbol: String, bit: String },

    #[error("cannot interpret default value `{value}` of symbol `{symbol}`")]
    UnresolvableDefault { symbol: String, value: String },
}

/// Document generation failure: either a semantic problem in the input, or
/// a violated internal contract (a symbol registered by the first pass that
/// the second pass produced no record for).
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error("no generated code for symbol `{0}`")]
    MissingRecord(String),
}
