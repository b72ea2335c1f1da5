//! Shared lowering primitives for literals and free text: numeric literal
//! evaluation, identifier normalization, timestamp normalization, and
//! whitespace collapsing.

use std::sync::LazyLock;

use jiff::civil::DateTime;
use regex::Regex;

use mibc_smi_ast::IntLiteral;

use crate::error::SemanticError;

/// Identifier reserved words of the downstream symbol-table consumer.
/// Colliding names are prefixed so the generated tables stay loadable.
const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

const RESERVED_PREFIX: &str = "pysmi_";

/// Substituted when a `REVISION`/`LAST-UPDATED` timestamp fails to parse.
const SENTINEL_TIMESTAMP: &str = "1970-01-01 00:00";

/// Identifier-safe form of a MIB name: hyphens become underscores.
pub fn identifier(symbol: &str) -> String {
    symbol.replace('-', "_")
}

/// Identifier-safe form used by the symbol table builder: reserved words of
/// the downstream consumer get a fixed prefix before hyphen substitution.
pub fn safe_identifier(symbol: &str) -> String {
    if RESERVED_WORDS.contains(&symbol) {
        return format!("{RESERVED_PREFIX}{symbol}");
    }
    identifier(symbol)
}

/// Evaluates a numeric literal. Empty `'…'B`/`'…'H` payloads are semantic
/// errors.
pub fn eval_int(literal: &IntLiteral) -> Result<i64, SemanticError> {
    match literal {
        IntLiteral::Decimal(value) => Ok(*value),
        IntLiteral::Hex(digits) => {
            if digits.is_empty() {
                return Err(SemanticError::EmptyHexLiteral);
            }
            i64::from_str_radix(digits, 16)
                .map_err(|_| SemanticError::MalformedLiteral(format!("'{digits}'H")))
        }
        IntLiteral::Binary(bits) => {
            if bits.is_empty() {
                return Err(SemanticError::EmptyBinaryLiteral);
            }
            i64::from_str_radix(bits, 2)
                .map_err(|_| SemanticError::MalformedLiteral(format!("'{bits}'B")))
        }
    }
}

/// Normalizes a `YYYYMMDDhhmmZ` timestamp to `YYYY-MM-DD hh:mm`.
///
/// An 11-character form carries a two-digit year and is assumed to be in the
/// 20th century. Values that do not parse as real dates are substituted with
/// the epoch sentinel rather than failing the module.
pub fn normalize_timestamp(value: &str) -> String {
    let padded = if value.len() == 11 {
        format!("19{value}")
    } else {
        value.to_string()
    };
    match DateTime::strptime("%Y%m%d%H%MZ", &padded) {
        Ok(timestamp) => timestamp.strftime("%Y-%m-%d %H:%M").to_string(),
        Err(_) => SENTINEL_TIMESTAMP.to_string(),
    }
}

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapses every whitespace run (including newlines) to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}
