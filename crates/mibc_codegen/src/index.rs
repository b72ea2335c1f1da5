//! Auxiliary OID→name index over a set of compiled modules.

use tracing::debug;

/// Renders one `oid name` line per entry, with an optional `#`-prefixed
/// comment header.
pub fn build_index(entries: &[(String, String)], comments: Option<&[String]>) -> String {
    let mut out = String::new();
    if let Some(comments) = comments {
        for comment in comments {
            out.push_str("# ");
            out.push_str(comment);
            out.push('\n');
        }
        out.push_str("#\n");
    }
    for (name, oid) in entries {
        out.push_str(oid);
        out.push(' ');
        out.push_str(name);
        out.push('\n');
    }
    debug!(entries = entries.len(), bytes = out.len(), "built OID index");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, oid: &str) -> (String, String) {
        (name.to_string(), oid.to_string())
    }

    #[test]
    fn plain_index() {
        let index = build_index(
            &[entry("system", "1.3.6.1.2.1.1"), entry("snmp", "1.3.6.1.2.1.11")],
            None,
        );
        assert_eq!(index, "1.3.6.1.2.1.1 system\n1.3.6.1.2.1.11 snmp\n");
    }

    #[test]
    fn index_with_comment_header() {
        let index = build_index(
            &[entry("system", "1.3.6.1.2.1.1")],
            Some(&["produced by mibc".to_string()]),
        );
        assert_eq!(index, "# produced by mibc\n#\n1.3.6.1.2.1.1 system\n");
    }
}
