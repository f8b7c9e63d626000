use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Fluent file of the report locale, relative to the crate root.
const REPORT_FTL: &str = "i18n/ru-RU/recap-ui.ftl";

/// Extract message IDs from a Fluent file.
/// Any line of the form `<identifier> =` counts as a message definition;
/// comments, terms (`-` prefix) and continuation lines are ignored.
fn parse_ftl_keys(content: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for line in content.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.push(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect every `t!("...")` literal under `src_root`, including calls whose
/// key sits on the following line.
/// Dynamically built IDs and direct `fl!` calls are not seen.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];
    let needle = "t!(";

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            // `format!(`, `assert!(` and friends also end in `t!(`.
            let standalone = !rest[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            rest = &rest[pos + needle.len()..];
            if !standalone {
                continue;
            }
            // The literal may sit on the next line in multi-argument calls.
            let Some(literal) = rest.trim_start().strip_prefix('"') else {
                continue;
            };
            if let Some(end) = literal.find('"') {
                let key = &literal[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn report_ftl() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(REPORT_FTL);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {path:?}: {err}"))
}

#[test]
fn every_referenced_key_is_translated() {
    let ftl_keys: HashSet<String> = parse_ftl_keys(&report_ftl()).into_iter().collect();
    assert!(!ftl_keys.is_empty(), "No message keys parsed from {REPORT_FTL}");

    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = extract_translation_keys_from_source(&src_root);
    assert!(!referenced.is_empty(), "no t!(...) call sites found under src/");

    let missing: Vec<_> = referenced
        .iter()
        .filter(|k| !ftl_keys.contains(*k))
        .cloned()
        .collect();
    if !missing.is_empty() {
        panic!(
            "Referenced translation keys missing in {REPORT_FTL} ({}):\n{}",
            missing.len(),
            missing.join("\n")
        );
    }

    let unused: Vec<_> = ftl_keys
        .iter()
        .filter(|k| !referenced.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: {} keys unused in Rust sources: {}", unused.len(), unused.join(", "));
    }
}

#[test]
fn report_locale_has_no_duplicate_keys() {
    let mut seen = HashSet::new();
    let dups: BTreeSet<String> = parse_ftl_keys(&report_ftl())
        .into_iter()
        .filter(|key| !seen.insert(key.clone()))
        .collect();
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {REPORT_FTL}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

#[test]
fn every_month_has_a_short_name() {
    let keys = parse_ftl_keys(&report_ftl());
    let months = keys.iter().filter(|k| k.starts_with("month-")).count();
    assert_eq!(months, 12);
}
