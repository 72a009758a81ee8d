//! Walks the parsed manifest and collects hook entries in document order.

use hookcheck_types::{HookEntry, Spanned};
use hookcheck_yaml::{Mapping, YamlNode};

/// Error type for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// `repos`/`hooks` exist but do not form sequences of hook mappings
    /// (e.g. a hook that is a bare string), or a hook carrying `entry` has no
    /// usable scalar `id`/`entry` values.
    #[error("incorrect format")]
    MalformedStructure,
}

/// Find all hook entries in the parsed manifest.
///
/// An absent `repos` key yields an empty list. A hook mapping without an
/// `entry` key is skipped. Emission order is document order: repositories
/// outer, hooks within each repository inner.
pub fn find_entries(doc: &YamlNode) -> Result<Vec<HookEntry>, ExtractError> {
    let root = doc.as_mapping().ok_or(ExtractError::MalformedStructure)?;
    let Some(repos) = root.get("repos") else {
        return Ok(Vec::new());
    };
    let repos = repos
        .as_sequence()
        .ok_or(ExtractError::MalformedStructure)?;

    let mut entries = Vec::new();
    for repo in repos {
        let repo = repo.as_mapping().ok_or(ExtractError::MalformedStructure)?;
        let Some(hooks) = repo.get("hooks") else {
            continue;
        };
        let hooks = hooks
            .as_sequence()
            .ok_or(ExtractError::MalformedStructure)?;
        for hook in hooks {
            let hook = hook.as_mapping().ok_or(ExtractError::MalformedStructure)?;
            if !hook.contains_key("entry") {
                continue;
            }
            entries.push(HookEntry {
                id: spanned_scalar(hook, "id")?,
                entry: spanned_scalar(hook, "entry")?,
            });
        }
    }

    Ok(entries)
}

fn spanned_scalar(hook: &Mapping, key: &str) -> Result<Spanned, ExtractError> {
    let value = hook
        .get(key)
        .and_then(YamlNode::scalar_string)
        .ok_or(ExtractError::MalformedStructure)?;
    let line = hook.key_line(key).ok_or(ExtractError::MalformedStructure)?;
    Ok(Spanned { line, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = "\
repos:
  - repo: local
    hooks:
      - id: seed-isort-config
        name: seed-isort-config
        stages: [commit]
        language: system
        pass_filenames: false
        entry: |
          seed-isort-config
          sleep infinity
        types: [python]
      - id: removestar
        name: removestar
        stages: [commit]
        language: system
        entry: removestar -i ${NAME}
        types: [python]
";

    fn parse(text: &str) -> YamlNode {
        hookcheck_yaml::parse(text)
            .expect("parse")
            .expect("non-empty document")
    }

    #[test]
    fn finds_entries_in_document_order() {
        let entries = find_entries(&parse(CONFIG)).expect("find entries");
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].id, Spanned::new(4, "seed-isort-config"));
        assert_eq!(
            entries[0].entry,
            Spanned::new(9, "seed-isort-config\nsleep infinity\n")
        );

        assert_eq!(entries[1].id, Spanned::new(13, "removestar"));
        assert_eq!(entries[1].entry, Spanned::new(17, "removestar -i ${NAME}"));
    }

    #[test]
    fn absent_repos_yields_no_entries() {
        let entries = find_entries(&parse("default_stages: [commit]\n")).expect("find entries");
        assert!(entries.is_empty());
    }

    #[test]
    fn repo_without_hooks_is_skipped() {
        let entries =
            find_entries(&parse("repos:\n  - repo: https://example.com/r\n")).expect("find entries");
        assert!(entries.is_empty());
    }

    #[test]
    fn hook_without_entry_is_skipped() {
        let yaml = "\
repos:
  - repo: local
    hooks:
      - id: no-entry-hook
        language: system
      - id: with-entry
        entry: echo hi
";
        let entries = find_entries(&parse(yaml)).expect("find entries");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.value, "with-entry");
        assert_eq!(entries[0].entry, Spanned::new(7, "echo hi"));
    }

    #[test]
    fn entries_span_multiple_repositories() {
        let yaml = "\
repos:
  - repo: one
    hooks:
      - id: first
        entry: echo one
  - repo: two
    hooks:
      - id: second
        entry: echo two
";
        let entries = find_entries(&parse(yaml)).expect("find entries");
        let ids: Vec<_> = entries.iter().map(|e| e.id.value.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn bare_string_hook_is_malformed() {
        let yaml = "\
repos:
  - repo: local
    hooks:
      - entrypoint-as-string
";
        assert_eq!(
            find_entries(&parse(yaml)),
            Err(ExtractError::MalformedStructure)
        );
    }

    #[test]
    fn scalar_repos_value_is_malformed() {
        assert_eq!(
            find_entries(&parse("repos: local\n")),
            Err(ExtractError::MalformedStructure)
        );
    }

    #[test]
    fn hook_with_entry_but_no_id_is_malformed() {
        let yaml = "\
repos:
  - repo: local
    hooks:
      - entry: echo hi
";
        assert_eq!(
            find_entries(&parse(yaml)),
            Err(ExtractError::MalformedStructure)
        );
    }

    #[test]
    fn non_mapping_root_is_malformed() {
        assert_eq!(
            find_entries(&parse("- a\n- b\n")),
            Err(ExtractError::MalformedStructure)
        );
    }
}
