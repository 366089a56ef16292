//! Tailwind plugin registration in `vite.config.{js,ts}`
//!
//! The edit is textual: it looks for the first `plugins: [` array literal and
//! inserts the plugin call at its start. A config without such an array still
//! gets the import, but the plugin is not registered. Comments are not
//! parsed, so a mention of the module or the plugin call outside an import
//! statement or the plugins array does not count.

use regex::Regex;
use std::sync::LazyLock;

/// Module providing the Tailwind Vite plugin
pub const TAILWIND_VITE_MODULE: &str = "@tailwindcss/vite";

/// Import statement prepended to the config
pub const TAILWIND_VITE_IMPORT: &str = "import tailwindcss from '@tailwindcss/vite'";

const PLUGIN_CALL: &str = "tailwindcss()";

static PLUGINS_ARRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"plugins\s*:\s*\[").expect("plugins regex is valid"));

static TAILWIND_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?m)^\s*import\s+[^;\n]*?\bfrom\s*['"]{}['"]"#,
        regex::escape(TAILWIND_VITE_MODULE)
    ))
    .expect("tailwind import regex is valid")
});

/// Result of patching a Vite config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEdit {
    /// The integration import is already there; the file must stay byte-identical
    Unchanged,
    /// New content, and whether the plugin call ended up in a plugins array
    Patched {
        content: String,
        plugin_registered: bool,
    },
}

/// Add the Tailwind import and plugin call to a Vite config
pub fn patch_vite_config(content: &str) -> ConfigEdit {
    if TAILWIND_IMPORT_RE.is_match(content) {
        return ConfigEdit::Unchanged;
    }

    let (body, plugin_registered) = match register_plugin(content) {
        Some(body) => (body, true),
        None => (content.to_string(), false),
    };

    ConfigEdit::Patched {
        content: format!("{}\n{}", TAILWIND_VITE_IMPORT, body),
        plugin_registered,
    }
}

/// Insert the plugin call at the start of the first plugins array
///
/// An array that already calls the plugin is left as is.
fn register_plugin(content: &str) -> Option<String> {
    let array_open = PLUGINS_ARRAY_RE.find(content)?;
    let (head, tail) = content.split_at(array_open.end());

    if array_body(tail).contains(PLUGIN_CALL) {
        return Some(content.to_string());
    }

    let separator = if tail.trim_start().starts_with(']') {
        ""
    } else {
        ", "
    };

    Some(format!("{}{}{}{}", head, PLUGIN_CALL, separator, tail))
}

/// Text up to the bracket closing an array whose `[` was just consumed
///
/// Without a closing bracket the rest of the input is returned.
fn array_body(tail: &str) -> &str {
    let mut depth = 0usize;
    for (idx, c) in tail.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return &tail[..idx],
            ']' => depth -= 1,
            _ => {}
        }
    }
    tail
}
