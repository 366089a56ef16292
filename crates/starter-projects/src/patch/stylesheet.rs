//! Tailwind import for the root stylesheet

/// Directive that pulls Tailwind into the stylesheet
pub const TAILWIND_CSS_IMPORT: &str = "@import \"tailwindcss\";";

/// Prepend the Tailwind import unless the stylesheet already has one
///
/// Returns `None` when the content is already patched.
pub fn patch_stylesheet(content: &str) -> Option<String> {
    if has_tailwind_import(content) {
        return None;
    }

    let mut patched = String::with_capacity(TAILWIND_CSS_IMPORT.len() + content.len() + 2);
    patched.push_str(TAILWIND_CSS_IMPORT);
    patched.push('\n');
    if !content.is_empty() {
        patched.push('\n');
        patched.push_str(content);
    }
    Some(patched)
}

fn has_tailwind_import(content: &str) -> bool {
    content.lines().any(|line| {
        let line = line.trim();
        line.starts_with("@import")
            && (line.contains("\"tailwindcss\"") || line.contains("'tailwindcss'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VITE_INDEX_CSS: &str = ":root {\n  font-family: system-ui, Avenir, Helvetica, Arial, sans-serif;\n}\n";

    #[test]
    fn test_prepends_import() {
        let patched = patch_stylesheet(VITE_INDEX_CSS).unwrap();
        assert!(patched.starts_with("@import \"tailwindcss\";\n"));
        assert!(patched.ends_with(VITE_INDEX_CSS));
    }

    #[test]
    fn test_second_application_is_noop() {
        let once = patch_stylesheet(VITE_INDEX_CSS).unwrap();
        assert_eq!(patch_stylesheet(&once), None);
    }

    #[test]
    fn test_single_quoted_import_counts() {
        assert_eq!(patch_stylesheet("@import 'tailwindcss';\nbody {}\n"), None);
    }

    #[test]
    fn test_empty_stylesheet() {
        assert_eq!(patch_stylesheet("").unwrap(), "@import \"tailwindcss\";\n");
    }
}
