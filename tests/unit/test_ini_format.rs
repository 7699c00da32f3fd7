//! Unit tests for the project configuration file format

use texshell::config::{ConfigDocument, IniError};

#[cfg(test)]
mod ini_format_tests {
    use super::*;

    #[test]
    fn test_parse_sections_in_file_order() {
        let doc = ConfigDocument::parse("[zeta]\nx = 1\n[alpha]\ny = 2\n").unwrap();
        let names: Vec<&str> = doc.sections().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_both_delimiters() {
        let doc = ConfigDocument::parse("[main]\na = 1\nb: two\nc=x=y\n").unwrap();
        assert_eq!(doc.get("main", "a"), Some("1"));
        assert_eq!(doc.get("main", "b"), Some("two"));
        assert_eq!(doc.get("main", "c"), Some("x=y"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "# leading\n\n[main]\n; note\nkey = value\n\n";
        let doc = ConfigDocument::parse(text).unwrap();
        assert_eq!(doc.section("main").unwrap().len(), 1);
    }

    #[test]
    fn test_keys_keep_case_and_duplicates_overwrite() {
        let doc = ConfigDocument::parse("[main]\nKey = 1\nkey = 2\nKey = 3\n").unwrap();
        let section = doc.section("main").unwrap();
        assert_eq!(section.len(), 2);
        assert_eq!(section.get("Key"), Some("3"));
        assert_eq!(section.get("key"), Some("2"));
    }

    #[test]
    fn test_continuation_lines() {
        let doc = ConfigDocument::parse("[main]\nlist = a\n  b\n  c\nnext = 1\n").unwrap();
        assert_eq!(doc.get("main", "list"), Some("a\nb\nc"));
        assert_eq!(doc.get("main", "next"), Some("1"));

        let rendered = doc.to_ini_string();
        assert!(rendered.contains("list = a\n\tb\n\tc\n"));
        assert_eq!(ConfigDocument::parse(&rendered).unwrap(), doc);
    }

    #[test]
    fn test_missing_section_header() {
        assert!(matches!(
            ConfigDocument::parse("a = 1\n[main]\n"),
            Err(IniError::MissingSectionHeader { line: 1, .. })
        ));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            ConfigDocument::parse("[main]\njust words\n"),
            Err(IniError::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            ConfigDocument::parse("[main\n"),
            Err(IniError::MalformedLine { line: 1, .. })
        ));
        assert!(ConfigDocument::parse("[]\n").is_err());
    }

    #[test]
    fn test_empty_section_written() {
        let mut doc = ConfigDocument::new();
        doc.ensure_section("main");
        assert_eq!(doc.to_ini_string(), "[main]\n\n");
    }

    #[test]
    fn test_set_creates_section_and_replaces() {
        let mut doc = ConfigDocument::new();
        doc.set("main", "a", "1");
        doc.set("main", "b", "2");
        doc.set("main", "a", "3");
        assert_eq!(doc.to_ini_string(), "[main]\na = 3\nb = 2\n\n");
    }
}
