#[cfg(test)]
mod blocklist_tests {
    use std::fs;
    use tempfile::tempdir;
    use ytblock::core::blocklist::{format_rule, write_blocklist};

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_rule_shape() {
        assert_eq!(format_rule("abc"), "||youtube.com/watch?v=abc^");
    }

    #[test]
    fn test_write_blocklist_one_line_per_id_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("adguard_blocklist.txt");

        write_blocklist(&path, &ids(&["abc", "def", "xyz"])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "||youtube.com/watch?v=abc^\n\
             ||youtube.com/watch?v=def^\n\
             ||youtube.com/watch?v=xyz^\n"
        );
    }

    #[test]
    fn test_write_blocklist_keeps_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("adguard_blocklist.txt");

        // The same video listed by two channels produces two identical lines
        write_blocklist(&path, &ids(&["abc", "abc"])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert_eq!(
            content,
            "||youtube.com/watch?v=abc^\n||youtube.com/watch?v=abc^\n"
        );
    }

    #[test]
    fn test_write_blocklist_overwrites_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("adguard_blocklist.txt");

        write_blocklist(&path, &ids(&["abc", "def", "xyz"])).unwrap();
        write_blocklist(&path, &ids(&["only"])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "||youtube.com/watch?v=only^\n");
    }

    #[test]
    fn test_write_blocklist_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("adguard_blocklist.txt");
        let video_ids = ids(&["abc", "def"]);

        write_blocklist(&path, &video_ids).unwrap();
        let first = fs::read(&path).unwrap();

        write_blocklist(&path, &video_ids).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_blocklist_empty_ids_produces_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("adguard_blocklist.txt");

        write_blocklist(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_blocklist_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("adguard_blocklist.txt");

        let result = write_blocklist(&path, &ids(&["abc"]));
        assert!(result.is_err());
    }
}
