//! Tests for the repository pipeline.

#[cfg(test)]
mod tests {
    use crate::repo::{
        build_digest, collect_files, excerpt, FileRecord, SkipReason, MAX_FILE_SIZE,
        QUESTION_EXCERPT_CHARS,
    };
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn record(path: &str, content: &str) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_collect_retains_small_text_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("README.md"), "hello").unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/main.rs"), "fn main() {}").unwrap();

        let report = collect_files(tmp.path());

        assert_eq!(report.records.len(), 2);
        assert!(report.skipped.is_empty());
        let paths = report.paths();
        assert!(paths.contains(&"README.md".to_string()));
        assert!(paths.contains(&"src/main.rs".to_string()));
    }

    #[test]
    fn test_collect_skips_oversized_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("small.txt"), "ok").unwrap();

        let mut big = File::create(tmp.path().join("big.bin")).unwrap();
        let chunk = vec![b'x'; 50_000];
        for _ in 0..5 {
            big.write_all(&chunk).unwrap(); // 250,000 bytes > MAX_FILE_SIZE
        }
        drop(big);

        let report = collect_files(tmp.path());

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].path, "small.txt");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, "big.bin");
        assert_eq!(report.skipped[0].reason, SkipReason::Oversize);
    }

    #[test]
    fn test_collect_keeps_file_at_size_limit() {
        let tmp = TempDir::new().unwrap();
        let exact = vec![b'y'; MAX_FILE_SIZE as usize];
        fs::write(tmp.path().join("edge.txt"), &exact).unwrap();

        let report = collect_files(tmp.path());
        assert_eq!(report.records.len(), 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_collect_decodes_invalid_utf8_leniently() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("mixed.txt"), b"caf\xe9 latte").unwrap();

        let report = collect_files(tmp.path());

        assert_eq!(report.records.len(), 1);
        // Invalid bytes are replaced, never an error.
        assert!(report.records[0].content.contains("caf"));
        assert!(report.records[0].content.contains('\u{FFFD}'));
    }

    #[test]
    fn test_collect_prunes_git_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("code.rs"), "pub fn f() {}").unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".git/config"), "[core]").unwrap();

        let report = collect_files(tmp.path());

        let paths = report.paths();
        assert_eq!(paths, vec!["code.rs".to_string()]);
    }

    #[test]
    fn test_digest_format_and_order() {
        let records = vec![record("a.txt", "alpha"), record("dir/b.txt", "beta")];
        let digest = build_digest(&records);

        assert_eq!(
            digest,
            "# File: a.txt\nalpha\n\n# File: dir/b.txt\nbeta\n"
        );
        // Headers appear in traversal order.
        let a = digest.find("# File: a.txt").unwrap();
        let b = digest.find("# File: dir/b.txt").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_digest_of_empty_collection_is_empty() {
        assert_eq!(build_digest(&[]), "");
    }

    #[test]
    fn test_excerpt_respects_character_budget() {
        let digest = build_digest(&[record("huge.txt", &"z".repeat(40_000))]);

        let cut = excerpt(&digest, 16_000);
        assert_eq!(cut.chars().count(), 16_000);

        let question_cut = excerpt(cut, QUESTION_EXCERPT_CHARS);
        assert_eq!(question_cut.chars().count(), QUESTION_EXCERPT_CHARS);
    }

    #[test]
    fn test_excerpt_short_input_untouched() {
        assert_eq!(excerpt("short", 16_000), "short");
        assert_eq!(excerpt("", 8_000), "");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        // 4 characters, 12 bytes.
        let text = "日本語字";
        let cut = excerpt(text, 2);
        assert_eq!(cut, "日本");
        assert_eq!(cut.chars().count(), 2);
    }

    #[test]
    fn test_load_scenario_digest_excludes_oversized_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("one.txt"), "first").unwrap();
        fs::write(tmp.path().join("two.txt"), "second").unwrap();
        fs::write(tmp.path().join("three.txt"), "third").unwrap();
        fs::write(tmp.path().join("blob.bin"), vec![0u8; 300_000]).unwrap();

        let report = collect_files(tmp.path());
        let digest = build_digest(&report.records);

        assert_eq!(report.records.len(), 3);
        assert!(!report.paths().contains(&"blob.bin".to_string()));
        assert!(digest.contains("# File: one.txt"));
        assert!(digest.contains("# File: two.txt"));
        assert!(digest.contains("# File: three.txt"));
        assert!(!digest.contains("blob.bin"));
    }
}
