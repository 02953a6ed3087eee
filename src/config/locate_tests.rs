//! Tests for configuration file location.

use std::path::PathBuf;

use super::locate::SearchPaths;

mod resolution {
    use super::*;

    #[test]
    fn system_dirs_reversed_into_merge_order() {
        // XDG lists the most important directory first; merge order is
        // lowest priority first.
        let paths = SearchPaths::resolve("/etc/xdg:/opt/xdg", None);

        assert_eq!(
            paths.base_dirs(),
            &[PathBuf::from("/opt/xdg"), PathBuf::from("/etc/xdg")]
        );
    }

    #[test]
    fn user_dir_has_highest_priority() {
        let paths = SearchPaths::resolve("/etc/xdg", Some(PathBuf::from("/home/alice/.config")));

        assert_eq!(
            paths.base_dirs(),
            &[
                PathBuf::from("/etc/xdg"),
                PathBuf::from("/home/alice/.config")
            ]
        );
    }

    #[test]
    fn user_tier_skipped_when_absent() {
        let paths = SearchPaths::resolve("/etc/xdg", None);

        assert_eq!(paths.base_dirs(), &[PathBuf::from("/etc/xdg")]);
    }

    #[test]
    fn duplicate_dirs_keep_first_position() {
        let paths = SearchPaths::resolve("/a:/b:/a", Some(PathBuf::from("/a")));

        assert_eq!(
            paths.base_dirs(),
            &[PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn empty_entries_skipped() {
        let paths = SearchPaths::resolve("::/etc/xdg:", None);

        assert_eq!(paths.base_dirs(), &[PathBuf::from("/etc/xdg")]);
    }

    #[test]
    fn candidates_append_fixed_subpath() {
        let paths = SearchPaths::resolve("/etc/xdg", Some(PathBuf::from("/home/alice/.config")));

        let candidates: Vec<_> = paths.candidates().collect();
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/etc/xdg/pushover/pushover.conf"),
                PathBuf::from("/home/alice/.config/pushover/pushover.conf"),
            ]
        );
    }
}

mod existing {
    use super::*;

    fn write_config(base: &std::path::Path) {
        let dir = base.join("pushover");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("pushover.conf"), "api_user = alice\n").unwrap();
    }

    #[test]
    fn filters_to_files_present_on_disk() {
        let system = tempfile::tempdir().unwrap();
        let user = tempfile::tempdir().unwrap();
        write_config(user.path());

        let paths = SearchPaths::resolve(
            &system.path().to_string_lossy(),
            Some(user.path().to_path_buf()),
        );

        assert_eq!(
            paths.existing(),
            vec![user.path().join("pushover/pushover.conf")]
        );
    }

    #[test]
    fn existing_preserves_priority_order() {
        let system = tempfile::tempdir().unwrap();
        let user = tempfile::tempdir().unwrap();
        write_config(system.path());
        write_config(user.path());

        let paths = SearchPaths::resolve(
            &system.path().to_string_lossy(),
            Some(user.path().to_path_buf()),
        );

        assert_eq!(
            paths.existing(),
            vec![
                system.path().join("pushover/pushover.conf"),
                user.path().join("pushover/pushover.conf"),
            ]
        );
    }

    #[test]
    fn zero_existing_files_is_not_an_error() {
        let system = tempfile::tempdir().unwrap();

        let paths = SearchPaths::resolve(&system.path().to_string_lossy(), None);

        assert!(paths.existing().is_empty());
    }
}
