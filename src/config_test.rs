/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::build_report_request;
    use relato::types::Role;
    use std::path::PathBuf;

    fn args_with_items(path: PathBuf) -> CliArgs {
        CliArgs {
            format: "CSV".to_string(),
            user: "Ana".to_string(),
            role: "USER".to_string(),
            items: path,
            output: None,
            summary_json: None,
            quiet: false,
        }
    }

    #[test]
    fn test_items_file_is_loaded_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"A","value":300},{"id":2,"name":"B","value":900.5}]"#,
        )
        .unwrap();

        let request = build_report_request(&args_with_items(path)).unwrap();
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].name, "A");
        assert_eq!(request.items[1].value, 900.5);
        assert_eq!(request.user.role, Role::User);
        assert_eq!(request.format, "CSV");
    }

    #[test]
    fn test_unknown_role_is_kept_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "[]").unwrap();

        let mut args = args_with_items(path);
        args.role = "GUEST".to_string();
        let request = build_report_request(&args).unwrap();
        assert_eq!(request.user.role, Role::Unknown);
    }

    #[test]
    fn test_missing_items_file_fails_with_path_in_message() {
        let args = args_with_items(PathBuf::from("no-such-items.json"));
        let err = build_report_request(&args).unwrap_err();
        assert!(err.contains("no-such-items.json"));
    }

    #[test]
    fn test_malformed_items_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(build_report_request(&args_with_items(path)).is_err());
    }
}
