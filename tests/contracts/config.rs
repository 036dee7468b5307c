//! Configuration contracts
//!
//! Priority: CLI flags > env vars > ./catpick.toml > user config > defaults

use crate::common::*;

const ONE_ROOT: &str = r#"[{ "value": "solo", "name": "Solo" }]"#;
const OTHER_ROOT: &str = r#"[{ "value": "autre", "name": "Autre" }]"#;

fn tree_config(path: &str) -> String {
    format!("[tree]\npath = \"{}\"\n", path)
}

mod config_priority {
    use super::*;

    #[test]
    fn contract_cli_flag_overrides_env_and_config() {
        let env = TestEnv::builder()
            .with_project_config(&tree_config("tree.json"))
            .build();
        env.write_project_file("flag.json", ONE_ROOT);
        env.write_project_file("env.json", OTHER_ROOT);

        let result = env.run_with_env(
            &["path", "solo", "--tree", "flag.json"],
            &[("CATPICK_TREE", "env.json")],
        );
        assert_eq!(result.lines(), ["Solo"], "stderr: {}", result.stderr);
    }

    #[test]
    fn contract_env_overrides_project_config() {
        let env = TestEnv::builder()
            .with_project_config(&tree_config("tree.json"))
            .build();
        env.write_project_file("env.json", OTHER_ROOT);

        let result = env.run_with_env(&["path", "autre"], &[("CATPICK_TREE", "env.json")]);
        assert_eq!(result.lines(), ["Autre"], "stderr: {}", result.stderr);
    }

    #[test]
    fn contract_project_config_overrides_user_config() {
        let env = TestEnv::builder()
            .with_project_config(&tree_config("tree.json"))
            .with_home_config(&tree_config("user.json"))
            .build();
        env.write_home_file("catpick/user.json", OTHER_ROOT);

        let result = env.run(&["path", "bov"]);
        assert_eq!(result.lines(), ["Animaux > Ruminants > Bovins"]);
    }

    #[test]
    fn contract_user_config_is_used_without_project_config() {
        let env = TestEnv::builder()
            .with_home_config(&tree_config("user.json"))
            .build();
        env.write_home_file("catpick/user.json", OTHER_ROOT);

        let result = env.run(&["path", "autre"]);
        assert_eq!(result.lines(), ["Autre"], "stderr: {}", result.stderr);
    }

    #[test]
    fn contract_explicit_config_file_is_required() {
        let env = TestEnv::builder().build();
        let result = env.run(&["check", "--config", "missing.toml"]);

        assert!(!result.success);
        assert!(result.stderr.contains("failed to load config"));
    }

    #[test]
    fn contract_explicit_config_file_resolves_relative_tree() {
        let env = TestEnv::builder().without_tree().build();
        env.write_project_file("conf/settings.toml", &tree_config("data/tree.json"));
        env.write_project_file("conf/data/tree.json", ONE_ROOT);

        let result = env.run(&["path", "solo", "--config", "conf/settings.toml"]);
        assert_eq!(result.lines(), ["Solo"], "stderr: {}", result.stderr);
    }
}

mod config_warnings {
    use super::*;

    #[test]
    fn contract_unknown_key_warns_and_continues() {
        let env = TestEnv::builder()
            .with_project_config("[tree]\npath = \"tree.json\"\n\n[picker]\nplacehodler = \"x\"\n")
            .build();

        let result = env.run(&["path", "vol"]);
        assert!(result.success, "stderr: {}", result.stderr);
        assert_eq!(result.lines(), ["Animaux > Volailles"]);
        assert!(
            result.stderr.contains("unknown config key"),
            "stderr: {}",
            result.stderr
        );
    }

    #[test]
    fn contract_invalid_project_config_falls_back_to_defaults() {
        let env = TestEnv::builder()
            .with_project_config("[tree\npath = ")
            .build();

        let result = env.run(&["path", "vol", "--tree", "tree.json"]);
        assert!(result.success, "stderr: {}", result.stderr);
        assert!(result.stderr.contains("ignoring unreadable config"));
    }
}
