use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Whether the interactive picker can take over the terminal
    pub fn interactive(&self) -> bool {
        self.is_tty && !self.is_ci
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    TerminalCapabilities {
        is_tty,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            // First locale variable set wins
            if !v.is_empty() {
                return v != "c" && v != "posix";
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}
