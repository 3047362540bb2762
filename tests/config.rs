#[cfg(test)]
mod tests {
    use repic::libs::config::Config;
    use std::env;

    const VARS: [&str; 4] = ["JIRA_SERVER", "JIRA_EMAIL", "JIRA_API_TOKEN", "JIRA_PROJECT_KEY"];

    fn clear_vars() {
        for var in VARS {
            env::remove_var(var);
        }
        env::remove_var("REPIC_TEMPLATES");
    }

    fn set_vars() {
        env::set_var("JIRA_SERVER", "https://example.atlassian.net/");
        env::set_var("JIRA_EMAIL", "bot@example.com");
        env::set_var("JIRA_API_TOKEN", "token-123");
        env::set_var("JIRA_PROJECT_KEY", "CC");
    }

    // Environment variables are process-global, so all scenarios run in
    // one test to avoid interference between parallel test threads.
    #[test]
    fn test_config_from_env() {
        clear_vars();

        // Missing everything: the error names every missing variable.
        let err = Config::from_env().unwrap_err().to_string();
        for var in VARS {
            assert!(err.contains(var), "error should name {}: {}", var, err);
        }

        // Partially set: only the remaining gaps are reported.
        env::set_var("JIRA_SERVER", "https://example.atlassian.net");
        env::set_var("JIRA_EMAIL", "bot@example.com");
        let err = Config::from_env().unwrap_err().to_string();
        assert!(!err.contains("JIRA_SERVER"));
        assert!(err.contains("JIRA_API_TOKEN"));
        assert!(err.contains("JIRA_PROJECT_KEY"));

        // Fully set: loads, trims the trailing slash, uses the default
        // template file.
        set_vars();
        let config = Config::from_env().unwrap();
        assert_eq!(config.server, "https://example.atlassian.net");
        assert_eq!(config.email, "bot@example.com");
        assert_eq!(config.api_token, "token-123");
        assert_eq!(config.project_key, "CC");
        assert_eq!(config.templates_file, "templates.json");

        // Template path override.
        env::set_var("REPIC_TEMPLATES", "custom/epics.json");
        let config = Config::from_env().unwrap();
        assert_eq!(config.templates_file, "custom/epics.json");

        // Whitespace-only values count as missing.
        env::set_var("JIRA_API_TOKEN", "   ");
        let err = Config::from_env().unwrap_err().to_string();
        assert!(err.contains("JIRA_API_TOKEN"));

        clear_vars();
    }
}
