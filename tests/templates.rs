#[cfg(test)]
mod tests {
    use repic::libs::template::Templates;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TemplateTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TemplateTestContext {
        fn setup() -> Self {
            TemplateTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn write_templates(ctx: &TemplateTestContext, contents: &str) -> std::path::PathBuf {
        let path = ctx.temp_dir.path().join("templates.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_load_and_lookup(ctx: &mut TemplateTestContext) {
        let path = write_templates(
            ctx,
            r#"{
                "templates": [
                    {
                        "name": "meetings",
                        "summary": "Meetings - CC Gantt - {month_short}'{year_short}",
                        "description": "Recurring meetings",
                        "labels": ["recurring"],
                        "priority": "High"
                    },
                    {
                        "name": "support",
                        "summary": "Support - {month_short}'{year_short}"
                    }
                ]
            }"#,
        );

        let templates = Templates::load(&path).unwrap();
        assert_eq!(templates.names(), vec!["meetings", "support"]);

        let meetings = templates.get("meetings").unwrap();
        assert_eq!(meetings.priority, "High");
        assert_eq!(meetings.labels, vec!["recurring"]);
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_defaults_applied(ctx: &mut TemplateTestContext) {
        let path = write_templates(ctx, r#"{"templates": [{"name": "bare", "summary": "Bare - {month_short}"}]}"#);

        let templates = Templates::load(&path).unwrap();
        let bare = templates.get("bare").unwrap();
        assert_eq!(bare.priority, "Medium");
        assert_eq!(bare.issue_type, "Epic");
        assert!(bare.description.is_empty());
        assert!(bare.labels.is_empty());
        assert!(bare.components.is_empty());
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_unknown_template_is_an_error(ctx: &mut TemplateTestContext) {
        let path = write_templates(ctx, r#"{"templates": []}"#);
        let templates = Templates::load(&path).unwrap();
        assert!(templates.is_empty());

        let err = templates.get("missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_invalid_json_is_an_error(ctx: &mut TemplateTestContext) {
        let path = write_templates(ctx, "not json at all");
        assert!(Templates::load(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Templates::load(std::path::Path::new("/nonexistent/templates.json")).is_err());
    }
}
