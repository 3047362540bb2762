#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use repic::libs::period::Period;
    use repic::libs::render::{render, substitute};
    use repic::libs::template::EpicTemplate;

    fn template() -> EpicTemplate {
        EpicTemplate {
            name: "meetings".to_string(),
            summary: "Meetings - CC Gantt - {month_short}'{year_short}".to_string(),
            description: "Recurring meetings for {month_name} {year} ({quarter})".to_string(),
            labels: vec!["recurring".to_string(), "meetings".to_string()],
            components: vec![],
            priority: "Medium".to_string(),
            issue_type: "Epic".to_string(),
        }
    }

    #[test]
    fn test_substitute_all_tokens() {
        let period = Period::resolve(3, 2026).unwrap();
        assert_eq!(substitute("{month_short}'{year_short}", &period), "Mar'26");
        assert_eq!(substitute("{month} {month_name} {year} {quarter}", &period), "03 March 2026 Q1");
    }

    #[test]
    fn test_unrecognized_tokens_left_verbatim() {
        let period = Period::resolve(3, 2026).unwrap();
        assert_eq!(substitute("{month_short} {sprint_name}", &period), "Mar {sprint_name}");
        assert_eq!(substitute("no tokens here", &period), "no tokens here");
    }

    #[test]
    fn test_render_fills_all_fields() {
        let period = Period::resolve(2, 2026).unwrap();
        let rendered = render(&template(), &period);

        assert_eq!(rendered.summary, "Meetings - CC Gantt - Feb'26");
        assert_eq!(rendered.description, "Recurring meetings for February 2026 (Q1)");
        assert_eq!(rendered.labels, vec!["recurring", "meetings"]);
        assert_eq!(rendered.priority, "Medium");
        assert_eq!(rendered.issue_type, "Epic");
        assert_eq!(rendered.start_date, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
        assert_eq!(rendered.due_date, NaiveDate::from_ymd_opt(2026, 2, 27).unwrap());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let period = Period::resolve(7, 2026).unwrap();
        let first = render(&template(), &period);
        let second = render(&template(), &period);
        assert_eq!(first, second);
    }
}
