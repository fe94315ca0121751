#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use daylog::libs::report::{build_day_report, last_task_end_time, RecordGroup, END_OF_DAY_MINUTES};
    use daylog::libs::task::{TaskKind, TaskRecord};

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn record(date: &str, start: &str, category: &str, name: &str, kind: TaskKind) -> TaskRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        TaskRecord::new(date, start, category, name, kind)
    }

    #[test]
    fn test_resolver_past_day_ends_at_midnight() {
        let now = at("2024-01-15", "12:00:00");
        assert_eq!(last_task_end_time("2024-01-14", 540.0, now), END_OF_DAY_MINUTES);
        assert_eq!(last_task_end_time("2023-12-31", 0.0, now), END_OF_DAY_MINUTES);
        assert_eq!(last_task_end_time("1999-06-01", 1439.0, now), END_OF_DAY_MINUTES);
    }

    #[test]
    fn test_resolver_future_day_echoes_start() {
        let now = at("2024-01-15", "12:00:00");
        assert_eq!(last_task_end_time("2024-01-16", 600.0, now), 600.0);
        assert_eq!(last_task_end_time("2030-01-01", 0.0, now), 0.0);
    }

    #[test]
    fn test_resolver_invalid_date_echoes_start() {
        let now = at("2024-01-15", "12:00:00");
        assert_eq!(last_task_end_time("2025-02-31", 300.0, now), 300.0);
        assert_eq!(last_task_end_time("not-a-date", 120.0, now), 120.0);
        assert_eq!(last_task_end_time("", 45.0, now), 45.0);
        assert_eq!(last_task_end_time("2024-13-05", 10.0, now), 10.0);
    }

    #[test]
    fn test_resolver_today_returns_current_minute() {
        let now = at("2024-01-15", "12:00:00");
        // Task started in the past today: interval runs to "now" (720)
        assert_eq!(last_task_end_time("2024-01-15", 540.0, now), 720.0);
        assert_eq!(last_task_end_time("2024-01-15", 720.0, now), 720.0);
        // Task starting later today: zero-length interval
        assert_eq!(last_task_end_time("2024-01-15", 800.0, now), 800.0);
    }

    #[test]
    fn test_resolver_today_rounds_seconds() {
        // 12:00:20 rounds down to 720, 12:00:45 rounds up to 721
        assert_eq!(last_task_end_time("2024-01-15", 540.0, at("2024-01-15", "12:00:20")), 720.0);
        assert_eq!(last_task_end_time("2024-01-15", 540.0, at("2024-01-15", "12:00:45")), 721.0);
    }

    #[test]
    fn test_resolver_clamps_just_before_midnight() {
        // 23:59:30 would round to 1440; the live-clock path must stay below
        let now = at("2024-01-15", "23:59:30");
        assert_eq!(last_task_end_time("2024-01-15", 100.0, now), 1439.0);
    }

    #[test]
    fn test_resolver_output_always_in_range() {
        let now = at("2024-01-15", "12:00:00");
        for date in ["2024-01-14", "2024-01-15", "2024-01-16", "bogus"] {
            for start in [0.0, 540.0, 1439.0] {
                let end = last_task_end_time(date, start, now);
                assert!((0.0..=END_OF_DAY_MINUTES).contains(&end));
            }
        }
    }

    #[test]
    fn test_day_report_end_to_end() {
        // Two tasks at 09:00 and 10:30, evaluated at noon the same day:
        // 90 minutes each.
        let records = vec![
            record("2024-01-15", "09:00", "Dev", "api", TaskKind::Normal),
            record("2024-01-15", "10:30", "Dev", "review", TaskKind::Normal),
        ];
        let report = build_day_report(&records, at("2024-01-15", "12:00:00"));

        assert_eq!(report.total_minutes, 180.0);
        assert_eq!(report.pause_minutes, 0.0);
        assert_eq!(report.categories.len(), 1);

        let dev = &report.categories[0];
        assert_eq!(dev.name, "Dev");
        assert_eq!(dev.minutes, 180.0);
        assert_eq!(dev.percent, 100.0);
        assert_eq!(dev.tasks.len(), 2);
        for task in &dev.tasks {
            assert_eq!(task.minutes, 90.0);
            assert_eq!(task.percent, 50.0);
        }
    }

    #[test]
    fn test_day_report_pause_and_end_markers() {
        let records = vec![
            record("2024-01-15", "09:00", "Dev", "api", TaskKind::Normal),
            record("2024-01-15", "10:00", "", "pause", TaskKind::Pause),
            record("2024-01-15", "10:30", "Ops", "deploy", TaskKind::Normal),
            record("2024-01-15", "12:00", "", "end", TaskKind::End),
        ];
        let report = build_day_report(&records, at("2024-01-15", "13:00:00"));

        // Work stops at the end marker, not at "now"
        assert_eq!(report.total_minutes, 150.0);
        assert_eq!(report.pause_minutes, 30.0);
        assert_eq!(report.categories.len(), 2);
    }

    #[test]
    fn test_day_report_groups_repeated_tasks() {
        let records = vec![
            record("2024-01-15", "09:00", "Dev", "api", TaskKind::Normal),
            record("2024-01-15", "10:00", "Ops", "deploy", TaskKind::Normal),
            record("2024-01-15", "11:00", "Dev", "api", TaskKind::Normal),
            record("2024-01-15", "12:00", "", "end", TaskKind::End),
        ];
        let report = build_day_report(&records, at("2024-01-15", "14:00:00"));

        assert_eq!(report.total_minutes, 180.0);
        // Dev has 120 minutes across two intervals of the same task
        let dev = report.categories.iter().find(|c| c.name == "Dev").unwrap();
        assert_eq!(dev.minutes, 120.0);
        assert_eq!(dev.tasks.len(), 1);
        assert_eq!(dev.tasks[0].name, "api");
        assert_eq!(dev.tasks[0].minutes, 120.0);
        assert!((dev.percent - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_day_report_orders_categories_by_minutes() {
        let records = vec![
            record("2024-01-15", "09:00", "Small", "a", TaskKind::Normal),
            record("2024-01-15", "09:30", "Big", "b", TaskKind::Normal),
            record("2024-01-15", "12:00", "", "end", TaskKind::End),
        ];
        let report = build_day_report(&records, at("2024-01-15", "13:00:00"));

        assert_eq!(report.categories[0].name, "Big");
        assert_eq!(report.categories[1].name, "Small");
    }

    #[test]
    fn test_day_report_past_day_last_task_runs_to_midnight() {
        let records = vec![record("2024-01-14", "22:00", "Dev", "late", TaskKind::Normal)];
        let report = build_day_report(&records, at("2024-01-15", "09:00:00"));

        assert_eq!(report.total_minutes, 120.0);
    }

    #[test]
    fn test_day_report_ignores_unparseable_start_times() {
        let records = vec![
            record("2024-01-15", "09:00", "Dev", "api", TaskKind::Normal),
            record("2024-01-15", "9:3", "Dev", "broken", TaskKind::Normal),
            record("2024-01-15", "10:00", "", "end", TaskKind::End),
        ];
        let report = build_day_report(&records, at("2024-01-15", "12:00:00"));

        assert_eq!(report.total_minutes, 60.0);
        let dev = &report.categories[0];
        assert_eq!(dev.tasks.len(), 1);
        assert_eq!(dev.tasks[0].name, "api");
    }

    #[test]
    fn test_day_report_empty_input() {
        let now = at("2024-01-15", "12:00:00");
        let report = build_day_report(&[], now);

        assert_eq!(report.total_minutes, 0.0);
        assert_eq!(report.pause_minutes, 0.0);
        assert!(report.categories.is_empty());
        assert_eq!(report.date, now.date());
    }

    #[test]
    fn test_record_group_formatting() {
        let records = vec![
            record("2024-01-15", "09:00", "Dev", "api", TaskKind::Normal),
            record("2024-01-15", "10:30", "", "end", TaskKind::End),
        ];
        let rows = records.format(at("2024-01-15", "12:00:00"));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].duration, "1h 30m");
        assert_eq!(rows[0].kind, "normal");
        // End markers own no interval
        assert_eq!(rows[1].duration, "-");
        assert_eq!(rows[1].kind, "end");
    }
}
