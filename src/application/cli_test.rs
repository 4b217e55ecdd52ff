use anyhow::Result;
use test_utils::history_fixture;

use super::build;
use super::format_entry;
use super::request_from_matches;
use crate::domain::models::GeneratedSpecification;

fn entries() -> Result<Vec<GeneratedSpecification>> {
    return Ok(serde_json::from_str(history_fixture())?);
}

#[test]
fn it_formats_history_entries() -> Result<()> {
    let entries = entries()?;
    let res = format_entry(&entries[0]);

    assert!(res.starts_with("- (ID: 5d3c1f0a-8e2b) "));
    assert!(res.ends_with(", Template: Web Application, Users: Devs, Add login"));

    return Ok(());
}

#[test]
fn it_truncates_long_goals() -> Result<()> {
    let mut entry = entries()?.remove(1);
    entry.goal = "a".repeat(90);

    let res = format_entry(&entry);

    assert!(res.ends_with(&format!("{}...", "a".repeat(67))));
    assert!(res.contains("Template: Mobile App"));

    return Ok(());
}

#[test]
fn it_builds_requests_from_generate_args() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "taskgen",
        "generate",
        "--goal",
        "Add login",
        "--users",
        "Devs",
        "--risks",
        "SSO outages",
    ])?;
    let (_, generate_matches) = matches.subcommand().unwrap();

    let request = request_from_matches(generate_matches);

    assert_eq!(request.goal, "Add login");
    assert_eq!(request.users, "Devs");
    assert_eq!(request.constraints, "");
    assert_eq!(request.template, "web");
    assert_eq!(request.risks, "SSO outages");

    return Ok(());
}

#[test]
fn it_requires_goal_and_users_for_generate() {
    let res = build().try_get_matches_from(vec!["taskgen", "generate", "--goal", "Add login"]);
    assert!(res.is_err());
}

#[test]
fn it_rejects_unknown_templates() {
    let res = build().try_get_matches_from(vec![
        "taskgen",
        "generate",
        "--goal",
        "Add login",
        "--users",
        "Devs",
        "--template",
        "desktop",
    ]);
    assert!(res.is_err());
}
