use super::HealthLevel;
use super::StatusSnapshot;

#[test]
fn it_classifies_values() {
    assert_eq!(HealthLevel::classify("healthy"), HealthLevel::Healthy);
    assert_eq!(HealthLevel::classify("not_configured"), HealthLevel::Warning);
    assert_eq!(HealthLevel::classify("unhealthy: quota"), HealthLevel::Error);
    assert_eq!(HealthLevel::classify(""), HealthLevel::Error);
}

#[test]
fn it_maps_each_row_independently() {
    let snapshot = StatusSnapshot {
        backend: "healthy".to_string(),
        database: "not_configured".to_string(),
        llm: "error".to_string(),
    };

    let levels = snapshot
        .rows()
        .iter()
        .map(|row| return row.level)
        .collect::<Vec<HealthLevel>>();

    assert_eq!(
        levels,
        vec![HealthLevel::Healthy, HealthLevel::Warning, HealthLevel::Error]
    );
}
