use test_utils::tasks_fixture;

use super::wrap_lines;
use super::Preview;
use crate::domain::services::Themes;

#[test]
fn it_keeps_short_lines() {
    assert_eq!(
        wrap_lines("## Tasks\n\n- Build login form", 40),
        vec!["## Tasks", "", "- Build login form"]
    );
}

#[test]
fn it_wraps_on_words() {
    let lines = wrap_lines("- Add a POST endpoint that issues a signed cookie", 20);

    insta::assert_snapshot!(lines.join("\n"), @r###"
    - Add a POST
    endpoint that issues
    a signed cookie
    "###);
}

#[test]
fn it_keeps_leading_indentation() {
    assert_eq!(
        wrap_lines("- parent\n  - child\n    code", 80),
        vec!["- parent", "  - child", "    code"]
    );
}

#[test]
fn it_counts_indentation_toward_the_width() {
    assert_eq!(
        wrap_lines("    - Queue writes locally", 16),
        vec!["    - Queue", "writes locally"]
    );
}

#[test]
fn it_splits_long_words() {
    let lines = wrap_lines("abcdefghij", 4);
    assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
}

#[test]
fn it_highlights_every_wrapped_line() {
    let mut preview = Preview::new(Themes::get("base16-ocean.dark").unwrap());
    let expected = wrap_lines(tasks_fixture(), 40).len();

    let lines = preview.lines(tasks_fixture(), 40);
    assert_eq!(lines.len(), expected);

    let text = lines[0]
        .spans
        .iter()
        .map(|span| return span.content.to_string())
        .collect::<String>();
    assert_eq!(text, "## User Stories");
}

#[test]
fn it_rebuilds_on_width_change() {
    let mut preview = Preview::new(Themes::get("base16-ocean.dark").unwrap());
    let wide = preview.lines(tasks_fixture(), 200).len();
    let narrow = preview.lines(tasks_fixture(), 20).len();

    assert!(narrow > wide);
}
