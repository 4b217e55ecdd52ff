use std::env;
use std::fs;
use std::io::Write;
use std::process;

fn cmd(args: Vec<&str>) -> String {
    let mut child = process::Command::new("./target/debug/taskgen");
    for arg in args {
        child.arg(arg);
    }

    for (key, _) in env::vars() {
        if key.starts_with("TASKGEN_") {
            child.env(key, "");
        }
    }

    return String::from_utf8(child.env("NO_COLOR", "1").output().unwrap().stdout).unwrap();
}

fn without_options(output: String) -> String {
    return output
        .split("Options:")
        .next()
        .unwrap()
        .trim()
        .to_string();
}

fn replace_section(readme: &mut String, marker: &str, body: &str) {
    let start_tag = format!("<!-- {marker} start -->");
    let end_tag = format!("<!-- {marker} end -->");
    let start = readme.find(&start_tag).unwrap();
    let end = readme.find(&end_tag).unwrap();
    readme.replace_range(start..end, &format!("{start_tag}\n```\n{body}\n```\n"));
}

pub fn update() {
    let output_help = cmd(vec!["--help"]);
    let output_help_history = without_options(cmd(vec!["history", "--help"]));
    let output_config = without_options(cmd(vec!["config", "--help"]));

    let mut readme = fs::read_to_string("./README.md").unwrap();
    replace_section(&mut readme, "command-help", output_help.trim_end());
    replace_section(&mut readme, "command-help-history", &output_help_history);
    replace_section(&mut readme, "command-config", &output_config);

    readme = readme.replace(&env::var("HOME").unwrap(), "~");

    let mut f = fs::File::create("./README.md").unwrap();
    f.write_all(readme.as_bytes()).unwrap();
}
