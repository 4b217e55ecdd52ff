mod readme;

use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.last().map(|e| return e.as_str()) == Some("update-readme") {
        readme::update();
    } else {
        eprintln!("ERROR: No task selected");
        process::exit(1);
    }
}
