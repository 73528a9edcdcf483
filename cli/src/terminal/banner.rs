use colored::*;

use crate::terminal::print;

const LOGO: &str = r#"
▄▀█ █▄ █ ▄▀█ █▀▀ █▀█ █▀▄▀█
█▀█ █ ▀█ █▀█ █▄█ █▀▄ █ ▀ █
"#;

pub fn print() {
    for line in LOGO.lines().filter(|line| !line.is_empty()) {
        print::centerln(&line.bright_green().bold().to_string());
    }
}
