use std::path::Path;

use template_helpers_core::fs;

use crate::output;

/// Print the trimmed contents of `file`. Unreadable files print nothing.
pub fn run(file: &Path) {
    let contents = fs::read(file);
    if contents.is_empty() && !file.is_file() {
        output::print_warning(&format!("{} could not be read", file.display()));
        return;
    }
    println!("{contents}");
}
