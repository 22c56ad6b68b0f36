use std::path::Path;

use anyhow::Result;

use template_helpers_core::code;

/// Print `file` as a fenced code block.
pub fn run(file: &Path, lang: Option<&str>) -> Result<()> {
    print!("{}", code::embed(file, lang)?);
    Ok(())
}
