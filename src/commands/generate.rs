//! Generate command implementation

use console::Style;
use std::path::{Path, PathBuf};

use super::helpers;
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::project::ProjectModel;
use crate::script::{ScriptGenerator, TargetLanguage, write_script};
use crate::vcs::VcsInfo;

pub fn run(config: &Path, output: Option<PathBuf>, args: GenerateArgs) -> Result<()> {
    let model = helpers::load_project(config, output)?;
    let vcs = helpers::project_vcs_info(&model);
    let script = write_project_script(&model, &vcs, args.target_language)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Generated"),
        script.display()
    );
    Ok(())
}

/// Generate the Vivado script for `model` and write it to disk
pub(crate) fn write_project_script(
    model: &ProjectModel,
    vcs: &VcsInfo,
    language: TargetLanguage,
) -> Result<PathBuf> {
    let script = ScriptGenerator::new(model, vcs)?
        .with_target_language(language)
        .generate();
    let path = write_script(model, &script)?;
    log::debug!("wrote {} ({} bytes)", path.display(), script.len());
    Ok(path)
}
