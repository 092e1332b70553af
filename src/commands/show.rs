//! Show command implementation

use console::Style;
use std::path::{Path, PathBuf};

use super::helpers;
use crate::cli::ShowArgs;
use crate::config::ImplSetting;
use crate::error::Result;
use crate::path_utils::to_forward_slashes;
use crate::project::{ProjectModel, SourceFile};

pub fn run(config: &Path, output: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let model = helpers::load_project(config, output)?;

    if args.json {
        println!("{}", to_json(&model)?);
    } else {
        display_project(&model);
    }
    Ok(())
}

fn to_json(model: &ProjectModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(model)?)
}

fn display_project(model: &ProjectModel) {
    let label = Style::new().bold();

    println!();
    println!("  {}", Style::new().bold().yellow().apply_to(&model.name));
    println!("    {} {}", label.apply_to("Part:"), model.part);
    println!("    {} {}", label.apply_to("Top:"), model.top);
    println!(
        "    {} {}",
        label.apply_to("Root:"),
        to_forward_slashes(&model.root)
    );
    println!(
        "    {} {}",
        label.apply_to("Output:"),
        to_forward_slashes(&model.output_dir)
    );

    if !model.generics.is_empty() {
        println!("    {}", label.apply_to("Generics:"));
        for (name, value) in model.generics.iter() {
            println!("      {} = {}", Style::new().cyan().apply_to(name), value);
        }
    }

    if !model.synth_options.is_empty() {
        println!("    {}", label.apply_to("Synthesis options:"));
        for option in &model.synth_options {
            println!(
                "      {} = {}",
                Style::new().cyan().apply_to(&option.key),
                option.value
            );
        }
    }

    if !model.impl_options.is_empty() {
        println!("    {}", label.apply_to("Implementation options:"));
        for step in &model.impl_options {
            println!("      {}", Style::new().cyan().apply_to(step.step));
            for setting in &step.settings {
                match setting {
                    ImplSetting::Enabled(enabled) => println!("        is_enabled = {enabled}"),
                    ImplSetting::Arg { name, value } => println!("        {name} = {value}"),
                }
            }
        }
    }

    if !model.external_lib_paths.is_empty() {
        println!("    {}", label.apply_to("IP repositories:"));
        for path in &model.external_lib_paths {
            println!("      {}", Style::new().dim().apply_to(to_forward_slashes(path)));
        }
    }

    display_files("Constraints:", &model.constraint_files);
    display_files("IP cores:", &model.ip_files);
    display_files("Block designs:", &model.block_design_files);

    if !model.libraries.is_empty() {
        println!("    {}", label.apply_to("Libraries:"));
        for library in &model.libraries {
            let n = library.files().len();
            let files_label = if n == 1 { "file" } else { "files" };
            println!(
                "      {} ({} {})",
                Style::new().cyan().apply_to(library.name()),
                n,
                files_label
            );
            for file in library.files() {
                println!(
                    "        {} {}",
                    Style::new().dim().apply_to(to_forward_slashes(file.path())),
                    file.kind()
                );
            }
        }
    }

    if let Some(linux) = &model.linux {
        println!("    {}", label.apply_to("Linux:"));
        let fields = [
            ("name", &linux.name),
            ("linux_dir", &linux.linux_dir),
            ("kernel", &linux.kernel),
            ("uboot", &linux.uboot),
            ("rootfs", &linux.rootfs),
            ("dts", &linux.dts),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                println!("      {} {}", Style::new().cyan().apply_to(format!("{key}:")), value);
            }
        }
    }
}

fn display_files(title: &str, files: &[SourceFile]) {
    if files.is_empty() {
        return;
    }
    let files_label = if files.len() == 1 { "file" } else { "files" };
    println!(
        "    {} ({} {})",
        Style::new().bold().apply_to(title),
        files.len(),
        files_label
    );
    for file in files {
        println!(
            "      {}",
            Style::new().dim().apply_to(to_forward_slashes(file.path()))
        );
    }
}
