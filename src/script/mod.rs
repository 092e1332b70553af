//! Vivado build script generation
//!
//! [`ScriptGenerator`] turns a [`ProjectModel`] and version-control metadata
//! into the Tcl script Vivado runs in batch mode. It only produces text;
//! [`write_script`] puts it on disk.
//!
//! The script takes two `-tclargs`, the synthesis and implementation enable
//! flags, and refuses to run without them.

pub mod builder;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ImplSetting;
use crate::error::{Result, fs};
use crate::path_utils::to_forward_slashes;
use crate::project::{FileKind, HdlKind, ProjectModel, SourceFile};
use crate::vcs::{VcsInfo, VcsInfoProvider};

pub use builder::{Command, FailurePolicy, ScriptBuilder, Section, SectionKind, tcl_word};

/// Parallel jobs handed to `launch_runs`
pub const LAUNCH_JOBS: u32 = 24;

/// Number of IP cache export passes after block design generation.
///
/// Two passes have always been emitted; whether the second one is needed
/// has not been established.
pub const IP_CACHE_EXPORT_PASSES: usize = 2;

/// Synthesis run name
const SYNTH_RUN: &str = "synth_1";
/// Implementation run name
const IMPL_RUN: &str = "impl_1";

/// Generic carrying the short commit id
pub const GIT_SHA_GENERIC: &str = "g_git_sha";
/// Generic carrying the dirty flag
pub const GIT_DIRTY_GENERIC: &str = "g_git_dirty";

/// HDL language Vivado uses for generated wrappers and templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TargetLanguage {
    #[default]
    Vhdl,
    Verilog,
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Vhdl => f.write_str("VHDL"),
            TargetLanguage::Verilog => f.write_str("Verilog"),
        }
    }
}

/// Generates the Vivado project script for one project
pub struct ScriptGenerator<'a> {
    model: &'a ProjectModel,
    vcs: VcsInfo,
    target_language: TargetLanguage,
}

impl<'a> ScriptGenerator<'a> {
    /// Create a generator; `vcs` is queried exactly once.
    pub fn new(model: &'a ProjectModel, vcs: &dyn VcsInfoProvider) -> Result<Self> {
        Ok(Self {
            model,
            vcs: vcs.vcs_info()?,
            target_language: TargetLanguage::default(),
        })
    }

    #[must_use]
    pub fn with_target_language(mut self, language: TargetLanguage) -> Self {
        self.target_language = language;
        self
    }

    /// Assemble all script sections
    pub fn build(&self) -> ScriptBuilder {
        let mut script = ScriptBuilder::new();
        self.header(script.section(SectionKind::Header));
        self.generics(script.section(SectionKind::Generics));
        self.external_ip_repos(script.section(SectionKind::ExternalIpRepos));
        self.synthesis_options(script.section(SectionKind::SynthesisOptions));
        self.implementation_options(script.section(SectionKind::ImplementationOptions));
        self.constraints(script.section(SectionKind::Constraints));
        self.hdl_sources(script.section(SectionKind::HdlSources));
        self.ip_cores(script.section(SectionKind::IpCores));
        self.block_designs(script.section(SectionKind::BlockDesigns));
        Self::top_module(script.section(SectionKind::TopModule));
        self.build_launch(script.section(SectionKind::BuildLaunch));
        script
    }

    /// Render the complete script text
    pub fn generate(&self) -> String {
        self.build().render()
    }

    fn header(&self, section: &mut Section) {
        let model = self.model;
        section
            .push(Command::comment("Autogenerated file"))
            .push(Command::comment("do not touch"))
            .push(Command::fatal(format!("set PRJ_NAME {}", tcl_word(&model.name))))
            .push(Command::fatal(format!("set PART {}", tcl_word(&model.part))))
            .push(Command::fatal(format!(
                "set TOP_MODULE {}",
                tcl_word(&model.top)
            )))
            .push(Command::fatal(format!(
                "set PRJ_DIR {}",
                tcl_word(&to_forward_slashes(&model.output_dir))
            )))
            .push(Command::block(
                "if { $argc != 2 }",
                vec![
                    Command::fatal(
                        "puts \"ERROR: expected 2 arguments: <synth_enable> <impl_enable>\"",
                    ),
                    Command::fatal("exit 1"),
                ],
            ))
            .push(Command::fatal("set ena_syn  [lindex $argv 0]"))
            .push(Command::fatal("set ena_impl [lindex $argv 1]"))
            .push(Command::Blank)
            .push(Command::fatal(
                "create_project $PRJ_NAME $PRJ_DIR -part $PART -force",
            ))
            .push(Command::fatal(
                "set_property XPM_LIBRARIES {XPM_CDC XPM_MEMORY XPM_FIFO} [current_project]",
            ))
            .push(Command::fatal(format!(
                "set_property target_language {} [current_project]",
                self.target_language
            )));
    }

    fn generics(&self, section: &mut Section) {
        let sha: String = self.vcs.short_id.chars().take(8).collect();
        let dirty = u8::from(self.vcs.dirty);

        section
            .push(Command::fatal("set GENERICS [list]"))
            .push(Command::fatal(format!(
                "lappend GENERICS {GIT_SHA_GENERIC}=32'h{sha}"
            )))
            .push(Command::fatal(format!(
                "lappend GENERICS {GIT_DIRTY_GENERIC}=1'b{dirty}"
            )));
        for (name, value) in self.model.generics.iter() {
            section.push(Command::fatal(format!(
                "lappend GENERICS {}",
                tcl_word(&format!("{name}={}", value.to_generic()))
            )));
        }
        section.push(Command::fatal(
            "set_property generic $GENERICS [current_fileset]",
        ));
    }

    fn external_ip_repos(&self, section: &mut Section) {
        if self.model.external_lib_paths.is_empty() {
            return;
        }
        for path in &self.model.external_lib_paths {
            section.push(Command::guarded(format!(
                "set_property ip_repo_paths [concat [get_property ip_repo_paths [current_project]] [list {}]] [current_project]",
                tcl_word(&to_forward_slashes(path))
            )));
        }
        section.push(Command::fatal("update_ip_catalog -rebuild"));
    }

    fn synthesis_options(&self, section: &mut Section) {
        for option in &self.model.synth_options {
            section.push(Command::fatal(run_property(
                &format!("steps.synth_design.args.{}", option.key),
                &option.value.to_step_arg(),
                SYNTH_RUN,
            )));
        }
    }

    fn implementation_options(&self, section: &mut Section) {
        for step in &self.model.impl_options {
            for setting in &step.settings {
                let command = match setting {
                    ImplSetting::Enabled(enabled) => run_property(
                        &format!("steps.{}.is_enabled", step.step),
                        &u8::from(*enabled).to_string(),
                        IMPL_RUN,
                    ),
                    ImplSetting::Arg { name, value } => run_property(
                        &format!("steps.{}.args.{}", step.step, name),
                        &value.to_step_arg(),
                        IMPL_RUN,
                    ),
                };
                section.push(Command::fatal(command));
            }
        }
    }

    fn constraints(&self, section: &mut Section) {
        for file in &self.model.constraint_files {
            section.push(Command::guarded(format!("read_xdc {}", file_word(file))));
        }
    }

    fn hdl_sources(&self, section: &mut Section) {
        for library in &self.model.libraries {
            section.push(Command::comment(format!("library : {}", library.name())));
            let lib = tcl_word(library.name());
            for file in library.files() {
                let reader = match file.kind() {
                    FileKind::Hdl(HdlKind::Vhdl) => "read_vhdl -vhdl2008",
                    FileKind::Hdl(HdlKind::Verilog) => "read_verilog",
                    FileKind::Hdl(HdlKind::SystemVerilog) => "read_verilog -sv",
                    // Library admission only lets HDL kinds through.
                    _ => continue,
                };
                section.push(Command::guarded(format!(
                    "{reader} -library {lib} {}",
                    file_word(file)
                )));
            }
        }
    }

    fn ip_cores(&self, section: &mut Section) {
        for file in &self.model.ip_files {
            section.push(Command::fatal(format!("read_ip {}", file_word(file))));
        }
    }

    fn block_designs(&self, section: &mut Section) {
        let model = self.model;
        if !model.block_design_files.is_empty() {
            let bd_path = model
                .output_dir
                .join(format!("{}.srcs", model.name))
                .join("sources_1/bd");
            let gen_path = model
                .output_dir
                .join(format!("{}.gen", model.name))
                .join("sources_1/bd");
            section
                .push(Command::fatal(format!(
                    "set bd_path  {}",
                    tcl_word(&to_forward_slashes(&bd_path))
                )))
                .push(Command::fatal(format!(
                    "set gen_path {}",
                    tcl_word(&to_forward_slashes(&gen_path))
                )));
        }

        for file in &model.block_design_files {
            section
                .push(Command::fatal(format!("set b {}", file_word(file))))
                .push(Command::fatal("set bdname [file rootname [file tail $b]]"))
                .push(Command::checked("source $b"))
                .push(Command::fatal(
                    "make_wrapper -files [get_files $bd_path/$bdname/$bdname.bd] -top -inst_template -testbench",
                ))
                .push(Command::guarded(
                    "add_files -norecurse $gen_path/$bdname/hdl/${bdname}_wrapper.v",
                ))
                .push(Command::guarded(
                    "add_files -norecurse $gen_path/$bdname/hdl/${bdname}_wrapper.vhd",
                ))
                .push(Command::fatal(
                    "generate_target all [get_files $bd_path/$bdname/$bdname.bd]",
                ));
        }

        section
            .push(Command::guarded("upgrade_ip [get_ips *]"))
            .push(Command::guarded("generate_target all [get_ips *]"));
        for _ in 0..IP_CACHE_EXPORT_PASSES {
            section.push(Command::block(
                "foreach i [get_ips *]",
                vec![Command::guarded("config_ip_cache -export [get_ips -all $i]")],
            ));
        }
    }

    fn top_module(section: &mut Section) {
        section
            .push(Command::fatal("update_compile_order -fileset sources_1"))
            .push(Command::fatal(
                "set_property top $TOP_MODULE [current_fileset]",
            ))
            .push(Command::fatal("update_compile_order -fileset sources_1"));
    }

    fn build_launch(&self, section: &mut Section) {
        let xsa = tcl_word(&to_forward_slashes(&self.model.hw_platform_path()));
        section
            .push(Command::block(
                "if { $ena_syn || $ena_impl }",
                vec![
                    Command::fatal(format!(
                        "launch_runs synth_1 -jobs {LAUNCH_JOBS} -scripts_only"
                    )),
                    Command::fatal("reset_runs synth_1"),
                    Command::fatal(format!("launch_runs synth_1 -jobs {LAUNCH_JOBS}")),
                    Command::fatal("wait_on_run synth_1"),
                ],
            ))
            .push(Command::block(
                "if { $ena_syn || $ena_impl }",
                vec![
                    Command::fatal(format!(
                        "launch_runs impl_1 -to_step write_bitstream -jobs {LAUNCH_JOBS}"
                    )),
                    Command::fatal("wait_on_run impl_1"),
                    Command::comment("export"),
                    Command::fatal(format!(
                        "write_hw_platform -fixed -include_bit -force -file {xsa}"
                    )),
                ],
            ));
    }
}

/// `set_property` on a run, with name and value passed as separate words so
/// property names containing spaces (`MORE OPTIONS`) stay one argument
fn run_property(name: &str, value: &str, run: &str) -> String {
    format!(
        "set_property -name {} -value {} -objects [get_runs {run}]",
        tcl_word(name),
        tcl_word(value)
    )
}

fn file_word(file: &SourceFile) -> String {
    tcl_word(&to_forward_slashes(file.path()))
}

/// Write `script` to the model's script path, replacing any previous file
pub fn write_script(model: &ProjectModel, script: &str) -> Result<PathBuf> {
    let path = model.script_path();
    write_truncating(&path, script)?;
    Ok(path)
}

fn write_truncating(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| fs::write_failed(path, e.to_string()))
}
