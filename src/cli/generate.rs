use clap::Parser;

use crate::script::TargetLanguage;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write the script next to the project:\n    xilbuild generate\n\n\
                  Write into a build directory:\n    xilbuild generate -c fpga/project.yaml -o build\n\n\
                  Run it by hand afterwards:\n    vivado -mode batch -source build/demo.tcl -tclargs 1 1")]
pub struct GenerateArgs {
    /// HDL language for generated wrappers
    #[arg(long, value_enum, default_value_t = TargetLanguage::Vhdl)]
    pub target_language: TargetLanguage,
}
