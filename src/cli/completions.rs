use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    xilbuild completions bash > ~/.bash_completion.d/xilbuild\n\n\
                  Generate zsh completions:\n    xilbuild completions zsh > ~/.zfunc/_xilbuild\n\n\
                  Generate fish completions:\n    xilbuild completions fish > ~/.config/fish/completions/xilbuild.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
