use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    appstrap completions bash > ~/.bash_completion.d/appstrap\n\n\
                  Generate zsh completions:\n    appstrap completions zsh > ~/.zfunc/_appstrap\n\n\
                  Generate fish completions:\n    appstrap completions fish > ~/.config/fish/completions/appstrap.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
