use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
}

/// Prints a script to evaluate in your shell, e.g. `eval "$(tack shell zsh)"`.
///
/// Once loaded, every change of directory lists the tasks anchored there.
#[derive(Debug, Args)]
pub struct ShellArgs {
    #[arg(value_enum)]
    shell: Shell,
}

const CHPWD_HOOK: &str = "function _chpwd_tack() { tack show -o oneline; }";

pub fn script(shell: Shell) -> String {
    let install = match shell {
        Shell::Bash => r#"function cd () { builtin cd "$@"; _chpwd_tack; }"#,
        Shell::Zsh => "chpwd_functions+=(_chpwd_tack)",
    };
    format!("{}\n{}", CHPWD_HOOK, install)
}

pub fn cmd(args: ShellArgs) -> Result<()> {
    println!("{}", script(args.shell));
    Ok(())
}
