use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};
use std::io;

use crate::cli::commands::Cli;

pub fn handle_completion(shell: &str) -> Result<()> {
    let mut cmd = Cli::command();

    match shell.to_lowercase().as_str() {
        "bash" => {
            generate(shells::Bash, &mut cmd, "jt", &mut io::stdout());
            println!();
            println!("# To enable completion, add the following to your shell config:");
            println!("#   eval \"$(jt completion bash)\"");
        }
        "zsh" => {
            generate(shells::Zsh, &mut cmd, "jt", &mut io::stdout());
            println!();
            println!("# To enable completion, add the following to your shell config:");
            println!("#   eval \"$(jt completion zsh)\"");
        }
        "fish" => {
            generate(shells::Fish, &mut cmd, "jt", &mut io::stdout());
            println!();
            println!("# To enable completion, add the following to your shell config:");
            println!("#   jt completion fish | source");
        }
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported shell: {}. Supported shells: bash, zsh, fish",
                shell
            ));
        }
    }

    Ok(())
}
