use clap_markdown::help_markdown;
use hello_todo::cli::Cli;

fn main() {
    println!("# hello-todo CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `hello-todo` command-line interface.");
    println!();

    println!("{}", help_markdown::<Cli>());
}
