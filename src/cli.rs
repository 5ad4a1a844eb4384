/// Command line definition, kept in its own file so that `build.rs` can
/// include it to generate the man page and shell completions.
use std::path::PathBuf;

use clap::{arg, command, value_parser, Command};

pub(super) fn make_command() -> Command {
    command!()
        .args([
            arg!(dir: <DIR> "path to the directory the templates are loaded from")
                .value_parser(value_parser!(PathBuf)),
            arg!(input: <INPUT> "name of the template to render, relative to the template directory"),
            arg!(output: <OUTPUT> "path of the file the rendered output is written to")
                .value_parser(value_parser!(PathBuf)),
        ])
        .about("template-builder renders a single jinja2 template from a template directory into a file.")
}
