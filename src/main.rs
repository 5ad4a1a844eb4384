use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Error;
use minijinja::{context, path_loader, AutoEscape, Environment, Error as MError};

mod cli;
mod output;

use output::Output;

fn create_env(dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_debug(true);
    env.set_loader(path_loader(dir));
    // Rendered text is written verbatim, regardless of the template's
    // file extension.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    // Block-only lines must not leave blank lines behind, and a template
    // without tags must round-trip byte for byte.
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env
}

fn execute() -> Result<i32, Error> {
    let matches = cli::make_command().get_matches();
    let dir = matches.get_one::<PathBuf>("dir").unwrap();
    let input = matches.get_one::<String>("input").unwrap();
    let output_path = matches.get_one::<PathBuf>("output").unwrap();

    let mut output = Output::new(output_path)?;
    let env = create_env(dir);
    let rendered = env.get_template(input)?.render(context!())?;
    write!(&mut output, "{rendered}")?;
    output.commit()?;
    Ok(0)
}

fn print_error(err: &Error) {
    eprintln!("error: {err}");
    if let Some(err) = err.downcast_ref::<MError>() {
        if err.name().is_some() {
            eprintln!("{}", err.display_debug_info());
        }
    }
    for source in err.chain().skip(1) {
        eprintln!();
        eprintln!("caused by: {source}");
        if let Some(source) = source.downcast_ref::<MError>() {
            if source.name().is_some() {
                eprintln!("{}", source.display_debug_info());
            }
        }
    }
}

fn main() {
    match execute() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            print_error(&err);
            std::process::exit(1);
        }
    }
}
