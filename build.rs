use std::io;
use std::path::PathBuf;

use clap::ValueEnum;
use clap_complete::Shell;

pub mod cli {
    include!("src/cli.rs");
}

const BIN: &str = "template-builder";

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=ASSET_OUT_DIR");

    let out_dir = match std::env::var_os("ASSET_OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return Ok(()),
    };

    let mut cmd = cli::make_command();

    let man_dir = out_dir.join("man");
    std::fs::create_dir_all(&man_dir)?;
    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut page)?;
    std::fs::write(man_dir.join(format!("{BIN}.1")), page)?;

    let completions_dir = out_dir.join("completions");
    std::fs::create_dir_all(&completions_dir)?;
    for shell in Shell::value_variants() {
        clap_complete::generate_to(*shell, &mut cmd, BIN, &completions_dir)?;
    }
    clap_complete::generate_to(clap_complete_nushell::Nushell, &mut cmd, BIN, &completions_dir)?;
    clap_complete::generate_to(clap_complete_fig::Fig, &mut cmd, BIN, &completions_dir)?;

    Ok(())
}
