//! General build script used by ewmon to generate completion files and set
//! binary version.

#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use clap_complete::{generate_to, shells::Shell, Generator};
use clap_mangen::Man;

const COMPLETION_DIR: &str = "./target/tmp/ewmon/completion/";
const MANPAGE_DIR: &str = "./target/tmp/ewmon/manpage/";

fn create_dir(dir: &Path) -> io::Result<()> {
    let res = fs::create_dir_all(dir);
    match &res {
        Ok(()) => {}
        Err(err) => {
            eprintln!(
                "Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...",
            );
        }
    }

    res
}

fn generate_completions<G>(
    to_generate: G, cmd: &mut clap::Command, out_dir: &Path,
) -> io::Result<PathBuf>
where
    G: Generator,
{
    generate_to(to_generate, cmd, "ewmon", out_dir)
}

fn generate_manpage(out_dir: &Path) -> io::Result<()> {
    let man = Man::new(args::build_cmd());
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;

    fs::write(out_dir.join("ewmon.1"), buffer)
}

fn main() -> io::Result<()> {
    match env::var_os("EWMON_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            let mut cmd = args::build_cmd();
            generate_completions(Shell::Bash, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Zsh, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Fish, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::PowerShell, &mut cmd, &completion_out_dir)?;
            generate_completions(Shell::Elvish, &mut cmd, &completion_out_dir)?;

            generate_manpage(&manpage_out_dir)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=EWMON_GENERATE");

    Ok(())
}
