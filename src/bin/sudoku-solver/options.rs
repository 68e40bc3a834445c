use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    input: PathBuf,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        Ok(Self {
            input: matches.value_of("input").expect("input is required").into(),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("sudoku-solver")
        .help_message("Solve Sudoku puzzles")
        .arg(
            Arg::with_name("input")
                .value_name("PATH")
                .required(true)
                .help("read a Sudoku board from a file"),
        )
}
