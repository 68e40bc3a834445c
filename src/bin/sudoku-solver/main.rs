#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;

use sudoku_solver::puzzle::Board;
use sudoku_solver::solve::SolveResult;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    println!("Reading board from \"{}\"", options.input().display());
    let mut board = Board::from_file(options.input())?;
    print!("{}", board);
    match board.solve() {
        SolveResult::Invalid => println!("Board is not valid"),
        SolveResult::Unsolvable => println!("Board is not solvable"),
        SolveResult::Solved(solution) => {
            println!("Board solved");
            print!("{}", solution);
        }
    }
    Ok(())
}
