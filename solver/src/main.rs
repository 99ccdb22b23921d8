use log::info;

use plumbline::{Grid, Solver, Weight};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rows: Vec<Vec<Weight>> = vec![
        vec![3, 1, 4, 1, 5, 9, 2, 6],
        vec![5, 3, 0, 8, 9, 7, 9, 3],
        vec![2, 3, 8, 4, 6, 0, 6, 4],
        vec![3, 3, 8, 3, 2, 7, 9, 5],
    ];
    let board = Grid::try_from(rows).unwrap();

    println!("{}", board);

    let mut solver = Solver::begin(board.clone());
    let mut latest = None;
    while let Some(snapshot) = solver.advance() {
        info!("{} columns left, best so far {}", solver.remaining_columns(), snapshot.score());
        print!("{}", snapshot.route());
        println!();
        latest = Some(snapshot);
    }

    let solved = board.solve();
    assert_eq!(latest.as_ref(), Some(&solved));

    println!("score {}", solved.score());
    println!("path {:?}", solved.route().trace());
}
