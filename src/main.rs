use std::fs;
use minspan::{parse_matrix, CostReport, Prim};

fn main() {

    let contents = fs::read_to_string("network.txt").expect("Unable to read file");
    let matrix = match parse_matrix::<i64>(&contents) {
        Ok(matrix) => matrix,
        Err(error) => {
            println!("{error}");
            return;
        }
    };

    let builder = Prim::default_params(&matrix);
    match builder.span() {
        Ok(tree) => println!("{}", CostReport::new(&matrix, &tree)),
        Err(error) => println!("{error}"),
    }
}
