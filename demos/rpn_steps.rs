use rpn_calc::{calculate, calculate_lenient, convert};

fn main() {
    pretty_env_logger::init();

    let expressions = ["8-3-2", "2%5%3", "2^3+1", "3+", "", "1/0"];

    for expression in expressions {
        let rpn = match convert(expression) {
            Ok(rpn) => rpn,
            Err(err) => {
                println!("{expression:?}: {err}");
                continue;
            }
        };
        println!(
            "{expression:?} -> {rpn:?}: strict {:?}, lenient {:?}",
            calculate(expression),
            calculate_lenient(expression)
        );
    }
}
