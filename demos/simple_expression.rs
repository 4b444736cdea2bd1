use log::debug;
use rpn_calc::{CalcError, Calculator};
use std::env;

fn main() {
    pretty_env_logger::init();

    let mut expressions: Vec<String> = env::args().skip(1).collect();
    if expressions.is_empty() {
        expressions = ["3+4*2", "(3+4)*(5+6)", "2^3^2", "1.5*(2+.5)", "3++4", "(3+4", "2(1)"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    let calculator = Calculator::default();
    for expression in &expressions {
        debug!("rpn: {:?}", calculator.convert(expression));
        match calculator.calculate(expression) {
            Ok(result) => println!("{expression} = {result}"),
            Err(CalcError::Parse(err)) => println!("{}\n", err.render(expression)),
            Err(err) => println!("{expression}: {err}\n"),
        }
    }
}
