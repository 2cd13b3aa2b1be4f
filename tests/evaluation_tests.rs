// Trees are consumed by evaluators written as visitors outside the AST crate
use std::collections::HashMap;

use mathex_ast::{
    BinaryOperator, LetterNode, Node, UnaryOperator, VisitError, VisitResult, Visitable, Visitor,
};
use tests::{parse, parse_with};

struct Evaluator {
    values: HashMap<String, f64>,
}

impl Evaluator {
    fn eval(node: &Node, values: &[(&str, f64)]) -> VisitResult<f64> {
        let mut evaluator = Evaluator {
            values: values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        };
        node.accept(&mut evaluator)
    }
}

impl Visitor for Evaluator {
    type Output = f64;

    fn visit_number(&mut self, value: f64) -> VisitResult<f64> {
        Ok(value)
    }

    fn visit_letter(&mut self, node: &LetterNode) -> VisitResult<f64> {
        self.values
            .get(&node.name)
            .copied()
            .ok_or_else(|| VisitError::UnboundLetter(node.name.clone()))
    }

    fn visit_binary(&mut self, op: BinaryOperator, left: &Node, right: &Node) -> VisitResult<f64> {
        let l = left.accept(self)?;
        let r = right.accept(self)?;
        Ok(match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Subtract => l - r,
            BinaryOperator::Multiply => l * r,
            BinaryOperator::Divide => l / r,
            BinaryOperator::Power => l.powf(r),
        })
    }

    fn visit_unary(&mut self, op: UnaryOperator, operand: &Node) -> VisitResult<f64> {
        let v = operand.accept(self)?;
        Ok(match op {
            UnaryOperator::Plus => v,
            UnaryOperator::Minus => -v,
            UnaryOperator::Sin => v.sin(),
            UnaryOperator::Cos => v.cos(),
            UnaryOperator::Exp => v.exp(),
            UnaryOperator::Sqrt => v.sqrt(),
        })
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn left_associative_power_evaluates_to_64() {
    assert_close(Evaluator::eval(&parse("2 ^ 3 ^ 2"), &[]).unwrap(), 64.0);
}

#[test]
fn precedence_shows_in_values() {
    assert_close(Evaluator::eval(&parse("2 + 3 * 4"), &[]).unwrap(), 14.0);
    assert_close(Evaluator::eval(&parse("(2 + 3) * 4"), &[]).unwrap(), 20.0);
    assert_close(Evaluator::eval(&parse("8 - 3 - 2"), &[]).unwrap(), 3.0);
    assert_close(Evaluator::eval(&parse("-2 ^ 2"), &[]).unwrap(), 4.0);
}

#[test]
fn parse_time_and_eval_time_values_agree() {
    let source = "sqrt [x ^ 2 + 9] * cos 0 - exp 0";
    let substituted = parse_with(source, &[("x", 4.0)]);
    let symbolic = parse(source);
    assert_close(Evaluator::eval(&substituted, &[]).unwrap(), 4.0);
    assert_close(Evaluator::eval(&symbolic, &[("x", 4.0)]).unwrap(), 4.0);
}

#[test]
fn unbound_letters_fail_evaluation() {
    let err = Evaluator::eval(&parse("x + y"), &[("x", 1.0)]).unwrap_err();
    assert_eq!(err.to_string(), "unbound letter 'y'");
}
