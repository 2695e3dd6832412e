use crate::ast::{Ast, BinOp};
use crate::error::CalcError;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::registry;
use log::{debug, trace};

/// Evaluates `expr` and returns its value.
///
/// ```
/// use arith_eval::calculate;
/// # fn main() -> Result<(), arith_eval::CalcError> {
/// assert_eq!(calculate("2 + 3 * 4")?, 14.0);
/// assert_eq!(calculate("pow(2, 10)")?, 1024.0);
/// # Ok(()) }
/// ```
pub fn calculate(expr: &str) -> Result<f64, CalcError> {
    Expr::parse(expr)?.eval()
}

/// Walks `ast` and computes its value.
///
/// Operands and arguments are evaluated left to right and the first error
/// is returned unchanged. Division by an exact zero is an error; every
/// other IEEE special value (NaN, infinities) is a valid result.
pub fn evaluate(ast: &Ast) -> Result<f64, CalcError> {
    // Operator chains are folded in a loop; recursion only follows right
    // operands and call arguments, whose depth the parser bounds.
    let (first, chain) = ast.left_spine();
    let mut acc = match first {
        Ast::Num(v) => *v,
        Ast::Call { name, args } => {
            let values = args.iter().map(evaluate).collect::<Result<Vec<f64>, _>>()?;
            call(name, &values)?
        }
        Ast::Binary { .. } => unreachable!("left spine ends at a non-binary node"),
    };
    for (op, rhs) in chain {
        let b = evaluate(rhs)?;
        acc = match op {
            BinOp::Add => acc + b,
            BinOp::Sub => acc - b,
            BinOp::Mul => acc * b,
            BinOp::Div if b == 0.0 => return Err(CalcError::DivisionByZero),
            BinOp::Div => acc / b,
        };
    }
    Ok(acc)
}

fn call(name: &str, args: &[f64]) -> Result<f64, CalcError> {
    let func = registry::lookup(name).ok_or_else(|| CalcError::UnknownFunction(name.to_string()))?;
    func.call(args).ok_or_else(|| CalcError::InvalidSignature {
        name: name.to_string(),
        expected: func.arity(),
        got: args.len(),
    })
}

/// A parsed expression that can be evaluated any number of times.
///
/// Evaluation never mutates the tree, so an `Expr` can be shared between
/// threads and every call yields a bit-identical result.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    pub fn parse(expr: &str) -> Result<Expr, CalcError> {
        let tokens = tokenize(expr)?;
        trace!("tokenized {:?} into {} tokens", expr, tokens.len());
        let ast = parse(&tokens)?;
        debug!("parsed {:?} as {}", expr, ast);
        Ok(Expr { ast })
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn eval(&self) -> Result<f64, CalcError> {
        evaluate(&self.ast).inspect_err(|e| debug!("evaluation of {} failed: {}", self.ast, e))
    }
}

impl From<Ast> for Expr {
    fn from(ast: Ast) -> Self {
        Expr { ast }
    }
}
