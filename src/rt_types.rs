pub type Fn0 = fn() -> f64;
pub type Fn1 = fn(f64) -> f64;
pub type Fn2 = fn(f64, f64) -> f64;
pub type Fn3 = fn(f64, f64, f64) -> f64;

/// A registered math routine, tagged by the number of arguments it takes.
#[derive(Clone, Copy, Debug)]
pub enum RegisteredFn {
    Nullary(Fn0),
    Unary(Fn1),
    Binary(Fn2),
    Ternary(Fn3),
}

impl RegisteredFn {
    pub fn arity(&self) -> u8 {
        match self {
            RegisteredFn::Nullary(_) => 0,
            RegisteredFn::Unary(_) => 1,
            RegisteredFn::Binary(_) => 2,
            RegisteredFn::Ternary(_) => 3,
        }
    }

    /// Invokes the routine if `args` matches its arity, otherwise returns `None`.
    pub fn call(&self, args: &[f64]) -> Option<f64> {
        match (self, args) {
            (RegisteredFn::Nullary(f), []) => Some(f()),
            (RegisteredFn::Unary(f), &[a]) => Some(f(a)),
            (RegisteredFn::Binary(f), &[a, b]) => Some(f(a, b)),
            (RegisteredFn::Ternary(f), &[a, b, c]) => Some(f(a, b, c)),
            _ => None,
        }
    }
}
