use crate::functions;
use crate::rt_types::RegisteredFn::{self, Binary, Nullary, Ternary, Unary};
use foldhash::HashMap;
use once_cell::sync::Lazy;
use statrs::function::erf::{erf_inv, erfc_inv};

static BUILTINS: &[(&str, RegisteredFn)] = &[
    ("nan", Nullary(functions::nan)),
    ("abs", Unary(f64::abs)),
    ("acos", Unary(f64::acos)),
    ("acosh", Unary(f64::acosh)),
    ("asin", Unary(f64::asin)),
    ("asinh", Unary(f64::asinh)),
    ("atan", Unary(f64::atan)),
    ("atanh", Unary(f64::atanh)),
    ("cbrt", Unary(f64::cbrt)),
    ("ceil", Unary(f64::ceil)),
    ("cos", Unary(f64::cos)),
    ("cosh", Unary(f64::cosh)),
    ("erf", Unary(libm::erf)),
    ("erfc", Unary(libm::erfc)),
    ("erfcinv", Unary(erfc_inv)),
    ("erfinv", Unary(erf_inv)),
    ("exp", Unary(f64::exp)),
    ("exp2", Unary(f64::exp2)),
    ("expm1", Unary(f64::exp_m1)),
    ("floor", Unary(f64::floor)),
    ("gamma", Unary(libm::tgamma)),
    ("j0", Unary(libm::j0)),
    ("j1", Unary(libm::j1)),
    ("log", Unary(f64::ln)),
    ("log10", Unary(f64::log10)),
    ("log1p", Unary(f64::ln_1p)),
    ("log2", Unary(f64::log2)),
    ("logb", Unary(functions::logb)),
    ("round", Unary(f64::round)),
    ("roundtoeven", Unary(f64::round_ties_even)),
    ("sin", Unary(f64::sin)),
    ("sinh", Unary(f64::sinh)),
    ("sqrt", Unary(f64::sqrt)),
    ("tan", Unary(f64::tan)),
    ("tanh", Unary(f64::tanh)),
    ("trunc", Unary(f64::trunc)),
    ("y0", Unary(libm::y0)),
    ("y1", Unary(libm::y1)),
    ("atan2", Binary(f64::atan2)),
    ("copysign", Binary(f64::copysign)),
    ("dim", Binary(functions::dim)),
    ("hypot", Binary(f64::hypot)),
    ("max", Binary(functions::max)),
    ("min", Binary(functions::min)),
    ("mod", Binary(functions::fmod)),
    ("nextafter", Binary(libm::nextafter)),
    ("pow", Binary(f64::powf)),
    ("remainder", Binary(libm::remainder)),
    ("fma", Ternary(f64::mul_add)),
];

static REGISTRY: Lazy<HashMap<&'static str, RegisteredFn>> =
    Lazy::new(|| BUILTINS.iter().copied().collect());

/// Looks up a built-in function by its exact (lowercase) name.
pub fn lookup(name: &str) -> Option<RegisteredFn> {
    REGISTRY.get(name).copied()
}

/// Names of all built-in functions, sorted.
pub fn function_names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}
