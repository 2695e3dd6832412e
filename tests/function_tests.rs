use arith_eval::{RegisteredFn, calculate, function_names, lookup};

const EPS: f64 = 1e-12;

fn approx(expr: &str, expected: f64) {
    let out = calculate(expr).unwrap();
    assert!((out - expected).abs() < EPS, "expr='{}' got={} expected={}", expr, out, expected);
}

#[test]
fn sqrt_and_pow() {
    assert_eq!(calculate("sqrt(16)").unwrap(), 4.0);
    assert_eq!(calculate("pow(2, 10)").unwrap(), 1024.0);
    assert_eq!(calculate("sqrt(pow(3, 2) + pow(4, 2))").unwrap(), 5.0);
}

#[test]
fn nullary_and_ternary() {
    assert!(calculate("nan()").unwrap().is_nan());
    assert_eq!(calculate("fma(2, 3, 4)").unwrap(), 10.0);
}

#[test]
fn special_values_are_results_not_errors() {
    assert!(calculate("sqrt(-1)").unwrap().is_nan());
    assert_eq!(calculate("log(0)").unwrap(), f64::NEG_INFINITY);
    assert_eq!(calculate("exp(1000)").unwrap(), f64::INFINITY);
    assert!(calculate("nan() + 1").unwrap().is_nan());
    assert_eq!(calculate("1e308 * 10").unwrap(), f64::INFINITY);
}

#[test]
fn rounding_family() {
    assert_eq!(calculate("round(2.5)").unwrap(), 3.0);
    assert_eq!(calculate("round(-2.5)").unwrap(), -3.0);
    assert_eq!(calculate("roundtoeven(2.5)").unwrap(), 2.0);
    assert_eq!(calculate("roundtoeven(3.5)").unwrap(), 4.0);
    assert_eq!(calculate("floor(-1.5)").unwrap(), -2.0);
    assert_eq!(calculate("ceil(-1.5)").unwrap(), -1.0);
    assert_eq!(calculate("trunc(-1.5)").unwrap(), -1.0);
    assert_eq!(calculate("abs(-7)").unwrap(), 7.0);
}

#[test]
fn max_min_special_cases() {
    assert_eq!(calculate("max(1, 2)").unwrap(), 2.0);
    assert_eq!(calculate("min(1, 2)").unwrap(), 1.0);
    assert!(calculate("max(nan(), 1)").unwrap().is_nan());
    assert!(calculate("min(1, nan())").unwrap().is_nan());
    assert_eq!(calculate("max(nan(), 1e309)").unwrap(), f64::INFINITY);
    assert_eq!(calculate("min(nan(), -1e309)").unwrap(), f64::NEG_INFINITY);

    // 0 * -1 is a negative zero
    let m = calculate("max(0 * -1, 0)").unwrap();
    assert!(m == 0.0 && m.is_sign_positive());
    let m = calculate("min(0, 0 * -1)").unwrap();
    assert!(m == 0.0 && m.is_sign_negative());
}

#[test]
fn remainders() {
    assert_eq!(calculate("mod(7, 3)").unwrap(), 1.0);
    assert_eq!(calculate("mod(-7, 3)").unwrap(), -1.0);
    assert!(calculate("mod(1, 0)").unwrap().is_nan());
    assert_eq!(calculate("remainder(7, 4)").unwrap(), -1.0);
    assert_eq!(calculate("remainder(5, 2)").unwrap(), 1.0);
    assert_eq!(calculate("dim(5, 3)").unwrap(), 2.0);
    assert_eq!(calculate("dim(3, 5)").unwrap(), 0.0);
    assert!(calculate("dim(1e309, 1e309)").unwrap().is_nan());
    assert!(calculate("dim(-1e309, -1e309)").unwrap().is_nan());
    assert!(calculate("dim(nan(), 1)").unwrap().is_nan());
    assert_eq!(calculate("dim(1e309, 1)").unwrap(), f64::INFINITY);
}

#[test]
fn float_manipulation() {
    assert_eq!(calculate("copysign(3, -1)").unwrap(), -3.0);
    assert_eq!(calculate("nextafter(1, 2)").unwrap(), 1.0 + f64::EPSILON);
    assert_eq!(calculate("logb(8)").unwrap(), 3.0);
    assert_eq!(calculate("logb(0.1)").unwrap(), -4.0);
    assert_eq!(calculate("logb(0)").unwrap(), f64::NEG_INFINITY);
    assert_eq!(calculate("logb(1e309)").unwrap(), f64::INFINITY);
}

#[test]
fn transcendental() {
    approx("atan2(1, 1)", std::f64::consts::FRAC_PI_4);
    approx("sin(0)", 0.0);
    approx("cos(0)", 1.0);
    approx("exp(1)", std::f64::consts::E);
    approx("log10(1000)", 3.0);
    approx("log2(8)", 3.0);
    approx("exp2(10)", 1024.0);
    approx("cbrt(27)", 3.0);
    approx("hypot(3, 4)", 5.0);
    approx("log1p(0)", 0.0);
    approx("expm1(0)", 0.0);
    approx("tanh(0)", 0.0);
    approx("acosh(1)", 0.0);
}

#[test]
fn special_functions() {
    approx("erf(0)", 0.0);
    approx("erfc(0)", 1.0);
    assert!((calculate("gamma(5)").unwrap() - 24.0).abs() < 1e-9);
    approx("j0(0)", 1.0);
    approx("j1(0)", 0.0);
    assert_eq!(calculate("y0(0)").unwrap(), f64::NEG_INFINITY);
}

#[test]
fn inverse_error_functions() {
    approx("erfinv(0)", 0.0);
    approx("erfcinv(1)", 0.0);
    assert!((calculate("erfinv(erf(0.5))").unwrap() - 0.5).abs() < 1e-9);
    assert!((calculate("erfcinv(erfc(1.25))").unwrap() - 1.25).abs() < 1e-9);
    assert!((calculate("erfinv(-0.5) + erfinv(0.5)").unwrap()).abs() < 1e-12);
    assert_eq!(calculate("erfinv(1)").unwrap(), f64::INFINITY);
    assert_eq!(calculate("erfcinv(0)").unwrap(), f64::INFINITY);
}

#[test]
fn registry_is_complete_and_consistent() {
    let names = function_names();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), 49);
    for name in names {
        assert!(lookup(name).is_some(), "missing {}", name);
        assert_eq!(name, name.to_lowercase());
    }
    assert!(lookup("erfinv").is_some());
    assert!(lookup("erfcinv").is_some());
    assert!(lookup("Sqrt").is_none());
}

#[test]
fn registered_fn_checks_arity() {
    let max = lookup("max").unwrap();
    assert_eq!(max.arity(), 2);
    assert_eq!(max.call(&[1.0, 5.0]), Some(5.0));
    assert_eq!(max.call(&[1.0]), None);
    assert_eq!(max.call(&[1.0, 2.0, 3.0]), None);

    let arities: Vec<u8> = ["nan", "sqrt", "pow", "fma"]
        .iter()
        .map(|n| lookup(n).unwrap().arity())
        .collect();
    assert_eq!(arities, vec![0, 1, 2, 3]);
    assert!(matches!(lookup("nan"), Some(RegisteredFn::Nullary(_))));
}
