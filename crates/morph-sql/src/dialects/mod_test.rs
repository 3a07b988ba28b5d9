use super::*;

fn num(n: &str) -> Expr {
    Expr::number(n)
}

fn accuracy(expr: &Expr) -> &Expr {
    match expr {
        Expr::ApproxQuantile {
            accuracy: Some(a), ..
        } => a,
        other => panic!("expected ApproxQuantile with accuracy, got {other:?}"),
    }
}

#[test]
fn test_check_arity() {
    let args = vec![num("1"), num("2")];
    assert!(check_arity("F", &args, 1, 2).is_ok());
    let err = check_arity("F", &args, 3, 3).unwrap_err();
    assert!(err.to_string().contains("expected 3 arguments, got 2"));
}

#[test]
fn test_approx_percentile_accuracy() {
    let expr = build_approx_percentile(vec![Expr::column(&["x"]), num("0.5"), num("0.01")]).unwrap();
    assert_eq!(accuracy(&expr), &num("100"));

    let expr = build_approx_percentile(vec![Expr::column(&["x"]), num("0.5"), num("0.05")]).unwrap();
    assert_eq!(accuracy(&expr), &num("20"));
}

#[test]
fn test_approx_percentile_weighted() {
    let expr = build_approx_percentile(vec![
        Expr::column(&["x"]),
        Expr::column(&["w"]),
        num("0.5"),
        num("0.01"),
    ])
    .unwrap();
    match expr {
        Expr::ApproxQuantile {
            quantile, weight, ..
        } => {
            assert_eq!(quantile.as_deref(), Some(&num("0.5")));
            assert_eq!(weight.as_deref(), Some(&Expr::column(&["w"])));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_approx_percentile_two_args_is_generic() {
    let expr = build_approx_percentile(vec![Expr::column(&["x"]), num("0.5")]).unwrap();
    match expr {
        Expr::ApproxQuantile {
            accuracy, weight, ..
        } => {
            assert!(accuracy.is_none());
            assert!(weight.is_none());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_approx_percentile_rejects_non_numeric_accuracy() {
    let err = build_approx_percentile(vec![
        Expr::column(&["x"]),
        num("0.5"),
        Expr::column(&["acc"]),
    ])
    .unwrap_err();
    match err {
        SqlError::ParseArgument { function, message } => {
            assert_eq!(function, "APPROX_PERCENTILE");
            assert!(message.contains("argument 3"), "{message}");
            assert!(message.contains("acc"), "{message}");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_approx_percentile_rejects_zero_accuracy() {
    assert!(build_approx_percentile(vec![Expr::column(&["x"]), num("0.5"), num("0")]).is_err());
}

#[test]
fn test_any_keys_match() {
    let predicate = Expr::Lambda {
        params: vec![crate::ast::Ident::new("k")],
        body: Box::new(Expr::column(&["k"])),
    };
    let expr = build_any_keys_match(vec![Expr::column(&["m"]), predicate.clone()]).unwrap();
    assert_eq!(
        expr,
        DialectExpr::ArrayExists {
            this: DialectExpr::MapKeys {
                this: Expr::column(&["m"])
            }
            .into(),
            predicate,
        }
        .into()
    );
}

#[test]
fn test_base_current_functions_take_no_arguments() {
    let dialect = base();
    let build = dialect.function_builder("CURRENT_DATE").unwrap();
    assert_eq!(build(vec![]).unwrap(), Expr::CurrentDate);
    assert!(build(vec![num("1")]).is_err());
}

#[test]
fn test_array_agg_arity() {
    assert!(build_array_agg(vec![]).is_err());
    assert!(build_array_agg(vec![num("1")]).is_ok());
}
