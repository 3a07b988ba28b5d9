use super::*;

fn col(name: &str) -> Expr {
    Expr::column(&[name])
}

fn custom(expr: Expr) -> DialectExpr {
    match expr {
        Expr::Dialect(d) => *d,
        other => panic!("expected a dialect node, got {other:?}"),
    }
}

#[test]
fn test_split() {
    let expr = custom(build_split(vec![col("s")]).unwrap());
    assert_eq!(
        expr,
        DialectExpr::Split {
            value: col("s"),
            delimiter: None,
        }
    );
    assert!(build_split(vec![]).is_err());
    assert!(build_split(vec![col("a"), col("b"), col("c")]).is_err());
}

#[test]
fn test_split_part_defaults_are_absent() {
    let expr = custom(build_split_part(vec![col("s"), Expr::string(",")]).unwrap());
    assert_eq!(
        expr,
        DialectExpr::SplitPart {
            value: col("s"),
            delimiter: Some(Expr::string(",")),
            part: None,
        }
    );
}

#[test]
fn test_convert_timezone_argument_order() {
    let two = custom(build_convert_timezone(vec![Expr::string("UTC"), col("ts")]).unwrap());
    assert_eq!(
        two,
        DialectExpr::ConvertTimeZone {
            source_tz: None,
            target_tz: Expr::string("UTC"),
            value: col("ts"),
        }
    );

    let three = custom(
        build_convert_timezone(vec![Expr::string("PST"), Expr::string("UTC"), col("ts")]).unwrap(),
    );
    assert_eq!(
        three,
        DialectExpr::ConvertTimeZone {
            source_tz: Some(Expr::string("PST")),
            target_tz: Expr::string("UTC"),
            value: col("ts"),
        }
    );
    assert!(build_convert_timezone(vec![col("ts")]).is_err());
}

#[test]
fn test_make_date_needs_three_arguments() {
    assert!(build_make_date(vec![col("y"), col("m")]).is_err());
    assert!(matches!(
        custom(build_make_date(vec![col("y"), col("m"), col("d")]).unwrap()),
        DialectExpr::MakeDate { .. }
    ));
}

#[test]
fn test_try_to_date() {
    assert_eq!(
        custom(build_try_to_date(vec![col("d")]).unwrap()),
        DialectExpr::TryToDate {
            value: col("d"),
            format: None,
        }
    );
}

#[test]
fn test_date_add_reorders_arguments() {
    let expr = build_date_add(vec![col("day"), Expr::number("1"), col("d")]).unwrap();
    assert_eq!(
        expr,
        Expr::DateAdd {
            this: Box::new(col("d")),
            amount: Box::new(Expr::number("1")),
            unit: Box::new(col("day")),
        }
    );
}

#[test]
fn test_try_to_number_arity() {
    for n in [1, 3] {
        let args = vec![Expr::string("1.5"); n];
        let err = build_try_to_number(args).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`format` is required"), "{message}");
        assert!(message.contains("both present or both absent"), "{message}");
    }
    assert!(build_try_to_number(vec![Expr::string("1.5"); 5]).is_err());

    let expr = custom(
        build_try_to_number(vec![
            Expr::string("1.5"),
            Expr::string("9.9"),
            Expr::number("3"),
            Expr::number("1"),
        ])
        .unwrap(),
    );
    assert_eq!(
        expr,
        DialectExpr::TryToNumber {
            value: Expr::string("1.5"),
            format: Some(Expr::string("9.9")),
            precision: Some(Expr::number("3")),
            scale: Some(Expr::number("1")),
        }
    );
}

#[test]
fn test_function_table() {
    let dialect = dialect(crate::dialect::base());
    for name in [
        "STRTOK_TO_ARRAY",
        "DATE_FROM_PARTS",
        "CONVERT_TIMEZONE",
        "TRY_TO_DATE",
        "STRTOK",
        "SPLIT_PART",
        "TIMESTAMPADD",
        "DATEADD",
        "TRY_TO_DECIMAL",
        "TRY_TO_NUMBER",
        "TRY_TO_NUMERIC",
        "FLATTEN",
        "APPROX_PERCENTILE",
        "ANY_KEYS_MATCH",
    ] {
        assert!(dialect.function_builder(name).is_some(), "missing {name}");
    }
    assert_eq!(dialect.discovery_patterns().len(), 2);
}
