use super::*;

fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::function(name, args)
}

#[test]
fn test_column_name_and_table() {
    let col = Expr::column(&["db", "f", "value"]);
    assert_eq!(col.name(), "value");
    assert_eq!(col.table(), "f");

    let Expr::Column(column) = col else {
        panic!("expected column");
    };
    assert_eq!(column.qualifier().unwrap().name(), "f");
    assert!(Column {
        parts: vec![Ident::new("x")]
    }
    .qualifier()
    .is_none());
}

#[test]
fn test_bracket_name_is_base_name() {
    let bracket: Expr = DialectExpr::Bracket {
        this: Expr::column(&["f", "value"]),
        path: vec![Expr::string("a")],
    }
    .into();
    assert_eq!(bracket.name(), "value");
    assert_eq!(bracket.kind(), NodeKind::Bracket);
}

#[test]
fn test_bfs_visits_level_by_level() {
    let expr = call(
        "F",
        vec![
            call("G", vec![Expr::column(&["deep"])]),
            Expr::column(&["shallow"]),
        ],
    );
    let names: Vec<&str> = expr
        .bfs(|_| false)
        .filter_map(|e| match e {
            Expr::Function(f) => Some(f.name.as_str()),
            Expr::Column(c) => Some(c.name()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["F", "G", "shallow", "deep"]);
}

#[test]
fn test_bfs_prune_yields_node_but_skips_children() {
    let expr = call("F", vec![call("G", vec![Expr::column(&["hidden"])])]);
    let visited: Vec<NodeKind> = expr
        .bfs(|e| matches!(e, Expr::Function(f) if f.name == "G"))
        .map(Expr::kind)
        .collect();
    assert_eq!(visited, vec![NodeKind::Function, NodeKind::Function]);
}

#[test]
fn test_bfs_does_not_enter_subqueries() {
    let query = Query {
        with: vec![],
        body: SetExpr::Select(Box::new(Select {
            distinct: false,
            projection: vec![Expr::column(&["inner"])],
            from: None,
            joins: vec![],
            selection: None,
            group_by: vec![],
            having: None,
            qualify: None,
        })),
        order_by: vec![],
        limit: None,
        offset: None,
    };
    let expr = Expr::Exists(Box::new(query));
    assert_eq!(expr.bfs(|_| false).count(), 1);
}

#[test]
fn test_dialect_children_skip_absent_options() {
    let split = DialectExpr::SplitPart {
        value: Expr::column(&["s"]),
        delimiter: None,
        part: Some(Expr::number("2")),
    };
    assert_eq!(split.children().len(), 2);
}

#[test]
fn test_object_name_from_dotted() {
    let name = ObjectName::new("db.schema.t");
    assert_eq!(name.0.len(), 3);
    assert_eq!(name.0[2].value, "t");
}
