#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms, on node spans, and on the
/// single-diagnostic failure behavior.
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, Diagnostic};

    fn parse_str(source: &str) -> Program {
        parse_source(source).unwrap_or_else(|err| panic!("{source:?} failed to parse: {err}"))
    }

    /// Parse `source` expecting failure, and return its only diagnostic.
    fn fail(source: &str) -> Diagnostic {
        let mut sink = CollectingSink::new();
        let result = parse_program(Lexer::new(source), &mut sink);
        assert_eq!(result, Err(ParseFailure), "{source:?} should not parse");
        let mut diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 1, "exactly one diagnostic for {source:?}");
        diagnostics.remove(0)
    }

    fn text(source: &str, span: Span) -> &str {
        &source[span.start..span.end]
    }

    fn let_declaration(program: &Program) -> &Spanned<Declaration> {
        match &program.command.node {
            Command::Let(command) => command.declaration.as_ref(),
            other => panic!("expected a let command, got {other:?}"),
        }
    }

    fn name_of(expr: &Expression) -> &str {
        match expr {
            Expression::Vname(v) => &v.vname.node.root().spelling,
            other => panic!("expected a name, got {other:?}"),
        }
    }

    // ------------------------------------------------------------------------
    // Whole programs
    // ------------------------------------------------------------------------

    #[test]
    fn test_valid_program_covers_whole_text() {
        let source = "let\n  const max ~ 10;\n  var total := 0;\n  type Pair ~ record a : Integer, b : Char end;\n  func double (n : Integer) : Integer ~ n * 2;\n  proc bump (var x : Integer) ~ x := x + 1 end\nin\n  loop for i := 1 to max do bump(var total) end;\n  putint(double(total))\nend";
        let mut sink = CollectingSink::new();
        let program = parse_program(Lexer::new(source), &mut sink).unwrap();
        assert_eq!(sink.error_count(), 0);
        assert_eq!(text(source, program.span), source);
        assert_eq!(program.command.span, program.span);
    }

    #[test]
    fn test_empty_program_is_nothing() {
        let program = parse_str("");
        assert_eq!(program.command.node, Command::Nothing);
        assert_eq!(program.span, Span::empty_at(0));
    }

    #[test]
    fn test_slice_and_lexer_sources_agree() {
        let source = "let var x : array 3 of Integer in x[0] := 'a' end";
        let tokens = crate::lexer::lex(source);
        assert_eq!(parse(&tokens).unwrap(), parse_str(source));
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        let diag = fail("nothing nothing");
        insta::assert_snapshot!(diag.message, @r#""nothing" not expected after end of program"#);
        assert_eq!(diag.span, Span::new(8, 15));
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    #[test]
    fn test_sequential_commands_nest_to_the_left() {
        let source = "a := 1; b := 2; c := 3";
        let program = parse_str(source);
        let Command::Sequential(outer) = &program.command.node else {
            panic!("expected a sequence");
        };
        let Command::Sequential(inner) = &outer.first.node else {
            panic!("expected a nested sequence on the left");
        };
        assert_eq!(text(source, inner.first.span), "a := 1");
        assert_eq!(text(source, inner.second.span), "b := 2");
        assert_eq!(text(source, outer.first.span), "a := 1; b := 2");
        assert_eq!(text(source, outer.second.span), "c := 3");
    }

    #[test]
    fn test_missing_end_names_end() {
        let diag = fail("loop while true do nothing");
        insta::assert_snapshot!(diag.message, @r#""end" expected here, found "end-of-text""#);
        assert_eq!(diag.spelling, "end-of-text");
        assert_eq!(diag.span, Span::empty_at(26));
    }

    #[test]
    fn test_loop_forms() {
        let program = parse_str("loop while x < 10 do x := x + 1 end");
        assert!(matches!(program.command.node, Command::While(_)));

        let program = parse_str("loop until done do nothing end");
        assert!(matches!(program.command.node, Command::Until(_)));

        let program = parse_str("loop for i := 1 to n do putint(i) end");
        let Command::For(command) = &program.command.node else {
            panic!("expected a for loop");
        };
        assert_eq!(command.variable.spelling, "i");
        assert_eq!(name_of(&command.to.node), "n");
    }

    #[test]
    fn test_do_loops_pick_their_tail() {
        let program = parse_str("loop do x := x + 1 while x < 10 end");
        let Command::DoWhile(command) = &program.command.node else {
            panic!("expected do-while");
        };
        assert!(matches!(command.body.node, Command::Assign(_)));

        let program = parse_str("loop do nothing until done end");
        assert!(matches!(program.command.node, Command::DoUntil(_)));

        let diag = fail("loop do nothing then x end");
        insta::assert_snapshot!(diag.message, @r#""then" cannot end a do loop, "while" or "until" expected"#);
    }

    #[test]
    fn test_bad_loop_head() {
        let diag = fail("loop x := 1 end");
        insta::assert_snapshot!(diag.message, @r#""x" cannot start a loop command"#);
    }

    #[test]
    fn test_elsif_chain_nests_first_condition_outermost() {
        let source = "if a then x := 1 elsif b then x := 2 elsif c then x := 3 else x := 4 end";
        let program = parse_str(source);
        let Command::If(command) = &program.command.node else {
            panic!("expected an if command");
        };
        assert_eq!(name_of(&command.condition.node), "a");

        let arms = command.alternative.arms();
        let conditions: Vec<&str> = arms.iter().map(|arm| name_of(&arm.node.condition.node)).collect();
        assert_eq!(conditions, vec!["b", "c"]);

        let Command::Assign(last) = &command.alternative.terminal().node else {
            panic!("expected the else command");
        };
        let Expression::Integer(value) = &last.value.node else {
            panic!("expected an integer");
        };
        assert_eq!(value.literal.spelling, "4");

        let chain_end = source.rfind(" end").unwrap();
        assert_eq!(arms[0].span, Span::new(source.find("elsif").unwrap(), chain_end));
        assert_eq!(arms[1].span, Span::new(source.rfind("elsif").unwrap(), chain_end));
    }

    #[test]
    fn test_if_without_else_is_rejected() {
        let diag = fail("if a then nothing end");
        insta::assert_snapshot!(diag.message, @r#""end" cannot continue an if command, "elsif" or "else" expected"#);
    }

    #[test]
    fn test_empty_commands_are_zero_width() {
        let program = parse_str("let var x : Integer in end");
        let Command::Let(command) = &program.command.node else {
            panic!("expected a let command");
        };
        assert_eq!(command.body.node, Command::Nothing);
        assert_eq!(command.body.span, Span::empty_at(23));

        let program = parse_str("x := 1;");
        let Command::Sequential(seq) = &program.command.node else {
            panic!("expected a sequence");
        };
        assert_eq!(seq.second.span, Span::empty_at(7));
        assert_eq!(program.span, Span::new(0, 7));
    }

    #[test]
    fn test_command_cannot_start_with_then() {
        let diag = fail("then");
        insta::assert_snapshot!(diag.message, @r#""then" cannot start a command"#);
        assert_eq!(diag.span, Span::new(0, 4));
    }

    #[test]
    fn test_vname_chain() {
        let source = "a.b[i].c := 1";
        let program = parse_str(source);
        let Command::Assign(command) = &program.command.node else {
            panic!("expected an assignment");
        };
        assert_eq!(text(source, command.target.span), "a.b[i].c");
        let Vname::Dot(outer) = &command.target.node else {
            panic!("expected a field selection");
        };
        assert_eq!(outer.field.spelling, "c");
        let Vname::Subscript(subscript) = &outer.record.node else {
            panic!("expected a subscript");
        };
        assert_eq!(text(source, subscript.array.span), "a.b");
        assert_eq!(command.target.node.root().spelling, "a");
    }

    // ------------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------------

    #[test]
    fn test_binary_operators_associate_left() {
        let source = "x := a + b * c";
        let program = parse_str(source);
        let Command::Assign(command) = &program.command.node else {
            panic!("expected an assignment");
        };
        let Expression::Binary(outer) = &command.value.node else {
            panic!("expected a binary expression");
        };
        assert_eq!(outer.operator.spelling, "*");
        assert_eq!(text(source, outer.left.span), "a + b");
        assert_eq!(text(source, command.value.span), "a + b * c");
    }

    #[test]
    fn test_parenthesized_expression_span_includes_parens() {
        let source = "x := (a + b) * c";
        let program = parse_str(source);
        let Command::Assign(command) = &program.command.node else {
            panic!("expected an assignment");
        };
        let Expression::Binary(outer) = &command.value.node else {
            panic!("expected a binary expression");
        };
        assert!(matches!(outer.left.node, Expression::Binary(_)));
        assert_eq!(text(source, outer.left.span), "(a + b)");
    }

    #[test]
    fn test_unary_binds_to_primary() {
        let source = "x := - a + b";
        let program = parse_str(source);
        let Command::Assign(command) = &program.command.node else {
            panic!("expected an assignment");
        };
        let Expression::Binary(outer) = &command.value.node else {
            panic!("expected a binary expression");
        };
        assert!(matches!(outer.left.node, Expression::Unary(_)));
        assert_eq!(text(source, outer.left.span), "- a");
    }

    #[test]
    fn test_let_and_if_expressions() {
        let program = parse_str("x := let const a ~ 1 in if a > 0 then a else 0 - a");
        let Command::Assign(command) = &program.command.node else {
            panic!("expected an assignment");
        };
        let Expression::Let(expr) = &command.value.node else {
            panic!("expected a let expression");
        };
        assert!(matches!(expr.declaration.node, Declaration::Const(_)));
        assert!(matches!(expr.body.node, Expression::If(_)));
    }

    #[test]
    fn test_aggregates() {
        let source = "x := {a ~ 1, b ~ [1, 2, 3]}";
        let program = parse_str(source);
        let Command::Assign(command) = &program.command.node else {
            panic!("expected an assignment");
        };
        let Expression::Record(record) = &command.value.node else {
            panic!("expected a record aggregate");
        };
        assert_eq!(record.aggregate.node.field_names(), vec!["a", "b"]);
        assert_eq!(text(source, record.aggregate.span), "a ~ 1, b ~ [1, 2, 3]");

        let RecordAggregate::Multiple(first) = &record.aggregate.node else {
            panic!("expected two fields");
        };
        let RecordAggregate::Single(second) = &first.rest.node else {
            panic!("expected a final field");
        };
        let Expression::Array(array) = &second.value.node else {
            panic!("expected an array aggregate");
        };
        assert_eq!(array.aggregate.node.elements().len(), 3);
    }

    #[test]
    fn test_error_token_cannot_start_expression() {
        let diag = fail("x := #");
        insta::assert_snapshot!(diag.message, @r##""#" cannot start an expression"##);
    }

    // ------------------------------------------------------------------------
    // Parameters
    // ------------------------------------------------------------------------

    #[test]
    fn test_actual_parameter_forms() {
        let source = "p(var r.f[1], proc q, func g, 2 + 3)";
        let program = parse_str(source);
        let Command::Call(call) = &program.command.node else {
            panic!("expected a call");
        };
        let kinds: Vec<&str> = call
            .args
            .node
            .parameters()
            .iter()
            .map(|arg| match arg.node {
                ActualParameter::Const(_) => "const",
                ActualParameter::Var(_) => "var",
                ActualParameter::Proc(_) => "proc",
                ActualParameter::Func(_) => "func",
            })
            .collect();
        assert_eq!(kinds, vec!["var", "proc", "func", "const"]);
        assert_eq!(text(source, call.args.span), "var r.f[1], proc q, func g, 2 + 3");
    }

    #[test]
    fn test_empty_parameter_lists_are_zero_width() {
        let program = parse_str("p()");
        let Command::Call(call) = &program.command.node else {
            panic!("expected a call");
        };
        assert_eq!(call.args.node, ActualParameterSequence::Empty);
        assert_eq!(call.args.span, Span::empty_at(2));

        let program = parse_str("p( )");
        let Command::Call(call) = &program.command.node else {
            panic!("expected a call");
        };
        assert_eq!(call.args.span, Span::empty_at(3));
    }

    #[test]
    fn test_formal_parameter_forms() {
        let program =
            parse_str("let proc p(a : Integer, var b : Char, proc c(), func d(n : Integer) : Boolean) ~ nothing end in nothing end");
        let Declaration::Proc(proc) = &let_declaration(&program).node else {
            panic!("expected a proc declaration");
        };
        let params = proc.params.node.parameters();
        assert_eq!(params.len(), 4);
        assert!(matches!(params[0].node, FormalParameter::Const(_)));
        assert!(matches!(params[1].node, FormalParameter::Var(_)));
        assert!(matches!(params[2].node, FormalParameter::Proc(_)));
        assert!(matches!(params[3].node, FormalParameter::Func(_)));
    }

    #[test]
    fn test_bad_parameters() {
        let diag = fail("let proc p(1) ~ nothing end in nothing end");
        insta::assert_snapshot!(diag.message, @r#""1" cannot start a formal parameter"#);

        let diag = fail("p(var)");
        insta::assert_snapshot!(diag.message, @r#"identifier expected here, found ")""#);

        let diag = fail("p(;)");
        insta::assert_snapshot!(diag.message, @r#"";" cannot start an actual parameter"#);
    }

    // ------------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------------

    #[test]
    fn test_var_declaration_forms() {
        let program = parse_str("let var x := 1 in nothing end");
        assert!(matches!(let_declaration(&program).node, Declaration::VarInitialized(_)));

        let program = parse_str("let var x : Integer in nothing end");
        assert!(matches!(let_declaration(&program).node, Declaration::Var(_)));

        let diag = fail("let var x ~ 1 in nothing end");
        insta::assert_snapshot!(diag.message, @r#""~" cannot follow a variable name, ":" or ":=" expected"#);
    }

    #[test]
    fn test_sequential_declarations_nest_to_the_left() {
        let source = "let const a ~ 1; const b ~ 2; const c ~ 3 in nothing end";
        let program = parse_str(source);
        let declaration = let_declaration(&program);
        let Declaration::Sequential(outer) = &declaration.node else {
            panic!("expected a declaration sequence");
        };
        assert!(matches!(outer.first.node, Declaration::Sequential(_)));
        assert_eq!(text(source, declaration.span), "const a ~ 1; const b ~ 2; const c ~ 3");
    }

    #[test]
    fn test_private_declaration() {
        let program = parse_str("let private const a ~ 1 in const b ~ a end in nothing end");
        let Declaration::Private(private) = &let_declaration(&program).node else {
            panic!("expected a private declaration");
        };
        assert!(matches!(private.local.node, Declaration::Const(_)));
        assert!(matches!(private.body.node, Declaration::Const(_)));
    }

    #[test]
    fn test_declaration_cannot_start_with_in() {
        let diag = fail("let in nothing end");
        insta::assert_snapshot!(diag.message, @r#""in" cannot start a declaration"#);
    }

    #[test]
    fn test_rec_group_of_two() {
        let source = "let rec proc p(n : Integer) ~ q(n) and func f(n : Integer) : Integer ~ n + 1 end in p(1) end";
        let program = parse_str(source);
        let Declaration::Rec(rec) = &let_declaration(&program).node else {
            panic!("expected a rec declaration");
        };
        let names: Vec<&str> = rec
            .group
            .node
            .members()
            .into_iter()
            .map(|member| member.node.name().spelling.as_str())
            .collect();
        assert_eq!(names, vec!["p", "f"]);
        assert!(matches!(rec.group.node.tail, ProcFuncsTail::Last(_)));
        assert_eq!(
            text(source, rec.group.span),
            "proc p(n : Integer) ~ q(n) and func f(n : Integer) : Integer ~ n + 1"
        );
    }

    #[test]
    fn test_rec_group_of_three_nests_right() {
        let source = "let rec proc a() ~ nothing and proc b() ~ nothing and func c() : Integer ~ 1 end in nothing end";
        let program = parse_str(source);
        let Declaration::Rec(rec) = &let_declaration(&program).node else {
            panic!("expected a rec declaration");
        };
        let ProcFuncsTail::More(rest) = &rec.group.node.tail else {
            panic!("expected a nested chain");
        };
        assert!(matches!(rest.node.tail, ProcFuncsTail::Last(_)));
        assert_eq!(text(source, rest.span), "proc b() ~ nothing and func c() : Integer ~ 1");
        assert_eq!(rec.group.node.members().len(), 3);
    }

    #[test]
    fn test_rec_group_of_one_is_rejected() {
        let diag = fail("let rec proc p() ~ nothing end in nothing end");
        insta::assert_snapshot!(diag.message, @r#""and" expected here, found "end""#);
    }

    #[test]
    fn test_rec_member_must_be_proc_or_func() {
        let diag = fail("let rec const x ~ 1 and proc p() ~ nothing end in nothing end");
        insta::assert_snapshot!(diag.message, @r#""const" cannot start a recursive declaration member"#);
    }

    // ------------------------------------------------------------------------
    // Type denoters
    // ------------------------------------------------------------------------

    fn declared_type(source: &str) -> TypeDenoter {
        let program = parse_str(source);
        match &let_declaration(&program).node {
            Declaration::Var(var) => var.ty.node.clone(),
            other => panic!("expected a typed var, got {other:?}"),
        }
    }

    #[test]
    fn test_static_array_type() {
        let TypeDenoter::ArrayStatic(array) = declared_type("let var a : array 5..10 of Integer in nothing end") else {
            panic!("expected a static array");
        };
        assert_eq!(array.lower.spelling, "5");
        assert_eq!(array.upper.spelling, "10");
    }

    #[test]
    fn test_dynamic_array_type() {
        let TypeDenoter::ArrayDynamic(array) = declared_type("let var a : array 5 of Integer in nothing end") else {
            panic!("expected a dynamic array");
        };
        assert_eq!(array.length.spelling, "5");
    }

    #[test]
    fn test_malformed_array_types() {
        let diag = fail("let var a : array 5..of Integer in nothing end");
        insta::assert_snapshot!(diag.message, @r#"integer literal expected here, found "of""#);

        let diag = fail("let var a : array 5 to Integer in nothing end");
        insta::assert_snapshot!(diag.message, @r#""to" cannot follow an array length, "of" or ".." expected"#);
    }

    #[test]
    fn test_record_type_fields() {
        let TypeDenoter::Record(record) = declared_type("let var r : record a : Integer, b : array 2 of Char end in nothing end")
        else {
            panic!("expected a record type");
        };
        let names: Vec<&str> = record.fields.node.fields().into_iter().map(|(name, _)| name.spelling.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_parsed_types_compare_structurally() {
        let a = declared_type("let var a : array 1..3 of Integer in nothing end");
        let b = declared_type("let var bb : array 1..3 of Integer in nothing end");
        assert_ne!(a, b);
        assert!(a.equivalent(&b));
    }

    #[test]
    fn test_type_denoter_cannot_start_with_literal() {
        let diag = fail("let type T ~ 3 in nothing end");
        insta::assert_snapshot!(diag.message, @r#""3" cannot start a type denoter"#);
    }

    // ------------------------------------------------------------------------
    // Long chains
    // ------------------------------------------------------------------------

    const LONG: usize = 100_000;

    /// Parse `source`, inspect the tree, then drop it, all on a 2 MiB stack.
    fn on_small_stack(source: String, inspect: fn(&Program)) {
        std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(move || {
                let program = parse_str(&source);
                inspect(&program);
                drop(program);
            })
            .unwrap()
            .join()
            .unwrap();
    }

    fn assigned_value(program: &Program) -> &Expression {
        match &program.command.node {
            Command::Assign(assign) => &assign.value.node,
            other => panic!("expected an assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_long_command_sequence_drops_without_overflow() {
        on_small_stack(vec!["x := 1"; LONG].join("; "), |program| {
            let mut links = 0;
            let mut cursor = &program.command.node;
            while let Command::Sequential(sequential) = cursor {
                links += 1;
                cursor = &sequential.first.node;
            }
            assert_eq!(links, LONG - 1);
        });
    }

    #[test]
    fn test_long_array_aggregate_drops_without_overflow() {
        on_small_stack(format!("x := [{}]", vec!["0"; LONG].join(", ")), |program| {
            let Expression::Array(array) = assigned_value(program) else {
                panic!("expected an array aggregate");
            };
            assert_eq!(array.aggregate.node.elements().len(), LONG);
        });
    }

    #[test]
    fn test_long_operator_chain_drops_without_overflow() {
        on_small_stack(format!("x := {}", vec!["1"; LONG].join(" + ")), |program| {
            assert!(matches!(assigned_value(program), Expression::Binary(_)));
        });
    }

    #[test]
    fn test_long_elsif_chain_drops_without_overflow() {
        let arms = "elsif b then x := 1 ".repeat(LONG);
        on_small_stack(format!("if a then x := 0 {arms}else x := 2 end"), |program| {
            let Command::If(command) = &program.command.node else {
                panic!("expected an if command");
            };
            assert_eq!(command.alternative.arms().len(), LONG);
        });
    }

    #[test]
    fn test_long_declaration_and_argument_lists_drop_without_overflow() {
        let declarations = vec!["const c ~ 1"; LONG].join("; ");
        let args = vec!["c"; LONG].join(", ");
        on_small_stack(format!("let {declarations} in p({args}) end"), |program| {
            let Command::Let(command) = &program.command.node else {
                panic!("expected a let command");
            };
            let Command::Call(call) = &command.body.node else {
                panic!("expected a call");
            };
            assert_eq!(call.args.node.parameters().len(), LONG);
        });
    }

    #[test]
    fn test_partial_chain_is_freed_after_an_error() {
        let source = format!("{}; then", vec!["x := 1"; LONG].join("; "));
        std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(move || assert!(parse_source(&source).is_err()))
            .unwrap()
            .join()
            .unwrap();
    }
}
