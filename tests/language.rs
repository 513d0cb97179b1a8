use std::{
    cell::RefCell,
    io::{Cursor, Write},
    rc::Rc,
};

use pica::{
    interpreter::{
        evaluator::core::Context,
        lexer::{Scanner, TokenKind},
        parser::Parser,
    },
    run_with_context,
};

/// A clonable writer over a shared byte buffer, so a test can hand one
/// handle to the interpreter and keep the other to read captured output.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("program output was not UTF-8")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Runs a program with captured output and the given stdin contents.
fn run(src: &str, input: &str) -> (Result<(), Box<dyn std::error::Error>>, String) {
    let out = SharedBuf::default();
    let mut context = Context::with_io(Box::new(out.clone()),
                                       Box::new(Cursor::new(input.as_bytes().to_vec())));
    let result = run_with_context(src, &mut context);
    (result, out.contents())
}

fn assert_output(src: &str, expected: &str) {
    let (result, output) = run(src, "");
    if let Err(e) = result {
        panic!("Script failed: {e}\n{src}");
    }
    assert_eq!(output, expected, "wrong output for:\n{src}");
}

fn assert_failure_containing(src: &str, needle: &str) {
    let (result, _) = run(src, "");
    match result {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "expected error containing '{needle}', got '{message}'");
        },
    }
}

#[test]
fn const_binding_prints_its_value() {
    assert_output("const x = 5; print(x);", "5");
}

#[test]
fn function_call_reads_enclosing_scope() {
    assert_output("let a = 2; fn add(b){ return a + b } print(add(40));", "42");
}

#[test]
fn counter_closure_keeps_private_state() {
    assert_output("fn counter(){ let n = 0; fn inc(){ n += 1; return n } return inc } \
                   let c = counter(); print(c()); print(c()); print(c());",
                  "123");
}

#[test]
fn for_loop_prints_each_index() {
    assert_output("for (let i = 0; i < 3; i += 1;) { print(i); }", "012");
}

#[test]
fn if_else_takes_the_truthy_branch() {
    assert_output(r#"if (1 == 1) { print("yes"); } else { print("no"); }"#, "yes");
    assert_output(r#"if (1 == 2) { print("yes"); } else { print("no"); }"#, "no");
}

#[test]
fn const_reassignment_is_fatal() {
    assert_failure_containing("const x = 1; x = 2;", "Cannot reassign constant");
    assert_failure_containing("const x = 1; x += 2;", "Cannot reassign constant");
}

#[test]
fn closures_observe_later_mutation_of_captured_bindings() {
    assert_output("let x = 1; fn f(){ return x } x = 2; print(f());", "2");
}

#[test]
fn assignment_mutates_the_owning_scope() {
    // The write inside the function must land on the global binding, not
    // shadow it in the call scope.
    assert_output("let x = 1; fn bump(){ x = 10 } bump(); print(x);", "10");
}

#[test]
fn precedence_and_grouping() {
    assert_output("print(1 + 2 * 3);", "7");
    assert_output("print((1 + 2) * 3);", "9");
    assert_output("print(10 - 2 - 3);", "5");
    assert_output("print(2 * 3 % 4);", "2");
}

#[test]
fn relational_operators_bind_tighter_than_equality() {
    assert_output("print(1 < 2 == true);", "true");
    assert_output("print(1 <= 2 == true);", "true");
    assert_output("print(3 > 2 != false);", "true");
}

#[test]
fn unary_operators() {
    assert_output("print(-5);", "-5");
    assert_output("print(!true);", "false");
    assert_output("print(!false);", "true");
    assert_output("print(!0);", "false");
    assert_output("let n = -3; print(-n);", "3");
}

#[test]
fn integers_are_not_truthy() {
    assert_output(r#"if (1) { print("t"); } else { print("f"); }"#, "f");
    assert_output(r#"let x = 0; if (x == 0) { print("zero"); }"#, "zero");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("print(-7 / 2);", "-3");
    assert_output("print(-7 % 2);", "-1");
    assert_output("print(7 / -2);", "-3");
}

#[test]
fn division_identity_holds() {
    for (a, b) in [(7, 2), (-7, 2), (7, -2), (-9, 4), (1, 5)] {
        let src = format!("print(({a}) / ({b}) * ({b}) + ({a}) % ({b}) == ({a}));");
        assert_output(&src, "true");
    }
}

#[test]
fn division_by_zero_is_fatal() {
    assert_failure_containing("print(1 / 0);", "Division by zero");
    assert_failure_containing("print(1 % 0);", "Division by zero");
    assert_failure_containing("let x = 4; x /= 0;", "Division by zero");
}

#[test]
fn undefined_variable_is_fatal() {
    assert_failure_containing("print(y);", "Undefined variable 'y'");
    assert_failure_containing("y = 1;", "Undefined variable 'y'");
}

#[test]
fn compound_assignment_forms() {
    assert_output("let x = 2; x += 3; print(x);", "5");
    assert_output("let x = 7; x -= 2; print(x);", "5");
    assert_output("let x = 4; x *= 2; print(x);", "8");
    assert_output("let x = 9; x /= 3; print(x);", "3");
    assert_output("let x = 9; x %= 4; print(x);", "1");
    assert_output(r#"let s = "a"; s += "b"; print(s);"#, "ab");
}

#[test]
fn compound_assignment_type_mismatch_is_fatal() {
    assert_failure_containing(r#"let x = 1; x += "a";"#, "Type mismatch");
    assert_failure_containing(r#"let s = "a"; s -= "b";"#, "Type mismatch");
}

#[test]
fn plain_rebind_keeps_const_protection_but_allows_let() {
    assert_output("let x = 1; x = 2; x = 3; print(x);", "3");
    // Rebinding must not demote the binding: a const stays const even
    // after an attempted chain of writes.
    assert_failure_containing("const c = 1; c = 2; c = 3;", "Cannot reassign constant");
}

#[test]
fn string_operations() {
    assert_output(r#"print("foo" + "bar");"#, "foobar");
    assert_output(r#"print("a" == "a");"#, "true");
    assert_output(r#"print("a" != "b");"#, "true");
}

#[test]
fn mixed_operand_types_yield_null() {
    assert_output(r#"print(1 + "a");"#, "null");
    assert_output("print(true + true);", "null");
    assert_output("print(-true);", "null");
}

#[test]
fn wrong_arity_is_fatal() {
    assert_failure_containing("fn f(a){ return a } f(1, 2);", "expected 1, found 2");
    assert_failure_containing("fn f(a, b){ return a } f(1);", "expected 2, found 1");
    assert_failure_containing(r#"int("1", "2");"#, "expected 1, found 2");
}

#[test]
fn calling_a_non_function_yields_null() {
    assert_output("let x = 5; print(x());", "null");
}

#[test]
fn int_builtin_converts_strings_and_passes_integers() {
    assert_output(r#"print(int("42") + int(8));"#, "50");
    assert_output(r#"print(int("-7"));"#, "-7");
    assert_output(r#"print(int("9223372036854775807"));"#, "9223372036854775807");
    assert_failure_containing(r#"int("forty");"#, "Invalid argument");
    assert_failure_containing("int(true);", "Invalid argument");
}

#[test]
fn scan_prompts_then_reads_one_token() {
    let (result, output) = run(r#"let s = scan("? "); print(s);"#, "  hello world\n");
    result.unwrap();
    assert_eq!(output, "? hello");
}

#[test]
fn scan_result_round_trips_through_int() {
    let (result, output) = run(r#"print(int(scan()) * 2);"#, "21\n");
    result.unwrap();
    assert_eq!(output, "42");
}

#[test]
fn print_resolves_escape_sequences() {
    assert_output(r#"print("a\nb");"#, "a\nb");
    assert_output(r#"print("col\tumn");"#, "col\tumn");
    assert_output(r#"print("back\\slash");"#, "back\\slash");
}

#[test]
fn print_takes_any_number_of_arguments() {
    assert_output(r#"print(1, "-", true, "-");"#, "1-true-");
    assert_output("print();", "");
}

#[test]
fn print_returns_null() {
    assert_output("print(print(1));", "1null");
}

#[test]
fn inspect_forms() {
    assert_output("print(true); print(false);", "truefalse");
    assert_output("print(-0);", "0");
    assert_output("print(fn(){ return 1 });", "function");
    assert_output("print(print);", "builtin function");
    assert_output(r#"if (false) { print(1); } else { } print("");"#, "");
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_output(r#"fn int(x){ return 99 } print(int("7"));"#, "99");
    assert_output("let scan = 1; print(scan);", "1");
}

#[test]
fn return_stops_the_enclosing_block() {
    assert_output(r#"fn f(){ return 1; print("unreachable"); } print(f());"#, "1");
}

#[test]
fn return_unwraps_exactly_once_at_the_call_boundary() {
    // The inner return must not leak through the outer function's body.
    assert_output("fn inner(){ return 5 } fn outer(){ let v = inner(); return v + 1 } \
                   print(outer());",
                  "6");
}

#[test]
fn for_loop_swallows_returns_and_yields_null() {
    assert_output("fn f(){ for (let i = 0; i < 3; i += 1;) { return 7; } return 9; } \
                   print(f());",
                  "9");
    assert_output("print(for (let i = 0; i < 1; i += 1;) { 42; });", "null");
}

#[test]
fn for_loop_scope_does_not_leak() {
    assert_failure_containing("for (let i = 0; i < 1; i += 1;) { } print(i);",
                              "Undefined variable 'i'");
}

#[test]
fn for_loop_can_drive_an_outer_accumulator() {
    assert_output("let sum = 0; for (let i = 1; i <= 4; i += 1;) { sum += i; } print(sum);",
                  "10");
}

#[test]
fn assignment_binds_above_prefix() {
    // ASSIGN sits above PREFIX, so the write happens first and the minus
    // applies to its result (Null, since assignment yields Null).
    assert_output("let x = 1; print(-x = 2); print(x);", "null2");
}

#[test]
fn functions_are_first_class_values() {
    assert_output("let twice = fn(f, x){ return f(f(x)) }; fn inc(n){ return n + 1 } \
                   print(twice(inc, 5));",
                  "7");
}

#[test]
fn empty_programs_and_bare_expressions_run() {
    assert_output("", "");
    assert_output("1 + 1;", "");
    assert_output("5; false", "");
}

#[test]
fn integer_literal_overflow_is_a_parse_error() {
    assert_failure_containing("let x = 99999999999999999999;", "does not fit");
}

#[test]
fn malformed_statements_are_parse_errors() {
    assert_failure_containing("let = 5;", "Expected an identifier");
    assert_failure_containing("let x 5;", "Expected '='");
    assert_failure_containing("if (true) { print(1);", "Expected '}'");
    assert_failure_containing("for (x = 0; x < 1; x += 1;) { }", "Expected 'let'");
    assert_failure_containing("@;", "Unexpected token '@'");
    assert_failure_containing("print(1 @ 2);", "Expected ')'");
}

#[test]
fn parsing_is_deterministic() {
    let src = r#"let a = 1; fn f(x){ return -x * (a + 2) } for (let i = 0; i < f(3); i += 1;) { print(i, "\n"); }"#;
    let first = Parser::new(src).parse().unwrap();
    let second = Parser::new(src).parse().unwrap();
    assert_eq!(first, second);
}

#[test]
fn ast_nodes_carry_their_source_lines() {
    let src = "let a = 1;\nprint(\na + 2);";
    let program = Parser::new(src).parse().unwrap();

    match &program.statements[1] {
        pica::ast::Statement::Expression { expr, line } => {
            assert_eq!(*line, 1);
            assert_eq!(expr.line(), 1);
            match expr {
                pica::ast::Expr::Call { arguments, .. } => assert_eq!(arguments[0].line(), 2),
                other => panic!("expected a call, got {other:?}"),
            }
        },
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn scanner_emits_expected_kinds_and_literals() {
    let mut scanner = Scanner::new(r#"let x1 = 40 + 2; if (x1 >= 42) { print("ok"); }"#);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.kind == TokenKind::Eof {
            break;
        }
        tokens.push((token.kind, token.literal));
    }

    let expected: &[(TokenKind, &str)] =
        &[(TokenKind::Let, "let"),
          (TokenKind::Ident, "x1"),
          (TokenKind::Assign, "="),
          (TokenKind::Int, "40"),
          (TokenKind::Plus, "+"),
          (TokenKind::Int, "2"),
          (TokenKind::Semicolon, ";"),
          (TokenKind::If, "if"),
          (TokenKind::LParen, "("),
          (TokenKind::Ident, "x1"),
          (TokenKind::GreaterEqual, ">="),
          (TokenKind::Int, "42"),
          (TokenKind::RParen, ")"),
          (TokenKind::LBrace, "{"),
          (TokenKind::Ident, "print"),
          (TokenKind::LParen, "("),
          (TokenKind::Str, "ok"),
          (TokenKind::RParen, ")"),
          (TokenKind::Semicolon, ";"),
          (TokenKind::RBrace, "}")];
    let got: Vec<(TokenKind, &str)> = tokens.iter().map(|(k, l)| (*k, l.as_str())).collect();
    assert_eq!(got, expected);
    assert!(scanner.is_eof());
}

#[test]
fn scanner_distinguishes_compound_operators() {
    let mut scanner = Scanner::new("= == + += - -= * *= / /= % %= ! != < <= > >=");
    let expected = [TokenKind::Assign,
                    TokenKind::Equal,
                    TokenKind::Plus,
                    TokenKind::PlusAssign,
                    TokenKind::Minus,
                    TokenKind::MinusAssign,
                    TokenKind::Asterisk,
                    TokenKind::AsteriskAssign,
                    TokenKind::Slash,
                    TokenKind::SlashAssign,
                    TokenKind::Percent,
                    TokenKind::PercentAssign,
                    TokenKind::Bang,
                    TokenKind::NotEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual];
    for kind in expected {
        assert_eq!(scanner.next_token().kind, kind);
    }
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
}

#[test]
fn scanner_tracks_lines_and_columns() {
    let mut scanner = Scanner::new("let a = 1;\n  print(a);");
    let first = scanner.next_token();
    assert_eq!((first.pos.line, first.pos.column), (0, 0));

    // Skip to the token after the newline.
    let mut token = scanner.next_token();
    while token.literal != "print" {
        token = scanner.next_token();
    }
    assert_eq!((token.pos.line, token.pos.column), (1, 2));
}

#[test]
fn scanner_flags_unknown_characters_as_illegal() {
    let mut scanner = Scanner::new("let § = 1;");
    assert_eq!(scanner.next_token().kind, TokenKind::Let);
    let illegal = scanner.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.literal, "§");
}

#[test]
fn keywords_are_not_identifiers_but_prefixes_are() {
    let mut scanner = Scanner::new("fn fnx for format return returned");
    let kinds_and_literals: Vec<(TokenKind, String)> = std::iter::from_fn(|| {
        let token = scanner.next_token();
        (token.kind != TokenKind::Eof).then_some((token.kind, token.literal))
    }).collect();

    assert_eq!(kinds_and_literals,
               vec![(TokenKind::Function, "fn".to_string()),
                    (TokenKind::Ident, "fnx".to_string()),
                    (TokenKind::For, "for".to_string()),
                    (TokenKind::Ident, "format".to_string()),
                    (TokenKind::Return, "return".to_string()),
                    (TokenKind::Ident, "returned".to_string())]);
}

#[test]
fn rescanning_joined_literals_reproduces_the_token_stream() {
    let src = "let total = 0; for (let i = 0; i < 10; i += 1;) { total += i * 2; } print(total);";
    let collect = |source: &str| {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push((token.kind, token.literal));
        }
        tokens
    };

    let original = collect(src);
    let rejoined = original.iter()
                           .map(|(_, lit)| lit.as_str())
                           .collect::<Vec<_>>()
                           .join(" ");
    assert_eq!(collect(&rejoined), original);
}

#[test]
fn deep_nesting_and_recursion() {
    assert_output("fn fact(n){ if (n == 0) { return 1 } return n * fact(n - 1) } \
                   print(fact(10));",
                  "3628800");
    assert_output("print(((((1 + 2)))) * 2);", "6");
}

#[test]
fn arithmetic_wraps_like_two_complement() {
    assert_output("print(9223372036854775807 + 1);", "-9223372036854775808");
}
