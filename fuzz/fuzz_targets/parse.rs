#![no_main]

use libfuzzer_sys::fuzz_target;
use triangle::frontend::diagnostics::CollectingSink;
use triangle::frontend::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The scanner never fails; the token stream always ends with end-of-text.
        let tokens = lexer::lex(s);
        let sliced = parser::parse(&tokens);

        // Pull-based parsing must agree with the slice-based entry point, and report
        // exactly one diagnostic on failure.
        let mut sink = CollectingSink::new();
        let pulled = parser::parse_program(lexer::Lexer::new(s), &mut sink);
        assert_eq!(sliced.is_ok(), pulled.is_ok());
        assert_eq!(sink.error_count(), usize::from(pulled.is_err()));

        if let Ok(program) = pulled {
            assert!(program.span.end <= s.len());
        }
    }
});
