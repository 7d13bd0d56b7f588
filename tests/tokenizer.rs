//! Tokenizer tests - classification, coverage and malformed input

use reqline::syntax::{tokenize, Token, TokenKind, HIGHLIGHT_NAMES};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn assert_covers(input: &str) {
    let tokens = tokenize(input);
    let mut expected = 0;
    for token in &tokens {
        assert_eq!(token.start, expected, "gap or overlap in {:?}", input);
        assert!(token.end > token.start, "empty token in {:?}", input);
        expected = token.end;
    }
    assert_eq!(expected, input.len());
    let rebuilt: String = tokens.iter().map(|t| t.text(input)).collect();
    assert_eq!(rebuilt, input);
}

// ========================================================================
// Classification
// ========================================================================

#[test]
fn test_command_and_url() {
    let tokens = tokenize("curl https://api.example.com/v1/users");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Command, TokenKind::Whitespace, TokenKind::Url]
    );
    assert_eq!(tokens[2].start, 5);
}

#[test]
fn test_single_quoted_json_body_is_one_string() {
    let input = r#"curl -d '{"key": "value"}'"#;
    let tokens = tokenize(input);
    let strings: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .collect();

    assert_eq!(strings.len(), 1);
    assert_eq!(strings[0].text(input), r#"'{"key": "value"}'"#);
    assert!(!strings[0].has_error);
}

#[test]
fn test_line_continuation() {
    let tokens = tokenize("curl \\\n https://x");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Command,
            TokenKind::Whitespace,
            TokenKind::Backslash,
            TokenKind::Newline,
            TokenKind::Whitespace,
            TokenKind::Url
        ]
    );
}

#[test]
fn test_full_request() {
    let input = "curl -X POST -H 'Content-Type: application/json' https://api.example.com -d '{}'";
    let tokens = tokenize(input);
    let significant: Vec<(TokenKind, &str)> = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| (t.kind, t.text(input)))
        .collect();

    assert_eq!(
        significant,
        vec![
            (TokenKind::Command, "curl"),
            (TokenKind::Flag, "-X"),
            (TokenKind::Method, "POST"),
            (TokenKind::Flag, "-H"),
            (TokenKind::String, "'Content-Type: application/json'"),
            (TokenKind::Url, "https://api.example.com"),
            (TokenKind::Flag, "-d"),
            (TokenKind::String, "'{}'"),
        ]
    );
    let header = tokens
        .iter()
        .find(|t| t.kind == TokenKind::String)
        .unwrap();
    assert!(header.header_value);
}

#[test]
fn test_long_header_flag_marks_value() {
    let input = "curl --header \"Accept: */*\"";
    let tokens = tokenize(input);
    assert!(tokens.last().unwrap().header_value);
}

#[test]
fn test_flag_after_line_break() {
    let tokens = tokenize("curl \\\n-v");
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Flag);
}

#[test]
fn test_every_method() {
    for method in ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"] {
        assert_eq!(tokenize(method)[0].kind, TokenKind::Method, "{}", method);
    }
    assert_eq!(tokenize("Get")[0].kind, TokenKind::Data);
}

#[test]
fn test_http_scheme_only_at_word_start() {
    assert_eq!(tokenize("http://x")[0].kind, TokenKind::Url);
    assert_eq!(tokenize("xhttp://x")[0].kind, TokenKind::Data);
    assert_eq!(tokenize("ftp://x")[0].kind, TokenKind::Data);
}

#[test]
fn test_json_braces() {
    let tokens = tokenize("{ [ ] }");
    assert!(tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .all(|t| t.kind == TokenKind::JsonBrace && t.len() == 1));
}

// ========================================================================
// Malformed input
// ========================================================================

#[test]
fn test_unterminated_string_runs_to_end() {
    let input = "curl -d '{\"a\": 1";
    let tokens = tokenize(input);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::String);
    assert!(last.has_error);
    assert_eq!(last.end, input.len());
    assert_eq!(last.display_kind(), TokenKind::Error);
}

#[test]
fn test_escaped_quote_in_double_quotes() {
    let input = r#"-d "say \"hi\"" x"#;
    let tokens = tokenize(input);
    assert_eq!(tokens[2].text(input), r#""say \"hi\"""#);
    assert!(!tokens[2].has_error);
}

#[test]
fn test_lone_quote() {
    let tokens = tokenize("'");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].has_error);
}

// ========================================================================
// Coverage
// ========================================================================

#[test]
fn test_spans_cover_input() {
    for input in [
        "",
        "curl",
        "curl https://api.example.com/v1/users",
        "curl -X POST \\\r\n  -H 'A: b' \\\n  -d '{\"k\": [1, 2]}'",
        "  \t  ",
        "'unterminated \"mixed",
        "données 'héllo' {\"ключ\": \"значение\"}",
        "\\\\\\",
        "\r\r\n\n",
        "a-b -c --d=e",
    ] {
        assert_covers(input);
    }
}

#[test]
fn test_highlight_names_cover_every_kind() {
    let input = "curl -X GET https://x '{' { d \\\n 'e";
    for token in tokenize(input) {
        let name = token.display_kind().highlight_name();
        assert!(HIGHLIGHT_NAMES.contains(&name));
    }
    assert_eq!(TokenKind::Error.highlight_name(), "error");
}
