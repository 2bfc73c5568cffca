// ABOUTME: Tokenizer and recursive-descent parser for placeholder expressions
// ABOUTME: Produces Reference / Literal / Call trees with bounded nesting depth

use serde_json::Value;

use super::error::{ParserError, Result};
use super::path::ContextPath;

/// Maximum depth of parenthesized sub-calls before parsing fails closed.
const MAX_NESTING: usize = 32;

/// A parsed placeholder expression.
///
/// Arguments of a call may themselves be any of the three kinds, so a single
/// placeholder like `{{ join ( after ( split str " " ) 3 ) " " }}` parses to
/// a tree of nested calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A context-path lookup, e.g. `user.email` or `[some-id].[field name]`.
    Reference(ContextPath),
    /// A constant: quoted string, bare number, or boolean.
    Literal(Value),
    /// A helper invocation with positional arguments.
    Call { name: String, args: Vec<Expression> },
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Open,
    Close,
    Word(String),
    Str(String),
}

/// Parse the body of a single inline placeholder.
///
/// A lone term is a reference or literal; two or more terms are a helper
/// call with the first word as the helper name.
pub fn parse(raw: &str) -> Result<Expression> {
    let tokens = tokenize(raw)?;
    if tokens.is_empty() {
        return Err(ParserError::EmptyExpression);
    }

    if tokens.len() > 1 {
        if let Token::Word(name) = &tokens[0] {
            let mut cursor = Cursor::new(&tokens[1..]);
            let mut args = Vec::new();
            while !cursor.at_end() {
                args.push(cursor.term(0)?);
            }
            return Ok(Expression::Call {
                name: name.clone(),
                args,
            });
        }
    }

    let mut cursor = Cursor::new(&tokens);
    let expr = cursor.term(0)?;
    if !cursor.at_end() {
        return Err(ParserError::InvalidExpression(raw.trim().to_string()));
    }
    Ok(expr)
}

/// Parse the argument list of a block helper tag, e.g. the `array "person"`
/// in `{{#filter array "person"}}`.
pub fn parse_args(raw: &str) -> Result<Vec<Expression>> {
    let tokens = tokenize(raw)?;
    let mut cursor = Cursor::new(&tokens);
    let mut args = Vec::new();
    while !cursor.at_end() {
        args.push(cursor.term(0)?);
    }
    Ok(args)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn term(&mut self, depth: usize) -> Result<Expression> {
        if depth > MAX_NESTING {
            return Err(ParserError::NestingTooDeep { max: MAX_NESTING });
        }
        match self.next() {
            Some(Token::Str(text)) => Ok(Expression::Literal(Value::String(text.clone()))),
            Some(Token::Word(word)) => Ok(classify(word)),
            Some(Token::Open) => {
                let name = match self.next() {
                    Some(Token::Word(word)) => word.clone(),
                    _ => return Err(ParserError::InvalidExpression("( )".to_string())),
                };
                let mut args = Vec::new();
                loop {
                    match self.tokens.get(self.pos) {
                        Some(Token::Close) => {
                            self.pos += 1;
                            break;
                        }
                        Some(_) => args.push(self.term(depth + 1)?),
                        // The scanner guarantees paren balance; this is a
                        // defensive fail-closed path.
                        None => {
                            return Err(ParserError::UnbalancedParens {
                                expression: name.clone(),
                            })
                        }
                    }
                }
                Ok(Expression::Call { name, args })
            }
            Some(Token::Close) | None => {
                Err(ParserError::InvalidExpression(")".to_string()))
            }
        }
    }
}

/// Classify a bare word: boolean, number, or context path.
fn classify(word: &str) -> Expression {
    match word {
        "true" => return Expression::Literal(Value::Bool(true)),
        "false" => return Expression::Literal(Value::Bool(false)),
        "null" => return Expression::Literal(Value::Null),
        _ => {}
    }
    if looks_numeric(word) {
        if let Ok(int) = word.parse::<i64>() {
            return Expression::Literal(Value::from(int));
        }
        if let Ok(float) = word.parse::<f64>() {
            if let Some(number) = serde_json::Number::from_f64(float) {
                return Expression::Literal(Value::Number(number));
            }
        }
    }
    Expression::Reference(ContextPath::parse(word))
}

fn looks_numeric(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() => true,
        Some('-') | Some('+') | Some('.') => {
            chars.next().map(|c| c.is_ascii_digit()).unwrap_or(false)
        }
        _ => false,
    }
}

fn tokenize(raw: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = raw.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch.is_whitespace() {
            i += 1;
            continue;
        }
        match ch {
            '(' => {
                tokens.push(Token::Open);
                i += 1;
            }
            ')' => {
                tokens.push(Token::Close);
                i += 1;
            }
            '\'' | '"' => {
                let mut j = i + 1;
                let mut text = String::new();
                while j < chars.len() && chars[j] != ch {
                    text.push(chars[j]);
                    j += 1;
                }
                if j >= chars.len() {
                    return Err(ParserError::UnterminatedString(raw.trim().to_string()));
                }
                tokens.push(Token::Str(text));
                i = j + 1;
            }
            _ => {
                let mut word = String::new();
                while i < chars.len() {
                    let ch = chars[i];
                    if ch == '[' {
                        // Bracket-quoted path segments are opaque: they may
                        // contain spaces, dots, and quotes.
                        word.push(ch);
                        i += 1;
                        while i < chars.len() && chars[i] != ']' {
                            word.push(chars[i]);
                            i += 1;
                        }
                        if i < chars.len() {
                            word.push(']');
                            i += 1;
                        }
                        continue;
                    }
                    if ch.is_whitespace() || matches!(ch, '(' | ')' | '\'' | '"') {
                        break;
                    }
                    word.push(ch);
                    i += 1;
                }
                tokens.push(Token::Word(word));
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_reference() {
        let expr = parse("user.email").unwrap();
        assert_eq!(
            expr,
            Expression::Reference(ContextPath::parse("user.email"))
        );
    }

    #[test]
    fn test_number_and_boolean_literals() {
        assert_eq!(parse("51").unwrap(), Expression::Literal(Value::from(51)));
        assert_eq!(
            parse("true").unwrap(),
            Expression::Literal(Value::Bool(true))
        );
        assert_eq!(
            parse("1.5").unwrap(),
            Expression::Literal(Value::from(1.5))
        );
    }

    #[test]
    fn test_simple_call() {
        let expr = parse("add a b").unwrap();
        match expr {
            Expression::Call { name, args } => {
                assert_eq!(name, "add");
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_calls() {
        let expr = parse("join ( after ( split str \" \" ) 3 ) \" \"").unwrap();
        let Expression::Call { name, args } = expr else {
            panic!("expected call");
        };
        assert_eq!(name, "join");
        assert_eq!(args.len(), 2);
        let Expression::Call { name, args } = &args[0] else {
            panic!("expected nested call");
        };
        assert_eq!(name, "after");
        assert!(matches!(&args[0], Expression::Call { name, .. } if name == "split"));
    }

    #[test]
    fn test_adjacent_parenthesized_args() {
        let expr = parse("subtract (date currentTime \"X\")(date eventTime \"X\")").unwrap();
        let Expression::Call { name, args } = expr else {
            panic!("expected call");
        };
        assert_eq!(name, "subtract");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_bracket_paths_in_call() {
        let expr = parse("avg [c355ec2b].[a] [c355ec2b].[b]").unwrap();
        let Expression::Call { args, .. } = expr else {
            panic!("expected call");
        };
        assert_eq!(
            args[0],
            Expression::Reference(ContextPath::parse("[c355ec2b].[a]"))
        );
    }

    #[test]
    fn test_quoted_literal_keeps_spaces() {
        let expr = parse("split \"My name is: Joe Smith\" \" \"").unwrap();
        let Expression::Call { args, .. } = expr else {
            panic!("expected call");
        };
        assert_eq!(
            args[0],
            Expression::Literal(Value::String("My name is: Joe Smith".to_string()))
        );
        assert_eq!(args[1], Expression::Literal(Value::String(" ".to_string())));
    }

    #[test]
    fn test_current_binding_token() {
        let expr = parse(".").unwrap();
        let Expression::Reference(path) = expr else {
            panic!("expected reference");
        };
        assert!(path.is_current());
    }

    #[test]
    fn test_empty_expression_rejected() {
        assert!(matches!(parse("   "), Err(ParserError::EmptyExpression)));
    }

    #[test]
    fn test_unterminated_string_rejected() {
        assert!(matches!(
            parse("append a '.txt"),
            Err(ParserError::UnterminatedString(_))
        ));
    }
}
