// ABOUTME: String helpers - casing, splitting, replacement, concatenation
// ABOUTME: Non-string inputs render through the standard stringification first

use serde_json::Value;

use super::{coerce, insert, BlockCall, Helper, Registry};
use crate::engine::context::Scope;

pub fn register(registry: &mut Registry) {
    insert(registry, "append", Helper::Inline(append));
    insert(registry, "camelcase", Helper::Inline(camelcase));
    insert(registry, "capitalize", Helper::Inline(capitalize));
    insert(registry, "capitalizeAll", Helper::Inline(capitalize_all));
    insert(registry, "replace", Helper::Inline(replace));
    insert(registry, "split", Helper::Inline(split));
    insert(registry, "remove", Helper::Inline(remove));
    insert(registry, "startsWith", Helper::Block(starts_with));
}

fn text_arg(args: &[Value], position: usize) -> Option<String> {
    args.get(position).map(coerce::render_value)
}

fn append(args: &[Value], _scope: &Scope<'_>) -> Value {
    if args.is_empty() {
        return Value::Null;
    }
    Value::String(args.iter().map(coerce::render_value).collect())
}

/// Lower-camel-case over word boundaries: `testing this thing` becomes
/// `testingThisThing`.
fn camelcase(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(text) = text_arg(args, 0) else {
        return Value::Null;
    };
    let mut result = String::new();
    for (index, word) in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let word = word.to_lowercase();
        if index == 0 {
            result.push_str(&word);
        } else {
            result.push_str(&capitalize_word(&word));
        }
    }
    Value::String(result)
}

/// Upper-case the first letter only.
fn capitalize(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(text) = text_arg(args, 0) else {
        return Value::Null;
    };
    Value::String(capitalize_word(&text))
}

/// Upper-case the first letter of every word, preserving whitespace.
fn capitalize_all(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(text) = text_arg(args, 0) else {
        return Value::Null;
    };
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            result.push(ch);
        } else if at_word_start {
            at_word_start = false;
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
    }
    Value::String(result)
}

/// Replace every occurrence of the needle.
fn replace(args: &[Value], _scope: &Scope<'_>) -> Value {
    let (Some(text), Some(needle), Some(replacement)) = (
        text_arg(args, 0),
        text_arg(args, 1),
        text_arg(args, 2),
    ) else {
        return Value::Null;
    };
    if needle.is_empty() {
        return Value::String(text);
    }
    Value::String(text.replace(&needle, &replacement))
}

/// Split into a sequence usable by the array helpers. Separator defaults
/// to a comma.
fn split(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(text) = text_arg(args, 0) else {
        return Value::Null;
    };
    let separator = text_arg(args, 1).filter(|s| !s.is_empty()).unwrap_or_else(|| ",".to_string());
    Value::Array(
        text.split(separator.as_str())
            .map(|part| Value::String(part.to_string()))
            .collect(),
    )
}

fn remove(args: &[Value], _scope: &Scope<'_>) -> Value {
    let (Some(text), Some(needle)) = (text_arg(args, 0), text_arg(args, 1)) else {
        return Value::Null;
    };
    if needle.is_empty() {
        return Value::String(text);
    }
    Value::String(text.replace(&needle, ""))
}

/// Block helper: `{{#startsWith prefix subject}}`.
fn starts_with(call: &BlockCall<'_>) -> Value {
    let holds = match (call.args.first(), call.args.get(1)) {
        (Some(prefix), Some(subject)) => {
            coerce::render_value(subject).starts_with(&coerce::render_value(prefix))
        }
        _ => false,
    };
    call.branch(holds)
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_append() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            append(&[json!("yummy"), json!(".txt")], &scope),
            json!("yummy.txt")
        );
    }

    #[test]
    fn test_camelcase() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            camelcase(&[json!("testing this thing")], &scope),
            json!("testingThisThing")
        );
    }

    #[test]
    fn test_capitalize() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            capitalize(&[json!("this is a string")], &scope),
            json!("This is a string")
        );
    }

    #[test]
    fn test_capitalize_all() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            capitalize_all(&[json!("this is a string")], &scope),
            json!("This Is A String")
        );
    }

    #[test]
    fn test_replace() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            replace(
                &[json!("Hello my name is Mike"), json!("Mike"), json!("David")],
                &scope
            ),
            json!("Hello my name is David")
        );
    }

    #[test]
    fn test_split() {
        let context = json!({});
        let scope = Scope::new(&context);
        let result = split(&[json!("a-b-c"), json!("-")], &scope);
        assert_eq!(result, json!(["a", "b", "c"]));
    }

    #[test]
    fn test_remove() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            remove(&[json!("this is a string"), json!("string")], &scope),
            json!("this is a ")
        );
    }
}
