// ABOUTME: Integration tests for the syntactic balance validator
// ABOUTME: Validity is independent of context values and helper registration

use stencil::is_valid;

#[test]
fn test_valid_simple_placeholders() {
    assert!(is_valid("Hello {{name}}"));
    assert!(is_valid("{{ add a b }}"));
    assert!(is_valid("no placeholders at all"));
    assert!(is_valid(""));
}

#[test]
fn test_valid_bracket_paths() {
    assert!(is_valid(
        "{{ avg [c355ec2b422e54f988ae553c8acd811ea].[a] [c355ec2b422e54f988ae553c8acd811ea].[b] }}"
    ));
    assert!(is_valid(
        "{{ subtract [c390c23a7f1b6441c98d2fe2a51248ef3].[total profit] [c390c23a7f1b6441c98d2fe2a51248ef3].[total revenue]  }}"
    ));
}

#[test]
fn test_unregistered_helpers_are_valid_syntax() {
    assert!(is_valid("{{ JSONstringify obj }}"));
    assert!(is_valid("{{ totallyMadeUp x y z }}"));
}

#[test]
fn test_invalid_fixture_strings() {
    for invalid in ["{{ awd )", "{{ awdd () ", "{{ awdwad ", "{{ awddawd }"] {
        assert!(!is_valid(invalid), "expected invalid: {invalid:?}");
    }
}

#[test]
fn test_unclosed_blocks_are_invalid() {
    assert!(!is_valid("{{#filter array \"person\"}}THING"));
    assert!(!is_valid("{{#and a b}}x{{/or}}"));
    assert!(!is_valid("stray {{/filter}} close"));
}

#[test]
fn test_blocks_with_else_are_valid() {
    assert!(is_valid(
        "{{#filter array \"person\"}}THING{{else}}OTHER{{/filter}}"
    ));
    assert!(is_valid(
        "{{ #startsWith 'Hello' string }}Hi!{{ else }}Goodbye!{{ /startsWith }}"
    ));
}

#[test]
fn test_quoted_braces_do_not_break_balance() {
    assert!(is_valid(
        "{{#forIn (JSONparse '{\"a\":1, \"b\":2, \"c\":3}' )}}number: {{.}}\n{{/forIn}}"
    ));
}

#[test]
fn test_nested_parens_balance() {
    assert!(is_valid("{{ join ( after ( split str \" \" ) 3 ) \" \" }}"));
    assert!(!is_valid("{{ join ( after ( split str \" \" ) 3 \" \" }}"));
}
