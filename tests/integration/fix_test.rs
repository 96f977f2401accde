//! End-to-end tests for fix_text on console transcripts.

use pastefix::fixer::{LineEnding, PromptKind};
use pastefix::{fix_text, Fix, IndentStyle, PasteContext};

use crate::helpers::load_fixture;

fn spaces_at(column: usize) -> PasteContext {
    PasteContext::new(column, IndentStyle::new(true, 4))
}

fn fixed(text: &str, ctx: PasteContext) -> String {
    match fix_text(text, &ctx) {
        Fix::Fixed(text) => text,
        other => panic!("expected text to be fixed, got {:?}", other),
    }
}

// ============================================================================
// Console prompts
// ============================================================================

#[test]
fn console_session_at_column_zero() {
    let output = fixed(&load_fixture("console_session.txt"), spaces_at(0));

    insta::assert_snapshot!(output, @r#"
    def greet(name):
        if name:
            print("hello", name)
        else:
            print("hello")

    greet("world")
    "#);
    assert!(output.ends_with("greet(\"world\")\n"));
}

#[test]
fn console_session_inside_a_method() {
    let output = fixed(&load_fixture("console_session.txt"), spaces_at(4));

    assert_eq!(
        output,
        concat!(
            "def greet(name):\n",
            "        if name:\n",
            "            print(\"hello\", name)\n",
            "        else:\n",
            "            print(\"hello\")\n",
            "\n",
            "    greet(\"world\")\n",
        )
    );
}

#[test]
fn numbered_session_merges_wrapped_line() {
    let output = fixed(&load_fixture("numbered_session.txt"), spaces_at(0));

    insta::assert_snapshot!(output, @r#"
    def total(values):
        result = 0
        for value in values:
            result += value * some_really_long_factor_name_that_wrapped
        return result
    "#);
    // The trailing empty line follows a numbered prompt and is merged too.
    assert!(output.ends_with("return result"));
}

#[test]
fn numbered_wrap_collapse_has_no_separator() {
    let text = "  1 def f():\n  2 wrapped\ncontinued";
    assert_eq!(fixed(text, spaces_at(0)), "def f():\n    wrappedcontinued");
}

#[test]
fn malformed_numbered_prefix_is_kept() {
    assert_eq!(PromptKind::classify(" 1x bar"), PromptKind::None);
    let text = "x = [\n 1x bar";
    // No prompt is stripped, only the indentation moves.
    assert_eq!(fixed(text, spaces_at(0)), "x = [\n    1x bar");
}

// ============================================================================
// Plain source
// ============================================================================

#[test]
fn plain_source_at_matching_indent_is_unchanged() {
    let text = load_fixture("plain_source.txt");
    assert_eq!(fix_text(&text, &spaces_at(0)), Fix::Unchanged);
}

#[test]
fn plain_source_is_shifted_to_cursor() {
    let output = fixed(&load_fixture("plain_source.txt"), spaces_at(4));
    assert_eq!(
        output,
        "def area(width, height):\n        return width * height\n\n    print(area(2, 3))\n"
    );
}

#[test]
fn tab_target_uses_tabs() {
    let text = ">>> for x in xs:\n... \tprint(x)\n";
    let ctx = PasteContext::new(1, IndentStyle::Tabs);
    assert_eq!(fixed(text, ctx), "for x in xs:\n\t\tprint(x)\n");
}

// ============================================================================
// Nothing to fix
// ============================================================================

#[test]
fn nothing_to_fix_inputs() {
    for text in ["", "x = 1", ">>> x = 1\n", "\n   \n>>> x = 1\n\n"] {
        assert_eq!(
            fix_text(text, &spaces_at(8)),
            Fix::NothingToFix,
            "input {:?}",
            text
        );
    }
}

// ============================================================================
// Dedent clamping
// ============================================================================

#[test]
fn oversized_dedent_never_eats_code() {
    let text = "def f():\n                    a = 1\n  b = 2\nc = 3";
    assert_eq!(
        fixed(text, spaces_at(0)),
        "def f():\n    a = 1\nb = 2\nc = 3"
    );
}

// ============================================================================
// Line endings
// ============================================================================

#[test]
fn crlf_payload_is_rejoined_with_crlf() {
    let text = ">>> if ok:\r\n...     run()\r\n";
    let output = fixed(text, spaces_at(4));
    assert_eq!(output, "if ok:\r\n        run()\r\n");
    assert_eq!(LineEnding::detect(&output), LineEnding::CrLf);
}

#[test]
fn mixed_endings_split_on_crlf_only() {
    // A lone \n stays inside its line when \r\n is the separator.
    let text = ">>> a = 1\n>>> b = 2\r\n>>> c = 3";
    assert_eq!(fixed(text, spaces_at(0)), "a = 1\n>>> b = 2\r\nc = 3");
}
