use std::path::PathBuf;

use serde_json::json;
use template_helpers_core::code;
use template_helpers_core::config::HelpersConfig;
use template_helpers_core::fs;
use template_helpers_core::group::HelperGroup;
use template_helpers_core::templates::renderer::TemplateRenderer;

const A_JS: &str = "function foo(a, b, c) {\n  return a + b + c;\n}";

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn renderer(groups: Vec<HelperGroup>) -> TemplateRenderer {
    TemplateRenderer::with_config(&HelpersConfig {
        base_dir: Some(fixtures()),
        groups,
        ..HelpersConfig::default()
    })
}

#[test]
fn read_returns_empty_string_when_file_does_not_exist() {
    let out = renderer(vec![HelperGroup::Fs])
        .render(r#"{{read "fooosos.js"}}"#, &json!({}))
        .unwrap();
    assert_eq!(out, "");
}

#[test]
fn read_injects_file_content() {
    let out = renderer(vec![HelperGroup::Fs])
        .render(r#"{{read "a.js"}}"#, &json!({}))
        .unwrap();
    assert_eq!(out, A_JS);
    assert_eq!(fs::read(fixtures().join("a.js")), A_JS);
}

#[test]
fn embed_fixture_with_and_without_language() {
    let path = fixtures().join("a.js");
    let derived = code::embed(&path, None).unwrap();
    assert_eq!(derived, code::embed(&path, Some("js")).unwrap());
    assert_eq!(derived, format!("```js\n{A_JS}\n```\n"));
}

#[test]
fn embed_markdown_fixture_escapes_backticks() {
    let out = code::embed(fixtures().join("readme.md"), None).unwrap();
    assert_eq!(
        out,
        "```md\n# Usage\n\nRun &#x60make&#x60 then &#x60make install&#x60.\n```\n"
    );
}

#[test]
fn embed_template_fixture_as_html() {
    let out = renderer(HelperGroup::all())
        .render(r#"{{embed "partial.hbs" "html"}}"#, &json!({}))
        .unwrap();
    assert_eq!(out, "```html\n<p>{{name}}</p>\n```\n");
}

#[test]
fn page_combining_all_helpers() {
    let template = concat!(
        "{{embed \"a.js\"}}",
        "{{jsfiddle fiddle}}\n",
        "{{read \"a.js\"}}"
    );
    let out = renderer(HelperGroup::all())
        .render(template, &json!({"fiddle": {"id": "abc"}}))
        .unwrap();
    assert_eq!(
        out,
        format!(
            concat!(
                "```js\n{a}\n```\n",
                "<iframe width=\"100%\" height=\"300\" ",
                "src=\"http://jsfiddle.net/abc/embedded/result,js,html,css/presentation/\" ",
                "allowfullscreen=\"allowfullscreen\" frameborder=\"0\"></iframe>\n",
                "{a}"
            ),
            a = A_JS
        )
    );
}
