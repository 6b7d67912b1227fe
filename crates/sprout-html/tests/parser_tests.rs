//! Integration tests for tree construction and the document entry points.

use std::collections::HashMap;

use sprout_dom::{Attr, AttrValue, Document, ElementNode, Node};
use sprout_html::{Parser, ParserConfig, parse, parse_with_config};

/// Helper to parse markup that is expected to be well-formed
fn parse_ok(html: &str) -> Document {
    match parse(html) {
        Ok(document) => document,
        Err(err) => panic!("failed to parse {html:?}: {err}"),
    }
}

/// Helper to get the element at `index` among `nodes`
fn element_at(nodes: &[Node], index: usize) -> &ElementNode {
    nodes[index]
        .as_element()
        .unwrap_or_else(|| panic!("node {index} is not an element"))
}

/// Helper to collect attributes as (name, value) pairs, booleans as None
fn attr_pairs(element: &ElementNode) -> Vec<(&str, Option<&str>)> {
    element
        .attrs()
        .iter()
        .map(|attr| (attr.name(), attr.value().as_str()))
        .collect()
}

/// Helper to count elements by (depth, tag), top-level elements at depth 1
fn count_by_depth(nodes: &[Node], depth: usize, counts: &mut HashMap<(usize, String), usize>) {
    for node in nodes {
        if let Node::Element(element) = node {
            *counts.entry((depth, element.tag().to_string())).or_default() += 1;
            count_by_depth(element.children(), depth + 1, counts);
        }
    }
}

#[test]
fn test_end_to_end_document() {
    let doc = parse_ok(
        r#"<div id="app"><h1 class="title">Hi</h1><p>Hello <em>world</em>!</p><br/></div>"#,
    );

    assert_eq!(doc.children().len(), 1);
    let div = element_at(doc.children(), 0);
    assert_eq!(div.tag(), "div");
    assert_eq!(attr_pairs(div), vec![("id", Some("app"))]);

    let tags: Vec<&str> = div
        .children()
        .iter()
        .filter_map(Node::as_element)
        .map(ElementNode::tag)
        .collect();
    assert_eq!(tags, vec!["h1", "p", "br"]);
    assert_eq!(div.children().len(), 3);

    let h1 = element_at(div.children(), 0);
    assert_eq!(attr_pairs(h1), vec![("class", Some("title"))]);
    assert_eq!(h1.text_content(), "Hi");

    let p = element_at(div.children(), 1);
    assert_eq!(p.children().len(), 3);
    assert_eq!(p.children()[0].as_text(), Some("Hello "));
    assert_eq!(element_at(p.children(), 1).tag(), "em");
    assert_eq!(p.children()[2].as_text(), Some("!"));

    let br = element_at(div.children(), 2);
    assert!(br.children().is_empty());
}

#[test]
fn test_indented_document_drops_whitespace_runs() {
    let doc = parse_ok(
        "
<div id=\"app\">
  <h1 class=\"title\">Hi</h1>
  <p data-x=\"1\">Hello <em>world</em>!</p>
  <br/>
</div>",
    );
    let div = element_at(doc.children(), 0);
    assert_eq!(div.children().len(), 3);
    let p = element_at(div.children(), 1);
    assert_eq!(p.attr("data-x").and_then(AttrValue::as_str), Some("1"));
    assert_eq!(p.children()[0].as_text(), Some("Hello "));
    assert_eq!(p.children()[2].as_text(), Some("!"));
}

#[test]
fn test_boolean_attribute() {
    let doc = parse_ok(r#"<input disabled type="text">"#);
    let input = element_at(doc.children(), 0);
    assert_eq!(
        input.attrs(),
        &[Attr::boolean("disabled"), Attr::new("type", "text")]
    );
    assert_eq!(input.attr("disabled"), Some(&AttrValue::True));
    assert_ne!(input.attr("disabled"), Some(&AttrValue::from("true")));
}

#[test]
fn test_attribute_order_and_duplicates() {
    let doc = parse_ok(r#"<x a="1" b="2" a="3"></x>"#);
    let x = element_at(doc.children(), 0);
    assert_eq!(
        attr_pairs(x),
        vec![("a", Some("1")), ("b", Some("2")), ("a", Some("3"))]
    );
}

#[test]
fn test_void_tags_have_no_children() {
    for html in ["<br>", "<br/>", "<br >", "<br />"] {
        let doc = parse_ok(html);
        assert_eq!(doc.children().len(), 1, "{html}");
        let br = element_at(doc.children(), 0);
        assert_eq!(br.tag(), "br");
        assert!(br.children().is_empty(), "{html}");
    }
}

#[test]
fn test_void_tag_siblings_stay_siblings() {
    let doc = parse_ok(r#"<p>a<br>b<img src="x.png">c</p>"#);
    let p = element_at(doc.children(), 0);
    let kinds: Vec<String> = p
        .children()
        .iter()
        .map(|node| match node {
            Node::Element(element) => format!("<{}>", element.tag()),
            Node::Text(text) => text.value().to_string(),
        })
        .collect();
    assert_eq!(kinds, vec!["a", "<br>", "b", "<img>", "c"]);
}

#[test]
fn test_explicit_self_closing_element() {
    let doc = parse_ok("<div><widget/><span></span></div>");
    let div = element_at(doc.children(), 0);
    assert_eq!(div.children().len(), 2);
    let widget = element_at(div.children(), 0);
    assert_eq!(widget.tag(), "widget");
    assert!(widget.children().is_empty());
}

#[test]
fn test_void_classification_is_case_sensitive() {
    let doc = parse_ok("<BR>text</BR>");
    let br = element_at(doc.children(), 0);
    assert_eq!(br.tag(), "BR");
    assert_eq!(br.text_content(), "text");
}

#[test]
fn test_whitespace_between_siblings() {
    let doc = parse_ok("<a><b></b>   <c></c></a>");
    let a = element_at(doc.children(), 0);
    assert_eq!(a.children().len(), 2);
    assert_eq!(element_at(a.children(), 0).tag(), "b");
    assert_eq!(element_at(a.children(), 1).tag(), "c");
}

#[test]
fn test_text_keeps_surrounding_whitespace() {
    let doc = parse_ok("<p>  spaced out \n</p>");
    let p = element_at(doc.children(), 0);
    assert_eq!(p.children().len(), 1);
    assert_eq!(p.children()[0].as_text(), Some("  spaced out \n"));
}

#[test]
fn test_top_level_text_and_elements() {
    let doc = parse_ok("  leading <b>bold</b> trailing");
    assert_eq!(doc.children().len(), 3);
    assert_eq!(doc.children()[0].as_text(), Some("leading "));
    assert_eq!(doc.children()[2].as_text(), Some(" trailing"));
}

#[test]
fn test_empty_and_blank_input() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok(" \n\t\r ").is_empty());
}

#[test]
fn test_quoted_values_may_contain_delimiters() {
    let doc = parse_ok(r#"<a href='/x y' title="a>b/c" rel=next data-empty=""></a>"#);
    let a = element_at(doc.children(), 0);
    assert_eq!(
        attr_pairs(a),
        vec![
            ("href", Some("/x y")),
            ("title", Some("a>b/c")),
            ("rel", Some("next")),
            ("data-empty", Some("")),
        ]
    );
}

#[test]
fn test_whitespace_around_equals() {
    let doc = parse_ok("<a href = \"x\"\n  hidden\n></a>");
    let a = element_at(doc.children(), 0);
    assert_eq!(attr_pairs(a), vec![("href", Some("x")), ("hidden", None)]);
}

#[test]
fn test_close_tag_allows_trailing_whitespace() {
    let doc = parse_ok("<p>x</p  >");
    assert_eq!(element_at(doc.children(), 0).text_content(), "x");
}

#[test]
fn test_whitespace_after_tag_openers() {
    let doc = parse_ok("< div>x</ div>");
    let div = element_at(doc.children(), 0);
    assert_eq!(div.tag(), "div");
    assert_eq!(div.text_content(), "x");

    let doc = parse_ok("<ul>\n< li class=a>one</\n  li  ></ul>");
    let li = element_at(element_at(doc.children(), 0).children(), 0);
    assert_eq!(attr_pairs(li), vec![("class", Some("a"))]);
    assert_eq!(li.text_content(), "one");
}

#[test]
fn test_no_entity_decoding() {
    let doc = parse_ok(r#"<p title="a &amp; b">&lt;tag&gt;</p>"#);
    let p = element_at(doc.children(), 0);
    assert_eq!(p.attr("title").and_then(AttrValue::as_str), Some("a &amp; b"));
    assert_eq!(p.text_content(), "&lt;tag&gt;");
}

#[test]
fn test_element_counts_per_depth() {
    let html = "<ul><li><b></b><b></b></li><li><i></i></li></ul><ul><li></li></ul><p><b></b></p>";
    let doc = parse_ok(html);
    let mut counts = HashMap::new();
    count_by_depth(doc.children(), 1, &mut counts);

    let expected: HashMap<(usize, String), usize> = [
        ((1, "ul"), 2),
        ((1, "p"), 1),
        ((2, "li"), 3),
        ((2, "b"), 1),
        ((3, "b"), 2),
        ((3, "i"), 1),
    ]
    .into_iter()
    .map(|((depth, tag), n)| ((depth, tag.to_string()), n))
    .collect();
    assert_eq!(counts, expected);
}

#[test]
fn test_reserialize_and_reparse() {
    let inputs = [
        r#"<div id="app"><h1 class="title">Hi</h1><p>Hello <em>world</em>!</p><br/></div>"#,
        "\n<ul>\n  <li a=1 b='two' c>one</li>\n  <li>two<img src=x></li>\n</ul>\n",
        r#"<x q='say "hi"'>  padded  <y/></x>tail"#,
        r#"<a x=it's"q></a>"#,
    ];
    for html in inputs {
        let first = parse_ok(html);
        let markup = first.to_html();
        let second = parse_ok(&markup);
        assert_eq!(first, second, "{html} -> {markup}");
    }
}

#[test]
fn test_parser_builder_and_config() {
    let html = "<a><b><c></c></b></a>";
    let config = ParserConfig::default().with_max_depth(3);
    let built = Parser::new(html).with_config(config).parse();
    assert_eq!(built, parse_with_config(html, &config));
    assert!(built.is_ok());
}

#[test]
fn test_default_config_allows_moderate_nesting() {
    let depth = 200;
    let html = format!("{}{}", "<d>".repeat(depth), "</d>".repeat(depth));
    let doc = parse_ok(&html);
    assert_eq!(doc.descendants().count(), depth);
}

#[test]
fn test_parallel_parses_are_independent() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Document>();
    assert_send_sync::<sprout_html::ParseError>();

    let inputs = ["<a>1</a>", "<b><c/></b>", "<ul><li>x</ul>"];
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|html| scope.spawn(move || parse(html)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    for (html, result) in inputs.iter().zip(&results) {
        assert_eq!(result, &parse(html));
    }
    assert!(results[2].is_err());
}
