//! Integration tests for rendering static virtual-node trees.

use reactive_vdom_html::{
	IntoNode, Node, PropertyValue, Renderer, VElement, VText, h, render, svg,
};
use rstest::rstest;

async fn html(node: impl IntoNode) -> String {
	render(&node.into_node()).await
}

#[rstest]
#[tokio::test]
async fn test_absent_node_renders_nothing() {
	assert_eq!(html(Node::Empty).await, "");
	assert_eq!(html(None::<VElement>).await, "");
}

#[rstest]
#[tokio::test]
async fn test_simple_element() {
	assert_eq!(html(VElement::new("span")).await, "<span></span>");
}

#[rstest]
#[tokio::test]
async fn test_inner_text() {
	let node = VElement::new("span").child(VText::new("hello"));
	assert_eq!(html(node).await, "<span>hello</span>");
}

#[rstest]
#[tokio::test]
async fn test_properties_become_attributes() {
	let node = VElement::new("form")
		.raw_property("className", "login")
		.raw_property("acceptCharset", "ISO-8859-1")
		.raw_property("accessKey", "h");
	assert_eq!(
		html(node).await,
		"<form class=\"login\" accept-charset=\"ISO-8859-1\" accesskey=\"h\"></form>"
	);
}

#[rstest]
#[case("input", "<input>")]
#[case("br", "<br>")]
#[case("IMG", "<img>")]
#[tokio::test]
async fn test_void_elements_have_no_end_tag(#[case] tag: &str, #[case] expected: &str) {
	assert_eq!(html(VElement::new(tag)).await, expected);
	assert_eq!(html(h(tag)).await, expected);
}

#[rstest]
#[tokio::test]
async fn test_non_standard_properties_skipped() {
	let node = VElement::new("web-component")
		.on("click", || {})
		.raw_property("random-prop", "random!");
	assert_eq!(html(node).await, "<web-component></web-component>");
}

#[rstest]
#[tokio::test]
async fn test_null_properties_skipped() {
	let node = VElement::new("web-component")
		.raw_property("className", PropertyValue::Null)
		.raw_property("id", None::<String>);
	assert_eq!(html(node).await, "<web-component></web-component>");
}

#[rstest]
#[tokio::test]
async fn test_style_map_renders_css() {
	let node = VElement::new("div")
		.style("background", "black")
		.style("color", "red")
		.style("zIndex", "1");
	assert_eq!(
		html(node).await,
		"<div style=\"background: black; color: red; z-index: 1;\"></div>"
	);
}

#[rstest]
#[tokio::test]
async fn test_boolean_properties() {
	let node = VElement::new("input")
		.raw_property("autofocus", true)
		.raw_property("disabled", false);
	assert_eq!(html(node).await, "<input autofocus>");
}

#[rstest]
#[case(PropertyValue::Bool(true), "<a href=\"/images/xxx.jpg\" download></a>")]
#[case(PropertyValue::from("sfw"), "<a href=\"/images/xxx.jpg\" download=\"sfw\"></a>")]
#[case(PropertyValue::Bool(false), "<a href=\"/images/xxx.jpg\"></a>")]
#[tokio::test]
async fn test_overloaded_boolean_download(#[case] download: PropertyValue, #[case] expected: &str) {
	let node = VElement::new("a")
		.raw_property("href", "/images/xxx.jpg")
		.raw_property("download", download);
	assert_eq!(html(node).await, expected);
}

#[rstest]
#[tokio::test]
async fn test_any_attributes() {
	let node = VElement::new("circle")
		.attribute("cx", "60")
		.attribute("cy", "60")
		.attribute("r", "50");
	assert_eq!(html(node).await, "<circle cx=\"60\" cy=\"60\" r=\"50\"></circle>");
}

#[rstest]
#[tokio::test]
async fn test_null_attribute_keeps_separator() {
	let node = VElement::new("circle")
		.attribute("cx", "60")
		.attribute("cy", "60")
		.attribute("r", PropertyValue::Null);
	assert_eq!(html(node).await, "<circle cx=\"60\" cy=\"60\" ></circle>");
}

#[rstest]
#[tokio::test]
async fn test_nested_children() {
	let node = VElement::new("div")
		.child(
			VElement::new("div")
				.raw_property("id", "a-div")
				.child(VElement::new("div").child("HI!")),
		)
		.child(VElement::new("div").raw_property("className", "just-another-div"));
	assert_eq!(
		html(node).await,
		"<div><div id=\"a-div\"><div>HI!</div></div><div class=\"just-another-div\"></div></div>"
	);
}

#[rstest]
#[tokio::test]
async fn test_attribute_names_values_and_text_encoded() {
	let node = VElement::new("div")
		.attribute("data-\"hi\"", "\"hello\"")
		.child("<span>sup</span>");
	assert_eq!(
		html(node).await,
		"<div data-&quot;hi&quot;=\"&quot;hello&quot;\">&lt;span&gt;sup&lt;/span&gt;</div>"
	);
}

#[rstest]
#[tokio::test]
async fn test_script_contents_not_encoded() {
	let raw = VElement::new("div").child(VElement::new("script").child("console.log(\"zzz\");"));
	let hyper = h("div").child(h("script").child("console.log(\"zzz\");"));
	let expected = "<div><script>console.log(\"zzz\");</script></div>";
	assert_eq!(html(raw).await, expected);
	assert_eq!(html(hyper).await, expected);
}

#[rstest]
#[tokio::test]
async fn test_inner_html_emitted_literally() {
	let node = VElement::new("div")
		.inner_html("<span>sup</span>")
		.child("ignored");
	assert_eq!(html(node).await, "<div><span>sup</span></div>");
}

#[rstest]
#[tokio::test]
async fn test_thunk_renders_its_result() {
	let text = "hello".to_string();
	let node = Node::thunk(move || VElement::new("span").child(text.clone()));
	assert_eq!(html(node).await, "<span>hello</span>");
}

#[rstest]
#[tokio::test]
async fn test_tag_lowercased() {
	let node = VElement::new("SPAN").child("hello");
	assert_eq!(html(node).await, "<span>hello</span>");
}

#[rstest]
#[tokio::test]
async fn test_hyperscript() {
	assert_eq!(html(h("span").child("test")).await, "<span>test</span>");
	assert_eq!(
		html(h("div#main.a.b").property("className", "c")).await,
		"<div class=\"a b c\" id=\"main\"></div>"
	);
}

#[rstest]
#[tokio::test]
async fn test_utf8_preserved_and_specials_escaped() {
	let node = h("span").child("测试&\"'<>");
	assert_eq!(html(node).await, "<span>测试&amp;&quot;&#39;&lt;&gt;</span>");
}

#[rstest]
#[tokio::test]
async fn test_svg_default_namespace_attribute() {
	let node = svg("svg").property("viewBox", "0 0 10 10");
	assert_eq!(html(node).await, "<svg viewBox=\"0 0 10 10\"></svg>");
}

#[rstest]
#[tokio::test]
async fn test_svg_xlink_attribute() {
	let node = svg("use").property("xlink:href", "/abc.jpg");
	assert_eq!(html(node).await, "<use xlink:href=\"/abc.jpg\"></use>");
}

#[rstest]
#[tokio::test]
async fn test_input_value() {
	let node = h("input").property("type", "submit").property("value", "add");
	assert_eq!(html(node).await, "<input type=\"submit\" value=\"add\">");
}

#[rstest]
#[tokio::test]
async fn test_numbers_render_as_text() {
	let node = h("p").child(42).child(" / ").child(0.5);
	assert_eq!(html(node).await, "<p>42 / 0.5</p>");
}

#[rstest]
#[tokio::test]
async fn test_try_new_rejects_empty_tag() {
	assert_eq!(
		VElement::try_new("").unwrap_err(),
		reactive_vdom_html::Error::EmptyTagName
	);
	assert_eq!(html(h("")).await, "<div></div>");
}

#[rstest]
#[tokio::test]
async fn test_renderer_is_reusable() {
	// Arrange
	let renderer = Renderer::new();
	let node = h("li").child("item").into_node();

	// Act
	let first = renderer.render(&node).await;
	let second = renderer.clone().render(&node).await;

	// Assert
	assert_eq!(first, "<li>item</li>");
	assert_eq!(first, second);
}

#[rstest]
#[case(1e21, "<svg width=\"1e+21\"></svg>")]
#[case(1.5e-7, "<svg width=\"1.5e-7\"></svg>")]
#[case(60.0, "<svg width=\"60\"></svg>")]
#[tokio::test]
async fn test_number_attribute_formatting(#[case] width: f64, #[case] expected: &str) {
	let node = VElement::new("svg").raw_property("width", width);
	assert_eq!(html(node).await, expected);
}
