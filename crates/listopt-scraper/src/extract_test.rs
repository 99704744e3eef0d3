use super::*;

const SOURCE_URL: &str = "https://www.amazon.com/dp/B08N5WRWNW";

fn full_page() -> String {
    r##"<!doctype html>
<html>
<head><title>Amazon.com: Echo Dot</title></head>
<body>
  <div id="wayfinding-breadcrumbs_feature_div">
    <ul>
      <li><a href="/electronics">Electronics</a></li>
      <li><a href="/smart-home">Smart Home</a></li>
    </ul>
  </div>
  <span id="productTitle">
      Echo Dot (4th Gen) | Smart speaker with Alexa
  </span>
  <a id="bylineInfo" href="/stores/Amazon">Visit the Amazon Store</a>
  <span id="acrPopover" title="4.7 out of 5 stars"><span class="a-icon-alt">4.7 out of 5 stars</span></span>
  <span id="acrCustomerReviewText">125,000 ratings</span>
  <span class="a-price"><span class="a-price-whole">49.<span class="a-price-decimal"></span></span></span>
  <img id="landingImage" src="https://m.media-amazon.com/images/I/small.jpg"
       data-old-hires="https://m.media-amazon.com/images/I/large.jpg">
  <div id="altImages">
    <img src="https://m.media-amazon.com/images/I/alt1.jpg">
    <img src="https://m.media-amazon.com/images/I/alt1.jpg">
    <img src="data:image/gif;base64,R0lGOD">
  </div>
  <div id="feature-bullets">
    <ul>
      <li><span class="a-list-item"> Meet the Echo Dot </span></li>
      <li><span class="a-list-item">Voice control your music</span></li>
      <li><span class="a-list-item">   </span></li>
    </ul>
  </div>
  <div id="productDescription"><p>
     Our most popular smart speaker.
  </p></div>
  <div id="detailBullets">
    Best Sellers Rank: #1,234 in Electronics (See Top 100)
  </div>
</body>
</html>"##
        .to_string()
}

#[test]
fn extracts_core_fields() {
    let record = extract_product(&full_page(), SOURCE_URL).expect("record");
    assert_eq!(record.asin, "B08N5WRWNW");
    assert_eq!(record.title, "Echo Dot (4th Gen) | Smart speaker with Alexa");
    assert_eq!(record.brand, "Visit the Amazon Store");
    assert_eq!(record.price.as_deref(), Some("49."));
    assert_eq!(record.description, "Our most popular smart speaker.");
}

#[test]
fn bullets_are_trimmed_and_blank_items_dropped() {
    let record = extract_product(&full_page(), SOURCE_URL).expect("record");
    assert_eq!(
        record.bullets,
        vec!["Meet the Echo Dot", "Voice control your music"]
    );
}

#[test]
fn extracts_supplemental_fields() {
    let record = extract_product(&full_page(), SOURCE_URL).expect("record");
    assert_eq!(record.rating, Some(4.7));
    assert_eq!(record.review_count, Some(125_000));
    assert_eq!(record.category.as_deref(), Some("Electronics"));
    assert_eq!(record.bsr, Some(1_234));
}

#[test]
fn images_prefer_hi_res_and_skip_duplicates_and_inline_data() {
    let record = extract_product(&full_page(), SOURCE_URL).expect("record");
    assert_eq!(
        record.images,
        vec![
            "https://m.media-amazon.com/images/I/large.jpg",
            "https://m.media-amazon.com/images/I/alt1.jpg",
        ]
    );
}

#[test]
fn asin_comes_from_source_url_not_markup() {
    let html = r#"<html><body><a href="/dp/B000000000">other</a></body></html>"#;
    let record = extract_product(html, "https://www.amazon.com/s?k=echo").expect("record");
    assert_eq!(record.asin, "");

    let record = extract_product(html, "https://www.amazon.com/x/dp/B08N5WRWNW/ref=1")
        .expect("record");
    assert_eq!(record.asin, "B08N5WRWNW");
}

#[test]
fn brand_falls_back_to_contributor_link() {
    let html = r#"<html><body>
        <a class="a-link-normal contributorNameID" href="/author">Jane Author</a>
    </body></html>"#;
    let record = extract_product(html, SOURCE_URL).expect("record");
    assert_eq!(record.brand, "Jane Author");
}

#[test]
fn empty_byline_does_not_fall_back() {
    let html = r#"<html><body>
        <a id="bylineInfo">   </a>
        <a class="a-link-normal contributorNameID" href="/author">Jane Author</a>
        <div id="productDescription"><p></p></div>
        <div id="feature-bullets"><ul><li>Loud</li></ul></div>
    </body></html>"#;
    let record = extract_product(html, SOURCE_URL).expect("record");
    assert_eq!(record.brand, "");
    assert_eq!(record.description, "");
}

#[test]
fn description_falls_back_to_feature_bullets_block() {
    let html = r#"<html><body>
        <div id="feature-bullets"><ul><li>Loud</li><li>Small</li></ul></div>
    </body></html>"#;
    let record = extract_product(html, SOURCE_URL).expect("record");
    assert_eq!(record.description, "Loud Small");
    assert_eq!(record.bullets, vec!["Loud", "Small"]);
}

#[test]
fn rating_falls_back_to_icon_alt_text() {
    let html = r#"<html><body><span class="a-icon-alt">4.2 out of 5 stars</span></body></html>"#;
    let record = extract_product(html, SOURCE_URL).expect("record");
    assert_eq!(record.rating, Some(4.2));
}

#[test]
fn out_of_range_rating_is_ignored() {
    let html = r#"<html><body><span id="acrPopover" title="47 out of 5"></span></body></html>"#;
    let record = extract_product(html, SOURCE_URL).expect("record");
    assert_eq!(record.rating, None);
}

#[test]
fn markup_without_product_nodes_yields_empty_record() {
    let html = "<html><body><div>Nothing to see here</div></body></html>";
    let record = extract_product(html, SOURCE_URL).expect("parsed markup is never None");
    assert_eq!(record.asin, "B08N5WRWNW");
    assert!(record.title.is_empty());
    assert!(record.brand.is_empty());
    assert!(record.price.is_none());
    assert!(record.description.is_empty());
    assert!(record.bullets.is_empty());
    assert!(record.images.is_empty());
    assert!(record.rating.is_none());
    assert!(record.review_count.is_none());
    assert!(record.category.is_none());
    assert!(record.bsr.is_none());
}

#[test]
fn unclosed_tags_still_parse() {
    let html = "<html><body><span id=\"productTitle\">Half open";
    let record = extract_product(html, SOURCE_URL).expect("record");
    assert_eq!(record.title, "Half open");
}

#[test]
fn empty_body_is_not_markup() {
    assert!(extract_product("", SOURCE_URL).is_none());
    assert!(extract_product("  \n\t", SOURCE_URL).is_none());
}

#[test]
fn plain_text_body_is_not_markup() {
    assert!(extract_product("Service Unavailable", SOURCE_URL).is_none());
}

#[test]
fn json_error_body_is_not_markup() {
    let body = r#"{"message": "Invalid api key"}"#;
    assert!(extract_product(body, SOURCE_URL).is_none());
}

#[test]
fn leading_byte_order_mark_is_tolerated() {
    let html = "\u{feff}<html><body><span id=\"productTitle\">BOM</span></body></html>";
    let record = extract_product(html, SOURCE_URL).expect("record");
    assert_eq!(record.title, "BOM");
}
