use super::types::RecommendationItem;

const PAGE_TEMPLATE: &str = include_str!("page.html");
const QUERY_MARKER: &str = "<!-- query -->";
const RESULTS_MARKER: &str = "<!-- results -->";

/// Render the form page with the query echoed into the input and the
/// recommendations (if any) rendered as a table.
///
/// `items` empty with a non-empty query shows a "no recommendations" note;
/// empty with a blank query shows just the form.
pub fn page(query: &str, items: &[RecommendationItem]) -> String {
    PAGE_TEMPLATE
        .replace(QUERY_MARKER, &escape_html(query))
        .replace(RESULTS_MARKER, &results_fragment(query, items))
}

fn results_fragment(query: &str, items: &[RecommendationItem]) -> String {
    if items.is_empty() {
        if query.trim().is_empty() {
            return String::new();
        }
        return r#"<p class="empty">No recommendations found.</p>"#.to_string();
    }

    let mut fragment = String::from(
        "<table>\n\
         <tr><th>Assessment</th><th>Remote Testing</th><th>Adaptive/IRT</th>\
         <th>Duration</th><th>Test Type</th></tr>\n",
    );
    for item in items {
        fragment.push_str(&format!(
            "<tr><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&item.url),
            escape_html(&item.assessment),
            escape_html(&item.remote_testing),
            escape_html(&item.adaptive_support),
            escape_html(&item.duration),
            escape_html(&item.test_type),
        ));
    }
    fragment.push_str("</table>");
    fragment
}

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
