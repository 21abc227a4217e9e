//! Render documents and articles as HTML

use crate::content::document::{Block, CodeBlock, Highlight, Inline, TokenSpan};
use crate::content::{Document, Post};

use super::text::html_escape;

/// Converts a [`Document`] into escaped HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    pub line_numbers: bool,
}

impl HtmlRenderer {
    pub fn new(line_numbers: bool) -> Self {
        Self { line_numbers }
    }

    /// Render a document body
    pub fn render(&self, document: &Document) -> String {
        let mut html = String::new();
        self.push_blocks(&document.blocks, &mut html);
        html
    }

    /// Render a complete article: tags, title, meta line, body and closing note
    pub fn article(&self, post: &Post, document: &Document) -> String {
        let tags: String = post
            .tags
            .iter()
            .map(|t| format!(r#"<span class="tag">{}</span>"#, html_escape(t)))
            .collect();

        format!(
            concat!(
                r#"<article id="{slug}">"#,
                "\n<header>\n",
                r#"<div class="tags">{tags}</div>"#,
                "\n<h1>{title}</h1>\n",
                r#"<div class="meta"><time datetime="{date}">{display_date}</time> · <span>{read_time}</span></div>"#,
                "\n</header>\n",
                r#"<div class="content">"#,
                "\n{body}</div>\n",
                r#"<footer><p>Thanks for reading!</p></footer>"#,
                "\n</article>\n"
            ),
            slug = post.slug(),
            tags = tags,
            title = html_escape(&post.title),
            date = html_escape(&post.date),
            display_date = html_escape(&post.display_date()),
            read_time = html_escape(&post.read_time),
            body = self.render(document),
        )
    }

    fn push_blocks(&self, blocks: &[Block], html: &mut String) {
        for block in blocks {
            match block {
                Block::Heading { level, content } => {
                    html.push_str(&format!("<h{}>", level));
                    push_inlines(content, html);
                    html.push_str(&format!("</h{}>\n", level));
                }
                Block::Paragraph { content } => {
                    html.push_str("<p>");
                    push_inlines(content, html);
                    html.push_str("</p>\n");
                }
                Block::List(list) => {
                    match list.start {
                        Some(1) => html.push_str("<ol>\n"),
                        Some(start) => html.push_str(&format!("<ol start=\"{}\">\n", start)),
                        None => html.push_str("<ul>\n"),
                    }
                    for item in &list.items {
                        html.push_str("<li>");
                        // tight items hold a single paragraph; skip the <p> wrapper
                        match &item.blocks[..] {
                            [Block::Paragraph { content }] => push_inlines(content, html),
                            blocks => {
                                html.push('\n');
                                self.push_blocks(blocks, html);
                            }
                        }
                        html.push_str("</li>\n");
                    }
                    html.push_str(if list.start.is_some() {
                        "</ol>\n"
                    } else {
                        "</ul>\n"
                    });
                }
                Block::Code(code) => {
                    html.push_str(&self.code_block(code));
                    html.push('\n');
                }
                Block::Quote { blocks } => {
                    html.push_str("<blockquote>\n");
                    self.push_blocks(blocks, html);
                    html.push_str("</blockquote>\n");
                }
                Block::Rule => html.push_str("<hr />\n"),
            }
        }
    }

    fn code_block(&self, code: &CodeBlock) -> String {
        let lang = code.language.as_deref().unwrap_or("plaintext");
        let lines: Vec<String> = match &code.highlight {
            Highlight::Tokens(lines) => lines.iter().map(|spans| styled_line(spans)).collect(),
            Highlight::Plain => code.code.lines().map(html_escape).collect(),
        };

        if self.line_numbers {
            add_line_numbers(&lines, lang)
        } else {
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                html_escape(lang),
                lines.join("\n")
            )
        }
    }
}

fn push_inlines(inlines: &[Inline], html: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => html.push_str(&html_escape(text)),
            Inline::Code(code) => {
                html.push_str("<code>");
                html.push_str(&html_escape(code));
                html.push_str("</code>");
            }
            Inline::Strong(content) => wrap("strong", content, html),
            Inline::Emphasis(content) => wrap("em", content, html),
            Inline::Strikethrough(content) => wrap("del", content, html),
            Inline::Link { url, content } => {
                html.push_str(&format!(r#"<a href="{}">"#, html_escape(url)));
                push_inlines(content, html);
                html.push_str("</a>");
            }
            Inline::Image { url, alt } => html.push_str(&format!(
                r#"<img src="{}" alt="{}">"#,
                html_escape(url),
                html_escape(alt)
            )),
            Inline::SoftBreak => html.push('\n'),
            Inline::LineBreak => html.push_str("<br />\n"),
        }
    }
}

fn wrap(tag: &str, content: &[Inline], html: &mut String) {
    html.push_str(&format!("<{}>", tag));
    push_inlines(content, html);
    html.push_str(&format!("</{}>", tag));
}

/// One highlighted source line, without its trailing newline
fn styled_line(spans: &[TokenSpan]) -> String {
    let mut line = String::new();
    for span in spans {
        let text = span.text.trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            continue;
        }
        let mut style = format!("color:{}", span.style.color.hex());
        if span.style.bold {
            style.push_str(";font-weight:bold");
        }
        if span.style.italic {
            style.push_str(";font-style:italic");
        }
        if span.style.underline {
            style.push_str(";text-decoration:underline");
        }
        line.push_str(&format!(
            r#"<span style="{}">{}</span>"#,
            style,
            html_escape(text)
        ));
    }
    line
}

/// Add a line-number gutter to rendered code lines
fn add_line_numbers(lines: &[String], lang: &str) -> String {
    let gutter: Vec<String> = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect();

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
        html_escape(lang),
        gutter.join("\n"),
        lines.join("\n")
    )
}
