//! Asset minification for JS and CSS files.
//!
//! Uses oxc for JavaScript and a cssparser token pass for CSS.

use cssparser::{ParseError, Parser, ParserInput, Token};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier as OxcCompressor, MinifierOptions};
use oxc::parser::Parser as ScriptParser;
use oxc::span::SourceType;
use thiserror::Error;

use super::TransformKind;

/// Minification failure. Always fatal for the file being processed.
#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("content is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("script rejected: {0}")]
    Script(String),

    #[error("stylesheet rejected: {0}")]
    Style(String),
}

/// Script and stylesheet minification engines.
pub trait Minifier: Send + Sync {
    /// Minify script source text.
    fn script(&self, source: &str) -> Result<String, MinifyError>;

    /// Minify raw stylesheet content.
    fn style(&self, source: &[u8]) -> Result<String, MinifyError>;
}

/// oxc + cssparser minifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct OxcMinifier;

impl Minifier for OxcMinifier {
    fn script(&self, source: &str) -> Result<String, MinifyError> {
        minify_js(source)
    }

    fn style(&self, source: &[u8]) -> Result<String, MinifyError> {
        minify_css(std::str::from_utf8(source)?)
    }
}

/// Minify JavaScript source code.
///
/// Sources are parsed as classic scripts: top-level bindings are globals
/// and keep their names.
pub fn minify_js(source: &str) -> Result<String, MinifyError> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs().with_module(false);
    let ret = ScriptParser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(MinifyError::Script(message));
    }

    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = OxcCompressor::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(code)
}

/// Minify CSS source code.
///
/// Works on the token stream only: comments are dropped (except `/*! ... */`),
/// whitespace runs collapse to one space or vanish next to punctuation, and the
/// trailing `;` of a block goes. Every other token is copied from the source
/// byte for byte, so quoted strings, `url()` values and unknown or legacy
/// syntax (`*zoom: 1`) pass through untouched.
pub fn minify_css(source: &str) -> Result<String, MinifyError> {
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    let mut out = String::with_capacity(source.len());
    write_css_tokens(&mut parser, &mut out)
        .map_err(|err| MinifyError::Style(format!("{:?}", err.kind)))?;
    Ok(out)
}

fn write_css_tokens<'i>(
    parser: &mut Parser<'i, '_>,
    out: &mut String,
) -> Result<(), ParseError<'i, ()>> {
    let mut pending_space = false;
    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        let raw = parser.slice_from(start);

        match &token {
            Token::WhiteSpace(_) => {
                pending_space = true;
                continue;
            }
            Token::Comment(text) if !text.starts_with('!') => {
                pending_space = true;
                continue;
            }
            _ => {}
        }

        if pending_space && needs_space(out.chars().last(), raw.chars().next()) {
            out.push(' ');
        }
        pending_space = false;
        out.push_str(raw);

        let close = match token {
            Token::Function(_) | Token::ParenthesisBlock => ')',
            Token::SquareBracketBlock => ']',
            Token::CurlyBracketBlock => '}',
            _ => continue,
        };
        parser.parse_nested_block(|nested| write_css_tokens(nested, out))?;
        if close == '}' && out.ends_with(';') {
            out.pop();
        }
        out.push(close);
    }
}

/// Whether a collapsed whitespace run between `prev` and `next` must stay.
///
/// Space before `:` and `(` is kept: `a :hover` and `and (` differ from their
/// joined forms.
fn needs_space(prev: Option<char>, next: Option<char>) -> bool {
    match (prev, next) {
        (Some(prev), Some(next)) => {
            !matches!(prev, '{' | '}' | ';' | ',' | '>' | '(' | '[' | ':' | '=')
                && !matches!(next, '{' | '}' | ';' | ',' | '>' | ')' | ']' | '!' | '=')
        }
        _ => false,
    }
}

/// Apply `kind` to `content`.
pub fn transform(
    kind: TransformKind,
    content: Vec<u8>,
    minifier: &dyn Minifier,
) -> Result<Vec<u8>, MinifyError> {
    match kind {
        TransformKind::Passthrough => Ok(content),
        TransformKind::MinifyScript => {
            let source = std::str::from_utf8(&content)?;
            Ok(minifier.script(source)?.into_bytes())
        }
        TransformKind::MinifyStyle => Ok(minifier.style(&content)?.into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
        // greeting helper
        function greet(name) {
            var message = "Hello, " + name + "!";
            return message;
        }
        console.log(greet("world"));
    "#;

    #[test]
    fn test_minify_js_shrinks_and_drops_comments() {
        let minified = minify_js(SCRIPT).unwrap();
        assert!(!minified.is_empty());
        assert!(minified.len() < SCRIPT.len());
        assert!(!minified.contains("greeting helper"));
        assert!(minified.contains("console.log"));
    }

    #[test]
    fn test_minify_js_keeps_top_level_names() {
        let minified = minify_js("function initWidget(el) { el.hidden = false; }").unwrap();
        assert!(minified.contains("initWidget"));
    }

    #[test]
    fn test_minify_js_syntax_error() {
        let result = minify_js("function (");
        assert!(matches!(result, Err(MinifyError::Script(_))));
    }

    #[test]
    fn test_minify_css() {
        let source = "/* layout */\nbody {\n    color: red ;\n    margin: 0;\n}\n\n.menu > li ,\n.menu a:hover {\n    display: none;\n}\n";
        assert_eq!(
            minify_css(source).unwrap(),
            "body{color:red;margin:0}.menu>li,.menu a:hover{display:none}"
        );
    }

    #[test]
    fn test_minify_css_keeps_quotes_verbatim() {
        let source = r#"
            body { font-family: "Helvetica", 'Open Sans'; }
            .logo { background: url("img/a.png") no-repeat; }
            input[type="text"] { border: 0; }
            .note::before { content: "a  b"; }
        "#;
        assert_eq!(
            minify_css(source).unwrap(),
            concat!(
                r#"body{font-family:"Helvetica",'Open Sans'}"#,
                r#".logo{background:url("img/a.png") no-repeat}"#,
                r#"input[type="text"]{border:0}"#,
                r#".note::before{content:"a  b"}"#,
            )
        );
    }

    #[test]
    fn test_minify_css_accepts_legacy_hacks() {
        let minified = minify_css(".x { *zoom: 1; _height: 1px; }").unwrap();
        assert_eq!(minified, ".x{*zoom:1;_height:1px}");
    }

    #[test]
    fn test_minify_css_keeps_significant_spaces() {
        let source = "@media screen and (min-width: 600px) {\n  a :hover { width: calc(100% - 2px); }\n}\n";
        assert_eq!(
            minify_css(source).unwrap(),
            "@media screen and (min-width:600px){a :hover{width:calc(100% - 2px)}}"
        );
    }

    #[test]
    fn test_minify_css_keeps_license_comment() {
        let minified = minify_css("/*! v1 | MIT */\na { color: red; }").unwrap();
        assert_eq!(minified, "/*! v1 | MIT */ a{color:red}");
    }

    #[test]
    fn test_style_rejects_invalid_utf8() {
        let result = OxcMinifier.style(&[0xff, 0xfe, b'{']);
        assert!(matches!(result, Err(MinifyError::Utf8(_))));
    }

    #[test]
    fn test_transform_passthrough_is_identity() {
        let bytes = vec![0x89, b'P', b'N', b'G', 0x00, 0xff];
        let out = transform(TransformKind::Passthrough, bytes.clone(), &OxcMinifier).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn test_transform_script_requires_utf8() {
        let result = transform(TransformKind::MinifyScript, vec![0xff, 0xfe], &OxcMinifier);
        assert!(matches!(result, Err(MinifyError::Utf8(_))));
    }

    #[test]
    fn test_transform_dispatches_by_kind() {
        let out = transform(
            TransformKind::MinifyStyle,
            b"a {\n  margin: 0;\n}\n".to_vec(),
            &OxcMinifier,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a{margin:0}");
    }
}
