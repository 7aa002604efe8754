use std::io;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn new_captures_caller_line() {
    let line = line!() + 1;
    let err = AnnotatedError::new(Message::new("disk full"));
    assert_eq!(err.file(), "tests.rs");
    assert_eq!(err.line(), line);
    assert_eq!(err.message(), "disk full");
}

#[test]
fn site_is_taken_from_wrapping_helper_caller() {
    #[track_caller]
    fn wrap(reason: &str) -> AnnotatedError {
        AnnotatedError::msg(reason)
    }

    let line = line!() + 1;
    let err = wrap("bad header");
    assert_eq!(err.line(), line);
}

#[test]
fn renders_site_message_and_params() {
    let err = AnnotatedError::at(Site::new("src/disk.rs", 12), Message::new("disk full"))
        .with_param("retry=3")
        .with_param(512_u32);
    assert_eq!(err.to_string(), "disk.rs:12 disk full\nretry=3\n512\n");
}

#[test]
fn renders_without_params() {
    let err = AnnotatedError::at(Site::new("main.rs", 1), Message::new("boom"));
    assert_eq!(err.to_string(), "main.rs:1 boom\n");
}

#[test]
fn with_params_preserves_order() {
    let err = AnnotatedError::at(Site::new("a.rs", 2), Message::new("m"))
        .with_params(["first", "second"])
        .with_param(Param::debug(Some("third")));
    let texts: Vec<String> = err.params().iter().map(Param::text).collect();
    assert_eq!(texts, vec!["first", "second", "Some(\"third\")"]);
    assert_eq!(err.to_string(), "a.rs:2 m\nfirst\nsecond\nSome(\"third\")\n");
}

#[test]
fn sentinel_site_still_renders() {
    let err = AnnotatedError::at(Site::unknown(), Message::new("lost"));
    assert_eq!(err.to_string(), "<unknown>:0 lost\n");
}

#[test]
fn full_path_style_prints_recorded_path() {
    let err = AnnotatedError::at(Site::new("src/storage/disk.rs", 9), Message::new("full"));
    let config = RenderConfig::default().with_path_style(PathStyle::Full);
    assert_eq!(err.render(&config), "src/storage/disk.rs:9 full\n");
    assert_eq!(err.render(&RenderConfig::default()), err.to_string());
}

#[test]
fn wraps_foreign_errors() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "config.toml missing");
    let err = AnnotatedError::at(Site::new("cfg.rs", 4), io_err);
    assert_eq!(err.to_string(), "cfg.rs:4 config.toml missing\n");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("config.toml missing"));
}

#[test]
fn wraps_boxed_errors() {
    let boxed: Box<DynError> = "parse failure".into();
    let line = line!() + 1;
    let err = AnnotatedError::from_boxed(boxed);
    assert_eq!(err.line(), line);
    assert_eq!(err.message(), "parse failure");
}

#[test]
fn underlying_can_be_downcast() {
    let err = AnnotatedError::msg("typed");
    let message = err.underlying().downcast_ref::<Message>();
    assert_eq!(message.map(Message::as_str), Some("typed"));
}

#[test]
fn clones_share_failure_and_params() {
    let err = AnnotatedError::msg("shared").with_param("p");
    let copy = err.clone();
    assert_eq!(copy.to_string(), err.to_string());
    assert_eq!(copy.site(), err.site());
}

#[test]
fn debug_lists_fields() {
    let err = AnnotatedError::at(Site::new("d.rs", 5), Message::new("dbg")).with_param("x");
    let debug = format!("{err:?}");
    assert!(debug.starts_with("AnnotatedError {"));
    assert!(debug.contains("dbg"));
    assert!(debug.contains(r#"Param("x")"#));
}

#[test]
fn annotated_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AnnotatedError>();
}

struct Broken;

impl fmt::Display for Broken {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[derive(Debug)]
struct BrokenFailure;

impl fmt::Display for BrokenFailure {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

impl Error for BrokenFailure {}

#[test]
fn failing_param_display_renders_placeholder() {
    let err = AnnotatedError::at(Site::new("p.rs", 3), Message::new("x"))
        .with_param(Broken)
        .with_param("after");
    assert_eq!(err.to_string(), "p.rs:3 x\n<unprintable>\nafter\n");
    assert_eq!(err.render(&RenderConfig::default()), err.to_string());
}

#[test]
fn failing_failure_display_renders_placeholder() {
    let err = AnnotatedError::at(Site::new("f.rs", 6), BrokenFailure).with_param("p");
    assert_eq!(err.message(), crate::UNPRINTABLE);
    assert_eq!(err.to_string(), "f.rs:6 <unprintable>\np\n");
}
