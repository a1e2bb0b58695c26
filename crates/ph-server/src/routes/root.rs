//! Usage text served at `/`.

/// Plain-text route listing, returned verbatim on every request.
pub const USAGE: &str =
    "pipeline-hardening-poc\n\nGET /health  -> status do servidor\nGET /info    -> metadata da app\n";

/// GET / — served as `text/plain; charset=utf-8`.
pub async fn usage() -> &'static str {
    USAGE
}
