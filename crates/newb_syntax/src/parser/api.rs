/// Check a token list against the Newb grammar.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token list produced by `newb_syntax::lexer`. No trailing EOF token is needed.
///
/// ## Errors
/// Returns the first [`CompileError`] found; parsing never continues past it.
#[tracing::instrument(level = "debug", skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<ParseSummary, CompileError> {
    Parser::new(tokens).parse()
}
