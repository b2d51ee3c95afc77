use serde::Serialize;

use crate::cli::PreviewArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::export;
use crate::site::ProfileRecord;

use super::source;

#[derive(Debug, Serialize)]
struct PreviewPayload<'a> {
    profile: &'a ProfileRecord,
    html: &'a str,
    css: &'a str,
    digest: String,
}

pub fn run(ctx: &AppContext, args: PreviewArgs) -> AppResult<()> {
    let mut session = source::build_session(ctx, &args.source)?;
    let record = session.record();
    let site = session.generate();

    let payload = PreviewPayload {
        profile: &record,
        html: &site.html,
        css: &site.css,
        digest: export::site_digest(site),
    };

    ctx.output.emit_document(&site.inlined(), &payload)
}
