use crate::cli::RenderArgs;
use crate::context::AppContext;
use crate::error::AppResult;

use super::source;

pub fn run(ctx: &AppContext, args: RenderArgs) -> AppResult<()> {
    let mut session = source::build_session(ctx, &args.source)?;
    session.generate();

    let options = ctx.export_options(&args.target);
    let report = session.export(&options)?;

    let mut lines = vec![format!(
        "wrote {} ({} bytes)",
        report.index_path.display(),
        report.bytes
    )];
    if let Some(path) = &report.stylesheet_path {
        lines.push(format!("wrote {}", path.display()));
    }

    ctx.output.emit_lines(&lines, &report)
}
