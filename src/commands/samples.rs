use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::site::samples::{self, Sample};

#[derive(Debug, Serialize)]
struct SampleView {
    id: &'static str,
    summary: &'static str,
    full_name: Option<String>,
    profession: Option<String>,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let views = views(samples::all());
    ctx.output.emit_lines(&lines(&views), &views)
}

fn views(samples: &[Sample]) -> Vec<SampleView> {
    samples
        .iter()
        .map(|sample| {
            let profile = sample.profile();
            SampleView {
                id: sample.id,
                summary: sample.summary,
                full_name: profile.full_name,
                profession: profile.profession,
            }
        })
        .collect()
}

fn lines(views: &[SampleView]) -> Vec<String> {
    views
        .iter()
        .enumerate()
        .map(|(index, view)| {
            format!(
                "{}. {} - {} ({})",
                index + 1,
                view.id,
                view.profession.as_deref().unwrap_or_default(),
                view.summary
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_sample_as_a_numbered_line() {
        let views = views(samples::all());
        let lines = lines(&views);

        assert_eq!(lines.len(), samples::all().len());
        assert!(lines[0].starts_with("1. student - "));
        assert!(lines.iter().all(|line| !line.contains(" -  (")));
    }
}
